//! Stable handles for the actors a generated level places.

use slotmap::SlotMap;

use crate::mapgen::GeneratedLevel;
use crate::types::{ActorId, RoomCoord, WorldPos};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ActorKind {
    Player,
    /// Archetype id of the placed enemy.
    Enemy(String),
}

#[derive(Clone, Debug)]
pub struct Actor {
    pub id: ActorId,
    pub kind: ActorKind,
    pub room: RoomCoord,
    pub position: WorldPos,
}

pub struct Roster {
    actors: SlotMap<ActorId, Actor>,
    player_id: ActorId,
}

impl Roster {
    /// The player first, then every enemy in placement order.
    pub fn from_level(level: &GeneratedLevel) -> Self {
        let mut actors = SlotMap::with_key();
        let player_id = actors.insert_with_key(|id| Actor {
            id,
            kind: ActorKind::Player,
            room: level.player.room,
            position: level.player.position,
        });
        for spawn in &level.enemies {
            actors.insert_with_key(|id| Actor {
                id,
                kind: ActorKind::Enemy(spawn.archetype.clone()),
                room: spawn.room,
                position: spawn.position,
            });
        }
        Self { actors, player_id }
    }

    pub fn get(&self, id: ActorId) -> Option<&Actor> {
        self.actors.get(id)
    }

    pub fn player_id(&self) -> ActorId {
        self.player_id
    }

    pub fn player(&self) -> Option<&Actor> {
        self.actors.get(self.player_id)
    }

    pub fn enemies(&self) -> impl Iterator<Item = &Actor> {
        self.actors.values().filter(|actor| actor.kind != ActorKind::Player)
    }

    pub fn remove(&mut self, id: ActorId) -> Option<Actor> {
        self.actors.remove(id)
    }

    pub fn len(&self) -> usize {
        self.actors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actors.is_empty()
    }
}
