//! Per-room enemy rolls.

use crate::content::EnemyArchetype;
use crate::types::{RoomCoord, WorldPos};
use crate::world::Chunk;

use super::model::EnemySpawn;
use super::rng::LevelRng;

pub(super) struct EnemyRollContext<'a> {
    pub chunk: &'a Chunk,
    pub room: RoomCoord,
    pub mob_cap: u32,
    pub spawn_probability_percent: u32,
    pub archetypes: &'a [EnemyArchetype],
}

/// Rolls once per standable tile, bottom row first, until the cap is reached.
pub(super) fn roll_room_enemies(
    context: &EnemyRollContext<'_>,
    rng: &mut LevelRng,
) -> Vec<EnemySpawn> {
    let mut spawns = Vec::new();
    for tile in context.chunk.standable_tiles() {
        if spawns.len() as u32 >= context.mob_cap {
            break;
        }
        if !rng.roll_percent(context.spawn_probability_percent) {
            continue;
        }
        let Some(archetype) = rng.pick(context.archetypes) else {
            break;
        };
        spawns.push(EnemySpawn {
            archetype: archetype.id.clone(),
            room: context.room,
            tile,
            position: WorldPos::on_tile(
                context.room,
                tile,
                context.chunk.size(),
                archetype.spawn_y_offset(),
            ),
        });
    }
    spawns
}
