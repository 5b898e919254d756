//! Public data models for generated levels and the actors placed in them.

use serde::Serialize;
use xxhash_rust::xxh3::xxh3_64;

use crate::rooms::RoomType;
use crate::types::{Direction, Pos, Rect, RoomCoord, WorldPos};

use super::path::SolutionPath;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PlayerSpawn {
    pub room: RoomCoord,
    /// Chunk-local tile.
    pub tile: Pos,
    pub position: WorldPos,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EnemySpawn {
    pub archetype: String,
    pub room: RoomCoord,
    pub tile: Pos,
    pub position: WorldPos,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GeneratedLevel {
    pub seed: i32,
    pub bounds: Rect,
    pub level_width: usize,
    pub level_height: usize,
    pub chunk_size: usize,
    /// Row-major, row 0 (the bottom row) first.
    pub room_types: Vec<RoomType>,
    pub path: SolutionPath,
    pub player: PlayerSpawn,
    /// In placement order.
    pub enemies: Vec<EnemySpawn>,
    /// Cap in effect for each row, in processing order (top row first).
    pub mob_caps: Vec<u32>,
}

impl GeneratedLevel {
    pub fn start_room(&self) -> RoomCoord {
        self.path.start_room()
    }

    pub fn room_type(&self, room: RoomCoord) -> Option<RoomType> {
        if room.x < 0 || room.y < 0 {
            return None;
        }
        let (x, y) = (room.x as usize, room.y as usize);
        if x >= self.level_width || y >= self.level_height {
            return None;
        }
        self.room_types.get(y * self.level_width + x).copied()
    }

    /// Cap that applied while row `y` was populated.
    pub fn mob_cap_for_row(&self, y: i32) -> Option<u32> {
        let processed = self.level_height as i32 - 1 - y;
        usize::try_from(processed).ok().and_then(|index| self.mob_caps.get(index).copied())
    }

    pub fn enemies_in(&self, room: RoomCoord) -> impl Iterator<Item = &EnemySpawn> {
        self.enemies.iter().filter(move |spawn| spawn.room == room)
    }

    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::new();
        bytes.extend(self.seed.to_le_bytes());
        for value in [self.bounds.x, self.bounds.y, self.bounds.width, self.bounds.height] {
            bytes.extend(value.to_le_bytes());
        }
        bytes.extend((self.level_width as u32).to_le_bytes());
        bytes.extend((self.level_height as u32).to_le_bytes());
        bytes.extend((self.chunk_size as u32).to_le_bytes());
        for room_type in &self.room_types {
            bytes.push(room_type.code() as u8);
        }

        bytes.extend((self.path.len() as u32).to_le_bytes());
        for entry in self.path.entries() {
            push_room(&mut bytes, entry.room);
            let mut mask = 0_u8;
            for direction in Direction::ALL {
                if entry.exits.contains(direction) {
                    mask |= 1 << direction.index();
                }
            }
            bytes.push(mask);
        }
        push_room(&mut bytes, self.path.start_room());

        push_room(&mut bytes, self.player.room);
        push_tile(&mut bytes, self.player.tile);
        push_position(&mut bytes, self.player.position);

        bytes.extend((self.enemies.len() as u32).to_le_bytes());
        for spawn in &self.enemies {
            bytes.extend((spawn.archetype.len() as u32).to_le_bytes());
            bytes.extend(spawn.archetype.as_bytes());
            push_room(&mut bytes, spawn.room);
            push_tile(&mut bytes, spawn.tile);
            push_position(&mut bytes, spawn.position);
        }

        bytes.extend((self.mob_caps.len() as u32).to_le_bytes());
        for cap in &self.mob_caps {
            bytes.extend(cap.to_le_bytes());
        }
        bytes
    }

    pub fn fingerprint(&self) -> u64 {
        xxh3_64(&self.canonical_bytes())
    }
}

fn push_room(bytes: &mut Vec<u8>, room: RoomCoord) {
    bytes.extend(room.y.to_le_bytes());
    bytes.extend(room.x.to_le_bytes());
}

fn push_tile(bytes: &mut Vec<u8>, tile: Pos) {
    bytes.extend(tile.y.to_le_bytes());
    bytes.extend(tile.x.to_le_bytes());
}

fn push_position(bytes: &mut Vec<u8>, position: WorldPos) {
    bytes.extend(position.x.to_bits().to_le_bytes());
    bytes.extend(position.y.to_bits().to_le_bytes());
}
