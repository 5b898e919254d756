//! Turns the room grid into chunks, places the player and rolls enemies.

use crate::config::GeneratorConfig;
use crate::content::{EnemyArchetype, FOOT_PIVOT_Y_OFFSET};
use crate::error::{ConfigError, GenerationError};
use crate::rooms::{RoomType, TemplateSource};
use crate::types::{RoomCoord, WorldPos};
use crate::world::{Chunk, World};

use super::enemies::{EnemyRollContext, roll_room_enemies};
use super::grid::RoomGrid;
use super::model::{EnemySpawn, PlayerSpawn};
use super::rng::LevelRng;
use super::spawn_point::{chunk_center, find_spawn_tile};

pub(super) struct MaterializeContext<'a, S: TemplateSource> {
    pub source: &'a S,
    pub config: &'a GeneratorConfig,
    pub archetypes: &'a [EnemyArchetype],
    pub seed: i32,
    pub start_room: RoomCoord,
    pub grid: &'a mut RoomGrid,
    pub world: &'a mut World,
}

pub(super) struct MaterializedRooms {
    /// Row-major, row 0 first.
    pub room_types: Vec<RoomType>,
    pub player: PlayerSpawn,
    pub enemies: Vec<EnemySpawn>,
    pub mob_caps: Vec<u32>,
}

pub(super) fn materialize_rooms<S: TemplateSource>(
    context: &mut MaterializeContext<'_, S>,
    rng: &mut LevelRng,
) -> Result<MaterializedRooms, GenerationError> {
    let width = context.grid.width();
    let height = context.grid.height();
    let chunk_size = context.source.chunk_size();

    let mut room_types = vec![RoomType::Arbitrary; width * height];
    let mut player = None;
    let mut enemies = Vec::new();
    let mut mob_caps = Vec::with_capacity(height);
    let mut mob_cap = context.config.initial_mob_cap;

    for y in (0..height as i32).rev() {
        for x in 0..width as i32 {
            let room = RoomCoord::new(x, y);
            let room_type = match context.grid.get(room) {
                Some(room_type) => room_type,
                None => {
                    let room_type = RoomType::ALL[rng.below(RoomType::COUNT)];
                    context.grid.set(room, room_type);
                    room_type
                }
            };
            room_types[(y as usize) * width + (x as usize)] = room_type;

            let templates = context.source.templates(room_type);
            if templates.is_empty() {
                return Err(ConfigError::MissingTemplates(room_type).into());
            }
            let template_index = rng.below(templates.len());
            let template = &templates[template_index];
            let chunk = Chunk::from_template(room, template);

            if room == context.start_room {
                let Some(tile) = find_spawn_tile(&chunk, chunk_center(chunk_size)) else {
                    return Err(GenerationError::NoSpawnPoint { seed: context.seed, room });
                };
                log::debug!(
                    "room {room:?}: {} template {} ({}), player at {tile:?}",
                    room_type.name(),
                    template_index,
                    template.name()
                );
                player = Some(PlayerSpawn {
                    room,
                    tile,
                    position: WorldPos::on_tile(room, tile, chunk_size, FOOT_PIVOT_Y_OFFSET),
                });
            } else {
                let spawns = roll_room_enemies(
                    &EnemyRollContext {
                        chunk: &chunk,
                        room,
                        mob_cap,
                        spawn_probability_percent: context.config.mob_spawn_probability_percent,
                        archetypes: context.archetypes,
                    },
                    rng,
                );
                log::debug!(
                    "room {room:?}: {} template {} ({}), {} enemies",
                    room_type.name(),
                    template_index,
                    template.name(),
                    spawns.len()
                );
                enemies.extend(spawns);
            }

            context.world.set_chunk(chunk);
        }
        mob_caps.push(mob_cap);
        mob_cap += 1;
    }

    // The start room lies in the first processed row, so this only fails if
    // the path handed over a room outside the grid.
    let Some(player) = player else {
        return Err(GenerationError::NoSpawnPoint { seed: context.seed, room: context.start_room });
    };
    Ok(MaterializedRooms { room_types, player, enemies, mob_caps })
}
