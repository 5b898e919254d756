//! Procedural level generation split into coherent submodules.

pub mod model;

mod assign;
mod enemies;
mod events;
mod generator;
mod grid;
mod materialize;
mod path;
mod perimeter;
mod rng;
mod room_options;
mod seed;
mod spawn_point;

pub use events::{EventSink, LevelEvent, NoEvents};
pub use generator::LevelGenerator;
pub use grid::{NO_ROOM, RoomGrid};
pub use model::{EnemySpawn, GeneratedLevel, PlayerSpawn};
pub use path::{PathEntry, SolutionPath};
pub use perimeter::perimeter_coords;
pub use rng::LevelRng;
pub use room_options::RoomOptions;
pub use seed::generate_runtime_seed;
pub use spawn_point::{chunk_center, find_spawn_tile};

use crate::config::GeneratorConfig;
use crate::error::GenerationError;
use crate::rooms::TemplateLibrary;
use crate::world::World;

/// Generates with the built-in templates, default configuration and no event
/// listeners. `world` must use the default chunk size.
pub fn generate_level(world: &mut World, seed: Option<i32>) -> Result<GeneratedLevel, GenerationError> {
    let library = TemplateLibrary::builtin()?;
    let generator = LevelGenerator::new(&library, GeneratorConfig::default())?;
    generator.generate(world, seed, &mut NoEvents)
}
