pub mod config;
pub mod content;
pub mod error;
pub mod mapgen;
pub mod rooms;
pub mod roster;
pub mod tiles;
pub mod types;
pub mod world;

pub use config::GeneratorConfig;
pub use content::{AggroPolicy, EnemyArchetype, MovementPolicy};
pub use error::{ConfigError, GenerationError, TemplateError};
pub use mapgen::{
    EventSink, GeneratedLevel, LevelEvent, LevelGenerator, NoEvents, generate_level,
};
pub use rooms::{RoomTemplate, RoomType, TemplateLibrary, TemplateSource};
pub use roster::Roster;
pub use tiles::TileKind;
pub use types::*;
pub use world::{Chunk, DEFAULT_CHUNK_SIZE, World};
