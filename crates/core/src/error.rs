//! Error taxonomy for level generation: configuration defects, template
//! loading failures, and content-authoring defects found mid-generation.

use std::error::Error;
use std::fmt;
use std::io;
use std::path::PathBuf;

use crate::rooms::RoomType;
use crate::types::{Direction, RoomCoord};

/// Rejected before any randomness is drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    ZeroLevelWidth,
    ZeroLevelHeight,
    /// Chunks need at least two rows for a standable tile to exist.
    ChunkSizeTooSmall { chunk_size: usize },
    /// The level plus its perimeter ring does not fit in `i32` tile coordinates.
    LevelTooLarge { rooms: usize, chunk_size: usize },
    ProbabilityOutOfRange { percent: u32 },
    EmptyRoomOptions(Direction),
    /// A room type is listed under a direction it has no exit for.
    RoomOptionsUnsupported { direction: Direction, room_type: RoomType },
    /// No room type is offered for every direction at once.
    RoomOptionsNoCommonType,
    ChunkSizeMismatch { config: usize, templates: usize },
    /// The target world stores chunks of a different size than generated.
    WorldChunkSizeMismatch { config: usize, world: usize },
    MissingTemplates(RoomType),
    /// The perimeter template has a passable tile.
    PassableSolid { template: String },
    NoEnemyArchetypes,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroLevelWidth => write!(f, "level width must be at least one room"),
            Self::ZeroLevelHeight => write!(f, "level height must be at least one room"),
            Self::ChunkSizeTooSmall { chunk_size } => {
                write!(f, "chunk size {chunk_size} is too small (minimum 2)")
            }
            Self::LevelTooLarge { rooms, chunk_size } => write!(
                f,
                "{rooms} rooms of {chunk_size} tiles plus the perimeter exceed the world coordinate range"
            ),
            Self::ProbabilityOutOfRange { percent } => {
                write!(f, "mob spawn probability {percent}% is outside 0..=100")
            }
            Self::EmptyRoomOptions(direction) => {
                write!(f, "no room type offers a {} exit", direction.name())
            }
            Self::RoomOptionsUnsupported { direction, room_type } => write!(
                f,
                "room type {} is listed for a {} exit it does not have",
                room_type.name(),
                direction.name()
            ),
            Self::RoomOptionsNoCommonType => {
                write!(f, "no room type supports all four exits; path rooms could be unsatisfiable")
            }
            Self::ChunkSizeMismatch { config, templates } => {
                write!(f, "configured chunk size {config} does not match template size {templates}")
            }
            Self::WorldChunkSizeMismatch { config, world } => {
                write!(f, "configured chunk size {config} does not match world chunk size {world}")
            }
            Self::MissingTemplates(room_type) => {
                write!(f, "no templates available for room type {}", room_type.name())
            }
            Self::PassableSolid { template } => {
                write!(f, "perimeter template {template} contains passable tiles")
            }
            Self::NoEnemyArchetypes => write!(f, "enemy archetype list is empty"),
        }
    }
}

impl Error for ConfigError {}

#[derive(Debug)]
pub enum TemplateError {
    Io { path: PathBuf, source: io::Error },
    Parse { source_name: String, line: usize, message: String },
    MissingCategory(RoomType),
    EmptyCategory(RoomType),
    MissingSolid,
}

impl fmt::Display for TemplateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "template I/O error at {}: {source}", path.display())
            }
            Self::Parse { source_name, line, message } => {
                write!(f, "invalid template {source_name} at line {line}: {message}")
            }
            Self::MissingCategory(room_type) => {
                write!(f, "missing template category type{}", room_type.code())
            }
            Self::EmptyCategory(room_type) => {
                write!(f, "template category type{} has no templates", room_type.code())
            }
            Self::MissingSolid => write!(f, "missing Solid perimeter template"),
        }
    }
}

impl Error for TemplateError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

#[derive(Debug)]
pub enum GenerationError {
    Config(ConfigError),
    Template(TemplateError),
    /// The start room's template has no standable tile.
    NoSpawnPoint { seed: i32, room: RoomCoord },
}

impl fmt::Display for GenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "invalid generator configuration: {e}"),
            Self::Template(e) => write!(f, "room templates unavailable: {e}"),
            Self::NoSpawnPoint { seed, room } => write!(
                f,
                "no spawn point found in start room ({}, {}) for seed {seed}",
                room.x, room.y
            ),
        }
    }
}

impl Error for GenerationError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Template(e) => Some(e),
            Self::NoSpawnPoint { .. } => None,
        }
    }
}

impl From<ConfigError> for GenerationError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<TemplateError> for GenerationError {
    fn from(e: TemplateError) -> Self {
        Self::Template(e)
    }
}
