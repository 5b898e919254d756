//! Level generation orchestration: path, room types, rooms, perimeter.

use crate::config::GeneratorConfig;
use crate::content::EnemyArchetype;
use crate::error::{ConfigError, GenerationError};
use crate::rooms::{RoomType, TemplateSource};
use crate::types::Rect;
use crate::world::World;

use super::assign::assign_path_rooms;
use super::events::{EventSink, LevelEvent};
use super::grid::RoomGrid;
use super::materialize::{MaterializeContext, materialize_rooms};
use super::model::GeneratedLevel;
use super::path::SolutionPath;
use super::perimeter::seal_perimeter;
use super::rng::LevelRng;
use super::room_options::RoomOptions;
use super::seed::generate_runtime_seed;

/// Validated generator setup. Template caching belongs to the source; the
/// generator only borrows it.
pub struct LevelGenerator<'a, S: TemplateSource> {
    source: &'a S,
    config: GeneratorConfig,
    room_options: RoomOptions,
    archetypes: Vec<EnemyArchetype>,
}

impl<'a, S: TemplateSource> LevelGenerator<'a, S> {
    pub fn new(source: &'a S, config: GeneratorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        if source.chunk_size() != config.chunk_size {
            return Err(ConfigError::ChunkSizeMismatch {
                config: config.chunk_size,
                templates: source.chunk_size(),
            });
        }
        if let Some(room_type) =
            RoomType::ALL.into_iter().find(|&room_type| source.templates(room_type).is_empty())
        {
            return Err(ConfigError::MissingTemplates(room_type));
        }
        if source.solid().size() != config.chunk_size {
            return Err(ConfigError::ChunkSizeMismatch {
                config: config.chunk_size,
                templates: source.solid().size(),
            });
        }
        if !source.solid().is_fully_impassable() {
            return Err(ConfigError::PassableSolid { template: source.solid().name().to_owned() });
        }

        let room_options = RoomOptions::default();
        room_options.validate()?;
        Ok(Self { source, config, room_options, archetypes: EnemyArchetype::defaults() })
    }

    pub fn with_room_options(mut self, room_options: RoomOptions) -> Result<Self, ConfigError> {
        room_options.validate()?;
        self.room_options = room_options;
        Ok(self)
    }

    pub fn with_archetypes(mut self, archetypes: Vec<EnemyArchetype>) -> Result<Self, ConfigError> {
        if archetypes.is_empty() {
            return Err(ConfigError::NoEnemyArchetypes);
        }
        self.archetypes = archetypes;
        Ok(self)
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn archetypes(&self) -> &[EnemyArchetype] {
        &self.archetypes
    }

    /// Builds a level into a staging world and commits it to `world` only once
    /// every step succeeded. A missing seed is drawn at random; either way the
    /// seed in use is logged and returned with the level.
    pub fn generate(
        &self,
        world: &mut World,
        seed: Option<i32>,
        events: &mut impl EventSink,
    ) -> Result<GeneratedLevel, GenerationError> {
        let config = &self.config;
        if world.chunk_size() != config.chunk_size {
            return Err(ConfigError::WorldChunkSizeMismatch {
                config: config.chunk_size,
                world: world.chunk_size(),
            }
            .into());
        }

        let seed = seed.unwrap_or_else(generate_runtime_seed);
        log::info!("generating level with seed {seed}");
        let mut rng = LevelRng::from_seed(seed);

        let path = SolutionPath::build(config.level_width, config.level_height, &mut rng);
        let mut grid = RoomGrid::new(config.level_width, config.level_height);
        assign_path_rooms(&path, &self.room_options, &mut grid, &mut rng)?;

        let mut staged = World::new(config.chunk_size);
        let rooms = materialize_rooms(
            &mut MaterializeContext {
                source: self.source,
                config,
                archetypes: &self.archetypes,
                seed,
                start_room: path.start_room(),
                grid: &mut grid,
                world: &mut staged,
            },
            &mut rng,
        )?;
        seal_perimeter(&mut staged, config.level_width, config.level_height, self.source.solid());

        let (extent_x, extent_y) = config.extent_in_tiles()?;
        let level = GeneratedLevel {
            seed,
            bounds: Rect { x: 0, y: 0, width: extent_x, height: extent_y },
            level_width: config.level_width,
            level_height: config.level_height,
            chunk_size: config.chunk_size,
            room_types: rooms.room_types,
            path,
            player: rooms.player,
            enemies: rooms.enemies,
            mob_caps: rooms.mob_caps,
        };

        world.absorb(staged);
        events.emit(LevelEvent::PlayerSpawned);
        log::info!(
            "level {seed} committed: {} rooms, {} path entries, {} enemies, player at {:?}",
            level.room_types.len(),
            level.path.len(),
            level.enemies.len(),
            level.player.position
        );
        Ok(level)
    }
}
