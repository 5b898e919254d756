use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::world::DEFAULT_CHUNK_SIZE;

/// Recognized generation options. Missing fields fall back to the defaults.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub level_width: usize,
    pub level_height: usize,
    pub chunk_size: usize,
    pub initial_mob_cap: u32,
    pub mob_spawn_probability_percent: u32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            level_width: 4,
            level_height: 4,
            chunk_size: DEFAULT_CHUNK_SIZE,
            initial_mob_cap: 2,
            mob_spawn_probability_percent: 5,
        }
    }
}

impl GeneratorConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.level_width == 0 {
            return Err(ConfigError::ZeroLevelWidth);
        }
        if self.level_height == 0 {
            return Err(ConfigError::ZeroLevelHeight);
        }
        if self.chunk_size < 2 {
            return Err(ConfigError::ChunkSizeTooSmall { chunk_size: self.chunk_size });
        }
        for rooms in [self.level_width, self.level_height] {
            if span_in_tiles(rooms.saturating_add(2), self.chunk_size).is_none() {
                return Err(ConfigError::LevelTooLarge { rooms, chunk_size: self.chunk_size });
            }
        }
        if self.mob_spawn_probability_percent > 100 {
            return Err(ConfigError::ProbabilityOutOfRange {
                percent: self.mob_spawn_probability_percent,
            });
        }
        Ok(())
    }

    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn load(path: &Path) -> io::Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    /// World-space size of the room grid in tiles.
    pub fn extent_in_tiles(&self) -> Result<(i32, i32), ConfigError> {
        let span = |rooms| {
            span_in_tiles(rooms, self.chunk_size)
                .ok_or(ConfigError::LevelTooLarge { rooms, chunk_size: self.chunk_size })
        };
        Ok((span(self.level_width)?, span(self.level_height)?))
    }
}

fn span_in_tiles(rooms: usize, chunk_size: usize) -> Option<i32> {
    rooms.checked_mul(chunk_size).and_then(|tiles| i32::try_from(tiles).ok())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use super::*;

    #[test]
    fn partial_json_keeps_remaining_defaults() {
        let config = GeneratorConfig::from_json_str(r#"{ "level_width": 6 }"#).expect("valid json");
        assert_eq!(config.level_width, 6);
        assert_eq!(config.level_height, 4);
        assert_eq!(config.chunk_size, 16);
        assert_eq!(config.initial_mob_cap, 2);
        assert_eq!(config.mob_spawn_probability_percent, 5);
    }

    #[test]
    fn validate_rejects_degenerate_values() {
        let zero_width = GeneratorConfig { level_width: 0, ..GeneratorConfig::default() };
        assert_eq!(zero_width.validate(), Err(ConfigError::ZeroLevelWidth));

        let zero_height = GeneratorConfig { level_height: 0, ..GeneratorConfig::default() };
        assert_eq!(zero_height.validate(), Err(ConfigError::ZeroLevelHeight));

        let tiny_chunks = GeneratorConfig { chunk_size: 1, ..GeneratorConfig::default() };
        assert_eq!(tiny_chunks.validate(), Err(ConfigError::ChunkSizeTooSmall { chunk_size: 1 }));

        let certain = GeneratorConfig { mob_spawn_probability_percent: 101, ..GeneratorConfig::default() };
        assert_eq!(certain.validate(), Err(ConfigError::ProbabilityOutOfRange { percent: 101 }));

        assert_eq!(GeneratorConfig::default().validate(), Ok(()));
    }

    #[test]
    fn validate_rejects_levels_beyond_tile_coordinates() {
        let too_wide = GeneratorConfig { level_width: 200_000_000, ..GeneratorConfig::default() };
        assert_eq!(
            too_wide.validate(),
            Err(ConfigError::LevelTooLarge { rooms: 200_000_000, chunk_size: 16 })
        );
        assert!(too_wide.extent_in_tiles().is_err());

        let huge_chunks = GeneratorConfig { chunk_size: usize::MAX, ..GeneratorConfig::default() };
        assert!(matches!(huge_chunks.validate(), Err(ConfigError::LevelTooLarge { rooms: 4, .. })));

        let tallest = i32::MAX as usize / 16 - 2;
        let at_limit = GeneratorConfig { level_height: tallest, ..GeneratorConfig::default() };
        assert_eq!(at_limit.validate(), Ok(()));
        let past_limit = GeneratorConfig { level_height: tallest + 1, ..GeneratorConfig::default() };
        assert!(past_limit.validate().is_err());
    }

    #[test]
    fn load_reads_file_and_flags_bad_json_as_invalid_data() {
        let dir = tempdir().unwrap();
        let good = dir.path().join("level.json");
        fs::write(&good, r#"{ "level_height": 3, "mob_spawn_probability_percent": 20 }"#).unwrap();
        let config = GeneratorConfig::load(&good).expect("config should load");
        assert_eq!(config.level_height, 3);
        assert_eq!(config.mob_spawn_probability_percent, 20);

        let bad = dir.path().join("broken.json");
        fs::write(&bad, "{ level_height: }").unwrap();
        let error = GeneratorConfig::load(&bad).expect_err("malformed json");
        assert_eq!(error.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn default_extent_is_four_chunks_square() {
        assert_eq!(GeneratorConfig::default().extent_in_tiles(), Ok((64, 64)));
    }
}
