//! Enemy archetypes the generator may place.
//!
//! Behaviour is owned by the host. Archetypes only carry the data spawning
//! needs plus capability tags a host can dispatch on.

use serde::{Deserialize, Serialize};

pub mod keys {
    pub const ENEMY_SLIME: &str = "slime";
    pub const ENEMY_SPIDER: &str = "spider";
    pub const ENEMY_RAT: &str = "rat";
}

/// Vertical lift for sprites whose origin sits at their centre.
pub const CENTER_PIVOT_Y_OFFSET: f32 = 0.55;
/// Vertical lift for sprites anchored at their feet.
pub const FOOT_PIVOT_Y_OFFSET: f32 = 0.05;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MovementPolicy {
    Jumper,
    Crawler,
    Runner,
}

/// Distances in tiles. Aggro starts inside the engage box and ends once the
/// player is `release` tiles away on either axis.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AggroPolicy {
    pub engage_x: f32,
    pub engage_y: f32,
    pub release: f32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EnemyArchetype {
    pub id: String,
    pub center_pivot: bool,
    pub movement: MovementPolicy,
    pub aggro: AggroPolicy,
}

impl EnemyArchetype {
    pub fn spawn_y_offset(&self) -> f32 {
        if self.center_pivot { CENTER_PIVOT_Y_OFFSET } else { FOOT_PIVOT_Y_OFFSET }
    }

    pub fn defaults() -> Vec<EnemyArchetype> {
        vec![
            EnemyArchetype {
                id: keys::ENEMY_SLIME.to_string(),
                center_pivot: false,
                movement: MovementPolicy::Jumper,
                aggro: AggroPolicy { engage_x: 8.0, engage_y: 8.0, release: 15.0 },
            },
            EnemyArchetype {
                id: keys::ENEMY_SPIDER.to_string(),
                center_pivot: true,
                movement: MovementPolicy::Crawler,
                aggro: AggroPolicy { engage_x: 6.0, engage_y: 6.0, release: 12.0 },
            },
            EnemyArchetype {
                id: keys::ENEMY_RAT.to_string(),
                center_pivot: false,
                movement: MovementPolicy::Runner,
                aggro: AggroPolicy { engage_x: 10.0, engage_y: 3.2, release: 15.0 },
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pivot_selects_spawn_offset() {
        let archetypes = EnemyArchetype::defaults();
        let spider = archetypes.iter().find(|a| a.id == keys::ENEMY_SPIDER).unwrap();
        let slime = archetypes.iter().find(|a| a.id == keys::ENEMY_SLIME).unwrap();
        assert_eq!(spider.spawn_y_offset(), CENTER_PIVOT_Y_OFFSET);
        assert_eq!(slime.spawn_y_offset(), FOOT_PIVOT_Y_OFFSET);
    }

    #[test]
    fn archetype_ids_are_unique() {
        let archetypes = EnemyArchetype::defaults();
        for (index, archetype) in archetypes.iter().enumerate() {
            assert!(!archetypes[index + 1..].iter().any(|other| other.id == archetype.id));
        }
    }
}
