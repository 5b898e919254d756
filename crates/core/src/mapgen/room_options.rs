//! Exit direction to compatible room types.

use std::collections::BTreeSet;

use crate::error::ConfigError;
use crate::rooms::RoomType;
use crate::types::{Direction, ExitSet};

/// Read-only table; [`RoomOptions::intersection`] never narrows the stored sets.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoomOptions {
    by_direction: [BTreeSet<RoomType>; 4],
}

impl Default for RoomOptions {
    fn default() -> Self {
        use RoomType::{AllFour, LeftRight, LeftRightDown, LeftRightUp};

        let mut by_direction: [BTreeSet<RoomType>; 4] = Default::default();
        by_direction[Direction::Left.index()] =
            BTreeSet::from([LeftRight, LeftRightDown, LeftRightUp, AllFour]);
        by_direction[Direction::Right.index()] =
            BTreeSet::from([LeftRight, LeftRightDown, LeftRightUp, AllFour]);
        by_direction[Direction::Down.index()] = BTreeSet::from([LeftRightDown, AllFour]);
        by_direction[Direction::Up.index()] = BTreeSet::from([LeftRightUp, AllFour]);
        Self { by_direction }
    }
}

impl RoomOptions {
    pub fn from_sets(by_direction: [BTreeSet<RoomType>; 4]) -> Self {
        Self { by_direction }
    }

    pub fn options(&self, direction: Direction) -> &BTreeSet<RoomType> {
        &self.by_direction[direction.index()]
    }

    /// Types compatible with every flagged exit, in ascending type order.
    /// No flagged exit means every type qualifies.
    pub fn intersection(&self, exits: ExitSet) -> Vec<RoomType> {
        RoomType::ALL
            .into_iter()
            .filter(|room_type| exits.iter().all(|direction| self.options(direction).contains(room_type)))
            .collect()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for direction in Direction::ALL {
            let options = self.options(direction);
            if options.is_empty() {
                return Err(ConfigError::EmptyRoomOptions(direction));
            }
            if let Some(&room_type) =
                options.iter().find(|room_type| !room_type.exits().contains(direction))
            {
                return Err(ConfigError::RoomOptionsUnsupported { direction, room_type });
            }
        }
        // Every subset's intersection contains the full intersection.
        if self.intersection(ExitSet::ALL).is_empty() {
            return Err(ConfigError::RoomOptionsNoCommonType);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn every_non_empty_exit_set() -> impl Iterator<Item = ExitSet> {
        (1_u8..16).map(|mask| {
            let directions: Vec<_> = Direction::ALL
                .into_iter()
                .filter(|direction| mask & (1 << direction.index()) != 0)
                .collect();
            ExitSet::from_directions(&directions)
        })
    }

    #[test]
    fn default_table_intersections_are_never_empty() {
        let options = RoomOptions::default();
        options.validate().expect("default table is consistent");
        for exits in every_non_empty_exit_set() {
            let compatible = options.intersection(exits);
            assert!(!compatible.is_empty(), "{exits:?}");
            for room_type in compatible {
                assert!(exits.is_subset(room_type.exits()), "{room_type:?} for {exits:?}");
            }
        }
    }

    #[test]
    fn left_and_down_allow_only_drop_rooms() {
        let options = RoomOptions::default();
        let exits = ExitSet::from_directions(&[Direction::Left, Direction::Down]);
        assert_eq!(options.intersection(exits), vec![RoomType::LeftRightDown, RoomType::AllFour]);
    }

    #[test]
    fn intersection_leaves_table_untouched() {
        let options = RoomOptions::default();
        let before = options.clone();
        let _ = options.intersection(ExitSet::ALL);
        let _ = options.intersection(ExitSet::from_directions(&[Direction::Up, Direction::Down]));
        assert_eq!(options, before);
        assert_eq!(options.intersection(ExitSet::NONE), RoomType::ALL.to_vec());
    }

    #[test]
    fn validate_rejects_broken_tables() {
        let mut sets: [BTreeSet<RoomType>; 4] = RoomOptions::default().by_direction;
        sets[Direction::Down.index()].clear();
        assert_eq!(
            RoomOptions::from_sets(sets).validate(),
            Err(ConfigError::EmptyRoomOptions(Direction::Down))
        );

        let mut sets = RoomOptions::default().by_direction;
        sets[Direction::Up.index()].insert(RoomType::LeftRightDown);
        assert_eq!(
            RoomOptions::from_sets(sets).validate(),
            Err(ConfigError::RoomOptionsUnsupported {
                direction: Direction::Up,
                room_type: RoomType::LeftRightDown,
            })
        );

        let mut sets = RoomOptions::default().by_direction;
        sets[Direction::Up.index()].remove(&RoomType::AllFour);
        assert_eq!(RoomOptions::from_sets(sets).validate(), Err(ConfigError::RoomOptionsNoCommonType));
    }
}
