use crate::error::ConfigError;

use super::grid::RoomGrid;
use super::path::SolutionPath;
use super::rng::LevelRng;
use super::room_options::RoomOptions;

/// Gives every in-grid path room a type supporting all of its exits.
pub(super) fn assign_path_rooms(
    path: &SolutionPath,
    options: &RoomOptions,
    grid: &mut RoomGrid,
    rng: &mut LevelRng,
) -> Result<(), ConfigError> {
    for entry in path.entries() {
        if !grid.contains(entry.room) {
            continue;
        }
        let compatible = options.intersection(entry.exits);
        let Some(&room_type) = rng.pick(&compatible) else {
            return Err(ConfigError::RoomOptionsNoCommonType);
        };
        log::debug!("path room {:?} needs {:?}, assigned {}", entry.room, entry.exits, room_type.name());
        grid.set(entry.room, room_type);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::rooms::RoomType;
    use crate::types::RoomCoord;

    #[test]
    fn untouched_cells_stay_unassigned() {
        let mut rng = LevelRng::from_seed(8);
        let path = SolutionPath::build(4, 4, &mut rng);
        let mut grid = RoomGrid::new(4, 4);
        assign_path_rooms(&path, &RoomOptions::default(), &mut grid, &mut rng).unwrap();

        for y in 0..4 {
            for x in 0..4 {
                let room = RoomCoord::new(x, y);
                assert_eq!(grid.get(room).is_some(), path.exits_for(room).is_some(), "{room:?}");
            }
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(128))]

        #[test]
        fn assigned_types_cover_required_exits(seed in any::<i32>()) {
            let mut rng = LevelRng::from_seed(seed);
            let path = SolutionPath::build(4, 4, &mut rng);
            let mut grid = RoomGrid::new(4, 4);
            assign_path_rooms(&path, &RoomOptions::default(), &mut grid, &mut rng).unwrap();

            for entry in path.entries().iter().filter(|entry| entry.room.y >= 0) {
                let room_type = grid.get(entry.room).expect("path room has a type");
                prop_assert!(entry.exits.is_subset(room_type.exits()));
                prop_assert_ne!(room_type, RoomType::Arbitrary);
            }
        }
    }
}
