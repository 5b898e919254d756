//! Solution path: a left/right/down walk from the start row out past the
//! bottom of the room grid.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::types::{Direction, ExitSet, RoomCoord};

use super::rng::LevelRng;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PathEntry {
    pub room: RoomCoord,
    pub exits: ExitSet,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SolutionPath {
    entries: Vec<PathEntry>,
    start_room: RoomCoord,
}

impl SolutionPath {
    /// Walks until the row index drops below zero. The final entry sits just
    /// outside the grid and only carries the `Up` exit back into it.
    pub fn build(width: usize, height: usize, rng: &mut LevelRng) -> Self {
        debug_assert!(width > 0 && height > 0);
        let width = width as i32;
        let start_room = RoomCoord::new(rng.below(width as usize) as i32, height as i32 - 1);

        let mut entries = vec![PathEntry { room: start_room, exits: ExitSet::NONE }];
        let mut checked_rooms = BTreeSet::from([start_room]);
        let mut current = start_room;

        while current.y >= 0 {
            let direction = match rng.below(5) {
                0 | 1 => horizontal_or_down(current, Direction::Left, width, &checked_rooms),
                2 | 3 => horizontal_or_down(current, Direction::Right, width, &checked_rooms),
                _ => Direction::Down,
            };

            let next = current.step(direction);
            if let Some(last) = entries.last_mut() {
                last.exits.insert(direction);
            }
            let mut exits = ExitSet::NONE;
            exits.insert(direction.opposite());
            entries.push(PathEntry { room: next, exits });
            checked_rooms.insert(next);
            current = next;
        }

        log::trace!("solution path of {} entries from {start_room:?}", entries.len());
        Self { entries, start_room }
    }

    pub fn entries(&self) -> &[PathEntry] {
        &self.entries
    }

    pub fn start_room(&self) -> RoomCoord {
        self.start_room
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn exits_for(&self, room: RoomCoord) -> Option<ExitSet> {
        self.entries.iter().find(|entry| entry.room == room).map(|entry| entry.exits)
    }
}

fn horizontal_or_down(
    current: RoomCoord,
    direction: Direction,
    width: i32,
    checked_rooms: &BTreeSet<RoomCoord>,
) -> Direction {
    let target = current.step(direction);
    if target.x < 0 || target.x >= width || checked_rooms.contains(&target) {
        Direction::Down
    } else {
        direction
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use proptest::prelude::*;

    use super::*;

    fn assert_path_is_valid(path: &SolutionPath, width: usize, height: usize) {
        let entries = path.entries();
        let first = entries.first().expect("path has a start");
        let last = entries.last().expect("path has an end");
        assert_eq!(first.room, path.start_room());
        assert_eq!(first.room.y, height as i32 - 1);
        assert!(!first.exits.contains(Direction::Up));
        assert_eq!(last.room.y, -1);
        assert_eq!(last.exits, ExitSet::from_directions(&[Direction::Up]));

        let unique: BTreeSet<_> = entries.iter().map(|entry| entry.room).collect();
        assert_eq!(unique.len(), entries.len(), "a room was visited twice");

        for pair in entries.windows(2) {
            let (from, to) = (pair[0], pair[1]);
            let direction = Direction::ALL
                .into_iter()
                .find(|&direction| from.room.step(direction) == to.room)
                .expect("consecutive entries are adjacent");
            assert_ne!(direction, Direction::Up);
            assert!(from.exits.contains(direction));
            assert!(to.exits.contains(direction.opposite()));
        }

        for entry in &entries[..entries.len() - 1] {
            assert!(entry.room.x >= 0 && (entry.room.x as usize) < width);
            assert!(entry.room.y >= 0 && (entry.room.y as usize) < height);
        }
    }

    #[test]
    fn single_room_grid_drops_straight_through() {
        let mut rng = LevelRng::from_seed(5);
        let path = SolutionPath::build(1, 1, &mut rng);
        assert_eq!(path.len(), 2);
        assert_eq!(path.start_room(), RoomCoord::new(0, 0));
        assert_eq!(path.exits_for(RoomCoord::new(0, 0)), Some(ExitSet::from_directions(&[Direction::Down])));
        assert_path_is_valid(&path, 1, 1);
    }

    #[test]
    fn single_column_grid_only_moves_down() {
        let mut rng = LevelRng::from_seed(1_234);
        let path = SolutionPath::build(1, 5, &mut rng);
        assert_eq!(path.len(), 6);
        assert_path_is_valid(&path, 1, 5);
    }

    #[test]
    fn same_seed_builds_same_path() {
        let a = SolutionPath::build(4, 4, &mut LevelRng::from_seed(42));
        let b = SolutionPath::build(4, 4, &mut LevelRng::from_seed(42));
        assert_eq!(a, b);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(128))]

        #[test]
        fn paths_connect_start_row_to_exit(seed in any::<i32>(), width in 1_usize..8, height in 1_usize..8) {
            let path = SolutionPath::build(width, height, &mut LevelRng::from_seed(seed));
            assert_path_is_valid(&path, width, height);
            prop_assert!(path.len() <= width * height + 1);
        }
    }
}
