use serde::Serialize;
use slotmap::new_key_type;

new_key_type! {
    pub struct ActorId;
}

/// Tile position, either chunk-local or in world tile space. Y grows upward.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Pos {
    pub y: i32,
    pub x: i32,
}

impl Pos {
    pub fn below(self) -> Self {
        Self { y: self.y - 1, x: self.x }
    }
}

/// Integer coordinate of a chunk in the world. Room `(x, y)` of the room grid
/// is materialized into the chunk with the same coordinate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct ChunkCoord {
    pub y: i32,
    pub x: i32,
}

pub type RoomCoord = ChunkCoord;

impl ChunkCoord {
    pub fn new(x: i32, y: i32) -> Self {
        Self { y, x }
    }

    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.offset();
        Self { y: self.y + dy, x: self.x + dx }
    }

    /// World tile position of this chunk's bottom-left corner.
    pub fn origin(self, chunk_size: usize) -> Pos {
        let size = chunk_size as i32;
        Pos { y: self.y * size, x: self.x * size }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct WorldPos {
    pub x: f32,
    pub y: f32,
}

impl WorldPos {
    /// Centers horizontally on the tile and lifts by `y_offset` tiles.
    pub fn on_tile(room: RoomCoord, tile: Pos, chunk_size: usize, y_offset: f32) -> Self {
        let origin = room.origin(chunk_size);
        Self {
            x: (origin.x + tile.x) as f32 + 0.5,
            y: (origin.y + tile.y) as f32 + y_offset,
        }
    }

    /// The world tile this position lies in.
    pub fn tile(self) -> Pos {
        Pos { y: self.y.floor() as i32, x: self.x.floor() as i32 }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Direction {
    Left,
    Right,
    Down,
    Up,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Direction::Left, Direction::Right, Direction::Down, Direction::Up];

    pub fn index(self) -> usize {
        match self {
            Direction::Left => 0,
            Direction::Right => 1,
            Direction::Down => 2,
            Direction::Up => 3,
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Down => Direction::Up,
            Direction::Up => Direction::Down,
        }
    }

    /// Unit step as `(dx, dy)` in y-up space.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Down => (0, -1),
            Direction::Up => (0, 1),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Down => "down",
            Direction::Up => "up",
        }
    }
}

/// Which of the four exits a room has (or must have), indexed by [`Direction::index`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub struct ExitSet([bool; 4]);

impl ExitSet {
    pub const NONE: Self = Self([false; 4]);
    pub const ALL: Self = Self([true; 4]);

    pub fn from_directions(directions: &[Direction]) -> Self {
        let mut exits = Self::NONE;
        for &direction in directions {
            exits.insert(direction);
        }
        exits
    }

    pub fn insert(&mut self, direction: Direction) {
        self.0[direction.index()] = true;
    }

    pub fn contains(self, direction: Direction) -> bool {
        self.0[direction.index()]
    }

    pub fn is_empty(self) -> bool {
        self.0.iter().all(|&flag| !flag)
    }

    pub fn is_subset(self, other: Self) -> bool {
        Direction::ALL.iter().all(|&direction| !self.contains(direction) || other.contains(direction))
    }

    pub fn iter(self) -> impl Iterator<Item = Direction> {
        Direction::ALL.into_iter().filter(move |&direction| self.contains(direction))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_directions_round_trip() {
        for direction in Direction::ALL {
            assert_eq!(direction.opposite().opposite(), direction);
            let (dx, dy) = direction.offset();
            let (ox, oy) = direction.opposite().offset();
            assert_eq!((dx + ox, dy + oy), (0, 0));
        }
    }

    #[test]
    fn exit_set_subset_follows_flags() {
        let left_down = ExitSet::from_directions(&[Direction::Left, Direction::Down]);
        assert!(left_down.is_subset(ExitSet::ALL));
        assert!(ExitSet::NONE.is_subset(left_down));
        assert!(!ExitSet::ALL.is_subset(left_down));
        assert_eq!(left_down.iter().collect::<Vec<_>>(), vec![Direction::Left, Direction::Down]);
    }

    #[test]
    fn world_position_centers_on_tile() {
        let pos = WorldPos::on_tile(ChunkCoord::new(2, 1), Pos { y: 3, x: 4 }, 16, 0.05);
        assert_eq!(pos.x, 36.5);
        assert!((pos.y - 19.05).abs() < 1e-4);
        assert_eq!(pos.tile(), Pos { y: 19, x: 36 });
    }
}
