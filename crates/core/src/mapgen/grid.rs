//! Room-type grid filled in by assignment and materialization.

use crate::rooms::RoomType;
use crate::types::RoomCoord;

/// Sentinel returned by [`RoomGrid::code_at`] outside the grid or for a cell
/// that has no type yet.
pub const NO_ROOM: i32 = -1;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoomGrid {
    width: usize,
    height: usize,
    cells: Vec<Option<RoomType>>,
}

impl RoomGrid {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height, cells: vec![None; width * height] }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn contains(&self, room: RoomCoord) -> bool {
        room.x >= 0
            && room.y >= 0
            && (room.x as usize) < self.width
            && (room.y as usize) < self.height
    }

    pub fn get(&self, room: RoomCoord) -> Option<RoomType> {
        self.index(room).and_then(|index| self.cells[index])
    }

    /// Writes outside the grid are ignored.
    pub fn set(&mut self, room: RoomCoord, room_type: RoomType) {
        if let Some(index) = self.index(room) {
            self.cells[index] = Some(room_type);
        }
    }

    pub fn code_at(&self, room: RoomCoord) -> i32 {
        self.get(room).map_or(NO_ROOM, RoomType::code)
    }

    fn index(&self, room: RoomCoord) -> Option<usize> {
        self.contains(room).then(|| (room.y as usize) * self.width + (room.x as usize))
    }
}
