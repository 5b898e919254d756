//! Tile identifiers and the static metadata table behind them.

use serde::Serialize;

use crate::types::Pos;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum TileKind {
    #[default]
    Air,
    Floor,
    Wall,
    Platform,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TileData {
    pub passable: bool,
}

// Indexed by `TileKind::index`.
const TILE_DATA: [TileData; 4] = [
    TileData { passable: true },
    TileData { passable: false },
    TileData { passable: false },
    TileData { passable: false },
];

impl TileKind {
    pub const ALL: [TileKind; 4] = [TileKind::Air, TileKind::Floor, TileKind::Wall, TileKind::Platform];

    fn index(self) -> usize {
        match self {
            TileKind::Air => 0,
            TileKind::Floor => 1,
            TileKind::Wall => 2,
            TileKind::Platform => 3,
        }
    }

    pub fn data(self) -> &'static TileData {
        &TILE_DATA[self.index()]
    }

    pub fn is_passable(self) -> bool {
        self.data().passable
    }

    /// Symbol used by the room template text format.
    pub fn symbol(self) -> char {
        match self {
            TileKind::Air => '.',
            TileKind::Floor => '=',
            TileKind::Wall => '#',
            TileKind::Platform => '-',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Self> {
        TileKind::ALL.into_iter().find(|tile| tile.symbol() == symbol)
    }
}

/// A standable tile is passable with an impassable tile directly below it.
/// Row 0 never qualifies so the check never reaches into the chunk below.
pub(crate) fn is_standable(size: usize, pos: Pos, tile_at: impl Fn(Pos) -> TileKind) -> bool {
    let size = size as i32;
    if pos.x < 0 || pos.x >= size || pos.y <= 0 || pos.y >= size {
        return false;
    }
    tile_at(pos).is_passable() && !tile_at(pos.below()).is_passable()
}
