//! Text format for room templates.
//!
//! A template is `size` rows of `size` symbols (see [`TileKind::symbol`]).
//! The first row is the top of the room. Lines starting with `;` are comments
//! and blank lines are skipped.

use crate::error::TemplateError;
use crate::tiles::{TileKind, is_standable};
use crate::types::{Direction, Pos};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoomTemplate {
    name: String,
    size: usize,
    // Row-major, row 0 at the bottom.
    tiles: Vec<TileKind>,
}

impl RoomTemplate {
    pub fn parse(name: &str, text: &str, size: usize) -> Result<Self, TemplateError> {
        let parse_error = |line: usize, message: String| TemplateError::Parse {
            source_name: name.to_string(),
            line,
            message,
        };

        let mut rows: Vec<Vec<TileKind>> = Vec::with_capacity(size);
        let mut last_line = 0;
        for (line_index, raw_line) in text.lines().enumerate() {
            let line_number = line_index + 1;
            last_line = line_number;
            let line = raw_line.trim_end();
            if line.is_empty() || line.starts_with(';') {
                continue;
            }
            if rows.len() == size {
                return Err(parse_error(line_number, format!("more than {size} rows")));
            }

            let mut row = Vec::with_capacity(size);
            for (column, symbol) in line.chars().enumerate() {
                let Some(tile) = TileKind::from_symbol(symbol) else {
                    return Err(parse_error(
                        line_number,
                        format!("unknown tile symbol '{symbol}' at column {}", column + 1),
                    ));
                };
                row.push(tile);
            }
            if row.len() != size {
                return Err(parse_error(
                    line_number,
                    format!("expected {size} tiles per row, found {}", row.len()),
                ));
            }
            rows.push(row);
        }

        if rows.len() != size {
            return Err(parse_error(
                last_line,
                format!("expected {size} rows, found {}", rows.len()),
            ));
        }

        let tiles = rows.into_iter().rev().flatten().collect();
        Ok(Self { name: name.to_string(), size, tiles })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn tiles(&self) -> &[TileKind] {
        &self.tiles
    }

    pub fn tile_at(&self, pos: Pos) -> TileKind {
        let size = self.size as i32;
        if pos.x < 0 || pos.y < 0 || pos.x >= size || pos.y >= size {
            return TileKind::Air;
        }
        self.tiles[(pos.y as usize) * self.size + (pos.x as usize)]
    }

    pub fn has_spawn_candidate(&self) -> bool {
        let size = self.size as i32;
        (1..size).any(|y| {
            (0..size).any(|x| is_standable(self.size, Pos { y, x }, |at| self.tile_at(at)))
        })
    }

    /// Whether any tile on the edge facing `direction` can be walked through.
    pub fn is_open_towards(&self, direction: Direction) -> bool {
        let last = self.size as i32 - 1;
        (0..=last)
            .map(|i| match direction {
                Direction::Left => Pos { y: i, x: 0 },
                Direction::Right => Pos { y: i, x: last },
                Direction::Down => Pos { y: 0, x: i },
                Direction::Up => Pos { y: last, x: i },
            })
            .any(|pos| self.tile_at(pos).is_passable())
    }

    pub fn is_fully_impassable(&self) -> bool {
        self.tiles.iter().all(|tile| !tile.is_passable())
    }
}
