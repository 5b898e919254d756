//! Spiral search for the player's spawn tile.

use crate::types::Pos;
use crate::world::Chunk;

// Up, right, down, left: each turn rotates a quarter.
const SPIRAL_HEADINGS: [(i32, i32); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

/// Walks outward from `origin` in a square spiral and returns the first
/// standable tile. The run length grows by one after every second turn; the
/// search gives up once a run is longer than twice the chunk size, by which
/// point every tile of the chunk has been visited.
pub fn find_spawn_tile(chunk: &Chunk, origin: Pos) -> Option<Pos> {
    let (found, visited) = spiral_search(chunk, origin);
    match found {
        Some(pos) => log::trace!("spawn search from {origin:?} found {pos:?} after {visited} tiles"),
        None => log::trace!("spawn search from {origin:?} gave up after {visited} tiles"),
    }
    found
}

/// The spiral walk itself, with the number of positions it tested.
fn spiral_search(chunk: &Chunk, origin: Pos) -> (Option<Pos>, u32) {
    let max_run = 2 * chunk.size() as i32;
    let mut pos = origin;
    let mut heading = 0;
    let mut run_length = 1;
    let mut steps_in_run = 0;
    let mut turns = 0;
    let mut visited = 0;

    while run_length <= max_run {
        visited += 1;
        if chunk.is_standable(pos) {
            return (Some(pos), visited);
        }
        let (dx, dy) = SPIRAL_HEADINGS[heading];
        pos = Pos { y: pos.y + dy, x: pos.x + dx };
        steps_in_run += 1;
        if steps_in_run == run_length {
            steps_in_run = 0;
            heading = (heading + 1) % SPIRAL_HEADINGS.len();
            turns += 1;
            if turns == 2 {
                turns = 0;
                run_length += 1;
            }
        }
    }
    (None, visited)
}

pub fn chunk_center(chunk_size: usize) -> Pos {
    let half = (chunk_size / 2) as i32;
    Pos { y: half, x: half }
}
