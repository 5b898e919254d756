use crate::rooms::RoomTemplate;
use crate::types::ChunkCoord;
use crate::world::{Chunk, World};

/// The one-chunk ring around a `width` x `height` room grid: both side
/// columns including corners, then the bottom and top rows between them.
pub fn perimeter_coords(width: usize, height: usize) -> Vec<ChunkCoord> {
    let (width, height) = (width as i32, height as i32);
    let mut coords = Vec::with_capacity(2 * (width + height + 2) as usize);
    for y in -1..=height {
        coords.push(ChunkCoord::new(-1, y));
        coords.push(ChunkCoord::new(width, y));
    }
    for x in 0..width {
        coords.push(ChunkCoord::new(x, -1));
        coords.push(ChunkCoord::new(x, height));
    }
    coords
}

pub(super) fn seal_perimeter(world: &mut World, width: usize, height: usize, solid: &RoomTemplate) {
    for coord in perimeter_coords(width, height) {
        world.set_chunk(Chunk::from_template(coord, solid));
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;

    #[test]
    fn ring_has_no_duplicates_and_skips_interior() {
        let coords = perimeter_coords(4, 3);
        let unique: BTreeSet<_> = coords.iter().copied().collect();
        assert_eq!(unique.len(), coords.len());
        assert_eq!(coords.len(), 2 * (4 + 3) + 4);
        for coord in coords {
            let inside = (0..4).contains(&coord.x) && (0..3).contains(&coord.y);
            assert!(!inside, "{coord:?}");
            assert!((-1..=4).contains(&coord.x) && (-1..=3).contains(&coord.y));
        }
    }

    #[test]
    fn sealing_writes_solid_chunks() {
        let solid = RoomTemplate::parse("Solid", "###\n###\n###\n", 3).unwrap();
        let mut world = World::new(3);
        seal_perimeter(&mut world, 1, 1, &solid);
        assert_eq!(world.len(), 8);
        assert!(world.chunk(ChunkCoord::new(0, 0)).is_none());
        assert!(world.chunks().all(Chunk::is_fully_impassable));
    }
}
