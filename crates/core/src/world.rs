//! Sparse chunk storage. Chunks are keyed by integer coordinate and created
//! lazily; reads that miss behave as if an all-air chunk were present.

use std::collections::BTreeMap;

use crate::rooms::RoomTemplate;
use crate::tiles::{TileKind, is_standable};
use crate::types::{ChunkCoord, Pos};

pub const DEFAULT_CHUNK_SIZE: usize = 16;

/// Fixed-size square tile grid owned by the world at `coord`. Row-major,
/// row 0 is the bottom row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Chunk {
    coord: ChunkCoord,
    size: usize,
    tiles: Vec<TileKind>,
}

impl Chunk {
    pub fn filled(coord: ChunkCoord, size: usize, tile: TileKind) -> Self {
        Self { coord, size, tiles: vec![tile; size * size] }
    }

    pub fn empty(coord: ChunkCoord, size: usize) -> Self {
        Self::filled(coord, size, TileKind::Air)
    }

    pub fn from_template(coord: ChunkCoord, template: &RoomTemplate) -> Self {
        Self { coord, size: template.size(), tiles: template.tiles().to_vec() }
    }

    pub fn coord(&self) -> ChunkCoord {
        self.coord
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn in_bounds(&self, pos: Pos) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as usize) < self.size && (pos.y as usize) < self.size
    }

    /// Out-of-bounds reads return air, matching the world's miss behaviour.
    pub fn tile_at(&self, pos: Pos) -> TileKind {
        if !self.in_bounds(pos) {
            return TileKind::Air;
        }
        self.tiles[self.index(pos)]
    }

    pub fn set_tile(&mut self, pos: Pos, tile: TileKind) {
        if !self.in_bounds(pos) {
            return;
        }
        let index = self.index(pos);
        self.tiles[index] = tile;
    }

    pub fn is_standable(&self, pos: Pos) -> bool {
        is_standable(self.size, pos, |at| self.tile_at(at))
    }

    /// Standable tiles in scan order: bottom row first, left to right.
    pub fn standable_tiles(&self) -> impl Iterator<Item = Pos> + '_ {
        let size = self.size as i32;
        (0..size)
            .flat_map(move |y| (0..size).map(move |x| Pos { y, x }))
            .filter(|&pos| self.is_standable(pos))
    }

    pub fn is_fully_impassable(&self) -> bool {
        self.tiles.iter().all(|tile| !tile.is_passable())
    }

    fn index(&self, pos: Pos) -> usize {
        (pos.y as usize) * self.size + (pos.x as usize)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct World {
    chunk_size: usize,
    chunks: BTreeMap<ChunkCoord, Chunk>,
}

impl Default for World {
    fn default() -> Self {
        Self::new(DEFAULT_CHUNK_SIZE)
    }
}

impl World {
    pub fn new(chunk_size: usize) -> Self {
        debug_assert!(chunk_size > 0);
        Self { chunk_size, chunks: BTreeMap::new() }
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    pub fn chunk(&self, coord: ChunkCoord) -> Option<&Chunk> {
        self.chunks.get(&coord)
    }

    /// Inserts the chunk at its own coordinate, returning whatever it replaced.
    pub fn set_chunk(&mut self, chunk: Chunk) -> Option<Chunk> {
        debug_assert_eq!(chunk.size(), self.chunk_size);
        self.chunks.insert(chunk.coord(), chunk)
    }

    pub fn chunks(&self) -> impl Iterator<Item = &Chunk> {
        self.chunks.values()
    }

    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    pub fn chunk_coord_of(&self, world_x: i32, world_y: i32) -> ChunkCoord {
        let size = self.chunk_size as i32;
        ChunkCoord { y: world_y.div_euclid(size), x: world_x.div_euclid(size) }
    }

    pub fn local_pos_of(&self, world_x: i32, world_y: i32) -> Pos {
        let size = self.chunk_size as i32;
        Pos { y: world_y.rem_euclid(size), x: world_x.rem_euclid(size) }
    }

    pub fn tile(&self, world_x: i32, world_y: i32) -> TileKind {
        match self.chunk(self.chunk_coord_of(world_x, world_y)) {
            Some(chunk) => chunk.tile_at(self.local_pos_of(world_x, world_y)),
            None => TileKind::Air,
        }
    }

    pub fn set_tile(&mut self, world_x: i32, world_y: i32, tile: TileKind) {
        let coord = self.chunk_coord_of(world_x, world_y);
        let local = self.local_pos_of(world_x, world_y);
        let chunk_size = self.chunk_size;
        self.chunks
            .entry(coord)
            .or_insert_with(|| Chunk::empty(coord, chunk_size))
            .set_tile(local, tile);
    }

    pub fn is_passable(&self, world_x: i32, world_y: i32) -> bool {
        self.tile(world_x, world_y).is_passable()
    }

    /// Moves every chunk of `staged` into this world, overwriting collisions.
    pub(crate) fn absorb(&mut self, staged: World) {
        debug_assert_eq!(staged.chunk_size, self.chunk_size);
        self.chunks.extend(staged.chunks);
    }
}
