use rand::Rng;

use crate::constants::{
    PIPE_INTERVAL_X, PIPE_START_OFFSET_X, PIPE_TABLE_LEN, PIPE_TILE_Y_MAX, PIPE_TILE_Y_MIN,
};
use crate::math::{floor_div, floor_mod};

/// Gap positions for the endless pipe sequence.
///
/// Column `n` past the start offset reuses entry `n % len`, so the course
/// repeats every `PIPE_TABLE_LEN` pipes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PipeTable {
    tile_ys: Vec<i64>,
}

impl PipeTable {
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let tile_ys = (0..PIPE_TABLE_LEN)
            .map(|_| rng.gen_range(PIPE_TILE_Y_MIN..PIPE_TILE_Y_MAX))
            .collect();
        Self { tile_ys }
    }

    /// Builds a table from explicit gap rows. Returns `None` for an empty list.
    pub fn from_tile_ys(tile_ys: Vec<i64>) -> Option<Self> {
        if tile_ys.is_empty() {
            None
        } else {
            Some(Self { tile_ys })
        }
    }

    pub fn tile_ys(&self) -> &[i64] {
        &self.tile_ys
    }

    /// Tile row where the gap of the pipe at `tile_x` begins, if a pipe
    /// stands in that column.
    pub fn pipe_at(&self, tile_x: i64) -> Option<i64> {
        let rel = tile_x - PIPE_START_OFFSET_X;
        if rel <= 0 || floor_mod(rel, PIPE_INTERVAL_X) != 0 {
            return None;
        }
        let idx = floor_div(rel, PIPE_INTERVAL_X) as usize;
        Some(self.tile_ys[idx % self.tile_ys.len()])
    }
}
