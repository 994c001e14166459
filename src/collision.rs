use crate::constants::{
    GOPHER_HIT_HEIGHT, GOPHER_HIT_WIDTH, GOPHER_SPRITE_HEIGHT, GOPHER_SPRITE_WIDTH, PIPE_GAP_Y,
    PIPE_WIDTH, SCREEN_HEIGHT, TILE_SIZE,
};
use crate::gopher::Gopher;
use crate::math::floor_div;
use crate::pipes::PipeTable;

/// Axis-aligned box in world pixels; `x1`/`y1` are exclusive edges.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HitBox {
    pub x0: i64,
    pub y0: i64,
    pub x1: i64,
    pub y1: i64,
}

impl HitBox {
    pub fn new(x0: i64, y0: i64, width: i64, height: i64) -> Self {
        Self {
            x0,
            y0,
            x1: x0 + width,
            y1: y0 + height,
        }
    }

    /// The gopher's collision box: smaller than the sprite and centred in it.
    pub fn of(gopher: &Gopher) -> Self {
        Self::new(
            gopher.x() + (GOPHER_SPRITE_WIDTH - GOPHER_HIT_WIDTH) / 2,
            gopher.y() + (GOPHER_SPRITE_HEIGHT - GOPHER_HIT_HEIGHT) / 2,
            GOPHER_HIT_WIDTH,
            GOPHER_HIT_HEIGHT,
        )
    }
}

/// Whether `b` leaves the playfield or touches a pipe.
pub fn hits(b: HitBox, pipes: &PipeTable) -> bool {
    if b.y0 < -TILE_SIZE * 4 {
        return true;
    }
    if b.y1 >= SCREEN_HEIGHT - TILE_SIZE {
        return true;
    }

    let x_min = floor_div(b.x0 - PIPE_WIDTH, TILE_SIZE);
    let x_max = floor_div(b.x0 + GOPHER_HIT_WIDTH, TILE_SIZE);
    (x_min..=x_max).any(|x| {
        let Some(y) = pipes.pipe_at(x) else {
            return false;
        };
        if b.x0 >= x * TILE_SIZE + PIPE_WIDTH || b.x1 < x * TILE_SIZE {
            return false;
        }
        b.y0 < y * TILE_SIZE || b.y1 >= (y + PIPE_GAP_Y) * TILE_SIZE
    })
}
