use crate::constants::{
    CAMERA_START_X, CAMERA_START_Y, CAMERA_STEP_X, GOPHER_START_X16, GOPHER_START_Y16,
    GOPHER_STEP_X16, GRAVITY_VY16, GROUND_Y16, JUMP_VY16, MAX_VY16, SUBPIXELS,
};
use crate::math::floor_div;

/// The player, in 1/16 pixel units.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Gopher {
    pub x16: i64,
    pub y16: i64,
    pub vy16: i64,
}

impl Default for Gopher {
    fn default() -> Self {
        Self {
            x16: GOPHER_START_X16,
            y16: GOPHER_START_Y16,
            vy16: 0,
        }
    }
}

impl Gopher {
    /// World x in whole pixels.
    pub fn x(&self) -> i64 {
        floor_div(self.x16, SUBPIXELS)
    }

    /// World y in whole pixels.
    pub fn y(&self) -> i64 {
        floor_div(self.y16, SUBPIXELS)
    }

    pub fn jump(&mut self) {
        self.vy16 = JUMP_VY16;
    }

    /// One frame of flight: scroll forward, move by the current velocity,
    /// then apply gravity. Landing on the ground stops the fall.
    pub fn step(&mut self) {
        self.x16 += GOPHER_STEP_X16;
        self.y16 += self.vy16;

        self.vy16 = (self.vy16 + GRAVITY_VY16).min(MAX_VY16);

        if self.y16 > GROUND_Y16 {
            self.y16 = GROUND_Y16;
            self.vy16 = 0;
        }
    }
}

/// Scroll offset in whole pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Camera {
    pub x: i64,
    pub y: i64,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            x: CAMERA_START_X,
            y: CAMERA_START_Y,
        }
    }
}

impl Camera {
    pub fn step(&mut self) {
        self.x += CAMERA_STEP_X;
    }
}
