// ── Screen ──────────────────────────────────────────────────────────────────

/// Logical screen size. The terminal renderer scales this onto whatever
/// pixel grid the terminal offers.
pub const SCREEN_WIDTH: i64 = 640;
pub const SCREEN_HEIGHT: i64 = 480;

pub const TILE_SIZE: i64 = 32;

// ── Pipes ───────────────────────────────────────────────────────────────────

pub const PIPE_WIDTH: i64 = TILE_SIZE * 2;
/// Tile column before which no pipe is ever placed.
pub const PIPE_START_OFFSET_X: i64 = 8;
/// Distance between pipe columns, in tiles.
pub const PIPE_INTERVAL_X: i64 = 8;
/// Height of the passable gap, in tiles.
pub const PIPE_GAP_Y: i64 = 5;
pub const PIPE_TABLE_LEN: usize = 256;
/// Gap tops are drawn from `PIPE_TILE_Y_MIN..PIPE_TILE_Y_MAX`.
pub const PIPE_TILE_Y_MIN: i64 = 2;
pub const PIPE_TILE_Y_MAX: i64 = 8;

// ── Gopher (1/16 pixel units) ───────────────────────────────────────────────

pub const SUBPIXELS: i64 = 16;
pub const GOPHER_START_X16: i64 = 540;
pub const GOPHER_START_Y16: i64 = 960;
pub const GOPHER_STEP_X16: i64 = 32;
pub const JUMP_VY16: i64 = -96;
pub const GRAVITY_VY16: i64 = 4;
pub const MAX_VY16: i64 = 96;
pub const GROUND_Y16: i64 = 6800;

pub const CAMERA_START_X: i64 = -240;
pub const CAMERA_START_Y: i64 = 0;
pub const CAMERA_STEP_X: i64 = 2;

/// Bounds of the gopher sprite, in pixels.
pub const GOPHER_SPRITE_WIDTH: i64 = 60;
pub const GOPHER_SPRITE_HEIGHT: i64 = 75;
/// Collision box, centred inside the sprite bounds.
pub const GOPHER_HIT_WIDTH: i64 = 30;
pub const GOPHER_HIT_HEIGHT: i64 = 60;

// ── Bullets ─────────────────────────────────────────────────────────────────

pub const MAX_BULLET_COUNT: usize = 100;
pub const BULLET_SPEED: f32 = 13.0;
pub const BULLET_SIZE: i64 = 16;

// ── Modes ───────────────────────────────────────────────────────────────────

/// Frames the game-over screen ignores input for.
pub const GAME_OVER_COUNTDOWN: u32 = 30;

pub const TITLE: &str = "TAKUMAN";
