//! Integer helpers for scroll and tile math.
//!
//! World coordinates go negative while the camera sits left of the origin, so
//! tiling needs division that rounds toward negative infinity rather than
//! toward zero.

/// Floor division. `y` must be non-zero.
pub fn floor_div(x: i64, y: i64) -> i64 {
    let d = x / y;
    if x % y != 0 && (x < 0) != (y < 0) {
        d - 1
    } else {
        d
    }
}

/// Remainder matching [`floor_div`]; lies in `[0, y)` for positive `y`.
pub fn floor_mod(x: i64, y: i64) -> i64 {
    x - floor_div(x, y) * y
}
