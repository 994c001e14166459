//! Post effect imitating a CRT monitor: dark scanlines and a vignette.

use crate::render::PixelBuf;

const SCANLINE: u16 = 176;
/// Brightness lost at the very corners.
const VIGNETTE: f32 = 0.35;

pub fn apply(buf: &mut PixelBuf) {
    let (w, h) = (buf.width(), buf.height());
    if w == 0 || h == 0 {
        return;
    }
    let cx = (w as f32 - 1.0) / 2.0;
    let cy = (h as f32 - 1.0) / 2.0;
    let max_d2 = cx * cx + cy * cy;

    for y in 0..h {
        for x in 0..w {
            let dx = x as f32 - cx;
            let dy = y as f32 - cy;
            let d2 = if max_d2 > 0.0 {
                (dx * dx + dy * dy) / max_d2
            } else {
                0.0
            };
            let mut f = ((1.0 - VIGNETTE * d2) * 256.0) as u16;
            if y % 2 == 1 {
                f = f * SCANLINE / 256;
            }
            let c = buf.get(x, y).dim(f);
            buf.set(x as i32, y as i32, c);
        }
    }
}
