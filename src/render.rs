use crossterm::{
    cursor, queue,
    style::{self, Color as CColor},
};
use std::io::{self, Write};

use crate::constants::{
    BULLET_SIZE, GOPHER_SPRITE_HEIGHT, GOPHER_SPRITE_WIDTH, PIPE_GAP_Y, PIPE_WIDTH, SCREEN_HEIGHT,
    SCREEN_WIDTH, SUBPIXELS, TILE_SIZE, TITLE,
};
use crate::game::{Game, Mode};
use crate::math::{floor_div, floor_mod};

// ── Colors ──────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    const fn lerp(a: Rgb, b: Rgb, t_256: u16) -> Rgb {
        let t = t_256 as i32;
        Rgb(
            (a.0 as i32 + (b.0 as i32 - a.0 as i32) * t / 256) as u8,
            (a.1 as i32 + (b.1 as i32 - a.1 as i32) * t / 256) as u8,
            (a.2 as i32 + (b.2 as i32 - a.2 as i32) * t / 256) as u8,
        )
    }

    /// Scales every channel by `f_256 / 256`.
    pub const fn dim(self, f_256: u16) -> Rgb {
        Rgb::lerp(Rgb(0, 0, 0), self, f_256)
    }
}

const SKY: Rgb = Rgb(0x80, 0xa0, 0xc0);
const GRASS: Rgb = Rgb(84, 168, 55);
const GRASS_LIGHT: Rgb = Rgb(110, 200, 70);
const DIRT: Rgb = Rgb(210, 185, 110);
const DIRT_DARK: Rgb = Rgb(185, 160, 90);
const PIPE_L: Rgb = Rgb(74, 122, 26);
const PIPE_M: Rgb = Rgb(100, 170, 40);
const PIPE_R: Rgb = Rgb(115, 191, 46);
const PIPE_HI: Rgb = Rgb(145, 215, 62);
const CAP_DARK: Rgb = Rgb(60, 100, 20);
const FUR: Rgb = Rgb(120, 200, 230);
const FUR_HI: Rgb = Rgb(160, 225, 245);
const MUZZLE: Rgb = Rgb(235, 210, 170);
const EYE: Rgb = Rgb(255, 255, 255);
const PUPIL: Rgb = Rgb(20, 20, 20);
const NOSE: Rgb = Rgb(60, 40, 30);
const BULLET: Rgb = Rgb(255, 140, 30);
const BULLET_CORE: Rgb = Rgb(255, 230, 120);
const WHITE: Rgb = Rgb(255, 255, 255);
const SHADOW: Rgb = Rgb(30, 30, 30);

// ── Pixel buffer with half-block rendering ──────────────────────────────────

pub struct PixelBuf {
    w: usize,
    h: usize, // pixel height = terminal rows * 2
    px: Vec<Rgb>,
}

impl PixelBuf {
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            px: vec![SKY; w * h],
        }
    }

    pub fn resize(&mut self, w: usize, h: usize) {
        self.w = w;
        self.h = h;
        self.px.resize(w * h, SKY);
    }

    pub fn width(&self) -> usize {
        self.w
    }

    pub fn height(&self) -> usize {
        self.h
    }

    pub fn set(&mut self, x: i32, y: i32, c: Rgb) {
        if x >= 0 && y >= 0 && (x as usize) < self.w && (y as usize) < self.h {
            self.px[y as usize * self.w + x as usize] = c;
        }
    }

    pub fn get(&self, x: usize, y: usize) -> Rgb {
        self.px[y * self.w + x]
    }

    pub fn fill(&mut self, c: Rgb) {
        self.px.fill(c);
    }

    pub fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, c: Rgb) {
        for dy in 0..h {
            for dx in 0..w {
                self.set(x + dx, y + dy, c);
            }
        }
    }

    pub fn render(&self, out: &mut impl Write) -> io::Result<()> {
        queue!(out, cursor::MoveTo(0, 0))?;
        let rows = self.h / 2;
        let mut prev_fg = Rgb(0, 0, 0);
        let mut prev_bg = Rgb(0, 0, 0);
        let mut need_fg = true;
        let mut need_bg = true;

        for row in 0..rows {
            for col in 0..self.w {
                let top = self.get(col, row * 2);
                let bot = self.get(col, row * 2 + 1);

                if top == bot {
                    if need_bg || prev_bg != top {
                        queue!(out, style::SetBackgroundColor(term_color(top)))?;
                        prev_bg = top;
                        need_bg = false;
                    }
                    queue!(out, style::Print(' '))?;
                } else {
                    if need_fg || prev_fg != top {
                        queue!(out, style::SetForegroundColor(term_color(top)))?;
                        prev_fg = top;
                        need_fg = false;
                    }
                    if need_bg || prev_bg != bot {
                        queue!(out, style::SetBackgroundColor(term_color(bot)))?;
                        prev_bg = bot;
                        need_bg = false;
                    }
                    queue!(out, style::Print('\u{2580}'))?; // ▀
                }
            }
            if row + 1 < rows {
                queue!(out, style::ResetColor, style::Print("\r\n"))?;
                need_fg = true;
                need_bg = true;
            }
        }
        queue!(out, style::ResetColor)
    }
}

fn term_color(c: Rgb) -> CColor {
    CColor::Rgb {
        r: c.0,
        g: c.1,
        b: c.2,
    }
}

// ── Logical screen ──────────────────────────────────────────────────────────

/// Maps the fixed logical screen onto the buffer's pixel grid.
#[derive(Clone, Copy, Debug)]
struct Viewport {
    sx: f32,
    sy: f32,
}

impl Viewport {
    fn of(buf: &PixelBuf) -> Self {
        Self {
            sx: buf.width() as f32 / SCREEN_WIDTH as f32,
            sy: buf.height() as f32 / SCREEN_HEIGHT as f32,
        }
    }

    /// Buffer rectangle `(x, y, w, h)` covering a logical one. Never
    /// collapses below one pixel.
    fn map(&self, x: i64, y: i64, w: i64, h: i64) -> (i32, i32, i32, i32) {
        let x0 = (x as f32 * self.sx).floor() as i32;
        let y0 = (y as f32 * self.sy).floor() as i32;
        let x1 = ((x + w) as f32 * self.sx).floor() as i32;
        let y1 = ((y + h) as f32 * self.sy).floor() as i32;
        (x0, y0, (x1 - x0).max(1), (y1 - y0).max(1))
    }

    fn fill(&self, buf: &mut PixelBuf, x: i64, y: i64, w: i64, h: i64, c: Rgb) {
        let (px, py, pw, ph) = self.map(x, y, w, h);
        buf.fill_rect(px, py, pw, ph, c);
    }
}

fn pipe_shade(x: i32, total_w: i32) -> Rgb {
    if total_w <= 1 {
        return PIPE_M;
    }
    let t = (x as f64 / (total_w - 1) as f64 * 256.0) as u16;
    if t < 64 {
        Rgb::lerp(PIPE_L, PIPE_M, (t * 4).min(256))
    } else if t < 100 {
        Rgb::lerp(PIPE_M, PIPE_HI, ((t - 64) * 7).min(256))
    } else if t < 160 {
        Rgb::lerp(PIPE_HI, PIPE_R, ((t - 100) * 4).min(256))
    } else {
        Rgb::lerp(PIPE_R, PIPE_L, ((t - 160) * 3).min(256))
    }
}

// ── Scene ───────────────────────────────────────────────────────────────────

/// Composes the frame for `game`. Bullets must already have been managed
/// for this frame.
pub fn draw(game: &Game, buf: &mut PixelBuf) {
    let vp = Viewport::of(buf);
    buf.fill(SKY);
    draw_tiles(game, buf, vp);
    if game.mode() != Mode::Title {
        draw_gopher(game, buf, vp);
    }
    draw_bullets(game, buf, vp);
    draw_score(game, buf);
}

fn draw_tiles(game: &Game, buf: &mut PixelBuf, vp: Viewport) {
    const NX: i64 = SCREEN_WIDTH / TILE_SIZE;
    const NY: i64 = SCREEN_HEIGHT / TILE_SIZE;

    let cam = game.camera();
    let off_x = floor_mod(cam.x, TILE_SIZE);
    let off_y = floor_mod(cam.y, TILE_SIZE);

    for i in -2..NX + 1 {
        let x = i * TILE_SIZE - off_x;

        // ground
        let gy = (NY - 1) * TILE_SIZE - off_y;
        vp.fill(buf, x, gy, TILE_SIZE, TILE_SIZE, DIRT);
        vp.fill(buf, x, gy + TILE_SIZE / 2, TILE_SIZE, TILE_SIZE / 4, DIRT_DARK);
        vp.fill(buf, x, gy, TILE_SIZE / 2, TILE_SIZE / 4, GRASS);
        vp.fill(buf, x + TILE_SIZE / 2, gy, TILE_SIZE / 2, TILE_SIZE / 4, GRASS_LIGHT);

        // pipe
        let Some(tile_y) = game.pipes().pipe_at(floor_div(cam.x, TILE_SIZE) + i) else {
            continue;
        };
        for j in 0..tile_y {
            draw_pipe_tile(buf, vp, x, j * TILE_SIZE - off_y, j == tile_y - 1);
        }
        for j in tile_y + PIPE_GAP_Y..NY - 1 {
            draw_pipe_tile(buf, vp, x, j * TILE_SIZE - off_y, j == tile_y + PIPE_GAP_Y);
        }
    }
}

fn draw_pipe_tile(buf: &mut PixelBuf, vp: Viewport, x: i64, y: i64, cap: bool) {
    let (px, py, pw, ph) = vp.map(x, y, PIPE_WIDTH, TILE_SIZE);
    for dx in 0..pw {
        let c = pipe_shade(dx, pw);
        for dy in 0..ph {
            buf.set(px + dx, py + dy, c);
        }
    }
    if cap {
        buf.fill_rect(px, py, pw, 1, CAP_DARK);
        buf.fill_rect(px, py + ph - 1, pw, 1, CAP_DARK);
    }
}

fn draw_gopher(game: &Game, buf: &mut PixelBuf, vp: Viewport) {
    let g = game.gopher();
    let cam = game.camera();
    let x = g.x() - cam.x;
    let y = g.y() - cam.y;
    let (w, h) = (GOPHER_SPRITE_WIDTH, GOPHER_SPRITE_HEIGHT);

    // Ears
    vp.fill(buf, x + 6, y, 10, 10, FUR);
    vp.fill(buf, x + w - 16, y, 10, 10, FUR);
    // Body
    vp.fill(buf, x + 4, y + 6, w - 8, h - 10, FUR);
    vp.fill(buf, x + 8, y + 6, w - 16, 6, FUR_HI);
    // Eyes
    vp.fill(buf, x + 12, y + 14, 12, 12, EYE);
    vp.fill(buf, x + w - 24, y + 14, 12, 12, EYE);
    vp.fill(buf, x + 18, y + 18, 5, 5, PUPIL);
    vp.fill(buf, x + w - 18, y + 18, 5, 5, PUPIL);
    // Muzzle
    vp.fill(buf, x + 20, y + 28, w - 40, 10, MUZZLE);
    vp.fill(buf, x + w / 2 - 3, y + 28, 6, 4, NOSE);
    // Feet
    vp.fill(buf, x + 8, y + h - 6, 14, 6, MUZZLE);
    vp.fill(buf, x + w - 22, y + h - 6, 14, 6, MUZZLE);
}

/// Bullets travel out from the gopher's screen position.
fn draw_bullets(game: &Game, buf: &mut PixelBuf, vp: Viewport) {
    let origin = game.gopher().x() - game.camera().x;
    for b in game.bullets().in_flight() {
        let x = origin + b.pos_x as i64;
        let y = (b.shot_pos_y / SUBPIXELS as f64) as i64;
        vp.fill(buf, x, y, BULLET_SIZE, BULLET_SIZE, BULLET);
        vp.fill(buf, x + 4, y + 4, BULLET_SIZE - 8, BULLET_SIZE - 8, BULLET_CORE);
    }
}

// ── 3x5 bitmap digits ──────────────────────────────────────────────────────

#[rustfmt::skip]
const DIGITS: [[u8; 15]; 10] = [
    [1,1,1, 1,0,1, 1,0,1, 1,0,1, 1,1,1], // 0
    [0,1,0, 1,1,0, 0,1,0, 0,1,0, 1,1,1], // 1
    [1,1,1, 0,0,1, 1,1,1, 1,0,0, 1,1,1], // 2
    [1,1,1, 0,0,1, 0,1,1, 0,0,1, 1,1,1], // 3
    [1,0,1, 1,0,1, 1,1,1, 0,0,1, 0,0,1], // 4
    [1,1,1, 1,0,0, 1,1,1, 0,0,1, 1,1,1], // 5
    [1,1,1, 1,0,0, 1,1,1, 1,0,1, 1,1,1], // 6
    [1,1,1, 0,0,1, 0,1,0, 0,1,0, 0,1,0], // 7
    [1,1,1, 1,0,1, 1,1,1, 1,0,1, 1,1,1], // 8
    [1,1,1, 1,0,1, 1,1,1, 0,0,1, 1,1,1], // 9
];

fn draw_digit(buf: &mut PixelBuf, x: i32, y: i32, d: u8, fg: Rgb) {
    let glyph = &DIGITS[d as usize];
    for row in 0..5 {
        for col in 0..3 {
            if glyph[row * 3 + col] == 1 {
                let px = x + col as i32;
                let py = y + row as i32;
                buf.set(px + 1, py + 1, SHADOW);
                buf.set(px, py, fg);
            }
        }
    }
}

/// Draws `text` (digits only) with its right edge at `right`.
fn draw_number_right(buf: &mut PixelBuf, right: i32, y: i32, text: &str, fg: Rgb) {
    let total_w = text.len() as i32 * 4 - 1; // 3px per digit + 1px spacing
    let start_x = right - total_w;
    for (i, ch) in text.bytes().enumerate() {
        if ch.is_ascii_digit() {
            draw_digit(buf, start_x + i as i32 * 4, y, ch - b'0', fg);
        }
    }
}

fn draw_score(game: &Game, buf: &mut PixelBuf) {
    let text = format!("{:04}", game.score().max(0));
    draw_number_right(buf, buf.width() as i32 - 2, 1, &text, WHITE);
}

// ── Text overlay ────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
}

/// A line of terminal text placed at a logical y coordinate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextLine {
    pub y: i64,
    pub align: Align,
    pub text: String,
}

impl TextLine {
    fn center(y: i64, text: &str) -> Self {
        Self {
            y,
            align: Align::Center,
            text: text.to_owned(),
        }
    }
}

const FONT_SIZE: i64 = 24;
const TITLE_FONT_SIZE: i64 = FONT_SIZE * 3 / 2;
const SMALL_FONT_SIZE: i64 = FONT_SIZE / 2;

/// Text for the current mode, plus the frame rate counter.
pub fn text_lines(game: &Game, tps: f64) -> Vec<TextLine> {
    let top = 3 * TITLE_FONT_SIZE;
    let mut lines = Vec::new();
    match game.mode() {
        Mode::Title => {
            lines.push(TextLine::center(top, TITLE));
            for (i, msg) in ["PRESS SPACE KEY", "OR CLICK THE SCREEN", "E TO FIRE"]
                .iter()
                .enumerate()
            {
                lines.push(TextLine::center(top + (6 + 2 * i as i64) * FONT_SIZE, msg));
            }
            let foot = SCREEN_HEIGHT - SMALL_FONT_SIZE * 3;
            lines.push(TextLine::center(foot, "Go Gopher by Renee French is"));
            lines.push(TextLine::center(
                foot + SMALL_FONT_SIZE,
                "licenced under CC BY 3.0.",
            ));
        }
        Mode::GameOver => lines.push(TextLine::center(top + FONT_SIZE, "YOU DIED!")),
        Mode::Game => {}
    }
    lines.push(TextLine {
        y: 0,
        align: Align::Left,
        text: format!("TPS: {tps:0.2}"),
    });
    lines
}

/// Prints `lines` over a frame already rendered to a `cols` x `rows` terminal.
pub fn print_text(out: &mut impl Write, lines: &[TextLine], cols: u16, rows: u16) -> io::Result<()> {
    if rows == 0 {
        return Ok(());
    }
    for line in lines {
        let row = (line.y.clamp(0, SCREEN_HEIGHT - 1) * i64::from(rows) / SCREEN_HEIGHT) as u16;
        let len = line.text.chars().count().min(cols as usize) as u16;
        let col = match line.align {
            Align::Left => 0,
            Align::Center => (cols - len) / 2,
        };
        let text: String = line.text.chars().take(len as usize).collect();
        queue!(
            out,
            cursor::MoveTo(col, row.min(rows - 1)),
            style::SetForegroundColor(term_color(WHITE)),
            style::SetBackgroundColor(term_color(SHADOW)),
            style::Print(text),
            style::ResetColor
        )?;
    }
    Ok(())
}
