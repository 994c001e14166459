use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    cursor,
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute, terminal,
};
use std::fs::File;
use std::io::{self, Write, stdout};
use std::path::Path;
use std::time::{Duration, Instant};

use takuman::audio::{Cues, Speaker};
use takuman::config::Settings;
use takuman::constants::TITLE;
use takuman::crt;
use takuman::game::Game;
use takuman::input::{self, FrameInput};
use takuman::render::{self, PixelBuf};

// ── Logging ─────────────────────────────────────────────────────────────────

fn init_logging(path: Option<&Path>) -> Result<()> {
    // The terminal belongs to the renderer, so logs only ever go to a file.
    let Some(path) = path else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("cannot create log file {}", path.display()))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

// ── Frame rate ──────────────────────────────────────────────────────────────

/// Frames actually completed per second, refreshed once a second.
struct TpsCounter {
    window_start: Instant,
    frames: u32,
    tps: f64,
}

impl TpsCounter {
    fn new() -> Self {
        Self {
            window_start: Instant::now(),
            frames: 0,
            tps: 0.0,
        }
    }

    fn tick(&mut self) -> f64 {
        self.frames += 1;
        let elapsed = self.window_start.elapsed();
        if elapsed >= Duration::from_secs(1) {
            self.tps = f64::from(self.frames) / elapsed.as_secs_f64();
            self.frames = 0;
            self.window_start = Instant::now();
        }
        self.tps
    }
}

// ── Main loop ───────────────────────────────────────────────────────────────

fn run(
    out: &mut impl Write,
    settings: &Settings,
    game: &mut Game,
    cues: &mut impl Cues,
) -> Result<()> {
    let (mut cols, mut rows) = terminal::size()?;
    let mut buf = PixelBuf::new(cols as usize, rows as usize * 2);
    let mut tps = TpsCounter::new();
    let frame_dur = settings.frame_duration();

    loop {
        let frame_start = Instant::now();

        // Input
        let mut input = FrameInput::default();
        while event::poll(Duration::ZERO)? {
            let ev = event::read()?;
            if let Event::Resize(c, r) = ev {
                cols = c;
                rows = r;
                buf.resize(c as usize, r as usize * 2);
            }
            if let Some(ev) = input::translate(&ev) {
                input.push(ev);
            }
        }
        if input.quit {
            return Ok(());
        }

        // Update
        game.update(&input, cues)?;

        // Render
        game.manage_bullets(input.fire);
        render::draw(game, &mut buf);
        if settings.crt {
            crt::apply(&mut buf);
        }
        buf.render(out)?;
        render::print_text(out, &render::text_lines(game, tps.tick()), cols, rows)?;
        out.flush()?;

        // Frame pacing
        let elapsed = frame_start.elapsed();
        if elapsed < frame_dur {
            std::thread::sleep(frame_dur - elapsed);
        }
    }
}

fn restore(out: &mut impl Write) -> io::Result<()> {
    execute!(
        out,
        DisableMouseCapture,
        terminal::LeaveAlternateScreen,
        cursor::Show,
        terminal::EnableLineWrap,
    )?;
    terminal::disable_raw_mode()
}

fn main() -> Result<()> {
    let settings = Settings::parse();
    init_logging(settings.log.as_deref())?;

    let mut speaker = Speaker::open().context("audio start-up failed")?;
    let mut game = Game::from_seed(settings.seed, !settings.no_collide);
    log::info!(
        "starting at {} tps, crt {}, collisions {}",
        settings.tps,
        settings.crt,
        !settings.no_collide
    );

    terminal::enable_raw_mode()?;
    let mut out = stdout();
    execute!(
        out,
        terminal::EnterAlternateScreen,
        terminal::SetTitle(TITLE),
        cursor::Hide,
        terminal::DisableLineWrap,
        EnableMouseCapture,
    )?;

    let result = run(&mut out, &settings, &mut game, &mut speaker);
    restore(&mut out).context("could not restore the terminal")?;
    if let Err(err) = &result {
        log::error!("game loop stopped: {err:#}");
    }
    result
}
