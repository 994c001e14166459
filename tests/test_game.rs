use takuman::audio::{Cue, Cues, Silent};
use takuman::constants::*;
use takuman::error::GameError;
use takuman::game::*;
use takuman::gopher::{Camera, Gopher};
use takuman::input::FrameInput;

use rand::SeedableRng;
use rand::rngs::StdRng;

#[derive(Default)]
struct Recorder {
    played: Vec<Cue>,
}

impl Cues for Recorder {
    fn replay(&mut self, cue: Cue) -> Result<(), GameError> {
        self.played.push(cue);
        Ok(())
    }
}

/// Fails every replay, like a broken audio device.
struct Broken;

impl Cues for Broken {
    fn replay(&mut self, cue: Cue) -> Result<(), GameError> {
        Err(GameError::Cue {
            cue,
            reason: "device gone".to_owned(),
        })
    }
}

fn new_game(collisions: bool) -> Game {
    Game::new(StdRng::seed_from_u64(42), collisions)
}

fn frame(g: &mut Game, input: FrameInput, cues: &mut impl Cues) {
    g.update(&input, cues).unwrap();
}

/// Starts a game and lets the gopher fall until it crashes into the ground.
fn crash(g: &mut Game, cues: &mut impl Cues) {
    frame(g, FrameInput::CONFIRM, cues);
    for _ in 0..500 {
        if g.mode() == Mode::GameOver {
            return;
        }
        frame(g, FrameInput::NONE, cues);
    }
    panic!("never crashed");
}

// ── score ─────────────────────────────────────────────────────────────────────

#[test]
fn score_starts_at_zero() {
    assert_eq!(score_at(0), 0);
    assert_eq!(score_at(GOPHER_START_X16), 0);
    assert_eq!(score_at(-10_000), 0);
    assert_eq!(new_game(true).score(), 0);
}

#[test]
fn score_counts_pipe_intervals() {
    let tile16 = TILE_SIZE * SUBPIXELS;
    let col = |c: i64| c * tile16;
    assert_eq!(score_at(col(PIPE_START_OFFSET_X + PIPE_INTERVAL_X) - 1), 0);
    assert_eq!(score_at(col(PIPE_START_OFFSET_X + PIPE_INTERVAL_X)), 1);
    assert_eq!(score_at(col(PIPE_START_OFFSET_X + 2 * PIPE_INTERVAL_X) - 1), 1);
    assert_eq!(score_at(col(PIPE_START_OFFSET_X + 2 * PIPE_INTERVAL_X)), 2);
}

#[test]
fn score_steps_by_one() {
    let mut prev = score_at(0);
    for x16 in (0..200_000).step_by(GOPHER_STEP_X16 as usize) {
        let s = score_at(x16);
        assert!(s == prev || s == prev + 1);
        prev = s;
    }
    assert!(prev > 0);
}

#[test]
fn score_keeps_growing_past_32_bits() {
    let far = i64::from(i32::MAX) + GOPHER_STEP_X16;
    assert!(score_at(far) > score_at(i64::from(i32::MAX) / 2));
    assert!(score_at(far) > 0);
}

// ── mode machine ──────────────────────────────────────────────────────────────

#[test]
fn title_waits_for_confirm() {
    let mut g = new_game(true);
    let mut cues = Recorder::default();
    for _ in 0..10 {
        frame(&mut g, FrameInput::NONE, &mut cues);
        frame(&mut g, FrameInput::FIRE, &mut cues);
    }
    assert_eq!(g.mode(), Mode::Title);
    assert_eq!(*g.gopher(), Gopher::default());

    frame(&mut g, FrameInput::CONFIRM, &mut cues);
    assert_eq!(g.mode(), Mode::Game);
    // Entering play does not jump
    assert!(cues.played.is_empty());
    assert_eq!(*g.gopher(), Gopher::default());
}

#[test]
fn game_frame_scrolls_and_falls() {
    let mut g = new_game(true);
    let mut cues = Silent;
    frame(&mut g, FrameInput::CONFIRM, &mut cues);
    frame(&mut g, FrameInput::NONE, &mut cues);
    assert_eq!(g.gopher().x16, GOPHER_START_X16 + GOPHER_STEP_X16);
    assert_eq!(g.gopher().vy16, GRAVITY_VY16);
    assert_eq!(g.camera().x, CAMERA_START_X + CAMERA_STEP_X);
}

#[test]
fn jump_plays_cue_each_time() {
    let mut g = new_game(true);
    let mut cues = Recorder::default();
    frame(&mut g, FrameInput::CONFIRM, &mut cues);
    frame(&mut g, FrameInput::CONFIRM, &mut cues);
    assert_eq!(g.gopher().y16, GOPHER_START_Y16 + JUMP_VY16);
    frame(&mut g, FrameInput::CONFIRM, &mut cues);
    assert_eq!(cues.played, vec![Cue::Jump, Cue::Jump]);
}

#[test]
fn crash_ends_the_run() {
    let mut g = new_game(true);
    let mut cues = Recorder::default();
    crash(&mut g, &mut cues);
    assert_eq!(g.mode(), Mode::GameOver);
    assert_eq!(cues.played, vec![Cue::Hit]);
    assert_eq!(g.game_over_count(), GAME_OVER_COUNTDOWN);
    // Nothing is hit once play is over
    assert!(!g.hit());
}

#[test]
fn without_collisions_play_never_ends() {
    // Reproduces builds where the hit check is unwired
    let mut g = new_game(false);
    let mut cues = Recorder::default();
    frame(&mut g, FrameInput::CONFIRM, &mut cues);
    for _ in 0..500 {
        frame(&mut g, FrameInput::NONE, &mut cues);
    }
    assert_eq!(g.mode(), Mode::Game);
    assert_eq!(g.gopher().y16, GROUND_Y16);
    assert!(g.hit());
    assert!(cues.played.is_empty());
}

#[test]
fn game_over_ignores_confirm_during_countdown() {
    let mut g = new_game(true);
    let mut cues = Silent;
    crash(&mut g, &mut cues);
    for _ in 0..GAME_OVER_COUNTDOWN - 1 {
        frame(&mut g, FrameInput::CONFIRM, &mut cues);
        assert_eq!(g.mode(), Mode::GameOver);
    }
    assert_eq!(g.game_over_count(), 1);
}

#[test]
fn game_over_needs_confirm_after_countdown() {
    let mut g = new_game(true);
    let mut cues = Silent;
    crash(&mut g, &mut cues);
    let crashed_pipes = g.pipes().clone();

    for _ in 0..GAME_OVER_COUNTDOWN + 20 {
        frame(&mut g, FrameInput::NONE, &mut cues);
    }
    assert_eq!(g.game_over_count(), 0);
    assert_eq!(g.mode(), Mode::GameOver);

    frame(&mut g, FrameInput::CONFIRM, &mut cues);
    assert_eq!(g.mode(), Mode::Title);
    assert_eq!(*g.gopher(), Gopher::default());
    assert_eq!(*g.camera(), Camera::default());
    assert_ne!(*g.pipes(), crashed_pipes);
}

#[test]
fn countdown_reaching_zero_accepts_same_frame_confirm() {
    let mut g = new_game(true);
    let mut cues = Silent;
    crash(&mut g, &mut cues);
    for _ in 0..GAME_OVER_COUNTDOWN - 1 {
        frame(&mut g, FrameInput::NONE, &mut cues);
    }
    frame(&mut g, FrameInput::CONFIRM, &mut cues);
    assert_eq!(g.mode(), Mode::Title);
}

#[test]
fn cue_failure_stops_the_frame() {
    let mut g = new_game(true);
    g.update(&FrameInput::CONFIRM, &mut Broken).unwrap();
    let err = g.update(&FrameInput::CONFIRM, &mut Broken).unwrap_err();
    assert!(matches!(err, GameError::Cue { cue: Cue::Jump, .. }));
}

// ── bullets through the session ───────────────────────────────────────────────

#[test]
fn bullets_fire_from_gopher_height() {
    let mut g = new_game(true);
    g.manage_bullets(true);
    let b = g.bullets().slots()[1];
    assert!(b.use_flag);
    assert_eq!(b.shot_pos_y, GOPHER_START_Y16 as f64);
    assert_eq!(b.pos_x, BULLET_SPEED);
}

#[test]
fn bullets_survive_restart() {
    let mut g = new_game(true);
    let mut cues = Silent;
    crash(&mut g, &mut cues);
    g.manage_bullets(true);
    for _ in 0..GAME_OVER_COUNTDOWN {
        frame(&mut g, FrameInput::NONE, &mut cues);
    }
    frame(&mut g, FrameInput::CONFIRM, &mut cues);
    assert_eq!(g.mode(), Mode::Title);
    assert_eq!(g.bullets().in_flight().count(), 1);
}
