use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::audio::{Cue, Cues};
use crate::bullets::BulletPool;
use crate::collision::{HitBox, hits};
use crate::constants::{
    GAME_OVER_COUNTDOWN, PIPE_INTERVAL_X, PIPE_START_OFFSET_X, SUBPIXELS, TILE_SIZE,
};
use crate::error::GameError;
use crate::gopher::{Camera, Gopher};
use crate::input::FrameInput;
use crate::math::floor_div;
use crate::pipes::PipeTable;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Title,
    Game,
    GameOver,
}

/// One play session: everything a frame reads or writes.
pub struct Game {
    mode: Mode,
    gopher: Gopher,
    camera: Camera,
    pipes: PipeTable,
    bullets: BulletPool,
    game_over_count: u32,
    collisions: bool,
    rng: StdRng,
}

impl Game {
    /// A session on the title screen. With `collisions` off, crashing into
    /// a pipe or the ground never ends the run.
    pub fn new(mut rng: StdRng, collisions: bool) -> Self {
        let pipes = PipeTable::generate(&mut rng);
        Self {
            mode: Mode::Title,
            gopher: Gopher::default(),
            camera: Camera::default(),
            pipes,
            bullets: BulletPool::new(),
            game_over_count: 0,
            collisions,
            rng,
        }
    }

    pub fn from_seed(seed: Option<u64>, collisions: bool) -> Self {
        let rng = match seed {
            Some(seed) => {
                debug!("pipe layout seeded with {seed}");
                StdRng::seed_from_u64(seed)
            }
            None => StdRng::from_entropy(),
        };
        Self::new(rng, collisions)
    }

    /// Back to the starting line with a fresh pipe layout.
    fn init(&mut self) {
        self.gopher = Gopher::default();
        self.camera = Camera::default();
        self.pipes = PipeTable::generate(&mut self.rng);
        debug!("pipe layout regenerated");
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn gopher(&self) -> &Gopher {
        &self.gopher
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn pipes(&self) -> &PipeTable {
        &self.pipes
    }

    pub fn bullets(&self) -> &BulletPool {
        &self.bullets
    }

    pub fn game_over_count(&self) -> u32 {
        self.game_over_count
    }

    fn set_mode(&mut self, mode: Mode) {
        info!("mode {:?} -> {:?} at score {}", self.mode, mode, self.score());
        self.mode = mode;
    }

    /// Advances the session by one frame.
    pub fn update<C: Cues + ?Sized>(
        &mut self,
        input: &FrameInput,
        cues: &mut C,
    ) -> Result<(), GameError> {
        match self.mode {
            Mode::Title => {
                if input.confirm {
                    self.set_mode(Mode::Game);
                }
            }
            Mode::Game => {
                self.camera.step();
                if input.confirm {
                    self.gopher.jump();
                    cues.replay(Cue::Jump)?;
                }
                self.gopher.step();

                if self.collisions && self.hit() {
                    cues.replay(Cue::Hit)?;
                    self.set_mode(Mode::GameOver);
                    self.game_over_count = GAME_OVER_COUNTDOWN;
                }
            }
            Mode::GameOver => {
                self.game_over_count = self.game_over_count.saturating_sub(1);
                if self.game_over_count == 0 && input.confirm {
                    self.init();
                    self.set_mode(Mode::Title);
                }
            }
        }
        Ok(())
    }

    /// Bullet handling for the frame, run by the draw pass before the
    /// bullets are composed: fires on request, then moves everything in
    /// flight. Works in every mode.
    pub fn manage_bullets(&mut self, fire: bool) {
        self.bullets.fire_if_requested(fire, self.gopher.y16);
        self.bullets.advance();
    }

    /// Pipes passed so far.
    pub fn score(&self) -> i64 {
        score_at(self.gopher.x16)
    }

    /// Whether the gopher is touching something. Always false outside of play.
    pub fn hit(&self) -> bool {
        self.mode == Mode::Game && hits(HitBox::of(&self.gopher), &self.pipes)
    }
}

/// Score for a gopher at horizontal position `x16`.
pub fn score_at(x16: i64) -> i64 {
    let x = floor_div(floor_div(x16, SUBPIXELS), TILE_SIZE);
    if x - PIPE_START_OFFSET_X <= 0 {
        return 0;
    }
    floor_div(x - PIPE_START_OFFSET_X, PIPE_INTERVAL_X)
}
