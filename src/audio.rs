use fundsp::prelude::*;
use log::info;
use rodio::{OutputStream, Sink, buffer::SamplesBuffer};

use crate::error::GameError;

const SAMPLE_RATE: u32 = 44_100;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cue {
    Jump,
    Hit,
}

/// Sound output as seen by the game.
///
/// `replay` rewinds the cue before playing it, so a cue triggered while it
/// is still sounding starts over instead of overlapping itself.
pub trait Cues {
    fn replay(&mut self, cue: Cue) -> Result<(), GameError>;
}

/// Drops every cue. Used by tests and headless runs.
#[derive(Debug, Default)]
pub struct Silent;

impl Cues for Silent {
    fn replay(&mut self, _cue: Cue) -> Result<(), GameError> {
        Ok(())
    }
}

// ── Synthesis ───────────────────────────────────────────────────────────────

fn render(unit: &mut dyn AudioUnit, seconds: f64) -> Vec<f32> {
    unit.set_sample_rate(f64::from(SAMPLE_RATE));
    let n = (f64::from(SAMPLE_RATE) * seconds) as usize;
    (0..n).map(|_| unit.get_mono()).collect()
}

/// Short rising square chirp.
fn synth_jump() -> Vec<f32> {
    // 300Hz to 900Hz over 0.12s, gain 0.12 to 0 over 0.15s
    let freq = lfo(|t: f64| 300.0 + 600.0 * (t / 0.12).min(1.0));
    let gain = lfo(|t: f64| 0.12 - 0.12 * (t / 0.15).min(1.0));
    let mut sound = (freq >> square()) * gain;
    render(&mut sound, 0.15)
}

/// Falling sawtooth thud.
fn synth_hit() -> Vec<f32> {
    // 400Hz to 80Hz over 0.4s, gain 0.15 to 0 over 0.5s
    let freq = lfo(|t: f64| 400.0 - 320.0 * (t / 0.4).min(1.0));
    let gain = lfo(|t: f64| 0.15 - 0.15 * (t / 0.5).min(1.0));
    let mut sound = (freq >> saw()) * gain;
    render(&mut sound, 0.5)
}

// ── Output ──────────────────────────────────────────────────────────────────

struct Channel {
    sink: Sink,
    samples: Vec<f32>,
}

impl Channel {
    fn replay(&self) {
        self.sink.clear();
        self.sink
            .append(SamplesBuffer::new(1, SAMPLE_RATE, self.samples.clone()));
        self.sink.play();
    }
}

/// Plays cues on the default audio device, one sink per cue.
pub struct Speaker {
    _stream: OutputStream,
    jump: Channel,
    hit: Channel,
}

impl Speaker {
    pub fn open() -> Result<Self, GameError> {
        let (stream, handle) = OutputStream::try_default()?;
        let jump = Channel {
            sink: Sink::try_new(&handle)?,
            samples: synth_jump(),
        };
        let hit = Channel {
            sink: Sink::try_new(&handle)?,
            samples: synth_hit(),
        };
        info!(
            "audio ready: jump cue {} samples, hit cue {} samples",
            jump.samples.len(),
            hit.samples.len()
        );
        Ok(Self {
            _stream: stream,
            jump,
            hit,
        })
    }
}

impl Cues for Speaker {
    fn replay(&mut self, cue: Cue) -> Result<(), GameError> {
        match cue {
            Cue::Jump => self.jump.replay(),
            Cue::Hit => self.hit.replay(),
        }
        Ok(())
    }
}
