use thiserror::Error;

use crate::audio::Cue;

#[derive(Debug, Error)]
pub enum GameError {
    #[error("terminal I/O failed: {0}")]
    Terminal(#[from] std::io::Error),

    #[error("could not open the audio output device: {0}")]
    AudioStream(#[from] rodio::StreamError),

    #[error("could not create an audio sink: {0}")]
    AudioSink(#[from] rodio::PlayError),

    /// Reported by `Cues` backends whose playback can fail mid-game. The
    /// rodio `Speaker` never produces it.
    #[error("could not replay the {cue:?} cue: {reason}")]
    Cue { cue: Cue, reason: String },
}
