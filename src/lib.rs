//! Takuman: a side-scrolling gopher game with a bullet gun, drawn in the
//! terminal.
//!
//! The library holds the whole simulation so it can run without a terminal
//! or an audio device; the binary supplies input, sound and the screen.

pub mod audio;
pub mod bullets;
pub mod collision;
pub mod config;
pub mod constants;
pub mod crt;
pub mod error;
pub mod game;
pub mod gopher;
pub mod input;
pub mod math;
pub mod pipes;
pub mod render;
