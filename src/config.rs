use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

/// A side-scrolling gopher arcade game with a bullet gun.
#[derive(Clone, Debug, Parser)]
#[command(name = "takuman", version, about)]
pub struct Settings {
    /// Enable the CRT effect
    #[arg(long)]
    pub crt: bool,

    /// Frame updates per second
    #[arg(long, default_value_t = 60, value_parser = clap::value_parser!(u32).range(1..=240))]
    pub tps: u32,

    /// Seed for the pipe layout; random when omitted
    #[arg(long)]
    pub seed: Option<u64>,

    /// Keep flying through pipes and the ground instead of dying
    #[arg(long)]
    pub no_collide: bool,

    /// Write logs to this file (filter with RUST_LOG)
    #[arg(long, value_name = "PATH")]
    pub log: Option<PathBuf>,
}

impl Settings {
    pub fn frame_duration(&self) -> Duration {
        Duration::from_secs(1) / self.tps.max(1)
    }
}
