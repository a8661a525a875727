//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Globe demo command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "globe", about = "Headless orbiting particle field host")]
pub struct CliArgs {
    /// Number of particles.
    #[arg(long)]
    pub particles: Option<usize>,

    /// Seed for particle placement.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Frames to simulate.
    #[arg(long)]
    pub frames: Option<u32>,

    /// Playback speed (-16x, -4x, Live, +4x, +16x).
    #[arg(long, allow_hyphen_values = true)]
    pub playback: Option<String>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(n) = args.particles {
            self.field.particle_count = n;
        }
        if let Some(seed) = args.seed {
            self.field.seed = seed;
        }
        if let Some(frames) = args.frames {
            self.demo.frames = frames;
        }
        if let Some(ref playback) = args.playback {
            self.demo.playback = playback.clone();
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_override() {
        let mut config = Config::default();
        let args = CliArgs {
            particles: Some(500),
            seed: Some(9),
            playback: Some("-4x".to_string()),
            ..Default::default()
        };
        config.apply_cli_overrides(&args);
        assert_eq!(config.field.particle_count, 500);
        assert_eq!(config.field.seed, 9);
        assert_eq!(config.demo.playback, "-4x");
        // Non-overridden fields retain defaults
        assert_eq!(config.demo.frames, 600);
        assert_eq!(config.debug.log_level, "info");
    }

    #[test]
    fn test_cli_no_override() {
        let original = Config::default();
        let mut config = Config::default();
        config.apply_cli_overrides(&CliArgs::default());
        assert_eq!(config, original);
    }

    #[test]
    fn test_cli_parses_negative_playback() {
        let args = CliArgs::parse_from(["globe", "--playback", "-16x", "--frames", "10"]);
        assert_eq!(args.playback.as_deref(), Some("-16x"));
        assert_eq!(args.frames, Some(10));
    }
}
