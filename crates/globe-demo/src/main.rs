//! Headless host for the orbiting particle field.
//!
//! Loads `config.ron` (created with defaults on first run), applies CLI
//! overrides, runs the frame loop while watching the config file for live
//! changes, then clicks a visible particle and an empty patch of sky the way
//! a user would.
//!
//! Run with `cargo run -p globe-demo -- --frames 1200 --playback +4x`.

mod scene;

use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use glam::Vec2;
use globe_config::{CliArgs, Config};
use tracing::{error, info, warn};

use crate::scene::Scene;

/// Frames between progress log lines and config reload checks.
const LOG_INTERVAL: u64 = 120;

fn main() -> ExitCode {
    let args = CliArgs::parse();

    let config_dir = match args.config.clone() {
        Some(dir) => dir,
        None => match Config::default_dir() {
            Ok(dir) => dir,
            Err(e) => {
                eprintln!("{e}");
                return ExitCode::FAILURE;
            }
        },
    };

    let file_config = Config::load_or_create(&config_dir).unwrap_or_else(|e| {
        eprintln!("Failed to load config: {e}, using defaults");
        Config::default()
    });
    let mut config = file_config.clone();
    config.apply_cli_overrides(&args);

    let log_dir = config_dir.join("logs");
    match globe_log::init_logging(
        Some(&log_dir),
        cfg!(debug_assertions) && config.debug.log_to_file,
        Some(&config),
    ) {
        Ok(Some(path)) => info!(path = %path.display(), "writing JSON log"),
        Ok(None) => {}
        Err(e) => eprintln!("logging already initialised: {e}"),
    }

    let mut scene = match Scene::from_config(&config) {
        Ok(scene) => scene,
        Err(e) => {
            error!("invalid configuration: {e}");
            return ExitCode::FAILURE;
        }
    };

    info!(
        particles = scene.field().len(),
        shell_radius = scene.field().shell_radius(),
        grid_lines = scene.grid().lines().count(),
        playback = %scene.playback(),
        "scene ready"
    );

    if let Some(texture) = &config.globe.texture_path {
        load_texture(&config_dir.join(texture));
    }

    let mut live = LiveConfig {
        dir: &config_dir,
        file_config,
        args: &args,
    };
    run(&mut scene, &mut live, config.demo.frames);
    ExitCode::SUCCESS
}

/// The on-disk config as last read, plus what is needed to re-apply CLI
/// overrides on top of a changed file.
struct LiveConfig<'a> {
    dir: &'a Path,
    file_config: Config,
    args: &'a CliArgs,
}

impl LiveConfig<'_> {
    fn poll(&mut self, scene: &mut Scene) {
        match self.file_config.reload(self.dir) {
            Ok(Some(changed)) => {
                let mut effective = changed.clone();
                effective.apply_cli_overrides(self.args);
                scene.apply_live_settings(&effective);
                self.file_config = changed;
            }
            Ok(None) => {}
            Err(e) => warn!("config reload failed: {e}"),
        }
    }
}

fn load_texture(path: &Path) {
    match globe_orbits::load_land_ocean_texture(path) {
        Ok(texture) => info!(
            path = %path.display(),
            width = texture.width(),
            height = texture.height(),
            land = globe_orbits::land_coverage(&texture),
            "globe texture ready"
        ),
        Err(e) => warn!(path = %path.display(), "globe texture unavailable: {e}"),
    }
}

fn run(scene: &mut Scene, live: &mut LiveConfig<'_>, frames: u32) {
    for _ in 0..frames {
        scene.tick();
        if scene.frame() % LOG_INTERVAL == 0 {
            info!(
                frame = scene.frame(),
                globe_angle = scene.spin().angle(),
                "tick"
            );
            live.poll(scene);
        }
    }

    match scene.visible_particle() {
        Some((index, ndc)) => {
            let hit = scene.click(ndc);
            info!(
                index,
                ndc = ?ndc,
                hit,
                orbit_samples = scene.selected_orbit().map_or(0, <[_]>::len),
                "clicked particle"
            );
        }
        None => info!("no particle in view"),
    }

    let sky = Vec2::new(0.98, 0.98);
    let hit = scene.click(sky);
    info!(ndc = ?sky, hit, "clicked empty sky");
}
