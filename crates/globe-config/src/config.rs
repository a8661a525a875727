//! Configuration structs with defaults matching the original scene and RON persistence.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// File name used inside the config directory.
pub const CONFIG_FILE_NAME: &str = "config.ron";

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Orbiting particle field settings.
    pub field: FieldConfig,
    /// Globe spin and grid settings.
    pub globe: GlobeConfig,
    /// Headless demo host settings.
    pub demo: DemoConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Particle field configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FieldConfig {
    /// Number of particles on the shell.
    pub particle_count: usize,
    /// Shell radius (globe radius is 1.0).
    pub shell_radius: f32,
    /// Points per precomputed orbit path.
    pub orbit_samples: usize,
    /// Slowest angular speed in radians per frame.
    pub min_speed: f32,
    /// Fastest angular speed in radians per frame (exclusive).
    pub max_speed: f32,
    /// Maximum ray-to-particle distance that still counts as a pick.
    pub pick_tolerance: f32,
    /// Seed for particle placement and speeds.
    pub seed: u64,
}

/// Globe configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GlobeConfig {
    /// Globe rotation per frame in radians.
    pub spin_rate: f32,
    /// Radius of the latitude/longitude grid.
    pub grid_radius: f32,
    /// Number of latitude and longitude lines (and segments per line).
    pub grid_segments: u32,
    /// Earth texture recoloured to the land/ocean palette. No texture when unset.
    pub texture_path: Option<PathBuf>,
}

/// Headless demo configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DemoConfig {
    /// Frames to simulate.
    pub frames: u32,
    /// Camera eye position, looking at the origin.
    pub camera_position: [f32; 3],
    /// Vertical field of view in degrees.
    pub fov_y_degrees: f32,
    /// Viewport aspect ratio (width / height).
    pub aspect_ratio: f32,
    /// Playback speed label ("-16x", "-4x", "Live", "+4x", "+16x").
    pub playback: String,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
    /// Write a JSON log file next to the config in debug builds.
    pub log_to_file: bool,
}

// --- Default implementations ---

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            particle_count: 2000,
            shell_radius: 1.01,
            orbit_samples: 100,
            min_speed: 0.0002,
            max_speed: 0.001,
            pick_tolerance: 0.01,
            seed: 42,
        }
    }
}

impl Default for GlobeConfig {
    fn default() -> Self {
        Self {
            spin_rate: 0.001,
            grid_radius: 1.02,
            grid_segments: 36,
            texture_path: None,
        }
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            frames: 600,
            camera_position: [0.0, 0.0, 2.5],
            fov_y_degrees: 75.0,
            aspect_ratio: 16.0 / 9.0,
            playback: "Live".to_string(),
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_to_file: false,
        }
    }
}

// --- Load / Save / Reload ---

impl Config {
    /// Platform default config directory (`<config_dir>/globe`).
    pub fn default_dir() -> Result<PathBuf, ConfigError> {
        dirs::config_dir()
            .map(|d| d.join("globe"))
            .ok_or(ConfigError::NoConfigDir)
    }

    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE_NAME);

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::ReadError)?;
            let config: Config = ron::from_str(&contents).map_err(ConfigError::ParseError)?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as `config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(ConfigError::WriteError)?;

        let config_path = config_dir.join(CONFIG_FILE_NAME);
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .separate_tuple_members(true)
            .enumerate_arrays(false);

        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;

        std::fs::write(&config_path, serialized).map_err(ConfigError::WriteError)?;
        Ok(())
    }

    /// Hot-reload: returns `Some(new_config)` if the file changed, `None` otherwise.
    pub fn reload(&self, config_dir: &Path) -> Result<Option<Self>, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE_NAME);
        let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::ReadError)?;
        let new_config: Config = ron::from_str(&contents).map_err(ConfigError::ParseError)?;

        if &new_config != self {
            log::info!("Config reloaded with changes");
            Ok(Some(new_config))
        } else {
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_scene() {
        let config = Config::default();
        assert_eq!(config.field.particle_count, 2000);
        assert_eq!(config.field.orbit_samples, 100);
        assert!((config.field.shell_radius - 1.01).abs() < 1e-6);
        assert!(config.field.min_speed < config.field.max_speed);
        assert_eq!(config.globe.grid_segments, 36);
        assert_eq!(config.demo.playback, "Live");
    }

    #[test]
    fn test_default_config_serializes() {
        let config = Config::default();
        let ron_str =
            ron::ser::to_string_pretty(&config, ron::ser::PrettyConfig::new().depth_limit(3))
                .unwrap();
        assert!(ron_str.contains("particle_count: 2000"));
        assert!(ron_str.contains("grid_segments: 36"));
    }

    #[test]
    fn test_missing_section_uses_default() {
        let ron_str = "(field: (particle_count: 10), debug: ())";
        let config: Config = ron::from_str(ron_str).unwrap();
        assert_eq!(config.field.particle_count, 10);
        assert_eq!(config.field.orbit_samples, 100);
        assert_eq!(config.globe, GlobeConfig::default());
    }

    #[test]
    fn test_extra_field_ignored() {
        let result: Result<Config, _> = ron::from_str("(future_setting: true)");
        assert!(result.is_ok());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.field.particle_count = 64;
        config.field.seed = 7;
        config.demo.playback = "+16x".to_string();

        config.save(dir.path()).unwrap();
        let loaded = Config::load_or_create(dir.path()).unwrap();
        assert_eq!(config, loaded);
    }

    #[test]
    fn test_load_or_create_writes_default_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_or_create(dir.path()).unwrap();
        assert_eq!(config, Config::default());
        assert!(dir.path().join(CONFIG_FILE_NAME).exists());
    }

    #[test]
    fn test_reload_detects_changes() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::default();
        config.save(dir.path()).unwrap();

        let mut modified = config.clone();
        modified.globe.spin_rate = 0.002;
        modified.save(dir.path()).unwrap();

        let result = config.reload(dir.path()).unwrap();
        assert_eq!(result.map(|c| c.globe.spin_rate), Some(0.002));
    }

    #[test]
    fn test_texture_path_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        assert!(config.globe.texture_path.is_none());
        config.globe.texture_path = Some(PathBuf::from("textures/earth.jpg"));
        config.save(dir.path()).unwrap();

        let loaded = Config::load_or_create(dir.path()).unwrap();
        assert_eq!(
            loaded.globe.texture_path.as_deref(),
            Some(Path::new("textures/earth.jpg"))
        );
    }

    #[test]
    fn test_reload_no_changes() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::default();
        config.save(dir.path()).unwrap();
        assert!(config.reload(dir.path()).unwrap().is_none());
    }

    #[test]
    fn test_invalid_ron_produces_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE_NAME), "{{not valid}}").unwrap();
        let result = Config::load_or_create(dir.path());
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }
}
