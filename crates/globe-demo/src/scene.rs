//! Headless stand-in for the rendering host: owns the simulation state,
//! ticks it once per frame and turns clicks into orbit selections.

use glam::{Mat4, Vec2, Vec3};
use globe_config::Config;
use globe_orbits::{
    FieldSettings, GlobeError, GlobeSpin, Graticule, OrbitField, PickRay, PlaybackSpeed,
};

/// Perspective camera looking at the globe centre.
#[derive(Clone, Copy, Debug)]
pub struct OrbitCamera {
    /// Eye position.
    pub eye: Vec3,
    /// Vertical field of view in radians.
    pub fov_y: f32,
    /// Width / height.
    pub aspect_ratio: f32,
}

impl OrbitCamera {
    const NEAR: f32 = 0.1;
    const FAR: f32 = 1000.0;

    pub fn view_projection(&self) -> Mat4 {
        let view = Mat4::look_at_rh(self.eye, Vec3::ZERO, Vec3::Y);
        let proj = Mat4::perspective_rh(self.fov_y, self.aspect_ratio, Self::NEAR, Self::FAR);
        proj * view
    }

    /// Normalized device coordinates of `point`, or `None` if it is behind
    /// the camera or outside the viewport.
    pub fn project(&self, point: Vec3) -> Option<Vec2> {
        let clip = self.view_projection() * point.extend(1.0);
        if clip.w <= 0.0 {
            return None;
        }
        let ndc = clip.truncate().truncate() / clip.w;
        (ndc.abs().max_element() <= 1.0).then_some(ndc)
    }

    /// Pick ray through a click at `ndc`.
    pub fn pick_ray(&self, ndc: Vec2) -> PickRay {
        PickRay::through_ndc(self.eye, ndc, self.view_projection().inverse())
    }
}

/// Everything the host draws each frame.
pub struct Scene {
    field: OrbitField,
    spin: GlobeSpin,
    grid: Graticule,
    camera: OrbitCamera,
    playback: PlaybackSpeed,
    selected_orbit: Option<Vec<Vec3>>,
    frame: u64,
}

impl Scene {
    pub fn from_config(config: &Config) -> Result<Self, GlobeError> {
        let settings = FieldSettings {
            count: config.field.particle_count,
            shell_radius: config.field.shell_radius,
            orbit_samples: config.field.orbit_samples,
            speed_range: (config.field.min_speed, config.field.max_speed),
            pick_tolerance: config.field.pick_tolerance,
            seed: config.field.seed,
        };
        let field = OrbitField::new(&settings)?;
        let grid = Graticule::new(config.globe.grid_radius, config.globe.grid_segments)?;

        let playback = parse_playback(&config.demo.playback, PlaybackSpeed::Live);

        let camera = OrbitCamera {
            eye: Vec3::from_array(config.demo.camera_position),
            fov_y: config.demo.fov_y_degrees.to_radians(),
            aspect_ratio: config.demo.aspect_ratio,
        };

        Ok(Self {
            field,
            spin: GlobeSpin::new(config.globe.spin_rate),
            grid,
            camera,
            playback,
            selected_orbit: None,
            frame: 0,
        })
    }

    /// Pick up settings that can change while running: playback speed and
    /// spin rate. An unknown playback label keeps the current speed.
    pub fn apply_live_settings(&mut self, config: &Config) {
        self.playback = parse_playback(&config.demo.playback, self.playback);
        if self.spin.rate() != config.globe.spin_rate {
            tracing::info!(
                from = self.spin.rate(),
                to = config.globe.spin_rate,
                "spin rate changed"
            );
            self.spin.set_rate(config.globe.spin_rate);
        }
    }

    /// Advance globe and particles by one frame at the current playback speed.
    pub fn tick(&mut self) {
        let multiplier = self.playback.multiplier();
        self.field.advance_scaled(multiplier);
        self.spin.advance_scaled(multiplier);
        self.frame += 1;
    }

    /// Handle a click. A hit replaces the highlighted orbit; a miss keeps it.
    pub fn click(&mut self, ndc: Vec2) -> bool {
        let ray = self.camera.pick_ray(ndc);
        match self.field.select_nearest(&ray) {
            Some(orbit) => {
                tracing::debug!(samples = orbit.len(), "orbit selected");
                self.selected_orbit = Some(orbit.to_vec());
                true
            }
            None => false,
        }
    }

    /// Screen position of the first particle currently in view.
    pub fn visible_particle(&self) -> Option<(usize, Vec2)> {
        self.field
            .positions()
            .into_iter()
            .enumerate()
            .filter(|(_, p)| p.dot(self.camera.eye) > 0.0)
            .find_map(|(i, p)| self.camera.project(p).map(|ndc| (i, ndc)))
    }

    pub fn playback(&self) -> PlaybackSpeed {
        self.playback
    }

    pub fn field(&self) -> &OrbitField {
        &self.field
    }

    pub fn spin(&self) -> &GlobeSpin {
        &self.spin
    }

    pub fn grid(&self) -> &Graticule {
        &self.grid
    }

    pub fn selected_orbit(&self) -> Option<&[Vec3]> {
        self.selected_orbit.as_deref()
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }
}

fn parse_playback(label: &str, fallback: PlaybackSpeed) -> PlaybackSpeed {
    label.parse::<PlaybackSpeed>().unwrap_or_else(|e| {
        tracing::warn!("{e}, keeping {fallback}");
        fallback
    })
}
