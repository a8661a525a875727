//! Globe rotation and the latitude/longitude grid drawn around it.

use std::f32::consts::{FRAC_PI_2, PI, TAU};

use glam::Vec3;

use crate::error::GlobeError;
use crate::particle::{rotate_about_y, wrapped_step};

/// Accumulated rotation of the globe mesh and grid about the vertical axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlobeSpin {
    angle: f32,
    rate: f32,
}

impl Default for GlobeSpin {
    fn default() -> Self {
        Self::new(0.001)
    }
}

impl GlobeSpin {
    /// Start at zero rotation, turning `rate` radians per frame.
    pub fn new(rate: f32) -> Self {
        Self { angle: 0.0, rate }
    }

    /// Current rotation in `[0, 2π)`.
    pub fn angle(&self) -> f32 {
        self.angle
    }

    /// Rotation per frame.
    pub fn rate(&self) -> f32 {
        self.rate
    }

    /// Advance by one frame.
    pub fn advance(&mut self) {
        self.advance_scaled(1.0);
    }

    /// Advance by `multiplier` frames; negative values turn backwards.
    ///
    /// Non-finite rates or multipliers leave the angle unchanged.
    pub fn advance_scaled(&mut self, multiplier: f32) {
        if let Some(step) = wrapped_step(self.rate, multiplier) {
            self.angle = (self.angle + step).rem_euclid(TAU);
        }
    }

    /// Change the rotation per frame, keeping the current angle.
    pub fn set_rate(&mut self, rate: f32) {
        self.rate = rate;
    }

    /// Apply the current rotation to a model-space point.
    pub fn rotate(&self, point: Vec3) -> Vec3 {
        rotate_about_y(point, self.angle)
    }
}

/// Latitude and longitude polylines on a sphere.
#[derive(Clone, Debug)]
pub struct Graticule {
    radius: f32,
    segments: u32,
    latitudes: Vec<Vec<Vec3>>,
    longitudes: Vec<Vec<Vec3>>,
}

impl Graticule {
    /// Build `segments` latitude lines and `segments` longitude lines, each
    /// with `segments + 1` points.
    pub fn new(radius: f32, segments: u32) -> Result<Self, GlobeError> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(GlobeError::InvalidGridRadius(radius));
        }
        if segments < 2 {
            return Err(GlobeError::InvalidGridSegments(segments));
        }

        let n = segments as f32;
        let latitude_of = |i: u32| i as f32 / n * PI - FRAC_PI_2;
        let longitude_of = |j: u32| j as f32 / n * TAU;

        let latitudes = (0..segments)
            .map(|i| {
                let lat = latitude_of(i);
                (0..=segments)
                    .map(|j| grid_point(radius, lat, longitude_of(j)))
                    .collect()
            })
            .collect();

        let longitudes = (0..segments)
            .map(|i| {
                let lon = longitude_of(i);
                (0..=segments)
                    .map(|j| grid_point(radius, latitude_of(j), lon))
                    .collect()
            })
            .collect();

        Ok(Self {
            radius,
            segments,
            latitudes,
            longitudes,
        })
    }

    /// Grid radius.
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Lines per direction.
    pub fn segments(&self) -> u32 {
        self.segments
    }

    /// Closed circles of constant latitude, south to north.
    pub fn latitudes(&self) -> &[Vec<Vec3>] {
        &self.latitudes
    }

    /// Meridian arcs from the south pole to the north pole.
    pub fn longitudes(&self) -> &[Vec<Vec3>] {
        &self.longitudes
    }

    /// Every polyline, latitudes first.
    pub fn lines(&self) -> impl Iterator<Item = &[Vec3]> {
        self.latitudes
            .iter()
            .chain(self.longitudes.iter())
            .map(Vec::as_slice)
    }
}

fn grid_point(radius: f32, lat: f32, lon: f32) -> Vec3 {
    let ring = lat.cos() * radius;
    Vec3::new(ring * lon.sin(), radius * lat.sin(), ring * lon.cos())
}
