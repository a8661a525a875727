//! A single particle on the shell and its precomputed orbit.

use std::f32::consts::TAU;

use glam::Vec3;
use rand::Rng;

/// Rotate `v` about the vertical (y) axis by `angle` radians.
///
/// Right-handed: a positive angle takes +X toward -Z. The y component is
/// passed through untouched, so the result stays on the same latitude circle.
#[inline]
pub fn rotate_about_y(v: Vec3, angle: f32) -> Vec3 {
    let (sin, cos) = angle.sin_cos();
    Vec3::new(v.x * cos + v.z * sin, v.y, -v.x * sin + v.z * cos)
}

/// Rotation of `rate * multiplier` radians reduced to `[0, 2π)`.
///
/// The product is formed in f64 so large finite rates cannot overflow.
/// Returns `None` when either factor is non-finite.
pub(crate) fn wrapped_step(rate: f32, multiplier: f32) -> Option<f32> {
    let step = (rate as f64 * multiplier as f64).rem_euclid(std::f64::consts::TAU);
    step.is_finite().then_some(step as f32)
}

/// Uniformly distributed point on a sphere of the given radius.
pub(crate) fn sample_shell_point<R: Rng + ?Sized>(rng: &mut R, radius: f32) -> Vec3 {
    let theta = rng.random::<f32>() * TAU;
    let phi = (1.0 - 2.0 * rng.random::<f32>()).acos();
    radius * Vec3::new(phi.sin() * theta.cos(), phi.sin() * theta.sin(), phi.cos())
}

/// A point particle circling the vertical axis at a fixed rate.
///
/// The current position is always derived from the initial position and the
/// accumulated phase, so repeated advances never drift off the shell.
#[derive(Clone, Debug)]
pub struct Particle {
    initial: Vec3,
    position: Vec3,
    angular_speed: f32,
    phase: f32,
    orbit_path: Vec<Vec3>,
}

impl Particle {
    /// Create a particle at `initial` and precompute `orbit_samples` evenly
    /// spaced points of its circular path.
    pub fn new(initial: Vec3, angular_speed: f32, orbit_samples: usize) -> Self {
        let orbit_path = (0..orbit_samples)
            .map(|j| rotate_about_y(initial, TAU * j as f32 / orbit_samples as f32))
            .collect();

        Self {
            initial,
            position: initial,
            angular_speed,
            phase: 0.0,
            orbit_path,
        }
    }

    /// Current position.
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Position at creation time.
    pub fn initial_position(&self) -> Vec3 {
        self.initial
    }

    /// Rotation per frame in radians.
    pub fn angular_speed(&self) -> f32 {
        self.angular_speed
    }

    /// Accumulated rotation since creation, wrapped to `[0, 2π)`.
    pub fn phase(&self) -> f32 {
        self.phase
    }

    /// The closed orbit polyline. The first sample is the initial position.
    pub fn orbit_path(&self) -> &[Vec3] {
        &self.orbit_path
    }

    /// Rotate by `angular_speed * multiplier`.
    pub(crate) fn advance(&mut self, multiplier: f32) {
        let Some(step) = wrapped_step(self.angular_speed, multiplier) else {
            return;
        };
        self.phase = (self.phase + step).rem_euclid(TAU);
        self.position = rotate_about_y(self.initial, self.phase);
    }
}
