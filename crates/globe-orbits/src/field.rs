//! The orbiting particle field: creation, per-frame advance, and picking.

use glam::Vec3;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::error::GlobeError;
use crate::particle::{Particle, sample_shell_point};
use crate::ray::PickRay;

/// Smallest orbit sample count that still describes a closed loop.
pub const MIN_ORBIT_SAMPLES: usize = 3;

/// Relative tolerance for explicitly supplied particles to share one shell.
const SHELL_TOLERANCE: f32 = 1e-4;

/// Parameters for generating an [`OrbitField`].
#[derive(Clone, Debug, PartialEq)]
pub struct FieldSettings {
    /// Number of particles.
    pub count: usize,
    /// Distance of every particle from the origin.
    pub shell_radius: f32,
    /// Points per precomputed orbit path.
    pub orbit_samples: usize,
    /// Angular speed range in radians per frame, `min` inclusive, `max` exclusive.
    pub speed_range: (f32, f32),
    /// Maximum ray-to-particle distance that counts as a pick.
    pub pick_tolerance: f32,
    /// Seed for the ChaCha8 generator used by [`OrbitField::new`].
    pub seed: u64,
}

impl Default for FieldSettings {
    fn default() -> Self {
        Self {
            count: 2000,
            shell_radius: 1.01,
            orbit_samples: 100,
            speed_range: (0.0002, 0.001),
            pick_tolerance: 0.01,
            seed: 42,
        }
    }
}

impl FieldSettings {
    /// Check every parameter, returning the first violation.
    pub fn validate(&self) -> Result<(), GlobeError> {
        if self.count == 0 {
            return Err(GlobeError::ZeroCount);
        }
        validate_common(self.shell_radius, self.orbit_samples, self.pick_tolerance)?;
        let (min, max) = self.speed_range;
        if !min.is_finite() || !max.is_finite() || min < 0.0 || min > max {
            return Err(GlobeError::InvalidSpeedRange { min, max });
        }
        Ok(())
    }
}

fn validate_common(
    shell_radius: f32,
    orbit_samples: usize,
    pick_tolerance: f32,
) -> Result<(), GlobeError> {
    if !shell_radius.is_finite() || shell_radius <= 0.0 {
        return Err(GlobeError::InvalidShellRadius(shell_radius));
    }
    if orbit_samples < MIN_ORBIT_SAMPLES {
        return Err(GlobeError::InvalidSampleCount {
            got: orbit_samples,
            min: MIN_ORBIT_SAMPLES,
        });
    }
    if !pick_tolerance.is_finite() || pick_tolerance <= 0.0 {
        return Err(GlobeError::InvalidPickTolerance(pick_tolerance));
    }
    Ok(())
}

/// Result of a successful pick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PickHit {
    /// Index of the picked particle.
    pub index: usize,
    /// Perpendicular distance from the particle to the ray.
    pub distance: f32,
    /// Distance along the ray to the point of closest approach.
    pub along: f32,
}

/// A fixed set of particles on a sphere shell, each circling the vertical axis.
///
/// Particles are never added or removed after construction. Positions change
/// only through [`advance`](Self::advance); orbit paths never change.
#[derive(Clone, Debug)]
pub struct OrbitField {
    particles: Vec<Particle>,
    shell_radius: f32,
    orbit_samples: usize,
    pick_tolerance: f32,
}

impl OrbitField {
    /// Generate a field deterministically from `settings.seed`.
    pub fn new(settings: &FieldSettings) -> Result<Self, GlobeError> {
        let mut rng = ChaCha8Rng::seed_from_u64(settings.seed);
        Self::with_rng(settings, &mut rng)
    }

    /// Generate a field drawing positions and speeds from `rng`.
    ///
    /// `settings.seed` is ignored.
    pub fn with_rng<R: Rng + ?Sized>(
        settings: &FieldSettings,
        rng: &mut R,
    ) -> Result<Self, GlobeError> {
        settings.validate()?;
        let (min_speed, max_speed) = settings.speed_range;

        let particles = (0..settings.count)
            .map(|_| {
                let position = sample_shell_point(rng, settings.shell_radius);
                let speed = if min_speed < max_speed {
                    rng.random_range(min_speed..max_speed)
                } else {
                    min_speed
                };
                Particle::new(position, speed, settings.orbit_samples)
            })
            .collect();

        tracing::debug!(
            count = settings.count,
            shell_radius = settings.shell_radius,
            orbit_samples = settings.orbit_samples,
            "generated orbit field"
        );

        Ok(Self {
            particles,
            shell_radius: settings.shell_radius,
            orbit_samples: settings.orbit_samples,
            pick_tolerance: settings.pick_tolerance,
        })
    }

    /// Build a field from explicit `(position, angular_speed)` pairs.
    ///
    /// The shell radius is taken from the first position; every other
    /// position must lie on the same shell.
    pub fn from_particles<I>(
        states: I,
        orbit_samples: usize,
        pick_tolerance: f32,
    ) -> Result<Self, GlobeError>
    where
        I: IntoIterator<Item = (Vec3, f32)>,
    {
        let states: Vec<(Vec3, f32)> = states.into_iter().collect();
        let shell_radius = states
            .first()
            .map(|(p, _)| p.length())
            .ok_or(GlobeError::ZeroCount)?;
        validate_common(shell_radius, orbit_samples, pick_tolerance)?;

        let mut particles = Vec::with_capacity(states.len());
        for (index, (position, speed)) in states.into_iter().enumerate() {
            if !position.is_finite() {
                return Err(GlobeError::NonFinitePosition { index });
            }
            let radius = position.length();
            if !((radius - shell_radius).abs() <= SHELL_TOLERANCE * shell_radius) {
                return Err(GlobeError::OffShell {
                    index,
                    radius,
                    expected: shell_radius,
                });
            }
            if !speed.is_finite() {
                return Err(GlobeError::InvalidSpeed { index, speed });
            }
            particles.push(Particle::new(position, speed, orbit_samples));
        }

        Ok(Self {
            particles,
            shell_radius,
            orbit_samples,
            pick_tolerance,
        })
    }

    /// Advance every particle by one frame.
    pub fn advance(&mut self) {
        self.advance_scaled(1.0);
    }

    /// Advance every particle by `multiplier` frames' worth of rotation.
    ///
    /// Negative multipliers rotate backwards. A non-finite multiplier leaves
    /// the field untouched.
    pub fn advance_scaled(&mut self, multiplier: f32) {
        if !multiplier.is_finite() {
            tracing::warn!(multiplier, "ignoring non-finite advance multiplier");
            return;
        }
        for particle in &mut self.particles {
            particle.advance(multiplier);
        }
    }

    /// Find the particle closest to `ray` within the pick tolerance.
    ///
    /// Ties on distance go to the particle nearer the ray origin.
    pub fn pick(&self, ray: &PickRay) -> Option<PickHit> {
        if !ray.is_valid() {
            return None;
        }

        let hit = self
            .particles
            .iter()
            .enumerate()
            .filter_map(|(index, particle)| {
                let (distance, along) = ray.closest_approach(particle.position());
                (distance <= self.pick_tolerance).then_some(PickHit {
                    index,
                    distance,
                    along,
                })
            })
            .min_by(|a, b| {
                a.distance
                    .total_cmp(&b.distance)
                    .then(a.along.total_cmp(&b.along))
            });

        tracing::trace!(?hit, "pick");
        hit
    }

    /// Orbit path of the particle nearest to `ray`, if any is within tolerance.
    pub fn select_nearest(&self, ray: &PickRay) -> Option<&[Vec3]> {
        self.pick(ray)
            .map(|hit| self.particles[hit.index].orbit_path())
    }

    /// Snapshot of the current particle positions.
    pub fn positions(&self) -> Vec<Vec3> {
        self.particles.iter().map(Particle::position).collect()
    }

    /// All particles, in creation order.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Number of particles.
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    /// Always `false`: construction rejects empty fields.
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Shell radius shared by every particle.
    pub fn shell_radius(&self) -> f32 {
        self.shell_radius
    }

    /// Points per orbit path.
    pub fn orbit_samples(&self) -> usize {
        self.orbit_samples
    }

    /// Maximum ray-to-particle distance that counts as a pick.
    pub fn pick_tolerance(&self) -> f32 {
        self.pick_tolerance
    }
}
