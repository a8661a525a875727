//! Construction-time validation errors.

/// Errors raised when a field or globe is built from invalid settings.
///
/// Runtime operations never fail; only construction validates.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GlobeError {
    /// The field must contain at least one particle.
    #[error("particle count must be at least 1")]
    ZeroCount,

    /// Shell radius must be finite and strictly positive.
    #[error("shell radius must be finite and positive, got {0}")]
    InvalidShellRadius(f32),

    /// Orbit paths need enough samples to form a closed loop.
    #[error("orbit sample count must be at least {min}, got {got}")]
    InvalidSampleCount { got: usize, min: usize },

    /// Speed range must be finite, non-negative and ordered.
    #[error("invalid angular speed range [{min}, {max})")]
    InvalidSpeedRange { min: f32, max: f32 },

    /// An explicitly supplied particle speed was not finite.
    #[error("particle {index} has non-finite angular speed {speed}")]
    InvalidSpeed { index: usize, speed: f32 },

    /// Pick tolerance must be finite and strictly positive.
    #[error("pick tolerance must be finite and positive, got {0}")]
    InvalidPickTolerance(f32),

    /// An explicitly supplied particle has a NaN or infinite coordinate.
    #[error("particle {index} has a non-finite position")]
    NonFinitePosition { index: usize },

    /// An explicitly supplied particle does not lie on the shared shell.
    #[error("particle {index} lies at radius {radius}, expected {expected}")]
    OffShell {
        index: usize,
        radius: f32,
        expected: f32,
    },

    /// Grid radius must be finite and strictly positive.
    #[error("grid radius must be finite and positive, got {0}")]
    InvalidGridRadius(f32),

    /// The grid needs at least two segments per line.
    #[error("grid segment count must be at least 2, got {0}")]
    InvalidGridSegments(u32),
}
