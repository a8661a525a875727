//! Playback speed control for the frame loop.

use std::fmt;
use std::str::FromStr;

/// Time-scale applied to each frame advance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PlaybackSpeed {
    /// Sixteen frames backwards per tick.
    Rewind16,
    /// Four frames backwards per tick.
    Rewind4,
    /// Real time.
    #[default]
    Live,
    /// Four frames forwards per tick.
    Forward4,
    /// Sixteen frames forwards per tick.
    Forward16,
}

impl PlaybackSpeed {
    /// All speeds, slowest first.
    pub const ALL: [PlaybackSpeed; 5] = [
        Self::Rewind16,
        Self::Rewind4,
        Self::Live,
        Self::Forward4,
        Self::Forward16,
    ];

    /// Frames of rotation per tick.
    pub fn multiplier(self) -> f32 {
        match self {
            Self::Rewind16 => -16.0,
            Self::Rewind4 => -4.0,
            Self::Live => 1.0,
            Self::Forward4 => 4.0,
            Self::Forward16 => 16.0,
        }
    }

    /// Next faster speed, saturating at [`Forward16`](Self::Forward16).
    pub fn faster(self) -> Self {
        let i = self.index();
        Self::ALL[(i + 1).min(Self::ALL.len() - 1)]
    }

    /// Next slower speed, saturating at [`Rewind16`](Self::Rewind16).
    pub fn slower(self) -> Self {
        Self::ALL[self.index().saturating_sub(1)]
    }

    fn index(self) -> usize {
        match self {
            Self::Rewind16 => 0,
            Self::Rewind4 => 1,
            Self::Live => 2,
            Self::Forward4 => 3,
            Self::Forward16 => 4,
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Rewind16 => "-16x",
            Self::Rewind4 => "-4x",
            Self::Live => "Live",
            Self::Forward4 => "+4x",
            Self::Forward16 => "+16x",
        }
    }
}

impl fmt::Display for PlaybackSpeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Unrecognized playback speed label.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown playback speed {0:?} (expected -16x, -4x, Live, +4x or +16x)")]
pub struct ParsePlaybackError(pub String);

impl FromStr for PlaybackSpeed {
    type Err = ParsePlaybackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "-16x" => Ok(Self::Rewind16),
            "-4x" => Ok(Self::Rewind4),
            "live" | "1x" | "+1x" => Ok(Self::Live),
            "+4x" | "4x" => Ok(Self::Forward4),
            "+16x" | "16x" => Ok(Self::Forward16),
            _ => Err(ParsePlaybackError(s.to_string())),
        }
    }
}
