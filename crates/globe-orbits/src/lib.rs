//! Orbiting particle field around a rotating globe.
//!
//! The rendering host owns an [`OrbitField`], calls [`OrbitField::advance`]
//! once per frame, draws [`OrbitField::positions`] as a point cloud, and
//! forwards click rays to [`OrbitField::select_nearest`] to obtain the orbit
//! polyline to highlight. [`GlobeSpin`] and [`Graticule`] cover the globe
//! mesh and its latitude/longitude grid, and [`texture`] produces the
//! two-tone land/ocean globe texture.

mod error;
pub mod field;
pub mod globe;
pub mod particle;
pub mod playback;
pub mod ray;
pub mod texture;

pub use error::GlobeError;
pub use field::{FieldSettings, OrbitField, PickHit};
pub use globe::{GlobeSpin, Graticule};
pub use particle::{Particle, rotate_about_y};
pub use playback::{ParsePlaybackError, PlaybackSpeed};
pub use ray::PickRay;
pub use texture::{
    TextureError, apply_land_ocean_mask, land_coverage, land_ocean_mask, load_land_ocean_texture,
};
