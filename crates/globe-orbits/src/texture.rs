//! Two-tone globe texture: land in flat grey, ocean in black.

use std::path::Path;

use image::{Rgba, RgbaImage};

/// Pixels whose mean RGB value is strictly above this are treated as land.
pub const LAND_THRESHOLD: u8 = 128;

/// Grey level written for land pixels.
pub const LAND_GREY: u8 = 150;

/// Errors from loading a globe texture.
#[derive(Debug, thiserror::Error)]
pub enum TextureError {
    /// Failed to open or decode the image file.
    #[error("texture load error: {0}")]
    ImageLoad(#[from] image::ImageError),
}

/// `true` when the pixel's mean RGB exceeds [`LAND_THRESHOLD`].
#[inline]
pub fn is_land(pixel: &Rgba<u8>) -> bool {
    let [r, g, b, _] = pixel.0;
    // mean > t  <=>  sum > 3t, kept in integers.
    r as u32 + g as u32 + b as u32 > 3 * LAND_THRESHOLD as u32
}

/// Recolour `texture` in place. Alpha is left untouched.
pub fn apply_land_ocean_mask(texture: &mut RgbaImage) {
    for pixel in texture.pixels_mut() {
        let level = if is_land(pixel) { LAND_GREY } else { 0 };
        let alpha = pixel.0[3];
        *pixel = Rgba([level, level, level, alpha]);
    }
}

/// Two-tone copy of `texture`.
pub fn land_ocean_mask(texture: &RgbaImage) -> RgbaImage {
    let mut masked = texture.clone();
    apply_land_ocean_mask(&mut masked);
    masked
}

/// Load an earth texture from disk and convert it to the two-tone palette.
pub fn load_land_ocean_texture(path: &Path) -> Result<RgbaImage, TextureError> {
    let mut texture = image::open(path)?.to_rgba8();
    apply_land_ocean_mask(&mut texture);
    tracing::debug!(
        path = %path.display(),
        width = texture.width(),
        height = texture.height(),
        "loaded land/ocean texture"
    );
    Ok(texture)
}

/// Fraction of pixels in a masked texture that are land, in `[0, 1]`.
pub fn land_coverage(masked: &RgbaImage) -> f32 {
    let total = masked.pixels().len();
    if total == 0 {
        return 0.0;
    }
    let land = masked.pixels().filter(|p| p.0[0] == LAND_GREY).count();
    land as f32 / total as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean_of_exactly_128_is_ocean() {
        let img = RgbaImage::from_pixel(4, 4, Rgba([128, 128, 128, 255]));
        let masked = land_ocean_mask(&img);
        assert!(masked.pixels().all(|p| p.0 == [0, 0, 0, 255]));
    }

    #[test]
    fn test_mean_of_129_is_land() {
        let img = RgbaImage::from_pixel(4, 4, Rgba([129, 129, 129, 255]));
        let masked = land_ocean_mask(&img);
        assert!(masked.pixels().all(|p| p.0 == [150, 150, 150, 255]));
    }

    #[test]
    fn test_fractional_mean_just_above_threshold_is_land() {
        // (129 + 128 + 128) / 3 = 128.33
        assert!(is_land(&Rgba([129, 128, 128, 255])));
        // (127 + 128 + 129) / 3 = 128
        assert!(!is_land(&Rgba([127, 128, 129, 255])));
    }

    #[test]
    fn test_alpha_preserved() {
        let mut img = RgbaImage::new(2, 1);
        img.put_pixel(0, 0, Rgba([255, 255, 255, 37]));
        img.put_pixel(1, 0, Rgba([10, 20, 30, 200]));
        apply_land_ocean_mask(&mut img);
        assert_eq!(img.get_pixel(0, 0).0, [150, 150, 150, 37]);
        assert_eq!(img.get_pixel(1, 0).0, [0, 0, 0, 200]);
    }

    #[test]
    fn test_land_coverage() {
        let mut img = RgbaImage::from_pixel(4, 1, Rgba([0, 0, 255, 255]));
        img.put_pixel(0, 0, Rgba([200, 200, 200, 255]));
        let masked = land_ocean_mask(&img);
        assert!((land_coverage(&masked) - 0.25).abs() < 1e-6);
        assert_eq!(land_coverage(&RgbaImage::new(0, 0)), 0.0);
    }

    #[test]
    fn test_load_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("earth.png");
        let mut img = RgbaImage::from_pixel(2, 2, Rgba([5, 5, 5, 255]));
        img.put_pixel(1, 1, Rgba([220, 210, 200, 255]));
        img.save(&path).unwrap();

        let masked = load_land_ocean_texture(&path).unwrap();
        assert_eq!(masked.get_pixel(0, 0).0, [0, 0, 0, 255]);
        assert_eq!(masked.get_pixel(1, 1).0, [150, 150, 150, 255]);
    }

    #[test]
    fn test_missing_file_is_error() {
        let result = load_land_ocean_texture(Path::new("/nonexistent/earth.jpg"));
        assert!(matches!(result, Err(TextureError::ImageLoad(_))));
    }
}
