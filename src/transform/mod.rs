//! Strategies for applying a [`ColorMatrix`] to a whole image.
//!
//! Both strategies produce a new image of the source's dimensions and never
//! touch the source. They agree to within one code value per channel; the
//! bulk path computes in `f32`, the manual path in `f64`.

pub mod bulk;
pub mod manual;

use std::fmt;
use std::str::FromStr;

use image::RgbaImage;

use crate::color::ColorMatrix;
use crate::error::Result;

pub use bulk::BulkTransform;
pub use manual::ManualTransform;

/// Applies a color matrix to every pixel of an image.
pub trait PixelTransformStrategy {
    fn name(&self) -> &'static str;

    /// Fails as a whole: either every pixel is transformed or no image is returned.
    fn apply(&self, source: &RgbaImage, matrix: &ColorMatrix) -> Result<RgbaImage>;
}

/// Caller-side selection between the two strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    #[default]
    Bulk,
    Manual,
}

impl Strategy {
    pub const ALL: &[Strategy] = &[Strategy::Bulk, Strategy::Manual];

    pub fn name(self) -> &'static str {
        match self {
            Strategy::Bulk => "bulk",
            Strategy::Manual => "manual",
        }
    }

    pub fn apply(self, source: &RgbaImage, matrix: &ColorMatrix) -> Result<RgbaImage> {
        match self {
            Strategy::Bulk => BulkTransform::new().apply(source, matrix),
            Strategy::Manual => ManualTransform.apply(source, matrix),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Strategy::ALL
            .iter()
            .copied()
            .find(|strategy| strategy.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown strategy '{s}', expected 'bulk' or 'manual'"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::ColorMatrixBuilder;
    use crate::error::Error;
    use image::Rgba;

    fn corners() -> RgbaImage {
        let mut img = RgbaImage::new(2, 2);
        img.put_pixel(0, 0, Rgba([0, 0, 0, 255]));
        img.put_pixel(1, 0, Rgba([255, 255, 255, 255]));
        img.put_pixel(0, 1, Rgba([255, 0, 0, 255]));
        img.put_pixel(1, 1, Rgba([0, 255, 0, 128]));
        img
    }

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!("bulk".parse::<Strategy>(), Ok(Strategy::Bulk));
        assert_eq!("Manual".parse::<Strategy>(), Ok(Strategy::Manual));
        assert!("gdi".parse::<Strategy>().is_err());
    }

    #[test]
    fn display_matches_name() {
        for &strategy in Strategy::ALL {
            assert_eq!(strategy.to_string(), strategy.name());
        }
    }

    #[test]
    fn both_strategies_reject_empty_images() {
        let matrix = ColorMatrix::identity();
        for &strategy in Strategy::ALL {
            for (w, h) in [(0, 0), (0, 3), (3, 0)] {
                let result = strategy.apply(&RgbaImage::new(w, h), &matrix);
                assert!(
                    matches!(result, Err(Error::InvalidDimensions { .. })),
                    "{strategy} accepted {w}x{h}"
                );
            }
        }
    }

    #[test]
    fn identity_reproduces_source_exactly() {
        let source = corners();
        let matrix = ColorMatrixBuilder::new().build();
        for &strategy in Strategy::ALL {
            assert_eq!(strategy.apply(&source, &matrix).unwrap(), source);
        }
    }

    #[test]
    fn strategies_agree_on_corner_image() {
        let source = corners();
        let matrix = ColorMatrixBuilder::new()
            .rotate_hue(75.0)
            .set_saturation(1.4)
            .set_brightness(-0.1)
            .build();
        let bulk = Strategy::Bulk.apply(&source, &matrix).unwrap();
        let manual = Strategy::Manual.apply(&source, &matrix).unwrap();
        for (b, m) in bulk.pixels().zip(manual.pixels()) {
            for c in 0..4 {
                assert!(b.0[c].abs_diff(m.0[c]) <= 1, "{b:?} vs {m:?}");
            }
        }
    }
}
