use std::fmt;
use std::time::Instant;

use image::RgbaImage;

use crate::color::{ColorMatrix, ColorMatrixBuilder};
use crate::error::Result;
use crate::transform::Strategy;

/// All adjustment parameters controlled by the user.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdjustParams {
    /// Hue rotation in degrees, conventionally -180..180.
    pub hue: f64,
    /// Saturation multiplier, 1.0 is neutral.
    pub saturation: f64,
    /// Brightness offset in normalized units, conventionally -1..1.
    pub brightness: f64,
    pub strategy: Strategy,
}

impl Default for AdjustParams {
    fn default() -> Self {
        Self {
            hue: 0.0,
            saturation: 1.0,
            brightness: 0.0,
            strategy: Strategy::Bulk,
        }
    }
}

impl AdjustParams {
    /// Convert integer slider positions: hue in degrees, the other two in percent.
    pub fn from_slider_values(hue_degrees: i32, saturation_percent: i32, brightness_percent: i32) -> Self {
        Self {
            hue: hue_degrees as f64,
            saturation: saturation_percent as f64 / 100.0,
            brightness: brightness_percent as f64 / 100.0,
            ..Default::default()
        }
    }

    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn builder(&self) -> ColorMatrixBuilder {
        ColorMatrixBuilder::new()
            .rotate_hue(self.hue)
            .set_saturation(self.saturation)
            .set_brightness(self.brightness)
    }

    pub fn matrix(&self) -> ColorMatrix {
        self.builder().build()
    }
}

impl fmt::Display for AdjustParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "H: {} S: {:.1} B: {:.1}",
            self.hue, self.saturation, self.brightness
        )
    }
}

/// Build the matrix for `params` and apply it to `source` with the chosen strategy.
/// The matrix is rebuilt from scratch on every call.
pub fn process(source: &RgbaImage, params: &AdjustParams) -> Result<RgbaImage> {
    let matrix = params.matrix();

    let start = Instant::now();
    let output = params.strategy.apply(source, &matrix)?;
    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

    log::debug!(
        "{} | {} {}x{} in {:.1}ms",
        params,
        params.strategy,
        output.width(),
        output.height(),
        elapsed_ms
    );
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use image::Rgba;

    #[test]
    fn slider_values_are_scaled_from_percent() {
        let params = AdjustParams::from_slider_values(-45, 90, -20);
        assert_eq!(params.hue, -45.0);
        assert!((params.saturation - 0.9).abs() < 1e-12);
        assert!((params.brightness + 0.2).abs() < 1e-12);
        assert_eq!(params.strategy, Strategy::Bulk);
    }

    #[test]
    fn status_text() {
        let params = AdjustParams::from_slider_values(30, 150, 10);
        assert_eq!(params.to_string(), "H: 30 S: 1.5 B: 0.1");
    }

    #[test]
    fn default_params_leave_image_unchanged() {
        let source = RgbaImage::from_fn(4, 3, |x, y| Rgba([x as u8 * 60, y as u8 * 90, 17, 200]));
        for &strategy in Strategy::ALL {
            let params = AdjustParams::default().with_strategy(strategy);
            assert_eq!(process(&source, &params).unwrap(), source);
        }
    }

    #[test]
    fn empty_source_fails() {
        let params = AdjustParams::default();
        assert!(matches!(
            process(&RgbaImage::new(0, 5), &params),
            Err(Error::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn same_params_give_same_image() {
        let source = RgbaImage::from_pixel(2, 2, Rgba([200, 40, 90, 255]));
        let params = AdjustParams::from_slider_values(100, 60, 5);
        let first = process(&source, &params).unwrap();
        let second = process(&source, &params).unwrap();
        assert_eq!(first, second);
    }
}
