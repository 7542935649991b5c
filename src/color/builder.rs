use super::matrix::{ColorMatrix, MatrixOrder};

/// Builds one [`ColorMatrix`] from absolute hue, saturation and brightness values.
///
/// Each setter replaces the previous value; nothing accumulates. [`build`]
/// always starts from the identity and composes hue rotation, then
/// saturation, then brightness.
///
/// [`build`]: ColorMatrixBuilder::build
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorMatrixBuilder {
    hue: f64,
    saturation: f64,
    brightness: f64,
}

impl Default for ColorMatrixBuilder {
    fn default() -> Self {
        Self {
            hue: 0.0,
            saturation: 1.0,
            brightness: 0.0,
        }
    }
}

impl ColorMatrixBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hue rotation in degrees around the gray axis.
    pub fn rotate_hue(mut self, degrees: f64) -> Self {
        self.hue = degrees;
        self
    }

    /// Saturation multiplier: 0 is gray, 1 is unchanged, above 1 oversaturates.
    pub fn set_saturation(mut self, scale: f64) -> Self {
        self.saturation = scale;
        self
    }

    /// Offset added to R, G, B in normalized units; alpha is untouched.
    pub fn set_brightness(mut self, offset: f64) -> Self {
        self.brightness = offset;
        self
    }

    pub fn hue(&self) -> f64 {
        self.hue
    }

    pub fn saturation(&self) -> f64 {
        self.saturation
    }

    pub fn brightness(&self) -> f64 {
        self.brightness
    }

    pub fn build(&self) -> ColorMatrix {
        let mut m = ColorMatrix::identity();
        m.rotate_hue(self.hue);
        m.saturate(self.saturation, MatrixOrder::Append);
        m.translate_colors(self.brightness, MatrixOrder::Append);

        log::debug!(
            "Built color matrix: hue={:.1} saturation={:.2} brightness={:.2}",
            self.hue,
            self.saturation,
            self.brightness
        );
        m
    }
}
