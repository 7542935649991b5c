use image::Rgba;

use super::matrix::{LUM_B, LUM_G, LUM_R};

/// A discrete RGBA color with 8-bit channels.
pub type Pixel = Rgba<u8>;

/// Homogeneous color vector `[R, G, B, A, 1]` with channels normalized to `[0, 1]`.
///
/// Channel values may leave `[0, 1]` after a transform; they are only
/// clamped when written back to a [`Pixel`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorVector([f64; 5]);

impl ColorVector {
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self([r, g, b, a, 1.0])
    }

    pub fn r(&self) -> f64 {
        self.0[0]
    }

    pub fn g(&self) -> f64 {
        self.0[1]
    }

    pub fn b(&self) -> f64 {
        self.0[2]
    }

    pub fn a(&self) -> f64 {
        self.0[3]
    }

    /// The four color channels, without the homogeneous term.
    pub fn channels(&self) -> [f64; 4] {
        [self.0[0], self.0[1], self.0[2], self.0[3]]
    }

    pub fn as_array(&self) -> &[f64; 5] {
        &self.0
    }

    /// Luminance-weighted gray value of the R, G, B channels.
    pub fn luminance(&self) -> f64 {
        self.0[0] * LUM_R + self.0[1] * LUM_G + self.0[2] * LUM_B
    }
}

/// Convert a pixel to a normalized homogeneous vector.
pub fn color_to_vector(pixel: Pixel) -> ColorVector {
    let [r, g, b, a] = pixel.0;
    ColorVector::new(
        r as f64 / 255.0,
        g as f64 / 255.0,
        b as f64 / 255.0,
        a as f64 / 255.0,
    )
}

/// Convert a vector back to a pixel: scale by 255, round, clamp each channel.
pub fn vector_to_color(vector: &ColorVector) -> Pixel {
    let [r, g, b, a] = vector.channels();
    Rgba([
        channel_to_u8(r),
        channel_to_u8(g),
        channel_to_u8(b),
        channel_to_u8(a),
    ])
}

/// NaN lands on 0 through the saturating float-to-int cast.
#[inline]
fn channel_to_u8(v: f64) -> u8 {
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}
