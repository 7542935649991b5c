//! 5×5 affine color matrix over homogeneous `[R, G, B, A, 1]` row vectors.
//!
//! Row-vector convention: `out = v · M`. Row `i < 4` holds the contribution of
//! input channel `i` to each output channel, row 4 holds the translation.
//! The fifth column stays `[0, 0, 0, 0, 1]`, so every matrix built from these
//! primitives is a pure affine transform.

use std::f64::consts::FRAC_1_SQRT_2;

use super::vector::{ColorVector, Pixel, color_to_vector, vector_to_color};

/// Luminance weights for gamma-encoded RGB (Haeberli, SGI Grafica Obscura).
/// They sum to 1.0 so gray maps to itself under desaturation.
pub const LUM_R: f64 = 0.3086;
pub const LUM_G: f64 = 0.6094;
pub const LUM_B: f64 = 0.0820;

const RED: usize = 0;
const GREEN: usize = 1;
const BLUE: usize = 2;
const ALPHA: usize = 3;
const OFFSET: usize = 4;

/// Where a newly composed transform goes relative to the existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixOrder {
    /// The new transform is applied before the existing matrix.
    Prepend,
    /// The new transform is applied after the existing matrix.
    Append,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorMatrix {
    m: [[f64; 5]; 5],
}

impl Default for ColorMatrix {
    fn default() -> Self {
        Self::identity()
    }
}

impl ColorMatrix {
    pub fn identity() -> Self {
        let mut m = [[0.0; 5]; 5];
        for (i, row) in m.iter_mut().enumerate() {
            row[i] = 1.0;
        }
        Self { m }
    }

    pub fn from_rows(m: [[f64; 5]; 5]) -> Self {
        Self { m }
    }

    pub fn rows(&self) -> &[[f64; 5]; 5] {
        &self.m
    }

    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.m[row][col]
    }

    /// Reset to the identity matrix.
    pub fn reset(&mut self) {
        *self = Self::identity();
    }

    /// True when the fifth column is `[0, 0, 0, 0, 1]` (no perspective term).
    pub fn is_affine(&self) -> bool {
        (0..4).all(|i| self.m[i][OFFSET] == 0.0) && self.m[OFFSET][OFFSET] == 1.0
    }

    pub fn approx_eq(&self, other: &ColorMatrix, epsilon: f64) -> bool {
        self.m
            .iter()
            .flatten()
            .zip(other.m.iter().flatten())
            .all(|(a, b)| (a - b).abs() <= epsilon)
    }

    /// Compose `other` into this matrix.
    pub fn multiply(&mut self, other: &ColorMatrix, order: MatrixOrder) {
        let (first, second) = match order {
            MatrixOrder::Append => (&self.m, &other.m),
            MatrixOrder::Prepend => (&other.m, &self.m),
        };

        let mut product = [[0.0; 5]; 5];
        for (y, row) in product.iter_mut().enumerate() {
            for (x, cell) in row.iter_mut().enumerate() {
                *cell = (0..5).map(|i| first[y][i] * second[i][x]).sum();
            }
        }
        self.m = product;
    }

    pub fn scale(&mut self, red: f64, green: f64, blue: f64, opacity: f64, order: MatrixOrder) {
        let mut qm = Self::identity();
        qm.m[RED][RED] = red;
        qm.m[GREEN][GREEN] = green;
        qm.m[BLUE][BLUE] = blue;
        qm.m[ALPHA][ALPHA] = opacity;
        self.multiply(&qm, order);
    }

    /// Scale R, G, B by the same amount (contrast), opacity unchanged.
    pub fn scale_colors(&mut self, scale: f64, order: MatrixOrder) {
        self.scale(scale, scale, scale, 1.0, order);
    }

    pub fn scale_opacity(&mut self, scale: f64, order: MatrixOrder) {
        self.scale(1.0, 1.0, 1.0, scale, order);
    }

    /// Offsets are in normalized channel units.
    pub fn translate(&mut self, red: f64, green: f64, blue: f64, opacity: f64, order: MatrixOrder) {
        let mut qm = Self::identity();
        qm.m[OFFSET][RED] = red;
        qm.m[OFFSET][GREEN] = green;
        qm.m[OFFSET][BLUE] = blue;
        qm.m[OFFSET][ALPHA] = opacity;
        self.multiply(&qm, order);
    }

    pub fn translate_colors(&mut self, offset: f64, order: MatrixOrder) {
        self.translate(offset, offset, offset, 0.0, order);
    }

    pub fn translate_opacity(&mut self, offset: f64, order: MatrixOrder) {
        self.translate(0.0, 0.0, 0.0, offset, order);
    }

    /// Rotate about the red axis: green and blue turn, red is unchanged.
    pub fn rotate_red(&mut self, degrees: f64, order: MatrixOrder) {
        self.rotate_color(degrees, BLUE, GREEN, order);
    }

    pub fn rotate_green(&mut self, degrees: f64, order: MatrixOrder) {
        self.rotate_color(degrees, RED, BLUE, order);
    }

    /// Positive angles turn red towards green.
    pub fn rotate_blue(&mut self, degrees: f64, order: MatrixOrder) {
        self.rotate_color(degrees, GREEN, RED, order);
    }

    /// `x` and `y` index the cells receiving `-sin` and `+sin` respectively.
    fn rotate_color(&mut self, degrees: f64, x: usize, y: usize, order: MatrixOrder) {
        let (s, c) = degrees.to_radians().sin_cos();
        let mut qm = Self::identity();
        qm.m[x][x] = c;
        qm.m[y][y] = c;
        qm.m[y][x] = s;
        qm.m[x][y] = -s;
        self.multiply(&qm, order);
    }

    /// Red gains `green * G + blue * B`.
    pub fn shear_red(&mut self, green: f64, blue: f64, order: MatrixOrder) {
        self.shear_color(RED, GREEN, green, BLUE, blue, order);
    }

    pub fn shear_green(&mut self, red: f64, blue: f64, order: MatrixOrder) {
        self.shear_color(GREEN, RED, red, BLUE, blue, order);
    }

    pub fn shear_blue(&mut self, red: f64, green: f64, order: MatrixOrder) {
        self.shear_color(BLUE, RED, red, GREEN, green, order);
    }

    fn shear_color(&mut self, x: usize, y1: usize, d1: f64, y2: usize, d2: f64, order: MatrixOrder) {
        let mut qm = Self::identity();
        qm.m[y1][x] = d1;
        qm.m[y2][x] = d2;
        self.multiply(&qm, order);
    }

    /// Interpolate R, G, B between their luminance-weighted gray (`0.0`) and
    /// the original color (`1.0`). Values above 1 extrapolate.
    pub fn saturate(&mut self, saturation: f64, order: MatrixOrder) {
        let complement = 1.0 - saturation;
        let weights = [LUM_R, LUM_G, LUM_B];

        let mut qm = Self::identity();
        for (y, weight) in weights.iter().enumerate() {
            let base = weight * complement;
            for x in RED..=BLUE {
                qm.m[y][x] = if x == y { base + saturation } else { base };
            }
        }
        self.multiply(&qm, order);
    }

    /// Rotate R, G, B rigidly about the gray axis. Appended.
    ///
    /// The gray axis is turned onto the blue axis, rotated about it, and
    /// turned back. Grays are fixed; the angle is taken modulo 360.
    pub fn rotate_hue(&mut self, degrees: f64) {
        let (pre, post) = gray_axis_frame();
        self.multiply(&pre, MatrixOrder::Append);
        self.rotate_blue(degrees.rem_euclid(360.0), MatrixOrder::Append);
        self.multiply(&post, MatrixOrder::Append);
    }

    /// Rotate hue while keeping the luminance of every color constant. Appended.
    ///
    /// Same frame as [`rotate_hue`](Self::rotate_hue), with the blue plane
    /// sheared so luminance depends on the rotation axis alone.
    pub fn rotate_hue_preserving_luminance(&mut self, degrees: f64) {
        let (mut pre, frame_post) = gray_axis_frame();

        let lum = pre.transform_vector(&ColorVector::new(LUM_R, LUM_G, LUM_B, 1.0));
        let red = lum.r() / lum.b();
        let green = lum.g() / lum.b();
        pre.shear_blue(red, green, MatrixOrder::Append);

        let mut post = Self::identity();
        post.shear_blue(-red, -green, MatrixOrder::Prepend);
        post.multiply(&frame_post, MatrixOrder::Append);

        self.multiply(&pre, MatrixOrder::Append);
        self.rotate_blue(degrees.rem_euclid(360.0), MatrixOrder::Append);
        self.multiply(&post, MatrixOrder::Append);
    }

    /// `v · M`. The homogeneous term of the result stays 1.0.
    pub fn transform_vector(&self, v: &ColorVector) -> ColorVector {
        let input = v.as_array();
        let mut out = [0.0; 4];
        for (x, value) in out.iter_mut().enumerate() {
            *value = self.m[OFFSET][x] + (0..4).map(|y| input[y] * self.m[y][x]).sum::<f64>();
        }
        ColorVector::new(out[0], out[1], out[2], out[3])
    }

    pub fn transform_pixel(&self, pixel: Pixel) -> Pixel {
        vector_to_color(&self.transform_vector(&color_to_vector(pixel)))
    }

    pub fn transform_pixels(&self, pixels: &mut [Pixel]) {
        for pixel in pixels.iter_mut() {
            *pixel = self.transform_pixel(*pixel);
        }
    }
}

/// Angle between the gray axis and the red/green plane after the 45° turn
/// about red, i.e. `atan(1/√2)` ≈ 35.26°.
fn gray_tilt_degrees() -> f64 {
    FRAC_1_SQRT_2.atan().to_degrees()
}

/// Rotation taking the gray axis onto the blue axis, and its inverse.
fn gray_axis_frame() -> (ColorMatrix, ColorMatrix) {
    let tilt = gray_tilt_degrees();

    let mut pre = ColorMatrix::identity();
    pre.rotate_red(45.0, MatrixOrder::Prepend);
    pre.rotate_green(-tilt, MatrixOrder::Append);

    let mut post = ColorMatrix::identity();
    post.rotate_green(tilt, MatrixOrder::Prepend);
    post.rotate_red(-45.0, MatrixOrder::Append);

    (pre, post)
}
