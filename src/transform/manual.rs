//! Per-pixel strategy: read, convert to a vector, multiply, convert back, write.

use image::RgbaImage;

use super::PixelTransformStrategy;
use crate::color::{ColorMatrix, color_to_vector, vector_to_color};
use crate::error::{Result, check_dimensions};

/// Each output pixel depends only on the source pixel at the same coordinate.
#[derive(Debug, Clone, Copy, Default)]
pub struct ManualTransform;

impl PixelTransformStrategy for ManualTransform {
    fn name(&self) -> &'static str {
        "manual"
    }

    fn apply(&self, source: &RgbaImage, matrix: &ColorMatrix) -> Result<RgbaImage> {
        let (width, height) = source.dimensions();
        check_dimensions(width, height)?;

        let mut output = RgbaImage::new(width, height);
        for y in 0..height {
            for x in 0..width {
                let vector = color_to_vector(*source.get_pixel(x, y));
                let transformed = matrix.transform_vector(&vector);
                output.put_pixel(x, y, vector_to_color(&transformed));
            }
        }
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::ColorMatrixBuilder;
    use image::Rgba;

    #[test]
    fn writes_each_pixel_at_its_coordinate() {
        let mut source = RgbaImage::new(3, 2);
        source.put_pixel(2, 1, Rgba([255, 0, 0, 200]));
        let m = ColorMatrixBuilder::new().set_saturation(0.0).build();
        let out = ManualTransform.apply(&source, &m).unwrap();

        assert_eq!(out.dimensions(), (3, 2));
        // red desaturates to its luminance weight, 0.3086 * 255
        assert_eq!(*out.get_pixel(2, 1), Rgba([79, 79, 79, 200]));
        assert_eq!(*out.get_pixel(0, 0), Rgba([0, 0, 0, 0]));
    }

    #[test]
    fn brightness_clamps_mid_gray() {
        let source = RgbaImage::from_pixel(1, 1, Rgba([128, 128, 128, 255]));
        let m = ColorMatrixBuilder::new().set_brightness(1.0).build();
        let out = ManualTransform.apply(&source, &m).unwrap();
        assert_eq!(*out.get_pixel(0, 0), Rgba([255, 255, 255, 255]));
    }
}
