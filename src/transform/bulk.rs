//! Bulk compositing backend: one call renders the whole output surface.
//!
//! The matrix is lowered to `f32` coefficients working directly on 8-bit
//! channel values, and rows are rendered in parallel with rayon.

use image::RgbaImage;
use rayon::prelude::*;

use super::PixelTransformStrategy;
use crate::color::ColorMatrix;
use crate::error::{Error, Result, check_dimensions};

const CHANNELS: usize = 4;

#[derive(Debug, Clone, Default)]
pub struct BulkTransform {
    threads: Option<usize>,
}

impl BulkTransform {
    /// Render on rayon's global pool.
    pub fn new() -> Self {
        Self::default()
    }

    /// Render on a dedicated pool of `threads` workers.
    pub fn with_threads(threads: usize) -> Self {
        Self {
            threads: Some(threads),
        }
    }

    pub fn threads(&self) -> Option<usize> {
        self.threads
    }
}

impl PixelTransformStrategy for BulkTransform {
    fn name(&self) -> &'static str {
        "bulk"
    }

    fn apply(&self, source: &RgbaImage, matrix: &ColorMatrix) -> Result<RgbaImage> {
        let (width, height) = source.dimensions();
        check_dimensions(width, height)?;

        let row_bytes = (width as usize)
            .checked_mul(CHANNELS)
            .ok_or_else(|| Error::BackendFailure(format!("{width}x{height} surface overflows")))?;
        let len = row_bytes
            .checked_mul(height as usize)
            .ok_or_else(|| Error::BackendFailure(format!("{width}x{height} surface overflows")))?;

        let mut surface = Vec::new();
        surface.try_reserve_exact(len).map_err(|e| {
            Error::BackendFailure(format!("cannot allocate {width}x{height} surface: {e}"))
        })?;
        surface.resize(len, 0u8);

        let coefficients = Coefficients::from_matrix(matrix);
        let src = &source.as_raw()[..len];

        match self.threads {
            Some(threads) => {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .build()
                    .map_err(|e| Error::BackendFailure(format!("cannot start render pool: {e}")))?;
                log::debug!("Bulk render of {width}x{height} on {threads} threads");
                pool.install(|| composite(src, &mut surface, row_bytes, &coefficients));
            }
            None => {
                log::debug!("Bulk render of {width}x{height} on the global pool");
                composite(src, &mut surface, row_bytes, &coefficients);
            }
        }

        RgbaImage::from_raw(width, height, surface)
            .ok_or_else(|| Error::BackendFailure("output surface has the wrong size".to_string()))
    }
}

/// Matrix in 8-bit channel units: the translation row is pre-scaled by 255.
#[derive(Debug, Clone, Copy)]
struct Coefficients {
    linear: [[f32; 4]; 4],
    offset: [f32; 4],
}

impl Coefficients {
    fn from_matrix(matrix: &ColorMatrix) -> Self {
        let mut linear = [[0.0f32; 4]; 4];
        let mut offset = [0.0f32; 4];
        for x in 0..4 {
            for (y, row) in linear.iter_mut().enumerate() {
                row[x] = matrix.get(y, x) as f32;
            }
            offset[x] = matrix.get(4, x) as f32 * 255.0;
        }
        Self { linear, offset }
    }

    #[inline]
    fn apply(&self, input: &[u8], output: &mut [u8]) {
        let r = input[0] as f32;
        let g = input[1] as f32;
        let b = input[2] as f32;
        let a = input[3] as f32;
        let m = &self.linear;
        for (x, out) in output.iter_mut().enumerate() {
            let v = self.offset[x] + r * m[0][x] + g * m[1][x] + b * m[2][x] + a * m[3][x];
            *out = v.round().clamp(0.0, 255.0) as u8;
        }
    }
}

fn composite(src: &[u8], dst: &mut [u8], row_bytes: usize, coefficients: &Coefficients) {
    dst.par_chunks_mut(row_bytes)
        .zip(src.par_chunks(row_bytes))
        .for_each(|(out_row, in_row)| {
            for (out_px, in_px) in out_row
                .chunks_exact_mut(CHANNELS)
                .zip(in_row.chunks_exact(CHANNELS))
            {
                coefficients.apply(in_px, out_px);
            }
        });
}
