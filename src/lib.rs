//! Hue/saturation/brightness color matrix engine - library crate.
//!
//! Builds 5×5 affine color matrices and applies them to RGBA images through
//! either a bulk parallel backend or an explicit per-pixel loop.

pub mod color;
pub mod error;
pub mod image_io;
pub mod pipeline;
pub mod transform;

pub use error::{Error, Result};
