//! Color matrix construction and pixel/vector conversion.

pub mod builder;
pub mod matrix;
pub mod vector;

pub use builder::ColorMatrixBuilder;
pub use matrix::{ColorMatrix, MatrixOrder};
pub use vector::{ColorVector, Pixel, color_to_vector, vector_to_color};
