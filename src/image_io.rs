use image::{DynamicImage, RgbaImage};
use std::path::Path;

use crate::error::Result;

/// Decode any format the `image` crate knows into an RGBA8 buffer.
pub fn load_image(path: &Path) -> Result<RgbaImage> {
    let img = image::open(path)?;
    log::info!(
        "Loaded {} ({}x{}, {:?})",
        path.display(),
        img.width(),
        img.height(),
        img.color()
    );
    Ok(img.to_rgba8())
}

/// Encode by file extension. Formats without an alpha channel get RGB.
pub fn save_image(img: &RgbaImage, path: &Path) -> Result<()> {
    let opaque_only = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| matches!(ext.to_ascii_lowercase().as_str(), "jpg" | "jpeg" | "bmp"));

    if opaque_only {
        DynamicImage::ImageRgba8(img.clone()).to_rgb8().save(path)?;
    } else {
        img.save(path)?;
    }
    log::info!("Saved {} ({}x{})", path.display(), img.width(), img.height());
    Ok(())
}
