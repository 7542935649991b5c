use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use hsb_color_matrix::image_io;
use hsb_color_matrix::pipeline::{self, AdjustParams};
use hsb_color_matrix::transform::Strategy;

/// Adjust hue, saturation and brightness of an image.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Source image
    input: PathBuf,

    /// Destination image; format follows the extension
    output: PathBuf,

    /// Hue rotation in degrees (-180..180)
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    hue: i32,

    /// Saturation in percent, 100 is unchanged
    #[arg(long, default_value_t = 100)]
    saturation: i32,

    /// Brightness offset in percent (-100..100)
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    brightness: i32,

    /// Transform strategy: bulk or manual
    #[arg(long, default_value_t = Strategy::Bulk)]
    strategy: Strategy,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let params = AdjustParams::from_slider_values(args.hue, args.saturation, args.brightness)
        .with_strategy(args.strategy);
    log::info!("{params} ({})", params.strategy);

    let source = image_io::load_image(&args.input)
        .with_context(|| format!("failed to load {}", args.input.display()))?;
    let output = pipeline::process(&source, &params).context("failed to transform image")?;
    image_io::save_image(&output, &args.output)
        .with_context(|| format!("failed to save {}", args.output.display()))?;

    Ok(())
}
