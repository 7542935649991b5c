//! Strategy comparison harness.
//!
//! Runs the bulk and manual strategies over generated test images for a
//! handful of adjustment settings, writes the outputs, and reports timing
//! plus the per-channel difference between the two strategies.
//!
//! Usage: cargo run --release --bin compare_strategies

use hsb_color_matrix::image_io;
use hsb_color_matrix::pipeline::{self, AdjustParams};
use hsb_color_matrix::transform::Strategy;

use anyhow::Context;
use image::{Rgba, RgbaImage};
use std::path::Path;
use std::time::Instant;

/// Largest per-channel disagreement tolerated between the strategies.
const MAX_CHANNEL_DIFF: f64 = 1.0;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let output_dir = Path::new("test_output");
    std::fs::create_dir_all(output_dir).context("failed to create test_output directory")?;

    println!("=== Strategy Comparison ===\n");

    let images = [
        ("gradient", generate_gradient_image(512, 384)),
        ("checkerboard", generate_checkerboard_image(512, 384)),
        ("photo", load_or_generate_test_image()),
    ];

    let settings = [
        ("identity", AdjustParams::default()),
        ("hue_90", AdjustParams::from_slider_values(90, 100, 0)),
        ("hue_-150", AdjustParams::from_slider_values(-150, 100, 0)),
        ("desaturate", AdjustParams::from_slider_values(0, 0, 0)),
        ("oversaturate", AdjustParams::from_slider_values(0, 250, 0)),
        ("bright", AdjustParams::from_slider_values(0, 100, 60)),
        ("combined", AdjustParams::from_slider_values(45, 90, 10)),
    ];

    let mut all_pass = true;
    for (img_name, img) in &images {
        println!("Image: {} ({}x{})", img_name, img.width(), img.height());
        for (setting_name, params) in &settings {
            all_pass &= compare(img, img_name, setting_name, params, output_dir)?;
        }
        println!();
    }

    println!("=== Results ===");
    if all_pass {
        println!("ALL STRATEGIES AGREE");
    } else {
        println!("STRATEGIES DISAGREE - check output above");
        std::process::exit(1);
    }
    Ok(())
}

fn compare(
    img: &RgbaImage,
    img_name: &str,
    setting_name: &str,
    params: &AdjustParams,
    output_dir: &Path,
) -> anyhow::Result<bool> {
    let mut outputs = Vec::with_capacity(Strategy::ALL.len());
    let mut timings = Vec::with_capacity(Strategy::ALL.len());

    for &strategy in Strategy::ALL {
        let params = params.with_strategy(strategy);
        let start = Instant::now();
        let out = pipeline::process(img, &params)
            .with_context(|| format!("{strategy} failed on {img_name}/{setting_name}"))?;
        timings.push(start.elapsed().as_secs_f64() * 1000.0);

        let path = output_dir.join(format!("{img_name}_{setting_name}_{strategy}.png"));
        image_io::save_image(&out, &path)?;
        outputs.push(out);
    }

    let (mean_diff, max_diff) = pixel_diff_stats(outputs[0].as_raw(), outputs[1].as_raw());
    let pass = max_diff <= MAX_CHANNEL_DIFF;
    print_result(
        setting_name,
        pass,
        &format!(
            "{params} | bulk {:.1}ms, manual {:.1}ms | mean_diff={:.4} max_diff={:.0}",
            timings[0], timings[1], mean_diff, max_diff
        ),
    );
    Ok(pass)
}

fn generate_gradient_image(width: u32, height: u32) -> RgbaImage {
    RgbaImage::from_fn(width, height, |x, y| {
        let val = (x as f64 / (width - 1) as f64 * 255.0) as u8;
        let tint = (y as f64 / (height - 1) as f64 * 255.0) as u8;
        Rgba([val, tint, 255 - val, 255])
    })
}

fn generate_checkerboard_image(width: u32, height: u32) -> RgbaImage {
    let block = 32;
    RgbaImage::from_fn(width, height, |x, y| {
        if ((x / block) + (y / block)) % 2 == 0 {
            Rgba([220, 40, 40, 255])
        } else {
            Rgba([30, 30, 200, 128])
        }
    })
}

fn load_or_generate_test_image() -> RgbaImage {
    let path = Path::new("test_data/test_image.png");
    if path.exists() {
        match image_io::load_image(path) {
            Ok(img) => return img,
            Err(e) => eprintln!("Warning: Failed to load test_data/test_image.png: {e}"),
        }
    }
    // Fallback: generate a colorful synthetic image
    let width = 512;
    let height = 384;
    RgbaImage::from_fn(width, height, |x, y| {
        let fx = x as f64 / width as f64;
        let fy = y as f64 / height as f64;
        let r = ((fx * 3.0).sin().abs() * 255.0) as u8;
        let g = ((fy * 2.5 + 1.0).sin().abs() * 255.0) as u8;
        let b = (((fx + fy) * 2.0).cos().abs() * 200.0) as u8;
        Rgba([r, g, b, 255])
    })
}

fn pixel_diff_stats(a: &[u8], b: &[u8]) -> (f64, f64) {
    assert_eq!(a.len(), b.len());
    if a.is_empty() {
        return (0.0, 0.0);
    }
    let n = a.len() as f64;
    let diffs: Vec<f64> = a.iter().zip(b.iter()).map(|(&x, &y)| (x as f64 - y as f64).abs()).collect();
    let mean_diff = diffs.iter().sum::<f64>() / n;
    let max_diff = diffs.iter().copied().fold(0.0f64, f64::max);
    (mean_diff, max_diff)
}

fn print_result(name: &str, pass: bool, detail: &str) {
    let status = if pass { "PASS" } else { "FAIL" };
    println!("  [{}] {} - {}", status, name, detail);
}
