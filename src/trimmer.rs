use std::fs::{self, File};
use std::io::BufWriter;
use std::path::Path;

use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{ColorType, ImageEncoder, Rgba, RgbaImage};
use thiserror::Error;

use crate::bounds;

/// Transparent margin added around the cropped content, in pixels.
const PADDING: u32 = 10;

#[derive(Error, Debug)]
pub enum TrimError {
    #[error("Image error: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Could not determine bounding box")]
    NoContent,
}

/// Crops the logo at `input_path` to its content plus a transparent margin
/// and writes the result to `output_path`, overwriting in place when the two
/// paths match.
///
/// Failures are logged and surfaced as `false` so one bad logo never stops
/// the other from being processed.
pub fn crop_logo(input_path: &Path, output_path: &Path) -> bool {
    println!("\n🔄 Processing: {}", file_name(input_path));

    match trim(input_path, output_path) {
        Ok(()) => true,
        Err(e) => {
            println!("   ❌ Error: {}", e);
            false
        }
    }
}

fn trim(input_path: &Path, output_path: &Path) -> Result<(), TrimError> {
    let original_file_size = fs::metadata(input_path)?.len();

    let img = image::open(input_path)?.to_rgba8();
    println!("   Original size: {}x{}", img.width(), img.height());

    let bounds = bounds::detect(&img).ok_or(TrimError::NoContent)?;
    let cropped = image::imageops::crop_imm(
        &img,
        bounds.left,
        bounds.top,
        bounds.width(),
        bounds.height(),
    )
    .to_image();
    println!("   Cropped size: {}x{}", cropped.width(), cropped.height());

    let padded = pad(&cropped);
    save_png(&padded, output_path)?;

    let new_file_size = fs::metadata(output_path)?.len();
    let savings =
        (original_file_size as f64 - new_file_size as f64) / original_file_size as f64 * 100.0;

    println!("   ✅ Saved: {}", file_name(output_path));
    println!("   Final size: {}x{}", padded.width(), padded.height());
    println!(
        "   Size: {:.1} KB -> {:.1} KB ({:.1}% reduction)",
        original_file_size as f64 / 1024.0,
        new_file_size as f64 / 1024.0,
        savings
    );

    Ok(())
}

/// Centers the crop on a transparent canvas with `PADDING` pixels on each
/// side, using the crop's own alpha as the paste mask.
fn pad(cropped: &RgbaImage) -> RgbaImage {
    let mut canvas = RgbaImage::from_pixel(
        cropped.width() + 2 * PADDING,
        cropped.height() + 2 * PADDING,
        Rgba([255, 255, 255, 0]),
    );
    image::imageops::overlay(&mut canvas, cropped, PADDING as i64, PADDING as i64);
    canvas
}

fn save_png(img: &RgbaImage, path: &Path) -> Result<(), TrimError> {
    let file = File::create(path)?;
    let encoder = PngEncoder::new_with_quality(
        BufWriter::new(file),
        CompressionType::Best,
        FilterType::Adaptive,
    );
    encoder.write_image(img.as_raw(), img.width(), img.height(), ColorType::Rgba8)?;
    Ok(())
}

fn file_name(path: &Path) -> String {
    path.file_name().unwrap_or_default().to_string_lossy().to_string()
}
