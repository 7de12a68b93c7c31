use std::path::Path;

use image::{DynamicImage, GrayImage, ImageFormat};
use tracing::info;

use crate::error::{MedGammError, Result};
use crate::frame::Frame;

/// File extensions the decoder accepts.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "tif", "tiff"];

/// Convert an already-grayscale 8-bit image into a Frame.
///
/// Anything other than `Luma8` is rejected; use [`decode_grayscale`] to convert.
pub fn frame_from_dynamic(img: &DynamicImage) -> Result<Frame> {
    match img {
        DynamicImage::ImageLuma8(gray) => frame_from_gray(gray),
        other => Err(MedGammError::InvalidInput(format!(
            "expected 8-bit grayscale, got {:?}",
            other.color()
        ))),
    }
}

fn frame_from_gray(gray: &GrayImage) -> Result<Frame> {
    let (w, h) = gray.dimensions();
    Frame::from_raw(w as usize, h as usize, 1, gray.as_raw().clone())
}

/// Convert any decoded image to 8-bit luma and wrap it as a Frame.
pub fn decode_grayscale(img: &DynamicImage) -> Result<Frame> {
    frame_from_gray(&img.to_luma8())
}

/// Load an image file as an 8-bit grayscale Frame.
pub fn load_image(path: &Path) -> Result<Frame> {
    let img = image::open(path)?;
    let frame = decode_grayscale(&img)?;
    info!(
        path = %path.display(),
        width = frame.width(),
        height = frame.height(),
        "loaded image"
    );
    Ok(frame)
}

/// Decode an in-memory encoded image (format guessed from its header).
pub fn load_image_from_bytes(bytes: &[u8]) -> Result<Frame> {
    let img = image::load_from_memory(bytes)?;
    decode_grayscale(&img)
}

fn to_gray_image(frame: &Frame) -> GrayImage {
    let w = frame.width() as u32;
    let h = frame.height() as u32;
    GrayImage::from_fn(w, h, |x, y| image::Luma([frame.data[[y as usize, x as usize]]]))
}

/// Save a frame as 8-bit grayscale PNG.
pub fn save_png(frame: &Frame, path: &Path) -> Result<()> {
    to_gray_image(frame).save_with_format(path, ImageFormat::Png)?;
    Ok(())
}

/// Save a frame as 8-bit grayscale TIFF.
pub fn save_tiff(frame: &Frame, path: &Path) -> Result<()> {
    to_gray_image(frame).save_with_format(path, ImageFormat::Tiff)?;
    Ok(())
}

/// Save a frame as 8-bit grayscale JPEG (lossy).
pub fn save_jpeg(frame: &Frame, path: &Path) -> Result<()> {
    to_gray_image(frame).save_with_format(path, ImageFormat::Jpeg)?;
    Ok(())
}

/// Save frame, choosing format from file extension.
pub fn save_image(frame: &Frame, path: &Path) -> Result<()> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    match ext.as_deref() {
        Some("tiff" | "tif") => save_tiff(frame, path)?,
        Some("jpg" | "jpeg") => save_jpeg(frame, path)?,
        _ => save_png(frame, path)?,
    }
    info!(path = %path.display(), "saved image");
    Ok(())
}
