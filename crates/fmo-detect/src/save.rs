//! Debug-image export (feature `image`).

use std::path::Path;

/// Convert a debug image into an `image` crate buffer.
pub fn to_image(img: &crate::GrayImage) -> image::GrayImage {
    image::GrayImage::from_raw(img.width as u32, img.height as u32, img.data.clone())
        .expect("debug image buffer matches its dimensions")
}

/// Save a debug image as a grayscale file; the format follows the path
/// extension.
pub fn save_debug_image(img: &crate::GrayImage, path: &Path) -> image::ImageResult<()> {
    to_image(img).save(path)
}
