//! Display-ratio helpers for hosts that measure images at drop time.
//!
//! The gallery model stores whatever ratio the caller computed once from
//! the image's pixel dimensions. These helpers do that computation; the
//! model never calls them.

use crate::utils::error::Result;

/// Height over width. A zero width (a broken or placeholder image) maps to
/// a square cell rather than a division by zero.
pub fn from_dimensions(width: u32, height: u32) -> f32 {
    if width == 0 {
        1.0
    } else {
        height as f32 / width as f32
    }
}

/// Decodes encoded image bytes just far enough to read their dimensions and
/// returns the display ratio.
pub fn from_bytes(bytes: &[u8]) -> Result<f32> {
    let image = image::load_from_memory(bytes)?;
    Ok(from_dimensions(image.width(), image.height()))
}
