//! SVG rasterization
//!
//! Parses vector source with usvg and scan-converts it into a square
//! transparent pixel buffer with resvg, then encodes the buffer as RGBA8
//! PNG. The source is stretched onto the full viewport regardless of its
//! native aspect ratio; there is no letterboxing.

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};

use crate::error::{EmojiconError, EmojiconResult};

/// Rasterize SVG bytes to a `size`x`size` PNG with alpha preserved.
///
/// # Errors
///
/// - [`EmojiconError::VectorParseFailed`] if the source is malformed
/// - [`EmojiconError::InvalidSize`] if `size` is zero
/// - [`EmojiconError::EncodeFailed`] if PNG encoding fails
pub fn rasterize(svg: &[u8], size: u32) -> EmojiconResult<Vec<u8>> {
    let opts = resvg::usvg::Options::default();
    let tree = resvg::usvg::Tree::from_data(svg, &opts)
        .map_err(|source| EmojiconError::VectorParseFailed { source })?;

    // Map the document's native size onto the full target viewport.
    // Non-square sources stretch; usvg guarantees a non-zero native size.
    let native = tree.size();
    let transform = resvg::tiny_skia::Transform::from_scale(
        size as f32 / native.width(),
        size as f32 / native.height(),
    );

    let mut pixmap = resvg::tiny_skia::Pixmap::new(size, size)
        .ok_or(EmojiconError::InvalidSize { size })?;
    resvg::render(&tree, transform, &mut pixmap.as_mut());
    log::debug!(
        "rasterized {}x{} source onto {size}x{size} canvas",
        native.width(),
        native.height()
    );

    // Pixmap stores premultiplied alpha; demultiply to straight RGBA so
    // anti-aliased edges encode correctly.
    let mut rgba = Vec::with_capacity((size as usize) * (size as usize) * 4);
    for px in pixmap.pixels() {
        let c = px.demultiply();
        rgba.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
    }

    let mut png = Vec::new();
    PngEncoder::new(&mut png)
        .write_image(&rgba, size, size, ExtendedColorType::Rgba8)
        .map_err(|source| EmojiconError::EncodeFailed { source })?;
    Ok(png)
}
