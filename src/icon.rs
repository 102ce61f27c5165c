//! Decoding, fit-to-square resizing, and centering onto transparent canvases.

use image::imageops::{self, FilterType};
use image::{DynamicImage, Rgba32FImage, RgbaImage};

use crate::error::IconError;

/// Icon edge lengths rendered for every run.
pub const ICON_SIZES: [u32; 2] = [192, 512];

/// Decode image bytes of any supported format into RGBA8.
///
/// # Errors
///
/// Returns an error if the bytes are not a decodable image.
pub fn decode_rgba(data: &[u8]) -> Result<RgbaImage, IconError> {
    let img = image::load_from_memory(data)
        .map_err(|e| IconError::Image(format!("Failed to decode image: {e}")))?;
    Ok(img.into_rgba8())
}

/// Dimensions of `width`×`height` scaled uniformly to fit inside a `size` square.
///
/// The longer side becomes exactly `size`; the other is floored and never
/// drops below one pixel.
#[must_use]
pub fn fit_dimensions(width: u32, height: u32, size: u32) -> (u32, u32) {
    let scale = |num: u32, den: u32| {
        let scaled = u64::from(num) * u64::from(size) / u64::from(den.max(1));
        u32::try_from(scaled).unwrap_or(size).clamp(1, size)
    };
    if width >= height {
        (size, scale(height, width))
    } else {
        (scale(width, height), size)
    }
}

/// Render `img` centered on a transparent `size`×`size` canvas.
///
/// The image is resized with Lanczos3 and alpha-blended onto the canvas, so
/// its own transparency carries through.
#[must_use]
pub fn compose_icon(img: &RgbaImage, size: u32) -> RgbaImage {
    let (w, h) = fit_dimensions(img.width(), img.height(), size);
    let resized = resize_premultiplied(img, w, h);

    let mut canvas = RgbaImage::new(size, size);
    let x = i64::from((size - w) / 2);
    let y = i64::from((size - h) / 2);
    imageops::overlay(&mut canvas, &resized, x, y);
    canvas
}

/// Lanczos3 resize with colour weighted by alpha.
///
/// Fully transparent pixels carry no colour into their neighbours, so soft
/// edges keep the source hue instead of fading towards black.
fn resize_premultiplied(img: &RgbaImage, width: u32, height: u32) -> RgbaImage {
    let mut premultiplied: Rgba32FImage = DynamicImage::ImageRgba8(img.clone()).into_rgba32f();
    for p in premultiplied.pixels_mut() {
        let alpha = p[3];
        for c in 0..3 {
            p[c] *= alpha;
        }
    }

    let mut resized = imageops::resize(&premultiplied, width, height, FilterType::Lanczos3);
    for p in resized.pixels_mut() {
        let alpha = p[3].clamp(0.0, 1.0);
        p[3] = alpha;
        for c in 0..3 {
            p[c] = if alpha > 0.0 { (p[c] / alpha).clamp(0.0, 1.0) } else { 0.0 };
        }
    }

    DynamicImage::ImageRgba32F(resized).into_rgba8()
}
