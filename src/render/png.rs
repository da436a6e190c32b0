//! PNG export and logo decoding.

use image::{ImageEncoder, RgbaImage};

use crate::error::BarcraftError;

/// Encode a rendered raster as PNG bytes.
pub fn to_png(img: &RgbaImage) -> Result<Vec<u8>, BarcraftError> {
    let mut png_bytes = Vec::new();
    let encoder = image::codecs::png::PngEncoder::new(&mut png_bytes);
    encoder
        .write_image(
            img.as_raw(),
            img.width(),
            img.height(),
            image::ExtendedColorType::Rgba8,
        )
        .map_err(|e: image::ImageError| BarcraftError::Image(e.to_string()))?;

    Ok(png_bytes)
}

/// Decode a logo from any format the `image` crate understands.
pub fn load_logo(bytes: &[u8]) -> Result<RgbaImage, BarcraftError> {
    let img = image::load_from_memory(bytes)
        .map_err(|e| BarcraftError::Image(format!("Failed to decode logo: {}", e)))?;
    Ok(img.to_rgba8())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn test_png_signature() {
        let img = RgbaImage::from_pixel(3, 2, Rgba([10, 20, 30, 255]));
        let bytes = to_png(&img).unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    fn test_logo_decodes_png() {
        let img = RgbaImage::from_pixel(4, 5, Rgba([1, 2, 3, 200]));
        let decoded = load_logo(&to_png(&img).unwrap()).unwrap();
        assert_eq!(decoded, img);
    }

    #[test]
    fn test_logo_rejects_garbage() {
        assert!(matches!(
            load_logo(b"not an image"),
            Err(BarcraftError::Image(_))
        ));
    }
}
