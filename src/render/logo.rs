//! # Logo Compositing
//!
//! The logo sits in a square slot at the center of the symbol, on a padded
//! rounded background. It is scaled to fit the slot without distortion.
//!
//! Covering the center of a symbol erases data modules, so callers should
//! pick a high error-correction level whenever a logo is present.

use image::imageops::{self, FilterType};
use image::RgbaImage;
use tracing::debug;

use super::fill::fill_outline;
use super::geometry::Rect;
use super::shape::rounded_rect;
use crate::error::EncodeError;
use crate::style::{Color, StyleSpec};

/// Logo slot side relative to the output side.
pub const LOGO_SLOT_RATIO: f32 = 0.15;
/// Padding between the slot and its background, in pixels.
pub const LOGO_PADDING_PX: f32 = 6.0;
/// Background corner radius relative to the slot side.
pub const LOGO_CORNER_RATIO: f32 = 0.25;

/// Square slot centered on a `side`×`side` canvas.
pub fn logo_slot(side: u32) -> Rect {
    let side = side as f32;
    let slot = side * LOGO_SLOT_RATIO;
    let offset = (side - slot) / 2.0;
    Rect::square(offset, offset, slot)
}

/// Scaled `(width, height)` of a `w`×`h` logo fitted into a `slot` square.
pub fn fit_dimensions(w: u32, h: u32, slot: f32) -> Result<(u32, u32), EncodeError> {
    if w == 0 || h == 0 {
        return Err(EncodeError::UnsupportedAspectRatio {
            width: w,
            height: h,
        });
    }
    let scale = (slot / w as f32).min(slot / h as f32);
    let fit = |v: u32| ((v as f32 * scale).round() as u32).max(1);
    Ok((fit(w), fit(h)))
}

/// Replace every pixel's color with `tint`, keeping the pixel's alpha.
pub fn tint(logo: &mut RgbaImage, tint: Color) {
    for pixel in logo.pixels_mut() {
        let alpha = (pixel.0[3] as u16 * tint.a as u16 / 255) as u8;
        pixel.0 = [tint.r, tint.g, tint.b, alpha];
    }
}

/// Draw the slot background and the fitted logo onto `img`.
pub fn composite_logo(
    img: &mut RgbaImage,
    logo: &RgbaImage,
    style: &StyleSpec,
) -> Result<(), EncodeError> {
    let slot = logo_slot(img.width().min(img.height()));
    let (w, h) = fit_dimensions(logo.width(), logo.height(), slot.width)?;

    let padded = slot.inset(-LOGO_PADDING_PX);
    fill_outline(
        img,
        &rounded_rect(padded, padded.width * LOGO_CORNER_RATIO),
        style.logo_background,
    );

    let mut scaled = imageops::resize(logo, w, h, FilterType::Triangle);
    if let Some(color) = style.logo_tint {
        tint(&mut scaled, color);
    }

    let center = slot.center();
    let x = (center.x - w as f32 / 2.0).round() as i64;
    let y = (center.y - h as f32 / 2.0).round() as i64;
    imageops::overlay(img, &scaled, x, y);

    debug!(
        source_w = logo.width(),
        source_h = logo.height(),
        w,
        h,
        tinted = style.logo_tint.is_some(),
        "composited logo"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn test_slot_is_centered() {
        let slot = logo_slot(400);
        assert!((slot.width - 60.0).abs() < 1e-3);
        assert!((slot.x - 170.0).abs() < 1e-3 && (slot.y - 170.0).abs() < 1e-3);
    }

    #[test]
    fn test_fit_wide_logo() {
        assert_eq!(fit_dimensions(200, 100, 60.0).unwrap(), (60, 30));
        assert_eq!(fit_dimensions(100, 400, 60.0).unwrap(), (15, 60));
    }

    #[test]
    fn test_fit_zero_dimension() {
        assert_eq!(
            fit_dimensions(0, 10, 60.0),
            Err(EncodeError::UnsupportedAspectRatio {
                width: 0,
                height: 10
            })
        );
    }

    #[test]
    fn test_tint_keeps_alpha() {
        let mut logo = RgbaImage::from_pixel(2, 1, Rgba([10, 20, 30, 128]));
        logo.put_pixel(1, 0, Rgba([255, 255, 255, 0]));
        tint(&mut logo, Color::rgb(1, 2, 3));
        assert_eq!(logo.get_pixel(0, 0).0, [1, 2, 3, 128]);
        assert_eq!(logo.get_pixel(1, 0).0, [1, 2, 3, 0]);
    }

    #[test]
    fn test_composite_draws_background_and_logo() {
        let mut img = RgbaImage::from_pixel(400, 400, Rgba([255, 255, 255, 255]));
        let logo = RgbaImage::from_pixel(10, 10, Rgba([0, 0, 255, 255]));
        let style = StyleSpec::new(400).logo_background(Color::rgb(0, 255, 0));
        composite_logo(&mut img, &logo, &style).unwrap();

        // Logo fills the slot center
        assert_eq!(img.get_pixel(200, 200).0, [0, 0, 255, 255]);
        // Padding ring shows the logo background
        assert_eq!(img.get_pixel(200, 167).0, [0, 255, 0, 255]);
        // Outside the padded slot is untouched
        assert_eq!(img.get_pixel(200, 150).0, [255, 255, 255, 255]);
    }

    #[test]
    fn test_composite_tinted() {
        let mut img = RgbaImage::from_pixel(200, 200, Rgba([255, 255, 255, 255]));
        let logo = RgbaImage::from_pixel(8, 8, Rgba([0, 0, 255, 255]));
        let style = StyleSpec::new(200).logo_tint(Color::rgb(255, 0, 0));
        composite_logo(&mut img, &logo, &style).unwrap();
        assert_eq!(img.get_pixel(100, 100).0, [255, 0, 0, 255]);
    }
}
