//! Square-module rendering for symbols without QR finder patterns.
//!
//! Aztec and PDF417 carry their own locator structures that a positional
//! finder rule would destroy, so they are drawn as plain square modules.
//! The symbol's real `rows`×`cols` extent is fitted into the output box
//! with whole-pixel modules; a box that cannot hold one pixel per module,
//! quiet zone included, is rejected.

use image::RgbaImage;
use tracing::debug;

use super::fill::fill_rect;
use super::geometry::Rect;
use super::styled::QUIET_ZONE_MODULES;
use crate::error::EncodeError;
use crate::matrix::ModuleMatrix;
use crate::style::StyleSpec;

/// Render `matrix` with square modules into a `width`×`height` canvas.
pub fn render_plain(
    matrix: &ModuleMatrix,
    style: &StyleSpec,
    width: u32,
    height: u32,
) -> Result<RgbaImage, EncodeError> {
    let (rows, cols) = (matrix.rows(), matrix.cols());
    if rows == 0 || cols == 0 || matrix.dark_count() == 0 {
        return Err(EncodeError::EmptySymbol);
    }

    let quiet = 2 * QUIET_ZONE_MODULES;
    let (min_w, min_h) = ((cols + quiet) as u32, (rows + quiet) as u32);
    if width < min_w {
        return Err(EncodeError::OutputTooSmall {
            required: min_w,
            got: width,
        });
    }
    if height < min_h {
        return Err(EncodeError::OutputTooSmall {
            required: min_h,
            got: height,
        });
    }

    let module = (width / min_w).min(height / min_h) as f32;
    let x0 = ((width as f32 - cols as f32 * module) / 2.0).floor();
    let y0 = ((height as f32 - rows as f32 * module) / 2.0).floor();

    let mut img = RgbaImage::from_pixel(width, height, style.background.to_rgba());
    for row in 0..rows {
        for col in 0..cols {
            if matrix.is_dark(row, col) {
                let rect = Rect::square(x0 + col as f32 * module, y0 + row as f32 * module, module);
                fill_rect(&mut img, rect, style.foreground);
            }
        }
    }

    debug!(rows, cols, module_px = module, width, height, "rendered plain matrix");
    Ok(img)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::extract_matrix;
    use crate::style::Color;
    use image::{GrayImage, Luma};

    #[test]
    fn test_checkerboard_pixels() {
        let matrix = ModuleMatrix::from_fn(4, |r, c| (r + c) % 2 == 0);
        // 4 + 4 quiet modules = 8 across, 10 px each, symbol at 20..60
        let img = render_plain(&matrix, &StyleSpec::default(), 80, 80).unwrap();
        assert_eq!(img.get_pixel(25, 25).0, [0, 0, 0, 255]);
        assert_eq!(img.get_pixel(35, 25).0, [255, 255, 255, 255]);
        assert_eq!(img.get_pixel(10, 10).0, [255, 255, 255, 255]);
        assert_eq!(img.get_pixel(55, 55).0, [0, 0, 0, 255]);
    }

    #[test]
    fn test_crisp_edges_when_integer_modules() {
        let matrix = ModuleMatrix::from_fn(5, |r, _| r == 2);
        let img = render_plain(&matrix, &StyleSpec::default(), 97, 61).unwrap();
        assert!(img.pixels().all(|p| p.0 == [0, 0, 0, 255] || p.0 == [255, 255, 255, 255]));
    }

    #[test]
    fn test_custom_colors() {
        let matrix = ModuleMatrix::from_fn(1, |_, _| true);
        let style = StyleSpec::default()
            .background(Color::rgb(1, 1, 1))
            .foreground(Color::rgb(9, 9, 9));
        let img = render_plain(&matrix, &style, 50, 50).unwrap();
        assert_eq!(img.get_pixel(0, 0).0, [1, 1, 1, 255]);
        assert_eq!(img.get_pixel(25, 25).0, [9, 9, 9, 255]);
    }

    #[test]
    fn test_undersized_box_rejected() {
        // 6 columns by 2 rows plus the quiet zone needs 10x6
        let bitmap = GrayImage::from_pixel(6, 2, Luma([0]));
        let matrix = extract_matrix(&bitmap).unwrap();
        assert_eq!((matrix.rows(), matrix.cols()), (2, 6));

        assert_eq!(
            render_plain(&matrix, &StyleSpec::default(), 9, 40),
            Err(EncodeError::OutputTooSmall {
                required: 10,
                got: 9
            })
        );
        assert_eq!(
            render_plain(&matrix, &StyleSpec::default(), 40, 5),
            Err(EncodeError::OutputTooSmall {
                required: 6,
                got: 5
            })
        );
        assert!(render_plain(&matrix, &StyleSpec::default(), 10, 6).is_ok());
    }

    #[test]
    fn test_blank_matrix() {
        let matrix = ModuleMatrix::from_fn(3, |_, _| false);
        assert_eq!(
            render_plain(&matrix, &StyleSpec::default(), 10, 10),
            Err(EncodeError::EmptySymbol)
        );
    }
}
