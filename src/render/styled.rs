//! # Styled Matrix Renderer
//!
//! Draws a QR module matrix with custom module and finder shapes.
//!
//! ```text
//! ┌──────────────────────────────┐  rounded background, radius 8%
//! │  ┌───┐               ┌───┐   │
//! │  │ ◉ │  ● ● ●  ●     │ ◉ │   │  finder eyes: 7 / 5 / 3 modules
//! │  └───┘    ●  ●●  ●   └───┘   │  fg / bg / fg, finder shape
//! │   ●  ●●  ┌─────┐  ●  ●  ●    │
//! │  ● ●  ●  │logo │ ●●  ●       │  logo slot, 15% of the side
//! │  ┌───┐   └─────┘  ● ●  ●●    │
//! │  │ ◉ │  ●●  ●  ●    ●  ●     │  modules inset 5%, module shape
//! │  └───┘   ●  ● ●●  ●    ●     │
//! └──────────────────────────────┘
//!   ↑ 2-module quiet zone
//! ```
//!
//! Finder cells are found by position only. The bottom-right corner never
//! holds a finder.

use image::{Rgba, RgbaImage};
use tracing::debug;

use super::fill::fill_outline;
use super::geometry::Rect;
use super::logo::composite_logo;
use super::shape::{rounded_rect, shape_outline};
use crate::error::EncodeError;
use crate::matrix::ModuleMatrix;
use crate::style::StyleSpec;

/// Quiet zone around the symbol, in modules.
pub const QUIET_ZONE_MODULES: usize = 2;
/// Background corner radius relative to the output side.
pub const CORNER_RADIUS_RATIO: f32 = 0.08;
/// Per-side module inset relative to the module size.
pub const MODULE_INSET_RATIO: f32 = 0.05;
/// Side of a finder pattern in modules.
pub const FINDER_SIZE: usize = 7;
/// Smallest matrix (a version 1 QR symbol) that carries finder patterns.
pub const MIN_FINDER_MATRIX: usize = 21;

/// Whether `(row, col)` falls in one of the three finder corners of an
/// `n`×`n` matrix.
#[inline]
pub fn is_finder_cell(row: usize, col: usize, n: usize) -> bool {
    let near = |i: usize| i < FINDER_SIZE;
    let far = |i: usize| i + FINDER_SIZE >= n;
    (near(row) && near(col)) || (near(row) && far(col)) || (far(row) && near(col))
}

/// Top-left cell of each finder pattern: top-left, top-right, bottom-left.
pub fn finder_origins(n: usize) -> [(usize, usize); 3] {
    let far = n.saturating_sub(FINDER_SIZE);
    [(0, 0), (0, far), (far, 0)]
}

/// Render `matrix` as a `style.size` square.
///
/// The side must leave at least one pixel per module, quiet zone included.
pub fn render(matrix: &ModuleMatrix, style: &StyleSpec) -> Result<RgbaImage, EncodeError> {
    let n = matrix.size();
    if n == 0 || matrix.dark_count() == 0 {
        return Err(EncodeError::EmptySymbol);
    }
    let required = (n + 2 * QUIET_ZONE_MODULES) as u32;
    if style.size < required {
        return Err(EncodeError::OutputTooSmall {
            required,
            got: style.size,
        });
    }

    let side = style.size as f32;
    let module = side / (n + 2 * QUIET_ZONE_MODULES) as f32;
    let origin = QUIET_ZONE_MODULES as f32 * module;
    let with_finders = n >= MIN_FINDER_MATRIX;

    let mut img = RgbaImage::from_pixel(style.size, style.size, Rgba([0, 0, 0, 0]));
    let canvas = Rect::square(0.0, 0.0, side);
    fill_outline(
        &mut img,
        &rounded_rect(canvas, side * CORNER_RADIUS_RATIO),
        style.background,
    );

    let cell_rect = |row: usize, col: usize, span: usize| {
        Rect::square(
            origin + col as f32 * module,
            origin + row as f32 * module,
            span as f32 * module,
        )
    };

    let inset = module * MODULE_INSET_RATIO;
    let mut drawn = 0usize;
    for row in 0..n {
        for col in 0..n {
            if !matrix.is_dark(row, col) || (with_finders && is_finder_cell(row, col, n)) {
                continue;
            }
            let rect = cell_rect(row, col, 1).inset(inset);
            fill_outline(&mut img, &shape_outline(style.module_shape, rect), style.foreground);
            drawn += 1;
        }
    }

    if with_finders {
        for (row, col) in finder_origins(n) {
            let outer = cell_rect(row, col, FINDER_SIZE);
            let layers = [
                (outer, style.foreground),
                (outer.inset(module), style.background),
                (outer.inset(2.0 * module), style.foreground),
            ];
            for (rect, color) in layers {
                fill_outline(&mut img, &shape_outline(style.finder_shape, rect), color);
            }
        }
    }

    if let Some(logo) = &style.logo {
        composite_logo(&mut img, logo, style)?;
    }

    debug!(
        modules = n,
        drawn,
        module_px = module,
        module_shape = %style.module_shape,
        finder_shape = %style.finder_shape,
        logo = style.logo.is_some(),
        "rendered styled matrix"
    );

    Ok(img)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::{ErrorCorrection, extract_matrix, generator_for};
    use crate::style::{Color, Shape};
    use crate::symbology::Symbology;

    fn qr_matrix(payload: &str) -> ModuleMatrix {
        let generator = generator_for(Symbology::Qr).unwrap();
        extract_matrix(&generator.generate(payload, ErrorCorrection::Medium).unwrap()).unwrap()
    }

    #[test]
    fn test_finder_cells_three_corners() {
        let n = 21;
        assert!(is_finder_cell(0, 0, n));
        assert!(is_finder_cell(6, 6, n));
        assert!(is_finder_cell(0, 20, n));
        assert!(is_finder_cell(6, 14, n));
        assert!(is_finder_cell(20, 0, n));
        assert!(!is_finder_cell(7, 7, n));
        assert!(!is_finder_cell(20, 20, n));
        assert!(!is_finder_cell(14, 14, n));
    }

    #[test]
    fn test_finder_origins() {
        assert_eq!(finder_origins(25), [(0, 0), (0, 18), (18, 0)]);
    }

    #[test]
    fn test_output_dimensions() {
        let matrix = qr_matrix("dimensions");
        let img = render(&matrix, &StyleSpec::new(300)).unwrap();
        assert_eq!(img.dimensions(), (300, 300));
    }

    #[test]
    fn test_rounded_background_corners_transparent() {
        let matrix = qr_matrix("corners");
        let img = render(&matrix, &StyleSpec::new(200)).unwrap();
        assert_eq!(img.get_pixel(0, 0).0[3], 0);
        // Quiet zone at the top edge midpoint is background
        assert_eq!(img.get_pixel(100, 1).0, [255, 255, 255, 255]);
    }

    #[test]
    fn test_finder_eye_colors() {
        let matrix = qr_matrix("eye");
        let n = matrix.size();
        let size = ((n + 4) * 10) as u32;
        let style = StyleSpec::new(size).foreground(Color::rgb(200, 0, 0));
        let img = render(&matrix, &style).unwrap();

        // Module (r, c) center in pixels
        let at = |r: usize, c: usize| img.get_pixel((20 + c * 10 + 5) as u32, (20 + r * 10 + 5) as u32).0;
        assert_eq!(at(0, 0), [200, 0, 0, 255]);
        assert_eq!(at(1, 1), [255, 255, 255, 255]);
        assert_eq!(at(3, 3), [200, 0, 0, 255]);
        assert_eq!(at(3, n - 4), [200, 0, 0, 255]);
        assert_eq!(at(n - 4, 3), [200, 0, 0, 255]);
    }

    #[test]
    fn test_module_shapes_change_pixels() {
        let matrix = qr_matrix("shapes");
        let square = render(&matrix, &StyleSpec::new(256)).unwrap();
        let circle = render(&matrix, &StyleSpec::new(256).module_shape(Shape::Circle)).unwrap();
        assert_ne!(square, circle);
    }

    #[test]
    fn test_deterministic() {
        let matrix = qr_matrix("same");
        let style = StyleSpec::new(128).module_shape(Shape::Star);
        assert_eq!(render(&matrix, &style).unwrap(), render(&matrix, &style).unwrap());
    }

    #[test]
    fn test_blank_matrix_rejected() {
        let matrix = ModuleMatrix::from_fn(21, |_, _| false);
        assert_eq!(
            render(&matrix, &StyleSpec::new(64)),
            Err(EncodeError::EmptySymbol)
        );
    }

    #[test]
    fn test_undersized_side_rejected() {
        let matrix = qr_matrix("tiny");
        let required = (matrix.size() + 4) as u32;
        assert_eq!(
            render(&matrix, &StyleSpec::new(required - 1)),
            Err(EncodeError::OutputTooSmall {
                required,
                got: required - 1
            })
        );
        assert_eq!(
            render(&matrix, &StyleSpec::new(0)),
            Err(EncodeError::OutputTooSmall { required, got: 0 })
        );
        assert!(render(&matrix, &StyleSpec::new(required)).is_ok());
    }

    #[test]
    fn test_small_matrix_has_no_finders() {
        // Every cell dark; without finder treatment every module gets drawn
        let matrix = ModuleMatrix::from_fn(5, |_, _| true);
        let img = render(&matrix, &StyleSpec::new(90)).unwrap();
        // 9 modules across, 10 px each; module (0, 0) center
        assert_eq!(img.get_pixel(25, 25).0, [0, 0, 0, 255]);
    }
}
