//! # Module Matrix Extraction
//!
//! Upstream 2D generators only hand back a bitmap. To draw custom module
//! shapes the logical module grid has to be recovered from that bitmap:
//!
//! ```text
//! payload → SymbolGenerator → GrayImage (1 px per module, quiet zone)
//!                                  ↓
//!                           extract_matrix
//!                                  ↓
//!                  ModuleMatrix (trimmed, square, no quiet zone)
//! ```
//!
//! A pixel is dark when its luma is exactly [`DARK`]. The trim discards the
//! generator's own quiet zone.

pub mod generator;

pub use generator::{ErrorCorrection, SymbolGenerator, generator_for};

use image::GrayImage;
use tracing::debug;

use crate::error::EncodeError;

/// Luma value the generators use for dark modules.
pub const DARK: u8 = 0;

/// Tight box around all dark pixels of a bitmap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub origin_row: usize,
    pub origin_col: usize,
    /// Row span + 1
    pub rows: usize,
    /// Column span + 1
    pub cols: usize,
}

impl BoundingBox {
    /// Side of the square the matrix is trimmed to.
    pub fn size(&self) -> usize {
        self.rows.max(self.cols)
    }
}

/// A square grid of modules (`true` = dark).
///
/// For non-square symbols (PDF417, some Aztec layouts) the cells beyond
/// `rows`/`cols` are light padding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleMatrix {
    cells: Vec<bool>,
    size: usize,
    bounds: BoundingBox,
}

impl ModuleMatrix {
    /// Build a `size`×`size` matrix from a cell predicate.
    ///
    /// `rows`/`cols` are set to the full size.
    pub fn from_fn(size: usize, mut dark: impl FnMut(usize, usize) -> bool) -> Self {
        let mut cells = Vec::with_capacity(size * size);
        for row in 0..size {
            for col in 0..size {
                cells.push(dark(row, col));
            }
        }
        Self {
            cells,
            size,
            bounds: BoundingBox {
                origin_row: 0,
                origin_col: 0,
                rows: size,
                cols: size,
            },
        }
    }

    /// Side length in modules.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Where the matrix sat in the source bitmap.
    pub fn bounds(&self) -> BoundingBox {
        self.bounds
    }

    /// Rows actually occupied by the symbol.
    pub fn rows(&self) -> usize {
        self.bounds.rows
    }

    /// Columns actually occupied by the symbol.
    pub fn cols(&self) -> usize {
        self.bounds.cols
    }

    /// Dark test; out-of-range cells are light.
    #[inline]
    pub fn is_dark(&self, row: usize, col: usize) -> bool {
        row < self.size && col < self.size && self.cells[row * self.size + col]
    }

    pub fn dark_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }
}

/// Compute the bounding box of dark pixels, or `None` for a blank bitmap.
pub fn dark_bounds(bitmap: &GrayImage) -> Option<BoundingBox> {
    let mut min_row = usize::MAX;
    let mut min_col = usize::MAX;
    let mut max_row = 0;
    let mut max_col = 0;

    for (x, y, pixel) in bitmap.enumerate_pixels() {
        if pixel.0[0] == DARK {
            let (row, col) = (y as usize, x as usize);
            min_row = min_row.min(row);
            min_col = min_col.min(col);
            max_row = max_row.max(row);
            max_col = max_col.max(col);
        }
    }

    (min_row != usize::MAX).then(|| BoundingBox {
        origin_row: min_row,
        origin_col: min_col,
        rows: max_row - min_row + 1,
        cols: max_col - min_col + 1,
    })
}

/// Recover the module matrix from a native-resolution symbol bitmap.
pub fn extract_matrix(bitmap: &GrayImage) -> Result<ModuleMatrix, EncodeError> {
    let bounds = dark_bounds(bitmap).ok_or(EncodeError::EmptySymbol)?;
    let size = bounds.size();

    let mut cells = vec![false; size * size];
    for row in 0..bounds.rows {
        for col in 0..bounds.cols {
            let x = (bounds.origin_col + col) as u32;
            let y = (bounds.origin_row + row) as u32;
            cells[row * size + col] = bitmap.get_pixel(x, y).0[0] == DARK;
        }
    }

    debug!(
        size,
        rows = bounds.rows,
        cols = bounds.cols,
        origin_row = bounds.origin_row,
        origin_col = bounds.origin_col,
        "extracted module matrix"
    );

    Ok(ModuleMatrix {
        cells,
        size,
        bounds,
    })
}
