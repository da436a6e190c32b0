//! Bar string rasterization.
//!
//! ```text
//! |<- 10 bars ->|█ ██ █ ... █ ██|<- 10 bars ->|
//! ```
//!
//! The output width is split into `len + 20` equal bar widths. Runs of
//! consecutive bars are snapped to whole pixels so neighbouring bars never
//! bleed into each other. Every bar width must get at least one pixel;
//! narrower canvases are rejected.

use image::RgbaImage;

use super::LinearBarString;
use crate::error::EncodeError;
use crate::style::Color;

/// Bar widths reserved on each side.
pub const QUIET_ZONE_BARS: usize = 10;
/// Top and bottom margin in pixels.
pub const VERTICAL_MARGIN: u32 = 10;

/// Smallest canvas width that gives `bars` one pixel per bar width.
pub fn min_width(bars: &LinearBarString) -> u32 {
    (bars.len() + 2 * QUIET_ZONE_BARS) as u32
}

/// Draw `bars` onto a `width`×`height` canvas.
pub fn render_bars(
    bars: &LinearBarString,
    width: u32,
    height: u32,
    background: Color,
    foreground: Color,
) -> Result<RgbaImage, EncodeError> {
    if bars.is_empty() {
        return Err(EncodeError::EmptySymbol);
    }
    let required = min_width(bars);
    if width < required {
        return Err(EncodeError::OutputTooSmall {
            required,
            got: width,
        });
    }
    if height == 0 {
        return Err(EncodeError::OutputTooSmall {
            required: 1,
            got: 0,
        });
    }

    let mut img = RgbaImage::from_pixel(width, height, background.to_rgba());

    let bar_w = width as f64 / (bars.len() + 2 * QUIET_ZONE_BARS) as f64;
    // Short canvases drop the margin rather than the bars
    let margin = if height > 2 * VERTICAL_MARGIN {
        VERTICAL_MARGIN
    } else {
        0
    };
    let snap = |module: usize| (((QUIET_ZONE_BARS + module) as f64 * bar_w).round() as u32).min(width);
    let ink = foreground.to_rgba();

    for (start, end) in bar_runs(bars) {
        for x in snap(start)..snap(end) {
            for y in margin..height - margin {
                img.put_pixel(x, y, ink);
            }
        }
    }
    Ok(img)
}

/// Half-open module ranges of consecutive bars.
fn bar_runs(bars: &LinearBarString) -> Vec<(usize, usize)> {
    let mut runs = Vec::new();
    let mut start = None;
    for (i, bar) in bars.modules().enumerate() {
        match (bar, start) {
            (true, None) => start = Some(i),
            (false, Some(s)) => {
                runs.push((s, i));
                start = None;
            }
            _ => {}
        }
    }
    if let Some(s) = start {
        runs.push((s, bars.len()));
    }
    runs
}
