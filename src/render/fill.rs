//! Anti-aliased scanline fill.
//!
//! Each pixel row is sampled at [`SUBSAMPLES`] sub-rows. For every sub-row
//! the crossings of the outline are sorted and walked with a non-zero
//! winding count; covered spans contribute their exact horizontal overlap
//! to each pixel. The resulting coverage is used as alpha for a source-over
//! blend.

use image::{Rgba, RgbaImage};

use super::geometry::{Outline, Rect};
use crate::style::Color;

/// Vertical samples per pixel.
pub const SUBSAMPLES: usize = 4;

/// Fill `outline` with `color`.
pub fn fill_outline(img: &mut RgbaImage, outline: &Outline, color: Color) {
    let Some(bounds) = outline.bounds() else {
        return;
    };
    let Some((x0, y0, x1, y1)) = pixel_span(img, &bounds) else {
        return;
    };

    let width = x1 - x0;
    let weight = 1.0 / SUBSAMPLES as f32;
    let mut coverage = vec![0f32; width];
    let mut crossings: Vec<(f32, i32)> = Vec::new();

    for py in y0..y1 {
        coverage.fill(0.0);

        for s in 0..SUBSAMPLES {
            let sy = py as f32 + (s as f32 + 0.5) * weight;
            crossings.clear();

            for (a, b) in outline.edges() {
                let downward = a.y <= sy && b.y > sy;
                let upward = b.y <= sy && a.y > sy;
                if downward || upward {
                    let t = (sy - a.y) / (b.y - a.y);
                    let x = a.x + t * (b.x - a.x);
                    crossings.push((x, if downward { 1 } else { -1 }));
                }
            }
            crossings.sort_by(|a, b| a.0.total_cmp(&b.0));

            let mut winding = 0;
            for pair in crossings.windows(2) {
                winding += pair[0].1;
                if winding != 0 {
                    add_span(&mut coverage, pair[0].0 - x0 as f32, pair[1].0 - x0 as f32, weight);
                }
            }
        }

        for (i, &c) in coverage.iter().enumerate() {
            if c > 0.0 {
                blend(img.get_pixel_mut((x0 + i) as u32, py as u32), color, c);
            }
        }
    }
}

/// Fill an axis-aligned rect with exact area coverage at the edges.
pub fn fill_rect(img: &mut RgbaImage, rect: Rect, color: Color) {
    let Some((x0, y0, x1, y1)) = pixel_span(img, &rect) else {
        return;
    };

    for py in y0..y1 {
        let cy = overlap(rect.y, rect.bottom(), py as f32);
        if cy <= 0.0 {
            continue;
        }
        for px in x0..x1 {
            let cx = overlap(rect.x, rect.right(), px as f32);
            if cx > 0.0 {
                blend(img.get_pixel_mut(px as u32, py as u32), color, cx * cy);
            }
        }
    }
}

/// Clip a float rect to whole-pixel bounds inside the image.
fn pixel_span(img: &RgbaImage, rect: &Rect) -> Option<(usize, usize, usize, usize)> {
    let x0 = rect.x.floor().max(0.0) as usize;
    let y0 = rect.y.floor().max(0.0) as usize;
    let x1 = (rect.right().ceil().max(0.0) as usize).min(img.width() as usize);
    let y1 = (rect.bottom().ceil().max(0.0) as usize).min(img.height() as usize);
    (x0 < x1 && y0 < y1).then_some((x0, y0, x1, y1))
}

/// Length of `[start, end)` inside pixel `[p, p + 1)`.
#[inline]
fn overlap(start: f32, end: f32, p: f32) -> f32 {
    (end.min(p + 1.0) - start.max(p)).max(0.0)
}

fn add_span(coverage: &mut [f32], start: f32, end: f32, weight: f32) {
    let len = coverage.len() as f32;
    let start = start.clamp(0.0, len);
    let end = end.clamp(0.0, len);
    if end <= start {
        return;
    }

    let first = start.floor() as usize;
    let last = (end.ceil() as usize).min(coverage.len());
    for (i, cell) in coverage.iter_mut().enumerate().take(last).skip(first) {
        *cell += overlap(start, end, i as f32) * weight;
    }
}

/// Source-over blend of `color` at `coverage` onto `dst`.
pub fn blend(dst: &mut Rgba<u8>, color: Color, coverage: f32) {
    let src_a = coverage.clamp(0.0, 1.0) * color.a as f32 / 255.0;
    if src_a <= 0.0 {
        return;
    }

    let dst_a = dst.0[3] as f32 / 255.0;
    let out_a = src_a + dst_a * (1.0 - src_a);
    let mix = |s: u8, d: u8| {
        let v = (s as f32 * src_a + d as f32 * dst_a * (1.0 - src_a)) / out_a;
        v.round().clamp(0.0, 255.0) as u8
    };

    dst.0 = [
        mix(color.r, dst.0[0]),
        mix(color.g, dst.0[1]),
        mix(color.b, dst.0[2]),
        (out_a * 255.0).round().clamp(0.0, 255.0) as u8,
    ];
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::geometry::Point;
    use crate::render::shape::shape_outline;
    use crate::style::Shape;

    fn canvas(size: u32) -> RgbaImage {
        RgbaImage::from_pixel(size, size, Color::WHITE.to_rgba())
    }

    #[test]
    fn test_fill_rect_exact_pixels() {
        let mut img = canvas(10);
        fill_rect(&mut img, Rect::new(2.0, 3.0, 4.0, 2.0), Color::BLACK);
        assert_eq!(img.get_pixel(2, 3).0, [0, 0, 0, 255]);
        assert_eq!(img.get_pixel(5, 4).0, [0, 0, 0, 255]);
        assert_eq!(img.get_pixel(6, 4).0, [255, 255, 255, 255]);
        assert_eq!(img.get_pixel(2, 5).0, [255, 255, 255, 255]);
    }

    #[test]
    fn test_fill_rect_half_pixel_edge() {
        let mut img = canvas(4);
        fill_rect(&mut img, Rect::new(0.5, 0.0, 1.0, 4.0), Color::BLACK);
        // Half coverage on both touched columns
        let v = img.get_pixel(0, 0).0[0];
        assert!((126..=129).contains(&v), "got {}", v);
    }

    #[test]
    fn test_fill_outline_square_matches_rect() {
        let rect = Rect::new(1.0, 1.0, 5.0, 5.0);
        let mut a = canvas(8);
        let mut b = canvas(8);
        fill_outline(&mut a, &shape_outline(Shape::Square, rect), Color::BLACK);
        fill_rect(&mut b, rect, Color::BLACK);
        assert_eq!(a, b);
    }

    #[test]
    fn test_fill_outline_circle() {
        let mut img = canvas(20);
        let rect = Rect::square(0.0, 0.0, 20.0);
        fill_outline(&mut img, &shape_outline(Shape::Circle, rect), Color::BLACK);
        assert_eq!(img.get_pixel(10, 10).0, [0, 0, 0, 255]);
        // Corner untouched
        assert_eq!(img.get_pixel(0, 0).0, [255, 255, 255, 255]);
    }

    #[test]
    fn test_fill_clipped_to_image() {
        let mut img = canvas(4);
        let outline = Outline::polygon(vec![
            Point::new(-10.0, -10.0),
            Point::new(10.0, -10.0),
            Point::new(10.0, 10.0),
            Point::new(-10.0, 10.0),
        ]);
        fill_outline(&mut img, &outline, Color::BLACK);
        assert!(img.pixels().all(|p| p.0 == [0, 0, 0, 255]));
    }

    #[test]
    fn test_blend_onto_transparent() {
        let mut px = Rgba([0, 0, 0, 0]);
        blend(&mut px, Color::rgb(200, 100, 50), 1.0);
        assert_eq!(px.0, [200, 100, 50, 255]);
    }

    #[test]
    fn test_blend_half() {
        let mut px = Rgba([255, 255, 255, 255]);
        blend(&mut px, Color::BLACK, 0.5);
        assert_eq!(px.0[3], 255);
        assert!((127..=128).contains(&px.0[0]));
    }
}
