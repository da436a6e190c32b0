//! # Shape Outlines
//!
//! One closed outline per [`Shape`], inscribed in the rect it is given.
//!
//! Curved families are built from cubic Béziers whose control points lie
//! inside the rect, so the curves (bounded by their control hulls) never
//! leave it.

use std::f32::consts::{FRAC_PI_2, PI, TAU};

use super::geometry::{Outline, Point, Rect, arc, cubic, ellipse};
use crate::style::Shape;

const CURVE_SEGMENTS: usize = 12;
const CIRCLE_SEGMENTS: usize = 48;
const CORNER_SEGMENTS: usize = 8;

/// Corner radius of [`Shape::RoundedSquare`] relative to the side.
pub const ROUNDED_SQUARE_RADIUS: f32 = 0.3;
/// Inner/outer radius ratio of [`Shape::Star`].
pub const STAR_INNER_RATIO: f32 = 0.4;
const STAR_POINTS: usize = 8;
/// Clover petal radius relative to the side.
pub const CLOVER_PETAL_RATIO: f32 = 0.3;
/// Clover petal offset from center relative to the petal radius.
pub const CLOVER_OFFSET_RATIO: f32 = 0.55;

/// Outline of `shape` inscribed in `rect`.
pub fn shape_outline(shape: Shape, rect: Rect) -> Outline {
    match shape {
        Shape::Square => Outline::polygon(vec![
            Point::new(rect.x, rect.y),
            Point::new(rect.right(), rect.y),
            Point::new(rect.right(), rect.bottom()),
            Point::new(rect.x, rect.bottom()),
        ]),
        Shape::RoundedSquare => rounded_rect(rect, rect.min_side() * ROUNDED_SQUARE_RADIUS),
        Shape::Circle => {
            let c = rect.center();
            Outline::polygon(ellipse(c, rect.width / 2.0, rect.height / 2.0, CIRCLE_SEGMENTS))
        }
        Shape::Diamond => {
            let c = rect.center();
            Outline::polygon(vec![
                Point::new(c.x, rect.y),
                Point::new(rect.right(), c.y),
                Point::new(c.x, rect.bottom()),
                Point::new(rect.x, c.y),
            ])
        }
        Shape::Hexagon => regular_star(rect.center(), rect.min_side() / 2.0, 1.0, 6),
        Shape::Star => regular_star(
            rect.center(),
            rect.min_side() / 2.0,
            STAR_INNER_RATIO,
            STAR_POINTS,
        ),
        Shape::Heart => unit_path(rect, HEART),
        Shape::Leaf => unit_path(rect, LEAF),
        Shape::Raindrop => unit_path(rect, RAINDROP),
        Shape::Clover => clover(rect),
    }
}

/// Rounded rectangle with corner radius `radius` (clamped to half the side).
pub fn rounded_rect(rect: Rect, radius: f32) -> Outline {
    let r = radius.clamp(0.0, rect.min_side() / 2.0);
    if r <= f32::EPSILON {
        return shape_outline(Shape::Square, rect);
    }

    let mut points = Vec::with_capacity(4 * (CORNER_SEGMENTS + 1));
    // Clockwise from the top-right corner
    let corners = [
        (Point::new(rect.right() - r, rect.y + r), -FRAC_PI_2),
        (Point::new(rect.right() - r, rect.bottom() - r), 0.0),
        (Point::new(rect.x + r, rect.bottom() - r), FRAC_PI_2),
        (Point::new(rect.x + r, rect.y + r), PI),
    ];
    for (center, start) in corners {
        points.extend(arc(center, r, r, start, start + FRAC_PI_2, CORNER_SEGMENTS));
    }
    Outline::polygon(points)
}

/// Alternating outer/inner radius polygon with the first vertex pointing up.
///
/// `inner_ratio == 1.0` yields a regular `points`-gon.
fn regular_star(center: Point, outer: f32, inner_ratio: f32, points: usize) -> Outline {
    let vertices = if inner_ratio >= 1.0 { points } else { points * 2 };
    let step = TAU / vertices as f32;

    let pts = (0..vertices)
        .map(|i| {
            let radius = if inner_ratio < 1.0 && i % 2 == 1 {
                outer * inner_ratio
            } else {
                outer
            };
            let angle = -FRAC_PI_2 + step * i as f32;
            Point::new(center.x + radius * angle.cos(), center.y + radius * angle.sin())
        })
        .collect();
    Outline::polygon(pts)
}

fn clover(rect: Rect) -> Outline {
    let c = rect.center();
    let petal = rect.min_side() * CLOVER_PETAL_RATIO;
    let offset = petal * CLOVER_OFFSET_RATIO;

    let petals = [(0.0, -offset), (offset, 0.0), (0.0, offset), (-offset, 0.0)]
        .into_iter()
        .map(|(dx, dy)| ellipse(Point::new(c.x + dx, c.y + dy), petal, petal, CIRCLE_SEGMENTS))
        .collect();
    Outline::new(petals)
}

/// A unit-square path: start point then cubic segments `(c1, c2, end)`.
struct UnitPath {
    start: (f32, f32),
    segments: &'static [[(f32, f32); 3]],
}

const HEART: UnitPath = UnitPath {
    start: (0.5, 1.0),
    segments: &[
        [(0.15, 0.72), (0.0, 0.5), (0.0, 0.3)],
        [(0.0, 0.1), (0.12, 0.0), (0.27, 0.0)],
        [(0.4, 0.0), (0.5, 0.1), (0.5, 0.22)],
        [(0.5, 0.1), (0.6, 0.0), (0.73, 0.0)],
        [(0.88, 0.0), (1.0, 0.1), (1.0, 0.3)],
        [(1.0, 0.5), (0.85, 0.72), (0.5, 1.0)],
    ],
};

/// Pointed at bottom-left and top-right, bellied along the other diagonal.
const LEAF: UnitPath = UnitPath {
    start: (0.0, 1.0),
    segments: &[
        [(0.0, 0.35), (0.35, 0.0), (1.0, 0.0)],
        [(1.0, 0.65), (0.65, 1.0), (0.0, 1.0)],
    ],
};

/// Tip at the top, round belly at the bottom.
const RAINDROP: UnitPath = UnitPath {
    start: (0.5, 0.0),
    segments: &[
        [(0.7, 0.25), (1.0, 0.45), (1.0, 0.68)],
        [(1.0, 0.88), (0.78, 1.0), (0.5, 1.0)],
        [(0.22, 1.0), (0.0, 0.88), (0.0, 0.68)],
        [(0.0, 0.45), (0.3, 0.25), (0.5, 0.0)],
    ],
};

fn unit_path(rect: Rect, path: UnitPath) -> Outline {
    let map = |(u, v): (f32, f32)| rect.map_unit(u, v);

    let mut current = map(path.start);
    let mut points = vec![current];
    for [c1, c2, end] in path.segments {
        let end = map(*end);
        points.extend(cubic(current, map(*c1), map(*c2), end, CURVE_SEGMENTS));
        current = end;
    }
    Outline::polygon(points)
}
