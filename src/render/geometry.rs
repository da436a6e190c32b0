//! Geometry primitives for shape outlines.
//!
//! Coordinates are in pixels, y pointing down.

use std::f32::consts::TAU;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub const fn square(x: f32, y: f32, side: f32) -> Self {
        Self::new(x, y, side, side)
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    #[inline]
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    #[inline]
    pub fn min_side(&self) -> f32 {
        self.width.min(self.height)
    }

    /// Shrink by `d` on every side.
    pub fn inset(&self, d: f32) -> Self {
        Self::new(
            self.x + d,
            self.y + d,
            (self.width - 2.0 * d).max(0.0),
            (self.height - 2.0 * d).max(0.0),
        )
    }

    /// Map a point from the unit square onto this rect.
    #[inline]
    pub fn map_unit(&self, u: f32, v: f32) -> Point {
        Point::new(self.x + u * self.width, self.y + v * self.height)
    }

    /// Containment with a small tolerance for float rounding.
    pub fn contains_rect(&self, other: &Rect) -> bool {
        const EPS: f32 = 1e-3;
        other.x >= self.x - EPS
            && other.y >= self.y - EPS
            && other.right() <= self.right() + EPS
            && other.bottom() <= self.bottom() + EPS
    }
}

/// A closed outline made of one or more polygonal contours.
///
/// Every contour ends on its starting point. Overlapping contours with the
/// same orientation fill as a union (non-zero winding).
#[derive(Debug, Clone, PartialEq)]
pub struct Outline {
    contours: Vec<Vec<Point>>,
}

impl Outline {
    /// Build from open point lists; each contour is closed automatically.
    pub fn new(contours: Vec<Vec<Point>>) -> Self {
        let contours = contours
            .into_iter()
            .filter(|c| !c.is_empty())
            .map(|mut c| {
                if c.first() != c.last() || c.len() == 1 {
                    c.push(c[0]);
                }
                c
            })
            .collect();
        Self { contours }
    }

    pub fn polygon(points: Vec<Point>) -> Self {
        Self::new(vec![points])
    }

    pub fn contours(&self) -> &[Vec<Point>] {
        &self.contours
    }

    /// Every contour has area-forming vertices and returns to its start.
    pub fn is_closed(&self) -> bool {
        !self.contours.is_empty()
            && self
                .contours
                .iter()
                .all(|c| c.len() >= 4 && c.first() == c.last())
    }

    /// Bounding box of all vertices.
    pub fn bounds(&self) -> Option<Rect> {
        let mut points = self.contours.iter().flatten();
        let first = points.next()?;
        let (mut min_x, mut min_y, mut max_x, mut max_y) = (first.x, first.y, first.x, first.y);
        for p in points {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        }
        Some(Rect::new(min_x, min_y, max_x - min_x, max_y - min_y))
    }

    /// Edges of all contours as (start, end) pairs.
    pub fn edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        self.contours
            .iter()
            .flat_map(|c| c.windows(2).map(|w| (w[0], w[1])))
    }

    /// Non-zero winding containment test.
    pub fn contains(&self, p: Point) -> bool {
        let mut winding = 0i32;
        for (a, b) in self.edges() {
            if a.y <= p.y && b.y > p.y {
                if cross(a, b, p) > 0.0 {
                    winding += 1;
                }
            } else if a.y > p.y && b.y <= p.y && cross(a, b, p) < 0.0 {
                winding -= 1;
            }
        }
        winding != 0
    }
}

/// z-component of (b - a) × (p - a).
#[inline]
fn cross(a: Point, b: Point, p: Point) -> f32 {
    (b.x - a.x) * (p.y - a.y) - (p.x - a.x) * (b.y - a.y)
}

/// Points along an elliptical arc, inclusive of both ends.
///
/// Angles in radians, 0 = +x, increasing clockwise on screen.
pub fn arc(center: Point, rx: f32, ry: f32, start: f32, end: f32, segments: usize) -> Vec<Point> {
    let segments = segments.max(1);
    (0..=segments)
        .map(|i| {
            let t = start + (end - start) * i as f32 / segments as f32;
            Point::new(center.x + rx * t.cos(), center.y + ry * t.sin())
        })
        .collect()
}

/// Full ellipse, clockwise, without the closing point.
pub fn ellipse(center: Point, rx: f32, ry: f32, segments: usize) -> Vec<Point> {
    let mut points = arc(center, rx, ry, 0.0, TAU, segments);
    points.pop();
    points
}

/// Flatten a cubic Bézier, excluding the start point.
pub fn cubic(p0: Point, p1: Point, p2: Point, p3: Point, segments: usize) -> Vec<Point> {
    let segments = segments.max(1);
    (1..=segments)
        .map(|i| {
            let t = i as f32 / segments as f32;
            let mt = 1.0 - t;
            let a = mt * mt * mt;
            let b = 3.0 * mt * mt * t;
            let c = 3.0 * mt * t * t;
            let d = t * t * t;
            Point::new(
                a * p0.x + b * p1.x + c * p2.x + d * p3.x,
                a * p0.y + b * p1.y + c * p2.y + d * p3.y,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_inset() {
        let r = Rect::square(10.0, 10.0, 20.0).inset(1.0);
        assert_eq!(r, Rect::square(11.0, 11.0, 18.0));
        // Never negative
        assert_eq!(Rect::square(0.0, 0.0, 1.0).inset(2.0).width, 0.0);
    }

    #[test]
    fn test_outline_closes_contours() {
        let outline = Outline::polygon(vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
        ]);
        assert!(outline.is_closed());
        assert_eq!(outline.contours()[0].len(), 4);
        assert_eq!(outline.edges().count(), 3);
    }

    #[test]
    fn test_degenerate_outline_not_closed() {
        let outline = Outline::polygon(vec![Point::new(0.0, 0.0), Point::new(1.0, 0.0)]);
        assert!(!outline.is_closed());
        assert!(!Outline::new(vec![]).is_closed());
    }

    #[test]
    fn test_contains_square() {
        let outline = Outline::polygon(vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(0.0, 10.0),
        ]);
        assert!(outline.contains(Point::new(5.0, 5.0)));
        assert!(!outline.contains(Point::new(15.0, 5.0)));
        assert!(!outline.contains(Point::new(5.0, -1.0)));
    }

    #[test]
    fn test_overlapping_contours_union() {
        let a = ellipse(Point::new(4.0, 5.0), 3.0, 3.0, 32);
        let b = ellipse(Point::new(6.0, 5.0), 3.0, 3.0, 32);
        let outline = Outline::new(vec![a, b]);
        // Point inside both circles stays filled under non-zero winding
        assert!(outline.contains(Point::new(5.0, 5.0)));
        assert!(outline.contains(Point::new(1.5, 5.0)));
        assert!(!outline.contains(Point::new(10.0, 5.0)));
    }

    #[test]
    fn test_cubic_endpoints() {
        let p0 = Point::new(0.0, 0.0);
        let p3 = Point::new(3.0, 1.0);
        let pts = cubic(p0, Point::new(1.0, 2.0), Point::new(2.0, 2.0), p3, 8);
        assert_eq!(pts.len(), 8);
        let last = pts[pts.len() - 1];
        assert!((last.x - 3.0).abs() < 1e-5 && (last.y - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_bounds() {
        let outline = Outline::polygon(ellipse(Point::new(5.0, 5.0), 2.0, 1.0, 64));
        let b = outline.bounds().unwrap();
        assert!((b.width - 4.0).abs() < 1e-3);
        assert!((b.height - 2.0).abs() < 0.01);
    }
}
