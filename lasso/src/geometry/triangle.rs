//! Point-in-triangle test using edge determinants relative to the third vertex.
//!
//! Comparisons are exact: there is no epsilon, so a point lying exactly on an
//! edge (or on a vertex) counts as inside. Either winding is accepted.

use crate::model::Point;

/// Doubled signed area of `(a, b, c)`. Zero for collinear or coincident vertices.
#[inline]
pub fn triangle_doubled_area(a: Point, b: Point, c: Point) -> f64 {
    let dx21 = c.x - b.x;
    let dy12 = b.y - c.y;
    dy12 * (a.x - c.x) + dx21 * (a.y - c.y)
}

/// Check whether `p` lies inside or on the boundary of triangle `(a, b, c)`.
///
/// `s` and `t` are the unnormalised barycentric coordinates of `p` and `d` is
/// the doubled signed area. A negative `d` (clockwise winding) flips every
/// comparison so both orderings describe the same closed region.
#[inline]
pub fn point_in_triangle(p: Point, a: Point, b: Point, c: Point) -> bool {
    let dx = p.x - c.x;
    let dy = p.y - c.y;
    let dx21 = c.x - b.x;
    let dy12 = b.y - c.y;
    let s = dy12 * dx + dx21 * dy;
    let t = (c.y - a.y) * dx + (a.x - c.x) * dy;
    let d = dy12 * (a.x - c.x) + dx21 * (a.y - c.y);
    if d < 0.0 {
        return s <= 0.0 && t <= 0.0 && s + t >= d;
    }
    s >= 0.0 && t >= 0.0 && s + t <= d
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    pub a: Point,
    pub b: Point,
    pub c: Point,
}

impl Triangle {
    #[inline]
    pub fn new(a: Point, b: Point, c: Point) -> Self {
        Triangle { a, b, c }
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        point_in_triangle(p, self.a, self.b, self.c)
    }

    #[inline]
    pub fn is_degenerate(&self) -> bool {
        triangle_doubled_area(self.a, self.b, self.c) == 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pt(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn right_triangle_inside_and_outside() {
        let (a, b, c) = (pt(0.0, 0.0), pt(10.0, 0.0), pt(0.0, 10.0));
        assert!(point_in_triangle(pt(1.0, 1.0), a, b, c));
        assert!(!point_in_triangle(pt(9.0, 9.0), a, b, c));
        assert!(!point_in_triangle(pt(-1.0, 1.0), a, b, c));
    }

    #[test]
    fn clockwise_winding_matches_counter_clockwise() {
        let (a, b, c) = (pt(0.0, 0.0), pt(10.0, 0.0), pt(0.0, 10.0));
        for p in [pt(1.0, 1.0), pt(9.0, 9.0), pt(5.0, 5.0), pt(0.0, 5.0), pt(11.0, 0.0)] {
            assert_eq!(point_in_triangle(p, a, b, c), point_in_triangle(p, a, c, b));
        }
    }

    #[test]
    fn edges_and_vertices_are_inside() {
        let (a, b, c) = (pt(0.0, 0.0), pt(10.0, 0.0), pt(0.0, 10.0));
        assert!(point_in_triangle(a, a, b, c));
        assert!(point_in_triangle(b, a, b, c));
        assert!(point_in_triangle(c, a, b, c));
        assert!(point_in_triangle(pt(5.0, 0.0), a, b, c));
        assert!(point_in_triangle(pt(5.0, 5.0), a, b, c)); // hypotenuse
    }

    #[test]
    fn doubled_area_sign_follows_winding() {
        let (a, b, c) = (pt(0.0, 0.0), pt(10.0, 0.0), pt(0.0, 10.0));
        assert_eq!(triangle_doubled_area(a, b, c), 100.0);
        assert_eq!(triangle_doubled_area(a, c, b), -100.0);
        assert!(Triangle::new(a, b, pt(20.0, 0.0)).is_degenerate());
    }

    #[test]
    fn nan_point_is_never_inside() {
        let (a, b, c) = (pt(0.0, 0.0), pt(10.0, 0.0), pt(0.0, 10.0));
        assert!(!point_in_triangle(pt(f64::NAN, 1.0), a, b, c));
    }
}
