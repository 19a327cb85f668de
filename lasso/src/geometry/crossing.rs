//! Even-odd (crossing number) point-in-polygon test.
//!
//! A horizontal ray is cast from the query point towards +x and every polygon
//! edge it crosses toggles the result. The closing edge from the last vertex
//! back to the first is included.

use crate::model::Point;

/// Number of polygon edges crossed by the ray from `p` towards +x.
pub fn crossing_number(p: Point, polygon: &[Point]) -> u32 {
    if polygon.len() < 3 {
        return 0;
    }
    let mut crossings = 0u32;
    let mut prev = polygon[polygon.len() - 1];
    for &cur in polygon {
        if (cur.y > p.y) != (prev.y > p.y)
            && p.x < (prev.x - cur.x) * (p.y - cur.y) / (prev.y - cur.y) + cur.x
        {
            crossings += 1;
        }
        prev = cur;
    }
    crossings
}

/// Even-odd containment. Fewer than three vertices never contain anything.
///
/// Edge semantics follow the half-open convention of the crossing test: the
/// bottom-left corner of an axis-aligned square is inside, the top-right is
/// not.
pub fn point_in_polygon(p: Point, polygon: &[Point]) -> bool {
    crossing_number(p, polygon) % 2 == 1
}
