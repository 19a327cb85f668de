//! Bulk evaluation of a closed polygon against a whole dataset.

use crate::geometry::bbox::Aabb;
use crate::geometry::crossing::point_in_polygon;
use crate::model::Point;
use crate::selection::Selection;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PolygonPass {
    /// Points that survived the bounding-box pre-filter.
    pub candidates: usize,
    pub selected: usize,
}

/// Even-odd selection of `points` inside `vertices`, with a bounding-box
/// pre-filter. Always returns a fresh selection sized to `points`.
pub fn evaluate_polygon(points: &[Point], vertices: &[Point]) -> (Selection, PolygonPass) {
    let mut selection = Selection::new(points.len());
    let mut pass = PolygonPass::default();
    if vertices.len() < 3 {
        return (selection, pass);
    }
    let Some(bb) = Aabb::from_points(vertices) else {
        return (selection, pass);
    };
    for (i, &p) in points.iter().enumerate() {
        if !bb.contains(p) {
            continue;
        }
        pass.candidates += 1;
        if point_in_polygon(p, vertices) {
            selection.mark(i);
        }
    }
    pass.selected = selection.count();
    (selection, pass)
}
