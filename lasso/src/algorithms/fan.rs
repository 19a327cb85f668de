//! Incremental drag evaluation.
//!
//! The lasso is treated as a union of triangles fanned from a fixed apex (the
//! first vertex of the path). Each pass only builds the triangles closed by
//! vertices added since the previous pass and marks every dataset point that
//! falls inside one of them. Marks are never cleared within a session, so the
//! selection only grows while the user drags.
//!
//! This is an approximation of true polygon containment: for concave or
//! self-intersecting lassos the union of fan triangles can over- or
//! under-select compared to an even-odd test.

use crate::geometry::triangle::Triangle;
use crate::model::Point;
use crate::path::LassoPath;
use crate::selection::Selection;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FanPass {
    /// Fan triangles built in this pass, degenerate ones included.
    pub triangles: usize,
    /// Zero-area triangles that were skipped.
    pub degenerate: usize,
    pub newly_selected: Vec<usize>,
}

/// The triangles a pass over `checked`/`pending` would test, in order.
///
/// Empty when there is nothing pending or fewer than three vertices in total.
pub fn fan_triangles(checked: &[Point], pending: &[Point]) -> Vec<Triangle> {
    if pending.is_empty() || checked.len() + pending.len() < 3 {
        return Vec::new();
    }
    let apex = checked.first().copied().unwrap_or(pending[0]);
    // With nothing checked the fan starts from the second vertex of the path,
    // and the length check above guarantees it is pending.
    let mut b = match checked.last() {
        Some(&last) => last,
        None => pending[1],
    };
    let mut out = Vec::with_capacity(pending.len());
    for &c in pending {
        out.push(Triangle::new(apex, b, c));
        b = c;
    }
    out
}

/// Run one pass over the triangles closed by `pending` and mark the points
/// they contain. Returns `None` (and marks nothing) when the path cannot form
/// a triangle yet.
pub fn evaluate_fan(
    points: &[Point],
    checked: &[Point],
    pending: &[Point],
    selection: &mut Selection,
) -> Option<FanPass> {
    let triangles = fan_triangles(checked, pending);
    if triangles.is_empty() {
        return None;
    }
    let mut pass = FanPass {
        triangles: triangles.len(),
        ..FanPass::default()
    };
    for tri in &triangles {
        if tri.is_degenerate() {
            pass.degenerate += 1;
            continue;
        }
        for (i, &p) in points.iter().enumerate() {
            if tri.contains(p) && selection.mark(i) {
                pass.newly_selected.push(i);
            }
        }
    }
    Some(pass)
}

/// Evaluate the pending part of `path` and, if a pass ran, commit it.
///
/// When the path is still too short nothing is committed, so the vertices
/// are reconsidered on the next pass.
pub fn evaluate_path(points: &[Point], path: &mut LassoPath, selection: &mut Selection) -> Option<FanPass> {
    let pass = evaluate_fan(points, path.checked(), path.pending(), selection)?;
    path.commit_pending();
    Some(pass)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pt(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn first_pass_fan_starts_from_second_vertex() {
        let pending = [pt(0.0, 0.0), pt(10.0, 0.0), pt(10.0, 10.0)];
        let tris = fan_triangles(&[], &pending);
        assert_eq!(
            tris,
            vec![
                Triangle::new(pt(0.0, 0.0), pt(10.0, 0.0), pt(0.0, 0.0)),
                Triangle::new(pt(0.0, 0.0), pt(0.0, 0.0), pt(10.0, 0.0)),
                Triangle::new(pt(0.0, 0.0), pt(10.0, 0.0), pt(10.0, 10.0)),
            ]
        );
    }

    #[test]
    fn later_pass_continues_from_last_checked() {
        let checked = [pt(0.0, 0.0), pt(10.0, 0.0), pt(10.0, 10.0)];
        let pending = [pt(5.0, 12.0), pt(0.0, 10.0)];
        let tris = fan_triangles(&checked, &pending);
        assert_eq!(
            tris,
            vec![
                Triangle::new(pt(0.0, 0.0), pt(10.0, 10.0), pt(5.0, 12.0)),
                Triangle::new(pt(0.0, 0.0), pt(5.0, 12.0), pt(0.0, 10.0)),
            ]
        );
    }

    #[test]
    fn single_pending_vertex_extends_fan() {
        let checked = [pt(0.0, 0.0), pt(10.0, 0.0), pt(10.0, 10.0)];
        let pending = [pt(0.0, 10.0)];
        let tris = fan_triangles(&checked, &pending);
        assert_eq!(tris, vec![Triangle::new(pt(0.0, 0.0), pt(10.0, 10.0), pt(0.0, 10.0))]);

        let points = [pt(1.0, 5.0), pt(5.0, 1.0)];
        let mut sel = Selection::new(points.len());
        let pass = evaluate_fan(&points, &checked, &pending, &mut sel).unwrap();
        assert_eq!(pass.triangles, 1);
        assert_eq!(pass.newly_selected, vec![0]);
    }

    #[test]
    fn too_short_path_is_not_evaluated() {
        let mut path = LassoPath::new();
        let mut sel = Selection::new(1);
        path.add_vertex(pt(0.0, 0.0));
        path.add_vertex(pt(10.0, 0.0));
        assert!(evaluate_path(&[pt(5.0, 1.0)], &mut path, &mut sel).is_none());
        assert_eq!(path.pending().len(), 2, "pending kept for the next pass");
        assert!(sel.is_empty());
    }

    #[test]
    fn degenerate_fan_selects_nothing() {
        // All vertices on one line: every triangle has zero area.
        let pending = [pt(0.0, 0.0), pt(5.0, 0.0), pt(10.0, 0.0)];
        let points = [pt(2.0, 0.0), pt(20.0, 0.0), pt(5.0, 1.0)];
        let mut sel = Selection::new(points.len());
        let pass = evaluate_fan(&points, &[], &pending, &mut sel).unwrap();
        assert_eq!(pass.triangles, 3);
        assert_eq!(pass.degenerate, 3);
        assert!(sel.is_empty());
    }

    #[test]
    fn marks_are_reported_once() {
        let points = [pt(5.0, 1.0), pt(50.0, 50.0)];
        let mut sel = Selection::new(points.len());
        let mut path = LassoPath::new();
        for p in [pt(0.0, 0.0), pt(10.0, 0.0), pt(10.0, 10.0)] {
            path.add_vertex(p);
        }
        let pass = evaluate_path(&points, &mut path, &mut sel).unwrap();
        assert_eq!(pass.newly_selected, vec![0]);
        assert_eq!(path.checked().len(), 3);
        // A triangle overlapping the same point does not report it again.
        path.add_vertex(pt(10.0, -5.0));
        let pass = evaluate_path(&points, &mut path, &mut sel).unwrap();
        assert!(pass.newly_selected.is_empty());
        assert_eq!(sel.count(), 1);
    }
}
