use lasso::algorithms::{fan, polygon};
use lasso::path::LassoPath;
use lasso::{point_in_polygon, point_in_triangle, Point, Selection};

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

#[test]
fn square_polygon_membership() {
    let square = [pt(0.0, 0.0), pt(10.0, 0.0), pt(10.0, 10.0), pt(0.0, 10.0)];
    assert!(point_in_polygon(pt(5.0, 5.0), &square));
    assert!(!point_in_polygon(pt(15.0, 5.0), &square));
    assert!(point_in_polygon(pt(0.0, 0.0), &square), "corner vertex counts as inside");
}

#[test]
fn right_triangle_membership() {
    let (a, b, c) = (pt(0.0, 0.0), pt(10.0, 0.0), pt(0.0, 10.0));
    assert!(point_in_triangle(pt(1.0, 1.0), a, b, c));
    assert!(!point_in_triangle(pt(9.0, 9.0), a, b, c));
}

#[test]
fn drag_fan_selects_after_third_vertex() {
    let data = [pt(5.0, 1.0)];
    let mut path = LassoPath::new();
    let mut sel = Selection::new(data.len());

    path.add_vertex(pt(0.0, 0.0));
    assert!(fan::evaluate_path(&data, &mut path, &mut sel).is_none());
    path.add_vertex(pt(10.0, 0.0));
    assert!(fan::evaluate_path(&data, &mut path, &mut sel).is_none());
    assert!(sel.is_empty());
    assert!(path.checked().is_empty());

    path.add_vertex(pt(10.0, 10.0));
    let pass = fan::evaluate_path(&data, &mut path, &mut sel).expect("three vertices form a fan");
    // (0,0)-(10,0)-(0,0) and (0,0)-(0,0)-(10,0) are zero-area; only
    // (0,0)-(10,0)-(10,10) can contain anything.
    assert_eq!(pass.triangles, 3);
    assert_eq!(pass.degenerate, 2);
    assert_eq!(pass.newly_selected, vec![0]);
    assert_eq!(path.checked().len(), 3);
    assert!(path.pending().is_empty());
}

#[test]
fn drag_selection_survives_triangles_that_miss_it() {
    let data = [pt(5.0, 1.0), pt(1.0, 8.0)];
    let mut path = LassoPath::new();
    let mut sel = Selection::new(data.len());
    for v in [pt(0.0, 0.0), pt(10.0, 0.0), pt(10.0, 10.0)] {
        path.add_vertex(v);
    }
    fan::evaluate_path(&data, &mut path, &mut sel).unwrap();
    assert!(sel.contains(0));

    // This triangle covers the upper-left point and not the first one.
    path.add_vertex(pt(0.0, 10.0));
    let pass = fan::evaluate_path(&data, &mut path, &mut sel).unwrap();
    assert_eq!(pass.newly_selected, vec![1]);
    assert!(sel.contains(0), "earlier marks are never cleared");
    assert_eq!(sel.count(), 2);
}

#[test]
fn concave_lasso_fan_over_selects_compared_to_polygon() {
    // The notch (10,10)-(5,2)-(0,10) is outside the polygon but inside the
    // first fan triangle (0,0)-(10,0)-(10,10).
    let lasso = [pt(0.0, 0.0), pt(10.0, 0.0), pt(10.0, 10.0), pt(5.0, 2.0), pt(0.0, 10.0)];
    let data = [pt(6.0, 5.0), pt(8.0, 1.0)];

    let mut path = LassoPath::new();
    let mut fan_sel = Selection::new(data.len());
    for &v in &lasso {
        path.add_vertex(v);
    }
    fan::evaluate_path(&data, &mut path, &mut fan_sel).unwrap();
    let (poly_sel, _) = polygon::evaluate_polygon(&data, &lasso);

    assert!(!poly_sel.contains(0), "notch is outside the polygon");
    assert!(fan_sel.contains(0), "fan approximation keeps the notch point");
    assert!(poly_sel.contains(1));
    assert!(fan_sel.contains(1));
}
