#![cfg(target_arch = "wasm32")]

use js_sys::{Array, Function, Reflect};
use lasso_wasm::LassoEngine;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn is_err(v: &JsValue, code: &str) -> bool {
    if let Ok(ok) =
        Reflect::get(v, &JsValue::from_str("ok")).and_then(|x| x.as_bool().ok_or(JsValue::NULL))
    {
        if ok {
            return false;
        }
        if let Ok(err) = Reflect::get(v, &JsValue::from_str("error")) {
            if let Ok(c) = Reflect::get(&err, &JsValue::from_str("code")) {
                return c.as_string().map_or(false, |s| s == code);
            }
        }
    }
    false
}

fn is_ok(v: &JsValue) -> bool {
    Reflect::get(v, &JsValue::from_str("ok")).ok().and_then(|x| x.as_bool()).unwrap_or(false)
}

// Identity view: a 10x10 device square onto data [0,10]x[10,0].
fn engine_with(points: &[f64]) -> LassoEngine {
    let mut e = LassoEngine::new();
    assert!(e.load_points(points));
    assert!(e.set_view(0.0, 0.0, 10.0, 10.0, 0.0, 10.0, 0.0, 10.0));
    e
}

#[wasm_bindgen_test]
fn ingestion_errors_are_typed() {
    let mut e = LassoEngine::new();
    assert!(is_err(&e.load_points_res(&[0.0, 1.0, 2.0]), "length_mismatch"));
    assert!(is_err(&e.load_points_res(&[0.0, f64::NAN]), "non_finite"));
    assert!(is_err(&e.load_points_json_res("{"), "invalid_json"));
    assert!(is_err(&e.set_mode_res(7), "invalid_mode"));
    assert!(is_err(&e.drag_move_res(f64::INFINITY, 0.0, 0, 0.0), "non_finite"));
    assert!(is_err(&e.set_view_res(0.0, 0.0, f64::NAN, 1.0, 0.0, 1.0, 0.0, 1.0), "non_finite"));
    assert_eq!(e.point_count(), 0, "state untouched on error");
    assert!(is_ok(&e.load_points_json_res(r#"[[1,2],{"x":3,"y":4,"id":9}]"#)));
    assert_eq!(e.point_count(), 2);
}

#[wasm_bindgen_test]
fn configure_rejects_out_of_range_debounce() {
    let mut e = LassoEngine::new();
    let cfg = js_sys::JSON::parse(r#"{"debounce_ms": 99999}"#).unwrap();
    assert!(is_err(&e.configure_res(cfg), "out_of_range"));
    let cfg = js_sys::JSON::parse(r#"{"mode": "click"}"#).unwrap();
    assert!(is_ok(&e.configure_res(cfg)));
    assert_eq!(e.mode(), 1);
}

#[wasm_bindgen_test]
fn drag_with_polled_pass_selects_points() {
    // Data (5,1) and (5,9); device y is flipped, so data (5,1) is device (5,9).
    let mut e = engine_with(&[5.0, 1.0, 5.0, 9.0]);
    e.drag_start(0, 0.0);
    e.drag_move(0.0, 10.0, 0, 0.0);
    e.drag_move(10.0, 10.0, 0, 1.0);
    e.drag_move(10.0, 0.0, 0, 2.0);
    assert!(!e.poll(10.0));
    assert!(e.poll(25.0));
    e.drag_end(0, 30.0);
    assert_eq!(e.selected_indices().to_vec(), vec![0]);
    assert_eq!(e.lasso_path().to_vec(), vec![0.0, 0.0, 10.0, 0.0, 10.0, 10.0]);
    assert_eq!(e.selection_weights().to_vec(), vec![1, 0]);
    assert_eq!(e.selection_table_csv(), "id,x,y\n0,5.000,1.000\n");
    assert_eq!(e.state(), "idle");
}

#[wasm_bindgen_test]
fn click_mode_reports_updates_through_callback() {
    let mut e = engine_with(&[5.0, 5.0, 15.0, 5.0]);
    assert!(e.set_mode(1));
    let log = Array::new();
    let cb = Function::new_with_args("n", "this.push(n.type)").bind(&log);
    e.on_update(Some(cb));
    e.click(0.0, 10.0, 0, 0.0);
    e.click(10.0, 10.0, 0, 1.0);
    e.click(10.0, 0.0, 0, 2.0);
    e.click(0.0, 0.0, 0, 3.0);
    e.close(4.0);
    assert_eq!(e.state(), "closed");
    assert_eq!(e.selected_indices().to_vec(), vec![0]);
    let kinds: Vec<String> = log.iter().filter_map(|v| v.as_string()).collect();
    assert_eq!(kinds.first().map(String::as_str), Some("cleared"));
    assert_eq!(kinds.last().map(String::as_str), Some("selection"));

    e.reset();
    assert_eq!(log.length() as usize, kinds.len() + 1);
    assert_eq!(log.get(log.length() - 1).as_string().as_deref(), Some("cleared"));
    assert_eq!(e.state(), "idle");
    assert_eq!(e.selected_count(), 0);
}

#[wasm_bindgen_test]
fn standalone_predicates() {
    let square = [0.0, 0.0, 10.0, 0.0, 10.0, 10.0, 0.0, 10.0];
    assert!(lasso_wasm::point_in_polygon(5.0, 5.0, &square));
    assert!(!lasso_wasm::point_in_polygon(15.0, 5.0, &square));
    assert!(lasso_wasm::point_in_triangle(1.0, 1.0, 0.0, 0.0, 10.0, 0.0, 0.0, 10.0));
    assert!(!lasso_wasm::point_in_triangle(9.0, 9.0, 0.0, 0.0, 10.0, 0.0, 0.0, 10.0));
}
