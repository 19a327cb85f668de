use crate::presenter::JsPresenter;
use crate::{error, js_object, EngineCoordinator, Inner, LassoEngine};
use gloo_timers::callback::Timeout;
use js_sys::{Float64Array, Uint32Array, Uint8Array};
use lasso::{
    AxisTransform, Coordinator, Dataset, LassoConfig, LassoError, Point, PointerEvent,
    SelectionMode, TimerCommand,
};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub fn set_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Stand-alone polygon test; `vertices` is a flat `x0, y0, x1, y1, ...` list.
#[wasm_bindgen]
pub fn point_in_polygon(x: f64, y: f64, vertices: &[f64]) -> bool {
    let poly: Vec<Point> = vertices.chunks_exact(2).map(|c| Point::new(c[0], c[1])).collect();
    lasso::point_in_polygon(Point::new(x, y), &poly)
}

#[wasm_bindgen]
pub fn point_in_triangle(x: f64, y: f64, ax: f64, ay: f64, bx: f64, by: f64, cx: f64, cy: f64) -> bool {
    lasso::point_in_triangle(Point::new(x, y), Point::new(ax, ay), Point::new(bx, by), Point::new(cx, cy))
}

fn build(cfg: LassoConfig, ds: Dataset, view: AxisTransform) -> Result<EngineCoordinator, LassoError> {
    Coordinator::new(cfg, Rc::new(ds), view, JsPresenter::default())
}

// Hand queued notices to the host callback outside of any borrow.
fn flush(shared: &Rc<RefCell<Inner>>) {
    let (notices, cb) = {
        let mut g = shared.borrow_mut();
        let notices = g.coord.presenter_mut().drain();
        (notices, g.on_update.clone())
    };
    let Some(cb) = cb else { return };
    for n in notices {
        match serde_wasm_bindgen::to_value(&n) {
            Ok(v) => {
                if let Err(e) = cb.call1(&JsValue::NULL, &v) {
                    log::warn!("lasso: update callback threw {:?}", e);
                }
            }
            Err(e) => log::error!("lasso: cannot serialize notice: {}", e),
        }
    }
}

fn on_timeout(weak: &Weak<RefCell<Inner>>, token: lasso::TimerToken) {
    let Some(shared) = weak.upgrade() else { return };
    // The firing Timeout stays in its slot until the next arm replaces it.
    let ran = shared.borrow_mut().coord.on_timer(token);
    if ran {
        flush(&shared);
    }
}

fn apply_timer(shared: &Rc<RefCell<Inner>>, cmd: Option<TimerCommand>) {
    match cmd {
        Some(TimerCommand::Start { token, delay_ms }) => {
            let weak = Rc::downgrade(shared);
            let t = Timeout::new(delay_ms, move || on_timeout(&weak, token));
            shared.borrow_mut().timeout = Some(t);
        }
        Some(TimerCommand::Cancel { .. }) => {
            let _ = shared.borrow_mut().timeout.take();
        }
        None => {}
    }
}

impl LassoEngine {
    fn dispatch(&self, ev: PointerEvent) {
        let cmd = self.inner.borrow_mut().coord.handle(ev);
        apply_timer(&self.inner, cmd);
        flush(&self.inner);
    }

    fn replace(&self, cfg: LassoConfig, ds: Dataset) -> Result<(), LassoError> {
        let view = *self.inner.borrow().coord.transform();
        let coord = build(cfg, ds, view)?;
        // The old session's overlay is stale once the engine is rebuilt.
        let _ = self.inner.borrow_mut().coord.reset();
        flush(&self.inner);
        let mut g = self.inner.borrow_mut();
        g.timeout = None;
        g.coord = coord;
        Ok(())
    }

    fn current_config(&self) -> LassoConfig {
        self.inner.borrow().coord.config().clone()
    }

    fn current_dataset(&self) -> Dataset {
        (**self.inner.borrow().coord.dataset()).clone()
    }
}

#[wasm_bindgen]
impl LassoEngine {
    #[wasm_bindgen(constructor)]
    pub fn new() -> LassoEngine {
        let coord = Coordinator::with_defaults(
            Rc::new(Dataset::default()),
            AxisTransform::default(),
            JsPresenter::default(),
        );
        LassoEngine { inner: Rc::new(RefCell::new(Inner { coord, timeout: None, on_update: None })) }
    }

    // Data and configuration
    pub fn load_points(&mut self, xy: &[f64]) -> bool {
        match Dataset::from_pairs(xy) {
            Ok(ds) => self.replace(self.current_config(), ds).is_ok(),
            Err(e) => { log::warn!("lasso: load_points rejected: {}", e); false }
        }
    }
    pub fn load_points_res(&mut self, xy: &[f64]) -> JsValue {
        match Dataset::from_pairs(xy).and_then(|ds| {
            let n = ds.len();
            self.replace(self.current_config(), ds).map(|_| n)
        }) {
            Ok(n) => error::ok(JsValue::from_f64(n as f64)),
            Err(e) => error::from_lasso(&e),
        }
    }
    pub fn load_points_json_res(&mut self, json: &str) -> JsValue {
        match Dataset::from_json_str(json).and_then(|ds| {
            let n = ds.len();
            self.replace(self.current_config(), ds).map(|_| n)
        }) {
            Ok(n) => error::ok(JsValue::from_f64(n as f64)),
            Err(e) => error::from_lasso(&e),
        }
    }
    pub fn configure_res(&mut self, config: JsValue) -> JsValue {
        let cfg: LassoConfig = match serde_wasm_bindgen::from_value(config) {
            Ok(c) => c,
            Err(e) => return error::invalid_config(&e.to_string()),
        };
        match self.replace(cfg, self.current_dataset()) {
            Ok(()) => error::ok(JsValue::TRUE),
            Err(e) => error::from_lasso(&e),
        }
    }
    pub fn set_mode(&mut self, mode: u8) -> bool {
        let Ok(m) = SelectionMode::try_from(mode) else { return false };
        let cmd = self.inner.borrow_mut().coord.set_mode(m);
        apply_timer(&self.inner, cmd);
        flush(&self.inner);
        true
    }
    pub fn set_mode_res(&mut self, mode: u8) -> JsValue {
        if let Err(e) = SelectionMode::try_from(mode) {
            return error::from_lasso(&e);
        }
        error::ok(JsValue::from_bool(self.set_mode(mode)))
    }
    pub fn mode(&self) -> u8 {
        self.inner.borrow().coord.config().mode.into()
    }
    pub fn point_count(&self) -> u32 {
        self.inner.borrow().coord.dataset().len() as u32
    }

    /// Plot area in client pixels and the visible axis intervals.
    pub fn set_view(&mut self, left: f64, top: f64, width: f64, height: f64, x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> bool {
        let vals = [left, top, width, height, x_min, x_max, y_min, y_max];
        if vals.iter().any(|v| !v.is_finite()) { return false; }
        *self.inner.borrow_mut().coord.transform_mut() = AxisTransform { left, top, width, height, x_min, x_max, y_min, y_max };
        true
    }
    pub fn set_view_res(&mut self, left: f64, top: f64, width: f64, height: f64, x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> JsValue {
        let named = [("left", left), ("top", top), ("width", width), ("height", height), ("x_min", x_min), ("x_max", x_max), ("y_min", y_min), ("y_max", y_max)];
        for (name, v) in named {
            if !v.is_finite() { return error::non_finite(name); }
        }
        error::ok(JsValue::from_bool(self.set_view(left, top, width, height, x_min, x_max, y_min, y_max)))
    }

    // Pointer events
    pub fn drag_start(&mut self, button: u8, time_ms: f64) {
        self.dispatch(PointerEvent::drag_start(button, time_ms));
    }
    pub fn drag_move(&mut self, x: f64, y: f64, button: u8, time_ms: f64) {
        self.dispatch(PointerEvent::drag_move(x, y, button, time_ms));
    }
    pub fn drag_move_res(&mut self, x: f64, y: f64, button: u8, time_ms: f64) -> JsValue {
        if !x.is_finite() { return error::non_finite("x"); }
        if !y.is_finite() { return error::non_finite("y"); }
        self.drag_move(x, y, button, time_ms);
        error::ok(JsValue::TRUE)
    }
    pub fn drag_end(&mut self, button: u8, time_ms: f64) {
        self.dispatch(PointerEvent::drag_end(button, time_ms));
    }
    pub fn click(&mut self, x: f64, y: f64, button: u8, time_ms: f64) {
        self.dispatch(PointerEvent::click(x, y, button, time_ms));
    }
    pub fn click_res(&mut self, x: f64, y: f64, button: u8, time_ms: f64) -> JsValue {
        if !x.is_finite() { return error::non_finite("x"); }
        if !y.is_finite() { return error::non_finite("y"); }
        self.click(x, y, button, time_ms);
        error::ok(JsValue::TRUE)
    }
    pub fn pointer_move(&mut self, x: f64, y: f64, time_ms: f64) {
        self.dispatch(PointerEvent::moved(x, y, time_ms));
    }
    pub fn pointer_leave(&mut self, time_ms: f64) {
        self.dispatch(PointerEvent::leave(time_ms));
    }
    pub fn close(&mut self, time_ms: f64) {
        self.dispatch(PointerEvent::close(time_ms));
    }
    /// Frame-loop alternative to the built-in timeout.
    pub fn poll(&mut self, now_ms: f64) -> bool {
        let ran = self.inner.borrow_mut().coord.poll(now_ms);
        if ran { flush(&self.inner); }
        ran
    }
    pub fn reset(&mut self) {
        let cmd = self.inner.borrow_mut().coord.reset();
        apply_timer(&self.inner, cmd);
        flush(&self.inner);
    }
    pub fn on_update(&mut self, callback: Option<js_sys::Function>) {
        self.inner.borrow_mut().on_update = callback;
    }

    // Results
    pub fn state(&self) -> String {
        let s = self.inner.borrow().coord.state();
        serde_json::to_value(s).ok().and_then(|v| v.as_str().map(str::to_owned)).unwrap_or_default()
    }
    pub fn selected_count(&self) -> u32 {
        self.inner.borrow().coord.selection().map_or(0, |s| s.count() as u32)
    }
    pub fn selected_indices(&self) -> Uint32Array {
        let ids: Vec<u32> = self.inner.borrow().coord.selected_indices().into_iter().map(|i| i as u32).collect();
        Uint32Array::from(ids.as_slice())
    }
    pub fn selection_weights(&self) -> Uint8Array {
        let g = self.inner.borrow();
        let w = match g.coord.selection() {
            Some(s) => s.weights(),
            None => vec![0; g.coord.dataset().len()],
        };
        Uint8Array::from(w.as_slice())
    }
    pub fn lasso_path(&self) -> Float64Array {
        let flat: Vec<f64> = self.inner.borrow().coord.path().iter().flat_map(|p| [p.x, p.y]).collect();
        Float64Array::from(flat.as_slice())
    }
    pub fn selection_table(&self) -> JsValue {
        let table = self.inner.borrow().coord.table();
        serde_wasm_bindgen::to_value(&table.rows).unwrap_or(JsValue::NULL)
    }
    pub fn selection_table_csv(&self) -> String {
        self.inner.borrow().coord.table().to_csv()
    }
    pub fn summary(&self) -> JsValue {
        let g = self.inner.borrow();
        let session = g.coord.session().map_or(JsValue::NULL, |s| JsValue::from_f64(s.id() as f64));
        js_object([
            ("state", JsValue::from_str(&self.state())),
            ("session", session),
            ("vertices", JsValue::from_f64(g.coord.path().len() as f64)),
            ("selected", JsValue::from_f64(g.coord.selection().map_or(0, |s| s.count()) as f64)),
            ("timer_armed", JsValue::from_bool(g.coord.is_timer_armed())),
        ])
    }
}

impl Default for LassoEngine {
    fn default() -> Self { Self::new() }
}
