use wasm_bindgen::prelude::*;
mod api;
mod error;
mod logger;
mod presenter;

use gloo_timers::callback::Timeout;
use js_sys::{Object, Reflect};
use lasso::{AxisTransform, Coordinator};
use std::cell::RefCell;
use std::rc::Rc;

pub(crate) type EngineCoordinator = Coordinator<AxisTransform, presenter::JsPresenter>;

pub(crate) struct Inner {
    pub(crate) coord: EngineCoordinator,
    // Dropping the handle clears the browser timeout.
    pub(crate) timeout: Option<Timeout>,
    pub(crate) on_update: Option<js_sys::Function>,
}

#[wasm_bindgen]
pub struct LassoEngine { pub(crate) inner: Rc<RefCell<Inner>> }

/// Plain JS object from `(key, value)` pairs.
pub(crate) fn js_object<const N: usize>(fields: [(&str, JsValue); N]) -> JsValue {
    let obj = Object::new();
    for (k, v) in fields {
        let _ = Reflect::set(&obj, &JsValue::from_str(k), &v);
    }
    obj.into()
}

pub use api::{point_in_polygon, point_in_triangle, set_panic_hook};
pub use logger::init_logging;
