//! Result envelopes for the `_res` methods:
//! `{ok: true, value}` or `{ok: false, error: {code, message, data}}`.

use crate::js_object;
use lasso::LassoError;
use wasm_bindgen::JsValue;

pub fn ok(value: JsValue) -> JsValue {
    js_object([("ok", JsValue::TRUE), ("value", value)])
}

pub fn err(code: &str, message: &str, data: JsValue) -> JsValue {
    let error = js_object([
        ("code", JsValue::from_str(code)),
        ("message", JsValue::from_str(message)),
        ("data", data),
    ]);
    js_object([("ok", JsValue::FALSE), ("error", error)])
}

pub fn non_finite(param: &str) -> JsValue {
    err(
        "non_finite",
        &format!("parameter '{}' must be finite", param),
        js_object([("param", JsValue::from_str(param))]),
    )
}

pub fn invalid_config(message: &str) -> JsValue {
    err("invalid_config", message, JsValue::NULL)
}

fn num(v: usize) -> JsValue {
    JsValue::from_f64(v as f64)
}

/// Envelope for a core error, carrying its structured fields as `data`.
pub fn from_lasso(e: &LassoError) -> JsValue {
    let data = match e {
        LassoError::NonFinite { what, index } => {
            js_object([("what", JsValue::from_str(what)), ("index", num(*index))])
        }
        LassoError::TooMany { what, got, max } => js_object([
            ("what", JsValue::from_str(what)),
            ("got", num(*got)),
            ("max", num(*max)),
        ]),
        LassoError::LengthMismatch { what, left, right } => js_object([
            ("what", JsValue::from_str(what)),
            ("left", num(*left)),
            ("right", num(*right)),
        ]),
        LassoError::OutOfRange { param, min, max, got } => js_object([
            ("param", JsValue::from_str(param)),
            ("min", JsValue::from_f64(*min)),
            ("max", JsValue::from_f64(*max)),
            ("got", JsValue::from_f64(*got)),
        ]),
        LassoError::InvalidMode(got) => js_object([("got", JsValue::from(*got))]),
        LassoError::Json(_) => JsValue::NULL,
    };
    err(e.code(), &e.to_string(), data)
}
