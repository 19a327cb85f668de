use log::{Level, LevelFilter, Log, Metadata, Record};
use wasm_bindgen::prelude::*;

/// Routes `log` records to the browser console.
struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let msg = JsValue::from_str(&format!("[{}] {}", record.target(), record.args()));
        match record.level() {
            Level::Error => web_sys::console::error_1(&msg),
            Level::Warn => web_sys::console::warn_1(&msg),
            Level::Info => web_sys::console::info_1(&msg),
            Level::Debug | Level::Trace => web_sys::console::debug_1(&msg),
        }
    }

    fn flush(&self) {}
}

/// Install the console logger. `level` is one of off/error/warn/info/debug/trace
/// (unknown values mean info). Returns false if a logger was already set.
#[wasm_bindgen]
pub fn init_logging(level: &str) -> bool {
    let filter = level.parse::<LevelFilter>().unwrap_or(LevelFilter::Info);
    match log::set_logger(&LOGGER) {
        Ok(()) => {
            log::set_max_level(filter);
            true
        }
        Err(_) => false,
    }
}
