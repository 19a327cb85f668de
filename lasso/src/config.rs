use crate::error::{LassoError, Result};
use crate::limits;
use crate::model::SelectionMode;
use serde::{Deserialize, Serialize};

/// Interaction settings. Every field has a default, so a partial JSON object
/// (or `{}`) is a valid configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LassoConfig {
    /// Quiet period before a drag evaluation pass runs.
    pub debounce_ms: u32,
    pub mode: SelectionMode,
    /// Pointer button that draws the lasso (0 = primary).
    pub button: u8,
}

impl Default for LassoConfig {
    fn default() -> Self {
        LassoConfig {
            debounce_ms: limits::DEFAULT_DEBOUNCE_MS,
            mode: SelectionMode::Drag,
            button: 0,
        }
    }
}

impl LassoConfig {
    pub fn from_json_str(s: &str) -> Result<LassoConfig> {
        let cfg: LassoConfig = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_json_value(v: serde_json::Value) -> Result<LassoConfig> {
        let cfg: LassoConfig = serde_json::from_value(v)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        if !limits::in_debounce_bounds(self.debounce_ms) {
            return Err(LassoError::OutOfRange {
                param: "debounce_ms",
                min: limits::MIN_DEBOUNCE_MS as f64,
                max: limits::MAX_DEBOUNCE_MS as f64,
                got: self.debounce_ms as f64,
            });
        }
        Ok(())
    }

    pub fn with_mode(mut self, mode: SelectionMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_debounce_ms(mut self, ms: u32) -> Self {
        self.debounce_ms = ms;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_object_uses_defaults() {
        let cfg = LassoConfig::from_json_str("{}").unwrap();
        assert_eq!(cfg, LassoConfig::default());
        assert_eq!(cfg.debounce_ms, 25);
        assert_eq!(cfg.mode, SelectionMode::Drag);
    }

    #[test]
    fn partial_object_overrides_fields() {
        let cfg = LassoConfig::from_json_value(json!({ "mode": "click", "debounce_ms": 40 })).unwrap();
        assert_eq!(cfg.mode, SelectionMode::Click);
        assert_eq!(cfg.debounce_ms, 40);
        assert_eq!(cfg.button, 0);
    }

    #[test]
    fn out_of_range_debounce_is_rejected() {
        let err = LassoConfig::from_json_value(json!({ "debounce_ms": 60_000 })).unwrap_err();
        assert_eq!(err.code(), "out_of_range");
    }

    #[test]
    fn unknown_mode_is_a_json_error() {
        let err = LassoConfig::from_json_value(json!({ "mode": "rectangle" })).unwrap_err();
        assert_eq!(err.code(), "invalid_json");
    }
}
