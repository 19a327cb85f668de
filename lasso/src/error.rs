use thiserror::Error;

/// Failures at the ingestion and configuration boundaries.
///
/// Geometry and evaluation never fail; they answer "no selection" instead.
#[derive(Debug, Error)]
pub enum LassoError {
    #[error("invalid json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{what} must be finite (index {index})")]
    NonFinite { what: &'static str, index: usize },

    #[error("{what} count {got} exceeds limit {max}")]
    TooMany {
        what: &'static str,
        got: usize,
        max: usize,
    },

    #[error("length mismatch: {left} coordinates vs {right} {what}")]
    LengthMismatch {
        what: &'static str,
        left: usize,
        right: usize,
    },

    #[error("parameter '{param}' out of range [{min}, {max}], got {got}")]
    OutOfRange {
        param: &'static str,
        min: f64,
        max: f64,
        got: f64,
    },

    #[error("invalid mode {0}, expected 0:Drag or 1:Click")]
    InvalidMode(u8),
}

impl LassoError {
    /// Stable machine-readable code, used by the wasm envelopes.
    pub fn code(&self) -> &'static str {
        match self {
            LassoError::Json(_) => "invalid_json",
            LassoError::NonFinite { .. } => "non_finite",
            LassoError::TooMany { .. } => "limit_exceeded",
            LassoError::LengthMismatch { .. } => "length_mismatch",
            LassoError::OutOfRange { .. } => "out_of_range",
            LassoError::InvalidMode(_) => "invalid_mode",
        }
    }
}

pub type Result<T, E = LassoError> = std::result::Result<T, E>;
