use crate::error::LassoError;
use serde::{Deserialize, Serialize};

/// A location in data (axis) space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point { x, y }
    }
}

/// A pointer location in client (device pixel) space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DevicePoint {
    pub x: f64,
    pub y: f64,
}

impl DevicePoint {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        DevicePoint { x, y }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionMode {
    /// Free-hand drag; evaluated incrementally as a triangle fan.
    #[default]
    Drag,
    /// Click-placed vertices; evaluated once as a polygon on close.
    Click,
}

impl TryFrom<u8> for SelectionMode {
    type Error = LassoError;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        match v {
            0 => Ok(SelectionMode::Drag),
            1 => Ok(SelectionMode::Click),
            _ => Err(LassoError::InvalidMode(v)),
        }
    }
}

impl From<SelectionMode> for u8 {
    fn from(m: SelectionMode) -> u8 {
        match m {
            SelectionMode::Drag => 0,
            SelectionMode::Click => 1,
        }
    }
}
