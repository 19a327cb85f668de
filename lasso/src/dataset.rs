use crate::error::{LassoError, Result};
use crate::limits;
use crate::model::Point;

/// The points being selected from, with an opaque row id per point.
///
/// Fixed for the lifetime of a session; the engine only ever reads it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dataset {
    points: Vec<Point>,
    ids: Vec<u64>,
}

impl Dataset {
    /// Build from points; row ids default to the index.
    pub fn from_points(points: Vec<Point>) -> Result<Dataset> {
        check_points(&points)?;
        let ids = (0..points.len() as u64).collect();
        Ok(Dataset { points, ids })
    }

    pub fn from_points_with_ids(points: Vec<Point>, ids: Vec<u64>) -> Result<Dataset> {
        if points.len() != ids.len() {
            return Err(LassoError::LengthMismatch {
                what: "ids",
                left: points.len(),
                right: ids.len(),
            });
        }
        check_points(&points)?;
        Ok(Dataset { points, ids })
    }

    /// Separate x and y columns of equal length.
    pub fn from_xy(xs: &[f64], ys: &[f64]) -> Result<Dataset> {
        if xs.len() != ys.len() {
            return Err(LassoError::LengthMismatch {
                what: "y values",
                left: xs.len(),
                right: ys.len(),
            });
        }
        let points = xs.iter().zip(ys).map(|(&x, &y)| Point::new(x, y)).collect();
        Dataset::from_points(points)
    }

    /// Interleaved `x0, y0, x1, y1, ...`.
    pub fn from_pairs(flat: &[f64]) -> Result<Dataset> {
        if flat.len() % 2 != 0 {
            return Err(LassoError::LengthMismatch {
                what: "coordinate pairs",
                left: flat.len(),
                right: flat.len() / 2,
            });
        }
        let points = flat.chunks_exact(2).map(|c| Point::new(c[0], c[1])).collect();
        Dataset::from_points(points)
    }

    pub fn from_json_str(s: &str) -> Result<Dataset> {
        crate::json::dataset_from_str(s)
    }

    pub fn to_json_value(&self) -> serde_json::Value {
        crate::json::dataset_to_value(self)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn ids(&self) -> &[u64] {
        &self.ids
    }

    pub fn get(&self, index: usize) -> Option<(u64, Point)> {
        Some((*self.ids.get(index)?, *self.points.get(index)?))
    }
}

fn check_points(points: &[Point]) -> Result<()> {
    if points.len() > limits::MAX_DATASET_POINTS {
        return Err(LassoError::TooMany {
            what: "dataset points",
            got: points.len(),
            max: limits::MAX_DATASET_POINTS,
        });
    }
    if let Some(index) = points.iter().position(|p| !p.is_finite()) {
        return Err(LassoError::NonFinite {
            what: "dataset point",
            index,
        });
    }
    Ok(())
}
