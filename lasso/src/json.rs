use crate::dataset::Dataset;
use crate::error::{LassoError, Result};
use crate::limits;
use crate::model::Point;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Deserialize)]
#[serde(untagged)]
enum RowDe {
    Pair([f64; 2]),
    Object { x: f64, y: f64, id: Option<u64> },
}

#[derive(Deserialize)]
#[serde(untagged)]
enum DocDe {
    Rows(Vec<RowDe>),
    Wrapped { points: Vec<RowDe> },
}

pub fn dataset_from_str(s: &str) -> Result<Dataset> {
    let doc: DocDe = serde_json::from_str(s)?;
    let rows = match doc {
        DocDe::Rows(rows) => rows,
        DocDe::Wrapped { points } => points,
    };
    if rows.len() > limits::MAX_DATASET_POINTS {
        return Err(LassoError::TooMany {
            what: "dataset points",
            got: rows.len(),
            max: limits::MAX_DATASET_POINTS,
        });
    }
    let mut points = Vec::with_capacity(rows.len());
    let mut ids = Vec::with_capacity(rows.len());
    for (i, row) in rows.into_iter().enumerate() {
        let (p, id) = match row {
            RowDe::Pair([x, y]) => (Point::new(x, y), None),
            RowDe::Object { x, y, id } => (Point::new(x, y), id),
        };
        points.push(p);
        ids.push(id.unwrap_or(i as u64));
    }
    Dataset::from_points_with_ids(points, ids)
}

pub fn dataset_to_value(ds: &Dataset) -> Value {
    #[derive(Serialize)]
    struct RowSer {
        id: u64,
        x: f64,
        y: f64,
    }
    #[derive(Serialize)]
    struct Doc {
        points: Vec<RowSer>,
    }
    let points = ds
        .ids()
        .iter()
        .zip(ds.points())
        .map(|(&id, p)| RowSer { id, x: p.x, y: p.y })
        .collect();
    serde_json::to_value(Doc { points }).unwrap_or(Value::Null)
}
