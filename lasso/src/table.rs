use crate::dataset::Dataset;
use crate::limits::TABLE_DECIMALS;
use crate::selection::Selection;
use serde::Serialize;

/// One listed row: the point's id and its coordinates at fixed precision.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TableRow {
    pub id: u64,
    pub x: String,
    pub y: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SelectionTable {
    pub rows: Vec<TableRow>,
}

#[inline]
pub fn format_fixed(v: f64) -> String {
    format!("{:.*}", TABLE_DECIMALS, v)
}

impl SelectionTable {
    /// Rows for every selected point, in dataset order.
    pub fn build(dataset: &Dataset, selection: &Selection) -> SelectionTable {
        let rows = selection
            .indices()
            .filter_map(|i| dataset.get(i))
            .map(|(id, p)| TableRow {
                id,
                x: format_fixed(p.x),
                y: format_fixed(p.y),
            })
            .collect();
        SelectionTable { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Plain-text rendering with a header, comma separated.
    pub fn to_csv(&self) -> String {
        let mut out = String::from("id,x,y\n");
        for r in &self.rows {
            out.push_str(&format!("{},{},{}\n", r.id, r.x, r.y));
        }
        out
    }
}
