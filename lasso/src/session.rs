use crate::model::Point;
use crate::path::{ClickPolygon, LassoPath};
use crate::selection::Selection;

#[derive(Clone, Debug, PartialEq)]
pub enum SessionPath {
    Drag(LassoPath),
    Click(ClickPolygon),
}

/// Everything one lasso gesture owns. A new gesture builds a new `Session`;
/// nothing carries over from the previous one.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    id: u64,
    pub(crate) path: SessionPath,
    pub(crate) selection: Selection,
}

impl Session {
    pub fn drag(id: u64, dataset_len: usize) -> Session {
        Session {
            id,
            path: SessionPath::Drag(LassoPath::new()),
            selection: Selection::new(dataset_len),
        }
    }

    pub fn click(id: u64, dataset_len: usize, first: Point) -> Session {
        Session {
            id,
            path: SessionPath::Click(ClickPolygon::new(first)),
            selection: Selection::new(dataset_len),
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn path(&self) -> &SessionPath {
        &self.path
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn vertex_count(&self) -> usize {
        match &self.path {
            SessionPath::Drag(p) => p.len(),
            SessionPath::Click(p) => p.len(),
        }
    }

    /// Full vertex list in insertion order.
    pub fn vertices(&self) -> Vec<Point> {
        match &self.path {
            SessionPath::Drag(p) => p.vertices().collect(),
            SessionPath::Click(p) => p.vertices().to_vec(),
        }
    }
}
