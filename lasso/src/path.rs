//! Lasso vertex bookkeeping for both interaction modes.

use crate::model::Point;

/// Drag-mode path, split into vertices already folded into the selection
/// (`checked`) and vertices still waiting for an evaluation pass (`pending`).
///
/// `checked ++ pending` is always the full path in insertion order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LassoPath {
    checked: Vec<Point>,
    pending: Vec<Point>,
}

impl LassoPath {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.checked.clear();
        self.pending.clear();
    }

    /// Append a vertex to the pending list; the path now needs an
    /// evaluation pass.
    pub fn add_vertex(&mut self, p: Point) {
        self.pending.push(p);
    }

    /// Fold pending vertices into the checked path.
    pub fn commit_pending(&mut self) {
        self.checked.append(&mut self.pending);
    }

    pub fn checked(&self) -> &[Point] {
        &self.checked
    }

    pub fn pending(&self) -> &[Point] {
        &self.pending
    }

    pub fn needs_evaluation(&self) -> bool {
        !self.pending.is_empty()
    }

    pub fn len(&self) -> usize {
        self.checked.len() + self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// First vertex of the whole path; the fixed apex of the triangle fan.
    pub fn apex(&self) -> Option<Point> {
        self.checked.first().or_else(|| self.pending.first()).copied()
    }

    pub fn vertices(&self) -> impl Iterator<Item = Point> + '_ {
        self.checked.iter().chain(self.pending.iter()).copied()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PolygonState {
    Open,
    Closed,
}

/// Click-mode polygon: grows one vertex per click until closed, then frozen.
#[derive(Clone, Debug, PartialEq)]
pub struct ClickPolygon {
    vertices: Vec<Point>,
    state: PolygonState,
}

impl ClickPolygon {
    pub fn new(first: Point) -> Self {
        ClickPolygon {
            vertices: vec![first],
            state: PolygonState::Open,
        }
    }

    /// Returns false if the polygon is already closed.
    pub fn push(&mut self, p: Point) -> bool {
        if self.is_closed() {
            return false;
        }
        self.vertices.push(p);
        true
    }

    /// Freeze the polygon. Returns false if it was already closed.
    pub fn close(&mut self) -> bool {
        if self.is_closed() {
            return false;
        }
        self.state = PolygonState::Closed;
        true
    }

    pub fn is_closed(&self) -> bool {
        self.state == PolygonState::Closed
    }

    pub fn state(&self) -> PolygonState {
        self.state
    }

    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Outline for overlay rendering: the placed vertices plus, while open,
    /// the live cursor position.
    pub fn preview(&self, cursor: Option<Point>) -> Vec<Point> {
        let mut out = Vec::with_capacity(self.vertices.len() + 1);
        out.extend_from_slice(&self.vertices);
        if let (PolygonState::Open, Some(c)) = (self.state, cursor) {
            out.push(c);
        }
        out
    }
}
