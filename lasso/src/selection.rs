use serde::Serialize;

/// Per-point inside flags for one dataset, plus a running count.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    inside: Vec<bool>,
    count: usize,
}

impl Selection {
    pub fn new(len: usize) -> Self {
        Selection {
            inside: vec![false; len],
            count: 0,
        }
    }

    /// Mark `index` as inside. Returns true if it was not marked before.
    /// Out-of-range indices are ignored.
    #[inline]
    pub fn mark(&mut self, index: usize) -> bool {
        match self.inside.get_mut(index) {
            Some(slot) if !*slot => {
                *slot = true;
                self.count += 1;
                true
            }
            _ => false,
        }
    }

    #[inline]
    pub fn contains(&self, index: usize) -> bool {
        self.inside.get(index).copied().unwrap_or(false)
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn len(&self) -> usize {
        self.inside.len()
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn flags(&self) -> &[bool] {
        &self.inside
    }

    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.inside
            .iter()
            .enumerate()
            .filter_map(|(i, &inside)| inside.then_some(i))
    }

    /// Emphasis value per point (1 inside, 0 outside), for hosts that size
    /// or weight points instead of switching series.
    pub fn weights(&self) -> Vec<u8> {
        self.inside.iter().map(|&b| b as u8).collect()
    }
}

/// What changed in one evaluation pass, handed to presenters.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SelectionUpdate {
    pub session: u64,
    /// True when `newly_selected` replaces the previous result instead of
    /// extending it.
    pub replaced: bool,
    pub newly_selected: Vec<usize>,
    pub total_selected: usize,
}
