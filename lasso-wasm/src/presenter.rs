use lasso::{Point, Presenter, Selection, SelectionUpdate};
use serde::Serialize;

/// One change for the host chart, delivered to the `on_update` callback.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Notice {
    Cleared { session: u64 },
    Lasso { session: u64, path: Vec<[f64; 2]>, closed: bool },
    Selection {
        session: u64,
        replaced: bool,
        added: Vec<u32>,
        total: usize,
    },
}

/// Queues notices while the engine is borrowed; they are handed to JS only
/// after the borrow ends, so callbacks may call back into the engine.
#[derive(Debug, Default)]
pub struct JsPresenter {
    queue: Vec<Notice>,
}

impl JsPresenter {
    pub fn drain(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.queue)
    }
}

impl Presenter for JsPresenter {
    fn cleared(&mut self, session: u64) {
        // Anything still queued for the old session is stale.
        self.queue.clear();
        self.queue.push(Notice::Cleared { session });
    }

    fn lasso_changed(&mut self, session: u64, path: &[Point], closed: bool) {
        let path = path.iter().map(|p| [p.x, p.y]).collect();
        self.queue.push(Notice::Lasso { session, path, closed });
    }

    fn selection_changed(&mut self, update: &SelectionUpdate, _selection: &Selection) {
        self.queue.push(Notice::Selection {
            session: update.session,
            replaced: update.replaced,
            added: update.newly_selected.iter().map(|&i| i as u32).collect(),
            total: update.total_selected,
        });
    }
}
