//! Pointer-event state machine driving path accumulation and evaluation.
//!
//! The coordinator owns the current [`Session`], translates device positions
//! through a [`CoordinateTransform`] and reports every visible change to a
//! [`Presenter`]. It never computes geometry itself.

use crate::algorithms::{fan, polygon};
use crate::config::LassoConfig;
use crate::dataset::Dataset;
use crate::debounce::{Debouncer, TimerCommand, TimerToken};
use crate::error::Result;
use crate::limits;
use crate::model::{DevicePoint, Point, SelectionMode};
use crate::selection::{Selection, SelectionUpdate};
use crate::session::{Session, SessionPath};
use crate::table::SelectionTable;
use crate::transform::CoordinateTransform;
use log::{debug, trace, warn};
use serde::{Deserialize, Serialize};
use std::rc::Rc;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerKind {
    DragStart,
    DragMove,
    DragEnd,
    Click,
    /// Pointer moved while a click-mode polygon is open.
    Move,
    /// Pointer left the plotting surface.
    Leave,
    /// Finish the click-mode polygon.
    Close,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    pub kind: PointerKind,
    pub position: DevicePoint,
    pub button: u8,
    pub time_ms: f64,
}

impl PointerEvent {
    pub fn new(kind: PointerKind, position: DevicePoint, button: u8, time_ms: f64) -> Self {
        PointerEvent {
            kind,
            position,
            button,
            time_ms,
        }
    }

    pub fn drag_start(button: u8, time_ms: f64) -> Self {
        Self::new(PointerKind::DragStart, DevicePoint::default(), button, time_ms)
    }

    pub fn drag_move(x: f64, y: f64, button: u8, time_ms: f64) -> Self {
        Self::new(PointerKind::DragMove, DevicePoint::new(x, y), button, time_ms)
    }

    pub fn drag_end(button: u8, time_ms: f64) -> Self {
        Self::new(PointerKind::DragEnd, DevicePoint::default(), button, time_ms)
    }

    pub fn click(x: f64, y: f64, button: u8, time_ms: f64) -> Self {
        Self::new(PointerKind::Click, DevicePoint::new(x, y), button, time_ms)
    }

    pub fn moved(x: f64, y: f64, time_ms: f64) -> Self {
        Self::new(PointerKind::Move, DevicePoint::new(x, y), 0, time_ms)
    }

    pub fn leave(time_ms: f64) -> Self {
        Self::new(PointerKind::Leave, DevicePoint::default(), 0, time_ms)
    }

    pub fn close(time_ms: f64) -> Self {
        Self::new(PointerKind::Close, DevicePoint::default(), 0, time_ms)
    }

    fn uses_button(&self) -> bool {
        matches!(
            self.kind,
            PointerKind::DragStart | PointerKind::DragMove | PointerKind::DragEnd | PointerKind::Click
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InteractionState {
    Idle,
    Dragging,
    Open,
    Closed,
}

/// Receives read-only snapshots of the lasso and its selection.
pub trait Presenter {
    /// A new session started; previous highlights and overlay are stale.
    fn cleared(&mut self, session: u64);
    fn lasso_changed(&mut self, session: u64, path: &[Point], closed: bool);
    fn selection_changed(&mut self, update: &SelectionUpdate, selection: &Selection);
}

/// Presenter that discards everything; for headless use.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullPresenter;

impl Presenter for NullPresenter {
    fn cleared(&mut self, _session: u64) {}
    fn lasso_changed(&mut self, _session: u64, _path: &[Point], _closed: bool) {}
    fn selection_changed(&mut self, _update: &SelectionUpdate, _selection: &Selection) {}
}

pub struct Coordinator<T: CoordinateTransform, P: Presenter> {
    config: LassoConfig,
    dataset: Rc<Dataset>,
    transform: T,
    presenter: P,
    debouncer: Debouncer,
    state: InteractionState,
    session: Option<Session>,
    next_session: u64,
    cursor: Option<Point>,
    cap_warned: bool,
}

impl<T: CoordinateTransform, P: Presenter> Coordinator<T, P> {
    pub fn new(config: LassoConfig, dataset: Rc<Dataset>, transform: T, presenter: P) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(config, dataset, transform, presenter))
    }

    /// Coordinator with [`LassoConfig::default`], which is always valid.
    pub fn with_defaults(dataset: Rc<Dataset>, transform: T, presenter: P) -> Self {
        Self::build(LassoConfig::default(), dataset, transform, presenter)
    }

    fn build(config: LassoConfig, dataset: Rc<Dataset>, transform: T, presenter: P) -> Self {
        debug!(
            "lasso coordinator: mode={:?} debounce={}ms points={}",
            config.mode,
            config.debounce_ms,
            dataset.len()
        );
        Coordinator {
            debouncer: Debouncer::new(config.debounce_ms),
            config,
            dataset,
            transform,
            presenter,
            state: InteractionState::Idle,
            session: None,
            next_session: 1,
            cursor: None,
            cap_warned: false,
        }
    }

    pub fn config(&self) -> &LassoConfig {
        &self.config
    }

    pub fn state(&self) -> InteractionState {
        self.state
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn dataset(&self) -> &Rc<Dataset> {
        &self.dataset
    }

    pub fn transform(&self) -> &T {
        &self.transform
    }

    pub fn transform_mut(&mut self) -> &mut T {
        &mut self.transform
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    pub fn is_timer_armed(&self) -> bool {
        self.debouncer.is_armed()
    }

    pub fn selection(&self) -> Option<&Selection> {
        self.session.as_ref().map(Session::selection)
    }

    pub fn selected_indices(&self) -> Vec<usize> {
        self.selection().map(|s| s.indices().collect()).unwrap_or_default()
    }

    /// Full lasso path of the current session (without any live cursor).
    pub fn path(&self) -> Vec<Point> {
        self.session.as_ref().map(Session::vertices).unwrap_or_default()
    }

    pub fn table(&self) -> SelectionTable {
        match self.selection() {
            Some(sel) => SelectionTable::build(&self.dataset, sel),
            None => SelectionTable::default(),
        }
    }

    /// Switch interaction mode. Discards the current session.
    pub fn set_mode(&mut self, mode: SelectionMode) -> Option<TimerCommand> {
        self.config.mode = mode;
        self.reset()
    }

    /// Drop the current session and any outstanding timer. The presenter is
    /// told that the dropped session's overlay and highlights are stale.
    pub fn reset(&mut self) -> Option<TimerCommand> {
        let cancel = self.debouncer.cancel();
        if let Some(old) = self.session.take() {
            debug!("lasso: session {} discarded", old.id());
            self.presenter.cleared(old.id());
        }
        self.cursor = None;
        self.state = InteractionState::Idle;
        cancel
    }

    /// Dispatch one pointer event. Returns the timer action the host must
    /// perform, if any.
    pub fn handle(&mut self, ev: PointerEvent) -> Option<TimerCommand> {
        if ev.uses_button() && ev.button != self.config.button {
            trace!("lasso: ignoring {:?} for button {}", ev.kind, ev.button);
            return None;
        }
        match (self.config.mode, ev.kind) {
            (SelectionMode::Drag, PointerKind::DragStart) => self.begin_drag(),
            (SelectionMode::Drag, PointerKind::DragMove) => self.drag_to(ev),
            (SelectionMode::Drag, PointerKind::DragEnd) => {
                if self.state == InteractionState::Dragging {
                    self.state = InteractionState::Idle;
                }
                None
            }
            (SelectionMode::Click, PointerKind::Click) => {
                self.click_at(ev.position);
                None
            }
            (SelectionMode::Click, PointerKind::Move) => {
                if self.state == InteractionState::Open {
                    self.cursor = self.translate(ev.position);
                    self.present_preview();
                }
                None
            }
            (SelectionMode::Click, PointerKind::Leave) => {
                if self.state == InteractionState::Open {
                    self.cursor = None;
                    self.present_preview();
                }
                None
            }
            (SelectionMode::Click, PointerKind::Close) => {
                self.close_polygon();
                None
            }
            (mode, kind) => {
                trace!("lasso: {:?} has no meaning in {:?} mode", kind, mode);
                None
            }
        }
    }

    /// Callback timer elapsed. Returns true if an evaluation pass was run.
    pub fn on_timer(&mut self, token: TimerToken) -> bool {
        if !self.debouncer.fire(token) {
            trace!("lasso: stale timer {:?}", token);
            return false;
        }
        self.run_fan_pass()
    }

    /// Frame-loop alternative to [`Coordinator::on_timer`].
    pub fn poll(&mut self, now_ms: f64) -> bool {
        if !self.debouncer.poll(now_ms) {
            return false;
        }
        self.run_fan_pass()
    }

    fn translate(&self, device: DevicePoint) -> Option<Point> {
        let p = self.transform.to_data(device);
        if p.is_finite() {
            Some(p)
        } else {
            warn!("lasso: dropping non-finite pointer position {:?}", device);
            None
        }
    }

    fn start_session(&mut self, first: Option<Point>) -> u64 {
        let id = self.next_session;
        self.next_session += 1;
        let len = self.dataset.len();
        self.session = Some(match first {
            Some(p) => Session::click(id, len, p),
            None => Session::drag(id, len),
        });
        self.cursor = None;
        self.cap_warned = false;
        debug!("lasso: session {} started", id);
        self.presenter.cleared(id);
        id
    }

    fn at_vertex_cap(&mut self) -> bool {
        let count = self.session.as_ref().map_or(0, Session::vertex_count);
        if count < limits::MAX_LASSO_VERTICES {
            return false;
        }
        if !self.cap_warned {
            warn!("lasso: vertex limit {} reached, ignoring further input", limits::MAX_LASSO_VERTICES);
            self.cap_warned = true;
        }
        true
    }

    fn begin_drag(&mut self) -> Option<TimerCommand> {
        let cancel = self.debouncer.cancel();
        self.start_session(None);
        self.state = InteractionState::Dragging;
        cancel
    }

    fn drag_to(&mut self, ev: PointerEvent) -> Option<TimerCommand> {
        if self.state != InteractionState::Dragging {
            return None;
        }
        let p = self.translate(ev.position)?;
        if self.at_vertex_cap() {
            return None;
        }
        match self.session.as_mut().map(|s| &mut s.path) {
            Some(SessionPath::Drag(path)) => path.add_vertex(p),
            _ => return None,
        }
        self.debouncer.arm(ev.time_ms)
    }

    fn run_fan_pass(&mut self) -> bool {
        let Coordinator {
            session,
            dataset,
            presenter,
            ..
        } = &mut *self;
        let Some(session) = session.as_mut() else {
            return false;
        };
        let id = session.id();
        let SessionPath::Drag(path) = &mut session.path else {
            return false;
        };
        #[cfg(all(feature = "eval_prof", not(target_arch = "wasm32")))]
        let t0 = std::time::Instant::now();
        let Some(pass) = fan::evaluate_path(dataset.points(), path, &mut session.selection) else {
            trace!("lasso: session {} has {} vertices, nothing to evaluate", id, path.len());
            return false;
        };
        #[cfg(all(feature = "eval_prof", not(target_arch = "wasm32")))]
        debug!("lasso: fan pass took {:.3} ms", t0.elapsed().as_secs_f64() * 1000.0);
        debug!(
            "lasso: session {} fan pass triangles={} degenerate={} new={} total={}",
            id,
            pass.triangles,
            pass.degenerate,
            pass.newly_selected.len(),
            session.selection.count()
        );
        let update = SelectionUpdate {
            session: id,
            replaced: false,
            newly_selected: pass.newly_selected,
            total_selected: session.selection.count(),
        };
        presenter.selection_changed(&update, &session.selection);
        presenter.lasso_changed(id, path.checked(), false);
        true
    }

    fn click_at(&mut self, device: DevicePoint) {
        let Some(p) = self.translate(device) else {
            return;
        };
        match self.state {
            InteractionState::Open => {
                if self.at_vertex_cap() {
                    return;
                }
                if let Some(SessionPath::Click(poly)) = self.session.as_mut().map(|s| &mut s.path) {
                    poly.push(p);
                }
            }
            _ => {
                // Idle, or a closed polygon from the previous session.
                self.start_session(Some(p));
                self.state = InteractionState::Open;
            }
        }
        self.present_preview();
    }

    fn present_preview(&mut self) {
        let Some(session) = self.session.as_ref() else {
            return;
        };
        if let SessionPath::Click(poly) = &session.path {
            let outline = poly.preview(self.cursor);
            self.presenter.lasso_changed(session.id(), &outline, poly.is_closed());
        }
    }

    fn close_polygon(&mut self) {
        if self.state != InteractionState::Open {
            return;
        }
        let Coordinator {
            session,
            dataset,
            presenter,
            ..
        } = &mut *self;
        let Some(session) = session.as_mut() else {
            return;
        };
        let id = session.id();
        let SessionPath::Click(poly) = &mut session.path else {
            return;
        };
        poly.close();
        #[cfg(all(feature = "eval_prof", not(target_arch = "wasm32")))]
        let t0 = std::time::Instant::now();
        let (selection, pass) = polygon::evaluate_polygon(dataset.points(), poly.vertices());
        #[cfg(all(feature = "eval_prof", not(target_arch = "wasm32")))]
        debug!("lasso: polygon pass took {:.3} ms", t0.elapsed().as_secs_f64() * 1000.0);
        debug!(
            "lasso: session {} closed with {} vertices, candidates={} selected={}",
            id,
            poly.len(),
            pass.candidates,
            pass.selected
        );
        session.selection = selection;
        let update = SelectionUpdate {
            session: id,
            replaced: true,
            newly_selected: session.selection.indices().collect(),
            total_selected: session.selection.count(),
        };
        presenter.lasso_changed(id, poly.vertices(), true);
        presenter.selection_changed(&update, &session.selection);
        self.cursor = None;
        self.state = InteractionState::Closed;
    }
}
