pub mod model;
pub mod geometry {
    pub mod bbox;
    pub mod crossing;
    pub mod triangle;
}
pub mod algorithms {
    pub mod fan;
    pub mod polygon;
}
pub mod config;
pub mod coordinator;
pub mod dataset;
pub mod debounce;
pub mod error;
pub mod limits;
pub mod path;
pub mod selection;
pub mod session;
pub mod table;
pub mod transform;
mod json;

pub use config::LassoConfig;
pub use coordinator::{Coordinator, InteractionState, NullPresenter, PointerEvent, PointerKind, Presenter};
pub use dataset::Dataset;
pub use debounce::{TimerCommand, TimerToken};
pub use error::LassoError;
pub use geometry::crossing::point_in_polygon;
pub use geometry::triangle::point_in_triangle;
pub use model::{DevicePoint, Point, SelectionMode};
pub use selection::{Selection, SelectionUpdate};
pub use table::SelectionTable;
pub use transform::{AxisTransform, CoordinateTransform, Identity};
