//! The mutable graph model and its derived views.

mod model;
mod options;
mod types;
mod views;

pub use model::{DEFAULT_WEIGHT, Graph};
pub use options::GraphOptions;
pub use types::{Edge, Vertex, normalize_id};
pub use views::{EdgeRow, GraphData, GraphLink, GraphNode, Representations};
