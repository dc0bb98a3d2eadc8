//! Interactive relationship graph of a document and its neighbours.

mod adapter;
pub mod camera;
mod component;
mod engine;
pub mod geometry;
pub mod interaction;
mod layout;
mod render;
mod style;
mod surface;
mod types;

pub use adapter::{DocRecord, RelationBundle, build_graph};
pub use component::{GraphCanvas, RelationGraph};
pub use engine::{GraphEngine, ViewSnapshot};
pub use layout::compute_positions;
pub use render::{Frame, render};
pub use surface::{CanvasSurface, Surface};
pub use types::{
	ContentType, EdgeType, GraphData, GraphDisplay, GraphEdge, GraphLoad, GraphNode,
	NavigationIntent, NodeGroup, PositionMap,
};
