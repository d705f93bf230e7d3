//! 图核心模块
//!
//! 定义顶点、边、邻接索引和图的核心数据结构

mod edge;
mod graph;
mod index;
mod shared;
mod vertex;

pub use edge::{Edge, EdgeId};
pub use graph::{Graph, IncidentEdges};
pub use index::Direction;
pub use shared::SharedGraph;
pub use vertex::{GraphId, Vertex, VertexId};
