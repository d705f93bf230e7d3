//! adjgraph - 基于邻接映射的内存图
//!
//! 提供有向图与无向图两种模式：
//! - 顶点、边插入，元素可选
//! - 邻接查询（关联边、邻居、两点间的边）
//! - 度与规模统计
//!
//! 顶点和边通过 [`VertexId`] / [`EdgeId`] 句柄访问，句柄只在签发它的图中有效。

pub mod config;
pub mod error;
pub mod graph;

// 重导出常用类型
pub use config::GraphConfig;
pub use error::{Error, Result};
pub use graph::{Direction, Edge, EdgeId, Graph, SharedGraph, Vertex, VertexId};

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
