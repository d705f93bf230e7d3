//! 顶点定义
//!
//! 顶点只持有一个可选元素，邻接关系由 [`Graph`](super::Graph) 维护

use crate::error::{Error, Result};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_GRAPH_ID: AtomicU64 = AtomicU64::new(1);

/// 图实例标识（进程内唯一）
///
/// 每个句柄都带有签发它的图的标识，其他图的句柄永远不会命中本图的映射。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GraphId(u64);

impl GraphId {
    pub(crate) fn next() -> Self {
        Self(NEXT_GRAPH_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

/// 顶点 ID（图内唯一的句柄）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId {
    graph: GraphId,
    index: usize,
}

impl VertexId {
    pub(crate) fn new(graph: GraphId, index: usize) -> Self {
        Self { graph, index }
    }

    /// 签发该句柄的图
    pub fn graph(&self) -> GraphId {
        self.graph
    }

    /// 在顶点存储中的下标
    pub fn index(&self) -> usize {
        self.index
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}@g{}", self.index, self.graph.0)
    }
}

/// 顶点
#[derive(Debug, Clone)]
pub struct Vertex<V> {
    /// 顶点 ID
    id: VertexId,
    /// 元素
    element: Option<V>,
}

impl<V> Vertex<V> {
    /// 创建新顶点
    pub(crate) fn new(id: VertexId, element: Option<V>) -> Self {
        Self { id, element }
    }

    /// 获取顶点 ID
    pub fn id(&self) -> VertexId {
        self.id
    }

    /// 获取元素
    pub fn element(&self) -> Result<&V> {
        self.element
            .as_ref()
            .ok_or_else(|| Error::ElementNotSet(format!("顶点 {}", self.id)))
    }

    pub fn has_element(&self) -> bool {
        self.element.is_some()
    }
}
