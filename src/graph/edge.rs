//! 边定义
//!
//! 边连接两个顶点，起点/终点顺序在创建时确定。无向图中该顺序只是插入时的参数顺序。

use crate::error::{Error, Result};
use crate::graph::vertex::{GraphId, VertexId};
use std::fmt;

/// 边 ID（图内唯一的句柄）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeId {
    graph: GraphId,
    index: usize,
}

impl EdgeId {
    pub(crate) fn new(graph: GraphId, index: usize) -> Self {
        Self { graph, index }
    }

    /// 签发该句柄的图
    pub fn graph(&self) -> GraphId {
        self.graph
    }

    /// 在边存储中的下标
    pub fn index(&self) -> usize {
        self.index
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}@g{}", self.index, self.graph.as_u64())
    }
}

/// 边
#[derive(Debug, Clone)]
pub struct Edge<E> {
    /// 边 ID
    id: EdgeId,
    /// 起点
    origin: VertexId,
    /// 终点
    destination: VertexId,
    /// 元素
    element: Option<E>,
}

impl<E> Edge<E> {
    /// 创建新边
    pub(crate) fn new(
        id: EdgeId,
        origin: VertexId,
        destination: VertexId,
        element: Option<E>,
    ) -> Self {
        Self {
            id,
            origin,
            destination,
            element,
        }
    }

    /// 获取边 ID
    pub fn id(&self) -> EdgeId {
        self.id
    }

    /// 获取起点
    pub fn origin(&self) -> VertexId {
        self.origin
    }

    /// 获取终点
    pub fn destination(&self) -> VertexId {
        self.destination
    }

    /// 按创建顺序返回 (起点, 终点)
    pub fn endpoints(&self) -> (VertexId, VertexId) {
        (self.origin, self.destination)
    }

    /// 返回 `v` 在这条边另一端的顶点
    ///
    /// 自环边对其唯一端点返回自身。`v` 不是端点时返回 [`Error::InvalidEndpoint`]。
    pub fn opposite(&self, v: VertexId) -> Result<VertexId> {
        if v == self.origin {
            Ok(self.destination)
        } else if v == self.destination {
            Ok(self.origin)
        } else {
            Err(Error::InvalidEndpoint {
                edge: self.id,
                vertex: v,
            })
        }
    }

    /// `v` 是否为该边的端点
    pub fn is_incident(&self, v: VertexId) -> bool {
        v == self.origin || v == self.destination
    }

    pub fn is_loop(&self) -> bool {
        self.origin == self.destination
    }

    /// 获取元素
    pub fn element(&self) -> Result<&E> {
        self.element
            .as_ref()
            .ok_or_else(|| Error::ElementNotSet(format!("边 {}", self.id)))
    }
}
