//! 并发共享的图
//!
//! 整个图由一把读写锁保护。一次插入边的两处邻接写入在同一次写锁内完成，
//! 读者不会看到只登记在一个端点上的边。

use super::edge::EdgeId;
use super::graph::Graph;
use super::index::Direction;
use super::vertex::VertexId;
use crate::error::Result;
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::sync::Arc;

/// 可跨线程共享的图句柄
pub struct SharedGraph<V, E> {
    inner: Arc<RwLock<Graph<V, E>>>,
}

impl<V, E> SharedGraph<V, E> {
    /// 创建空图
    pub fn new(directed: bool) -> Self {
        Self::from(Graph::new(directed))
    }

    /// 获取读锁，用于批量查询
    pub fn read(&self) -> RwLockReadGuard<'_, Graph<V, E>> {
        self.inner.read()
    }

    /// 获取写锁，用于批量修改
    pub fn write(&self) -> RwLockWriteGuard<'_, Graph<V, E>> {
        self.inner.write()
    }

    /// 插入顶点
    pub fn insert_vertex(&self, element: impl Into<Option<V>>) -> VertexId {
        self.inner.write().insert_vertex(element)
    }

    /// 插入边
    pub fn insert_edge(
        &self,
        u: VertexId,
        v: VertexId,
        element: impl Into<Option<E>>,
    ) -> Result<EdgeId> {
        self.inner.write().insert_edge(u, v, element)
    }

    pub fn is_directed(&self) -> bool {
        self.inner.read().is_directed()
    }

    pub fn vertex_count(&self) -> usize {
        self.inner.read().vertex_count()
    }

    pub fn edge_count(&self) -> usize {
        self.inner.read().edge_count()
    }

    pub fn degree(&self, v: VertexId, direction: Direction) -> Result<usize> {
        self.inner.read().degree(v, direction)
    }

    /// 取回内部的图（仅当这是最后一个句柄时）
    pub fn into_inner(self) -> Option<Graph<V, E>> {
        Arc::try_unwrap(self.inner).ok().map(|lock| lock.into_inner())
    }
}

impl<V, E> Clone for SharedGraph<V, E> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<V, E> From<Graph<V, E>> for SharedGraph<V, E> {
    fn from(graph: Graph<V, E>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(graph)),
        }
    }
}
