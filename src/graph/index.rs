//! 邻接索引
//!
//! `outgoing[v]` / `incoming[v]` 记录 邻居顶点 -> 边 的映射，均保持插入顺序。
//! 无向图只维护一份映射，入边视图与出边视图是同一份数据。

use crate::error::{Error, Result};
use crate::graph::edge::EdgeId;
use crate::graph::vertex::VertexId;
use indexmap::{IndexMap, IndexSet};

/// 单个顶点的邻居映射：邻居顶点 -> 边
pub type Neighbors = IndexMap<VertexId, EdgeId>;

type AdjacencyMap = IndexMap<VertexId, Neighbors>;

/// 邻接方向
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    /// 出边
    #[default]
    Outgoing,
    /// 入边
    Incoming,
}

/// 邻接索引
#[derive(Debug)]
pub struct AdjacencyIndex {
    /// 顶点到出边邻居的映射
    outgoing: AdjacencyMap,
    /// 顶点到入边邻居的映射，`None` 表示无向图（入边即出边）
    incoming: Option<AdjacencyMap>,
}

impl AdjacencyIndex {
    /// 创建新索引
    pub fn new(directed: bool, vertex_capacity: usize) -> Self {
        Self {
            outgoing: IndexMap::with_capacity(vertex_capacity),
            incoming: directed.then(|| IndexMap::with_capacity(vertex_capacity)),
        }
    }

    /// 是否存在独立的入边映射
    pub fn is_directed(&self) -> bool {
        self.incoming.is_some()
    }

    /// 注册顶点（空邻居映射）
    pub fn add_vertex(&mut self, vertex_id: VertexId) {
        self.outgoing.insert(vertex_id, Neighbors::new());
        if let Some(incoming) = self.incoming.as_mut() {
            incoming.insert(vertex_id, Neighbors::new());
        }
    }

    pub fn contains(&self, vertex_id: VertexId) -> bool {
        self.outgoing.contains_key(&vertex_id)
    }

    /// 写入边 (src, dst)，返回被覆盖的旧边
    ///
    /// 先校验两个端点，任一不存在时不做任何修改。
    pub fn add_edge(
        &mut self,
        src: VertexId,
        dst: VertexId,
        edge_id: EdgeId,
    ) -> Result<Option<EdgeId>> {
        for vertex_id in [src, dst] {
            if !self.contains(vertex_id) {
                return Err(Error::VertexNotFound(vertex_id));
            }
        }

        // 入边索引（无向图中就是出边映射本身）
        let incoming = match self.incoming.as_mut() {
            Some(incoming) => incoming,
            None => &mut self.outgoing,
        };
        if let Some(neighbors) = incoming.get_mut(&dst) {
            neighbors.insert(src, edge_id);
        }

        // 出边索引
        let replaced = self
            .outgoing
            .get_mut(&src)
            .and_then(|neighbors| neighbors.insert(dst, edge_id));

        Ok(replaced)
    }

    /// 获取顶点在指定方向上的邻居映射
    pub fn neighbors(&self, vertex_id: VertexId, direction: Direction) -> Result<&Neighbors> {
        self.map(direction)
            .get(&vertex_id)
            .ok_or(Error::VertexNotFound(vertex_id))
    }

    /// 获取 src -> dst 的边
    pub fn get(&self, src: VertexId, dst: VertexId) -> Result<Option<EdgeId>> {
        Ok(self
            .neighbors(src, Direction::Outgoing)?
            .get(&dst)
            .copied())
    }

    /// 获取顶点的度
    pub fn degree(&self, vertex_id: VertexId, direction: Direction) -> Result<usize> {
        Ok(self.neighbors(vertex_id, direction)?.len())
    }

    /// 获取顶点数量
    pub fn vertex_count(&self) -> usize {
        self.outgoing.len()
    }

    /// 获取边数量
    ///
    /// 无向图中每条边在两个端点处各登记一次，自环只登记一次，
    /// 因此自环先补计一次再整体减半。
    pub fn edge_count(&self) -> usize {
        let total: usize = self.outgoing.values().map(|n| n.len()).sum();
        if self.is_directed() {
            return total;
        }
        let loops = self
            .outgoing
            .iter()
            .filter(|(vertex_id, neighbors)| neighbors.contains_key(*vertex_id))
            .count();
        (total + loops) / 2
    }

    /// 按注册顺序遍历顶点
    pub fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.outgoing.keys().copied()
    }

    /// 所有可达的边（去重）
    pub fn edge_ids(&self) -> IndexSet<EdgeId> {
        self.outgoing
            .values()
            .flat_map(|neighbors| neighbors.values().copied())
            .collect()
    }

    fn map(&self, direction: Direction) -> &AdjacencyMap {
        match (direction, self.incoming.as_ref()) {
            (Direction::Incoming, Some(incoming)) => incoming,
            _ => &self.outgoing,
        }
    }
}
