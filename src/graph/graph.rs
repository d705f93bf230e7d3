//! 图数据结构
//!
//! 顶点和边保存在图内的存储中，对外只暴露 [`VertexId`] / [`EdgeId`] 句柄；
//! 邻接关系由 [`AdjacencyIndex`] 维护。

use super::edge::{Edge, EdgeId};
use super::index::{AdjacencyIndex, Direction};
use super::vertex::{GraphId, Vertex, VertexId};
use crate::config::GraphConfig;
use crate::error::{Error, Result};
use indexmap::IndexSet;
use tracing::{debug, trace};

/// 图
///
/// 有向性在构建时确定且不可更改。每个图有独立的 [`GraphId`]，
/// 因此不实现 `Clone`：克隆会让两张图签发相同的句柄。
#[derive(Debug)]
pub struct Graph<V, E> {
    /// 图标识
    id: GraphId,
    /// 顶点存储（下标即 `VertexId::index`）
    vertices: Vec<Vertex<V>>,
    /// 边存储（下标即 `EdgeId::index`），包含已被覆盖的边
    edges: Vec<Edge<E>>,
    /// 邻接索引
    adjacency: AdjacencyIndex,
}

impl<V, E> Graph<V, E> {
    /// 创建空图
    pub fn new(directed: bool) -> Self {
        Self::with_config(GraphConfig {
            directed,
            ..GraphConfig::default()
        })
    }

    /// 创建空的无向图
    pub fn undirected() -> Self {
        Self::new(false)
    }

    /// 创建空的有向图
    pub fn directed() -> Self {
        Self::new(true)
    }

    /// 按配置创建空图
    pub fn with_config(config: GraphConfig) -> Self {
        let id = GraphId::next();
        debug!(graph = id.as_u64(), directed = config.directed, "创建图");
        Self {
            id,
            vertices: Vec::with_capacity(config.vertex_capacity),
            edges: Vec::with_capacity(config.edge_capacity),
            adjacency: AdjacencyIndex::new(config.directed, config.vertex_capacity),
        }
    }

    /// 获取图标识
    pub fn id(&self) -> GraphId {
        self.id
    }

    /// 是否为有向图
    pub fn is_directed(&self) -> bool {
        self.adjacency.is_directed()
    }

    // ==================== 顶点操作 ====================

    /// 插入顶点
    ///
    /// 不做去重，元素相同的两个顶点也是不同的顶点。
    pub fn insert_vertex(&mut self, element: impl Into<Option<V>>) -> VertexId {
        let id = VertexId::new(self.id, self.vertices.len());
        self.vertices.push(Vertex::new(id, element.into()));
        self.adjacency.add_vertex(id);

        trace!(vertex = %id, "插入顶点");
        id
    }

    /// 获取顶点
    pub fn vertex(&self, id: VertexId) -> Result<&Vertex<V>> {
        if id.graph() != self.id {
            return Err(Error::VertexNotFound(id));
        }
        self.vertices
            .get(id.index())
            .ok_or(Error::VertexNotFound(id))
    }

    /// 顶点是否属于本图
    pub fn contains_vertex(&self, id: VertexId) -> bool {
        self.adjacency.contains(id)
    }

    /// 获取顶点数量
    pub fn vertex_count(&self) -> usize {
        self.adjacency.vertex_count()
    }

    /// 所有顶点的快照（按插入顺序）
    pub fn vertices(&self) -> IndexSet<VertexId> {
        self.adjacency.vertices().collect()
    }

    // ==================== 边操作 ====================

    /// 插入边 (u, v)
    ///
    /// 两个端点都必须是本图的顶点，否则返回 [`Error::VertexNotFound`] 且图保持不变。
    /// 同一顶点对上重复插入时新边覆盖旧边；无向图中 (v, u) 与 (u, v) 是同一个顶点对。
    /// 被覆盖的边仍留在边存储中直到图被释放，反复覆盖同一顶点对会持续占用内存。
    pub fn insert_edge(
        &mut self,
        u: VertexId,
        v: VertexId,
        element: impl Into<Option<E>>,
    ) -> Result<EdgeId> {
        let id = EdgeId::new(self.id, self.edges.len());
        let replaced = self.adjacency.add_edge(u, v, id)?;
        self.edges.push(Edge::new(id, u, v, element.into()));

        if let Some(old) = replaced {
            debug!(edge = %id, replaced = %old, origin = %u, destination = %v, "覆盖已有边");
        }
        trace!(edge = %id, origin = %u, destination = %v, "插入边");
        Ok(id)
    }

    /// 按句柄获取边（包括已被覆盖的边）
    pub fn edge(&self, id: EdgeId) -> Result<&Edge<E>> {
        if id.graph() != self.id {
            return Err(Error::EdgeNotFound(id));
        }
        self.edges.get(id.index()).ok_or(Error::EdgeNotFound(id))
    }

    /// 获取 u -> v 的边
    ///
    /// `u` 不在图中时返回错误；`v` 不是 `u` 的邻居时返回 `Ok(None)`。
    pub fn get_edge(&self, u: VertexId, v: VertexId) -> Result<Option<&Edge<E>>> {
        Ok(self
            .adjacency
            .get(u, v)?
            .and_then(|id| self.edges.get(id.index())))
    }

    /// 获取顶点在指定方向上的关联边（按插入顺序）
    pub fn incident_edges(&self, v: VertexId, direction: Direction) -> Result<IncidentEdges<'_, E>> {
        let neighbors = self.adjacency.neighbors(v, direction)?;
        Ok(IncidentEdges {
            edges: &self.edges,
            slots: neighbors.values(),
        })
    }

    /// 获取顶点在指定方向上的邻居顶点
    pub fn neighbors(
        &self,
        v: VertexId,
        direction: Direction,
    ) -> Result<impl Iterator<Item = VertexId> + '_> {
        Ok(self.adjacency.neighbors(v, direction)?.keys().copied())
    }

    /// 获取顶点的度
    pub fn degree(&self, v: VertexId, direction: Direction) -> Result<usize> {
        self.adjacency.degree(v, direction)
    }

    /// 获取边数量
    pub fn edge_count(&self) -> usize {
        self.adjacency.edge_count()
    }

    /// 所有边的快照（去重，按发现顺序）
    pub fn edges(&self) -> IndexSet<EdgeId> {
        self.adjacency.edge_ids()
    }
}

impl<V, E> Default for Graph<V, E> {
    fn default() -> Self {
        Self::undirected()
    }
}

/// 顶点关联边迭代器
///
/// 由 [`Graph::incident_edges`] 返回，每次调用都会重新生成。
#[derive(Debug)]
pub struct IncidentEdges<'a, E> {
    edges: &'a [Edge<E>],
    slots: indexmap::map::Values<'a, VertexId, EdgeId>,
}

impl<'a, E> Iterator for IncidentEdges<'a, E> {
    type Item = &'a Edge<E>;

    fn next(&mut self) -> Option<Self::Item> {
        let edges = self.edges;
        self.slots.next().map(|id| &edges[id.index()])
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.slots.size_hint()
    }
}

impl<E> ExactSizeIterator for IncidentEdges<'_, E> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn edge_ids<'a, E: 'a>(edges: impl Iterator<Item = &'a Edge<E>>) -> Vec<EdgeId> {
        edges.map(Edge::id).collect()
    }

    #[test]
    fn test_undirected_triangle() {
        let mut graph: Graph<(), ()> = Graph::new(false);
        let v1 = graph.insert_vertex(None);
        let v2 = graph.insert_vertex(None);
        let v3 = graph.insert_vertex(None);

        let e1 = graph.insert_edge(v1, v2, None).unwrap();
        let e2 = graph.insert_edge(v2, v3, None).unwrap();
        let e3 = graph.insert_edge(v3, v1, None).unwrap();

        assert_eq!(graph.edge_count(), 3);
        assert_eq!(graph.vertex_count(), 3);
        assert!(!graph.is_directed());
        assert_eq!(graph.vertices(), IndexSet::from([v1, v2, v3]));
        assert_eq!(graph.edges(), IndexSet::from([e1, e2, e3]));
        assert_eq!(
            edge_ids(graph.incident_edges(v1, Direction::Outgoing).unwrap()),
            vec![e1, e3]
        );
        assert_eq!(graph.degree(v1, Direction::Outgoing), Ok(2));
        assert_eq!(graph.get_edge(v3, v1).unwrap().map(Edge::id), Some(e3));
    }

    #[test]
    fn test_undirected_edge_is_symmetric() {
        let mut graph: Graph<&str, u32> = Graph::undirected();
        let a = graph.insert_vertex("a");
        let b = graph.insert_vertex("b");
        let e = graph.insert_edge(a, b, Some(7)).unwrap();

        assert_eq!(graph.get_edge(a, b).unwrap().map(Edge::id), Some(e));
        assert_eq!(graph.get_edge(b, a).unwrap().map(Edge::id), Some(e));
        assert_eq!(graph.degree(b, Direction::Incoming), Ok(1));
        assert_eq!(
            graph.neighbors(b, Direction::Outgoing).unwrap().collect::<Vec<_>>(),
            vec![a]
        );
        assert_eq!(graph.edge(e).unwrap().element(), Ok(&7));
    }

    #[test]
    fn test_directed_path() {
        let mut graph: Graph<char, ()> = Graph::directed();
        let a = graph.insert_vertex('a');
        let b = graph.insert_vertex('b');
        let c = graph.insert_vertex('c');
        let ab = graph.insert_edge(a, b, None).unwrap();
        let bc = graph.insert_edge(b, c, None).unwrap();

        assert!(graph.is_directed());
        assert_eq!(graph.degree(a, Direction::Outgoing), Ok(1));
        assert_eq!(graph.degree(a, Direction::Incoming), Ok(0));
        assert!(graph.get_edge(b, a).unwrap().is_none());
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(
            edge_ids(graph.incident_edges(b, Direction::Incoming).unwrap()),
            vec![ab]
        );
        assert_eq!(
            edge_ids(graph.incident_edges(b, Direction::Outgoing).unwrap()),
            vec![bc]
        );
        assert_eq!(
            graph.neighbors(c, Direction::Incoming).unwrap().collect::<Vec<_>>(),
            vec![b]
        );
    }

    #[test]
    fn test_foreign_vertex_lookup() {
        let mut graph: Graph<(), ()> = Graph::undirected();
        let mut other: Graph<(), ()> = Graph::undirected();
        graph.insert_vertex(None);
        let foreign = other.insert_vertex(None);

        assert!(!graph.contains_vertex(foreign));
        assert_eq!(
            graph.degree(foreign, Direction::Outgoing),
            Err(Error::VertexNotFound(foreign))
        );
        assert!(matches!(
            graph.get_edge(foreign, foreign),
            Err(Error::VertexNotFound(_))
        ));
        assert!(graph.incident_edges(foreign, Direction::Outgoing).is_err());
        assert!(graph.vertex(foreign).is_err());
    }

    #[test]
    fn test_identically_built_graphs_do_not_share_handles() {
        let mut graph: Graph<&str, ()> = Graph::undirected();
        let mut twin: Graph<&str, ()> = Graph::undirected();
        let own = graph.insert_vertex("graph-only");
        let foreign = twin.insert_vertex("twin-only");

        assert_eq!(own.index(), foreign.index());
        assert_ne!(own, foreign);
        assert!(!graph.contains_vertex(foreign));
        assert_eq!(
            graph.degree(foreign, Direction::Outgoing),
            Err(Error::VertexNotFound(foreign))
        );
        assert_eq!(
            graph.insert_edge(own, foreign, None),
            Err(Error::VertexNotFound(foreign))
        );
        assert!(matches!(
            graph.vertex(foreign),
            Err(Error::VertexNotFound(_))
        ));
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_insert_edge_with_foreign_vertex_leaves_graph_unchanged() {
        let mut graph: Graph<(), ()> = Graph::directed();
        let mut other: Graph<(), ()> = Graph::directed();
        let u = graph.insert_vertex(None);
        let foreign = other.insert_vertex(None);

        assert_eq!(
            graph.insert_edge(u, foreign, None),
            Err(Error::VertexNotFound(foreign))
        );
        assert_eq!(
            graph.insert_edge(foreign, u, None),
            Err(Error::VertexNotFound(foreign))
        );
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.degree(u, Direction::Outgoing), Ok(0));
        assert_eq!(graph.degree(u, Direction::Incoming), Ok(0));
    }

    #[test]
    fn test_get_edge_unknown_destination_is_none() {
        let mut graph: Graph<(), ()> = Graph::undirected();
        let mut other: Graph<(), ()> = Graph::undirected();
        let u = graph.insert_vertex(None);
        let foreign = other.insert_vertex(None);

        assert!(graph.get_edge(u, foreign).unwrap().is_none());
    }

    #[test]
    fn test_reinsert_overwrites_slot() {
        let mut graph: Graph<(), &str> = Graph::directed();
        let u = graph.insert_vertex(None);
        let v = graph.insert_vertex(None);
        let w = graph.insert_vertex(None);
        let first = graph.insert_edge(u, v, "first").unwrap();
        let uw = graph.insert_edge(u, w, "uw").unwrap();
        let second = graph.insert_edge(u, v, "second").unwrap();

        assert_ne!(first, second);
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(
            graph.get_edge(u, v).unwrap().map(|e| e.element()),
            Some(Ok(&"second"))
        );
        // 覆盖保留原位置
        assert_eq!(
            edge_ids(graph.incident_edges(u, Direction::Outgoing).unwrap()),
            vec![second, uw]
        );
        assert!(!graph.edges().contains(&first));
        assert_eq!(graph.edge(first).unwrap().element(), Ok(&"first"));
    }

    #[test]
    fn test_undirected_reverse_reinsert_overwrites() {
        let mut graph: Graph<(), ()> = Graph::undirected();
        let u = graph.insert_vertex(None);
        let v = graph.insert_vertex(None);
        graph.insert_edge(u, v, None).unwrap();
        let reversed = graph.insert_edge(v, u, None).unwrap();

        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.edges(), IndexSet::from([reversed]));
        assert_eq!(graph.get_edge(u, v).unwrap().map(Edge::id), Some(reversed));
    }

    #[test]
    fn test_undirected_self_loop() {
        let mut graph: Graph<(), ()> = Graph::undirected();
        let u = graph.insert_vertex(None);
        let v = graph.insert_vertex(None);
        let lp = graph.insert_edge(u, u, None).unwrap();
        graph.insert_edge(u, v, None).unwrap();

        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.edges().len(), graph.edge_count());
        assert_eq!(graph.degree(u, Direction::Outgoing), Ok(2));
        assert_eq!(graph.edge(lp).unwrap().opposite(u), Ok(u));
    }

    #[test]
    fn test_elements() {
        let mut graph: Graph<String, f64> = Graph::default();
        let a = graph.insert_vertex("a".to_string());
        let b = graph.insert_vertex(None);
        let e = graph.insert_edge(a, b, None).unwrap();

        assert_eq!(graph.vertex(a).unwrap().element().map(String::as_str), Ok("a"));
        assert!(matches!(
            graph.vertex(b).unwrap().element(),
            Err(Error::ElementNotSet(_))
        ));
        assert!(matches!(
            graph.edge(e).unwrap().element(),
            Err(Error::ElementNotSet(_))
        ));
    }

    #[test]
    fn test_vertices_with_equal_elements_are_distinct() {
        let mut graph: Graph<u8, ()> = Graph::undirected();
        let a = graph.insert_vertex(Some(1));
        let b = graph.insert_vertex(Some(1));

        assert_ne!(a, b);
        assert_eq!(graph.vertex_count(), 2);
    }

    #[test]
    fn test_incident_edges_is_restartable() {
        let mut graph: Graph<(), ()> = Graph::undirected();
        let hub = graph.insert_vertex(None);
        for _ in 0..4 {
            let leaf = graph.insert_vertex(None);
            graph.insert_edge(hub, leaf, None).unwrap();
        }

        let first = graph.incident_edges(hub, Direction::Outgoing).unwrap();
        assert_eq!(first.len(), 4);
        let once = edge_ids(first);
        let again = edge_ids(graph.incident_edges(hub, Direction::Outgoing).unwrap());
        assert_eq!(once, again);
    }

    #[test]
    fn test_unknown_edge_handle() {
        let graph: Graph<(), ()> = Graph::undirected();
        let mut other: Graph<(), ()> = Graph::undirected();
        let u = other.insert_vertex(None);
        let e = other.insert_edge(u, u, None).unwrap();

        assert_eq!(graph.edge(e).err(), Some(Error::EdgeNotFound(e)));
    }

    #[test]
    fn test_with_config() {
        let graph: Graph<(), ()> =
            Graph::with_config(GraphConfig::new().directed().with_vertex_capacity(8));

        assert!(graph.is_directed());
        assert_eq!(graph.vertex_count(), 0);
        assert_eq!(graph.edge_count(), 0);
    }
}
