//! 图构建配置

/// 图配置
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GraphConfig {
    /// 是否为有向图（构建后不可更改）
    pub directed: bool,
    /// 预分配的顶点容量
    pub vertex_capacity: usize,
    /// 预分配的边容量
    pub edge_capacity: usize,
}

impl GraphConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// 设为有向图
    pub fn directed(mut self) -> Self {
        self.directed = true;
        self
    }

    pub fn with_vertex_capacity(mut self, capacity: usize) -> Self {
        self.vertex_capacity = capacity;
        self
    }

    pub fn with_edge_capacity(mut self, capacity: usize) -> Self {
        self.edge_capacity = capacity;
        self
    }
}
