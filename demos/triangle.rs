//! adjgraph 演示脚本
//!
//! 构建一个无向三角形和一条有向路径，并打印查询结果。
//! 日志级别由 RUST_LOG 控制，例如 `RUST_LOG=adjgraph=trace`。

use adjgraph::{Direction, Graph};
use anyhow::{ensure, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("adjgraph 演示");
    println!("=============\n");

    // 无向三角形
    println!("1. 无向三角形");
    let mut g: Graph<&str, u32> = Graph::undirected();
    let v1 = g.insert_vertex("v1");
    let v2 = g.insert_vertex("v2");
    let v3 = g.insert_vertex("v3");

    let e1 = g.insert_edge(v1, v2, Some(12))?;
    let e2 = g.insert_edge(v2, v3, Some(23))?;
    let e3 = g.insert_edge(v3, v1, Some(31))?;

    ensure!(g.edge_count() == 3, "边数应为 3");
    ensure!(g.vertex_count() == 3, "顶点数应为 3");
    ensure!(!g.is_directed(), "应为无向图");
    ensure!(g.edges().len() == 3 && [e1, e2, e3].iter().all(|e| g.edges().contains(e)));

    let incident: Vec<_> = g
        .incident_edges(v1, Direction::Outgoing)?
        .map(|e| e.id())
        .collect();
    ensure!(incident == vec![e1, e3], "v1 的关联边顺序错误");
    ensure!(g.degree(v1, Direction::Outgoing)? == 2);
    ensure!(g.get_edge(v3, v1)?.map(|e| e.id()) == Some(e3));

    for id in g.vertices() {
        let vertex = g.vertex(id)?;
        println!(
            "   {} 度 {}",
            vertex.element()?,
            g.degree(id, Direction::Outgoing)?
        );
    }
    info!(vertices = g.vertex_count(), edges = g.edge_count(), "三角形构建完成");

    // 有向路径
    println!("\n2. 有向路径 a -> b -> c");
    let mut d: Graph<char, ()> = Graph::directed();
    let a = d.insert_vertex('a');
    let b = d.insert_vertex('b');
    let c = d.insert_vertex('c');
    d.insert_edge(a, b, None)?;
    d.insert_edge(b, c, None)?;

    ensure!(d.degree(a, Direction::Outgoing)? == 1);
    ensure!(d.degree(a, Direction::Incoming)? == 0);
    ensure!(d.get_edge(b, a)?.is_none());

    for id in d.vertices() {
        println!(
            "   {}: 出度 {}, 入度 {}",
            d.vertex(id)?.element()?,
            d.degree(id, Direction::Outgoing)?,
            d.degree(id, Direction::Incoming)?
        );
    }

    // 外来顶点
    println!("\n3. 外来顶点查询");
    match d.degree(v1, Direction::Outgoing) {
        Ok(_) => anyhow::bail!("外来顶点不应被接受"),
        Err(e) => println!("   {}", e),
    }

    println!("\n演示完成!");
    Ok(())
}
