use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{AlgoError, Result};

/// 带权边，无权图的边权为 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub from: usize,
    pub to: usize,
    pub weight: i64,
}

impl Edge {
    pub fn new(from: usize, to: usize, weight: i64) -> Self {
        Edge { from, to, weight }
    }

    pub fn unweighted(from: usize, to: usize) -> Self {
        Edge::new(from, to, 1)
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{} ({})", self.from, self.to, self.weight)
    }
}

/// 解析 `0-1`（权重 1）或 `0-1:4`
impl FromStr for Edge {
    type Err = AlgoError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || AlgoError::InvalidInput(format!("cannot parse edge '{}'", s));

        let (nodes, weight) = match s.trim().split_once(':') {
            Some((nodes, weight)) => (nodes, weight.trim().parse().map_err(|_| invalid())?),
            None => (s.trim(), 1),
        };
        let (from, to) = nodes.split_once('-').ok_or_else(invalid)?;
        let from = from.trim().parse().map_err(|_| invalid())?;
        let to = to.trim().parse().map_err(|_| invalid())?;
        Ok(Edge::new(from, to, weight))
    }
}

/// 节点编号为 0..node_count 的图
///
/// 邻接表按加边顺序保存，遍历时邻居的先后与边列表一致。
/// 无向图的每条边在两个端点的邻接表中各出现一次，自环只出现一次。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    node_count: usize,
    directed: bool,
    edges: Vec<Edge>,
    adjacency: Vec<Vec<(usize, i64)>>,
}

impl Graph {
    pub fn new(node_count: usize, directed: bool) -> Self {
        Graph {
            node_count,
            directed,
            edges: Vec::new(),
            adjacency: vec![Vec::new(); node_count],
        }
    }

    pub fn undirected(node_count: usize) -> Self {
        Self::new(node_count, false)
    }

    pub fn directed(node_count: usize) -> Self {
        Self::new(node_count, true)
    }

    /// 从边列表构建，任一端点越界时返回 `NodeOutOfRange`
    pub fn from_edges<I>(node_count: usize, directed: bool, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = Edge>,
    {
        let mut graph = Graph::new(node_count, directed);
        for edge in edges {
            graph.add_edge(edge)?;
        }
        Ok(graph)
    }

    pub fn add_edge(&mut self, edge: Edge) -> Result<()> {
        self.check_node(edge.from)?;
        self.check_node(edge.to)?;

        self.adjacency[edge.from].push((edge.to, edge.weight));
        if !self.directed && edge.from != edge.to {
            self.adjacency[edge.to].push((edge.from, edge.weight));
        }
        self.edges.push(edge);
        Ok(())
    }

    pub fn node_count(&self) -> usize {
        self.node_count
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// 邻居及对应边权，顺序与加边顺序一致
    pub fn neighbors(&self, node: usize) -> &[(usize, i64)] {
        self.adjacency.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn check_node(&self, node: usize) -> Result<()> {
        if node >= self.node_count {
            return Err(AlgoError::NodeOutOfRange {
                node,
                node_count: self.node_count,
            });
        }
        Ok(())
    }
}

/// 沿前驱数组从 target 回溯到 source
///
/// target 不可达时返回 None；source 到自身的路径只有它自己。
pub(crate) fn trace_path(
    previous: &[Option<usize>],
    source: usize,
    target: usize,
) -> Option<Vec<usize>> {
    if target >= previous.len() {
        return None;
    }

    let mut path = vec![target];
    let mut current = target;
    while current != source {
        current = previous[current]?;
        path.push(current);
        // 前驱链上不会出现比节点总数更多的节点
        if path.len() > previous.len() {
            return None;
        }
    }
    path.reverse();
    Some(path)
}
