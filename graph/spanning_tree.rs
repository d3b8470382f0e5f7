use std::cmp::Reverse;
use std::collections::BinaryHeap;

use serde::Serialize;

use super::model::{Edge, Graph};
use crate::error::{AlgoError, Result};
use crate::observer::{GraphAction, GraphObserver, NoopObserver};

/// 并查集：按秩合并加路径压缩
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<u8>,
    sets: usize,
}

impl UnionFind {
    pub fn new(size: usize) -> Self {
        UnionFind {
            parent: (0..size).collect(),
            rank: vec![0; size],
            sets: size,
        }
    }

    /// 查找代表元，并把路径上的节点直接挂到代表元下
    pub fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut current = x;
        while self.parent[current] != root {
            let next = self.parent[current];
            self.parent[current] = root;
            current = next;
        }
        root
    }

    /// 合并两个集合，已在同一集合时返回 false
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        let (ra, rb) = (self.find(a), self.find(b));
        if ra == rb {
            return false;
        }

        match self.rank[ra].cmp(&self.rank[rb]) {
            std::cmp::Ordering::Less => self.parent[ra] = rb,
            std::cmp::Ordering::Greater => self.parent[rb] = ra,
            std::cmp::Ordering::Equal => {
                self.parent[rb] = ra;
                self.rank[ra] += 1;
            }
        }
        self.sets -= 1;
        true
    }

    pub fn connected(&mut self, a: usize, b: usize) -> bool {
        self.find(a) == self.find(b)
    }

    /// 当前不相交集合的个数
    pub fn sets(&self) -> usize {
        self.sets
    }
}

/// 最小生成树（图不连通时是生成森林）
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpanningTree {
    pub edges: Vec<Edge>,
    pub total_weight: i64,
}

impl SpanningTree {
    fn from_edges(edges: Vec<Edge>) -> Self {
        let total_weight = edges.iter().map(|e| e.weight).sum();
        SpanningTree {
            edges,
            total_weight,
        }
    }

    /// 是否连通了全部 node_count 个节点
    pub fn is_spanning(&self, node_count: usize) -> bool {
        node_count == 0 || self.edges.len() + 1 == node_count
    }
}

fn ensure_undirected(graph: &Graph) -> Result<()> {
    if graph.is_directed() {
        return Err(AlgoError::DirectedGraph);
    }
    Ok(())
}

// ============================================================================
// Kruskal
// ============================================================================

pub fn kruskal(graph: &Graph) -> Result<SpanningTree> {
    kruskal_observed(graph, &mut NoopObserver)
}

/// Kruskal 算法（带观察者）
///
/// 边按权重稳定排序，等权边保持输入顺序。选够 n - 1 条边后提前结束。
pub fn kruskal_observed<O: GraphObserver>(
    graph: &Graph,
    observer: &mut O,
) -> Result<SpanningTree> {
    ensure_undirected(graph)?;

    let target = graph.node_count().saturating_sub(1);
    let mut sorted = graph.edges().to_vec();
    sorted.sort_by_key(|e| e.weight);

    let mut sets = UnionFind::new(graph.node_count());
    let mut chosen = Vec::with_capacity(target);
    for edge in sorted {
        if chosen.len() == target {
            break;
        }
        let Edge { from, to, weight } = edge;
        if sets.union(from, to) {
            observer.on_step(GraphAction::EdgeAccepted { from, to, weight });
            chosen.push(edge);
        } else {
            observer.on_step(GraphAction::EdgeRejected { from, to, weight });
        }
    }

    tracing::debug!(
        edges = chosen.len(),
        components = sets.sets(),
        "kruskal finished"
    );
    Ok(SpanningTree::from_edges(chosen))
}

// ============================================================================
// Prim
// ============================================================================

pub fn prim(graph: &Graph, source: usize) -> Result<SpanningTree> {
    prim_observed(graph, source, &mut NoopObserver)
}

/// Prim 算法（带观察者）
///
/// 从 source 出发，每次取连接树内外的最轻边。堆里过期的边出堆时记为拒绝。
/// 只覆盖 source 所在的连通分量。
pub fn prim_observed<O: GraphObserver>(
    graph: &Graph,
    source: usize,
    observer: &mut O,
) -> Result<SpanningTree> {
    ensure_undirected(graph)?;
    graph.check_node(source)?;

    let mut in_tree = vec![false; graph.node_count()];
    let mut heap = EdgeHeap::new();
    let mut chosen = Vec::new();

    grow(graph, source, &mut in_tree, &mut heap, observer);

    while let Some(Reverse((weight, to, from))) = heap.pop() {
        if in_tree[to] {
            observer.on_step(GraphAction::EdgeRejected { from, to, weight });
            continue;
        }
        observer.on_step(GraphAction::EdgeAccepted { from, to, weight });
        chosen.push(Edge::new(from, to, weight));
        grow(graph, to, &mut in_tree, &mut heap, observer);
    }

    tracing::debug!(source, edges = chosen.len(), "prim finished");
    Ok(SpanningTree::from_edges(chosen))
}

type EdgeHeap = BinaryHeap<Reverse<(i64, usize, usize)>>;

/// 把 node 并入树，并把它通向树外的边压入堆
fn grow<O: GraphObserver>(
    graph: &Graph,
    node: usize,
    in_tree: &mut [bool],
    heap: &mut EdgeHeap,
    observer: &mut O,
) {
    in_tree[node] = true;
    observer.on_step(GraphAction::Visit { node });
    for &(neighbor, weight) in graph.neighbors(node) {
        if !in_tree[neighbor] {
            heap.push(Reverse((weight, neighbor, node)));
        }
    }
}
