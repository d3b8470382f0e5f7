use std::cmp::Reverse;
use std::collections::BinaryHeap;

use serde::Serialize;

use super::model::{trace_path, Graph};
use crate::error::{AlgoError, Result};
use crate::observer::{GraphAction, GraphObserver, NoopObserver};

// ============================================================================
// Dijkstra 单源最短路径
// ============================================================================

/// 单源最短路径，不可达节点的距离为 None
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortestPaths {
    pub source: usize,
    pub distance: Vec<Option<i64>>,
    pub previous: Vec<Option<usize>>,
}

impl ShortestPaths {
    pub fn distance_to(&self, target: usize) -> Option<i64> {
        self.distance.get(target).copied().flatten()
    }

    pub fn path_to(&self, target: usize) -> Option<Vec<usize>> {
        trace_path(&self.previous, self.source, target)
    }
}

pub fn dijkstra(graph: &Graph, source: usize) -> Result<ShortestPaths> {
    dijkstra_observed(graph, source, &mut NoopObserver)
}

/// Dijkstra 算法（带观察者）
///
/// 二叉堆配合惰性删除：同一节点可能多次入堆，出堆时已确定的直接跳过。
/// 存在负权边时返回 `NegativeWeight`。
pub fn dijkstra_observed<O: GraphObserver>(
    graph: &Graph,
    source: usize,
    observer: &mut O,
) -> Result<ShortestPaths> {
    graph.check_node(source)?;
    if let Some(edge) = graph.edges().iter().find(|e| e.weight < 0) {
        return Err(AlgoError::NegativeWeight {
            from: edge.from,
            to: edge.to,
            weight: edge.weight,
        });
    }

    let n = graph.node_count();
    let mut distance = vec![None; n];
    let mut previous = vec![None; n];
    let mut settled = vec![false; n];
    let mut heap = BinaryHeap::new();

    distance[source] = Some(0);
    heap.push(Reverse((0i64, source)));

    while let Some(Reverse((dist, node))) = heap.pop() {
        if settled[node] {
            continue;
        }
        settled[node] = true;
        observer.on_step(GraphAction::Visit { node });

        for &(neighbor, weight) in graph.neighbors(node) {
            if settled[neighbor] {
                continue;
            }
            let candidate = dist.saturating_add(weight);
            let improved = distance[neighbor].map_or(true, |d| candidate < d);
            observer.on_step(GraphAction::Relax {
                from: node,
                to: neighbor,
                distance: candidate,
                improved,
            });
            if improved {
                distance[neighbor] = Some(candidate);
                previous[neighbor] = Some(node);
                heap.push(Reverse((candidate, neighbor)));
            }
        }
    }

    tracing::debug!(
        source,
        reached = settled.iter().filter(|&&s| s).count(),
        "dijkstra finished"
    );
    Ok(ShortestPaths {
        source,
        distance,
        previous,
    })
}

// ============================================================================
// Floyd-Warshall 全源最短路径
// ============================================================================

/// 全源最短路径矩阵
///
/// `next[i][j]` 是从 i 到 j 的最短路径上 i 之后的第一个节点。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AllPairsPaths {
    pub distance: Vec<Vec<Option<i64>>>,
    pub next: Vec<Vec<Option<usize>>>,
}

impl AllPairsPaths {
    pub fn distance(&self, from: usize, to: usize) -> Option<i64> {
        self.distance.get(from)?.get(to).copied().flatten()
    }

    pub fn path(&self, from: usize, to: usize) -> Option<Vec<usize>> {
        let mut current = from;
        let mut path = vec![from];
        while current != to {
            current = (*self.next.get(current)?.get(to)?)?;
            path.push(current);
            if path.len() > self.next.len() {
                return None;
            }
        }
        Some(path)
    }
}

pub fn floyd_warshall(graph: &Graph) -> Result<AllPairsPaths> {
    floyd_warshall_observed(graph, &mut NoopObserver)
}

/// Floyd-Warshall 算法（带观察者）
///
/// 允许负权边；平行边只保留最小权重。对角线出现负值时返回 `NegativeCycle`。
/// 无向图的负权边本身就构成负环。
pub fn floyd_warshall_observed<O: GraphObserver>(
    graph: &Graph,
    observer: &mut O,
) -> Result<AllPairsPaths> {
    let n = graph.node_count();
    let mut distance: Vec<Vec<Option<i64>>> = vec![vec![None; n]; n];
    let mut next: Vec<Vec<Option<usize>>> = vec![vec![None; n]; n];

    for i in 0..n {
        distance[i][i] = Some(0);
        next[i][i] = Some(i);
    }
    for from in 0..n {
        for &(to, weight) in graph.neighbors(from) {
            if distance[from][to].map_or(true, |d| weight < d) {
                distance[from][to] = Some(weight);
                next[from][to] = Some(to);
            }
        }
    }

    for k in 0..n {
        for i in 0..n {
            let Some(through_k) = distance[i][k] else {
                continue;
            };
            for j in 0..n {
                let Some(tail) = distance[k][j] else {
                    continue;
                };
                let candidate = through_k.saturating_add(tail);
                if distance[i][j].map_or(true, |d| candidate < d) {
                    distance[i][j] = Some(candidate);
                    next[i][j] = next[i][k];
                    observer.on_step(GraphAction::PathImproved {
                        from: i,
                        to: j,
                        via: k,
                        distance: candidate,
                    });
                }
            }
        }
    }

    if let Some(node) = (0..n).find(|&i| matches!(distance[i][i], Some(d) if d < 0)) {
        tracing::warn!(node, "negative cycle detected");
        return Err(AlgoError::NegativeCycle { node });
    }

    Ok(AllPairsPaths { distance, next })
}
