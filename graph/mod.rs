// 图算法模块
//
// - model: 边、邻接表和前驱回溯
// - traversal: 广度优先与深度优先遍历
// - shortest_path: Dijkstra 与 Floyd-Warshall
// - spanning_tree: 并查集、Kruskal 与 Prim
//
// 节点编号为 0..node_count，邻居按加边顺序访问，结果可复现。

pub mod model;
pub mod shortest_path;
pub mod spanning_tree;
pub mod traversal;

use std::str::FromStr;

use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::error::AlgoError;

pub use model::{Edge, Graph};
pub use shortest_path::{
    dijkstra, dijkstra_observed, floyd_warshall, floyd_warshall_observed, AllPairsPaths,
    ShortestPaths,
};
pub use spanning_tree::{kruskal, kruskal_observed, prim, prim_observed, SpanningTree, UnionFind};
pub use traversal::{bfs, bfs_observed, dfs, dfs_observed, BfsResult, DfsResult};

/// 可选的图算法
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GraphAlgorithm {
    #[display(fmt = "bfs")]
    Bfs,
    #[display(fmt = "dfs")]
    Dfs,
    #[display(fmt = "dijkstra")]
    Dijkstra,
    #[display(fmt = "floyd-warshall")]
    FloydWarshall,
    #[display(fmt = "kruskal")]
    Kruskal,
    #[display(fmt = "prim")]
    Prim,
}

impl GraphAlgorithm {
    pub const ALL: [GraphAlgorithm; 6] = [
        GraphAlgorithm::Bfs,
        GraphAlgorithm::Dfs,
        GraphAlgorithm::Dijkstra,
        GraphAlgorithm::FloydWarshall,
        GraphAlgorithm::Kruskal,
        GraphAlgorithm::Prim,
    ];

    pub fn complexity(&self) -> &'static str {
        match self {
            GraphAlgorithm::Bfs | GraphAlgorithm::Dfs => "O(V + E)",
            GraphAlgorithm::Dijkstra | GraphAlgorithm::Prim => "O((V + E) log V)",
            GraphAlgorithm::FloydWarshall => "O(V^3)",
            GraphAlgorithm::Kruskal => "O(E log E)",
        }
    }

    /// 是否需要起点
    pub fn needs_source(&self) -> bool {
        !matches!(
            self,
            GraphAlgorithm::FloydWarshall | GraphAlgorithm::Kruskal
        )
    }

    /// 演示用的示例图，与各算法的教学样例一致
    pub fn sample_graph(&self) -> Graph {
        let (node_count, directed, edges): (usize, bool, &[(usize, usize, i64)]) = match self {
            GraphAlgorithm::Bfs | GraphAlgorithm::Dfs => (
                7,
                false,
                &[
                    (0, 1, 1),
                    (0, 3, 1),
                    (1, 2, 1),
                    (1, 3, 1),
                    (2, 5, 1),
                    (3, 4, 1),
                    (3, 5, 1),
                    (4, 6, 1),
                    (5, 6, 1),
                ],
            ),
            GraphAlgorithm::Dijkstra => (
                6,
                false,
                &[
                    (0, 1, 4),
                    (0, 3, 2),
                    (1, 2, 3),
                    (1, 3, 1),
                    (2, 5, 5),
                    (3, 4, 8),
                    (3, 5, 7),
                    (4, 5, 6),
                ],
            ),
            GraphAlgorithm::FloydWarshall => (
                4,
                true,
                &[
                    (0, 1, 3),
                    (0, 2, 8),
                    (0, 3, 7),
                    (1, 2, 1),
                    (2, 3, 2),
                    (3, 1, 4),
                ],
            ),
            GraphAlgorithm::Kruskal | GraphAlgorithm::Prim => (
                5,
                false,
                &[
                    (0, 1, 4),
                    (0, 2, 2),
                    (0, 4, 5),
                    (1, 2, 1),
                    (1, 3, 3),
                    (2, 3, 6),
                    (2, 4, 3),
                    (3, 4, 4),
                ],
            ),
        };

        let mut graph = Graph::new(node_count, directed);
        for &(from, to, weight) in edges {
            // 示例边的端点都在范围内
            let _ = graph.add_edge(Edge::new(from, to, weight));
        }
        graph
    }
}

impl FromStr for GraphAlgorithm {
    type Err = AlgoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "bfs" => Ok(GraphAlgorithm::Bfs),
            "dfs" => Ok(GraphAlgorithm::Dfs),
            "dijkstra" => Ok(GraphAlgorithm::Dijkstra),
            "floyd-warshall" | "floyd" => Ok(GraphAlgorithm::FloydWarshall),
            "kruskal" => Ok(GraphAlgorithm::Kruskal),
            "prim" => Ok(GraphAlgorithm::Prim),
            _ => Err(AlgoError::InvalidInput(format!(
                "unknown graph algorithm '{}', expected bfs, dfs, dijkstra, floyd-warshall, \
                 kruskal or prim",
                s
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_graphs_are_valid() {
        for algorithm in GraphAlgorithm::ALL {
            let graph = algorithm.sample_graph();
            assert!(!graph.edges().is_empty(), "{} sample is empty", algorithm);
            assert!(graph
                .edges()
                .iter()
                .all(|e| e.from < graph.node_count() && e.to < graph.node_count()));
        }
        assert!(GraphAlgorithm::FloydWarshall.sample_graph().is_directed());
    }

    #[test]
    fn test_display() {
        assert_eq!(GraphAlgorithm::FloydWarshall.to_string(), "floyd-warshall");
        assert!(!GraphAlgorithm::Kruskal.needs_source());
        assert!(GraphAlgorithm::Prim.needs_source());
    }

    #[test]
    fn test_from_str() {
        assert_eq!(
            "Floyd_Warshall".parse::<GraphAlgorithm>().unwrap(),
            GraphAlgorithm::FloydWarshall
        );
        assert_eq!(
            "floyd".parse::<GraphAlgorithm>().unwrap(),
            GraphAlgorithm::FloydWarshall
        );
        assert_eq!(
            "BFS".parse::<GraphAlgorithm>().unwrap(),
            GraphAlgorithm::Bfs
        );
        assert!("astar".parse::<GraphAlgorithm>().is_err());
    }
}
