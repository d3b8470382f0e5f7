use std::collections::VecDeque;

use serde::Serialize;

use super::model::{trace_path, Graph};
use crate::error::Result;
use crate::observer::{GraphAction, GraphObserver, NoopObserver};

// ============================================================================
// 广度优先搜索
// ============================================================================

/// 广度优先搜索的结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BfsResult {
    pub source: usize,
    /// 节点被发现的顺序
    pub order: Vec<usize>,
    /// 到起点的边数，不可达为 None
    pub level: Vec<Option<usize>>,
    pub parent: Vec<Option<usize>>,
}

impl BfsResult {
    /// 起点到 target 的最少边路径
    pub fn path_to(&self, target: usize) -> Option<Vec<usize>> {
        trace_path(&self.parent, self.source, target)
    }
}

pub fn bfs(graph: &Graph, source: usize) -> Result<BfsResult> {
    bfs_observed(graph, source, &mut NoopObserver)
}

/// 广度优先搜索（带观察者）
///
/// 节点入队时即标记为已访问，邻居按加边顺序入队。
/// 出队时产生 `Visit`，入队时产生 `Discover`。
pub fn bfs_observed<O: GraphObserver>(
    graph: &Graph,
    source: usize,
    observer: &mut O,
) -> Result<BfsResult> {
    graph.check_node(source)?;

    let n = graph.node_count();
    let mut level = vec![None; n];
    let mut parent = vec![None; n];
    let mut order = vec![source];
    let mut queue = VecDeque::from([source]);
    level[source] = Some(0);

    while let Some(current) = queue.pop_front() {
        observer.on_step(GraphAction::Visit { node: current });
        let next_level = level[current].map(|l: usize| l + 1);

        for &(neighbor, _) in graph.neighbors(current) {
            if level[neighbor].is_some() {
                continue;
            }
            level[neighbor] = next_level;
            parent[neighbor] = Some(current);
            order.push(neighbor);
            queue.push_back(neighbor);
            observer.on_step(GraphAction::Discover {
                node: neighbor,
                parent: current,
            });
        }
    }

    tracing::debug!(source, reached = order.len(), "bfs finished");
    Ok(BfsResult {
        source,
        order,
        level,
        parent,
    })
}

// ============================================================================
// 深度优先搜索
// ============================================================================

/// 深度优先搜索的结果
///
/// 发现时间和完成时间共用一个从 1 开始的时钟。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DfsResult {
    pub source: usize,
    /// 节点被发现的顺序（先序）
    pub order: Vec<usize>,
    pub discovery: Vec<Option<usize>>,
    pub finish: Vec<Option<usize>>,
    pub parent: Vec<Option<usize>>,
}

impl DfsResult {
    /// 深度优先树中起点到 target 的路径（不一定最短）
    pub fn path_to(&self, target: usize) -> Option<Vec<usize>> {
        trace_path(&self.parent, self.source, target)
    }

    /// 按完成时间从晚到早排列的已访问节点
    ///
    /// 对有向无环图就是一个拓扑序。
    pub fn reverse_finish_order(&self) -> Vec<usize> {
        let mut finished: Vec<(usize, usize)> = self
            .finish
            .iter()
            .enumerate()
            .filter_map(|(node, time)| time.map(|t| (t, node)))
            .collect();
        finished.sort_unstable_by(|a, b| b.cmp(a));
        finished.into_iter().map(|(_, node)| node).collect()
    }
}

pub fn dfs(graph: &Graph, source: usize) -> Result<DfsResult> {
    dfs_observed(graph, source, &mut NoopObserver)
}

/// 深度优先搜索（带观察者）
///
/// 访问顺序与递归实现一致：每个节点按加边顺序依次深入尚未访问的邻居。
/// 用显式栈保存 (节点, 下一个邻居下标)，图再深也不会耗尽调用栈。
pub fn dfs_observed<O: GraphObserver>(
    graph: &Graph,
    source: usize,
    observer: &mut O,
) -> Result<DfsResult> {
    graph.check_node(source)?;

    let n = graph.node_count();
    let mut discovery = vec![None; n];
    let mut finish = vec![None; n];
    let mut parent = vec![None; n];
    let mut order = vec![source];
    let mut clock = 1;

    discovery[source] = Some(clock);
    observer.on_step(GraphAction::Visit { node: source });
    let mut stack: Vec<(usize, usize)> = vec![(source, 0)];

    while let Some(frame) = stack.last_mut() {
        let (node, cursor) = *frame;
        match graph.neighbors(node).get(cursor) {
            Some(&(neighbor, _)) => {
                frame.1 += 1;
                if discovery[neighbor].is_some() {
                    continue;
                }
                clock += 1;
                discovery[neighbor] = Some(clock);
                parent[neighbor] = Some(node);
                order.push(neighbor);
                observer.on_step(GraphAction::Discover {
                    node: neighbor,
                    parent: node,
                });
                observer.on_step(GraphAction::Visit { node: neighbor });
                stack.push((neighbor, 0));
            }
            None => {
                stack.pop();
                clock += 1;
                finish[node] = Some(clock);
                observer.on_step(GraphAction::Finish { node });
            }
        }
    }

    tracing::debug!(source, reached = order.len(), "dfs finished");
    Ok(DfsResult {
        source,
        order,
        discovery,
        finish,
        parent,
    })
}
