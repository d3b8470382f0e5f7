//! 步骤观察者
//!
//! 算法本身是同步的纯函数，不做任何延时。可视化层如果需要逐步展示，
//! 就通过 `*_observed` 版本传入一个观察者，算法会在每个关键步骤调用一次，
//! 并附带当前数组（或树节点）的快照。动画节奏完全由调用方决定。

use derive_more::Display;
use serde::Serialize;

/// 数组类算法（搜索、排序）的关键步骤
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ArrayAction {
    /// 线性搜索检查某个位置
    #[display(fmt = "inspect({})", index)]
    Inspect { index: usize },
    /// 二分搜索的当前区间 [low, high] 与中点
    #[display(fmt = "midpoint(low={}, mid={}, high={})", low, mid, high)]
    Midpoint { low: usize, mid: usize, high: usize },
    #[display(fmt = "found({})", index)]
    Found { index: usize },
    #[display(fmt = "compare({}, {})", i, j)]
    Compare { i: usize, j: usize },
    #[display(fmt = "swap({}, {})", i, j)]
    Swap { i: usize, j: usize },
    /// 某个位置被写入新值（归并、插入、计数排序）
    #[display(fmt = "write({})", index)]
    Write { index: usize },
    /// 快速排序的基准最终落位
    #[display(fmt = "pivot({})", index)]
    Pivot { index: usize },
    /// 归并排序完成了 [start, end] 区间的合并
    #[display(fmt = "merged({}, {})", start, end)]
    Merged { start: usize, end: usize },
    #[display(fmt = "heap_built")]
    HeapBuilt,
    /// 基数排序完成了一轮按位计数
    #[display(fmt = "digit_pass({})", place)]
    DigitPass { place: u64 },
}

impl ArrayAction {
    /// 是否为一次元素比较（用于统计比较次数）
    pub fn is_comparison(&self) -> bool {
        matches!(
            self,
            ArrayAction::Inspect { .. } | ArrayAction::Midpoint { .. } | ArrayAction::Compare { .. }
        )
    }
}

/// 树操作的关键步骤
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TreeAction {
    #[display(fmt = "visit")]
    Visit,
    #[display(fmt = "found")]
    Found,
    #[display(fmt = "inserted")]
    Inserted,
    #[display(fmt = "removed")]
    Removed,
    /// 有两个子节点的节点被替换为中序后继的值
    #[display(fmt = "replaced_with_successor")]
    ReplacedWithSuccessor,
    /// 遍历输出了一个值
    #[display(fmt = "emit")]
    Emit,
}

/// 图算法的关键步骤
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum GraphAction {
    /// 节点出队、被发现（深度优先）、被确定最短距离或加入生成树
    #[display(fmt = "visit({})", node)]
    Visit { node: usize },
    /// 通过 parent 第一次到达 node
    #[display(fmt = "discover({} -> {})", parent, node)]
    Discover { node: usize, parent: usize },
    /// 深度优先搜索中 node 的所有邻居都已处理
    #[display(fmt = "finish({})", node)]
    Finish { node: usize },
    /// 尝试用 from 松弛到 to 的距离
    #[display(fmt = "relax({} -> {}, {}, improved={})", from, to, distance, improved)]
    Relax {
        from: usize,
        to: usize,
        distance: i64,
        improved: bool,
    },
    /// 经过 via 的路径缩短了 from 到 to 的距离
    #[display(fmt = "path({} -> {} via {}, {})", from, to, via, distance)]
    PathImproved {
        from: usize,
        to: usize,
        via: usize,
        distance: i64,
    },
    #[display(fmt = "accept({}-{}, {})", from, to, weight)]
    EdgeAccepted { from: usize, to: usize, weight: i64 },
    /// 加入这条边会形成环
    #[display(fmt = "reject({}-{}, {})", from, to, weight)]
    EdgeRejected { from: usize, to: usize, weight: i64 },
}

/// 数组步骤观察者
pub trait ArrayObserver<T> {
    fn on_step(&mut self, action: ArrayAction, snapshot: &[T]);
}

/// 树步骤观察者
///
/// `depth` 从根节点的 0 开始计数。
pub trait TreeObserver<T> {
    fn on_step(&mut self, action: TreeAction, value: &T, depth: usize);
}

/// 图步骤观察者
pub trait GraphObserver {
    fn on_step(&mut self, action: GraphAction);
}

impl<T, F> ArrayObserver<T> for F
where
    F: FnMut(ArrayAction, &[T]),
{
    fn on_step(&mut self, action: ArrayAction, snapshot: &[T]) {
        self(action, snapshot)
    }
}

impl<T, F> TreeObserver<T> for F
where
    F: FnMut(TreeAction, &T, usize),
{
    fn on_step(&mut self, action: TreeAction, value: &T, depth: usize) {
        self(action, value, depth)
    }
}

impl<F> GraphObserver for F
where
    F: FnMut(GraphAction),
{
    fn on_step(&mut self, action: GraphAction) {
        self(action)
    }
}

/// 什么都不做的观察者，纯函数入口使用它
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl<T> ArrayObserver<T> for NoopObserver {
    #[inline]
    fn on_step(&mut self, _action: ArrayAction, _snapshot: &[T]) {}
}

impl<T> TreeObserver<T> for NoopObserver {
    #[inline]
    fn on_step(&mut self, _action: TreeAction, _value: &T, _depth: usize) {}
}

impl GraphObserver for NoopObserver {
    #[inline]
    fn on_step(&mut self, _action: GraphAction) {}
}

/// 数组步骤的拥有型记录
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArrayFrame<T> {
    pub step: usize,
    #[serde(flatten)]
    pub action: ArrayAction,
    pub snapshot: Vec<T>,
}

/// 树步骤的拥有型记录
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TreeFrame<T> {
    pub step: usize,
    pub action: TreeAction,
    pub value: T,
    pub depth: usize,
}

/// 图步骤的拥有型记录
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphFrame {
    pub step: usize,
    #[serde(flatten)]
    pub action: GraphAction,
}

/// 记录步骤快照的观察者
///
/// `max_steps` 为 0 表示不限制；超出上限后的步骤只计数不保存，
/// 避免大数组的 O(n²) 排序产生过多快照。
#[derive(Debug, Clone)]
pub struct StepRecorder<F> {
    frames: Vec<F>,
    max_steps: usize,
    total_steps: usize,
    enabled: bool,
}

impl<F> StepRecorder<F> {
    pub fn new(max_steps: usize) -> Self {
        Self {
            frames: Vec::new(),
            max_steps,
            total_steps: 0,
            enabled: true,
        }
    }

    /// 不限制步数的记录器
    pub fn unbounded() -> Self {
        Self::new(0)
    }

    /// 只计数、不保存任何快照的记录器
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::new(0)
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn frames(&self) -> &[F] {
        &self.frames
    }

    pub fn into_frames(self) -> Vec<F> {
        self.frames
    }

    /// 观察到的总步数（包括因上限被丢弃的步骤）
    pub fn total_steps(&self) -> usize {
        self.total_steps
    }

    /// 是否有步骤因为上限被丢弃
    pub fn is_truncated(&self) -> bool {
        self.enabled && self.total_steps > self.frames.len()
    }

    fn accepts(&self) -> bool {
        self.enabled && (self.max_steps == 0 || self.frames.len() < self.max_steps)
    }
}

impl<F: Serialize> StepRecorder<F> {
    /// 导出记录的步骤为JSON，供前端逐帧回放
    pub fn export_to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.frames)
    }
}

impl<T: Clone> ArrayObserver<T> for StepRecorder<ArrayFrame<T>> {
    fn on_step(&mut self, action: ArrayAction, snapshot: &[T]) {
        if self.accepts() {
            self.frames.push(ArrayFrame {
                step: self.total_steps,
                action,
                snapshot: snapshot.to_vec(),
            });
        }
        self.total_steps += 1;
    }
}

impl<T: Clone> TreeObserver<T> for StepRecorder<TreeFrame<T>> {
    fn on_step(&mut self, action: TreeAction, value: &T, depth: usize) {
        if self.accepts() {
            self.frames.push(TreeFrame {
                step: self.total_steps,
                action,
                value: value.clone(),
                depth,
            });
        }
        self.total_steps += 1;
    }
}

impl GraphObserver for StepRecorder<GraphFrame> {
    fn on_step(&mut self, action: GraphAction) {
        if self.accepts() {
            self.frames.push(GraphFrame {
                step: self.total_steps,
                action,
            });
        }
        self.total_steps += 1;
    }
}

/// 统计比较、交换、写入次数
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StepStats {
    pub comparisons: usize,
    pub swaps: usize,
    pub writes: usize,
    pub visits: usize,
}

impl<T> ArrayObserver<T> for StepStats {
    fn on_step(&mut self, action: ArrayAction, _snapshot: &[T]) {
        match action {
            ArrayAction::Swap { .. } => self.swaps += 1,
            ArrayAction::Write { .. } => self.writes += 1,
            action if action.is_comparison() => self.comparisons += 1,
            _ => {}
        }
    }
}

impl<T> TreeObserver<T> for StepStats {
    fn on_step(&mut self, action: TreeAction, _value: &T, _depth: usize) {
        if action == TreeAction::Visit {
            self.visits += 1;
        }
    }
}

/// 松弛和边检查计为比较，距离变短计为写入
impl GraphObserver for StepStats {
    fn on_step(&mut self, action: GraphAction) {
        match action {
            GraphAction::Visit { .. } => self.visits += 1,
            GraphAction::Relax { improved, .. } => {
                self.comparisons += 1;
                if improved {
                    self.writes += 1;
                }
            }
            GraphAction::PathImproved { .. } => self.writes += 1,
            GraphAction::EdgeAccepted { .. } | GraphAction::EdgeRejected { .. } => {
                self.comparisons += 1
            }
            GraphAction::Discover { .. } | GraphAction::Finish { .. } => {}
        }
    }
}

/// 同时驱动两个观察者
///
/// 例如一边记录快照一边统计比较次数。
#[derive(Debug)]
pub struct Tee<'a, A, B>(pub &'a mut A, pub &'a mut B);

impl<T, A, B> ArrayObserver<T> for Tee<'_, A, B>
where
    A: ArrayObserver<T>,
    B: ArrayObserver<T>,
{
    fn on_step(&mut self, action: ArrayAction, snapshot: &[T]) {
        ArrayObserver::on_step(&mut *self.0, action, snapshot);
        ArrayObserver::on_step(&mut *self.1, action, snapshot);
    }
}

impl<T, A, B> TreeObserver<T> for Tee<'_, A, B>
where
    A: TreeObserver<T>,
    B: TreeObserver<T>,
{
    fn on_step(&mut self, action: TreeAction, value: &T, depth: usize) {
        TreeObserver::on_step(&mut *self.0, action, value, depth);
        TreeObserver::on_step(&mut *self.1, action, value, depth);
    }
}

impl<A, B> GraphObserver for Tee<'_, A, B>
where
    A: GraphObserver,
    B: GraphObserver,
{
    fn on_step(&mut self, action: GraphAction) {
        GraphObserver::on_step(&mut *self.0, action);
        GraphObserver::on_step(&mut *self.1, action);
    }
}
