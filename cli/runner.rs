use std::fmt::Display;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use super::cli_args::{BitOperation, Command, IntervalOperation};
use crate::bits;
use crate::bst::{BinarySearchTree, TraversalOrder};
use crate::config::AlgovizConfig;
use crate::graph::{self, Edge, Graph, GraphAlgorithm};
use crate::intervals::{self, Interval};
use crate::observer::{ArrayFrame, GraphFrame, StepRecorder, StepStats, Tee, TreeFrame};
use crate::searching::{self, SearchAlgorithm};
use crate::sorting::{self, SortAlgorithm};

/// 未提供输入时使用的示例数据
const SAMPLE_TREE: [i64; 7] = [50, 30, 20, 40, 70, 60, 80];
const SAMPLE_INTERVALS: [(i64, i64); 3] = [(1, 3), (2, 6), (4, 8)];
const SAMPLE_NEW_INTERVAL: (i64, i64) = (5, 7);
const SAMPLE_SECOND_LIST: [(i64, i64); 2] = [(2, 4), (7, 9)];
const SAMPLE_QUERY: (i64, i64) = (7, 9);
const SAMPLE_POINTS: [i64; 4] = [1, 4, 6, 8];

/// 一次运行的结果
#[derive(Debug, Clone, Default, Serialize)]
pub struct Report {
    pub title: String,
    pub input: String,
    pub output: String,
    pub notes: Vec<String>,
    /// 渲染好的步骤（仅在记录步骤时填充）
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub steps: Vec<String>,
    pub total_steps: usize,
    pub truncated: bool,
    /// 原始步骤帧（JSON 输出且记录步骤时填充）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frames: Option<serde_json::Value>,
    /// 树结构（BST 的 JSON 输出）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tree: Option<serde_json::Value>,
}

impl Report {
    fn new(title: impl Into<String>, input: impl Into<String>, output: impl Into<String>) -> Self {
        Report {
            title: title.into(),
            input: input.into(),
            output: output.into(),
            ..Default::default()
        }
    }
}

/// 区间命令的附加参数
struct IntervalRequest<'a> {
    new_interval: Option<Interval<i64>>,
    others: &'a [Interval<i64>],
    query: Option<Interval<i64>>,
    points: &'a [i64],
}

/// 图命令的附加参数
struct GraphRequest {
    algorithm: GraphAlgorithm,
    nodes: Option<usize>,
    start: usize,
    target: Option<usize>,
    directed: bool,
}

/// 把命令行命令转换为算法调用，并收集结果
pub struct Runner {
    config: AlgovizConfig,
    rng: StdRng,
}

impl Runner {
    pub fn new(config: AlgovizConfig) -> Self {
        let rng = match config.generator.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Runner { config, rng }
    }

    pub fn config(&self) -> &AlgovizConfig {
        &self.config
    }

    pub fn run(&mut self, command: &Command) -> crate::Result<Report> {
        match command {
            Command::Search {
                algorithm,
                target,
                values,
            } => self.run_search(*algorithm, *target, values),
            Command::Sort { algorithm, values } => self.run_sort(*algorithm, values),
            Command::Bst {
                order,
                find,
                delete,
                values,
            } => self.run_bst(*order, *find, *delete, values),
            Command::Graph {
                algorithm,
                nodes,
                start,
                target,
                directed,
                edges,
            } => {
                let request = GraphRequest {
                    algorithm: *algorithm,
                    nodes: *nodes,
                    start: *start,
                    target: *target,
                    directed: *directed,
                };
                self.run_graph(&request, edges)
            }
            Command::Intervals {
                operation,
                new_interval,
                others,
                query,
                points,
                intervals,
            } => {
                let request = IntervalRequest {
                    new_interval: *new_interval,
                    others,
                    query: *query,
                    points,
                };
                self.run_intervals(*operation, &request, intervals)
            }
            Command::Bits {
                operation,
                number,
                position,
            } => self.run_bits(*operation, *number, *position),
        }
    }

    /// 按生成器配置随机生成输入
    pub fn generate_values(&mut self) -> Vec<i64> {
        let size = self.config.generator.array_size;
        let max = i64::from(self.config.generator.max_value);
        let rng = &mut self.rng;
        let values: Vec<i64> = (0..size).map(|_| rng.gen_range(0..=max)).collect();
        tracing::debug!(len = values.len(), max, "generated random input");
        values
    }

    fn values_or_generate(&mut self, values: &[i64]) -> Vec<i64> {
        if values.is_empty() {
            self.generate_values()
        } else {
            values.to_vec()
        }
    }

    fn run_search(
        &mut self,
        algorithm: SearchAlgorithm,
        target: Option<i64>,
        values: &[i64],
    ) -> crate::Result<Report> {
        let mut values = self.values_or_generate(values);
        let mut notes = Vec::new();
        if algorithm.requires_sorted() && !sorting::is_sorted(&values) {
            values.sort_unstable();
            notes.push("input sorted ascending for binary search".to_string());
        }

        let target = match target {
            Some(target) => target,
            None => *values.choose(&mut self.rng).ok_or("no values to search")?,
        };

        let mut recorder = self.array_recorder();
        let mut stats = StepStats::default();
        let index =
            algorithm.search_observed(&values, &target, &mut Tee(&mut recorder, &mut stats));

        let output = match (index, searching::position(index)) {
            (Some(index), Some(position)) => {
                format!(
                    "found {} at index {} (position {})",
                    target, index, position
                )
            }
            _ => format!("{} not found", target),
        };

        let mut report = Report::new(
            format!("{} search", algorithm),
            format_values(&values),
            output,
        );
        report.notes = notes;
        report
            .notes
            .push(format!("complexity: {}", algorithm.complexity()));
        report.notes.push(format!("comparisons: {}", stats.comparisons));
        self.attach_steps(&mut report, &recorder, render_array_frame)?;
        Ok(report)
    }

    fn run_sort(&mut self, algorithm: SortAlgorithm, values: &[i64]) -> crate::Result<Report> {
        let mut values = self.values_or_generate(values);
        let input = format_values(&values);

        let mut recorder = self.array_recorder();
        let mut stats = StepStats::default();
        sorting::sort_integers(algorithm, &mut values, &mut Tee(&mut recorder, &mut stats))?;

        let mut report = Report::new(
            format!("{} sort", algorithm),
            input,
            format_values(&values),
        );
        report.notes.push(format!(
            "complexity: {}, {}, {}",
            algorithm.complexity(),
            if algorithm.is_stable() { "stable" } else { "unstable" },
            if algorithm.is_in_place() {
                "in-place"
            } else {
                "not in-place"
            }
        ));
        report.notes.push(format!(
            "comparisons: {}, swaps: {}, writes: {}",
            stats.comparisons, stats.swaps, stats.writes
        ));
        self.attach_steps(&mut report, &recorder, render_array_frame)?;
        Ok(report)
    }

    fn run_bst(
        &mut self,
        order: TraversalOrder,
        find: Option<i64>,
        delete: Option<i64>,
        values: &[i64],
    ) -> crate::Result<Report> {
        let values = if values.is_empty() {
            SAMPLE_TREE.to_vec()
        } else {
            values.to_vec()
        };

        let mut recorder: StepRecorder<TreeFrame<i64>> = self.recorder();
        let mut stats = StepStats::default();
        let mut tree = BinarySearchTree::new();
        let mut duplicates = 0;
        for &value in &values {
            if !tree.insert_observed(value, &mut Tee(&mut recorder, &mut stats)) {
                duplicates += 1;
            }
        }

        let mut notes = Vec::new();
        if duplicates > 0 {
            notes.push(format!("{} duplicate value(s) ignored", duplicates));
        }
        if let Some(value) = find {
            let found = tree.search_observed(&value, &mut Tee(&mut recorder, &mut stats));
            notes.push(format!(
                "find {}: {}",
                value,
                if found { "found" } else { "not found" }
            ));
        }
        if let Some(value) = delete {
            let deleted = tree.delete_observed(&value, &mut Tee(&mut recorder, &mut stats));
            notes.push(format!(
                "delete {}: {}",
                value,
                if deleted { "removed" } else { "not present" }
            ));
        }

        let traversal = tree.traverse_observed(order, &mut Tee(&mut recorder, &mut stats));
        let output = format_values(&traversal);

        notes.push(format!(
            "size: {}, height: {}, balanced: {}",
            tree.len(),
            tree.height(),
            tree.is_balanced()
        ));
        notes.push(format!("nodes visited: {}", stats.visits));

        let mut report = Report::new(
            format!("binary search tree ({} traversal)", order),
            format_values(&values),
            output,
        );
        report.notes = notes;
        if self.json_output() {
            report.tree = Some(serde_json::to_value(tree.visualize())?);
        }
        self.attach_steps(&mut report, &recorder, render_tree_frame)?;
        Ok(report)
    }

    fn run_graph(&mut self, request: &GraphRequest, edges: &[Edge]) -> crate::Result<Report> {
        let algorithm = request.algorithm;
        let mut notes = Vec::new();
        let graph = if edges.is_empty() {
            notes.push(format!("sample graph for {}", algorithm));
            algorithm.sample_graph()
        } else {
            let node_count = request.nodes.unwrap_or_else(|| {
                edges
                    .iter()
                    .map(|e| e.from.max(e.to) + 1)
                    .max()
                    .unwrap_or(0)
            });
            Graph::from_edges(node_count, request.directed, edges.iter().copied())?
        };
        notes.push(format!(
            "{} nodes, {} edges, {}",
            graph.node_count(),
            graph.edges().len(),
            if graph.is_directed() { "directed" } else { "undirected" }
        ));

        let (start, target) = (request.start, request.target);
        let mut recorder: StepRecorder<GraphFrame> = self.recorder();
        let mut stats = StepStats::default();

        let (title, output) = match algorithm {
            GraphAlgorithm::Bfs => {
                let result =
                    graph::bfs_observed(&graph, start, &mut Tee(&mut recorder, &mut stats))?;
                notes.push(format!("levels: {}", format_optional(&result.level)));
                if let Some(target) = target {
                    notes.push(format_path(start, target, result.path_to(target)));
                }
                ("breadth-first search", format_values(&result.order))
            }
            GraphAlgorithm::Dfs => {
                let result =
                    graph::dfs_observed(&graph, start, &mut Tee(&mut recorder, &mut stats))?;
                notes.push(format!("discovery: {}", format_optional(&result.discovery)));
                notes.push(format!("finish: {}", format_optional(&result.finish)));
                if let Some(target) = target {
                    notes.push(format_path(start, target, result.path_to(target)));
                }
                ("depth-first search", format_values(&result.order))
            }
            GraphAlgorithm::Dijkstra => {
                let paths =
                    graph::dijkstra_observed(&graph, start, &mut Tee(&mut recorder, &mut stats))?;
                if let Some(target) = target {
                    notes.push(format_path(start, target, paths.path_to(target)));
                }
                ("dijkstra shortest paths", format_optional(&paths.distance))
            }
            GraphAlgorithm::FloydWarshall => {
                let paths =
                    graph::floyd_warshall_observed(&graph, &mut Tee(&mut recorder, &mut stats))?;
                if let Some(target) = target {
                    notes.push(format_path(start, target, paths.path(start, target)));
                }
                let rows: Vec<String> =
                    paths.distance.iter().map(|row| format_optional(row)).collect();
                ("floyd-warshall all-pairs shortest paths", format_values(&rows))
            }
            GraphAlgorithm::Kruskal | GraphAlgorithm::Prim => {
                let tree = if algorithm == GraphAlgorithm::Kruskal {
                    graph::kruskal_observed(&graph, &mut Tee(&mut recorder, &mut stats))?
                } else {
                    graph::prim_observed(&graph, start, &mut Tee(&mut recorder, &mut stats))?
                };
                notes.push(format!("total weight: {}", tree.total_weight));
                if !tree.is_spanning(graph.node_count()) {
                    notes.push("result is a spanning forest".to_string());
                }
                let title = if algorithm == GraphAlgorithm::Kruskal {
                    "kruskal minimum spanning tree"
                } else {
                    "prim minimum spanning tree"
                };
                (title, format_values(&tree.edges))
            }
        };

        notes.push(format!("complexity: {}", algorithm.complexity()));
        notes.push(format!(
            "visits: {}, comparisons: {}, writes: {}",
            stats.visits, stats.comparisons, stats.writes
        ));

        let mut report = Report::new(title, format_values(graph.edges()), output);
        report.notes = notes;
        self.attach_steps(&mut report, &recorder, render_graph_frame)?;
        Ok(report)
    }

    fn run_intervals(
        &mut self,
        operation: IntervalOperation,
        request: &IntervalRequest<'_>,
        input: &[Interval<i64>],
    ) -> crate::Result<Report> {
        let list = if input.is_empty() {
            sample_intervals(&SAMPLE_INTERVALS)?
        } else {
            input.to_vec()
        };
        let input = format_values(&list);
        let mut notes = Vec::new();

        let (title, output) = match operation {
            IntervalOperation::Merge => {
                let merged = intervals::merge(&list);
                ("merge intervals", format_values(&merged))
            }
            IntervalOperation::Insert | IntervalOperation::InsertMerged => {
                let new_interval = match request.new_interval {
                    Some(interval) => interval,
                    None => Interval::new(SAMPLE_NEW_INTERVAL.0, SAMPLE_NEW_INTERVAL.1)?,
                };
                notes.push(format!("new interval: {}", new_interval));
                if operation == IntervalOperation::Insert {
                    let result = intervals::insert(&list, new_interval);
                    ("insert interval", format_values(&result))
                } else {
                    let result = intervals::insert_merged(&list, new_interval);
                    ("insert and merge interval", format_values(&result))
                }
            }
            IntervalOperation::Intersect => {
                let others = if request.others.is_empty() {
                    sample_intervals(&SAMPLE_SECOND_LIST)?
                } else {
                    request.others.to_vec()
                };
                let pairs: Vec<String> = intervals::intersect(&list, &others)
                    .iter()
                    .map(|(a, b)| match a.overlap(b) {
                        Some(common) => format!("{} & {} -> {}", a, b, common),
                        None => format!("{} & {}", a, b),
                    })
                    .collect();
                notes.push(format!("second list: {}", format_values(&others)));
                ("intersect interval lists", format_values(&pairs))
            }
            IntervalOperation::Overlapping => {
                let query = match request.query {
                    Some(query) => query,
                    None => Interval::new(SAMPLE_QUERY.0, SAMPLE_QUERY.1)?,
                };
                notes.push(format!("query: {}", query));
                let found = intervals::overlapping(&list, &query);
                ("intervals overlapping query", format_values(&found))
            }
            IntervalOperation::Cover => {
                let points = if request.points.is_empty() {
                    SAMPLE_POINTS.to_vec()
                } else {
                    request.points.to_vec()
                };
                let covered = intervals::cover_points(&list, &points);
                let uncovered: Vec<i64> = points
                    .iter()
                    .copied()
                    .filter(|p| !covered.iter().any(|(q, _)| q == p))
                    .collect();
                notes.push(format!("points: {}", format_values(&points)));
                if !uncovered.is_empty() {
                    notes.push(format!("not covered: {}", format_values(&uncovered)));
                }
                let lines: Vec<String> = covered
                    .iter()
                    .map(|(point, interval)| format!("{} -> {}", point, interval))
                    .collect();
                ("cover points", format_values(&lines))
            }
            IntervalOperation::Points => {
                let points = intervals::min_cover_points(&list);
                notes.push(format!("{} point(s) stab every interval", points.len()));
                ("minimum points to cover", format_values(&points))
            }
        };

        let mut report = Report::new(title, input, output);
        report.notes = notes;
        Ok(report)
    }

    fn run_bits(
        &mut self,
        operation: BitOperation,
        number: u32,
        position: u32,
    ) -> crate::Result<Report> {
        let input = format!("{} ({})", number, bits::to_binary(number));
        let mut notes = Vec::new();

        let (title, output) = match operation {
            BitOperation::Get => {
                let bit = bits::get(number, position)?;
                notes.push(format!("position: {}", position));
                ("get bit", bit.to_string())
            }
            BitOperation::Set | BitOperation::Clear | BitOperation::Toggle => {
                let (title, result) = match operation {
                    BitOperation::Set => ("set bit", bits::set(number, position)?),
                    BitOperation::Clear => ("clear bit", bits::clear(number, position)?),
                    _ => ("toggle bit", bits::toggle(number, position)?),
                };
                notes.push(format!("position: {}", position));
                (title, format!("{} ({})", result, bits::to_binary(result)))
            }
            BitOperation::Count => ("count set bits", bits::popcount(number).to_string()),
            BitOperation::Power => {
                let result = bits::power_of_two(position)?;
                notes.push(format!("exponent: {}", position));
                ("power of two", format!("{} ({})", result, bits::to_binary(result)))
            }
        };

        let mut report = Report::new(title, input, output);
        report.notes = notes;
        Ok(report)
    }

    fn json_output(&self) -> bool {
        self.config.visualization.format == "json"
    }

    /// 不记录步骤时只计数，不为每一步复制快照
    fn recorder<F>(&self) -> StepRecorder<F> {
        if self.config.visualization.record_steps {
            StepRecorder::new(self.config.visualization.max_steps)
        } else {
            StepRecorder::disabled()
        }
    }

    fn array_recorder(&self) -> StepRecorder<ArrayFrame<i64>> {
        self.recorder()
    }

    /// 把记录的步骤写入报告
    fn attach_steps<F: Serialize>(
        &self,
        report: &mut Report,
        recorder: &StepRecorder<F>,
        render: fn(&F) -> String,
    ) -> crate::Result<()> {
        report.total_steps = recorder.total_steps();
        if !self.config.visualization.record_steps {
            return Ok(());
        }

        report.truncated = recorder.is_truncated();
        report.steps = recorder.frames().iter().map(render).collect();
        if self.json_output() {
            report.frames = Some(serde_json::to_value(recorder.frames())?);
        }
        Ok(())
    }
}

fn sample_intervals(pairs: &[(i64, i64)]) -> crate::Result<Vec<Interval<i64>>> {
    let intervals = pairs
        .iter()
        .map(|&(start, end)| Interval::new(start, end))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(intervals)
}

/// 格式化为 [a, b, c]
pub fn format_values<T: Display>(values: &[T]) -> String {
    let items: Vec<String> = values.iter().map(|v| v.to_string()).collect();
    format!("[{}]", items.join(", "))
}

/// None 显示为 inf
fn format_optional<T: Display>(values: &[Option<T>]) -> String {
    let items: Vec<String> = values
        .iter()
        .map(|v| match v {
            Some(v) => v.to_string(),
            None => "inf".to_string(),
        })
        .collect();
    format_values(&items)
}

fn format_path(start: usize, target: usize, path: Option<Vec<usize>>) -> String {
    match path {
        Some(path) => format!("path {} -> {}: {}", start, target, format_values(&path)),
        None => format!("path {} -> {}: unreachable", start, target),
    }
}

fn render_array_frame(frame: &ArrayFrame<i64>) -> String {
    format!(
        "#{:<4} {:<28} {}",
        frame.step,
        frame.action.to_string(),
        format_values(&frame.snapshot)
    )
}

fn render_tree_frame(frame: &TreeFrame<i64>) -> String {
    format!(
        "#{:<4} {:<24} {} (depth {})",
        frame.step,
        frame.action.to_string(),
        frame.value,
        frame.depth
    )
}

fn render_graph_frame(frame: &GraphFrame) -> String {
    format!("#{:<4} {}", frame.step, frame.action)
}
