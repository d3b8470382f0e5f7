use clap::{Parser, Subcommand, ValueEnum};

use crate::bst::TraversalOrder;
use crate::graph::{Edge, GraphAlgorithm};
use crate::intervals::Interval;
use crate::searching::SearchAlgorithm;
use crate::sorting::SortAlgorithm;

#[derive(Parser, Debug)]
#[command(
    name = "algoviz",
    author,
    version,
    about = "Run searching, sorting, BST, graph, interval and bit algorithms step by step",
    long_about = "algoviz runs classic educational algorithms on your input \
                  (or on generated input)\nand prints the result, optionally with every \
                  recorded step."
)]
pub struct CliArgs {
    /// 配置文件路径
    #[arg(short, long, default_value = "algoviz.toml")]
    pub config: String,

    /// 生成默认配置文件并退出
    #[arg(long)]
    pub generate_config: bool,

    /// 打印生效的配置摘要
    #[arg(long)]
    pub show_config: bool,

    /// Log level (overrides config file)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Record and print every step (overrides config file)
    #[arg(short, long)]
    pub steps: bool,

    /// Print the report as JSON (overrides config file)
    #[arg(long)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Search a sequence for a target value
    Search {
        /// linear or binary
        #[arg(short, long, default_value = "binary")]
        algorithm: SearchAlgorithm,

        /// Value to look for (defaults to a random element of the input)
        #[arg(short, long, allow_negative_numbers = true)]
        target: Option<i64>,

        /// Input values (generated when omitted)
        #[arg(allow_negative_numbers = true)]
        values: Vec<i64>,
    },

    /// Sort a sequence
    Sort {
        /// bubble, selection, insertion, merge, quick, heap, counting or radix
        #[arg(short, long, default_value = "quick")]
        algorithm: SortAlgorithm,

        /// Input values (generated when omitted)
        #[arg(allow_negative_numbers = true)]
        values: Vec<i64>,
    },

    /// Build a binary search tree and traverse it
    Bst {
        #[arg(short, long, default_value = "inorder")]
        order: TraversalOrder,

        /// Value to search for after building
        #[arg(long, allow_negative_numbers = true)]
        find: Option<i64>,

        /// Value to delete before traversing
        #[arg(long, allow_negative_numbers = true)]
        delete: Option<i64>,

        /// Values inserted in order (a sample tree when omitted)
        #[arg(allow_negative_numbers = true)]
        values: Vec<i64>,
    },

    /// Graph algorithms; edges are written as 0-1 or 0-1:4 (weight 4)
    Graph {
        /// bfs, dfs, dijkstra, floyd-warshall, kruskal or prim
        #[arg(short, long, default_value = "bfs")]
        algorithm: GraphAlgorithm,

        /// Number of nodes (defaults to the largest endpoint + 1)
        #[arg(short, long)]
        nodes: Option<usize>,

        /// Start node (bfs, dfs, dijkstra, prim; path source for floyd-warshall)
        #[arg(long, default_value_t = 0)]
        start: usize,

        /// Node to print the path to
        #[arg(long)]
        target: Option<usize>,

        /// Treat edges as directed
        #[arg(long)]
        directed: bool,

        /// Edges (a sample graph for the algorithm when omitted)
        edges: Vec<Edge>,
    },

    /// Interval operations; intervals are written as 1-3, 1,3 or 1..3
    Intervals {
        #[arg(value_enum)]
        operation: IntervalOperation,

        /// Interval to insert (insert)
        #[arg(long = "new", allow_hyphen_values = true)]
        new_interval: Option<Interval<i64>>,

        /// Second interval list (intersect)
        #[arg(long = "with", allow_hyphen_values = true)]
        others: Vec<Interval<i64>>,

        /// Query interval (overlapping)
        #[arg(long, allow_hyphen_values = true)]
        query: Option<Interval<i64>>,

        /// Points to cover (cover)
        #[arg(long = "points", allow_negative_numbers = true)]
        points: Vec<i64>,

        /// Input intervals (a sample list when omitted)
        #[arg(allow_hyphen_values = true)]
        intervals: Vec<Interval<i64>>,
    },

    /// Bit operations on a 32-bit number
    Bits {
        #[arg(value_enum)]
        operation: BitOperation,

        #[arg(short, long, default_value_t = 42)]
        number: u32,

        /// Bit position 0..=31 (exponent for power)
        #[arg(short, long, default_value_t = 0)]
        position: u32,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntervalOperation {
    /// Merge overlapping intervals
    Merge,
    /// Insert --new before the first interval that starts after it, without merging
    Insert,
    /// Insert --new and merge the result
    InsertMerged,
    /// Overlapping pairs between the input and the --with list
    Intersect,
    /// Input intervals that overlap --query
    Overlapping,
    /// For each --points value, the covering interval reaching furthest right
    Cover,
    /// Minimum points that stab every interval
    Points,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitOperation {
    Get,
    Set,
    Clear,
    Toggle,
    Count,
    Power,
}

impl CliArgs {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.command.is_none() && !self.generate_config {
            return Err(
                "No command specified. Use --help to list the available commands.".to_string(),
            );
        }
        Ok(())
    }
}
