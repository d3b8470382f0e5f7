pub mod bits;
pub mod bst;
pub mod cli;
pub mod config;
pub mod error;
pub mod graph;
pub mod intervals;
pub mod observer;
pub mod searching;
pub mod sorting;

use std::error::Error;

// 重新导出主要的公共接口
pub use bst::{BinarySearchTree, TraversalOrder};
pub use error::AlgoError;
pub use graph::{Edge, Graph, GraphAlgorithm};
pub use intervals::Interval;
pub use observer::{
    ArrayAction, ArrayFrame, ArrayObserver, GraphAction, GraphFrame, GraphObserver, NoopObserver,
    StepRecorder, StepStats, Tee, TreeAction, TreeFrame, TreeObserver,
};
pub use searching::{binary_search, linear_search, SearchAlgorithm};
pub use sorting::{IntegerKey, SortAlgorithm};

// 重新导出配置类型，便于二进制文件使用
pub use config::AlgovizConfig;

pub type Result<T> = std::result::Result<T, Box<dyn Error + Send + Sync>>;
