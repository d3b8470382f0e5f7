use crate::sorting::SortAlgorithm;

/// 算法输入错误
///
/// 所有变体都表示输入被拒绝：算法本身不会部分失败，也没有重试逻辑。
/// 搜索不到目标、插入重复值、删除不存在的值都是正常结果，不属于错误。
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AlgoError {
    #[error("element at index {index} cannot be ordered")]
    Incomparable { index: usize },

    #[error("negative value at index {index} is outside the supported domain")]
    NegativeValue { index: usize },

    #[error("maximum key {max} exceeds the counting sort limit of {limit}")]
    RangeTooLarge { max: u64, limit: u64 },

    #[error("bit position {position} is out of range 0..=31")]
    BitPositionOutOfRange { position: u32 },

    #[error("invalid interval: start {start} is greater than end {end}")]
    InvalidInterval { start: String, end: String },

    #[error("{algorithm} sort requires integer keys")]
    UnsupportedAlgorithm { algorithm: SortAlgorithm },

    #[error("node {node} is out of range for a graph with {node_count} nodes")]
    NodeOutOfRange { node: usize, node_count: usize },

    #[error("edge {from}-{to} has negative weight {weight}")]
    NegativeWeight { from: usize, to: usize, weight: i64 },

    #[error("negative cycle through node {node}")]
    NegativeCycle { node: usize },

    #[error("minimum spanning tree requires an undirected graph")]
    DirectedGraph,

    #[error("invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, AlgoError>;
