// 搜索算法模块
//
// - linear: 线性搜索，返回第一个匹配位置
// - binary: 二分搜索，要求序列升序
//
// 找不到目标是正常结果，统一返回 None。

pub mod binary;
pub mod linear;

use std::str::FromStr;

use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::error::AlgoError;
use crate::observer::ArrayObserver;

pub use binary::{binary_search, binary_search_observed};
pub use linear::{linear_search, linear_search_observed};

/// 可选的搜索算法
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchAlgorithm {
    #[display(fmt = "linear")]
    Linear,
    #[display(fmt = "binary")]
    Binary,
}

impl SearchAlgorithm {
    pub fn complexity(&self) -> &'static str {
        match self {
            SearchAlgorithm::Linear => "O(n)",
            SearchAlgorithm::Binary => "O(log n)",
        }
    }

    /// 是否要求输入已升序排列
    pub fn requires_sorted(&self) -> bool {
        matches!(self, SearchAlgorithm::Binary)
    }

    /// 使用当前算法搜索，并把步骤交给观察者
    pub fn search_observed<T, O>(&self, seq: &[T], target: &T, observer: &mut O) -> Option<usize>
    where
        T: PartialOrd,
        O: ArrayObserver<T>,
    {
        tracing::debug!(algorithm = %self, len = seq.len(), "running search");
        match self {
            SearchAlgorithm::Linear => linear_search_observed(seq, target, observer),
            SearchAlgorithm::Binary => binary_search_observed(seq, target, observer),
        }
    }
}

impl FromStr for SearchAlgorithm {
    type Err = AlgoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "linear" => Ok(SearchAlgorithm::Linear),
            "binary" => Ok(SearchAlgorithm::Binary),
            _ => Err(AlgoError::InvalidInput(format!(
                "unknown search algorithm '{}', expected linear or binary",
                s
            ))),
        }
    }
}

/// 0 起始下标转换为 1 起始的位置（展示用）
pub fn position(index: Option<usize>) -> Option<usize> {
    index.map(|i| i + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observer::NoopObserver;

    #[test]
    fn test_parse_algorithm() {
        assert_eq!(
            "Binary".parse::<SearchAlgorithm>().unwrap(),
            SearchAlgorithm::Binary
        );
        assert_eq!(
            "linear".parse::<SearchAlgorithm>().unwrap(),
            SearchAlgorithm::Linear
        );
        assert!("jump".parse::<SearchAlgorithm>().is_err());
    }

    #[test]
    fn test_dispatch() {
        let data = [11, 22, 25, 34, 50, 64, 76, 88, 90];
        for algorithm in [SearchAlgorithm::Linear, SearchAlgorithm::Binary] {
            assert_eq!(
                algorithm.search_observed(&data, &64, &mut NoopObserver),
                Some(5)
            );
            assert_eq!(
                algorithm.search_observed(&data, &65, &mut NoopObserver),
                None
            );
        }
    }

    #[test]
    fn test_position() {
        assert_eq!(position(Some(4)), Some(5));
        assert_eq!(position(None), None);
    }
}
