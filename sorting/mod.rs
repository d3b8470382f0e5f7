// 排序算法模块
//
// 每个算法都提供三类入口：
// - xxx_sort: 纯函数版本，要求元素可比较，不可比较时返回 Incomparable
// - xxx_sort_observed: 带观察者的版本，每个关键步骤回调一次
// - xxx_sort_by: 使用调用方给出的全序比较函数（计数/基数排序除外）
//
// 子模块：
// - quadratic: 冒泡、选择、插入排序（O(n²)，仅用于教学）
// - merge: 归并排序（稳定，O(n) 辅助空间）
// - quick: 快速排序（Lomuto 划分，末元素为基准）
// - heap: 堆排序（大顶堆）
// - counting: 计数排序（非负整数）
// - radix: 基数排序（非负整数，十进制 LSD）

pub mod counting;
pub mod heap;
pub mod merge;
pub mod quadratic;
pub mod quick;
pub mod radix;

use std::cmp::Ordering;
use std::str::FromStr;

use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::error::{AlgoError, Result};
use crate::observer::ArrayObserver;

pub use counting::{counting_sort, counting_sort_observed, MAX_COUNTING_RANGE};
pub use heap::{heap_sort, heap_sort_by, heap_sort_observed};
pub use merge::{merge_sort, merge_sort_by, merge_sort_observed};
pub use quadratic::{
    bubble_sort, bubble_sort_by, bubble_sort_observed, insertion_sort, insertion_sort_by,
    insertion_sort_observed, selection_sort, selection_sort_by, selection_sort_observed,
};
pub use quick::{quick_sort, quick_sort_by, quick_sort_observed};
pub use radix::{radix_sort, radix_sort_observed};

/// 支持的排序算法
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortAlgorithm {
    #[display(fmt = "bubble")]
    Bubble,
    #[display(fmt = "selection")]
    Selection,
    #[display(fmt = "insertion")]
    Insertion,
    #[display(fmt = "merge")]
    Merge,
    #[display(fmt = "quick")]
    Quick,
    #[display(fmt = "heap")]
    Heap,
    #[display(fmt = "counting")]
    Counting,
    #[display(fmt = "radix")]
    Radix,
}

impl SortAlgorithm {
    pub const ALL: [SortAlgorithm; 8] = [
        SortAlgorithm::Bubble,
        SortAlgorithm::Selection,
        SortAlgorithm::Insertion,
        SortAlgorithm::Merge,
        SortAlgorithm::Quick,
        SortAlgorithm::Heap,
        SortAlgorithm::Counting,
        SortAlgorithm::Radix,
    ];

    /// 展示用名称
    pub fn name(&self) -> &'static str {
        match self {
            SortAlgorithm::Bubble => "Bubble Sort",
            SortAlgorithm::Selection => "Selection Sort",
            SortAlgorithm::Insertion => "Insertion Sort",
            SortAlgorithm::Merge => "Merge Sort",
            SortAlgorithm::Quick => "Quick Sort",
            SortAlgorithm::Heap => "Heap Sort",
            SortAlgorithm::Counting => "Counting Sort",
            SortAlgorithm::Radix => "Radix Sort",
        }
    }

    /// 相等元素是否保持原有相对顺序
    pub fn is_stable(&self) -> bool {
        matches!(
            self,
            SortAlgorithm::Bubble
                | SortAlgorithm::Insertion
                | SortAlgorithm::Merge
                | SortAlgorithm::Counting
                | SortAlgorithm::Radix
        )
    }

    /// 是否只使用 O(1) 辅助空间
    pub fn is_in_place(&self) -> bool {
        matches!(
            self,
            SortAlgorithm::Bubble
                | SortAlgorithm::Selection
                | SortAlgorithm::Insertion
                | SortAlgorithm::Quick
                | SortAlgorithm::Heap
        )
    }

    /// 时间复杂度（平均 / 最坏）
    pub fn complexity(&self) -> &'static str {
        match self {
            SortAlgorithm::Bubble | SortAlgorithm::Selection | SortAlgorithm::Insertion => "O(n²)",
            SortAlgorithm::Merge | SortAlgorithm::Heap => "O(n log n)",
            SortAlgorithm::Quick => "O(n log n) avg, O(n²) worst",
            SortAlgorithm::Counting => "O(n + k)",
            SortAlgorithm::Radix => "O(d·(n + k))",
        }
    }

    /// 是否只能处理非负整数
    pub fn requires_integer_keys(&self) -> bool {
        matches!(self, SortAlgorithm::Counting | SortAlgorithm::Radix)
    }
}

impl FromStr for SortAlgorithm {
    type Err = AlgoError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let normalized = s.to_lowercase();
        let key = normalized
            .strip_suffix("-sort")
            .or_else(|| normalized.strip_suffix("_sort"))
            .unwrap_or(&normalized);

        SortAlgorithm::ALL
            .iter()
            .copied()
            .find(|algorithm| algorithm.to_string() == key)
            .ok_or_else(|| AlgoError::InvalidInput(format!("unknown sort algorithm '{}'", s)))
    }
}

/// 非负整数键，计数排序与基数排序使用
///
/// 负数返回 None，由调用方转换为 `NegativeValue` 错误。
pub trait IntegerKey: Copy {
    fn key(self) -> Option<u64>;
}

macro_rules! impl_integer_key {
    ($($t:ty),*) => {
        $(
            impl IntegerKey for $t {
                #[inline]
                fn key(self) -> Option<u64> {
                    u64::try_from(self).ok()
                }
            }
        )*
    };
}

impl_integer_key!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

/// 提取全部键，同时拒绝负数
pub(crate) fn collect_keys<K: IntegerKey>(seq: &[K]) -> Result<Vec<u64>> {
    seq.iter()
        .enumerate()
        .map(|(index, value)| value.key().ok_or(AlgoError::NegativeValue { index }))
        .collect()
}

/// 默认的数值升序
///
/// 只在 `ensure_comparable` 通过之后使用，因此 `None` 不会出现在正常路径上。
pub(crate) fn natural_order<T: PartialOrd>(a: &T, b: &T) -> Ordering {
    a.partial_cmp(b).unwrap_or(Ordering::Equal)
}

/// 检查每个元素都能参与比较（拒绝 NaN 之类与自身不可比较的值）
pub fn ensure_comparable<T: PartialOrd>(seq: &[T]) -> Result<()> {
    match seq.iter().position(|value| value.partial_cmp(value).is_none()) {
        Some(index) => Err(AlgoError::Incomparable { index }),
        None => Ok(()),
    }
}

/// 序列是否非递减
pub fn is_sorted<T: PartialOrd>(seq: &[T]) -> bool {
    seq.windows(2).all(|pair| pair[0] <= pair[1])
}

/// 使用比较类算法排序任意可比较类型
///
/// 计数与基数排序需要整数键，这里返回 `UnsupportedAlgorithm`，
/// 整数请使用 [`sort_integers`]。
pub fn sort_with<T, O>(algorithm: SortAlgorithm, seq: &mut [T], observer: &mut O) -> Result<()>
where
    T: PartialOrd + Clone,
    O: ArrayObserver<T>,
{
    tracing::debug!(algorithm = %algorithm, len = seq.len(), "running comparison sort");
    match algorithm {
        SortAlgorithm::Bubble => bubble_sort_observed(seq, observer),
        SortAlgorithm::Selection => selection_sort_observed(seq, observer),
        SortAlgorithm::Insertion => insertion_sort_observed(seq, observer),
        SortAlgorithm::Merge => merge_sort_observed(seq, observer),
        SortAlgorithm::Quick => quick_sort_observed(seq, observer),
        SortAlgorithm::Heap => heap_sort_observed(seq, observer),
        SortAlgorithm::Counting | SortAlgorithm::Radix => {
            Err(AlgoError::UnsupportedAlgorithm { algorithm })
        }
    }
}

/// 对整数序列运行任意一种算法
pub fn sort_integers<K, O>(algorithm: SortAlgorithm, seq: &mut [K], observer: &mut O) -> Result<()>
where
    K: IntegerKey + PartialOrd,
    O: ArrayObserver<K>,
{
    match algorithm {
        SortAlgorithm::Counting => {
            tracing::debug!(algorithm = %algorithm, len = seq.len(), "running integer sort");
            counting_sort_observed(seq, observer)
        }
        SortAlgorithm::Radix => {
            tracing::debug!(algorithm = %algorithm, len = seq.len(), "running integer sort");
            radix_sort_observed(seq, observer)
        }
        _ => sort_with(algorithm, seq, observer),
    }
}

/// 返回排好序的副本，原序列不变
pub fn sorted<T>(algorithm: SortAlgorithm, seq: &[T]) -> Result<Vec<T>>
where
    T: PartialOrd + Clone,
{
    let mut output = seq.to_vec();
    sort_with(algorithm, &mut output, &mut crate::observer::NoopObserver)?;
    Ok(output)
}
