use std::cmp::Ordering;

use super::{ensure_comparable, natural_order};
use crate::error::Result;
use crate::observer::{ArrayAction, ArrayObserver, NoopObserver};

/// 快速排序（Lomuto 划分，末元素为基准，原地，不稳定）
///
/// 平均 O(n log n)。末元素基准在已排序或逆序输入上退化为 O(n²)。
pub fn quick_sort<T: PartialOrd>(seq: &mut [T]) -> Result<()> {
    quick_sort_observed(seq, &mut NoopObserver)
}

pub fn quick_sort_observed<T, O>(seq: &mut [T], observer: &mut O) -> Result<()>
where
    T: PartialOrd,
    O: ArrayObserver<T>,
{
    ensure_comparable(seq)?;
    quick_sort_by(seq, natural_order, observer);
    Ok(())
}

pub fn quick_sort_by<T, F, O>(seq: &mut [T], mut compare: F, observer: &mut O)
where
    F: FnMut(&T, &T) -> Ordering,
    O: ArrayObserver<T>,
{
    if seq.len() > 1 {
        let last = seq.len() - 1;
        sort_range(seq, 0, last, &mut compare, observer);
    }
}

/// 排序闭区间 [low, high]
///
/// 只递归较小的一侧，较大的一侧留在循环里处理，递归深度为 O(log n)。
fn sort_range<T, F, O>(
    seq: &mut [T],
    mut low: usize,
    mut high: usize,
    compare: &mut F,
    observer: &mut O,
) where
    F: FnMut(&T, &T) -> Ordering,
    O: ArrayObserver<T>,
{
    while low < high {
        let pivot = partition(seq, low, high, compare, observer);

        if pivot - low < high - pivot {
            if pivot > low {
                sort_range(seq, low, pivot - 1, compare, observer);
            }
            low = pivot + 1;
        } else {
            // 这里左侧不短于右侧且 low < high，所以 pivot > low
            sort_range(seq, pivot + 1, high, compare, observer);
            high = pivot - 1;
        }
    }
}

/// Lomuto 划分：以 seq[high] 为基准，返回基准的最终位置
fn partition<T, F, O>(
    seq: &mut [T],
    low: usize,
    high: usize,
    compare: &mut F,
    observer: &mut O,
) -> usize
where
    F: FnMut(&T, &T) -> Ordering,
    O: ArrayObserver<T>,
{
    // store 之前的元素都小于基准
    let mut store = low;
    for j in low..high {
        observer.on_step(ArrayAction::Compare { i: j, j: high }, seq);
        if compare(&seq[j], &seq[high]) == Ordering::Less {
            if store != j {
                seq.swap(store, j);
                observer.on_step(ArrayAction::Swap { i: store, j }, seq);
            }
            store += 1;
        }
    }
    if store != high {
        seq.swap(store, high);
        observer.on_step(ArrayAction::Swap { i: store, j: high }, seq);
    }
    observer.on_step(ArrayAction::Pivot { index: store }, seq);
    store
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observer::StepStats;

    #[test]
    fn test_quick_sort() {
        let mut data = vec![10, 7, 8, 9, 1, 5, 3, 6, 2, 4];
        quick_sort(&mut data).unwrap();
        assert_eq!(data, vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
    }

    #[test]
    fn test_quick_sort_duplicates() {
        let mut data = vec![3, 1, 3, 3, 2, 1, 3];
        quick_sort(&mut data).unwrap();
        assert_eq!(data, vec![1, 1, 2, 3, 3, 3, 3]);
    }

    #[test]
    fn test_quick_sort_descending_input_is_quadratic() {
        let n = 20;
        let mut data: Vec<i32> = (0..n).rev().collect();
        let mut stats = StepStats::default();
        quick_sort_observed(&mut data, &mut stats).unwrap();

        assert_eq!(data, (0..n).collect::<Vec<_>>());
        // 末元素基准在逆序输入上每次只切掉一个元素
        assert!(stats.comparisons >= (n as usize) * (n as usize - 1) / 4);
    }

    #[test]
    fn test_quick_sort_large_sorted_input_does_not_overflow_stack() {
        let mut data: Vec<u32> = (0..20_000).collect();
        quick_sort(&mut data).unwrap();
        assert_eq!(data.len(), 20_000);
        assert!(super::super::is_sorted(&data));
    }

    #[test]
    fn test_partition_places_pivot() {
        let mut data = vec![10, 80, 30, 90, 40, 50, 70];
        let last = data.len() - 1;
        let mut compare = |a: &i32, b: &i32| a.cmp(b);
        let pivot = partition(&mut data, 0, last, &mut compare, &mut NoopObserver);

        assert_eq!(data[pivot], 70);
        assert!(data[..pivot].iter().all(|v| *v < 70));
        assert!(data[pivot + 1..].iter().all(|v| *v >= 70));
    }
}
