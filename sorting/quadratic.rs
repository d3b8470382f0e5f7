use std::cmp::Ordering;

use super::{ensure_comparable, natural_order};
use crate::error::Result;
use crate::observer::{ArrayAction, ArrayObserver, NoopObserver};

// ============================================================================
// 冒泡排序
// ============================================================================

pub fn bubble_sort<T: PartialOrd>(seq: &mut [T]) -> Result<()> {
    bubble_sort_observed(seq, &mut NoopObserver)
}

pub fn bubble_sort_observed<T, O>(seq: &mut [T], observer: &mut O) -> Result<()>
where
    T: PartialOrd,
    O: ArrayObserver<T>,
{
    ensure_comparable(seq)?;
    bubble_sort_by(seq, natural_order, observer);
    Ok(())
}

/// 冒泡排序：相邻元素逆序则交换，某一轮没有交换时提前结束
pub fn bubble_sort_by<T, F, O>(seq: &mut [T], mut compare: F, observer: &mut O)
where
    F: FnMut(&T, &T) -> Ordering,
    O: ArrayObserver<T>,
{
    let n = seq.len();
    for pass in 0..n.saturating_sub(1) {
        let mut swapped = false;
        // 每轮结束后末尾 pass + 1 个元素已就位
        for j in 0..n - 1 - pass {
            observer.on_step(ArrayAction::Compare { i: j, j: j + 1 }, seq);
            if compare(&seq[j], &seq[j + 1]) == Ordering::Greater {
                seq.swap(j, j + 1);
                swapped = true;
                observer.on_step(ArrayAction::Swap { i: j, j: j + 1 }, seq);
            }
        }
        if !swapped {
            break;
        }
    }
}

// ============================================================================
// 选择排序
// ============================================================================

pub fn selection_sort<T: PartialOrd>(seq: &mut [T]) -> Result<()> {
    selection_sort_observed(seq, &mut NoopObserver)
}

pub fn selection_sort_observed<T, O>(seq: &mut [T], observer: &mut O) -> Result<()>
where
    T: PartialOrd,
    O: ArrayObserver<T>,
{
    ensure_comparable(seq)?;
    selection_sort_by(seq, natural_order, observer);
    Ok(())
}

/// 选择排序：每轮在未排序部分选出最小值放到前面（不稳定）
pub fn selection_sort_by<T, F, O>(seq: &mut [T], mut compare: F, observer: &mut O)
where
    F: FnMut(&T, &T) -> Ordering,
    O: ArrayObserver<T>,
{
    let n = seq.len();
    for i in 0..n.saturating_sub(1) {
        let mut min = i;
        for j in i + 1..n {
            observer.on_step(ArrayAction::Compare { i: min, j }, seq);
            if compare(&seq[j], &seq[min]) == Ordering::Less {
                min = j;
            }
        }
        if min != i {
            seq.swap(i, min);
            observer.on_step(ArrayAction::Swap { i, j: min }, seq);
        }
    }
}

// ============================================================================
// 插入排序
// ============================================================================

pub fn insertion_sort<T: PartialOrd>(seq: &mut [T]) -> Result<()> {
    insertion_sort_observed(seq, &mut NoopObserver)
}

pub fn insertion_sort_observed<T, O>(seq: &mut [T], observer: &mut O) -> Result<()>
where
    T: PartialOrd,
    O: ArrayObserver<T>,
{
    ensure_comparable(seq)?;
    insertion_sort_by(seq, natural_order, observer);
    Ok(())
}

/// 插入排序：把当前元素向左交换，直到前一个元素不大于它
///
/// 只在严格大于时交换，因此是稳定的。
pub fn insertion_sort_by<T, F, O>(seq: &mut [T], mut compare: F, observer: &mut O)
where
    F: FnMut(&T, &T) -> Ordering,
    O: ArrayObserver<T>,
{
    for i in 1..seq.len() {
        let mut j = i;
        while j > 0 {
            observer.on_step(ArrayAction::Compare { i: j - 1, j }, seq);
            if compare(&seq[j - 1], &seq[j]) != Ordering::Greater {
                break;
            }
            seq.swap(j - 1, j);
            observer.on_step(ArrayAction::Swap { i: j - 1, j }, seq);
            j -= 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AlgoError;
    use crate::observer::StepStats;

    #[test]
    fn test_bubble_sort() {
        let mut data = vec![64, 34, 25, 12, 22, 11, 90];
        bubble_sort(&mut data).unwrap();
        assert_eq!(data, vec![11, 12, 22, 25, 34, 64, 90]);
    }

    #[test]
    fn test_bubble_sort_early_exit_on_sorted() {
        let mut data = vec![1, 2, 3, 4, 5];
        let mut stats = StepStats::default();
        bubble_sort_observed(&mut data, &mut stats).unwrap();
        // 已排序输入只需一轮 n - 1 次比较
        assert_eq!(stats.comparisons, 4);
        assert_eq!(stats.swaps, 0);
    }

    #[test]
    fn test_selection_sort() {
        let mut data = vec![29, 10, 14, 37, 13];
        selection_sort(&mut data).unwrap();
        assert_eq!(data, vec![10, 13, 14, 29, 37]);
    }

    #[test]
    fn test_insertion_sort() {
        let mut data = vec![12, 11, 13, 5, 6];
        insertion_sort(&mut data).unwrap();
        assert_eq!(data, vec![5, 6, 11, 12, 13]);
    }

    #[test]
    fn test_insertion_sort_is_stable() {
        let mut data = vec![(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd')];
        insertion_sort_by(&mut data, |a, b| a.0.cmp(&b.0), &mut NoopObserver);
        assert_eq!(data, vec![(1, 'b'), (1, 'd'), (2, 'a'), (2, 'c')]);

        let mut data = vec![(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd')];
        bubble_sort_by(&mut data, |a, b| a.0.cmp(&b.0), &mut NoopObserver);
        assert_eq!(data, vec![(1, 'b'), (1, 'd'), (2, 'a'), (2, 'c')]);
    }

    #[test]
    fn test_descending_order() {
        let mut data = vec![3, 9, 1, 7];
        selection_sort_by(&mut data, |a, b| b.cmp(a), &mut NoopObserver);
        assert_eq!(data, vec![9, 7, 3, 1]);
    }

    #[test]
    fn test_reject_nan() {
        let mut data = vec![1.0, f64::NAN];
        assert_eq!(
            bubble_sort(&mut data).unwrap_err(),
            AlgoError::Incomparable { index: 1 }
        );
    }

    #[test]
    fn test_snapshots_are_permutations() {
        let mut data = vec![5, 1, 4, 2, 3];
        let mut observer = |_action: ArrayAction, snapshot: &[i32]| {
            let mut a = snapshot.to_vec();
            a.sort();
            assert_eq!(a, vec![1, 2, 3, 4, 5]);
        };
        insertion_sort_observed(&mut data, &mut observer).unwrap();
        assert_eq!(data, vec![1, 2, 3, 4, 5]);
    }
}
