use std::cmp::Ordering;

use super::{ensure_comparable, natural_order};
use crate::error::Result;
use crate::observer::{ArrayAction, ArrayObserver, NoopObserver};

/// 归并排序（稳定，O(n log n) 时间，O(n) 辅助空间）
pub fn merge_sort<T: PartialOrd + Clone>(seq: &mut [T]) -> Result<()> {
    merge_sort_observed(seq, &mut NoopObserver)
}

pub fn merge_sort_observed<T, O>(seq: &mut [T], observer: &mut O) -> Result<()>
where
    T: PartialOrd + Clone,
    O: ArrayObserver<T>,
{
    ensure_comparable(seq)?;
    merge_sort_by(seq, natural_order, observer);
    Ok(())
}

pub fn merge_sort_by<T, F, O>(seq: &mut [T], mut compare: F, observer: &mut O)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
    O: ArrayObserver<T>,
{
    if seq.len() > 1 {
        let last = seq.len() - 1;
        sort_range(seq, 0, last, &mut compare, observer);
    }
}

/// 递归排序闭区间 [left, right]
///
/// 始终在整个切片上按下标工作，这样观察者拿到的是完整数组的快照。
fn sort_range<T, F, O>(seq: &mut [T], left: usize, right: usize, compare: &mut F, observer: &mut O)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
    O: ArrayObserver<T>,
{
    if left >= right {
        return;
    }
    let mid = left + (right - left) / 2;
    sort_range(seq, left, mid, compare, observer);
    sort_range(seq, mid + 1, right, compare, observer);
    merge(seq, left, mid, right, compare, observer);
}

/// 合并 [left, mid] 与 [mid + 1, right] 两个有序区间
fn merge<T, F, O>(
    seq: &mut [T],
    left: usize,
    mid: usize,
    right: usize,
    compare: &mut F,
    observer: &mut O,
) where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
    O: ArrayObserver<T>,
{
    let left_half = seq[left..=mid].to_vec();
    let right_half = seq[mid + 1..=right].to_vec();

    let (mut i, mut j, mut k) = (0, 0, left);
    while i < left_half.len() && j < right_half.len() {
        observer.on_step(
            ArrayAction::Compare {
                i: left + i,
                j: mid + 1 + j,
            },
            seq,
        );
        // 相等时取左半部分，保证稳定
        if compare(&right_half[j], &left_half[i]) == Ordering::Less {
            seq[k] = right_half[j].clone();
            j += 1;
        } else {
            seq[k] = left_half[i].clone();
            i += 1;
        }
        observer.on_step(ArrayAction::Write { index: k }, seq);
        k += 1;
    }

    for value in left_half[i..].iter().chain(right_half[j..].iter()) {
        seq[k] = value.clone();
        observer.on_step(ArrayAction::Write { index: k }, seq);
        k += 1;
    }

    observer.on_step(
        ArrayAction::Merged {
            start: left,
            end: right,
        },
        seq,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observer::{ArrayFrame, StepRecorder};

    #[test]
    fn test_merge_sort_scenario() {
        let mut data = vec![38, 27, 43, 3, 9, 82, 10, 19, 5, 12];
        merge_sort(&mut data).unwrap();
        assert_eq!(data, vec![3, 5, 9, 10, 12, 19, 27, 38, 43, 82]);
    }

    #[test]
    fn test_merge_sort_is_stable() {
        let mut data = vec![(3, "a"), (1, "b"), (3, "c"), (2, "d"), (1, "e")];
        merge_sort_by(&mut data, |a, b| a.0.cmp(&b.0), &mut NoopObserver);
        assert_eq!(data, vec![(1, "b"), (1, "e"), (2, "d"), (3, "a"), (3, "c")]);
    }

    #[test]
    fn test_merge_sort_strings() {
        let mut data = vec!["pear".to_string(), "apple".to_string(), "fig".to_string()];
        merge_sort(&mut data).unwrap();
        assert_eq!(data, vec!["apple", "fig", "pear"]);
    }

    #[test]
    fn test_merge_sort_final_merge_covers_whole_range() {
        let mut data = vec![4, 3, 2, 1];
        let mut recorder: StepRecorder<ArrayFrame<i32>> = StepRecorder::unbounded();
        merge_sort_observed(&mut data, &mut recorder).unwrap();

        let last = recorder.frames().last().expect("merge sort should emit steps");
        assert_eq!(last.action, ArrayAction::Merged { start: 0, end: 3 });
        assert_eq!(last.snapshot, vec![1, 2, 3, 4]);
    }
}
