use std::cmp::Ordering;

use super::{ensure_comparable, natural_order};
use crate::error::Result;
use crate::observer::{ArrayAction, ArrayObserver, NoopObserver};

/// 堆排序（大顶堆，原地，不稳定）
pub fn heap_sort<T: PartialOrd>(seq: &mut [T]) -> Result<()> {
    heap_sort_observed(seq, &mut NoopObserver)
}

pub fn heap_sort_observed<T, O>(seq: &mut [T], observer: &mut O) -> Result<()>
where
    T: PartialOrd,
    O: ArrayObserver<T>,
{
    ensure_comparable(seq)?;
    heap_sort_by(seq, natural_order, observer);
    Ok(())
}

/// 1. 从最后一个父节点到根逐个下沉，建立大顶堆
/// 2. 反复交换堆顶与堆尾，缩小堆并重新下沉堆顶
pub fn heap_sort_by<T, F, O>(seq: &mut [T], mut compare: F, observer: &mut O)
where
    F: FnMut(&T, &T) -> Ordering,
    O: ArrayObserver<T>,
{
    let n = seq.len();
    if n < 2 {
        return;
    }

    for root in (0..n / 2).rev() {
        sift_down(seq, root, n, &mut compare, observer);
    }
    observer.on_step(ArrayAction::HeapBuilt, seq);

    for end in (1..n).rev() {
        seq.swap(0, end);
        observer.on_step(ArrayAction::Swap { i: 0, j: end }, seq);
        sift_down(seq, 0, end, &mut compare, observer);
    }
}

/// 在长度为 `heap_len` 的堆中把 `root` 下沉到合适位置
fn sift_down<T, F, O>(
    seq: &mut [T],
    mut root: usize,
    heap_len: usize,
    compare: &mut F,
    observer: &mut O,
) where
    F: FnMut(&T, &T) -> Ordering,
    O: ArrayObserver<T>,
{
    loop {
        let left = 2 * root + 1;
        let right = left + 1;
        let mut largest = root;

        if left < heap_len {
            observer.on_step(
                ArrayAction::Compare {
                    i: left,
                    j: largest,
                },
                seq,
            );
            if compare(&seq[left], &seq[largest]) == Ordering::Greater {
                largest = left;
            }
        }
        if right < heap_len {
            observer.on_step(
                ArrayAction::Compare {
                    i: right,
                    j: largest,
                },
                seq,
            );
            if compare(&seq[right], &seq[largest]) == Ordering::Greater {
                largest = right;
            }
        }

        if largest == root {
            return;
        }
        seq.swap(root, largest);
        observer.on_step(
            ArrayAction::Swap {
                i: root,
                j: largest,
            },
            seq,
        );
        root = largest;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observer::{ArrayFrame, StepRecorder};

    #[test]
    fn test_heap_sort() {
        let mut data = vec![12, 11, 13, 5, 6, 7, 2, 9, 4, 10];
        heap_sort(&mut data).unwrap();
        assert_eq!(data, vec![2, 4, 5, 6, 7, 9, 10, 11, 12, 13]);
    }

    #[test]
    fn test_heap_built_snapshot_is_max_heap() {
        let mut data = vec![12, 11, 13, 5, 6, 7, 2, 9, 4, 10];
        let mut recorder: StepRecorder<ArrayFrame<i32>> = StepRecorder::unbounded();
        heap_sort_observed(&mut data, &mut recorder).unwrap();

        let heap = recorder
            .frames()
            .iter()
            .find(|frame| frame.action == ArrayAction::HeapBuilt)
            .map(|frame| frame.snapshot.clone())
            .expect("heap sort should report the built heap");

        assert_eq!(heap[0], 13);
        for i in 1..heap.len() {
            assert!(heap[(i - 1) / 2] >= heap[i]);
        }
    }

    #[test]
    fn test_heap_sort_min_heap_order() {
        // 反转比较函数等价于小顶堆，得到降序结果
        let mut data = vec![4, 10, 3, 5, 1];
        heap_sort_by(&mut data, |a, b| b.cmp(a), &mut NoopObserver);
        assert_eq!(data, vec![10, 5, 4, 3, 1]);
    }

    #[test]
    fn test_heap_sort_floats() {
        let mut data = vec![2.5, -1.0, 0.0, 9.75];
        heap_sort(&mut data).unwrap();
        assert_eq!(data, vec![-1.0, 0.0, 2.5, 9.75]);
    }
}
