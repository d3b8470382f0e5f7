use std::cmp::Ordering;

use crate::observer::{ArrayAction, ArrayObserver, NoopObserver};

/// 二分搜索
///
/// 前置条件：`seq` 按升序排列。未排序的输入不会 panic，但结果没有意义。
/// 有重复值时返回任意一个匹配下标。
pub fn binary_search<T: PartialOrd>(seq: &[T], target: &T) -> Option<usize> {
    binary_search_observed(seq, target, &mut NoopObserver)
}

/// 二分搜索（带观察者）
///
/// 活动区间为闭区间 [low, high]，中点用 `low + (high - low) / 2` 计算以避免溢出。
/// 每次取中点产生一次 `Midpoint`。
pub fn binary_search_observed<T, O>(seq: &[T], target: &T, observer: &mut O) -> Option<usize>
where
    T: PartialOrd,
    O: ArrayObserver<T>,
{
    if seq.is_empty() {
        return None;
    }

    let mut low = 0usize;
    let mut high = seq.len() - 1;

    // low > high 时结束；high 用 usize 表示，所以在 mid == 0 时提前返回
    while low <= high {
        let mid = low + (high - low) / 2;
        observer.on_step(ArrayAction::Midpoint { low, mid, high }, seq);

        match seq[mid].partial_cmp(target) {
            Some(Ordering::Equal) => {
                observer.on_step(ArrayAction::Found { index: mid }, seq);
                return Some(mid);
            }
            Some(Ordering::Less) => low = mid + 1,
            Some(Ordering::Greater) => {
                if mid == 0 {
                    return None;
                }
                high = mid - 1;
            }
            // 不可比较（如 NaN）视为不存在
            None => return None,
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observer::{ArrayFrame, StepRecorder};

    #[test]
    fn test_binary_search_scenario() {
        let data = [11, 22, 25, 34, 50, 64, 76, 88, 90];
        assert_eq!(binary_search(&data, &64), Some(5));
    }

    #[test]
    fn test_binary_search_every_element() {
        let data = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
        for (i, value) in data.iter().enumerate() {
            assert_eq!(binary_search(&data, value), Some(i));
        }
    }

    #[test]
    fn test_binary_search_missing() {
        let data = [2, 4, 6, 8];
        assert_eq!(binary_search(&data, &1), None);
        assert_eq!(binary_search(&data, &5), None);
        assert_eq!(binary_search(&data, &9), None);
        assert_eq!(binary_search(&[] as &[i32], &1), None);
    }

    #[test]
    fn test_binary_search_single() {
        assert_eq!(binary_search(&[7], &7), Some(0));
        assert_eq!(binary_search(&[7], &3), None);
        assert_eq!(binary_search(&[7], &9), None);
    }

    #[test]
    fn test_binary_search_floats_with_nan_target() {
        let data = [0.5, 1.5, 2.5];
        assert_eq!(binary_search(&data, &1.5), Some(1));
        assert_eq!(binary_search(&data, &f64::NAN), None);
    }

    #[test]
    fn test_binary_search_midpoint_sequence() {
        let data = [11, 22, 25, 34, 50, 64, 76, 88, 90];
        let mut recorder: StepRecorder<ArrayFrame<i32>> = StepRecorder::unbounded();
        binary_search_observed(&data, &64, &mut recorder);

        let actions: Vec<ArrayAction> = recorder.frames().iter().map(|f| f.action).collect();
        assert_eq!(
            actions,
            vec![
                ArrayAction::Midpoint {
                    low: 0,
                    mid: 4,
                    high: 8,
                },
                ArrayAction::Midpoint {
                    low: 5,
                    mid: 6,
                    high: 8,
                },
                ArrayAction::Midpoint {
                    low: 5,
                    mid: 5,
                    high: 5,
                },
                ArrayAction::Found { index: 5 },
            ]
        );
    }
}
