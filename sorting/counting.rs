use super::{collect_keys, IntegerKey};
use crate::error::{AlgoError, Result};
use crate::observer::{ArrayAction, ArrayObserver, NoopObserver};

/// 计数排序直方图的最大桶数
///
/// 超过这个范围时直方图的内存开销已经没有意义，改用基数排序。
pub const MAX_COUNTING_RANGE: u64 = 1 << 24;

/// 计数排序（稳定，O(n + k)）
///
/// 只接受非负整数，负数返回 `NegativeValue`。
pub fn counting_sort<K: IntegerKey>(seq: &mut [K]) -> Result<()> {
    counting_sort_observed(seq, &mut NoopObserver)
}

/// 计数排序（带观察者）
///
/// 1. 统计每个键出现的次数，直方图大小为 max + 1
/// 2. 前缀和得到每个键的结束位置
/// 3. 从后向前放置元素并递减计数，保证稳定
pub fn counting_sort_observed<K, O>(seq: &mut [K], observer: &mut O) -> Result<()>
where
    K: IntegerKey,
    O: ArrayObserver<K>,
{
    let keys = collect_keys(seq)?;
    let Some(&max) = keys.iter().max() else {
        return Ok(());
    };
    if max >= MAX_COUNTING_RANGE {
        return Err(AlgoError::RangeTooLarge {
            max,
            limit: MAX_COUNTING_RANGE,
        });
    }

    let mut count = vec![0usize; max as usize + 1];
    for &key in &keys {
        count[key as usize] += 1;
    }
    for i in 1..count.len() {
        count[i] += count[i - 1];
    }

    // 输出缓冲从输入副本开始，快照始终是一个完整数组
    let mut output = seq.to_vec();
    for (index, &key) in keys.iter().enumerate().rev() {
        count[key as usize] -= 1;
        let position = count[key as usize];
        output[position] = seq[index];
        observer.on_step(ArrayAction::Write { index: position }, &output);
    }

    seq.copy_from_slice(&output);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observer::StepStats;

    #[test]
    fn test_counting_sort_scenario() {
        let mut data = vec![4, 2, 2, 8, 3, 3, 1, 7, 5, 6];
        counting_sort(&mut data).unwrap();
        assert_eq!(data, vec![1, 2, 2, 3, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn test_counting_sort_rejects_negative() {
        let mut data = vec![3i64, -1, 2];
        assert_eq!(
            counting_sort(&mut data).unwrap_err(),
            AlgoError::NegativeValue { index: 1 }
        );
        // 被拒绝时输入保持不变
        assert_eq!(data, vec![3, -1, 2]);
    }

    #[test]
    fn test_counting_sort_rejects_huge_range() {
        let mut data = vec![1u64, MAX_COUNTING_RANGE];
        assert!(matches!(
            counting_sort(&mut data),
            Err(AlgoError::RangeTooLarge { .. })
        ));
    }

    #[test]
    fn test_counting_sort_zeros_and_unsigned() {
        let mut data = vec![0u8, 5, 0, 255, 5];
        counting_sort(&mut data).unwrap();
        assert_eq!(data, vec![0, 0, 5, 5, 255]);
    }

    #[test]
    fn test_counting_sort_writes_every_element_once() {
        let mut data = vec![9usize, 1, 4, 1];
        let mut stats = StepStats::default();
        counting_sort_observed(&mut data, &mut stats).unwrap();
        assert_eq!(stats.writes, 4);
        assert_eq!(data, vec![1, 1, 4, 9]);
    }
}
