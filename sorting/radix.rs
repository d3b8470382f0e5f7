use super::{collect_keys, IntegerKey};
use crate::error::Result;
use crate::observer::{ArrayAction, ArrayObserver, NoopObserver};

const BASE: u64 = 10;

/// 基数排序（十进制，最低位优先，稳定）
///
/// 每一轮按当前位做一次稳定的计数排序，直到位权超过最大值。
/// 只接受非负整数。
pub fn radix_sort<K: IntegerKey>(seq: &mut [K]) -> Result<()> {
    radix_sort_observed(seq, &mut NoopObserver)
}

pub fn radix_sort_observed<K, O>(seq: &mut [K], observer: &mut O) -> Result<()>
where
    K: IntegerKey,
    O: ArrayObserver<K>,
{
    let mut keys = collect_keys(seq)?;
    let Some(&max) = keys.iter().max() else {
        return Ok(());
    };

    let mut place = 1u64;
    while max / place > 0 {
        sort_by_digit(seq, &mut keys, place, observer);
        observer.on_step(ArrayAction::DigitPass { place }, seq);
        tracing::trace!(place, "radix pass finished");

        // 最大值接近 u64::MAX 时位权会溢出，此时所有位都已处理完
        match place.checked_mul(BASE) {
            Some(next) => place = next,
            None => break,
        }
    }
    Ok(())
}

/// 按 `place` 位上的数字做一次稳定计数排序，`keys` 与 `seq` 同步重排
fn sort_by_digit<K, O>(seq: &mut [K], keys: &mut Vec<u64>, place: u64, observer: &mut O)
where
    K: IntegerKey,
    O: ArrayObserver<K>,
{
    let digit = |key: u64| ((key / place) % BASE) as usize;

    let mut count = [0usize; BASE as usize];
    for &key in keys.iter() {
        count[digit(key)] += 1;
    }
    for i in 1..count.len() {
        count[i] += count[i - 1];
    }

    let mut output = seq.to_vec();
    let mut output_keys = keys.clone();
    for index in (0..keys.len()).rev() {
        let d = digit(keys[index]);
        count[d] -= 1;
        output[count[d]] = seq[index];
        output_keys[count[d]] = keys[index];
        observer.on_step(ArrayAction::Write { index: count[d] }, &output);
    }

    seq.copy_from_slice(&output);
    *keys = output_keys;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AlgoError;
    use crate::observer::{ArrayFrame, StepRecorder};

    #[test]
    fn test_radix_sort_scenario() {
        let mut data = vec![170, 45, 75, 90, 802, 24, 2, 66];
        radix_sort(&mut data).unwrap();
        assert_eq!(data, vec![2, 24, 45, 66, 75, 90, 170, 802]);
    }

    #[test]
    fn test_radix_sort_digit_passes() {
        let mut data = vec![170u32, 45, 75, 90, 802, 24, 2, 66];
        let mut recorder: StepRecorder<ArrayFrame<u32>> = StepRecorder::unbounded();
        radix_sort_observed(&mut data, &mut recorder).unwrap();

        let passes: Vec<(u64, Vec<u32>)> = recorder
            .frames()
            .iter()
            .filter_map(|frame| match frame.action {
                ArrayAction::DigitPass { place } => Some((place, frame.snapshot.clone())),
                _ => None,
            })
            .collect();

        assert_eq!(passes.len(), 3);
        assert_eq!(passes[0], (1, vec![170, 90, 802, 2, 24, 45, 75, 66]));
        assert_eq!(passes[1], (10, vec![802, 2, 24, 45, 66, 170, 75, 90]));
        assert_eq!(passes[2].0, 100);
    }

    #[test]
    fn test_radix_sort_rejects_negative() {
        let mut data = vec![5i32, 3, -7];
        assert_eq!(
            radix_sort(&mut data).unwrap_err(),
            AlgoError::NegativeValue { index: 2 }
        );
    }

    #[test]
    fn test_radix_sort_all_zeros() {
        let mut data = vec![0u16, 0, 0];
        radix_sort(&mut data).unwrap();
        assert_eq!(data, vec![0, 0, 0]);
    }

    #[test]
    fn test_radix_sort_u64_extremes() {
        let mut data = vec![u64::MAX, 0, u64::MAX - 1, 10];
        radix_sort(&mut data).unwrap();
        assert_eq!(data, vec![0, 10, u64::MAX - 1, u64::MAX]);
    }
}
