use crate::observer::{ArrayAction, ArrayObserver, NoopObserver};

/// 线性搜索：从左到右扫描，返回第一个等于 `target` 的下标
pub fn linear_search<T: PartialEq>(seq: &[T], target: &T) -> Option<usize> {
    linear_search_observed(seq, target, &mut NoopObserver)
}

/// 线性搜索（带观察者）
///
/// 每检查一个位置产生一次 `Inspect`，命中时再产生一次 `Found`。
pub fn linear_search_observed<T, O>(seq: &[T], target: &T, observer: &mut O) -> Option<usize>
where
    T: PartialEq,
    O: ArrayObserver<T>,
{
    for (index, value) in seq.iter().enumerate() {
        observer.on_step(ArrayAction::Inspect { index }, seq);
        if value == target {
            observer.on_step(ArrayAction::Found { index }, seq);
            return Some(index);
        }
    }
    None
}
