use super::interval::Interval;

/// 合并重叠区间
///
/// 先按起点排序，再从左到右折叠：下一个区间的起点不超过当前合并区间的终点时
/// 扩展终点，否则开始一个新区间。结果按起点有序且两两不重叠。O(n log n)。
pub fn merge<T: Ord + Copy>(intervals: &[Interval<T>]) -> Vec<Interval<T>> {
    let mut sorted = intervals.to_vec();
    sorted.sort_by_key(|interval| interval.start());

    let mut merged: Vec<Interval<T>> = Vec::with_capacity(sorted.len());
    for interval in sorted {
        match merged.last_mut() {
            Some(last) if interval.start() <= last.end() => *last = last.span(&interval),
            _ => merged.push(interval),
        }
    }

    tracing::debug!(
        input = intervals.len(),
        output = merged.len(),
        "merged intervals"
    );
    merged
}

/// 把新区间插入到第一个起点大于它的区间之前
///
/// 只确定位置，不与相邻区间合并；需要合并时使用 `insert_merged`。
pub fn insert<T: Ord + Copy>(
    intervals: &[Interval<T>],
    new_interval: Interval<T>,
) -> Vec<Interval<T>> {
    let index = intervals
        .iter()
        .position(|interval| interval.start() > new_interval.start())
        .unwrap_or(intervals.len());

    let mut result = Vec::with_capacity(intervals.len() + 1);
    result.extend_from_slice(&intervals[..index]);
    result.push(new_interval);
    result.extend_from_slice(&intervals[index..]);
    result
}

/// 插入新区间并合并所有重叠部分
pub fn insert_merged<T: Ord + Copy>(
    intervals: &[Interval<T>],
    new_interval: Interval<T>,
) -> Vec<Interval<T>> {
    merge(&insert(intervals, new_interval))
}

/// 两组区间中所有重叠的区间对
pub fn intersect<T: Ord + Copy>(
    a: &[Interval<T>],
    b: &[Interval<T>],
) -> Vec<(Interval<T>, Interval<T>)> {
    a.iter()
        .flat_map(|left| {
            b.iter()
                .filter(move |right| left.overlaps(right))
                .map(move |right| (*left, *right))
        })
        .collect()
}

/// 与查询区间重叠的所有区间，保持原有顺序
pub fn overlapping<T: Ord + Copy>(
    intervals: &[Interval<T>],
    query: &Interval<T>,
) -> Vec<Interval<T>> {
    intervals
        .iter()
        .filter(|interval| interval.overlaps(query))
        .copied()
        .collect()
}

/// 为每个点选出包含它且终点最大的区间
///
/// 终点相同时取先出现的区间；没有区间包含的点不出现在结果中。
pub fn cover_points<T: Ord + Copy>(
    intervals: &[Interval<T>],
    points: &[T],
) -> Vec<(T, Interval<T>)> {
    points
        .iter()
        .filter_map(|&point| {
            intervals
                .iter()
                .filter(|interval| interval.contains(point))
                .fold(None, |best: Option<&Interval<T>>, interval| match best {
                    Some(current) if current.end() >= interval.end() => Some(current),
                    _ => Some(interval),
                })
                .map(|interval| (point, *interval))
        })
        .collect()
}

/// 刺穿所有区间所需的最少点
///
/// 贪心：按终点排序，当前区间未被上一个点覆盖时在它的终点放一个新点。
pub fn min_cover_points<T: Ord + Copy>(intervals: &[Interval<T>]) -> Vec<T> {
    let mut sorted = intervals.to_vec();
    sorted.sort_by_key(|interval| interval.end());

    let mut points: Vec<T> = Vec::new();
    for interval in sorted {
        match points.last() {
            Some(&last) if interval.contains(last) => {}
            _ => points.push(interval.end()),
        }
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;

    fn iv(start: i64, end: i64) -> Interval<i64> {
        Interval::new(start, end).unwrap()
    }

    #[test]
    fn test_merge() {
        let merged = merge(&[iv(1, 3), iv(2, 6), iv(4, 8)]);
        assert_eq!(merged, vec![iv(1, 8)]);
    }

    #[test]
    fn test_merge_unsorted_and_disjoint() {
        let merged = merge(&[iv(8, 10), iv(1, 3), iv(15, 18), iv(2, 6)]);
        assert_eq!(merged, vec![iv(1, 6), iv(8, 10), iv(15, 18)]);
    }

    #[test]
    fn test_merge_touching_and_nested() {
        assert_eq!(merge(&[iv(1, 4), iv(4, 5)]), vec![iv(1, 5)]);
        assert_eq!(merge(&[iv(1, 10), iv(2, 3), iv(4, 5)]), vec![iv(1, 10)]);
        assert!(merge::<i64>(&[]).is_empty());
    }

    #[test]
    fn test_insert_position_only() {
        let intervals = [iv(1, 3), iv(6, 9)];
        let result = insert(&intervals, iv(2, 5));
        assert_eq!(result, vec![iv(1, 3), iv(2, 5), iv(6, 9)]);

        let result = insert(&intervals, iv(0, 0));
        assert_eq!(result[0], iv(0, 0));
    }

    #[test]
    fn test_insert_appends_when_no_later_start() {
        let intervals = [iv(1, 3), iv(6, 9)];
        let result = insert(&intervals, iv(10, 12));
        assert_eq!(result, vec![iv(1, 3), iv(6, 9), iv(10, 12)]);

        // 起点相同也不算更晚
        let result = insert(&intervals, iv(6, 7));
        assert_eq!(result, vec![iv(1, 3), iv(6, 9), iv(6, 7)]);

        assert_eq!(insert(&[], iv(4, 5)), vec![iv(4, 5)]);
    }

    #[test]
    fn test_insert_merged() {
        let intervals = [iv(1, 3), iv(6, 9)];
        assert_eq!(
            insert_merged(&intervals, iv(2, 5)),
            vec![iv(1, 5), iv(6, 9)]
        );

        let intervals = [iv(1, 2), iv(3, 5), iv(6, 7), iv(8, 10), iv(12, 16)];
        assert_eq!(
            insert_merged(&intervals, iv(4, 8)),
            vec![iv(1, 2), iv(3, 10), iv(12, 16)]
        );
    }

    #[test]
    fn test_intersect_pairs() {
        let a = [iv(1, 3), iv(5, 7)];
        let b = [iv(2, 4), iv(8, 9)];
        assert_eq!(intersect(&a, &b), vec![(iv(1, 3), iv(2, 4))]);
        assert!(intersect(&a, &[]).is_empty());
    }

    #[test]
    fn test_overlapping_query() {
        let intervals = [iv(1, 3), iv(2, 6), iv(4, 8), iv(7, 9)];
        assert_eq!(
            overlapping(&intervals, &iv(2, 6)),
            vec![iv(1, 3), iv(2, 6), iv(4, 8)]
        );
    }

    #[test]
    fn test_cover_points() {
        let intervals = [iv(1, 3), iv(2, 6), iv(4, 8)];
        let covered = cover_points(&intervals, &[1, 4, 6, 8, 10]);
        assert_eq!(
            covered,
            vec![(1, iv(1, 3)), (4, iv(4, 8)), (6, iv(4, 8)), (8, iv(4, 8))]
        );
    }

    #[test]
    fn test_cover_points_tie_keeps_first() {
        let intervals = [iv(1, 5), iv(2, 5)];
        assert_eq!(cover_points(&intervals, &[3]), vec![(3, iv(1, 5))]);
    }

    #[test]
    fn test_min_cover_points() {
        let intervals = [iv(1, 4), iv(2, 6), iv(3, 8), iv(7, 9)];
        assert_eq!(min_cover_points(&intervals), vec![4, 9]);
        assert!(min_cover_points::<i64>(&[]).is_empty());

        let points = min_cover_points(&intervals);
        for interval in &intervals {
            assert!(points.iter().any(|&p| interval.contains(p)));
        }
    }
}
