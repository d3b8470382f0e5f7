use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{AlgoError, Result};

/// 闭区间 [start, end]
///
/// 字段私有，只能通过 `new` 构造，保证 start <= end。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Interval<T> {
    start: T,
    end: T,
}

impl<T: Ord + Copy> Interval<T> {
    /// 创建区间，start 大于 end 时返回 `InvalidInterval`
    pub fn new(start: T, end: T) -> Result<Self>
    where
        T: fmt::Display,
    {
        if start > end {
            return Err(AlgoError::InvalidInterval {
                start: start.to_string(),
                end: end.to_string(),
            });
        }
        Ok(Interval { start, end })
    }

    /// 只包含一个点的区间
    pub fn point(value: T) -> Self {
        Interval {
            start: value,
            end: value,
        }
    }

    pub fn start(&self) -> T {
        self.start
    }

    pub fn end(&self) -> T {
        self.end
    }

    /// 两个区间是否有公共点（端点相接也算）
    pub fn overlaps(&self, other: &Interval<T>) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// 是否包含某个点
    pub fn contains(&self, point: T) -> bool {
        self.start <= point && point <= self.end
    }

    /// 两个区间的公共部分
    pub fn overlap(&self, other: &Interval<T>) -> Option<Interval<T>> {
        if !self.overlaps(other) {
            return None;
        }
        Some(Interval {
            start: self.start.max(other.start),
            end: self.end.min(other.end),
        })
    }

    /// 覆盖两个区间的最小区间
    pub fn span(&self, other: &Interval<T>) -> Interval<T> {
        Interval {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Interval<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}

/// 解析 "1-3"、"1,3"、"1..3" 或 "[1, 3]"
impl<T> FromStr for Interval<T>
where
    T: FromStr + Ord + Copy + fmt::Display,
{
    type Err = AlgoError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let invalid = || AlgoError::InvalidInput(format!("cannot parse interval '{}'", s));

        let body = s.trim().trim_start_matches('[').trim_end_matches(']').trim();
        let (start, end) = if let Some(parts) = body.split_once(',') {
            parts
        } else if let Some(parts) = body.split_once("..") {
            parts
        } else {
            // 跳过开头的负号再找分隔符
            let sep = body
                .get(1..)
                .and_then(|rest| rest.find('-'))
                .map(|i| i + 1)
                .ok_or_else(invalid)?;
            (&body[..sep], &body[sep + 1..])
        };

        let start = start.trim().parse::<T>().map_err(|_| invalid())?;
        let end = end.trim().parse::<T>().map_err(|_| invalid())?;
        Interval::new(start, end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn iv(start: i64, end: i64) -> Interval<i64> {
        Interval::new(start, end).unwrap()
    }

    #[test]
    fn test_interval_creation() {
        let interval = iv(1, 3);
        assert_eq!(interval.start(), 1);
        assert_eq!(interval.end(), 3);
        assert_eq!(Interval::point(4), iv(4, 4));
    }

    #[test]
    fn test_invalid_interval() {
        let err = Interval::new(5, 2).unwrap_err();
        assert_eq!(
            err,
            AlgoError::InvalidInterval {
                start: "5".to_string(),
                end: "2".to_string()
            }
        );
    }

    #[test]
    fn test_overlaps() {
        assert!(iv(1, 3).overlaps(&iv(2, 6)));
        assert!(iv(1, 3).overlaps(&iv(3, 5)));
        assert!(!iv(1, 3).overlaps(&iv(4, 5)));
        assert!(iv(2, 4).overlaps(&iv(1, 8)));
    }

    #[test]
    fn test_contains_and_overlap() {
        let interval = iv(2, 6);
        assert!(interval.contains(2));
        assert!(interval.contains(6));
        assert!(!interval.contains(7));

        assert_eq!(iv(1, 5).overlap(&iv(3, 8)), Some(iv(3, 5)));
        assert_eq!(iv(1, 2).overlap(&iv(3, 8)), None);
        assert_eq!(iv(1, 2).span(&iv(5, 8)), iv(1, 8));
    }

    #[test]
    fn test_display() {
        assert_eq!(iv(1, 8).to_string(), "[1, 8]");
    }

    #[test]
    fn test_parse() {
        assert_eq!("1-3".parse::<Interval<i64>>().unwrap(), iv(1, 3));
        assert_eq!("2,6".parse::<Interval<i64>>().unwrap(), iv(2, 6));
        assert_eq!("[4, 8]".parse::<Interval<i64>>().unwrap(), iv(4, 8));
        assert_eq!("0..9".parse::<Interval<i64>>().unwrap(), iv(0, 9));
        assert_eq!("-5--3".parse::<Interval<i64>>().unwrap(), iv(-5, -3));
        assert_eq!("-5-3".parse::<Interval<i64>>().unwrap(), iv(-5, 3));
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            "abc".parse::<Interval<i64>>(),
            Err(AlgoError::InvalidInput(_))
        ));
        assert!(matches!(
            "7-1".parse::<Interval<i64>>(),
            Err(AlgoError::InvalidInterval { .. })
        ));
        assert!("5".parse::<Interval<i64>>().is_err());
    }

    #[test]
    fn test_json() {
        let json = serde_json::to_string(&iv(1, 3)).unwrap();
        assert_eq!(json, r#"{"start":1,"end":3}"#);
    }
}
