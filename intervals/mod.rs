// 区间算法模块
//
// - interval: 闭区间类型 [start, end]，构造时校验 start <= end
// - operations: 合并、插入、求交、点覆盖

pub mod interval;
pub mod operations;

pub use interval::Interval;
pub use operations::{
    cover_points, insert, insert_merged, intersect, merge, min_cover_points, overlapping,
};
