//! 32 位整数上的位操作
//!
//! 位置从最低位 0 开始，合法范围 0..=31，越界返回 `BitPositionOutOfRange`。

use crate::error::{AlgoError, Result};

/// 位宽
pub const BITS: u32 = u32::BITS;

fn mask(position: u32) -> Result<u32> {
    if position >= BITS {
        return Err(AlgoError::BitPositionOutOfRange { position });
    }
    Ok(1 << position)
}

/// 读取某一位，返回 0 或 1
pub fn get(number: u32, position: u32) -> Result<u32> {
    Ok(u32::from(number & mask(position)? != 0))
}

/// 把某一位置 1
pub fn set(number: u32, position: u32) -> Result<u32> {
    Ok(number | mask(position)?)
}

/// 把某一位清 0
pub fn clear(number: u32, position: u32) -> Result<u32> {
    Ok(number & !mask(position)?)
}

/// 翻转某一位
pub fn toggle(number: u32, position: u32) -> Result<u32> {
    Ok(number ^ mask(position)?)
}

/// 逐位统计 1 的个数
pub fn popcount(number: u32) -> u32 {
    (0..BITS).map(|i| (number >> i) & 1).sum()
}

/// 2 的 exponent 次方
pub fn power_of_two(exponent: u32) -> Result<u32> {
    mask(exponent)
}

/// 补足 32 位的二进制字符串，最高位在左
pub fn to_binary(number: u32) -> String {
    format!("{:032b}", number)
}
