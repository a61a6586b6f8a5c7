//! # 位流编解码模块
//!
//! 在文本载荷与扁平的位序列 (每个元素为 0 或 1) 之间转换。
//! 每个字符按高位在前输出 8 位，最后追加结束标记。

use crate::constants::{BITS_PER_CHAR, TERMINATOR};
use crate::error::StegoError;

/// 将载荷编码为位序列，并在末尾追加 16 位结束标记。
///
/// 结果长度为 `8 * 字符数 + 16`。
///
/// # Errors
///
/// 如果某个字符大于 U+00FF，返回 [`StegoError::UnsupportedCharacter`]。
pub fn encode(payload: &str) -> Result<Vec<u8>, StegoError> {
    let mut bits = Vec::with_capacity(payload.chars().count() * BITS_PER_CHAR + TERMINATOR.len());

    for (position, character) in payload.chars().enumerate() {
        let unit = u8::try_from(character)
            .map_err(|_| StegoError::UnsupportedCharacter { character, position })?;
        bits.extend((0..BITS_PER_CHAR).rev().map(|shift| (unit >> shift) & 1));
    }

    bits.extend_from_slice(&TERMINATOR);
    Ok(bits)
}

/// 将位序列按 8 位一组还原为字符。
///
/// 调用方应只传入结束标记之前的部分。若末尾剩余不足 8 位，
/// 这一组按其数值解码 (结束标记在非字节对齐位置被匹配时才会出现)。
pub fn decode(bits: &[u8]) -> String {
    bits.chunks(BITS_PER_CHAR)
        .map(|group| {
            let unit = group.iter().fold(0u8, |acc, &bit| (acc << 1) | (bit & 1));
            char::from(unit)
        })
        .collect()
}
