//! # 错误类型模块
//!
//! 定义库层统一的错误枚举。调用方可以据此区分 "载体不可用"、"载体太小"
//! 与 "载荷字符无法编码" 等需要不同处理方式的情况。
//! "未找到隐藏信息" 不是错误，由 `Option::None` 表示。

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StegoError {
    /// 载体的通道布局或容器类型不受支持，或者文件已损坏/被截断。
    #[error("Unsupported carrier format: {0}")]
    UnsupportedFormat(String),

    /// 编码后的位流超过了载体容量。载体保持未修改。
    #[error("Not enough space in the carrier to hide the message: required {required} samples, available {capacity}")]
    PayloadTooLarge { required: usize, capacity: usize },

    /// 载荷中包含无法用单个 8 位码元表示的字符。
    #[error("Character {character:?} at position {position} does not fit in a single 8-bit code unit")]
    UnsupportedCharacter { character: char, position: usize },

    /// 将修改后的载体重新编码为输出文件时失败。
    #[error("Failed to encode the carrier: {0}")]
    Encode(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
