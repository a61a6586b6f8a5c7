//! # lsb_carrier 库
//!
//! 本库包含 LSB 隐写工具的核心逻辑：位流编解码、图像与音频载体，
//! 以及与载体类型无关的嵌入和提取算法。

// 声明库包含的所有模块。

pub mod bitstream;
pub mod carrier;
pub mod cli;
pub mod constants;
pub mod error;
pub mod handler;
pub mod operations;
pub mod steganography;

pub use carrier::{AudioCarrier, Carrier, ImageCarrier};
pub use error::StegoError;
pub use steganography::{embed, extract};
