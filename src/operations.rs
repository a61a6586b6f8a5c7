//! # 文件级操作模块
//!
//! 面向调用方的四个逻辑操作：`embed_image`、`extract_image`、`embed_audio`、
//! `extract_audio`，以及容量查询。输入文件会先被完整读入内存，
//! 输出文件只有在嵌入成功后才会写出，因此容量不足时目标文件不会被创建或修改。

use crate::carrier::{AudioCarrier, Carrier, ImageCarrier};
use crate::constants::{BITS_PER_CHAR, TERMINATOR};
use crate::error::StegoError;
use crate::steganography::{embed, extract};
use std::fs;
use std::path::Path;

/// 载体容量，以样本数 (即可写入的位数) 计。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capacity {
    pub samples: usize,
}

impl Capacity {
    /// 在计入结束标记后，最多可以隐藏的字符数。
    pub fn max_chars(&self) -> usize {
        self.samples.saturating_sub(TERMINATOR.len()) / BITS_PER_CHAR
    }
}

/// 将 `text` 隐藏到 `input` 图像中，并把结果保存到 `output`。
///
/// 输出格式由 `output` 的扩展名决定，必须是无损格式。返回写入的位数。
pub fn embed_image<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
    text: &str,
) -> Result<usize, StegoError> {
    let mut carrier = ImageCarrier::from_bytes(&fs::read(input.as_ref())?)?;
    let written = embed(&mut carrier, text)?;

    carrier
        .finalize()?
        .save(output.as_ref())
        .map_err(|e| StegoError::Encode(e.to_string()))?;

    tracing::info!(
        input = %input.as_ref().display(),
        output = %output.as_ref().display(),
        bits = written,
        "Hid message in image"
    );
    Ok(written)
}

/// 从 `input` 图像中恢复隐藏的文本，不存在时返回 `None`。
pub fn extract_image<P: AsRef<Path>>(input: P) -> Result<Option<String>, StegoError> {
    let carrier = ImageCarrier::from_bytes(&fs::read(input.as_ref())?)?;
    Ok(extract(&carrier))
}

/// 将 `text` 隐藏到 `input` WAV 文件中，并以相同的流参数写出到 `output`。
///
/// 返回写入的位数。
pub fn embed_audio<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
    text: &str,
) -> Result<usize, StegoError> {
    let mut carrier = AudioCarrier::from_bytes(&fs::read(input.as_ref())?)?;
    let written = embed(&mut carrier, text)?;

    fs::write(output.as_ref(), carrier.finalize()?)?;

    tracing::info!(
        input = %input.as_ref().display(),
        output = %output.as_ref().display(),
        bits = written,
        "Hid message in audio"
    );
    Ok(written)
}

/// 从 `input` WAV 文件中恢复隐藏的文本，不存在时返回 `None`。
pub fn extract_audio<P: AsRef<Path>>(input: P) -> Result<Option<String>, StegoError> {
    let carrier = AudioCarrier::from_bytes(&fs::read(input.as_ref())?)?;
    Ok(extract(&carrier))
}

/// 查询 `input` 图像的容量 (3 × 像素数个样本)。
pub fn image_capacity<P: AsRef<Path>>(input: P) -> Result<Capacity, StegoError> {
    let carrier = ImageCarrier::from_bytes(&fs::read(input.as_ref())?)?;
    Ok(Capacity {
        samples: carrier.sample_count(),
    })
}

/// 查询 `input` WAV 文件的容量 (data 块的字节数)。
pub fn audio_capacity<P: AsRef<Path>>(input: P) -> Result<Capacity, StegoError> {
    let carrier = AudioCarrier::from_bytes(&fs::read(input.as_ref())?)?;
    Ok(Capacity {
        samples: carrier.sample_count(),
    })
}
