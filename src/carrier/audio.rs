use crate::carrier::{Carrier, set_lsb};
use crate::error::StegoError;
use hound::{SampleFormat, WavReader, WavSpec};
use std::io::{Cursor, Read};
use std::ops::Range;

/// 以 PCM 帧缓冲区的原始字节为样本的音频载体。
///
/// 每个字节都是一个样本单元，而不是每个逻辑音频采样一个单元：
/// 16 位音频的每个采样贡献两个样本。字节顺序与 WAV 文件 `data` 块中的完全一致
/// (包括 24 位有效数据存放在 4 字节容器中的情况)。
///
/// 载体保留完整的原始文件，`finalize` 只改写 `data` 块中的采样字节，
/// 格式标签、块对齐以及其他所有块都原样保留。
#[derive(Debug, Clone)]
pub struct AudioCarrier {
    spec: WavSpec,
    sample_total: usize,
    file: Vec<u8>,
    data: Range<usize>,
}

impl AudioCarrier {
    /// 从内存中的 WAV 文件构造载体。
    ///
    /// # Errors
    ///
    /// 以下情况返回 [`StegoError::UnsupportedFormat`]：
    /// * 数据不是有效的 WAV 容器。
    /// * 采样格式为浮点数。
    /// * `data` 块声明的长度超出了文件末尾 (文件被截断)。
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, StegoError> {
        let reader = WavReader::new(Cursor::new(bytes)).map_err(format_error)?;
        let spec = reader.spec();

        if spec.sample_format != SampleFormat::Int {
            return Err(StegoError::UnsupportedFormat(format!(
                "only integer PCM audio is supported, got {:?} samples",
                spec.sample_format
            )));
        }

        let sample_total = reader.len() as usize;
        // 读取头部后，游标恰好停在 data 块第一个采样字节处
        let start = reader.into_inner().position() as usize;
        let size: [u8; 4] = start
            .checked_sub(4)
            .and_then(|at| bytes.get(at..start))
            .and_then(|size| size.try_into().ok())
            .ok_or_else(|| StegoError::UnsupportedFormat("missing data chunk header".to_string()))?;
        let declared = u32::from_le_bytes(size) as usize;

        let end = start + declared;
        if end > bytes.len() {
            return Err(StegoError::UnsupportedFormat(format!(
                "data chunk declares {declared} bytes but only {} remain",
                bytes.len() - start
            )));
        }

        tracing::debug!(
            channels = spec.channels,
            sample_rate = spec.sample_rate,
            bits_per_sample = spec.bits_per_sample,
            frame_bytes = declared,
            "Loaded PCM audio carrier"
        );

        Ok(Self {
            spec,
            sample_total,
            file: bytes.to_vec(),
            data: start..end,
        })
    }

    /// 从任意 WAV 数据流构造载体，先将整个流读入内存。
    ///
    /// # Errors
    ///
    /// 读取失败时返回 [`StegoError::Io`]，其余同 [`AudioCarrier::from_bytes`]。
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self, StegoError> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        Self::from_bytes(&bytes)
    }

    /// 捕获的流参数：声道数、采样率、采样位数与采样格式。
    pub fn spec(&self) -> WavSpec {
        self.spec
    }

    /// 帧数 (每帧包含每个声道各一个采样)。
    pub fn frame_count(&self) -> usize {
        self.sample_total / usize::from(self.spec.channels.max(1))
    }
}

impl Carrier for AudioCarrier {
    type Output = Vec<u8>;

    fn sample_count(&self) -> usize {
        self.data.len()
    }

    fn read_sample(&self, index: usize) -> u8 {
        self.file[self.data.clone()][index]
    }

    fn write_sample(&mut self, index: usize, bit: u8) {
        let sample = &mut self.file[self.data.clone()][index];
        *sample = set_lsb(*sample, bit);
    }

    /// 返回完整的 WAV 文件：除 `data` 块中被修改的采样字节外，与原始文件逐字节相同。
    fn finalize(self) -> Result<Vec<u8>, StegoError> {
        Ok(self.file)
    }
}

fn format_error(e: hound::Error) -> StegoError {
    StegoError::UnsupportedFormat(e.to_string())
}
