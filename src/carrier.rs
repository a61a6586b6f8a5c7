//! # 载体抽象模块
//!
//! 图像与音频载体都被视为一串 8 位样本。嵌入与提取只依赖本模块的
//! [`Carrier`] trait，两种载体各自独立实现。

pub mod audio;
pub mod image;

pub use self::audio::AudioCarrier;
pub use self::image::ImageCarrier;

use crate::error::StegoError;

/// 可按固定顺序读写 8 位样本的载体。
///
/// 第 k 个读出的样本与第 k 个写入位置始终对应同一个样本。
pub trait Carrier {
    /// `finalize` 产出的结果类型。
    type Output;

    /// 样本总数，即可容纳的最大位数。构造后固定不变。
    fn sample_count(&self) -> usize;

    /// 返回第 `index` 个样本。
    ///
    /// # Panics
    ///
    /// `index >= sample_count()` 时 panic。
    fn read_sample(&self, index: usize) -> u8;

    /// 用 `bit` 的最低位替换第 `index` 个样本的最低有效位，高 7 位保持不变。
    ///
    /// # Panics
    ///
    /// `index >= sample_count()` 时 panic。
    fn write_sample(&mut self, index: usize, bit: u8);

    /// 消耗载体，按原始格式参数重新组装输出。
    fn finalize(self) -> Result<Self::Output, StegoError>;
}

/// 将 `bit` 写入 `sample` 的最低有效位。
pub(crate) fn set_lsb(sample: u8, bit: u8) -> u8 {
    (sample & !1) | (bit & 1)
}
