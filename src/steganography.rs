use crate::bitstream;
use crate::carrier::Carrier;
use crate::constants::TERMINATOR;
use crate::error::StegoError;

/// 将载荷逐位写入载体：位流的第 k 位写入第 k 个样本的最低有效位。
///
/// 返回写入的位数。位流之后的样本保持不变。
///
/// # Errors
///
/// * 载荷含有超出单个 8 位码元的字符时返回 [`StegoError::UnsupportedCharacter`]。
/// * 位流长度超过 `carrier.sample_count()` 时返回 [`StegoError::PayloadTooLarge`]。
///
/// 两种情况都在修改任何样本之前报告，载体保持原样。
pub fn embed<C: Carrier>(carrier: &mut C, payload: &str) -> Result<usize, StegoError> {
    let bits = bitstream::encode(payload)?;
    let capacity = carrier.sample_count();

    if bits.len() > capacity {
        return Err(StegoError::PayloadTooLarge {
            required: bits.len(),
            capacity,
        });
    }

    for (index, &bit) in bits.iter().enumerate() {
        carrier.write_sample(index, bit);
    }

    tracing::debug!(bits = bits.len(), capacity, "Embedded payload");
    Ok(bits.len())
}

/// 按顺序读取每个样本的最低有效位，直到遇到结束标记。
///
/// 找到结束标记时返回其之前的载荷；扫描完整个载体仍未找到则返回 `None`。
pub fn extract<C: Carrier>(carrier: &C) -> Option<String> {
    let mut bits = Vec::new();

    for index in 0..carrier.sample_count() {
        bits.push(carrier.read_sample(index) & 1);

        if bits.ends_with(&TERMINATOR) {
            let end = bits.len() - TERMINATOR.len();
            tracing::debug!(end, "Found terminator");
            return Some(bitstream::decode(&bits[..end]));
        }
    }

    tracing::debug!(scanned = bits.len(), "No terminator in carrier");
    None
}
