/// 载荷结束标记：固定的 16 位模式 `1111111111111110`。
/// 提取时在最低有效位序列中找到它的第一次出现，即确定载荷的边界。
pub const TERMINATOR: [u8; 16] = [1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0];

/// 每个字符占用的位数。
/// 载荷中的每个字符必须能用单个 8 位码元表示 (U+0000 ..= U+00FF)。
pub const BITS_PER_CHAR: usize = 8;

/// 未指定输出路径时，隐写结果文件名的前缀。
pub const DOCTORED_PREFIX: &str = "doctored_";

/// 未指定输出路径时，恢复文本文件名的前缀。
pub const RECOVERED_PREFIX: &str = "recovered_";

/// 被识别为音频载体的文件扩展名 (不区分大小写)。
pub const AUDIO_EXTENSIONS: [&str; 2] = ["wav", "wave"];
