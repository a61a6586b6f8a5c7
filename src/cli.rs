//! # 命令行接口模块
//!
//! 使用 `clap` 定义了程序的命令行结构，包括子命令和参数。
//! 所有用户通过命令行与程序交互的入口点都在此模块中定义。

use crate::constants::AUDIO_EXTENSIONS;
use clap::{ArgGroup, Parser, ValueEnum};
use std::path::{Path, PathBuf};

/// 一款基于 LSB (最低有效位) 隐写术的命令行工具，用于在无损图像 (如 PNG, BMP) 或 WAV 音频中隐藏或恢复文本。
#[derive(Parser, Debug)]
#[command(
    version,
    about,
    long_about = "一款基于 LSB (最低有效位) 隐写术的命令行工具，用于在无损图像 (如 PNG, BMP) 或未压缩的 WAV 音频中隐藏或恢复文本。"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令：hide (隐藏)、recover (恢复) 和 capacity (容量查询)。
#[derive(Parser, Debug)]
pub enum Commands {
    /// 在无损图像或 WAV 音频中隐藏文本。
    Hide(HideArgs),

    /// 从经过隐写的载体中恢复隐藏的文本。
    Recover(RecoverArgs),

    /// 显示载体最多能隐藏多少字符。
    Capacity(CapacityArgs),
}

/// 载体类型。
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum CarrierKind {
    /// RGB 图像 (PNG, BMP, TIFF, WebP, QOI)。
    Image,
    /// 未压缩的 PCM WAV 音频。
    Audio,
}

impl CarrierKind {
    /// 根据扩展名推断载体类型：`.wav` / `.wave` 为音频，其余视为图像。
    pub fn detect(path: &Path) -> Self {
        let is_audio = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| {
                AUDIO_EXTENSIONS
                    .iter()
                    .any(|known| known.eq_ignore_ascii_case(ext))
            });

        if is_audio { Self::Audio } else { Self::Image }
    }

    /// 显式指定时使用 `kind`，否则按扩展名推断。
    pub fn resolve(kind: Option<Self>, path: &Path) -> Self {
        kind.unwrap_or_else(|| Self::detect(path))
    }
}

/// 'hide' 命令所需的参数。
#[derive(Parser, Debug)]
#[command(group(ArgGroup::new("payload").required(true).args(["text", "message"])))]
pub struct HideArgs {
    /// 用于隐写的载体文件路径 (图像或 WAV 音频)。
    #[arg(short, long)]
    pub carrier: PathBuf,

    /// 要隐藏的文本内容的文件路径。
    #[arg(short, long)]
    pub text: Option<PathBuf>,

    /// 直接在命令行中给出要隐藏的文本。
    #[arg(short, long)]
    pub message: Option<String>,

    /// 隐写完成后，保存结果的输出路径。默认为载体同目录下的 `doctored_<文件名>`。
    #[arg(short, long)]
    pub dest: Option<PathBuf>,

    /// 载体类型，省略时按扩展名推断。
    #[arg(short, long, value_enum)]
    pub kind: Option<CarrierKind>,

    /// 允许覆盖已存在的输出文件。
    #[arg(short, long)]
    pub force: bool,
}

/// 'recover' 命令所需的参数。
#[derive(Parser, Debug)]
pub struct RecoverArgs {
    /// 已隐藏文本数据的载体文件路径。
    #[arg(short, long)]
    pub carrier: PathBuf,

    /// 恢复文本后，保存文本内容的输出路径。默认为载体同目录下的 `recovered_<文件名>.txt`。
    #[arg(short, long)]
    pub text: Option<PathBuf>,

    /// 载体类型，省略时按扩展名推断。
    #[arg(short, long, value_enum)]
    pub kind: Option<CarrierKind>,

    /// 允许覆盖已存在的输出文件。
    #[arg(short, long)]
    pub force: bool,
}

/// 'capacity' 命令所需的参数。
#[derive(Parser, Debug)]
pub struct CapacityArgs {
    /// 要检查的载体文件路径。
    #[arg(short, long)]
    pub carrier: PathBuf,

    /// 载体类型，省略时按扩展名推断。
    #[arg(short, long, value_enum)]
    pub kind: Option<CarrierKind>,
}
