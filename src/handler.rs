//! # 命令处理逻辑模块
//!
//! 包含处理 `hide`、`recover` 和 `capacity` 子命令的高级业务逻辑。
//! 本模块负责解析输出路径、协调文件 I/O、调用文件级隐写操作以及向用户报告结果。

use crate::cli::{CapacityArgs, CarrierKind, HideArgs, RecoverArgs};
use crate::constants::{DOCTORED_PREFIX, RECOVERED_PREFIX};
use crate::error::StegoError;
use crate::operations::{
    audio_capacity, embed_audio, embed_image, extract_audio, extract_image, image_capacity,
};
use anyhow::{Context, Result, anyhow};
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};

/// 处理 'Hide' 命令的执行逻辑。
///
/// 负责读取待隐藏的文本、确定输出路径并检查覆盖保护、调用对应载体类型的隐写操作，
/// 最后报告结果文件的位置。
///
/// # Arguments
///
/// * `args` - 包含输入/输出路径与选项的 `HideArgs` 结构体。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 既没有提供文本文件也没有提供文本内容，或无法读取文本文件。
/// * 输出文件已存在且未指定 `--force`。
/// * 载体格式不受支持，或载体没有足够的空间来隐藏文本。
/// * 无法写入到目标文件。
pub fn handle_hide(args: HideArgs) -> Result<()> {
    let text = match (&args.message, &args.text) {
        (Some(message), _) => message.clone(),
        (None, Some(path)) => fs::read_to_string(path).with_context(|| {
            format!(
                "Unable to read text file: {}",
                path.to_string_lossy().red().bold()
            )
        })?,
        (None, None) => anyhow::bail!("Either a text file or a message must be provided."),
    };

    let dest = args
        .dest
        .clone()
        .unwrap_or_else(|| prefixed_path(&args.carrier, DOCTORED_PREFIX, None));
    ensure_writable(&dest, args.force)?;

    let kind = CarrierKind::resolve(args.kind, &args.carrier);
    tracing::debug!(?kind, carrier = %args.carrier.display(), dest = %dest.display(), "Hiding message");

    let result = match kind {
        CarrierKind::Image => embed_image(&args.carrier, &dest, &text),
        CarrierKind::Audio => embed_audio(&args.carrier, &dest, &text),
    };
    let written = result.map_err(|e| match e {
        StegoError::PayloadTooLarge { required, capacity } => anyhow!(
            "Not enough space in the carrier to hide the text. \nRequired: {}, Available: {}",
            required.to_string().red().bold(),
            capacity.to_string().green().bold()
        ),
        other => anyhow::Error::new(other).context(format!(
            "Failed to hide the text in: {}",
            args.carrier.to_string_lossy().red().bold()
        )),
    })?;

    println!(
        "The text has been successfully hidden ({} bits) and saved: {}",
        written.to_string().green(),
        dest.to_string_lossy().green().bold()
    );

    Ok(())
}

/// 处理 'Recover' 命令的执行逻辑。
///
/// 负责读取经过隐写的载体、调用恢复操作，并将恢复的文本内容写入目标文本文件。
/// 载体中没有隐藏信息不被视为错误：只向用户报告，不写出任何文件。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 输出文件已存在且未指定 `--force`。
/// * 无法读取载体文件，或其格式不受支持。
/// * 无法写入到目标文本文件。
pub fn handle_recover(args: RecoverArgs) -> Result<()> {
    let dest = args
        .text
        .clone()
        .unwrap_or_else(|| prefixed_path(&args.carrier, RECOVERED_PREFIX, Some("txt")));
    ensure_writable(&dest, args.force)?;

    let kind = CarrierKind::resolve(args.kind, &args.carrier);
    let recovered = match kind {
        CarrierKind::Image => extract_image(&args.carrier),
        CarrierKind::Audio => extract_audio(&args.carrier),
    }
    .with_context(|| {
        format!(
            "Failed to recover the text from '{}'. \nThe carrier may be corrupted or in an unsupported format.",
            args.carrier.to_string_lossy().red().bold()
        )
    })?;

    let Some(text) = recovered else {
        println!(
            "{} {}",
            "No hidden message found in:".yellow(),
            args.carrier.to_string_lossy().yellow().bold()
        );
        return Ok(());
    };

    fs::write(&dest, text).with_context(|| {
        format!(
            "Unable to write to target text file: {}",
            dest.to_string_lossy().red().bold()
        )
    })?;

    println!(
        "The text has been successfully recovered and saved: {}",
        dest.to_string_lossy().green().bold()
    );
    Ok(())
}

/// 处理 'Capacity' 命令：报告载体的样本数和最多可隐藏的字符数。
pub fn handle_capacity(args: CapacityArgs) -> Result<()> {
    let capacity = match CarrierKind::resolve(args.kind, &args.carrier) {
        CarrierKind::Image => image_capacity(&args.carrier),
        CarrierKind::Audio => audio_capacity(&args.carrier),
    }
    .with_context(|| {
        format!(
            "Unable to inspect carrier: {}",
            args.carrier.to_string_lossy().red().bold()
        )
    })?;

    println!(
        "{}: {} samples, up to {} characters",
        args.carrier.to_string_lossy().bold(),
        capacity.samples.to_string().green(),
        capacity.max_chars().to_string().green().bold()
    );
    Ok(())
}

/// 在载体所在目录下生成 `<prefix><文件名>` 形式的路径，可选替换扩展名。
fn prefixed_path(carrier: &Path, prefix: &str, extension: Option<&str>) -> PathBuf {
    let name = match extension {
        Some(ext) => {
            let stem = carrier.file_stem().unwrap_or_default().to_string_lossy();
            format!("{prefix}{stem}.{ext}")
        }
        None => {
            let file_name = carrier.file_name().unwrap_or_default().to_string_lossy();
            format!("{prefix}{file_name}")
        }
    };
    carrier.with_file_name(name)
}

fn ensure_writable(dest: &Path, force: bool) -> Result<()> {
    anyhow::ensure!(
        force || !dest.exists(),
        "Output file already exists: {}. \nUse --force to overwrite it.",
        dest.to_string_lossy().red().bold()
    );
    Ok(())
}
