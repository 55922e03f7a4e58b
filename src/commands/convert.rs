//! # convert 命令实现
//!
//! 批量转换目录下的图片格式。
//!
//! ## 功能
//! - 收集以源扩展名结尾的普通文件
//! - 在专用线程池中并行转换，每个文件独立成败
//! - 等待全部任务完成后输出汇总
//!
//! ## 依赖关系
//! - 使用 `cli/convert.rs` 定义的参数
//! - 使用 `imaging/`, `batch/`
//! - 使用 `utils/output.rs`

use crate::batch::{extension_pattern, BatchResult, BatchRunner, FileCollector};
use crate::cli::convert::ConvertArgs;
use crate::error::{FilekitError, Result};
use crate::imaging;
use crate::utils::output;

use std::path::Path;

/// 执行 convert 命令
pub fn execute(args: ConvertArgs) -> Result<()> {
    let from_ext = normalize_extension(&args.fromext)?;
    let to_ext = normalize_extension(&args.toext)?;

    output::print_header(&format!("Converting .{} -> .{}", from_ext, to_ext));

    let runner = BatchRunner::new(args.jobs);
    let result = convert_directory(&args.path, from_ext, to_ext, args.quality, &runner)?;

    if result.total() == 0 {
        output::print_warning(&format!(
            "No '.{}' files found under {}",
            from_ext,
            args.path.display()
        ));
        return Ok(());
    }

    for (path, reason) in &result.failures {
        output::print_failure(path, reason);
    }

    output::print_done(&format!(
        "Converted {} file(s) to '.{}' ({} failed)",
        result.success, to_ext, result.failed
    ));

    Ok(())
}

/// 转换目录中所有 `.{from_ext}` 文件，阻塞直到全部完成
pub fn convert_directory(
    dir: &Path,
    from_ext: &str,
    to_ext: &str,
    quality: u8,
    runner: &BatchRunner,
) -> Result<BatchResult> {
    // 未知目标格式在提交任何任务前报错
    let format = imaging::target_format(to_ext)?;

    // 输出会与源文件同名
    if from_ext.eq_ignore_ascii_case(to_ext) {
        return Err(FilekitError::InvalidArgument(format!(
            "Source and target extension are both '.{}'",
            to_ext
        )));
    }

    let files = FileCollector::new(dir)
        .with_pattern(&extension_pattern(from_ext))
        .sorted(true)
        .collect()?;

    if files.is_empty() {
        return Ok(BatchResult::default());
    }

    output::print_info(&format!(
        "Found {} file(s), using {} worker(s)",
        files.len(),
        runner.jobs()
    ));

    runner.run(&files, "Converting", |path| {
        imaging::convert_image(path, to_ext, format, quality)
            .map(|written| written.display().to_string())
    })
}

/// 去掉前导 `.`，拒绝空扩展名
fn normalize_extension(ext: &str) -> Result<&str> {
    let trimmed = ext.trim().trim_start_matches('.');
    if trimmed.is_empty() {
        return Err(FilekitError::InvalidArgument(format!(
            "Extension must not be empty: '{}'",
            ext
        )));
    }
    Ok(trimmed)
}
