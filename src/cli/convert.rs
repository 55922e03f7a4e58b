//! # convert 子命令 CLI 定义
//!
//! 批量转换目录下的图片格式，并行执行
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/convert.rs`

use clap::Args;
use std::path::PathBuf;

/// convert 子命令参数
#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Directory containing the source images
    #[arg(long)]
    pub path: PathBuf,

    /// Source extension to pick up (e.g. png)
    #[arg(long)]
    pub fromext: String,

    /// Target extension / format (e.g. jpg)
    #[arg(long)]
    pub toext: String,

    /// Encoding quality for lossy formats (1-100)
    #[arg(long, default_value_t = 85, value_parser = clap::value_parser!(u8).range(1..=100))]
    pub quality: u8,

    /// Number of parallel jobs (0 = auto)
    #[arg(short, long, default_value_t = 0, env = "FILEKIT_JOBS")]
    pub jobs: usize,
}
