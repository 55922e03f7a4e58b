//! # merge 子命令 CLI 定义
//!
//! 合并目录下所有 Excel 文件的所有工作表
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/merge.rs`

use clap::Args;
use std::path::PathBuf;

/// merge 子命令参数
#[derive(Args, Debug)]
pub struct MergeArgs {
    /// Directory containing .xlsx / .xls files
    #[arg(long, default_value = "example")]
    pub input: PathBuf,

    /// Merged output file (.xlsx or .csv); defaults to merged_result_<timestamp>.xlsx
    #[arg(long)]
    pub output: Option<PathBuf>,
}
