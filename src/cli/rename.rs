//! # rename 子命令 CLI 定义
//!
//! 批量重命名目录下的文件（正则替换 / 前缀 + 序号）
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/rename.rs`

use clap::Args;
use std::path::PathBuf;

/// rename 子命令参数
#[derive(Args, Debug)]
pub struct RenameArgs {
    /// Directory whose files will be renamed (not recursive)
    #[arg(long)]
    pub path: PathBuf,

    /// Regular expression applied to each file's base name
    #[arg(long)]
    pub pattern: Option<String>,

    /// Replacement text for pattern matches; $1 / ${name} expand captures, write $$ for a literal $
    #[arg(long)]
    pub replacement: Option<String>,

    /// Fixed prefix; renames files to <prefix><number>, overriding --pattern
    #[arg(long)]
    pub prefix: Option<String>,

    /// First sequence number used with --prefix
    #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
    pub start: i64,
}
