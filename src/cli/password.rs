//! # password 子命令 CLI 定义
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/password.rs`

use crate::utils::password::DEFAULT_LENGTH;
use clap::Args;

/// password 子命令参数
#[derive(Args, Debug)]
pub struct PasswordArgs {
    /// Number of characters to generate
    #[arg(long, default_value_t = DEFAULT_LENGTH)]
    pub length: usize,
}
