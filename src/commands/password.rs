//! # password 命令实现
//!
//! ## 依赖关系
//! - 使用 `cli/password.rs` 定义的参数
//! - 使用 `utils/password.rs`, `utils/output.rs`

use crate::cli::password::PasswordArgs;
use crate::error::Result;
use crate::utils::{output, password};

/// 执行 password 命令
pub fn execute(args: PasswordArgs) -> Result<()> {
    let generated = password::generate_password(args.length);
    output::print_success(&format!("Generated password: {}", generated));
    Ok(())
}
