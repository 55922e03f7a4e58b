//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `batch/`, `models/`, `sheets/`, `imaging/`, `checksum/`, `utils/`
//! - 子模块: rename, convert, hash, merge, password

pub mod convert;
pub mod hash;
pub mod merge;
pub mod password;
pub mod rename;

use crate::cli::Commands;
use crate::error::Result;

/// 执行命令
pub fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Rename(args) => rename::execute(args),
        Commands::Convert(args) => convert::execute(args),
        Commands::Hash(args) => hash::execute(args),
        Commands::Merge(args) => merge::execute(args),
        Commands::Password(args) => password::execute(args),
    }
}
