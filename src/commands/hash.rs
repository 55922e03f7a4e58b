//! # hash 命令实现
//!
//! 计算文件摘要并以 `ALGO: hex` 形式输出。读取失败即终止。
//!
//! ## 依赖关系
//! - 使用 `cli/hash.rs` 定义的参数
//! - 使用 `checksum/`
//! - 使用 `utils/output.rs`

use crate::checksum;
use crate::cli::hash::HashArgs;
use crate::error::Result;
use crate::utils::output;

/// 执行 hash 命令
pub fn execute(args: HashArgs) -> Result<()> {
    let digest = checksum::compute_file_hash(&args.path, args.algo)?;
    output::print_digest(&args.algo.to_string().to_uppercase(), &digest);
    Ok(())
}
