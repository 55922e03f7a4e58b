//! # hash 子命令 CLI 定义
//!
//! 计算单个文件的摘要
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/hash.rs`
//! - `HashAlgorithm` 被 `checksum/` 使用

use clap::{Args, ValueEnum};
use std::path::PathBuf;

/// 支持的摘要算法
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum HashAlgorithm {
    /// MD5 (128-bit)
    Md5,
    /// SHA-1 (160-bit)
    Sha1,
    /// SHA-256 (256-bit)
    Sha256,
}

impl std::fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HashAlgorithm::Md5 => write!(f, "md5"),
            HashAlgorithm::Sha1 => write!(f, "sha1"),
            HashAlgorithm::Sha256 => write!(f, "sha256"),
        }
    }
}

/// hash 子命令参数
#[derive(Args, Debug)]
pub struct HashArgs {
    /// File to hash
    #[arg(long)]
    pub path: PathBuf,

    /// Digest algorithm
    #[arg(long, value_enum, default_value_t = HashAlgorithm::Md5)]
    pub algo: HashAlgorithm,
}
