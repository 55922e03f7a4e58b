//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `rename`: 批量重命名
//! - `convert`: 图片格式转换
//! - `hash`: 文件哈希
//! - `merge`: Excel 合并
//! - `password`: 随机密码
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: rename, convert, hash, merge, password

pub mod convert;
pub mod hash;
pub mod merge;
pub mod password;
pub mod rename;

use clap::{Parser, Subcommand};

/// filekit - 批量文件处理工具箱
#[derive(Parser)]
#[command(name = "filekit")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(about = "Batch file utilities: rename, convert, hash, merge, password", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Rename files in a directory by regex substitution or prefix + sequence number
    Rename(rename::RenameArgs),

    /// Convert images in a directory from one format to another
    Convert(convert::ConvertArgs),

    /// Print the digest of a file
    Hash(hash::HashArgs),

    /// Merge every sheet of every Excel file in a directory
    Merge(merge::MergeArgs),

    /// Generate a random password
    Password(password::PasswordArgs),
}
