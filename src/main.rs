//! # filekit - 批量文件处理工具箱
//!
//! 把几个零散的文件处理脚本统一成单一可执行文件。
//!
//! ## 子命令
//! - `rename`   - 批量重命名（正则替换 / 前缀 + 序号）
//! - `convert`  - 图片格式转换（并行）
//! - `hash`     - 文件哈希 (md5 / sha1 / sha256)
//! - `merge`    - 合并目录下所有 Excel 文件的所有工作表
//! - `password` - 随机密码生成
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── batch/     (文件收集与并行执行)
//!   │     ├── models/    (重命名计划、表格模型)
//!   │     ├── sheets/    (工作簿读写)
//!   │     ├── imaging/   (图片编解码)
//!   │     └── checksum/  (流式摘要)
//!   ├── utils/      (输出、进度条、密码)
//!   └── error.rs    (错误处理)
//! ```

mod batch;
mod checksum;
mod cli;
mod commands;
mod error;
mod imaging;
mod models;
mod sheets;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&error::describe(&e));
        std::process::exit(1);
    }
}
