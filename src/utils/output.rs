//! # 终端输出工具
//!
//! 所有命令共用的状态前缀输出（`[OK]`、`[ERR]` 等），即本工具的日志层。
//! 设置 `NO_COLOR` 时 `colored` 自动关闭颜色。
//!
//! ## 依赖关系
//! - 被所有 `commands/` 模块与 `batch/runner.rs` 使用
//! - 使用 `colored`, `tabled` crate

use colored::Colorize;
use tabled::{Table, Tabled};

/// 打印成功消息
pub fn print_success(msg: &str) {
    println!("{} {}", "[OK]".green().bold(), msg);
}

/// 打印错误消息（stderr）
pub fn print_error(msg: &str) {
    eprintln!("{} {}", "[ERR]".red().bold(), msg);
}

/// 打印单项失败：路径 + 原因（stderr）
pub fn print_failure(path: &str, reason: &str) {
    eprintln!("{} {} {}", "[FAIL]".red().bold(), path, reason.dimmed());
}

/// 打印警告消息
pub fn print_warning(msg: &str) {
    println!("{} {}", "[WARN]".yellow().bold(), msg);
}

/// 打印信息消息
pub fn print_info(msg: &str) {
    println!("{} {}", "[*]".blue().bold(), msg);
}

/// 打印完成消息
pub fn print_done(msg: &str) {
    println!("{} {}", "[DONE]".green().bold(), msg);
}

/// 打印 "源 -> 目标"，用于重命名与格式转换
pub fn print_transition(from: &str, to: &str) {
    println!(
        "{} {} {} {}",
        "[OK]".green().bold(),
        from.dimmed(),
        "->".cyan(),
        to
    );
}

/// 打印摘要值，如 `SHA256: 9f86d0…`
pub fn print_digest(label: &str, value: &str) {
    println!("{}: {}", label.bold(), value);
}

/// 以表格形式打印行数据
pub fn print_table<T: Tabled>(rows: &[T]) {
    println!("{}", Table::new(rows));
}

/// 打印标题栏
pub fn print_header(title: &str) {
    let line = "─".repeat(60);
    println!("\n{}", line.dimmed());
    println!("  {}", title.bold());
    println!("{}\n", line.dimmed());
}
