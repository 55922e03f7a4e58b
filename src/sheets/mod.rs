//! # 电子表格模块
//!
//! 读取工作簿并导出合并结果。
//!
//! ## 子模块
//! - `reader`: 工作簿读取 (calamine)
//! - `export`: 记录集导出 (xlsx / csv)
//!
//! ## 依赖关系
//! - 被 `commands/merge.rs` 使用
//! - 使用 `models/sheet.rs`

pub mod export;
pub mod reader;

pub use export::{stats_path, write_table, TableFormat};
pub use reader::read_workbook;
