//! # 数据模型模块
//!
//! 定义重命名计划与表格合并所用的数据模型。
//!
//! ## 依赖关系
//! - 被 `commands/` 和 `sheets/` 使用
//! - 子模块: rename, sheet

pub mod rename;
pub mod sheet;

pub use rename::{RenamePlan, RenameRules};
pub use sheet::{CellValue, FileStats, MergedTable, RecordSet, Workbook};
