//! # 工作簿读取
//!
//! 使用 `calamine` 读取 .xlsx / .xls 文件中的全部工作表。
//!
//! ## 依赖关系
//! - 被 `commands/merge.rs` 调用
//! - 使用 `models/sheet.rs` 的 CellValue / RecordSet / Workbook

use crate::error::{FilekitError, Result};
use crate::models::{CellValue, RecordSet, Workbook};

use calamine::{open_workbook_auto, Data, Reader};
use std::path::Path;

/// 读取工作簿的所有工作表，第一行作为表头
pub fn read_workbook(path: &Path) -> Result<Workbook> {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string());

    let mut workbook = open_workbook_auto(path).map_err(|e| FilekitError::SpreadsheetRead {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    let mut sheets = Vec::new();
    for sheet_name in workbook.sheet_names() {
        let range =
            workbook
                .worksheet_range(&sheet_name)
                .map_err(|e| FilekitError::SpreadsheetRead {
                    path: path.display().to_string(),
                    reason: format!("sheet '{}': {}", sheet_name, e),
                })?;

        let grid: Vec<Vec<CellValue>> = range
            .rows()
            .map(|row| row.iter().map(to_cell_value).collect())
            .collect();

        sheets.push((sheet_name, RecordSet::from_grid(grid)));
    }

    Ok(Workbook { file_name, sheets })
}

fn to_cell_value(cell: &Data) -> CellValue {
    match cell {
        Data::Empty => CellValue::Empty,
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Int(i) => CellValue::Int(*i),
        Data::Float(f) => CellValue::Float(*f),
        Data::Bool(b) => CellValue::Bool(*b),
        Data::Error(e) => CellValue::Text(format!("#{:?}", e)),
        // 日期与时长保留文本形式
        other => CellValue::Text(other.to_string()),
    }
}
