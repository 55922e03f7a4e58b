//! # 表格数据导出
//!
//! 将记录集写出为 XLSX 或 CSV 文件。
//!
//! ## 支持格式
//! - XLSX: 通过 `rust_xlsxwriter` 写入单个工作表，表头加粗
//! - CSV: 通过 `csv` 写入，表头为第一行
//!
//! ## 依赖关系
//! - 被 `commands/merge.rs` 调用
//! - 使用 `models/sheet.rs` 的 RecordSet

use crate::error::{FilekitError, Result};
use crate::models::{CellValue, RecordSet};

use rust_xlsxwriter::{Format, Workbook, Worksheet, XlsxError};
use std::path::{Path, PathBuf};

/// 支持的表格输出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableFormat {
    Xlsx,
    Csv,
}

impl TableFormat {
    /// 根据输出文件扩展名确定格式
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|s| s.to_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "xlsx" => Ok(TableFormat::Xlsx),
            "csv" => Ok(TableFormat::Csv),
            _ => Err(FilekitError::UnsupportedFormat(format!(
                "Cannot write table to '{}' (expected .xlsx or .csv)",
                path.display()
            ))),
        }
    }
}

/// 统计文件路径：在扩展名前插入 `_stats`
pub fn stats_path(output: &Path) -> PathBuf {
    let stem = output
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();

    let name = match output.extension() {
        Some(ext) => format!("{}_stats.{}", stem, ext.to_string_lossy()),
        None => format!("{}_stats", stem),
    };

    output.with_file_name(name)
}

/// 按输出路径的扩展名写出记录集（整体覆盖）
pub fn write_table(set: &RecordSet, output_path: &Path) -> Result<()> {
    match TableFormat::from_path(output_path)? {
        TableFormat::Xlsx => to_xlsx(set, output_path),
        TableFormat::Csv => to_csv(set, output_path),
    }
}

/// 导出为 XLSX
pub fn to_xlsx(set: &RecordSet, output_path: &Path) -> Result<()> {
    let wrap = |e: XlsxError| FilekitError::SpreadsheetWrite {
        path: output_path.display().to_string(),
        source: e,
    };

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    let header = Format::new().set_bold();

    for (col, name) in set.columns.iter().enumerate() {
        worksheet
            .write_string_with_format(0, col as u16, name, &header)
            .map_err(wrap)?;
    }

    for (idx, row) in set.rows.iter().enumerate() {
        let row_num = (idx + 1) as u32;
        for (col, cell) in row.iter().enumerate() {
            write_cell(worksheet, row_num, col as u16, cell).map_err(wrap)?;
        }
    }

    workbook.save(output_path).map_err(wrap)?;
    Ok(())
}

fn write_cell(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    cell: &CellValue,
) -> std::result::Result<(), XlsxError> {
    match cell {
        CellValue::Empty => {}
        CellValue::Text(s) => {
            worksheet.write_string(row, col, s)?;
        }
        CellValue::Int(i) => {
            worksheet.write_number(row, col, *i as f64)?;
        }
        CellValue::Float(f) => {
            worksheet.write_number(row, col, *f)?;
        }
        CellValue::Bool(b) => {
            worksheet.write_boolean(row, col, *b)?;
        }
    }
    Ok(())
}

/// 导出为 CSV
pub fn to_csv(set: &RecordSet, output_path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path).map_err(FilekitError::CsvError)?;

    wtr.write_record(&set.columns)
        .map_err(FilekitError::CsvError)?;

    for row in &set.rows {
        wtr.write_record(row.iter().map(|cell| cell.to_string()))
            .map_err(FilekitError::CsvError)?;
    }

    wtr.flush().map_err(|e| FilekitError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(())
}
