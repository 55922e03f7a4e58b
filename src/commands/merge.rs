//! # merge 命令实现
//!
//! 合并目录下所有 Excel 文件的所有工作表，并输出逐文件统计。
//!
//! ## 功能
//! - 按目录顺序读取 .xlsx / .xls 的每个工作表
//! - 每行标记来源文件与来源工作表
//! - 单个文件读取失败时跳过并继续
//! - 写出合并结果与 `<输出名>_stats.<扩展名>` 统计表
//!
//! ## 依赖关系
//! - 使用 `cli/merge.rs` 定义的参数
//! - 使用 `sheets/`, `models/sheet.rs`, `batch/`
//! - 使用 `utils/output.rs`, `utils/progress.rs`

use crate::batch::{FileCollector, ProcessResult};
use crate::cli::merge::MergeArgs;
use crate::error::Result;
use crate::models::{FileStats, MergedTable};
use crate::sheets::{self, TableFormat};
use crate::utils::{output, progress};

use chrono::Local;
use std::path::{Path, PathBuf};

/// 参与合并的文件模式
const SPREADSHEET_PATTERN: &str = "*.xlsx,*.xls";

/// 合并结果汇总
#[derive(Debug)]
pub struct MergeReport {
    pub output: PathBuf,
    pub stats_output: PathBuf,
    pub merged_rows: usize,
    pub merged_sheets: usize,
    pub stats: Vec<FileStats>,
    pub failures: Vec<(String, String)>,
}

/// 执行 merge 命令
pub fn execute(args: MergeArgs) -> Result<()> {
    output::print_header("Merging Excel Files");

    let output_path = args.output.unwrap_or_else(default_output_path);

    let report = match merge_directory(&args.input, &output_path)? {
        Some(report) => report,
        None => {
            output::print_warning(&format!(
                "No spreadsheet could be processed under {}; nothing written.",
                args.input.display()
            ));
            return Ok(());
        }
    };

    output::print_done(&format!(
        "Merged {} row(s) from {} sheet(s) in {} file(s) into '{}'",
        report.merged_rows,
        report.merged_sheets,
        report.stats.len(),
        report.output.display()
    ));
    output::print_success(&format!(
        "Statistics saved to '{}'",
        report.stats_output.display()
    ));
    output::print_table(&report.stats);

    if !report.failures.is_empty() {
        output::print_warning(&format!("{} file(s) skipped", report.failures.len()));
    }

    Ok(())
}

/// 默认输出文件名，带时间戳避免覆盖
pub fn default_output_path() -> PathBuf {
    PathBuf::from(format!(
        "merged_result_{}.xlsx",
        Local::now().format("%Y%m%d_%H%M%S")
    ))
}

/// 合并目录中的所有工作簿
///
/// 没有任何可用工作表时返回 `Ok(None)` 且不写任何文件。
pub fn merge_directory(input: &Path, output_path: &Path) -> Result<Option<MergeReport>> {
    // 输出格式在读取前校验
    TableFormat::from_path(output_path)?;

    let files = FileCollector::new(input)
        .with_pattern(SPREADSHEET_PATTERN)
        .collect()?;

    let pb = progress::create_progress_bar(files.len() as u64, "Reading");

    let mut merged = MergedTable::new();
    let mut stats = Vec::new();
    let mut failures = Vec::new();

    for path in &files {
        match ProcessResult::recover(path, sheets::read_workbook(path)) {
            ProcessResult::Success(book) => {
                pb.suspend(|| output::print_success(&format!("Processed {}", book.file_name)));
                stats.push(book.stats());
                merged.append_workbook(book);
            }
            ProcessResult::Failed(file, reason) => {
                pb.suspend(|| output::print_failure(&file, &reason));
                failures.push((file, reason));
            }
        }
        pb.inc(1);
    }

    pb.finish_and_clear();

    if merged.is_empty() {
        return Ok(None);
    }

    sheets::write_table(&merged.to_record_set(), output_path)?;

    let stats_output = sheets::stats_path(output_path);
    sheets::write_table(&FileStats::to_record_set(&stats), &stats_output)?;

    Ok(Some(MergeReport {
        output: output_path.to_path_buf(),
        stats_output,
        merged_rows: merged.row_count(),
        merged_sheets: merged.row_set_count(),
        stats,
        failures,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FilekitError;
    use crate::models::sheet::{SOURCE_FILE_COLUMN, SOURCE_SHEET_COLUMN};
    use crate::models::CellValue;
    use rust_xlsxwriter::Workbook as XlsxWorkbook;
    use std::fs;
    use tempfile::tempdir;

    /// 生成单工作表文件：表头 (id, value) + `rows` 行数据
    fn write_sheet(path: &Path, sheet: &str, rows: u32) {
        let mut book = XlsxWorkbook::new();
        let ws = book.add_worksheet();
        ws.set_name(sheet).unwrap();
        ws.write_string(0, 0, "id").unwrap();
        ws.write_string(0, 1, "value").unwrap();
        for r in 1..=rows {
            ws.write_number(r, 0, r).unwrap();
            ws.write_string(r, 1, format!("{}-{}", sheet, r)).unwrap();
        }
        book.save(path).unwrap();
    }

    fn column(set: &crate::models::RecordSet, name: &str) -> usize {
        set.columns.iter().position(|c| c == name).unwrap()
    }

    #[test]
    fn test_merge_two_files() {
        let input = tempdir().unwrap();
        let out_dir = tempdir().unwrap();
        write_sheet(&input.path().join("north.xlsx"), "Q1", 3);
        write_sheet(&input.path().join("south.xlsx"), "Q2", 2);
        fs::write(input.path().join("readme.txt"), b"ignored").unwrap();

        let output = out_dir.path().join("merged.xlsx");
        let report = merge_directory(input.path(), &output).unwrap().unwrap();

        assert_eq!(report.merged_rows, 5);
        assert_eq!(report.stats.len(), 2);
        assert!(report.failures.is_empty());
        assert_eq!(report.stats_output, out_dir.path().join("merged_stats.xlsx"));

        // 读回合并结果，按来源计数（目录顺序不确定）
        let merged = sheets::read_workbook(&output).unwrap();
        let (_, set) = &merged.sheets[0];
        assert_eq!(set.len(), 5);
        let file_col = column(set, SOURCE_FILE_COLUMN);
        let sheet_col = column(set, SOURCE_SHEET_COLUMN);
        let north: Vec<_> = set
            .rows
            .iter()
            .filter(|r| r[file_col] == CellValue::from("north.xlsx"))
            .collect();
        assert_eq!(north.len(), 3);
        assert!(north.iter().all(|r| r[sheet_col] == CellValue::from("Q1")));
        let south = set
            .rows
            .iter()
            .filter(|r| {
                r[file_col] == CellValue::from("south.xlsx")
                    && r[sheet_col] == CellValue::from("Q2")
            })
            .count();
        assert_eq!(south, 2);

        // 统计表：两行，分别对应各文件
        let stats = sheets::read_workbook(&report.stats_output).unwrap();
        let (_, stats_set) = &stats.sheets[0];
        assert_eq!(stats_set.columns, vec!["filename", "sheets", "total_rows"]);
        assert_eq!(stats_set.len(), 2);
        for row in &stats_set.rows {
            let expected_rows = match row[0].to_string().as_str() {
                "north.xlsx" => 3.0,
                "south.xlsx" => 2.0,
                other => panic!("unexpected file {}", other),
            };
            assert_eq!(row[1], CellValue::Float(1.0));
            assert_eq!(row[2], CellValue::Float(expected_rows));
        }
    }

    #[test]
    fn test_multi_sheet_file_counts() {
        let input = tempdir().unwrap();
        let out_dir = tempdir().unwrap();

        let mut book = XlsxWorkbook::new();
        for (name, rows) in [("A", 2u32), ("B", 4u32)] {
            let ws = book.add_worksheet();
            ws.set_name(name).unwrap();
            ws.write_string(0, 0, "k").unwrap();
            for r in 1..=rows {
                ws.write_number(r, 0, r).unwrap();
            }
        }
        book.save(input.path().join("multi.xlsx")).unwrap();

        let output = out_dir.path().join("all.csv");
        let report = merge_directory(input.path(), &output).unwrap().unwrap();

        assert_eq!(report.merged_rows, 6);
        assert_eq!(report.merged_sheets, 2);
        assert_eq!(
            report.stats,
            vec![FileStats {
                filename: "multi.xlsx".to_string(),
                sheets: 2,
                total_rows: 6,
            }]
        );

        let csv_text = fs::read_to_string(&output).unwrap();
        let mut lines = csv_text.lines();
        assert_eq!(lines.next(), Some("k,source_file,source_sheet"));
        assert_eq!(lines.next(), Some("1,multi.xlsx,A"));
        assert_eq!(csv_text.lines().count(), 7);
        assert!(out_dir.path().join("all_stats.csv").exists());
    }

    #[test]
    fn test_corrupt_file_is_skipped() {
        let input = tempdir().unwrap();
        let out_dir = tempdir().unwrap();
        write_sheet(&input.path().join("good.xlsx"), "Sheet1", 2);
        fs::write(input.path().join("bad.xlsx"), b"not a workbook").unwrap();

        let output = out_dir.path().join("merged.xlsx");
        let report = merge_directory(input.path(), &output).unwrap().unwrap();

        assert_eq!(report.merged_rows, 2);
        assert_eq!(report.stats.len(), 1);
        assert_eq!(report.failures.len(), 1);
        assert!(report.failures[0].0.ends_with("bad.xlsx"));
    }

    #[test]
    fn test_nothing_to_merge_writes_nothing() {
        let input = tempdir().unwrap();
        let out_dir = tempdir().unwrap();
        fs::write(input.path().join("bad.xls"), b"junk").unwrap();

        let output = out_dir.path().join("merged.xlsx");
        assert!(merge_directory(input.path(), &output).unwrap().is_none());
        assert!(!output.exists());
        assert!(!out_dir.path().join("merged_stats.xlsx").exists());
    }

    #[test]
    fn test_unsupported_output_rejected_before_reading() {
        let input = tempdir().unwrap();
        let err = merge_directory(input.path(), Path::new("out.json")).unwrap_err();
        assert!(matches!(err, FilekitError::UnsupportedFormat(_)));
    }

    #[test]
    fn test_default_output_path_shape() {
        let name = default_output_path().display().to_string();
        assert!(name.starts_with("merged_result_"));
        assert!(name.ends_with(".xlsx"));
        // merged_result_YYYYmmdd_HHMMSS.xlsx
        assert_eq!(name.len(), "merged_result_".len() + 15 + ".xlsx".len());
    }
}
