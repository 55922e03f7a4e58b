//! # 表格数据模型
//!
//! 合并电子表格时使用的单元格、记录集与合并结果。
//!
//! ## 依赖关系
//! - 被 `sheets/` 和 `commands/merge.rs` 使用
//! - 无外部模块依赖

use std::collections::{HashMap, HashSet};
use std::fmt;
use tabled::Tabled;

/// 来源文件列名
pub const SOURCE_FILE_COLUMN: &str = "source_file";
/// 来源工作表列名
pub const SOURCE_SHEET_COLUMN: &str = "source_sheet";

/// 单元格值
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellValue {
    #[default]
    Empty,
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Text(s) => write!(f, "{}", s),
            CellValue::Int(i) => write!(f, "{}", i),
            CellValue::Float(x) => write!(f, "{}", x),
            CellValue::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

/// 带表头的记录集
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordSet {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
}

impl RecordSet {
    /// 以第一行作为表头构建记录集
    ///
    /// 空表头命名为 `Unnamed: <列号>`，重复表头依次加 `.1`、`.2` 后缀。
    pub fn from_grid(mut grid: Vec<Vec<CellValue>>) -> Self {
        if grid.is_empty() {
            return Self::default();
        }

        let header = grid.remove(0);
        let width = grid.iter().map(Vec::len).fold(header.len(), usize::max);

        let mut seen: HashSet<String> = HashSet::new();
        let mut columns = Vec::with_capacity(width);
        for idx in 0..width {
            let raw = header.get(idx).map(|c| c.to_string()).unwrap_or_default();
            let base = if raw.trim().is_empty() {
                format!("Unnamed: {}", idx)
            } else {
                raw
            };

            let mut name = base.clone();
            let mut suffix = 1;
            while seen.contains(&name) {
                name = format!("{}.{}", base, suffix);
                suffix += 1;
            }
            seen.insert(name.clone());
            columns.push(name);
        }

        let rows = grid
            .into_iter()
            .map(|mut row| {
                row.resize(width, CellValue::Empty);
                row
            })
            .collect();

        Self { columns, rows }
    }

    /// 数据行数（不含表头）
    pub fn len(&self) -> usize {
        self.rows.len()
    }
}

/// 一个工作簿中读取到的所有工作表
#[derive(Debug, Clone)]
pub struct Workbook {
    pub file_name: String,
    pub sheets: Vec<(String, RecordSet)>,
}

impl Workbook {
    pub fn stats(&self) -> FileStats {
        FileStats {
            filename: self.file_name.clone(),
            sheets: self.sheets.len(),
            total_rows: self.sheets.iter().map(|(_, set)| set.len()).sum(),
        }
    }
}

/// 单个文件的统计信息
#[derive(Debug, Clone, PartialEq, Eq, Tabled)]
pub struct FileStats {
    #[tabled(rename = "File")]
    pub filename: String,
    #[tabled(rename = "Sheets")]
    pub sheets: usize,
    #[tabled(rename = "Rows")]
    pub total_rows: usize,
}

impl FileStats {
    /// 将统计列表转为可导出的记录集
    pub fn to_record_set(stats: &[FileStats]) -> RecordSet {
        RecordSet {
            columns: vec![
                "filename".to_string(),
                "sheets".to_string(),
                "total_rows".to_string(),
            ],
            rows: stats
                .iter()
                .map(|s| {
                    vec![
                        CellValue::Text(s.filename.clone()),
                        CellValue::Int(s.sheets as i64),
                        CellValue::Int(s.total_rows as i64),
                    ]
                })
                .collect(),
        }
    }
}

/// 带来源标记的一行
#[derive(Debug, Clone)]
struct TaggedRow {
    source_file: String,
    source_sheet: String,
    values: Vec<(usize, CellValue)>,
}

/// 按遇到顺序拼接的合并表
///
/// 列为所有表头的并集（按首次出现顺序），最后追加来源文件与来源工作表两列。
/// 源表中与这两列同名的列被来源标记覆盖。
#[derive(Debug, Default)]
pub struct MergedTable {
    columns: Vec<String>,
    index: HashMap<String, usize>,
    rows: Vec<TaggedRow>,
    row_sets: usize,
}

impl MergedTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// 追加一个工作表的记录集
    pub fn append(&mut self, source_file: &str, source_sheet: &str, set: RecordSet) {
        let slots: Vec<Option<usize>> = set
            .columns
            .into_iter()
            .map(|column| {
                if column == SOURCE_FILE_COLUMN || column == SOURCE_SHEET_COLUMN {
                    None
                } else {
                    Some(self.column_slot(column))
                }
            })
            .collect();

        for row in set.rows {
            let values = slots
                .iter()
                .zip(row)
                .filter_map(|(slot, value)| slot.map(|s| (s, value)))
                .collect();
            self.rows.push(TaggedRow {
                source_file: source_file.to_string(),
                source_sheet: source_sheet.to_string(),
                values,
            });
        }

        self.row_sets += 1;
    }

    /// 追加工作簿中的全部工作表
    pub fn append_workbook(&mut self, book: Workbook) {
        let file_name = book.file_name;
        for (sheet_name, set) in book.sheets {
            self.append(&file_name, &sheet_name, set);
        }
    }

    fn column_slot(&mut self, column: String) -> usize {
        if let Some(&slot) = self.index.get(&column) {
            return slot;
        }
        let slot = self.columns.len();
        self.index.insert(column.clone(), slot);
        self.columns.push(column);
        slot
    }

    /// 已追加的记录集数量
    pub fn row_set_count(&self) -> usize {
        self.row_sets
    }

    /// 合并后的数据行数
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// 是否没有任何记录集
    pub fn is_empty(&self) -> bool {
        self.row_sets == 0
    }

    /// 展开为对齐后的记录集
    pub fn to_record_set(&self) -> RecordSet {
        let width = self.columns.len();

        let mut columns = self.columns.clone();
        columns.push(SOURCE_FILE_COLUMN.to_string());
        columns.push(SOURCE_SHEET_COLUMN.to_string());

        let rows = self
            .rows
            .iter()
            .map(|tagged| {
                let mut row = vec![CellValue::Empty; width];
                for (slot, value) in &tagged.values {
                    row[*slot] = value.clone();
                }
                row.push(CellValue::Text(tagged.source_file.clone()));
                row.push(CellValue::Text(tagged.source_sheet.clone()));
                row
            })
            .collect();

        RecordSet { columns, rows }
    }
}
