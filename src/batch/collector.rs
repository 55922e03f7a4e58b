//! # 文件收集器
//!
//! 列出目录下（不递归）匹配模式的普通文件。
//!
//! ## 功能
//! - glob 模式匹配（逗号分隔多模式）
//! - 默认保持操作系统返回的目录顺序，可选排序
//! - 跟随符号链接判断是否为普通文件，悬空链接跳过
//! - 目录本身无法读取时报错（权限不足为 `PermissionDenied`）
//!
//! ## 依赖关系
//! - 被 `commands/rename.rs`, `commands/convert.rs`, `commands/merge.rs` 调用
//! - 使用 `walkdir` 遍历目录, `glob` 匹配文件名

use crate::error::{FilekitError, Result};

use glob::Pattern;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 文件收集器
pub struct FileCollector {
    /// 输入目录
    input: PathBuf,
    /// 匹配模式列表
    patterns: Vec<String>,
    /// 是否按路径排序
    sorted: bool,
}

impl FileCollector {
    /// 创建新的文件收集器
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            patterns: vec!["*".to_string()],
            sorted: false,
        }
    }

    /// 设置匹配模式（逗号分隔的多模式）
    pub fn with_pattern(mut self, pattern: &str) -> Self {
        self.patterns = pattern
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        if self.patterns.is_empty() {
            self.patterns = vec!["*".to_string()];
        }
        self
    }

    /// 设置是否排序
    pub fn sorted(mut self, sorted: bool) -> Self {
        self.sorted = sorted;
        self
    }

    /// 收集所有匹配的文件
    pub fn collect(&self) -> Result<Vec<PathBuf>> {
        if !self.input.is_dir() {
            return Err(FilekitError::DirectoryNotFound {
                path: self.input.display().to_string(),
            });
        }

        let patterns = self.compile_patterns()?;

        let walker = WalkDir::new(&self.input)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true);

        let mut files = Vec::new();
        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) if Self::is_dangling_entry(&e) => continue,
                Err(e) => return Err(self.listing_error(e)),
            };
            if entry.file_type().is_file() && Self::matches(&patterns, entry.path()) {
                files.push(entry.into_path());
            }
        }

        if self.sorted {
            files.sort();
        }
        Ok(files)
    }

    fn compile_patterns(&self) -> Result<Vec<Pattern>> {
        self.patterns
            .iter()
            .map(|p| {
                Pattern::new(p).map_err(|e| {
                    FilekitError::InvalidArgument(format!("Invalid pattern '{}': {}", p, e))
                })
            })
            .collect()
    }

    /// 检查文件名是否匹配任一模式
    ///
    /// 非 UTF-8 文件名按替换字符后的形式匹配，`*` 仍能选中它们。
    fn matches(patterns: &[Pattern], path: &Path) -> bool {
        let filename = match path.file_name() {
            Some(name) => name.to_string_lossy(),
            None => return false,
        };

        patterns.iter().any(|p| p.matches(&filename))
    }

    /// 目录内悬空的符号链接或链接环，跳过即可
    fn is_dangling_entry(err: &walkdir::Error) -> bool {
        err.depth() > 0
            && (err.loop_ancestor().is_some()
                || err.io_error().map(|e| e.kind()) == Some(ErrorKind::NotFound))
    }

    fn listing_error(&self, err: walkdir::Error) -> FilekitError {
        let path = err.path().unwrap_or(self.input.as_path()).display().to_string();
        match err.into_io_error() {
            Some(io) if io.kind() == ErrorKind::PermissionDenied => {
                FilekitError::PermissionDenied { path }
            }
            Some(io) => FilekitError::FileReadError { path, source: io },
            None => FilekitError::Other(format!("Failed to list {}", path)),
        }
    }
}

/// 构造"以 .ext 结尾"的 glob 模式
pub fn extension_pattern(ext: &str) -> String {
    format!("*.{}", Pattern::escape(ext.trim_start_matches('.')))
}
