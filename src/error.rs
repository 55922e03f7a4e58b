//! # 统一错误处理模块
//!
//! 定义 filekit 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// filekit 统一错误类型
#[derive(Error, Debug)]
pub enum FilekitError {
    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read file: {path}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Directory not found: {path}")]
    DirectoryNotFound { path: String },

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    // ─────────────────────────────────────────────────────────────
    // 重命名错误
    // ─────────────────────────────────────────────────────────────
    #[error("Rename target already exists: {from} -> {to}")]
    RenameCollision { from: String, to: String },

    #[error("Permission denied: {path}")]
    PermissionDenied { path: String },

    #[error("Invalid regular expression '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    // ─────────────────────────────────────────────────────────────
    // 格式与编解码错误
    // ─────────────────────────────────────────────────────────────
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("Image conversion failed: {path}")]
    ImageError {
        path: String,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to read spreadsheet {path}: {reason}")]
    SpreadsheetRead { path: String, reason: String },

    #[error("Failed to write spreadsheet: {path}")]
    SpreadsheetWrite {
        path: String,
        #[source]
        source: rust_xlsxwriter::XlsxError,
    },

    // ─────────────────────────────────────────────────────────────
    // 参数错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    // ─────────────────────────────────────────────────────────────
    // CSV 错误
    // ─────────────────────────────────────────────────────────────
    #[error("CSV error")]
    CsvError(#[from] csv::Error),

    // ─────────────────────────────────────────────────────────────
    // 其他
    // ─────────────────────────────────────────────────────────────
    #[error("{0}")]
    Other(String),
}

impl FilekitError {
    /// 将重命名时的 I/O 错误归类
    pub fn from_rename_io(from: &str, to: &str, err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::PermissionDenied => FilekitError::PermissionDenied {
                path: from.to_string(),
            },
            std::io::ErrorKind::AlreadyExists => FilekitError::RenameCollision {
                from: from.to_string(),
                to: to.to_string(),
            },
            _ => FilekitError::FileWriteError {
                path: to.to_string(),
                source: err,
            },
        }
    }
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, FilekitError>;

/// 将错误及其 source 链拼成一行
pub fn describe(err: &dyn std::error::Error) -> String {
    let mut msg = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        msg.push_str(": ");
        msg.push_str(&cause.to_string());
        source = cause.source();
    }
    msg.replace('\n', " ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_rename_io_classification() {
        let err =
            FilekitError::from_rename_io("a.txt", "b.txt", Error::from(ErrorKind::PermissionDenied));
        assert!(matches!(err, FilekitError::PermissionDenied { ref path } if path == "a.txt"));

        let err =
            FilekitError::from_rename_io("a.txt", "b.txt", Error::from(ErrorKind::AlreadyExists));
        assert!(matches!(err, FilekitError::RenameCollision { .. }));

        let err =
            FilekitError::from_rename_io("a.txt", "b.txt", Error::from(ErrorKind::Other));
        assert!(matches!(err, FilekitError::FileWriteError { ref path, .. } if path == "b.txt"));
    }

    #[test]
    fn test_describe_includes_source_chain() {
        let err = FilekitError::FileReadError {
            path: "data.bin".to_string(),
            source: Error::new(ErrorKind::Other, "disk on fire"),
        };
        assert_eq!(describe(&err), "Failed to read file: data.bin: disk on fire");
    }
}
