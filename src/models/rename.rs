//! # 重命名规则与计划
//!
//! 描述单个文件的重命名决策：基名替换、前缀 + 序号、扩展名保持不变。
//!
//! ## 依赖关系
//! - 被 `commands/rename.rs` 使用
//! - 使用 `regex` 进行基名替换

use crate::error::{FilekitError, Result};

use regex::Regex;

/// 将文件名拆分为 (基名, 扩展名)
///
/// 扩展名包含前导 `.`；文件名开头的连续 `.` 不视为扩展名分隔符，
/// 因此 `.bashrc` 没有扩展名，`archive.tar.gz` 拆为 `archive.tar` 与 `.gz`。
pub fn split_extension(file_name: &str) -> (&str, &str) {
    let leading_dots = file_name.len() - file_name.trim_start_matches('.').len();

    match file_name[leading_dots..].rfind('.') {
        Some(pos) => file_name.split_at(leading_dots + pos),
        None => (file_name, ""),
    }
}

/// 重命名规则
#[derive(Debug)]
pub struct RenameRules {
    /// 作用于基名的正则
    pattern: Option<Regex>,
    /// 替换文本（未提供时为空串）
    replacement: String,
    /// 固定前缀，启用后覆盖正则替换结果
    prefix: Option<String>,
}

/// 单个文件的重命名计划
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenamePlan {
    pub original: String,
    pub renamed: String,
}

impl RenamePlan {
    /// 新旧文件名是否不同
    pub fn is_changed(&self) -> bool {
        self.original != self.renamed
    }
}

impl RenameRules {
    /// 构建规则，空字符串的 pattern / prefix 视为未提供
    pub fn new(
        pattern: Option<&str>,
        replacement: Option<&str>,
        prefix: Option<&str>,
    ) -> Result<Self> {
        let pattern = match pattern.filter(|p| !p.is_empty()) {
            Some(p) => Some(Regex::new(p).map_err(|e| FilekitError::InvalidPattern {
                pattern: p.to_string(),
                reason: e.to_string(),
            })?),
            None => None,
        };

        Ok(Self {
            pattern,
            replacement: replacement.unwrap_or_default().to_string(),
            prefix: prefix.filter(|p| !p.is_empty()).map(str::to_string),
        })
    }

    /// 是否启用前缀 + 序号模式
    pub fn uses_sequence(&self) -> bool {
        self.prefix.is_some()
    }

    /// 计算一个文件的新名字，返回计划与下一个序号
    ///
    /// 仅在前缀模式下消耗序号。前缀与正则同时给出时，正则替换照常执行，
    /// 但结果被前缀名覆盖。
    pub fn plan(&self, file_name: &str, sequence: i64) -> (RenamePlan, i64) {
        let (base, ext) = split_extension(file_name);

        let mut name = match &self.pattern {
            Some(re) => re.replace_all(base, self.replacement.as_str()).into_owned(),
            None => base.to_string(),
        };

        let mut next = sequence;
        if let Some(prefix) = &self.prefix {
            name = format!("{}{}", prefix, sequence);
            next += 1;
        }

        let plan = RenamePlan {
            original: file_name.to_string(),
            renamed: format!("{}{}", name, ext),
        };
        (plan, next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_extension() {
        assert_eq!(split_extension("photo.jpg"), ("photo", ".jpg"));
        assert_eq!(split_extension("archive.tar.gz"), ("archive.tar", ".gz"));
        assert_eq!(split_extension("README"), ("README", ""));
        assert_eq!(split_extension(".bashrc"), (".bashrc", ""));
        assert_eq!(split_extension("..hidden.txt"), ("..hidden", ".txt"));
        assert_eq!(split_extension("name."), ("name", "."));
        assert_eq!(split_extension(""), ("", ""));
    }

    #[test]
    fn test_pattern_substitution_keeps_extension() {
        let rules = RenameRules::new(Some(r"\s+"), Some("_"), None).unwrap();
        let (plan, next) = rules.plan("my holiday photo.v2.png", 1);
        assert_eq!(plan.renamed, "my_holiday_photo.v2.png");
        assert_eq!(next, 1);
        assert!(plan.is_changed());
    }

    #[test]
    fn test_pattern_does_not_touch_extension() {
        let rules = RenameRules::new(Some("txt"), Some("log"), None).unwrap();
        let (plan, _) = rules.plan("txt_notes.txt", 1);
        assert_eq!(plan.renamed, "log_notes.txt");
    }

    #[test]
    fn test_replacement_dollar_escapes() {
        let rules = RenameRules::new(Some(r"(\w+)-usd"), Some("${1}_US$$"), None).unwrap();
        let (plan, _) = rules.plan("price-usd.csv", 1);
        assert_eq!(plan.renamed, "price_US$.csv");
    }

    #[test]
    fn test_missing_replacement_deletes_matches() {
        let rules = RenameRules::new(Some(r"\d+"), None, None).unwrap();
        let (plan, _) = rules.plan("IMG_0042.JPG", 1);
        assert_eq!(plan.renamed, "IMG_.JPG");
    }

    #[test]
    fn test_capture_group_replacement() {
        let rules = RenameRules::new(Some(r"(\w+)-(\d+)"), Some("${2}_$1"), None).unwrap();
        let (plan, _) = rules.plan("scan-7.pdf", 1);
        assert_eq!(plan.renamed, "7_scan.pdf");
    }

    #[test]
    fn test_prefix_sequence_threads_counter() {
        let rules = RenameRules::new(None, None, Some("img_")).unwrap();
        let (first, next) = rules.plan("a.png", 5);
        let (second, next) = rules.plan("b.jpeg", next);
        assert_eq!(first.renamed, "img_5.png");
        assert_eq!(second.renamed, "img_6.jpeg");
        assert_eq!(next, 7);
    }

    #[test]
    fn test_prefix_overrides_pattern() {
        let rules = RenameRules::new(Some("draft"), Some("final"), Some("doc")).unwrap();
        let (plan, next) = rules.plan("draft_report.docx", 1);
        assert_eq!(plan.renamed, "doc1.docx");
        assert_eq!(next, 2);
    }

    #[test]
    fn test_negative_start() {
        let rules = RenameRules::new(None, None, Some("n")).unwrap();
        let (plan, next) = rules.plan("x.txt", -1);
        assert_eq!(plan.renamed, "n-1.txt");
        assert_eq!(next, 0);
    }

    #[test]
    fn test_empty_options_are_ignored() {
        let rules = RenameRules::new(Some(""), Some("x"), Some("")).unwrap();
        assert!(!rules.uses_sequence());
        let (plan, next) = rules.plan("keep.me", 3);
        assert!(!plan.is_changed());
        assert_eq!(next, 3);
    }

    #[test]
    fn test_invalid_pattern() {
        let err = RenameRules::new(Some("(unclosed"), None, None).unwrap_err();
        assert!(matches!(err, FilekitError::InvalidPattern { .. }));
    }
}
