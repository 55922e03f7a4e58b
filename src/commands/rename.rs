//! # rename 命令实现
//!
//! 按目录列表顺序逐个重命名普通文件。
//!
//! ## 功能
//! - 正则替换基名，扩展名保持不变
//! - 前缀 + 序号模式（覆盖正则结果）
//! - 目标已存在时报 `RenameCollision` 并终止，已完成的重命名不回滚
//!
//! ## 依赖关系
//! - 使用 `cli/rename.rs` 定义的参数
//! - 使用 `models/rename.rs`, `batch/`
//! - 使用 `utils/output.rs`

use crate::batch::FileCollector;
use crate::cli::rename::RenameArgs;
use crate::error::{FilekitError, Result};
use crate::models::{RenamePlan, RenameRules};
use crate::utils::output;

use std::fs;
use std::path::Path;

/// 重命名汇总
#[derive(Debug, Default)]
pub struct RenameSummary {
    pub renamed: Vec<RenamePlan>,
    pub unchanged: usize,
    /// 下一个未使用的序号
    pub next_sequence: i64,
}

/// 执行 rename 命令
pub fn execute(args: RenameArgs) -> Result<()> {
    output::print_header(&format!("Renaming files in {}", args.path.display()));

    let rules = RenameRules::new(
        args.pattern.as_deref(),
        args.replacement.as_deref(),
        args.prefix.as_deref(),
    )?;

    let summary = batch_rename(&args.path, &rules, args.start)?;

    output::print_done(&format!(
        "Renamed {} file(s), {} unchanged",
        summary.renamed.len(),
        summary.unchanged
    ));
    if rules.uses_sequence() && !summary.renamed.is_empty() {
        output::print_info(&format!("Next sequence number: {}", summary.next_sequence));
    }

    Ok(())
}

/// 对目录中的普通文件依次应用重命名规则
///
/// 文件列表在第一次重命名前一次性取得，保持操作系统返回的顺序。
pub fn batch_rename(dir: &Path, rules: &RenameRules, start: i64) -> Result<RenameSummary> {
    let files = FileCollector::new(dir).collect()?;

    let mut summary = RenameSummary {
        next_sequence: start,
        ..Default::default()
    };

    for path in &files {
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| {
                FilekitError::InvalidArgument(format!(
                    "File name is not valid UTF-8: {}",
                    path.display()
                ))
            })?;

        let (plan, next) = rules.plan(file_name, summary.next_sequence);
        summary.next_sequence = next;

        if !plan.is_changed() {
            summary.unchanged += 1;
            continue;
        }

        // 任一步失败即终止整个批次
        apply_plan(dir, &plan)?;
        output::print_transition(&plan.original, &plan.renamed);
        summary.renamed.push(plan);
    }

    Ok(summary)
}

/// 执行单个重命名，拒绝覆盖已存在的目标
fn apply_plan(dir: &Path, plan: &RenamePlan) -> Result<()> {
    let from = dir.join(&plan.original);
    let to = dir.join(&plan.renamed);

    if fs::symlink_metadata(&to).is_ok() {
        return Err(FilekitError::RenameCollision {
            from: from.display().to_string(),
            to: to.display().to_string(),
        });
    }

    fs::rename(&from, &to).map_err(|e| {
        FilekitError::from_rename_io(&from.display().to_string(), &to.display().to_string(), e)
    })
}
