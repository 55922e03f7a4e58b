//! # 批量执行器
//!
//! 在有界线程池中并行执行互相独立的单文件任务，并等待全部完成。
//!
//! ## 功能
//! - 基于 rayon 的并行迭代（专用线程池）
//! - 进度条显示
//! - 失败分类（可恢复 / 致命）与汇总报告
//!
//! ## 依赖关系
//! - 被 `commands/convert.rs`, `commands/merge.rs`, `commands/rename.rs` 调用
//! - 使用 `utils/progress.rs` 创建进度条
//! - 使用 `rayon` 进行并行计算

use crate::error::{describe, FilekitError, Result};
use crate::utils::{output, progress};

use rayon::prelude::*;
use std::path::{Path, PathBuf};

/// 单个文件处理结果
#[derive(Debug, Clone)]
pub enum ProcessResult<T = String> {
    /// 处理成功（附带输出）
    Success(T),
    /// 处理失败
    Failed(String, String), // (文件路径, 错误信息)
}

impl<T> ProcessResult<T> {
    /// 把单项结果归为可恢复：错误记为 `Failed`，批次继续
    ///
    /// 致命错误不经过这里，直接用 `?` 传播。
    pub fn recover(path: &Path, result: Result<T>) -> Self {
        match result {
            Ok(detail) => ProcessResult::Success(detail),
            Err(e) => ProcessResult::Failed(path.display().to_string(), describe(&e)),
        }
    }
}

/// 批量处理结果统计
#[derive(Debug, Default)]
pub struct BatchResult {
    /// 成功数量
    pub success: usize,
    /// 失败数量
    pub failed: usize,
    /// 失败详情
    pub failures: Vec<(String, String)>,
}

impl BatchResult {
    /// 合并处理结果
    pub fn merge(&mut self, result: ProcessResult) {
        match result {
            ProcessResult::Success(_) => self.success += 1,
            ProcessResult::Failed(path, err) => {
                self.failed += 1;
                self.failures.push((path, err));
            }
        }
    }

    /// 总处理数量
    pub fn total(&self) -> usize {
        self.success + self.failed
    }
}

/// 批量执行器
pub struct BatchRunner {
    /// 并行作业数
    jobs: usize,
}

impl BatchRunner {
    /// 创建新的批量执行器（0 表示按 CPU 数量）
    pub fn new(jobs: usize) -> Self {
        let jobs = if jobs == 0 { num_cpus::get() } else { jobs };
        Self { jobs }
    }

    pub fn jobs(&self) -> usize {
        self.jobs
    }

    /// 并行处理文件列表，阻塞直到所有任务完成
    ///
    /// 单个任务失败视为可恢复，不影响其余任务；
    /// 成功项即时打印，失败项收集在 `BatchResult::failures` 中由调用方报告。
    pub fn run<F>(&self, files: &[PathBuf], message: &str, processor: F) -> Result<BatchResult>
    where
        F: Fn(&Path) -> Result<String> + Sync + Send,
    {
        let pb = progress::create_progress_bar(files.len() as u64, message);

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.jobs)
            .build()
            .map_err(|e| FilekitError::Other(format!("Failed to start worker pool: {}", e)))?;

        let results: Vec<ProcessResult> = pool.install(|| {
            files
                .par_iter()
                .map(|file| {
                    let result = ProcessResult::recover(file, processor(file.as_path()));

                    if let ProcessResult::Success(detail) = &result {
                        pb.suspend(|| {
                            output::print_transition(&file.display().to_string(), detail)
                        });
                    }

                    pb.inc(1);
                    result
                })
                .collect()
        });

        pb.finish_and_clear();

        // 汇总结果
        let mut batch_result = BatchResult::default();
        for result in results {
            batch_result.merge(result);
        }

        Ok(batch_result)
    }
}
