//! # 并行解析执行器
//!
//! 在 rayon 线程池上并行解析互不相关的输入文件。
//!
//! ## 功能
//! - 基于 rayon 的并行迭代
//! - 结果保持输入顺序
//! - 出错时返回输入顺序中第一个失败文件的错误
//!
//! ## 依赖关系
//! - 被 `batch/aggregate.rs` 调用
//! - 使用 `rayon` 进行并行计算

use crate::error::{DatavizError, Result};

use rayon::prelude::*;

/// 并行解析执行器
pub struct ParseRunner {
    /// 并行作业数
    jobs: usize,
}

impl ParseRunner {
    /// 创建新的执行器，`jobs == 0` 时使用全部 CPU
    pub fn new(jobs: usize) -> Self {
        let jobs = if jobs == 0 { num_cpus::get() } else { jobs };
        Self { jobs }
    }

    pub fn jobs(&self) -> usize {
        self.jobs
    }

    /// 并行处理输入列表，按输入顺序返回结果
    pub fn run<S, T, F>(&self, inputs: &[S], processor: F) -> Result<Vec<T>>
    where
        S: Sync,
        T: Send,
        F: Fn(&S) -> Result<T> + Sync + Send,
    {
        // 配置 rayon 线程池
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.jobs)
            .build()
            .map_err(|e| {
                DatavizError::InvalidArgument(format!(
                    "cannot start {} worker threads: {}",
                    self.jobs, e
                ))
            })?;

        let results: Vec<Result<T>> =
            pool.install(|| inputs.par_iter().map(|input| processor(input)).collect());

        results.into_iter().collect()
    }
}
