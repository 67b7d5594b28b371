//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `batch/`, `export.rs`, `viz/`, `utils/`
//! - 子模块: dos2csv, bands2csv, plot

pub mod bands2csv;
pub mod dos2csv;
pub mod plot;

use crate::cli::Commands;
use crate::error::{DatavizError, Result};

use std::path::Path;

/// 执行命令
pub fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Dos2csv(args) => dos2csv::execute(args),
        Commands::Bands2csv(args) => bands2csv::execute(args),
        Commands::Plot(args) => plot::execute(args),
    }
}

/// 验证数据目录存在
fn require_directory(path: &Path) -> Result<()> {
    if !path.is_dir() {
        return Err(DatavizError::DirectoryNotFound {
            path: path.display().to_string(),
        });
    }
    Ok(())
}
