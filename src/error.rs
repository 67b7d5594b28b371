//! # 统一错误处理模块
//!
//! 定义 dataviz 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// dataviz 统一错误类型
#[derive(Error, Debug)]
pub enum DatavizError {
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
    // 解析错误
    // ─────────────────────────────────────────────────────────────
    #[error("Malformed row in {path} at line {line}: {reason}")]
    MalformedRow {
        path: String,
        line: usize,
        reason: String,
    },

    #[error("File contains no data rows: {path}")]
    EmptyFile { path: String },

    #[error("Cannot split {rows} rows of {path} into spin up/down halves (row count is odd)")]
    OddRowCount { path: String, rows: usize },

    #[error("Invalid division parameter for {path}: {reason}")]
    DivisionConfig { path: String, reason: String },

    #[error(
        "Band labels overflow in {path}: {rows_per_spin} rows per spin need more than \
         {bands_per_spin} bands of {block} rows"
    )]
    BandLabelOverflow {
        path: String,
        rows_per_spin: usize,
        bands_per_spin: usize,
        block: usize,
    },

    // ─────────────────────────────────────────────────────────────
    // 合并错误
    // ─────────────────────────────────────────────────────────────
    #[error("No input files given, nothing to combine")]
    EmptyInputSet,

    #[error("Cannot merge column '{column}': {left} on the left, {right} on the right")]
    MergeConflict {
        column: String,
        left: String,
        right: String,
    },

    // ─────────────────────────────────────────────────────────────
    // 参数与配置错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid plot configuration: {path}")]
    ConfigError {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    // ─────────────────────────────────────────────────────────────
    // 输出错误
    // ─────────────────────────────────────────────────────────────
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Plot rendering failed: {0}")]
    PlotError(String),
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, DatavizError>;
