//! # 批量读取模块
//!
//! 将多个输入文件解析并合并为一张总表。
//!
//! ## 功能
//! - 解析 (文件名, 参数, 磁序) 三元组
//! - 并行解析各文件
//! - 按输入顺序外连接合并
//!
//! ## 依赖关系
//! - 被 `commands/` 模块使用
//! - 使用 `rayon` 进行并行处理

pub mod aggregate;
pub mod runner;

pub use aggregate::{read_bands, read_dos, FileSpec};
pub use runner::ParseRunner;
