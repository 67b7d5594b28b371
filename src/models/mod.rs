//! # 数据模型模块
//!
//! 定义 DOS 与能带的强类型记录，以及通用的有序表和外连接。
//!
//! ## 依赖关系
//! - 被 `parsers/`, `batch/`, `commands/`, `viz/` 使用
//! - 子模块: spin, table, dos, bands

pub mod bands;
pub mod dos;
pub mod spin;
pub mod table;

pub use bands::BandsRow;
pub use dos::DosRow;
pub use spin::Spin;
pub use table::{combine, Record, Table};
