//! # 物理单位换算
//!
//! 原子单位到 eV 的换算常数。
//!
//! ## 依赖关系
//! - 被 `parsers/dos.rs`, `parsers/bands.rs` 使用
//! - 无外部模块依赖

/// Hartree 能量 (eV)，CODATA 2018
pub const HARTREE_TO_EV: f64 = 27.211386245988;
