//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `dos2csv`: 读取并合并 TDOS 文件，导出 CSV
//! - `bands2csv`: 读取并合并能带文件，导出 CSV
//! - `plot`: 绘图（嵌套子命令）
//!   - `dos`: DOS 曲线 (PNG/SVG/HTML)
//!   - `bands`: 能带图 (PNG/SVG)
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: convert, plot

pub mod convert;
pub mod plot;

use clap::{Parser, Subcommand};

/// dataviz - DOS 与能带数据整理和可视化工具
#[derive(Parser)]
#[command(name = "dataviz")]
#[command(author = "James K. Glasbrenner")]
#[command(version)]
#[command(
    about = "Convert density-of-states and band-structure output into CSV tables and plots",
    long_about = None
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Read total DOS files, convert to eV and save them as one CSV table
    Dos2csv(convert::Dos2CsvArgs),

    /// Read band-structure files, convert to eV and save them as one CSV table
    Bands2csv(convert::Bands2CsvArgs),

    /// Plot DOS or band-structure CSV tables
    Plot(plot::PlotArgs),
}
