//! # plot 子命令 CLI 定义
//!
//! 绘图统一入口，包含两个子命令：
//! - `dos`: DOS 曲线，按输出扩展名生成 PNG / SVG / 交互式 HTML
//! - `bands`: 能带图，PNG / SVG
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/plot.rs`

use clap::{Args, Subcommand};
use std::path::PathBuf;

/// plot 主命令参数
#[derive(Args, Debug)]
pub struct PlotArgs {
    #[command(subcommand)]
    pub command: PlotCommands,
}

/// plot 子命令
#[derive(Subcommand, Debug)]
pub enum PlotCommands {
    /// Plot spin-resolved DOS curves from a dos2csv table
    Dos(DosPlotArgs),

    /// Plot band structure from a bands2csv table
    Bands(BandsPlotArgs),
}

/// DOS 绘图参数
#[derive(Args, Debug)]
pub struct DosPlotArgs {
    /// CSV file produced by `dataviz dos2csv`
    pub input: PathBuf,

    /// Magnetic orders to plot (repeatable, default: all in file order)
    #[arg(short, long = "mag-order")]
    pub mag_order: Vec<String>,

    /// Lower bound of the energy window (eV)
    #[arg(long, default_value_t = -10.0, allow_negative_numbers = true)]
    pub xmin: f64,

    /// Upper bound of the energy window (eV)
    #[arg(long, default_value_t = 10.0, allow_negative_numbers = true)]
    pub xmax: f64,

    /// Lower bound of the DOS axis
    #[arg(long, requires = "ymax", allow_negative_numbers = true)]
    pub ymin: Option<f64>,

    /// Upper bound of the DOS axis
    #[arg(long, requires = "ymin", allow_negative_numbers = true)]
    pub ymax: Option<f64>,

    /// Draw the spin-down channel as negative DOS
    #[arg(long, default_value_t = false)]
    pub mirror_down: bool,

    /// Output file: .png, .svg or .html (interactive, one frame per magnetic order)
    #[arg(short, long, default_value = "dos.png")]
    pub output: PathBuf,

    /// Alternative plotly chart template (JSON) for HTML output
    #[arg(long, env = "DATAVIZ_PLOT_CONFIG")]
    pub plot_config: Option<PathBuf>,

    /// Figure width in pixels (for PNG) or points (for SVG)
    #[arg(long, default_value_t = 1000)]
    pub width: u32,

    /// Figure height in pixels (for PNG) or points (for SVG)
    #[arg(long, default_value_t = 700)]
    pub height: u32,

    /// Title for the plot
    #[arg(long, default_value = "Density of States")]
    pub title: String,
}

/// 能带绘图参数
#[derive(Args, Debug)]
pub struct BandsPlotArgs {
    /// CSV file produced by `dataviz bands2csv`
    pub input: PathBuf,

    /// Magnetic order to plot (default: first in file)
    #[arg(short, long = "mag-order")]
    pub mag_order: Option<String>,

    /// Lower bound of the energy window (eV)
    #[arg(long, requires = "ymax", allow_negative_numbers = true)]
    pub ymin: Option<f64>,

    /// Upper bound of the energy window (eV)
    #[arg(long, requires = "ymin", allow_negative_numbers = true)]
    pub ymax: Option<f64>,

    /// Output file: .png or .svg
    #[arg(short, long, default_value = "bands.png")]
    pub output: PathBuf,

    /// Figure width in pixels (for PNG) or points (for SVG)
    #[arg(long, default_value_t = 1000)]
    pub width: u32,

    /// Figure height in pixels (for PNG) or points (for SVG)
    #[arg(long, default_value_t = 700)]
    pub height: u32,

    /// Title for the plot (default: magnetic order)
    #[arg(long)]
    pub title: Option<String>,
}
