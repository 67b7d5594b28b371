//! # 可视化模块
//!
//! 读取合并后的 DOS / 能带表并生成图表。
//!
//! ## 子模块
//! - `settings`: plotly 图表模板配置
//! - `plotly`: 交互式 DOS 图 (HTML)
//! - `plot`: 静态 DOS / 能带图 (PNG, SVG)
//!
//! ## 依赖关系
//! - 被 `commands/plot.rs` 使用
//! - 使用 `models/`

pub mod plot;
pub mod plotly;
pub mod settings;

pub use plot::{BandsPlotOptions, DosPlotOptions};
pub use settings::PlotSettings;
