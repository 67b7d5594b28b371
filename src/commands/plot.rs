//! # plot 命令实现
//!
//! 读取 dos2csv / bands2csv 导出的表并生成图表。
//!
//! ## 功能
//! - DOS：按扩展名输出 PNG / SVG（plotters）或交互式 HTML（plotly 模板）
//! - 能带：输出 PNG / SVG
//!
//! ## 依赖关系
//! - 使用 `cli/plot.rs` 定义的参数
//! - 使用 `export.rs` 读回 CSV
//! - 使用 `viz/` 渲染，`PlotSettings` 在此处加载一次

use crate::cli::plot::{BandsPlotArgs, DosPlotArgs, PlotArgs, PlotCommands};
use crate::error::{DatavizError, Result};
use crate::export;
use crate::models::{BandsRow, DosRow, Record, Table};
use crate::utils::output;
use crate::viz::{self, BandsPlotOptions, DosPlotOptions, PlotSettings};

use std::path::Path;

/// 执行 plot 命令
pub fn execute(args: PlotArgs) -> Result<()> {
    match args.command {
        PlotCommands::Dos(dos_args) => execute_dos(dos_args),
        PlotCommands::Bands(bands_args) => execute_bands(bands_args),
    }
}

fn is_html(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("html") || e.eq_ignore_ascii_case("htm"))
        .unwrap_or(false)
}

/// 确定要绘制的磁序：未指定时取表中全部磁序，指定的磁序必须存在
fn resolve_mag_orders<R: Record>(table: &Table<R>, requested: &[String]) -> Result<Vec<String>> {
    let available = table.mag_orders();
    if requested.is_empty() {
        return Ok(available.iter().map(|m| m.to_string()).collect());
    }

    for m in requested {
        if !available.contains(&m.as_str()) {
            return Err(DatavizError::InvalidArgument(format!(
                "magnetic order '{}' not found (available: {})",
                m,
                available.join(", ")
            )));
        }
    }
    Ok(requested.to_vec())
}

/// DOS 绘图
fn execute_dos(args: DosPlotArgs) -> Result<()> {
    output::print_header("Plotting Density of States");

    if args.xmin >= args.xmax {
        return Err(DatavizError::InvalidArgument(format!(
            "energy window is empty: xmin {} >= xmax {}",
            args.xmin, args.xmax
        )));
    }

    let table: Table<DosRow> = export::read_csv(&args.input)?;
    let mag_orders = resolve_mag_orders(&table, &args.mag_order)?;
    if mag_orders.is_empty() {
        return Err(DatavizError::PlotError("No data to plot".to_string()));
    }
    output::print_info(&format!(
        "Loaded {} rows, magnetic orders: {}",
        table.len(),
        mag_orders.join(", ")
    ));

    if is_html(&args.output) {
        let settings = PlotSettings::load(args.plot_config.as_deref())?;
        log::debug!("plot template version {}", settings.version);

        let initial = &mag_orders[0];
        let figure = viz::plotly::build_dos_figure(&table, &settings, &mag_orders, initial)?;
        viz::plotly::write_html(&figure, &args.title, &args.output)?;
        output::print_written("Interactive DOS figure", &args.output);
        return Ok(());
    }

    let opts = DosPlotOptions {
        mag_orders,
        x_range: (args.xmin, args.xmax),
        y_range: args.ymin.zip(args.ymax),
        mirror_down: args.mirror_down,
        title: args.title,
        width: args.width,
        height: args.height,
    };
    viz::plot::render_dos(&table, &opts, &args.output)?;
    output::print_written("DOS plot", &args.output);

    Ok(())
}

/// 能带绘图
fn execute_bands(args: BandsPlotArgs) -> Result<()> {
    output::print_header("Plotting Band Structure");

    if is_html(&args.output) {
        return Err(DatavizError::InvalidArgument(
            "band structure plots support .png and .svg output only".to_string(),
        ));
    }

    let table: Table<BandsRow> = export::read_csv(&args.input)?;
    let requested: Vec<String> = args.mag_order.into_iter().collect();
    let mag_order = resolve_mag_orders(&table, &requested)?
        .into_iter()
        .next()
        .ok_or_else(|| DatavizError::PlotError("No data to plot".to_string()))?;

    output::print_info(&format!(
        "Loaded {} rows, plotting magnetic order '{}'",
        table.len(),
        mag_order
    ));

    let opts = BandsPlotOptions {
        title: args
            .title
            .unwrap_or_else(|| format!("Band structure ({})", mag_order)),
        mag_order,
        y_range: args.ymin.zip(args.ymax),
        width: args.width,
        height: args.height,
    };
    viz::plot::render_bands(&table, &opts, &args.output)?;
    output::print_written("Band structure plot", &args.output);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Spin;

    fn table() -> Table<DosRow> {
        let row = |mag_order: &str| DosRow {
            energy: 0.0,
            mag_order: mag_order.to_string(),
            spin: Spin::Up,
            dos: 1.0,
        };
        Table::new(vec![row("AFM"), row("FM"), row("AFM")])
    }

    #[test]
    fn test_resolve_all_mag_orders() {
        assert_eq!(resolve_mag_orders(&table(), &[]).unwrap(), vec!["AFM", "FM"]);
    }

    #[test]
    fn test_resolve_unknown_mag_order() {
        let requested = vec!["PM".to_string()];
        assert!(matches!(
            resolve_mag_orders(&table(), &requested),
            Err(DatavizError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_is_html() {
        assert!(is_html(Path::new("dos.html")));
        assert!(!is_html(Path::new("dos.png")));
    }
}
