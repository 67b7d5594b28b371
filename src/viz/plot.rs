//! # 静态图表生成
//!
//! 使用 `plotters` 绘制 DOS 曲线与能带图，按输出扩展名选择 PNG 或 SVG。
//!
//! ## 功能
//! - DOS：每个磁序的 up / down 曲线，能量窗口可调，可将 down 通道取负镜像
//! - 能带：指定磁序下每条 (能带, 自旋) 的 energy-kpoint 曲线
//!
//! ## 依赖关系
//! - 被 `commands/plot.rs` 调用
//! - 使用 `models/` 的 DosRow, BandsRow
//! - 使用 `plotters` 渲染图表

use crate::error::{DatavizError, Result};
use crate::models::{BandsRow, DosRow, Spin, Table};

use plotters::prelude::*;
use std::collections::BTreeMap;
use std::path::Path;

/// DOS 图参数
#[derive(Debug, Clone)]
pub struct DosPlotOptions {
    /// 需要绘制的磁序
    pub mag_orders: Vec<String>,
    /// 能量窗口 (eV)
    pub x_range: (f64, f64),
    /// DOS 纵轴范围，None 时按数据自动确定
    pub y_range: Option<(f64, f64)>,
    /// down 通道绘制为负值
    pub mirror_down: bool,
    pub title: String,
    pub width: u32,
    pub height: u32,
}

/// 能带图参数
#[derive(Debug, Clone)]
pub struct BandsPlotOptions {
    pub mag_order: String,
    /// 能量窗口 (eV)，None 时按数据自动确定
    pub y_range: Option<(f64, f64)>,
    pub title: String,
    pub width: u32,
    pub height: u32,
}

/// 输出路径扩展名为 svg 时使用矢量后端
pub fn is_svg(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("svg"))
        .unwrap_or(false)
}

fn plot_err<E: std::fmt::Debug>(e: E) -> DatavizError {
    DatavizError::PlotError(format!("{:?}", e))
}

/// 数据范围加 5% 余量，退化区间扩展为单位宽度
fn padded(min: f64, max: f64) -> (f64, f64) {
    if max <= min {
        return (min - 0.5, max + 0.5);
    }
    let margin = (max - min) * 0.05;
    (min - margin, max + margin)
}

// ─────────────────────────────────────────────────────────────
// DOS
// ─────────────────────────────────────────────────────────────

/// 单条曲线
struct Curve {
    label: String,
    style: ShapeStyle,
    points: Vec<(f64, f64)>,
}

fn dos_curves(table: &Table<DosRow>, opts: &DosPlotOptions) -> Vec<Curve> {
    let (xmin, xmax) = opts.x_range;
    let mut curves = Vec::new();

    for (i, mag_order) in opts.mag_orders.iter().enumerate() {
        let color = Palette99::pick(i);
        for spin in Spin::ALL {
            let sign = if opts.mirror_down && spin == Spin::Down {
                -1.0
            } else {
                1.0
            };
            let points: Vec<(f64, f64)> = table
                .select(mag_order, spin)
                .filter(|r| r.energy >= xmin && r.energy <= xmax)
                .map(|r| (r.energy, sign * r.dos))
                .collect();

            let style = match spin {
                Spin::Up => color.stroke_width(2),
                Spin::Down => color.mix(0.5).stroke_width(2),
            };
            curves.push(Curve {
                label: format!("{} {}", mag_order, spin),
                style,
                points,
            });
        }
    }

    curves
}

/// 生成 DOS 图
pub fn render_dos(
    table: &Table<DosRow>,
    opts: &DosPlotOptions,
    output_path: &Path,
) -> Result<()> {
    let (w, h) = (opts.width, opts.height);
    if is_svg(output_path) {
        let root = SVGBackend::new(output_path, (w, h)).into_drawing_area();
        draw_dos_chart(&root, table, opts)?;
        root.present().map_err(plot_err)?;
    } else {
        let root = BitMapBackend::new(output_path, (w, h)).into_drawing_area();
        draw_dos_chart(&root, table, opts)?;
        root.present().map_err(plot_err)?;
    }
    Ok(())
}

fn draw_dos_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, plotters::coord::Shift>,
    table: &Table<DosRow>,
    opts: &DosPlotOptions,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    let curves = dos_curves(table, opts);
    if curves.iter().all(|c| c.points.is_empty()) {
        return Err(DatavizError::PlotError(
            "No DOS data inside the energy window".to_string(),
        ));
    }

    let (y_min, y_max) = match opts.y_range {
        Some(range) => range,
        None => {
            let ys = curves.iter().flat_map(|c| c.points.iter().map(|p| p.1));
            let (lo, hi) = ys.fold((0.0_f64, 0.0_f64), |(lo, hi), y| (lo.min(y), hi.max(y)));
            padded(lo, hi)
        }
    };

    root.fill(&WHITE).map_err(plot_err)?;

    let mut chart = ChartBuilder::on(root)
        .caption(&opts.title, ("sans-serif", 28).into_font())
        .margin(30)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d(opts.x_range.0..opts.x_range.1, y_min..y_max)
        .map_err(plot_err)?;

    chart
        .configure_mesh()
        .x_desc("Energy (eV)")
        .y_desc("DOS (states/eV/atom)")
        .x_label_style(("sans-serif", 16))
        .y_label_style(("sans-serif", 16))
        .axis_desc_style(("sans-serif", 18))
        .draw()
        .map_err(plot_err)?;

    for curve in curves.into_iter().filter(|c| !c.points.is_empty()) {
        let style = curve.style;
        chart
            .draw_series(LineSeries::new(curve.points, style))
            .map_err(plot_err)?
            .label(curve.label)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], style));
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()
        .map_err(plot_err)?;

    Ok(())
}

// ─────────────────────────────────────────────────────────────
// 能带
// ─────────────────────────────────────────────────────────────

/// 按 (自旋, 能带) 分组的 (kpoint, energy) 折线
fn band_lines(
    table: &Table<BandsRow>,
    mag_order: &str,
) -> BTreeMap<(usize, usize), Vec<(f64, f64)>> {
    let mut lines: BTreeMap<(usize, usize), Vec<(f64, f64)>> = BTreeMap::new();
    for (spin_idx, spin) in Spin::ALL.iter().enumerate() {
        for row in table.select(mag_order, *spin) {
            lines
                .entry((spin_idx, row.band))
                .or_default()
                .push((row.kpoint, row.energy));
        }
    }
    lines
}

/// 生成能带图
pub fn render_bands(
    table: &Table<BandsRow>,
    opts: &BandsPlotOptions,
    output_path: &Path,
) -> Result<()> {
    let (w, h) = (opts.width, opts.height);
    if is_svg(output_path) {
        let root = SVGBackend::new(output_path, (w, h)).into_drawing_area();
        draw_bands_chart(&root, table, opts)?;
        root.present().map_err(plot_err)?;
    } else {
        let root = BitMapBackend::new(output_path, (w, h)).into_drawing_area();
        draw_bands_chart(&root, table, opts)?;
        root.present().map_err(plot_err)?;
    }
    Ok(())
}

fn draw_bands_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, plotters::coord::Shift>,
    table: &Table<BandsRow>,
    opts: &BandsPlotOptions,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    let lines = band_lines(table, &opts.mag_order);
    if lines.is_empty() {
        return Err(DatavizError::PlotError(format!(
            "No band data for magnetic order '{}'",
            opts.mag_order
        )));
    }

    let points = || lines.values().flat_map(|l| l.iter());
    let k_min = points().map(|p| p.0).fold(f64::INFINITY, f64::min);
    let k_max = points().map(|p| p.0).fold(f64::NEG_INFINITY, f64::max);
    let (y_min, y_max) = match opts.y_range {
        Some(range) => range,
        None => padded(
            points().map(|p| p.1).fold(f64::INFINITY, f64::min),
            points().map(|p| p.1).fold(f64::NEG_INFINITY, f64::max),
        ),
    };
    let (k_min, k_max) = if k_max > k_min {
        (k_min, k_max)
    } else {
        padded(k_min, k_max)
    };

    root.fill(&WHITE).map_err(plot_err)?;

    let mut chart = ChartBuilder::on(root)
        .caption(&opts.title, ("sans-serif", 28).into_font())
        .margin(30)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(k_min..k_max, y_min..y_max)
        .map_err(plot_err)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_desc("k-point")
        .y_desc("Energy (eV)")
        .x_label_style(("sans-serif", 16))
        .y_label_style(("sans-serif", 16))
        .axis_desc_style(("sans-serif", 18))
        .draw()
        .map_err(plot_err)?;

    let up_style = RGBColor(0, 102, 204).stroke_width(1);
    let down_style = RED.mix(0.7).stroke_width(1);
    let mut labelled = [false; 2];

    for (&(spin_idx, _band), line) in &lines {
        let style = if spin_idx == 0 { up_style } else { down_style };
        let series = chart
            .draw_series(LineSeries::new(line.iter().copied(), style))
            .map_err(plot_err)?;

        if !labelled[spin_idx] {
            labelled[spin_idx] = true;
            series
                .label(Spin::ALL[spin_idx].to_string())
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], style));
        }
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()
        .map_err(plot_err)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dos_row(energy: f64, mag_order: &str, spin: Spin, dos: f64) -> DosRow {
        DosRow {
            energy,
            mag_order: mag_order.to_string(),
            spin,
            dos,
        }
    }

    #[test]
    fn test_is_svg() {
        assert!(is_svg(Path::new("dos.svg")));
        assert!(is_svg(Path::new("DOS.SVG")));
        assert!(!is_svg(Path::new("dos.png")));
        assert!(!is_svg(Path::new("dos")));
    }

    #[test]
    fn test_dos_curves_window_and_mirror() {
        let table = Table::new(vec![
            dos_row(-5.0, "FM", Spin::Up, 1.0),
            dos_row(0.0, "FM", Spin::Up, 2.0),
            dos_row(-5.0, "FM", Spin::Down, 3.0),
            dos_row(0.0, "FM", Spin::Down, 4.0),
        ]);
        let opts = DosPlotOptions {
            mag_orders: vec!["FM".to_string()],
            x_range: (-1.0, 1.0),
            y_range: None,
            mirror_down: true,
            title: String::new(),
            width: 100,
            height: 100,
        };

        let curves = dos_curves(&table, &opts);
        assert_eq!(curves.len(), 2);
        assert_eq!(curves[0].points, vec![(0.0, 2.0)]);
        assert_eq!(curves[1].points, vec![(0.0, -4.0)]);
        assert_eq!(curves[1].label, "FM down");
    }

    #[test]
    fn test_band_lines_grouping() {
        let row = |kpoint: f64, band: usize, spin: Spin, energy: f64| BandsRow {
            kpoint,
            band,
            spin,
            mag_order: "FM".to_string(),
            energy,
            weight_tot: 1.0,
            weight_s: 0.0,
            weight_p: 0.0,
            weight_d: 0.0,
            weight_f: 0.0,
        };
        let table = Table::new(vec![
            row(0.0, 1, Spin::Up, -1.0),
            row(0.5, 1, Spin::Up, -0.5),
            row(0.0, 2, Spin::Up, 1.0),
            row(0.0, 1, Spin::Down, -0.8),
        ]);

        let lines = band_lines(&table, "FM");
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[&(0, 1)], vec![(0.0, -1.0), (0.5, -0.5)]);
        assert_eq!(lines[&(1, 1)], vec![(0.0, -0.8)]);
        assert!(band_lines(&table, "AFM").is_empty());
    }

    #[test]
    fn test_padded() {
        assert_eq!(padded(0.0, 10.0), (-0.5, 10.5));
        assert_eq!(padded(1.0, 1.0), (0.5, 1.5));
    }
}
