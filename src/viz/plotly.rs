//! # 交互式 DOS 图 (plotly)
//!
//! 基于 `PlotSettings` 中的模板生成 plotly 图表：
//! - 为初始显示的磁序追加 up / down 两条 scatter 曲线
//! - 为每个磁序追加一帧（以磁序命名），并在布局中加入切换滑块
//!
//! 输出为自包含 HTML，plotly.js 从 CDN 加载。
//!
//! ## 依赖关系
//! - 被 `commands/plot.rs` 调用
//! - 使用 `viz/settings.rs`, `models/`
//! - 使用 `serde_json` 构造图表

use super::settings::PlotSettings;
use crate::error::{DatavizError, Result};
use crate::models::{DosRow, Spin, Table};

use serde_json::{json, Value};
use std::fs;
use std::path::Path;

/// plotly 默认配色
pub const DEFAULT_PLOTLY_COLORS: [&str; 10] = [
    "rgb(31, 119, 180)",
    "rgb(255, 127, 14)",
    "rgb(44, 160, 44)",
    "rgb(214, 39, 40)",
    "rgb(148, 103, 189)",
    "rgb(140, 86, 75)",
    "rgb(227, 119, 194)",
    "rgb(127, 127, 127)",
    "rgb(188, 189, 34)",
    "rgb(23, 190, 207)",
];

const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

/// 指定磁序与自旋通道的 (energy, dos) 序列
fn channel(table: &Table<DosRow>, mag_order: &str, spin: Spin) -> (Vec<f64>, Vec<f64>) {
    table.select(mag_order, spin).map(|r| (r.energy, r.dos)).unzip()
}

fn scatter(x: Vec<f64>, y: Vec<f64>, name: String, color: Option<&str>) -> Value {
    let mut trace = json!({
        "type": "scatter",
        "mode": "lines",
        "name": name,
        "x": x,
        "y": y,
    });
    if let Some(c) = color {
        trace["line"] = json!({ "color": c });
    }
    trace
}

/// 构造 DOS 动画图表
pub fn build_dos_figure(
    table: &Table<DosRow>,
    settings: &PlotSettings,
    mag_orders: &[String],
    initial: &str,
) -> Result<Value> {
    if mag_orders.is_empty() {
        return Err(DatavizError::InvalidArgument(
            "at least one magnetic order is required".to_string(),
        ));
    }

    let mut figure = settings.figure.clone();

    for spin in Spin::ALL {
        let (x, y) = channel(table, initial, spin);
        figure.data.push(scatter(
            x,
            y,
            format!("{} {}", initial, spin),
            Some(DEFAULT_PLOTLY_COLORS[0]),
        ));
    }

    for mag_order in mag_orders {
        let traces: Vec<Value> = Spin::ALL
            .iter()
            .map(|&spin| {
                let (x, y) = channel(table, mag_order, spin);
                scatter(x, y, format!("{} {}", mag_order, spin), None)
            })
            .collect();
        figure.frames.push(json!({ "data": traces, "name": mag_order }));
    }

    let steps: Vec<Value> = mag_orders
        .iter()
        .map(|m| {
            json!({
                "label": m,
                "method": "animate",
                "args": [[m], {
                    "mode": "immediate",
                    "frame": { "duration": 0, "redraw": true },
                    "transition": { "duration": 0 }
                }]
            })
        })
        .collect();
    let active = mag_orders.iter().position(|m| m == initial).unwrap_or(0);
    figure.layout.insert(
        "sliders".to_string(),
        json!([{
            "active": active,
            "currentvalue": { "prefix": "magnetic order: " },
            "steps": steps
        }]),
    );

    Ok(json!({
        "data": figure.data,
        "layout": figure.layout,
        "frames": figure.frames,
    }))
}

/// 将图表写为自包含 HTML
pub fn write_html(figure: &Value, title: &str, output_path: &Path) -> Result<()> {
    let html = format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>{title}</title>
<script src="{cdn}"></script>
</head>
<body>
<div id="dataviz-figure"></div>
<script>
const figure = {figure};
Plotly.newPlot("dataviz-figure", figure.data, figure.layout, {{ scrollZoom: false }})
    .then(() => Plotly.addFrames("dataviz-figure", figure.frames));
</script>
</body>
</html>
"#,
        title = title,
        cdn = PLOTLY_CDN,
        figure = figure,
    );

    fs::write(output_path, html).map_err(|e| DatavizError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })
}
