//! # 绘图模板配置
//!
//! 读取随程序打包的 plotly 图表模板（trace / frame 骨架）。
//! 配置在命令入口处加载一次，以引用传给渲染函数，运行期间不会被修改。
//!
//! ## 依赖关系
//! - 被 `commands/plot.rs` 加载
//! - 被 `viz/plotly.rs` 使用
//! - 使用 `serde_json` 解析

use crate::error::{DatavizError, Result};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

/// 打包的默认模板
const BUNDLED_CONFIG: &str = include_str!("../../configurations/plotly_config.json");

/// 绘图模板配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlotSettings {
    /// 模板版本
    pub version: String,

    /// 图表骨架
    pub figure: FigureTemplate,
}

/// plotly 图表骨架
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FigureTemplate {
    #[serde(default)]
    pub data: Vec<Value>,

    #[serde(default)]
    pub layout: Map<String, Value>,

    #[serde(default)]
    pub frames: Vec<Value>,
}

impl PlotSettings {
    /// 加载配置：指定路径优先，否则使用打包模板
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::from_file(p),
            None => Self::bundled(),
        }
    }

    /// 打包的默认模板
    pub fn bundled() -> Result<Self> {
        Self::from_json(BUNDLED_CONFIG, "<bundled plotly_config.json>")
    }

    /// 从文件读取模板
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| DatavizError::FileReadError {
            path: path.display().to_string(),
            source: e,
        })?;
        Self::from_json(&content, &path.display().to_string())
    }

    fn from_json(content: &str, source: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| DatavizError::ConfigError {
            path: source.to_string(),
            source: e,
        })
    }
}
