//! # 能带数据模型
//!
//! 单行能带记录：k 点、能带编号、自旋、磁序、能量 (eV) 与各轨道权重。
//!
//! ## 依赖关系
//! - 被 `parsers/bands.rs` 构造
//! - 被 `commands/bands2csv.rs`, `viz/plot.rs` 使用

use super::table::{Field, Record};
use super::Spin;

use serde::{Deserialize, Serialize};

/// 能带表中的一行，字段顺序即 CSV 列顺序
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BandsRow {
    /// k 点路径坐标
    pub kpoint: f64,

    /// 能带编号，从 1 开始
    pub band: usize,

    pub spin: Spin,

    pub mag_order: String,

    /// 能量 (eV)
    pub energy: f64,

    pub weight_tot: f64,
    pub weight_s: f64,
    pub weight_p: f64,
    pub weight_d: f64,
    pub weight_f: f64,
}

impl Record for BandsRow {
    const COLUMNS: &'static [&'static str] = &[
        "kpoint",
        "band",
        "spin",
        "mag_order",
        "energy",
        "weight_tot",
        "weight_s",
        "weight_p",
        "weight_d",
        "weight_f",
    ];

    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::Float(self.kpoint),
            Field::Int(self.band as u64),
            Field::Text(self.spin.as_str()),
            Field::Text(&self.mag_order),
            Field::Float(self.energy),
            Field::Float(self.weight_tot),
            Field::Float(self.weight_s),
            Field::Float(self.weight_p),
            Field::Float(self.weight_d),
            Field::Float(self.weight_f),
        ]
    }

    fn mag_order(&self) -> &str {
        &self.mag_order
    }

    fn spin(&self) -> Spin {
        self.spin
    }
}
