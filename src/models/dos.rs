//! # 态密度 (DOS) 数据模型
//!
//! 单行 DOS 记录，能量与态密度均已换算为 eV 单位。
//!
//! ## 依赖关系
//! - 被 `parsers/dos.rs` 构造
//! - 被 `commands/dos2csv.rs`, `viz/` 使用

use super::table::{Field, Record};
use super::Spin;

use serde::{Deserialize, Serialize};

/// DOS 表中的一行，字段顺序即 CSV 列顺序
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DosRow {
    /// 能量 (eV)
    pub energy: f64,

    /// 磁序标签
    pub mag_order: String,

    /// 自旋通道
    pub spin: Spin,

    /// 态密度 (states/eV/atom)
    pub dos: f64,
}

impl Record for DosRow {
    const COLUMNS: &'static [&'static str] = &["energy", "mag_order", "spin", "dos"];

    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::Float(self.energy),
            Field::Text(&self.mag_order),
            Field::Text(self.spin.as_str()),
            Field::Float(self.dos),
        ]
    }

    fn mag_order(&self) -> &str {
        &self.mag_order
    }

    fn spin(&self) -> Spin {
        self.spin
    }
}
