//! # 能带文件解析器
//!
//! ## 文件格式
//! ```text
//! kpoint energy w_tot w_s w_p w_d w_f   # 能量为 Hartree 单位，无表头
//! ...                                   # 前一半为 spin up
//! ...                                   # 后一半为 spin down
//! ```
//!
//! ## 能带编号
//! 每个自旋通道内第 i 行的编号为 `i / block_rows + 1`，block_rows 默认为
//! 200，与 `e_points` 无关。up 与 down 两半使用相同的编号序列。
//! 编号不得超过 `bands_per_spin = rows_per_spin / e_points`。
//!
//! ## 依赖关系
//! - 被 `batch/aggregate.rs` 使用
//! - 使用 `models/bands.rs`, `units.rs`

use super::{parse_numeric_rows, read_input, rows_per_spin};
use crate::error::{DatavizError, Result};
use crate::models::{BandsRow, Spin, Table};
use crate::units::HARTREE_TO_EV;
use std::path::Path;

/// 每个能带编号覆盖的默认行数
pub const BAND_BLOCK_ROWS: usize = 200;

/// 能带文件的分块参数
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BandLayout {
    /// 每条高对称线上的能量点数
    pub e_points: usize,
    /// 每个能带编号连续覆盖的行数
    pub block_rows: usize,
}

impl BandLayout {
    pub fn new(e_points: usize) -> Self {
        Self {
            e_points,
            block_rows: BAND_BLOCK_ROWS,
        }
    }

    /// 覆盖默认的分块行数
    pub fn with_block_rows(mut self, block_rows: usize) -> Self {
        self.block_rows = block_rows;
        self
    }

    /// 校验参数并计算每个自旋通道的能带数
    fn bands_per_spin(&self, rows_per_spin: usize, source: &str) -> Result<usize> {
        if self.e_points == 0 {
            return Err(DatavizError::DivisionConfig {
                path: source.to_string(),
                reason: "energy points per symmetry line must be positive".to_string(),
            });
        }
        if self.block_rows == 0 {
            return Err(DatavizError::DivisionConfig {
                path: source.to_string(),
                reason: "band block size must be positive".to_string(),
            });
        }
        if rows_per_spin % self.e_points != 0 {
            return Err(DatavizError::DivisionConfig {
                path: source.to_string(),
                reason: format!(
                    "{} rows per spin are not a multiple of {} energy points",
                    rows_per_spin, self.e_points
                ),
            });
        }

        let bands = rows_per_spin / self.e_points;
        if rows_per_spin > bands * self.block_rows {
            return Err(DatavizError::BandLabelOverflow {
                path: source.to_string(),
                rows_per_spin,
                bands_per_spin: bands,
                block: self.block_rows,
            });
        }
        Ok(bands)
    }
}

/// 解析能带文件
pub fn parse_bands_file(
    path: &Path,
    layout: BandLayout,
    mag_order: &str,
) -> Result<Table<BandsRow>> {
    let content = read_input(path)?;
    parse_bands_content(&content, &path.display().to_string(), layout, mag_order)
}

/// 从字符串内容解析能带数据
pub fn parse_bands_content(
    content: &str,
    source: &str,
    layout: BandLayout,
    mag_order: &str,
) -> Result<Table<BandsRow>> {
    let raw = parse_numeric_rows::<7>(content, source)?;
    let per_spin = rows_per_spin(raw.len(), source)?;
    layout.bands_per_spin(per_spin, source)?;

    let rows = raw
        .iter()
        .enumerate()
        .map(|(i, &[kpoint, energy, tot, s, p, d, f])| BandsRow {
            kpoint,
            band: (i % per_spin) / layout.block_rows + 1,
            spin: Spin::from_position(i, per_spin),
            mag_order: mag_order.to_string(),
            energy: energy * HARTREE_TO_EV,
            weight_tot: tot,
            weight_s: s,
            weight_p: p,
            weight_d: d,
            weight_f: f,
        })
        .collect();

    Ok(Table::new(rows))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bands_text(rows: usize) -> String {
        (0..rows)
            .map(|i| {
                let (k, e) = (i as f64 * 0.01, -0.5 + i as f64 * 1e-3);
                format!("{:.3} {:.4} 1.0 0.1 0.2 0.3 0.4\n", k, e)
            })
            .collect()
    }

    #[test]
    fn test_parse_bands_small_file_single_band() {
        let table =
            parse_bands_content(&bands_text(4), "bands", BandLayout::new(2), "FM").unwrap();

        assert_eq!(table.len(), 4);
        assert!(table.iter().all(|r| r.band == 1));
        let spins: Vec<Spin> = table.iter().map(|r| r.spin).collect();
        assert_eq!(spins, vec![Spin::Up, Spin::Up, Spin::Down, Spin::Down]);
    }

    #[test]
    fn test_parse_bands_columns() {
        let content = "0.25 -0.1 0.9 0.1 0.2 0.3 0.3\n0.50 0.2 0.8 0.2 0.2 0.2 0.2\n";
        let table = parse_bands_content(content, "bands", BandLayout::new(1), "AFM").unwrap();

        let row = &table.rows()[1];
        assert_eq!(row.kpoint, 0.50);
        assert_eq!(row.energy, 0.2 * HARTREE_TO_EV);
        assert_eq!(row.weight_tot, 0.8);
        assert_eq!(row.weight_f, 0.2);
        assert_eq!(row.spin, Spin::Down);
        assert_eq!(row.mag_order, "AFM");
    }

    #[test]
    fn test_parse_bands_200_row_blocks() {
        // 400 行每通道，e_points = 100 → 4 条能带，但编号按 200 行分块
        let table =
            parse_bands_content(&bands_text(800), "bands", BandLayout::new(100), "FM").unwrap();
        let rows = table.rows();

        assert_eq!(rows[0].band, 1);
        assert_eq!(rows[199].band, 1);
        assert_eq!(rows[200].band, 2);
        assert_eq!(rows[399].band, 2);
        assert_eq!(rows[400].band, 1);
        assert_eq!(rows[400].spin, Spin::Down);
        assert_eq!(rows[799].band, 2);
    }

    #[test]
    fn test_parse_bands_custom_block() {
        let layout = BandLayout::new(2).with_block_rows(2);
        let table = parse_bands_content(&bands_text(8), "bands", layout, "FM").unwrap();
        let bands: Vec<usize> = table.iter().map(|r| r.band).collect();
        assert_eq!(bands, vec![1, 1, 2, 2, 1, 1, 2, 2]);
    }

    #[test]
    fn test_parse_bands_e_points_not_dividing() {
        assert!(matches!(
            parse_bands_content(&bands_text(6), "bands", BandLayout::new(2), "FM"),
            Err(DatavizError::DivisionConfig { .. })
        ));
    }

    #[test]
    fn test_parse_bands_zero_e_points() {
        assert!(matches!(
            parse_bands_content(&bands_text(4), "bands", BandLayout::new(0), "FM"),
            Err(DatavizError::DivisionConfig { .. })
        ));
    }

    #[test]
    fn test_parse_bands_label_overflow() {
        // 600 行每通道，e_points = 300 → 2 条能带，但 200 行分块需要 3 个编号
        assert!(matches!(
            parse_bands_content(&bands_text(1200), "bands", BandLayout::new(300), "FM"),
            Err(DatavizError::BandLabelOverflow { bands_per_spin: 2, .. })
        ));
    }

    #[test]
    fn test_parse_bands_wrong_column_count() {
        assert!(matches!(
            parse_bands_content("0.0 1.0\n0.0 1.0\n", "bands", BandLayout::new(1), "FM"),
            Err(DatavizError::MalformedRow { .. })
        ));
    }
}
