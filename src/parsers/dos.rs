//! # 总态密度 (TDOS) 文件解析器
//!
//! ## 文件格式
//! ```text
//! energy  dos      # Hartree 单位，无表头
//! ...              # 前一半为 spin up
//! ...              # 后一半为 spin down
//! ```
//!
//! 能量乘以 Hartree→eV 换算系数，态密度除以换算系数和每胞原子数，
//! 得到 states/eV/atom。
//!
//! ## 依赖关系
//! - 被 `batch/aggregate.rs` 使用
//! - 使用 `models/dos.rs`, `units.rs`

use super::{parse_numeric_rows, read_input, rows_per_spin};
use crate::error::{DatavizError, Result};
use crate::models::{DosRow, Spin, Table};
use crate::units::HARTREE_TO_EV;
use std::path::Path;

/// 解析 TDOS 文件
pub fn parse_dos_file(
    path: &Path,
    atoms_per_cell: usize,
    mag_order: &str,
) -> Result<Table<DosRow>> {
    let content = read_input(path)?;
    parse_dos_content(
        &content,
        &path.display().to_string(),
        atoms_per_cell,
        mag_order,
    )
}

/// 从字符串内容解析 TDOS 数据
pub fn parse_dos_content(
    content: &str,
    source: &str,
    atoms_per_cell: usize,
    mag_order: &str,
) -> Result<Table<DosRow>> {
    if atoms_per_cell == 0 {
        return Err(DatavizError::DivisionConfig {
            path: source.to_string(),
            reason: "atoms per cell must be positive".to_string(),
        });
    }

    let raw = parse_numeric_rows::<2>(content, source)?;
    let per_spin = rows_per_spin(raw.len(), source)?;
    let atoms = atoms_per_cell as f64;

    let rows = raw
        .iter()
        .enumerate()
        .map(|(i, &[energy, dos])| DosRow {
            energy: energy * HARTREE_TO_EV,
            mag_order: mag_order.to_string(),
            spin: Spin::from_position(i, per_spin),
            dos: dos / HARTREE_TO_EV / atoms,
        })
        .collect();

    Ok(Table::new(rows))
}
