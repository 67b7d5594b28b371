//! # CSV 导入导出
//!
//! 将合并后的表写为 CSV（首行为表头，无索引列），或把已导出的 CSV
//! 读回为强类型表供绘图使用。
//!
//! ## 依赖关系
//! - 被 `commands/` 调用
//! - 使用 `models/table.rs`
//! - 使用 `csv` 与 `serde` 读写

use crate::error::{DatavizError, Result};
use crate::models::{Record, Table};

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::Path;

/// 导出表为 CSV
pub fn write_csv<R: Record + Serialize>(table: &Table<R>, output_path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path)?;

    // 空表不会触发 serde 写表头，这里显式写出
    if table.is_empty() {
        wtr.write_record(R::COLUMNS)?;
    }

    for row in table.iter() {
        wtr.serialize(row)?;
    }

    wtr.flush().map_err(|e| DatavizError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(())
}

/// 读取之前导出的 CSV
pub fn read_csv<R: Record + DeserializeOwned>(input_path: &Path) -> Result<Table<R>> {
    if !input_path.exists() {
        return Err(DatavizError::FileNotFound {
            path: input_path.display().to_string(),
        });
    }

    let mut rdr = csv::Reader::from_path(input_path)?;
    let rows = rdr
        .deserialize()
        .collect::<std::result::Result<Vec<R>, csv::Error>>()?;

    Ok(Table::new(rows))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BandsRow, DosRow, Spin};
    use std::fs;

    fn temp_path(name: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join("dataviz-export");
        fs::create_dir_all(&dir).unwrap();
        dir.join(name)
    }

    #[test]
    fn test_dos_csv_header_order() {
        let table = Table::new(vec![DosRow {
            energy: 1.5,
            mag_order: "FM".to_string(),
            spin: Spin::Up,
            dos: 0.25,
        }]);
        let path = temp_path("dos.csv");
        write_csv(&table, &path).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("energy,mag_order,spin,dos"));
        assert_eq!(lines.next(), Some("1.5,FM,up,0.25"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_bands_csv_header_order() {
        let table = Table::new(vec![BandsRow {
            kpoint: 0.5,
            band: 3,
            spin: Spin::Down,
            mag_order: "AFM".to_string(),
            energy: -1.0,
            weight_tot: 1.0,
            weight_s: 0.1,
            weight_p: 0.2,
            weight_d: 0.3,
            weight_f: 0.4,
        }]);
        let path = temp_path("bands.csv");
        write_csv(&table, &path).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        let header = text.lines().next().unwrap();
        assert_eq!(header, BandsRow::COLUMNS.join(","));
        assert!(text.contains("0.5,3,down,AFM,-1.0,1.0,0.1,0.2,0.3,0.4"));
    }

    #[test]
    fn test_empty_table_writes_header() {
        let table: Table<DosRow> = Table::new(Vec::new());
        let path = temp_path("empty.csv");
        write_csv(&table, &path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap().trim_end(), "energy,mag_order,spin,dos");
    }

    #[test]
    fn test_read_back_dos() {
        let path = temp_path("read_back.csv");
        fs::write(&path, "energy,mag_order,spin,dos\n-2.0,FM,up,0.1\n-2.0,FM,down,0.2\n").unwrap();

        let table: Table<DosRow> = read_csv(&path).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.rows()[1].spin, Spin::Down);
        assert_eq!(table.rows()[1].dos, 0.2);
    }
}
