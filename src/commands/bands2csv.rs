//! # bands2csv 命令实现
//!
//! 读取多个能带文件，换算为 eV，标注自旋、能带编号和磁序后合并导出为 CSV。
//!
//! ## 依赖关系
//! - 使用 `cli/convert.rs` 定义的参数
//! - 使用 `batch/`, `export.rs`
//! - 使用 `utils/output.rs`, `utils/progress.rs`

use super::require_directory;
use crate::batch::{self, FileSpec, ParseRunner};
use crate::cli::convert::Bands2CsvArgs;
use crate::error::Result;
use crate::export;
use crate::models::{BandsRow, Spin, Table};
use crate::utils::{output, progress};

use tabled::{Table as TextTable, Tabled};

/// 汇总表格行
#[derive(Debug, Clone, Tabled)]
struct SummaryRow {
    #[tabled(rename = "Magnetic order")]
    mag_order: String,
    #[tabled(rename = "Spin")]
    spin: Spin,
    #[tabled(rename = "Rows")]
    rows: usize,
    #[tabled(rename = "Bands")]
    bands: usize,
    #[tabled(rename = "Energy range (eV)")]
    energy_range: String,
}

/// 执行 bands2csv
pub fn execute(args: Bands2CsvArgs) -> Result<()> {
    output::print_header("Converting Band-Structure Data");

    require_directory(&args.path)?;

    let specs = FileSpec::<usize>::from_triples(&args.infile, "E_POINTS")?;
    let runner = ParseRunner::new(args.jobs);
    log::debug!(
        "bands2csv: {:?}, block {} rows, {} jobs",
        specs,
        args.band_block,
        runner.jobs()
    );

    output::print_info(&format!(
        "Reading {} band file(s) from '{}'",
        specs.len(),
        args.path.display()
    ));
    if args.band_block != crate::parsers::bands::BAND_BLOCK_ROWS {
        output::print_warning(&format!(
            "Band labels use {} rows per block instead of the default",
            args.band_block
        ));
    }

    let pb = progress::create_spinner("Parsing and merging");
    let result = batch::read_bands(&args.path, &specs, args.band_block, &runner);
    pb.finish_and_clear();
    let table = result?;

    output::print_success(&format!("Combined table has {} rows", table.len()));
    println!("{}", TextTable::new(summarize(&table)));

    export::write_csv(&table, &args.output)?;
    output::print_written("Bands table", &args.output);

    Ok(())
}

/// 按 (磁序, 自旋) 汇总
fn summarize(table: &Table<BandsRow>) -> Vec<SummaryRow> {
    let mut rows = Vec::new();

    for mag_order in table.mag_orders() {
        for spin in Spin::ALL {
            let channel: Vec<&BandsRow> = table.select(mag_order, spin).collect();
            if channel.is_empty() {
                continue;
            }

            let e_min = channel.iter().map(|r| r.energy).fold(f64::INFINITY, f64::min);
            let e_max = channel.iter().map(|r| r.energy).fold(f64::NEG_INFINITY, f64::max);

            rows.push(SummaryRow {
                mag_order: mag_order.to_string(),
                spin,
                rows: channel.len(),
                bands: channel.iter().map(|r| r.band).max().unwrap_or(0),
                energy_range: format!("{:.3} .. {:.3}", e_min, e_max),
            });
        }
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsers::bands::{parse_bands_content, BandLayout};

    #[test]
    fn test_summarize_band_count() {
        let content: String = (0..8)
            .map(|i| format!("{} {} 1 0 0 0 0\n", i % 4, i as f64 * 0.1))
            .collect();
        let layout = BandLayout::new(2).with_block_rows(2);
        let table = parse_bands_content(&content, "bands", layout, "AFM").unwrap();
        let summary = summarize(&table);

        assert_eq!(summary.len(), 2);
        assert_eq!(summary[0].bands, 2);
        assert_eq!(summary[1].rows, 4);
    }
}
