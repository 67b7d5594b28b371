//! # dos2csv 命令实现
//!
//! 读取多个 TDOS 文件，换算为 eV，按自旋与磁序标注后合并导出为 CSV。
//!
//! ## 功能
//! - 解析 (文件名, 每胞原子数, 磁序) 三元组
//! - 并行解析、按输入顺序外连接合并
//! - 生成终端汇总表格和 CSV 输出
//!
//! ## 依赖关系
//! - 使用 `cli/convert.rs` 定义的参数
//! - 使用 `batch/`, `export.rs`
//! - 使用 `utils/output.rs`, `utils/progress.rs`

use super::require_directory;
use crate::batch::{self, FileSpec, ParseRunner};
use crate::cli::convert::Dos2CsvArgs;
use crate::error::Result;
use crate::export;
use crate::models::{DosRow, Spin, Table};
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
    #[tabled(rename = "Energy range (eV)")]
    energy_range: String,
    #[tabled(rename = "Max DOS")]
    max_dos: String,
}

/// 执行 dos2csv
pub fn execute(args: Dos2CsvArgs) -> Result<()> {
    output::print_header("Converting DOS Data");

    require_directory(&args.path)?;

    let specs = FileSpec::<usize>::from_triples(&args.infile, "ATOMS_PER_CELL")?;
    let runner = ParseRunner::new(args.jobs);
    log::debug!("dos2csv: {:?} with {} jobs", specs, runner.jobs());

    output::print_info(&format!(
        "Reading {} DOS file(s) from '{}'",
        specs.len(),
        args.path.display()
    ));

    let pb = progress::create_spinner("Parsing and merging");
    let result = batch::read_dos(&args.path, &specs, &runner);
    pb.finish_and_clear();
    let table = result?;

    output::print_success(&format!("Combined table has {} rows", table.len()));
    println!("{}", TextTable::new(summarize(&table)));

    export::write_csv(&table, &args.output)?;
    output::print_written("DOS table", &args.output);

    Ok(())
}

/// 按 (磁序, 自旋) 汇总
fn summarize(table: &Table<DosRow>) -> Vec<SummaryRow> {
    let mut rows = Vec::new();

    for mag_order in table.mag_orders() {
        for spin in Spin::ALL {
            let channel: Vec<&DosRow> = table.select(mag_order, spin).collect();
            if channel.is_empty() {
                continue;
            }

            let e_min = channel.iter().map(|r| r.energy).fold(f64::INFINITY, f64::min);
            let e_max = channel.iter().map(|r| r.energy).fold(f64::NEG_INFINITY, f64::max);
            let max_dos = channel.iter().map(|r| r.dos).fold(f64::NEG_INFINITY, f64::max);

            rows.push(SummaryRow {
                mag_order: mag_order.to_string(),
                spin,
                rows: channel.len(),
                energy_range: format!("{:.3} .. {:.3}", e_min, e_max),
                max_dos: format!("{:.4}", max_dos),
            });
        }
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsers::dos::parse_dos_content;

    #[test]
    fn test_summarize() {
        let table = parse_dos_content("0.0 1.0\n1.0 2.0\n2.0 3.0\n3.0 4.0\n", "tdos", 1, "FM")
            .unwrap();
        let summary = summarize(&table);

        assert_eq!(summary.len(), 2);
        assert_eq!(summary[0].spin, Spin::Up);
        assert_eq!(summary[0].rows, 2);
        assert_eq!(summary[1].spin, Spin::Down);
        assert_eq!(summary[1].mag_order, "FM");
    }
}
