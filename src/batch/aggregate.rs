//! # 多文件聚合
//!
//! 按给定顺序解析目录下的多个 DOS / 能带文件，并依次外连接为一张总表。
//!
//! ## 功能
//! - `FileSpec`：(文件名, 参数, 磁序) 三元组
//! - 文件解析可并行，合并严格按输入顺序进行
//! - 空输入列表返回 `EmptyInputSet`
//!
//! ## 依赖关系
//! - 被 `commands/dos2csv.rs`, `commands/bands2csv.rs` 调用
//! - 使用 `parsers/`, `models/table.rs`, `batch/runner.rs`

use super::ParseRunner;
use crate::error::{DatavizError, Result};
use crate::models::{combine, BandsRow, DosRow, Table};
use crate::parsers::bands::{parse_bands_file, BandLayout};
use crate::parsers::dos::parse_dos_file;

use std::path::Path;
use std::str::FromStr;

/// 单个输入文件描述
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSpec<P> {
    /// 相对于数据目录的文件名
    pub filename: String,
    /// 每胞原子数 (DOS) 或每条高对称线能量点数 (能带)
    pub param: P,
    /// 磁序标签
    pub mag_order: String,
}

impl<P: FromStr> FileSpec<P> {
    /// 从扁平的命令行参数构造三元组列表
    pub fn from_triples(values: &[String], param_name: &str) -> Result<Vec<Self>> {
        if values.len() % 3 != 0 {
            return Err(DatavizError::InvalidArgument(format!(
                "expected FILE {} MAG_ORDER triples, got {} values",
                param_name,
                values.len()
            )));
        }

        values
            .chunks(3)
            .map(|chunk| {
                let param = chunk[1].parse::<P>().map_err(|_| {
                    DatavizError::InvalidArgument(format!(
                        "{} for '{}' must be a non-negative integer, got '{}'",
                        param_name, chunk[0], chunk[1]
                    ))
                })?;
                Ok(FileSpec {
                    filename: chunk[0].clone(),
                    param,
                    mag_order: chunk[2].clone(),
                })
            })
            .collect()
    }
}

/// 读取并合并多个 TDOS 文件
pub fn read_dos(
    dir: &Path,
    specs: &[FileSpec<usize>],
    runner: &ParseRunner,
) -> Result<Table<DosRow>> {
    if specs.is_empty() {
        return Err(DatavizError::EmptyInputSet);
    }

    let tables = runner.run(specs, |spec| {
        parse_dos_file(&dir.join(&spec.filename), spec.param, &spec.mag_order)
    })?;

    combine(tables)
}

/// 读取并合并多个能带文件，`block_rows` 为每个能带编号覆盖的行数
pub fn read_bands(
    dir: &Path,
    specs: &[FileSpec<usize>],
    block_rows: usize,
    runner: &ParseRunner,
) -> Result<Table<BandsRow>> {
    if specs.is_empty() {
        return Err(DatavizError::EmptyInputSet);
    }

    let tables = runner.run(specs, |spec| {
        let layout = BandLayout::new(spec.param).with_block_rows(block_rows);
        parse_bands_file(&dir.join(&spec.filename), layout, &spec.mag_order)
    })?;

    combine(tables)
}
