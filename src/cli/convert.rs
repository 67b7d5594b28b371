//! # dos2csv / bands2csv 子命令 CLI 定义
//!
//! 两个命令都接受数据目录和可重复的 `-f FILE PARAM MAG_ORDER` 三元组：
//! - dos2csv: PARAM 为每胞原子数
//! - bands2csv: PARAM 为每条高对称线的能量点数
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/dos2csv.rs`, `commands/bands2csv.rs`

use crate::parsers::bands::BAND_BLOCK_ROWS;

use clap::{ArgAction, Args};
use std::path::PathBuf;

/// dos2csv 子命令参数
#[derive(Args, Debug)]
pub struct Dos2CsvArgs {
    /// Directory containing the total DOS files
    pub path: PathBuf,

    /// A file with the atoms per unit cell and a magnetic-order label to read and process
    #[arg(
        short = 'f',
        long = "infile",
        num_args = 3,
        value_names = ["FILE", "ATOMS_PER_CELL", "MAG_ORDER"],
        action = ArgAction::Append
    )]
    pub infile: Vec<String>,

    /// Output path for the DOS CSV file
    #[arg(short, long, default_value = "dos.csv")]
    pub output: PathBuf,

    /// Number of parallel parse jobs (0 = auto)
    #[arg(short, long, default_value_t = 0, env = "DATAVIZ_JOBS")]
    pub jobs: usize,
}

/// bands2csv 子命令参数
#[derive(Args, Debug)]
pub struct Bands2CsvArgs {
    /// Directory containing the band-structure files
    pub path: PathBuf,

    /// A file with energy points per symmetry line and a magnetic-order label to read and process
    #[arg(
        short = 'f',
        long = "infile",
        num_args = 3,
        value_names = ["FILE", "E_POINTS", "MAG_ORDER"],
        action = ArgAction::Append
    )]
    pub infile: Vec<String>,

    /// Output path for the bands CSV file
    #[arg(short, long, default_value = "bands.csv")]
    pub output: PathBuf,

    /// Rows covered by each band label within a spin channel
    #[arg(long, default_value_t = BAND_BLOCK_ROWS)]
    pub band_block: usize,

    /// Number of parallel parse jobs (0 = auto)
    #[arg(short, long, default_value_t = 0, env = "DATAVIZ_JOBS")]
    pub jobs: usize,
}
