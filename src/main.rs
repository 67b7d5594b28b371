//! # dataviz - DOS 与能带数据整理和可视化工具
//!
//! 将电子结构计算输出的态密度和能带文件整理为 CSV 表格，并绘制图表。
//!
//! ## 子命令
//! - `dos2csv`   - TDOS 文件 → CSV
//! - `bands2csv` - 能带文件 → CSV
//! - `plot`      - 绘图
//!   - `dos`   - DOS 曲线 (PNG/SVG/HTML)
//!   - `bands` - 能带图 (PNG/SVG)
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── batch/     (多文件读取与合并)
//!   │     ├── parsers/   (DOS / 能带解析器)
//!   │     ├── models/    (数据模型与外连接)
//!   │     ├── export.rs  (CSV 读写)
//!   │     └── viz/       (图表生成)
//!   ├── utils/      (工具函数)
//!   ├── units.rs    (单位换算)
//!   └── error.rs    (错误处理)
//! ```

mod batch;
mod cli;
mod commands;
mod error;
mod export;
mod models;
mod parsers;
mod units;
mod utils;
mod viz;

use clap::Parser;
use cli::Cli;

fn main() {
    env_logger::init();

    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&e);
        std::process::exit(1);
    }
}
