//! # 解析器模块
//!
//! 解析 DOS 与能带计算输出。两种文件都是无表头、空白分隔的定宽数值列，
//! 自旋通道只由行位置决定：前一半为 up，后一半为 down。
//!
//! ## 依赖关系
//! - 被 `batch/` 模块使用
//! - 使用 `models/` 数据模型
//! - 子模块: dos, bands

pub mod bands;
pub mod dos;

use crate::error::{DatavizError, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// 读取整个输入文件
pub fn read_input(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => DatavizError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => DatavizError::FileReadError {
            path: path.display().to_string(),
            source: e,
        },
    })
}

/// 将文本解析为每行恰好 `N` 个数值的行，跳过空行
pub fn parse_numeric_rows<const N: usize>(
    content: &str,
    source: &str,
) -> Result<Vec<[f64; N]>> {
    let mut rows = Vec::new();

    for (i, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() != N {
            return Err(DatavizError::MalformedRow {
                path: source.to_string(),
                line: i + 1,
                reason: format!("expected {} columns, found {}", N, tokens.len()),
            });
        }

        let mut row = [0.0; N];
        for (value, token) in row.iter_mut().zip(&tokens) {
            *value = token.parse().map_err(|_| DatavizError::MalformedRow {
                path: source.to_string(),
                line: i + 1,
                reason: format!("'{}' is not a number", token),
            })?;
        }
        rows.push(row);
    }

    if rows.is_empty() {
        return Err(DatavizError::EmptyFile {
            path: source.to_string(),
        });
    }

    Ok(rows)
}

/// 每个自旋通道的行数；总行数必须为偶数
pub fn rows_per_spin(total: usize, source: &str) -> Result<usize> {
    if total % 2 != 0 {
        return Err(DatavizError::OddRowCount {
            path: source.to_string(),
            rows: total,
        });
    }
    Ok(total / 2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_numeric_rows_whitespace() {
        let content = "  0.0\t1.0\n\n1.5    -2.0e-1  \n";
        let rows = parse_numeric_rows::<2>(content, "test").unwrap();
        assert_eq!(rows, vec![[0.0, 1.0], [1.5, -0.2]]);
    }

    #[test]
    fn test_parse_numeric_rows_wrong_count() {
        let content = "0.0 1.0\n1.0 2.0 3.0\n";
        match parse_numeric_rows::<2>(content, "test") {
            Err(DatavizError::MalformedRow { line, .. }) => assert_eq!(line, 2),
            other => panic!("expected malformed row, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_numeric_rows_not_a_number() {
        let content = "0.0 abc\n";
        assert!(matches!(
            parse_numeric_rows::<2>(content, "test"),
            Err(DatavizError::MalformedRow { line: 1, .. })
        ));
    }

    #[test]
    fn test_parse_numeric_rows_empty() {
        assert!(matches!(
            parse_numeric_rows::<2>("\n  \n", "test"),
            Err(DatavizError::EmptyFile { .. })
        ));
    }

    #[test]
    fn test_rows_per_spin() {
        assert_eq!(rows_per_spin(8, "test").unwrap(), 4);
        assert!(matches!(
            rows_per_spin(5, "test"),
            Err(DatavizError::OddRowCount { rows: 5, .. })
        ));
    }

    #[test]
    fn test_read_input_missing() {
        let path = std::env::temp_dir().join("dataviz-missing-input.dat");
        assert!(matches!(
            read_input(&path),
            Err(DatavizError::FileNotFound { .. })
        ));
    }
}
