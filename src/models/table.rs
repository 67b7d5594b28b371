//! # 强类型数据表与外连接
//!
//! `Table<R>` 是一组有序、构造后不再修改的记录。多个文件的结果通过
//! `outer_join` 在全部共享列上做外连接合并：
//! - 只出现在一侧的行原样保留
//! - 全部列相等的行互相匹配（左侧 m 行、右侧 n 行得到 m×n 行）
//! - 输出顺序：左表行（含匹配产生的副本）在前，右表未匹配行按原顺序在后
//!
//! 浮点列按位模式比较。
//!
//! ## 依赖关系
//! - 被 `parsers/`, `batch/`, `commands/`, `viz/` 使用
//! - 使用 `models/spin.rs`

use super::Spin;
use crate::error::{DatavizError, Result};

use std::collections::{HashMap, HashSet};

/// 单元格取值，供连接比较使用
#[derive(Debug, Clone, Copy)]
pub enum Field<'a> {
    Float(f64),
    Int(u64),
    Text(&'a str),
}

impl<'a> Field<'a> {
    /// 值类型名
    pub fn kind(&self) -> &'static str {
        match self {
            Field::Float(_) => "float",
            Field::Int(_) => "integer",
            Field::Text(_) => "text",
        }
    }

    fn key(&self) -> FieldKey<'a> {
        match *self {
            Field::Float(v) => FieldKey::Float(v.to_bits()),
            Field::Int(v) => FieldKey::Int(v),
            Field::Text(s) => FieldKey::Text(s),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum FieldKey<'a> {
    Float(u64),
    Int(u64),
    Text(&'a str),
}

/// 一行表格记录
pub trait Record: Clone {
    /// 输出列名，顺序即 CSV 列顺序
    const COLUMNS: &'static [&'static str];

    /// 按 `COLUMNS` 顺序给出各列取值
    fn fields(&self) -> Vec<Field<'_>>;

    fn mag_order(&self) -> &str;

    fn spin(&self) -> Spin;
}

/// 有序记录表
#[derive(Debug, Clone, PartialEq)]
pub struct Table<R> {
    rows: Vec<R>,
}

impl<R: Record> Table<R> {
    pub fn new(rows: Vec<R>) -> Self {
        Table { rows }
    }

    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, R> {
        self.rows.iter()
    }

    /// 按首次出现顺序列出磁序标签
    pub fn mag_orders(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.rows
            .iter()
            .map(|r| r.mag_order())
            .filter(|m| seen.insert(*m))
            .collect()
    }

    /// 选出指定磁序与自旋通道的行
    pub fn select<'a>(
        &'a self,
        mag_order: &'a str,
        spin: Spin,
    ) -> impl Iterator<Item = &'a R> + 'a {
        self.rows
            .iter()
            .filter(move |r| r.mag_order() == mag_order && r.spin() == spin)
    }

    /// 在全部共享列上做外连接
    pub fn outer_join(&self, other: &Table<R>) -> Result<Table<R>> {
        if let (Some(left), Some(right)) = (self.rows.first(), other.rows.first()) {
            check_column_kinds::<R>(left, right)?;
        }

        let mut index: HashMap<Vec<FieldKey<'_>>, Vec<usize>> = HashMap::new();
        for (i, row) in other.rows.iter().enumerate() {
            index.entry(row_key(row)).or_default().push(i);
        }

        let mut matched = vec![false; other.rows.len()];
        let mut rows = Vec::with_capacity(self.rows.len() + other.rows.len());

        for row in &self.rows {
            match index.get(&row_key(row)) {
                Some(partners) => {
                    for &i in partners {
                        matched[i] = true;
                        rows.push(row.clone());
                    }
                }
                None => rows.push(row.clone()),
            }
        }

        rows.extend(
            other
                .rows
                .iter()
                .zip(&matched)
                .filter(|&(_, &m)| !m)
                .map(|(r, _)| r.clone()),
        );

        Ok(Table { rows })
    }
}

/// 依次外连接多个表，第一个表作为初始累加器
pub fn combine<R: Record>(tables: Vec<Table<R>>) -> Result<Table<R>> {
    let mut tables = tables.into_iter();
    let mut combined = tables.next().ok_or(DatavizError::EmptyInputSet)?;
    for table in tables {
        combined = combined.outer_join(&table)?;
    }
    Ok(combined)
}

fn row_key<R: Record>(row: &R) -> Vec<FieldKey<'_>> {
    row.fields().iter().map(Field::key).collect()
}

fn check_column_kinds<R: Record>(left: &R, right: &R) -> Result<()> {
    for ((column, l), r) in R::COLUMNS.iter().zip(left.fields()).zip(right.fields()) {
        if l.kind() != r.kind() {
            return Err(DatavizError::MergeConflict {
                column: column.to_string(),
                left: l.kind().to_string(),
                right: r.kind().to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 测试用记录：`value` 为 None 时该列以文本形式出现
    #[derive(Debug, Clone, PartialEq)]
    struct Sample {
        mag_order: String,
        spin: Spin,
        value: Option<f64>,
    }

    impl Record for Sample {
        const COLUMNS: &'static [&'static str] = &["mag_order", "spin", "value"];

        fn fields(&self) -> Vec<Field<'_>> {
            vec![
                Field::Text(&self.mag_order),
                Field::Text(self.spin.as_str()),
                match self.value {
                    Some(v) => Field::Float(v),
                    None => Field::Text("n/a"),
                },
            ]
        }

        fn mag_order(&self) -> &str {
            &self.mag_order
        }

        fn spin(&self) -> Spin {
            self.spin
        }
    }

    fn sample(mag_order: &str, spin: Spin, value: f64) -> Sample {
        Sample {
            mag_order: mag_order.to_string(),
            spin,
            value: Some(value),
        }
    }

    #[test]
    fn test_disjoint_tables_concatenate() {
        let fm = Table::new(vec![sample("FM", Spin::Up, 1.0), sample("FM", Spin::Down, 2.0)]);
        let afm = Table::new(vec![
            sample("AFM", Spin::Up, 1.0),
            sample("AFM", Spin::Down, 2.0),
            sample("AFM", Spin::Down, 3.0),
        ]);

        let joined = fm.outer_join(&afm).unwrap();
        assert_eq!(joined.len(), fm.len() + afm.len());
        assert_eq!(joined.rows()[..2], fm.rows()[..]);
        assert_eq!(joined.rows()[2..], afm.rows()[..]);
    }

    #[test]
    fn test_identical_rows_collapse() {
        let left = Table::new(vec![sample("FM", Spin::Up, 1.0), sample("FM", Spin::Up, 2.0)]);
        let right = Table::new(vec![sample("FM", Spin::Up, 2.0), sample("FM", Spin::Up, 3.0)]);

        let joined = left.outer_join(&right).unwrap();
        let values: Vec<f64> = joined.iter().filter_map(|r| r.value).collect();
        assert_eq!(values, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_many_to_many_duplicates() {
        let left = Table::new(vec![sample("FM", Spin::Up, 1.0), sample("FM", Spin::Up, 1.0)]);
        let right = Table::new(vec![sample("FM", Spin::Up, 1.0), sample("FM", Spin::Up, 1.0)]);

        let joined = left.outer_join(&right).unwrap();
        assert_eq!(joined.len(), 4);
    }

    #[test]
    fn test_merge_conflict_on_kind_mismatch() {
        let left = Table::new(vec![sample("FM", Spin::Up, 1.0)]);
        let right = Table::new(vec![Sample {
            mag_order: "AFM".to_string(),
            spin: Spin::Up,
            value: None,
        }]);

        match left.outer_join(&right) {
            Err(DatavizError::MergeConflict { column, .. }) => assert_eq!(column, "value"),
            other => panic!("expected merge conflict, got {:?}", other),
        }
    }

    #[test]
    fn test_combine_empty_fails() {
        let tables: Vec<Table<Sample>> = Vec::new();
        assert!(matches!(combine(tables), Err(DatavizError::EmptyInputSet)));
    }

    #[test]
    fn test_combine_keeps_input_order() {
        let tables = vec![
            Table::new(vec![sample("B", Spin::Up, 1.0)]),
            Table::new(vec![sample("A", Spin::Up, 1.0)]),
            Table::new(vec![sample("C", Spin::Up, 1.0)]),
        ];
        let combined = combine(tables).unwrap();
        assert_eq!(combined.mag_orders(), vec!["B", "A", "C"]);
    }

    #[test]
    fn test_select() {
        let table = Table::new(vec![
            sample("FM", Spin::Up, 1.0),
            sample("FM", Spin::Down, 2.0),
            sample("AFM", Spin::Up, 3.0),
        ]);
        let picked: Vec<f64> = table
            .select("FM", Spin::Down)
            .filter_map(|r| r.value)
            .collect();
        assert_eq!(picked, vec![2.0]);
    }
}
