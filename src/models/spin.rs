//! # 自旋通道
//!
//! 按行位置推断的自旋标签：前半为 up，后半为 down。
//!
//! ## 依赖关系
//! - 被 `models/dos.rs`, `models/bands.rs`, `parsers/` 使用

use serde::{Deserialize, Serialize};

/// 自旋通道
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Spin {
    Up,
    Down,
}

impl Spin {
    /// 按输出顺序排列的全部通道
    pub const ALL: [Spin; 2] = [Spin::Up, Spin::Down];

    /// 第 `index` 行所属通道（每个通道 `rows_per_spin` 行）
    pub fn from_position(index: usize, rows_per_spin: usize) -> Self {
        if index < rows_per_spin {
            Spin::Up
        } else {
            Spin::Down
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Spin::Up => "up",
            Spin::Down => "down",
        }
    }
}

impl std::fmt::Display for Spin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
