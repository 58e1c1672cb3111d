//! Fill orders: how grid coordinates are linearized into list positions.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseFillOrderError;

/// Traversal direction used to place list items into the grid.
///
/// Each variant names the corner filling starts from and the direction the
/// first run of items moves in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FillOrder {
    /// Reading order: rows top to bottom, each row left to right.
    /// ```text
    /// 0 1 2
    /// 3 4 5
    /// ```
    TopLeftRight,
    /// Column-major: columns left to right, each column top to bottom.
    /// ```text
    /// 0 2 4
    /// 1 3 5
    /// ```
    TopLeftBottom,
    /// Reading order starting from the bottom row.
    /// ```text
    /// 3 4 5
    /// 0 1 2
    /// ```
    BottomLeftRight,
    /// Column-major, each column bottom to top.
    /// ```text
    /// 1 3 5
    /// 0 2 4
    /// ```
    BottomLeftTop,
}

impl FillOrder {
    /// All fill orders, in declaration order.
    pub const ALL: [FillOrder; 4] = [
        FillOrder::TopLeftRight,
        FillOrder::TopLeftBottom,
        FillOrder::BottomLeftRight,
        FillOrder::BottomLeftTop,
    ];

    /// The kebab-case name used in config files.
    pub fn as_str(self) -> &'static str {
        match self {
            FillOrder::TopLeftRight => "top-left-right",
            FillOrder::TopLeftBottom => "top-left-bottom",
            FillOrder::BottomLeftRight => "bottom-left-right",
            FillOrder::BottomLeftTop => "bottom-left-top",
        }
    }

    /// Linear position of the cell at `(row, column)` in a `width × height` grid.
    ///
    /// The caller guarantees `row < height` and `column < width`.
    pub(crate) fn position(self, row: usize, column: usize, width: usize, height: usize) -> usize {
        match self {
            FillOrder::TopLeftRight => row * width + column,
            FillOrder::TopLeftBottom => row + column * height,
            FillOrder::BottomLeftRight => (height - row - 1) * width + column,
            FillOrder::BottomLeftTop => (height - row - 1) + column * height,
        }
    }
}

impl fmt::Display for FillOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FillOrder {
    type Err = ParseFillOrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FillOrder::ALL
            .into_iter()
            .find(|order| order.as_str() == s)
            .ok_or_else(|| ParseFillOrderError(s.to_string()))
    }
}
