//! Index pattern computation.

use serde::Serialize;
use tracing::trace;

use crate::spec::TableSpec;

/// Integer value standing for an empty slot in [`IndexPattern::to_signed`].
pub const SENTINEL: i64 = -1;

/// Grid of source indices, one row per table row.
///
/// A slot is `Some(i)` when item `i` of the source list lands there and
/// `None` when the slot is padding or lies past the end of the list. Leading
/// and trailing empty slots are only distinguishable by position.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct IndexPattern {
    rows: Vec<Vec<Option<usize>>>,
}

impl IndexPattern {
    /// The pattern rows, top to bottom.
    pub fn rows(&self) -> &[Vec<Option<usize>>] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<Vec<Option<usize>>> {
        self.rows
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// Slot at `(row, column)`; `None` both for empty slots and out-of-range
    /// coordinates.
    pub fn get(&self, row: usize, column: usize) -> Option<usize> {
        self.rows.get(row)?.get(column).copied().flatten()
    }

    /// Slots in reading order (top row first, left to right).
    pub fn iter(&self) -> impl Iterator<Item = Option<usize>> + '_ {
        self.rows.iter().flat_map(|row| row.iter().copied())
    }

    /// Number of slots that hold a source index.
    pub fn filled_count(&self) -> usize {
        self.iter().filter(Option::is_some).count()
    }

    /// The pattern with empty slots written as [`SENTINEL`].
    pub fn to_signed(&self) -> Vec<Vec<i64>> {
        self.rows
            .iter()
            .map(|row| {
                row.iter()
                    .map(|slot| slot.map_or(SENTINEL, |index| index as i64))
                    .collect()
            })
            .collect()
    }
}

impl TableSpec {
    /// Computes which source index lands in each cell of the table.
    ///
    /// ```
    /// use extrautils_table::{FillOrder, TableSpec};
    ///
    /// let spec = TableSpec::builder()
    ///     .width(3)
    ///     .height(2)
    ///     .list_size(5)
    ///     .fill_order(FillOrder::TopLeftBottom)
    ///     .build()
    ///     .unwrap();
    ///
    /// assert_eq!(spec.index_pattern().to_signed(), vec![vec![0, 2, 4], vec![1, 3, -1]]);
    /// ```
    pub fn index_pattern(&self) -> IndexPattern {
        let (width, height) = (self.width(), self.height());
        let order = self.fill_order();

        let rows = (0..height)
            .map(|row| {
                (0..width)
                    .map(|column| self.slot(order.position(row, column, width, height)))
                    .collect()
            })
            .collect();

        trace!(width, height, %order, "computed index pattern");
        IndexPattern { rows }
    }
}
