//! Laying out source values according to an [`IndexPattern`](crate::IndexPattern).
//!
//! All functions here take the source as a slice and leave the `TableSpec`
//! untouched, so one spec can lay out any number of sources. A slot whose
//! index falls outside the slice (a source shorter than `list_size`) is
//! treated like an empty slot.

use crate::spec::TableSpec;

impl TableSpec {
    /// The general form every other layout method is built on.
    ///
    /// - `item` converts a source element placed in a cell.
    /// - `empty` produces the value of an empty cell; it is called once per
    ///   empty cell, so each cell can get a fresh value.
    /// - `row` reduces each finished row to the value pushed to the output.
    ///
    /// ```
    /// use extrautils_table::{FillOrder, TableSpec};
    ///
    /// let spec = TableSpec::builder()
    ///     .width(3)
    ///     .height(2)
    ///     .list_size(3)
    ///     .start_padding(2)
    ///     .fill_order(FillOrder::TopLeftRight)
    ///     .build()
    ///     .unwrap();
    ///
    /// let rows = spec.materialize(
    ///     &["a", "b", "c"],
    ///     |s| s.to_uppercase(),
    ///     || "-".to_string(),
    ///     |row| row.join(", "),
    /// );
    /// assert_eq!(rows, vec!["-, -, A", "B, C, -"]);
    /// ```
    pub fn materialize<E, T, R, I, P, W>(
        &self,
        source: &[E],
        mut item: I,
        mut empty: P,
        mut row: W,
    ) -> Vec<R>
    where
        I: FnMut(&E) -> T,
        P: FnMut() -> T,
        W: FnMut(Vec<T>) -> R,
    {
        self.index_pattern()
            .into_rows()
            .into_iter()
            .map(|indexes| {
                let cells = indexes
                    .into_iter()
                    .map(|slot| match slot.and_then(|index| source.get(index)) {
                        Some(element) => item(element),
                        None => empty(),
                    })
                    .collect();
                row(cells)
            })
            .collect()
    }

    /// Lays out `source` with `None` in empty cells.
    ///
    /// ```
    /// use extrautils_table::{FillOrder, TableSpec};
    ///
    /// let spec = TableSpec::builder()
    ///     .width(3)
    ///     .height(2)
    ///     .list_size(3)
    ///     .start_padding(2)
    ///     .fill_order(FillOrder::TopLeftRight)
    ///     .build()
    ///     .unwrap();
    ///
    /// let table = spec.table(&["1", "2", "3"]);
    /// assert_eq!(
    ///     table,
    ///     vec![vec![None, None, Some(&"1")], vec![Some(&"2"), Some(&"3"), None]]
    /// );
    /// ```
    pub fn table<'a, E>(&self, source: &'a [E]) -> Vec<Vec<Option<&'a E>>> {
        self.table_map(source, |element| element)
    }

    /// Lays out clones of `source` with `empty` in empty cells.
    pub fn table_or<E: Clone>(&self, source: &[E], empty: E) -> Vec<Vec<E>> {
        self.table_map_or(source, empty, E::clone)
    }

    /// Lays out `item(element)` for each placed element, `None` elsewhere.
    pub fn table_map<'a, E, T, I>(&self, source: &'a [E], mut item: I) -> Vec<Vec<Option<T>>>
    where
        I: FnMut(&'a E) -> T,
    {
        self.index_pattern()
            .into_rows()
            .into_iter()
            .map(|indexes| {
                indexes
                    .into_iter()
                    .map(|slot| slot.and_then(|index| source.get(index)).map(&mut item))
                    .collect()
            })
            .collect()
    }

    /// Lays out `item(element)` for each placed element and clones of
    /// `empty` elsewhere.
    pub fn table_map_or<E, T, I>(&self, source: &[E], empty: T, item: I) -> Vec<Vec<T>>
    where
        T: Clone,
        I: FnMut(&E) -> T,
    {
        self.materialize(source, item, || empty.clone(), |cells| cells)
    }

    /// Like [`table_map_or`](Self::table_map_or), then reduces each row with
    /// `row`.
    pub fn table_rows<E, T, R, I, W>(&self, source: &[E], empty: T, item: I, row: W) -> Vec<R>
    where
        T: Clone,
        I: FnMut(&E) -> T,
        W: FnMut(Vec<T>) -> R,
    {
        self.materialize(source, item, || empty.clone(), row)
    }
}
