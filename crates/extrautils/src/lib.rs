//! # Extrautils - Everyday helpers around lists and values
//!
//! The centrepiece is the list-to-table layout from [`table`]: describe a grid
//! with a [`TableSpec`] and get back, for every cell, the index of the list
//! item that belongs there.
//!
//! ```rust
//! use extrautils::{FillOrder, TableSpec};
//!
//! let spec = TableSpec::builder()
//!     .height(2)
//!     .list_size(5)
//!     .fill_order(FillOrder::TopLeftBottom)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(spec.width(), 3);
//! let rows = spec.table_or(&[1, 2, 3, 4, 5], 0);
//! assert_eq!(rows, vec![vec![1, 3, 5], vec![2, 4, 0]]);
//! ```
//!
//! The remaining helpers live in their own modules:
//!
//! - [`collections`]: frequency queries, null-tolerant totals and decimal statistics
//! - [`values`]: explicitly-set values, lazy values, conditional commands
//! - [`text`]: quote-aware tokenizing and whole-word search
//! - [`time`]: stopwatches, date ranges, Easter and Czech working days

// Table layout (re-exported from extrautils-table)
pub use extrautils_table as table;
pub use extrautils_table::{
    FillOrder, IndexPattern, TableError, TableSpec, TableSpecBuilder, ValidationError, SENTINEL,
};

// Peripheral utilities
pub use extrautils_collections as collections;
pub use extrautils_text as text;
pub use extrautils_time as time;
pub use extrautils_values as values;
