//! Table - lay out flat lists as two-dimensional tables.
//!
//! Given a table shape and a fill order, this crate computes which list index
//! lands in each cell, then optionally places the values of an actual list
//! (transformed, padded, and reduced per row as needed).
//!
//! # Quick Start
//!
//! ```rust
//! use extrautils_table::{FillOrder, TableSpec};
//!
//! let spec = TableSpec::builder()
//!     .width(3)
//!     .height(2)
//!     .list_size(5)
//!     .fill_order(FillOrder::TopLeftRight)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(
//!     spec.index_pattern().to_signed(),
//!     vec![vec![0, 1, 2], vec![3, 4, -1]]
//! );
//!
//! let table = spec.table_or(&["a", "b", "c", "d", "e"], "");
//! assert_eq!(table, vec![vec!["a", "b", "c"], vec!["d", "e", ""]]);
//! ```
//!
//! # Shape Rules
//!
//! - At least one of width and height must be nonzero. A zero dimension is
//!   inferred as `ceil(list_size / other_dimension)`.
//! - `start_padding` empty slots come before the first item.
//! - When both dimensions are given, the grid must hold
//!   `list_size + start_padding` slots.
//!
//! Violations are reported by [`TableSpecBuilder::build`] as a
//! [`ValidationError`]; a built [`TableSpec`] never fails afterwards.
//!
//! # Fill Orders
//!
//! | Order | Linear position of `(row, col)` |
//! |-------|---------------------------------|
//! | `TopLeftRight` | `row * width + col` |
//! | `TopLeftBottom` | `row + col * height` |
//! | `BottomLeftRight` | `(height - row - 1) * width + col` |
//! | `BottomLeftTop` | `(height - row - 1) + col * height` |

mod config;
mod error;
mod fill;
mod materialize;
mod pattern;
mod spec;

// Re-export public API
pub use error::{ParseFillOrderError, Result, TableError, ValidationError};
pub use fill::FillOrder;
pub use pattern::{IndexPattern, SENTINEL};
pub use spec::{TableSpec, TableSpecBuilder};
