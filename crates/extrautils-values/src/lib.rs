//! Values - small wrappers around values and how they get computed.
//!
//! - [`OptionalValue`]: a value that may be unset, distinct from a value set
//!   to `None`.
//! - [`LazyVar`] / [`SyncLazyVar`]: lazily computed, resettable values.
//! - [`run_if`], [`before_command_if`], [`after_command_if`],
//!   [`after_command_if_with`]: conditional side effects around a command.

mod control;
mod error;
mod lazy;
mod optional;

pub use control::{after_command_if, after_command_if_with, before_command_if, run_if};
pub use error::ValueError;
pub use lazy::{LazyVar, SyncLazyVar};
pub use optional::OptionalValue;
