//! Error types for value wrappers.

/// Errors raised when reading a value wrapper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValueError {
    /// The wrapper holds no value.
    #[error("there is no value available")]
    NoValue,
}
