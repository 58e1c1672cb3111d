//! Text - small text-processing helpers.
//!
//! - [`tokenize`]: whitespace splitting that keeps `"quoted groups"` together
//!   and understands `\"` / `\\` escapes.
//! - [`as_word_in`]: whole-word search that treats whitespace and common
//!   punctuation as word boundaries.
//!
//! ```rust
//! use extrautils_text::{as_word_in, tokenize};
//!
//! let args = tokenize(r#"open "My Documents" --force"#);
//! assert_eq!(args, vec!["open", "My Documents", "--force"]);
//!
//! assert!(as_word_in("force", "use the force, Luke"));
//! ```

mod tokenize;
mod words;

pub use tokenize::tokenize;
pub use words::as_word_in;
