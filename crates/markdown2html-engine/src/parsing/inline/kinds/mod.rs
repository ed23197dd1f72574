//! # Inline Kinds
//!
//! Inline rules that own their syntax delimiters and their substitution.
//!
//! ## Types
//!
//! - **`HashDirective`**: `[[text]]` becomes the MD5 hex digest of `text`
//! - **`StripDirective`**: `((text))` becomes `text` without `c`/`C`
//! - **`Bold`**: `**text**` becomes `<b>text</b>`
//! - **`Emphasis`**: `__text__` becomes `<em>text</em>`
//!
//! ## Design Principle
//!
//! All delimiter patterns live here, not scattered in transformer code.
//! Every pattern is non-greedy and every match on a line is replaced, left to right.

pub mod bold;
pub mod emphasis;
pub mod hash_directive;
pub mod strip_directive;

pub use bold::Bold;
pub use emphasis::Emphasis;
pub use hash_directive::HashDirective;
pub use strip_directive::StripDirective;

use regex::Regex;

/// Compiles a non-greedy pattern capturing non-empty text between two
/// literal delimiters.
pub(crate) fn delimited_pattern(open: &str, close: &str) -> Regex {
    let pattern = format!("{}(.+?){}", regex::escape(open), regex::escape(close));
    Regex::new(&pattern).expect("Invalid delimiter regex")
}
