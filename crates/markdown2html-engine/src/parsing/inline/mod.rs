//! # Inline Transformation
//!
//! Per-line substitution passes applied before any block classification.
//!
//! ## Pass Order
//!
//! 1. Hash directive `[[text]]`
//! 2. Strip directive `((text))`
//! 3. Bold `**text**`
//! 4. Emphasis `__text__`
//!
//! Each pass runs over the output of the previous one. A directive result that
//! contains `**` or `__` is therefore picked up by the bold and emphasis passes.
//!
//! ## Modules
//!
//! - **`kinds`**: one type per rule, owning its delimiters and pattern
//! - **`transform`**: `transform_inline()` main entry point

pub mod kinds;
pub mod transform;

pub use transform::transform_inline;
