pub mod io;
pub mod parsing;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use io::*;
pub use parsing::{HtmlFragment, convert_lines, convert_str};
