use regex::{Captures, Regex};
use std::borrow::Cow;
use std::sync::OnceLock;

use super::delimited_pattern;

/// Parenthesis strip directive: `((text))` is replaced by `text` with every
/// `c` and `C` removed.
pub struct StripDirective;

impl StripDirective {
    pub const OPEN: &'static str = "((";
    pub const CLOSE: &'static str = "))";
    pub const STRIPPED: [char; 2] = ['c', 'C'];

    fn pattern() -> &'static Regex {
        static PATTERN: OnceLock<Regex> = OnceLock::new();
        PATTERN.get_or_init(|| delimited_pattern(Self::OPEN, Self::CLOSE))
    }

    /// Removes every stripped character from `text`, leaving the rest untouched.
    pub fn strip(text: &str) -> String {
        text.chars()
            .filter(|ch| !Self::STRIPPED.contains(ch))
            .collect()
    }

    pub fn apply(line: &str) -> Cow<'_, str> {
        if !line.contains(Self::OPEN) {
            return Cow::Borrowed(line);
        }
        Self::pattern().replace_all(line, |caps: &Captures| Self::strip(&caps[1]))
    }
}
