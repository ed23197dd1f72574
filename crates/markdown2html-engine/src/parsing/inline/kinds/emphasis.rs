use regex::Regex;
use std::borrow::Cow;
use std::sync::OnceLock;

use super::delimited_pattern;

/// Emphasis span: `__text__` becomes `<em>text</em>`.
pub struct Emphasis;

impl Emphasis {
    pub const DELIMITER: &'static str = "__";

    fn pattern() -> &'static Regex {
        static PATTERN: OnceLock<Regex> = OnceLock::new();
        PATTERN.get_or_init(|| delimited_pattern(Self::DELIMITER, Self::DELIMITER))
    }

    pub fn apply(line: &str) -> Cow<'_, str> {
        Self::pattern().replace_all(line, "<em>${1}</em>")
    }
}
