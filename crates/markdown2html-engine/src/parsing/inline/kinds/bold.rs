use regex::Regex;
use std::borrow::Cow;
use std::sync::OnceLock;

use super::delimited_pattern;

/// Bold span: `**text**` becomes `<b>text</b>`.
pub struct Bold;

impl Bold {
    pub const DELIMITER: &'static str = "**";

    fn pattern() -> &'static Regex {
        static PATTERN: OnceLock<Regex> = OnceLock::new();
        PATTERN.get_or_init(|| delimited_pattern(Self::DELIMITER, Self::DELIMITER))
    }

    pub fn apply(line: &str) -> Cow<'_, str> {
        Self::pattern().replace_all(line, "<b>${1}</b>")
    }
}
