use regex::{Captures, Regex};
use std::borrow::Cow;
use std::sync::OnceLock;

use super::delimited_pattern;

/// Bracket-hash directive: `[[text]]` is replaced by the lowercase hex MD5
/// digest of the exact bytes of `text`.
pub struct HashDirective;

impl HashDirective {
    pub const OPEN: &'static str = "[[";
    pub const CLOSE: &'static str = "]]";

    fn pattern() -> &'static Regex {
        static PATTERN: OnceLock<Regex> = OnceLock::new();
        PATTERN.get_or_init(|| delimited_pattern(Self::OPEN, Self::CLOSE))
    }

    /// Hex MD5 digest of `text`, 32 lowercase characters.
    pub fn digest(text: &str) -> String {
        format!("{:x}", md5::compute(text.as_bytes()))
    }

    pub fn apply(line: &str) -> Cow<'_, str> {
        if !line.contains(Self::OPEN) {
            return Cow::Borrowed(line);
        }
        Self::pattern().replace_all(line, |caps: &Captures| Self::digest(&caps[1]))
    }
}
