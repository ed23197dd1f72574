//! Paragraph wrapping over the classified line sequence.
//!
//! Lines opening a list (`<ul`, `<li`, `<ol`) leave paragraph mode without a
//! closing `</p>`, while headings and list closes emit one first. Both
//! behaviors are kept as-is.

/// A block boundary that closes an open paragraph before being emitted.
const CLOSING_PREFIXES: [&str; 3] = ["<h", "</ul>", "</ol>"];
/// A list line that leaves paragraph mode silently.
const LIST_PREFIXES: [&str; 3] = ["<ul", "<li", "<ol"];

pub const PARAGRAPH_OPEN: &str = "<p>";
pub const PARAGRAPH_CLOSE: &str = "</p>";
pub const LINE_BREAK: &str = "<br />";

#[derive(Debug, Default)]
pub struct ParagraphWrapper {
    in_paragraph: bool,
    out: Vec<String>,
}

impl ParagraphWrapper {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, line: &str) {
        if CLOSING_PREFIXES.iter().any(|p| line.starts_with(p)) {
            self.close_paragraph();
            self.out.push(line.to_string());
        } else if LIST_PREFIXES.iter().any(|p| line.starts_with(p)) {
            self.in_paragraph = false;
            self.out.push(line.to_string());
        } else if line.trim().is_empty() {
            self.close_paragraph();
        } else {
            let separator = if self.in_paragraph {
                LINE_BREAK
            } else {
                PARAGRAPH_OPEN
            };
            self.out.push(separator.to_string());
            self.out.push(line.to_string());
            self.in_paragraph = true;
        }
    }

    pub fn finish(mut self) -> Vec<String> {
        // EOF flush
        self.close_paragraph();
        self.out
    }

    fn close_paragraph(&mut self) {
        if self.in_paragraph {
            self.out.push(PARAGRAPH_CLOSE.to_string());
            self.in_paragraph = false;
        }
    }
}

/// Wraps a full line sequence, splitting multi-line fragments first.
pub fn wrap_paragraphs<'a>(fragments: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let mut wrapper = ParagraphWrapper::new();
    let lines = fragments.into_iter().flat_map(|f| f.split('\n'));
    for line in lines {
        wrapper.push(line);
    }
    wrapper.finish()
}
