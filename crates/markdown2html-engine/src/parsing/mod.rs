pub mod blocks;
pub mod inline;
pub mod paragraph;

use blocks::{BlockClassifier, ListType};
use inline::transform_inline;
use paragraph::wrap_paragraphs;

/// The converted document: body lines plus any list left open at the end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlFragment {
    pub body: Vec<String>,
    pub unclosed_list: Option<ListType>,
}

impl HtmlFragment {
    /// Every output line in order, including the trailing list close.
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        self.body
            .iter()
            .cloned()
            .chain(self.unclosed_list.map(ListType::close_tag))
    }

    /// Renders the fragment exactly as the writer puts it on disk.
    pub fn to_html(&self) -> String {
        self.lines().fold(String::new(), |mut acc, line| {
            acc.push_str(&line);
            acc.push('\n');
            acc
        })
    }
}

/// Runs the inline, block and paragraph passes over raw input lines.
pub fn convert_lines<'a>(lines: impl IntoIterator<Item = &'a str>) -> HtmlFragment {
    let mut classifier = BlockClassifier::new();
    let fragments: Vec<String> = lines
        .into_iter()
        .map(|line| classifier.push(&transform_inline(line)))
        .collect();

    HtmlFragment {
        body: wrap_paragraphs(fragments.iter().map(String::as_str)),
        unclosed_list: classifier.finish(),
    }
}

/// Convenience: convert a whole Markdown string to HTML text.
pub fn convert_str(markdown: &str) -> String {
    convert_lines(markdown.lines()).to_html()
}
