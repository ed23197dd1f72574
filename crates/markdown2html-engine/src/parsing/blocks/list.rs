use super::kinds::{ListMarker, ListType};

/// Whether a list is currently open, and which tag opened it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ListState {
    #[default]
    Closed,
    Open(ListType),
}

/// Groups consecutive list items into a single `<ul>` or `<ol>` block.
///
/// Only whether *a* list is open is tracked. An item with a different marker
/// joins the open list instead of starting a new one, and the closing tag is
/// always the one matching the marker that opened the list.
#[derive(Debug, Default)]
pub struct ListClassifier {
    state: ListState,
}

impl ListClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ListState {
        self.state
    }

    /// Classifies one line, returning the HTML fragment to emit for it.
    ///
    /// Fragments that open or close a list span two lines joined by `\n`.
    pub fn push(&mut self, line: &str) -> String {
        match (ListMarker::detect(line), self.state) {
            (Some((list_type, item)), ListState::Closed) => {
                self.state = ListState::Open(list_type);
                format!("{}\n<li>{item}</li>", list_type.open_tag())
            }
            (Some((_, item)), ListState::Open(_)) => format!("<li>{item}</li>"),
            (None, ListState::Open(list_type)) => {
                self.state = ListState::Closed;
                format!("{}\n{line}", list_type.close_tag())
            }
            (None, ListState::Closed) => line.to_string(),
        }
    }

    /// Consumes the classifier, returning the list left open at end of input.
    pub fn finish(self) -> Option<ListType> {
        match self.state {
            ListState::Open(list_type) => Some(list_type),
            ListState::Closed => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn classify_all(lines: &[&str]) -> (Vec<String>, Option<ListType>) {
        let mut classifier = ListClassifier::new();
        let out = lines.iter().map(|line| classifier.push(line)).collect();
        (out, classifier.finish())
    }

    #[test]
    fn groups_items_and_closes_on_text() {
        let (out, open) = classify_all(&["- a", "- b", "para"]);
        assert_eq!(out, vec!["<ul>\n<li>a</li>", "<li>b</li>", "</ul>\npara"]);
        assert_eq!(open, None);
    }

    #[test]
    fn star_marker_opens_ordered_list() {
        let (out, open) = classify_all(&["* one", "* two"]);
        assert_eq!(out, vec!["<ol>\n<li>one</li>", "<li>two</li>"]);
        assert_eq!(open, Some(ListType::Ordered));
    }

    #[test]
    fn switching_marker_keeps_list_open() {
        let (out, open) = classify_all(&["- a", "* b", "end"]);
        assert_eq!(out, vec!["<ul>\n<li>a</li>", "<li>b</li>", "</ul>\nend"]);
        assert_eq!(open, None);
    }

    #[test]
    fn close_uses_stored_type() {
        let (out, _) = classify_all(&["* a", "- b", ""]);
        assert_eq!(out[2], "</ol>\n");
    }

    #[test]
    fn text_outside_list_passes_through() {
        let (out, open) = classify_all(&["hello", "<h1>Title</h1>"]);
        assert_eq!(out, vec!["hello", "<h1>Title</h1>"]);
        assert_eq!(open, None);
    }

    #[test]
    fn reports_unclosed_list() {
        let mut classifier = ListClassifier::new();
        classifier.push("- last");
        assert_eq!(classifier.state(), ListState::Open(ListType::Unordered));
        assert_eq!(classifier.finish(), Some(ListType::Unordered));
    }

    #[test]
    fn can_reopen_after_close() {
        let (out, open) = classify_all(&["- a", "x", "* b"]);
        assert_eq!(
            out,
            vec!["<ul>\n<li>a</li>", "</ul>\nx", "<ol>\n<li>b</li>"]
        );
        assert_eq!(open, Some(ListType::Ordered));
    }
}
