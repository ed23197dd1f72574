use super::{
    kinds::{Heading, ListType},
    list::ListClassifier,
};

/// Runs heading detection and list grouping over a stream of lines.
#[derive(Debug, Default)]
pub struct BlockClassifier {
    lists: ListClassifier,
}

impl BlockClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Classifies one inline-transformed line into a block fragment.
    pub fn push(&mut self, line: &str) -> String {
        let line = Heading::render(line);
        let fragment = self.lists.push(&line);
        log::trace!("classified {line:?} as {fragment:?}");
        fragment
    }

    /// Returns the list that is still open at end of input, if any.
    pub fn finish(self) -> Option<ListType> {
        self.lists.finish()
    }
}
