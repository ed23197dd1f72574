/// The kind of list a marker opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListType {
    /// `- item`, rendered as `<ul>`.
    Unordered,
    /// `* item`, rendered as `<ol>`.
    Ordered,
}

impl ListType {
    pub fn tag(self) -> &'static str {
        match self {
            ListType::Unordered => "ul",
            ListType::Ordered => "ol",
        }
    }

    pub fn open_tag(self) -> String {
        format!("<{}>", self.tag())
    }

    pub fn close_tag(self) -> String {
        format!("</{}>", self.tag())
    }
}

/// List item markers with owned constants.
pub struct ListMarker;

impl ListMarker {
    pub const UNORDERED: &'static str = "- ";
    pub const ORDERED: &'static str = "* ";

    /// Detects a list item, returning its type and the trimmed item text.
    pub fn detect(line: &str) -> Option<(ListType, &str)> {
        if let Some(rest) = line.strip_prefix(Self::UNORDERED) {
            Some((ListType::Unordered, rest.trim()))
        } else {
            line.strip_prefix(Self::ORDERED)
                .map(|rest| (ListType::Ordered, rest.trim()))
        }
    }
}
