/// ATX-style heading with owned marker constant.
///
/// The level is the number of leading `#` characters and is not clamped,
/// so `#######` produces `<h7>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading<'a> {
    pub level: usize,
    pub content: &'a str,
}

impl<'a> Heading<'a> {
    /// The heading marker character.
    pub const MARKER: char = '#';

    /// Parses a heading from a line starting with at least one marker.
    ///
    /// The content is the line with markers stripped from both ends and
    /// surrounding whitespace trimmed.
    pub fn parse(line: &'a str) -> Option<Self> {
        let level = line.chars().take_while(|&ch| ch == Self::MARKER).count();
        if level == 0 {
            return None;
        }
        let content = line.trim_matches(Self::MARKER).trim();
        Some(Self { level, content })
    }

    pub fn to_html(&self) -> String {
        format!("<h{0}>{1}</h{0}>", self.level, self.content)
    }

    /// Renders the line as a heading if it is one, otherwise returns it unchanged.
    pub fn render(line: &str) -> String {
        match Heading::parse(line) {
            Some(heading) => heading.to_html(),
            None => line.to_string(),
        }
    }
}
