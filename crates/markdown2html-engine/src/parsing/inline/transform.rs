use super::kinds::{Bold, Emphasis, HashDirective, StripDirective};

/// Applies every inline pass to a single line, in fixed order.
///
/// Lines that contain none of the delimiters come back unchanged.
pub fn transform_inline(line: &str) -> String {
    let hashed = HashDirective::apply(line);
    let stripped = StripDirective::apply(&hashed);
    let bolded = Bold::apply(&stripped);
    Emphasis::apply(&bolded).into_owned()
}
