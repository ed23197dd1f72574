//! Block types that own their syntax markers.

pub mod heading;
pub mod list_marker;

pub use heading::Heading;
pub use list_marker::{ListMarker, ListType};
