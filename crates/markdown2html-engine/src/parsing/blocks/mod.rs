//! # Block Classification
//!
//! Turns inline-transformed lines into block-level HTML fragments.
//!
//! ## Phases
//!
//! 1. **Heading detection** (`kinds::Heading`): stateless, one line at a time
//! 2. **List grouping** (`list`): `ListClassifier` tracks whether a list is open
//!    and emits opening and closing tags around runs of items
//!
//! ## Modules
//!
//! - **`kinds`**: block types with owned markers (`Heading`, `ListMarker`)
//! - **`list`**: `ListClassifier` state machine and `ListState`
//! - **`classify`**: `BlockClassifier` running both phases in order
//!
//! ## Key Invariants
//!
//! - Heading detection runs first; later stages look for the `<h` prefix
//! - Only one list can be open, and its tag is decided by the first item

pub mod classify;
pub mod kinds;
pub mod list;

pub use classify::BlockClassifier;
pub use kinds::{Heading, ListMarker, ListType};
pub use list::{ListClassifier, ListState};
