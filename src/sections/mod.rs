//! Strength rules
//!
//! Each section checks one rule of the default heuristic. A satisfied rule
//! adds one point to the score.

mod length;
mod variety;

pub use length::length_section;
pub use variety::{case_section, digit_section, punctuation_section};

/// Result type for section functions.
/// - `Some(hint)` - Rule not met, with a hint for the user
/// - `None` - Rule met
pub type SectionResult = Option<String>;
