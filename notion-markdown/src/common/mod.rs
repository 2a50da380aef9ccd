//! Format-agnostic mapping between Markdown's nested inlines and Notion's
//! flat rich text, plus the Notion HTML extension patterns both directions
//! share.

pub mod extensions;
pub mod flat_to_nested;
pub mod languages;
pub mod nested_to_flat;
