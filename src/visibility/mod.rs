//! Conditional visibility of sections and fields.

mod evaluator;
mod filter;

pub use evaluator::{evaluate, evaluate_all, evaluate_condition, is_visible};
pub use filter::{filter_visible, visible_field_paths, visible_sections, VisibleSection};
