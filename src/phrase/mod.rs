//! Keyword selection and phrase merging

pub mod merge;

pub use merge::{merge_adjacent, merge_run, select_keywords};
