//! Extractive summary selection and presentation clean-up

pub mod selector;

pub use selector::{remove_leading_conjunction, select_summary};
