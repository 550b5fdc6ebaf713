//! Core domain types and logic.

pub mod error;
pub mod options;
pub mod normalize;
pub mod entry_table;
pub mod value;
pub mod store;
