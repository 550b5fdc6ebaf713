//! secini — reader for a minimal section/key=value configuration format.
//!
//! Hexagonal architecture: parsing and typed lookup in [`domain`], the
//! accessor trait in [`ports`], file-system loading in [`adapters`].

pub mod domain;
pub mod ports;
pub mod adapters;
