//! wilkins-core
//!
//! Pure domain types, fixed clinical reference catalogs, and color science.
//! No I/O: this is the shared vocabulary of the Wilkins protocol crates.

pub mod catalog;
pub mod color;
pub mod error;
pub mod models;
