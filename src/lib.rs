#![warn(
    clippy::pedantic,
    future_incompatible,
    missing_debug_implementations,
    missing_docs,
    rust_2018_idioms
)]
#![deny(rustdoc::broken_intra_doc_links)]
#![doc = include_str!("../README.md")]

pub mod descriptor;
pub mod jvm;
pub(crate) mod macros;
pub mod types;

/// Test utilities
#[cfg(test)]
pub(crate) mod tests;
