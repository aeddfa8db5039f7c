//! Module containing the APIs for the JVM elements.

pub mod method;
pub mod references;

pub use method::Method;
