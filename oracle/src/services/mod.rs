//! Service implementations
//!
//! Real implementations of all service traits for production use

pub mod random_source;

// Re-export service implementations
pub use random_source::{SeededRandomSource, ThreadRandomSource};
