//! Core business logic modules
//!
//! Pure business logic with no I/O dependencies

pub mod engine;
pub mod reporter;

// Re-export commonly used types
pub use engine::OracleEngine;
pub use reporter::StatusReporter;
