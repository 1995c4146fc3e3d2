//! Quantum oracle service library
//!
//! A small HTTP API returning simulated predictions and token-launch
//! optimizations. Randomness is injected through [`RandomSource`] so the
//! engine and the router can be driven deterministically in tests.

pub mod config;
pub mod core;
pub mod error;
pub mod oracle_impl;
pub mod services;
pub mod state;
pub mod traits;
pub mod types;
pub mod web;

// Re-export main types
pub use config::OracleConfig;
pub use error::{OracleError, OracleResult};
pub use oracle_impl::OracleServer;
pub use state::AppState;
pub use types::*;

// Re-export trait definitions
pub use traits::RandomSource;

// Re-export service implementations
pub use services::{SeededRandomSource, ThreadRandomSource};
