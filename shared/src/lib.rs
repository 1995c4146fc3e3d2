//! Shared support code for the quantum oracle service
//!
//! Service identity, the shared error type and the logging setup used by
//! every binary in the workspace.

pub mod errors;
pub mod logging;
pub mod types;

pub use errors::*;
pub use types::*;
