//! Service trait definitions for dependency injection
//!
//! Entropy is the only shared resource in the service, so it sits behind a
//! trait that tests can replace with fixed draws.

/// Source of uniform random draws shared by concurrent requests
#[mockall::automock]
pub trait RandomSource: Send + Sync {
    /// Uniform draw in `[0, 1)`
    fn next_unit(&self) -> f64;

    /// Uniform integer in `[0, bound)`. `bound` must be non-zero.
    fn next_below(&self, bound: u32) -> u32;
}
