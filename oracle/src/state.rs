//! Handler state
//!
//! Read-only after construction; cloned into every request.

use std::sync::Arc;

use crate::core::{OracleEngine, StatusReporter};
use crate::traits::RandomSource;

#[derive(Debug)]
pub struct AppState<R: RandomSource> {
    pub engine: Arc<OracleEngine<R>>,
    pub reporter: Arc<StatusReporter>,
}

impl<R: RandomSource> AppState<R> {
    pub fn new(engine: OracleEngine<R>, reporter: StatusReporter) -> Self {
        Self {
            engine: Arc::new(engine),
            reporter: Arc::new(reporter),
        }
    }
}

// Manual impl: deriving would demand `R: Clone`
impl<R: RandomSource> Clone for AppState<R> {
    fn clone(&self) -> Self {
        Self {
            engine: Arc::clone(&self.engine),
            reporter: Arc::clone(&self.reporter),
        }
    }
}
