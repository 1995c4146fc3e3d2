//! Core shared types and identifiers

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

static SERVICE_ID: OnceLock<ServiceId> = OnceLock::new();

/// Default name reported when no service name has been configured
pub const DEFAULT_SERVICE_NAME: &str = "Quantum Oracle API";

/// Identity of the running service, attached to every log line
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ServiceId {
    name: String,
}

impl ServiceId {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Initialize the global service ID. The first call wins.
    pub fn init(name: impl Into<String>) -> &'static ServiceId {
        let id = ServiceId::new(name);
        SERVICE_ID.get_or_init(|| id)
    }

    /// Get the global service ID, falling back to the default name when
    /// `init` was never called (unit tests, library use)
    pub fn current() -> &'static ServiceId {
        SERVICE_ID.get_or_init(ServiceId::default)
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for ServiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl Default for ServiceId {
    fn default() -> Self {
        ServiceId::new(DEFAULT_SERVICE_NAME)
    }
}
