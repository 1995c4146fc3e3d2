//! Health and status reporters
//!
//! Nothing here is measured; both reports are assembled from literals.

use crate::types::{HealthReport, StatusSnapshot};

const HEALTHY: &str = "healthy";
const QUBITS_AVAILABLE: u32 = 256;
const QUEUE_LENGTH: u32 = 3;
const UPTIME: &str = "99.9%";
const ACTIVE_JOBS: u32 = 12;

#[derive(Debug, Clone)]
pub struct StatusReporter {
    service_name: String,
}

impl StatusReporter {
    pub fn new(service_name: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
        }
    }

    pub fn service_name(&self) -> &str {
        &self.service_name
    }

    pub fn health(&self) -> HealthReport {
        HealthReport {
            status: HEALTHY.to_string(),
            service: self.service_name.clone(),
        }
    }

    pub fn status(&self) -> StatusSnapshot {
        StatusSnapshot {
            qubits_available: QUBITS_AVAILABLE,
            queue_length: QUEUE_LENGTH,
            uptime: UPTIME.to_string(),
            active_jobs: ACTIVE_JOBS,
        }
    }
}
