//! Service configuration
//!
//! Built from command line arguments (with environment fallbacks) in
//! `main.rs`; validated here so the server only ever sees sane values.

use shared::{DEFAULT_SERVICE_NAME, SharedError, SharedResult};
use std::net::{SocketAddr, ToSocketAddrs};

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;

/// Path prefix every API route is mounted under
pub const API_BASE_PATH: &str = "/api/quantum";

#[derive(Debug, Clone, PartialEq)]
pub struct OracleConfig {
    pub bind_address: SocketAddr,
    pub service_name: String,
    pub seed: Option<u64>,
}

impl OracleConfig {
    pub fn new(host: &str, port: u16, service_name: &str) -> SharedResult<Self> {
        let bind_address = resolve_bind_address(host, port)?;

        let service_name = service_name.trim();
        if service_name.is_empty() {
            return Err(SharedError::invalid_config("service_name", "<empty>"));
        }

        Ok(Self {
            bind_address,
            service_name: service_name.to_string(),
            seed: None,
        })
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }
}

/// Resolve an IP literal or hostname (`localhost`) to the first address it
/// maps to
fn resolve_bind_address(host: &str, port: u16) -> SharedResult<SocketAddr> {
    let host = host.trim();
    if host.is_empty() {
        return Err(SharedError::invalid_config("host", "<empty>"));
    }

    (host, port)
        .to_socket_addrs()
        .map_err(|_| SharedError::invalid_config("host", host))?
        .next()
        .ok_or_else(|| SharedError::invalid_config("host", host))
}

impl Default for OracleConfig {
    fn default() -> Self {
        Self {
            bind_address: SocketAddr::from(([127, 0, 0, 1], DEFAULT_PORT)),
            service_name: DEFAULT_SERVICE_NAME.to_string(),
            seed: None,
        }
    }
}
