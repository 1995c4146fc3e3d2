//! Shared logging utilities for consistent tracing across the service

use crate::errors::{SharedError, SharedResult};
use crate::types::ServiceId;
use chrono::{DateTime, Utc};
use tracing::{error, info};

/// Levels accepted by `--log-level`
pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Build the per-crate filter directive for a base log level
pub fn filter_directive(log_level: Option<&str>) -> SharedResult<String> {
    let base_level = log_level.unwrap_or("info").to_lowercase();

    if !LOG_LEVELS.contains(&base_level.as_str()) {
        return Err(SharedError::invalid_config("log_level", base_level));
    }

    Ok(format!(
        "quantum_oracle={base_level},shared={base_level},tower_http=debug,axum={base_level}"
    ))
}

/// Initialize the stdout tracing subscriber with an optional log level
pub fn init_tracing_with_level(log_level: Option<&str>) -> SharedResult<()> {
    use tracing_subscriber::{EnvFilter, fmt};

    let directive = filter_directive(log_level)?;
    let env_filter = EnvFilter::try_new(&directive).map_err(|e| SharedError::LoggingInit {
        message: e.to_string(),
    })?;

    println!("📊 Log level: {directive}");

    fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .try_init()
        .map_err(|e| SharedError::LoggingInit {
            message: e.to_string(),
        })
}

/// Get formatted timestamp for consistent logging
pub fn format_timestamp() -> String {
    let now: DateTime<Utc> = Utc::now();
    now.format("%H:%M:%S%.3f").to_string()
}

/// Macro for service-aware info logging
#[macro_export]
macro_rules! service_info {
    ($service_id:expr, $($arg:tt)*) => {
        tracing::info!(
            service = %$service_id,
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Macro for service-aware warning logging
#[macro_export]
macro_rules! service_warn {
    ($service_id:expr, $($arg:tt)*) => {
        tracing::warn!(
            service = %$service_id,
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Macro for service-aware error logging
#[macro_export]
macro_rules! service_error {
    ($service_id:expr, $($arg:tt)*) => {
        tracing::error!(
            service = %$service_id,
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Macro for service-aware debug logging
#[macro_export]
macro_rules! service_debug {
    ($service_id:expr, $($arg:tt)*) => {
        tracing::debug!(
            service = %$service_id,
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Contextual logging helper for startup messages
pub fn log_startup(service_id: &ServiceId, details: &str) {
    info!(
        service = %service_id,
        timestamp = format_timestamp(),
        "🚀 Starting {}",
        details
    );
}

/// Contextual logging helper for shutdown messages
pub fn log_shutdown(service_id: &ServiceId, reason: &str) {
    info!(
        service = %service_id,
        timestamp = format_timestamp(),
        "🛑 Shutting down: {}",
        reason
    );
}

/// Contextual logging helper for error conditions
pub fn log_error(service_id: &ServiceId, context: &str, error: &dyn std::fmt::Display) {
    error!(
        service = %service_id,
        timestamp = format_timestamp(),
        error = %error,
        "❌ {} failed: {}",
        context,
        error
    );
}

/// Contextual logging helper for success conditions
pub fn log_success(service_id: &ServiceId, message: &str) {
    info!(
        service = %service_id,
        timestamp = format_timestamp(),
        "✅ {}",
        message
    );
}
