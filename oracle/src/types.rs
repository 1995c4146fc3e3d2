//! Type definitions for the oracle API
//!
//! Request bodies, response payloads and the `{success, data | error}`
//! envelope shared by every endpoint except `/health`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{OracleError, OracleResult};

/// Response envelope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

/// Simulated prediction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub result: String,
    pub confidence: f64,
    pub qubits: u32,
    #[serde(rename = "executionTimeMs")]
    pub execution_time_ms: u32,
}

/// Simulated launch optimization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizationResult {
    pub optimized_price: f64,
    pub optimized_liquidity: f64,
    pub optimized_volatility: f64,
    pub confidence: f64,
    pub quantum_advantage: bool,
}

impl OptimizationResult {
    /// False when any optimized value overflowed to infinity or became NaN.
    /// JSON has no encoding for those, so they must never reach a response.
    pub fn is_finite(&self) -> bool {
        self.optimized_price.is_finite()
            && self.optimized_liquidity.is_finite()
            && self.optimized_volatility.is_finite()
    }
}

/// Fabricated operational metrics for `/status`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusSnapshot {
    pub qubits_available: u32,
    pub queue_length: u32,
    pub uptime: String,
    pub active_jobs: u32,
}

/// Body of `/health`; not wrapped in an envelope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthReport {
    pub status: String,
    pub service: String,
}

/// Body of `POST /predict`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictRequest {
    pub data: String,
}

impl PredictRequest {
    pub fn from_body(body: &Value) -> OracleResult<Self> {
        let data = required(body, "data")?
            .as_str()
            .ok_or(OracleError::InvalidField {
                field: "data",
                expected: "a string",
            })?;

        Ok(Self {
            data: data.to_string(),
        })
    }
}

/// Body of `POST /optimize`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizeRequest {
    pub initial_price: f64,
    pub liquidity_target: f64,
    pub volatility: f64,
}

impl OptimizeRequest {
    pub fn from_body(body: &Value) -> OracleResult<Self> {
        Ok(Self {
            initial_price: required_number(body, "initial_price")?,
            liquidity_target: required_number(body, "liquidity_target")?,
            volatility: required_number(body, "volatility")?,
        })
    }
}

/// Look up a field that must be present and non-null
fn required<'a>(body: &'a Value, field: &'static str) -> OracleResult<&'a Value> {
    let object = body.as_object().ok_or_else(|| OracleError::MalformedBody {
        details: "request body must be a JSON object".to_string(),
    })?;

    match object.get(field) {
        None | Some(Value::Null) => Err(OracleError::MissingField { field }),
        Some(value) => Ok(value),
    }
}

fn required_number(body: &Value, field: &'static str) -> OracleResult<f64> {
    required(body, field)?
        .as_f64()
        .ok_or(OracleError::InvalidField {
            field,
            expected: "a number",
        })
}
