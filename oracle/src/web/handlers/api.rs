//! REST API handlers
//!
//! HTTP endpoints under `/api/quantum`

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::Uri;
use axum::response::Json;
use serde_json::Value;
use shared::{ServiceId, service_debug};

use crate::error::{OracleError, OracleResult};
use crate::state::AppState;
use crate::traits::RandomSource;
use crate::types::{
    ApiResponse, HealthReport, OptimizationResult, OptimizeRequest, PredictRequest,
    PredictionResult, StatusSnapshot,
};

/// Liveness check - /api/quantum/health
pub async fn health<R>(State(state): State<AppState<R>>) -> Json<HealthReport>
where
    R: RandomSource + 'static,
{
    Json(state.reporter.health())
}

/// Fabricated backend status - /api/quantum/status
pub async fn status<R>(State(state): State<AppState<R>>) -> Json<ApiResponse<StatusSnapshot>>
where
    R: RandomSource + 'static,
{
    Json(ApiResponse::ok(state.reporter.status()))
}

/// Simulated prediction - /api/quantum/predict
pub async fn predict<R>(
    State(state): State<AppState<R>>,
    body: Result<Json<Value>, JsonRejection>,
) -> OracleResult<Json<ApiResponse<PredictionResult>>>
where
    R: RandomSource + 'static,
{
    let Json(body) = body?;
    let request = PredictRequest::from_body(&body)?;

    let prediction = state.engine.generate_prediction(&request.data);

    service_debug!(
        ServiceId::current(),
        "🔮 Prediction {} (confidence {:.3}, {}ms)",
        prediction.result,
        prediction.confidence,
        prediction.execution_time_ms
    );

    Ok(Json(ApiResponse::ok(prediction)))
}

/// Simulated launch optimization - /api/quantum/optimize
pub async fn optimize<R>(
    State(state): State<AppState<R>>,
    body: Result<Json<Value>, JsonRejection>,
) -> OracleResult<Json<ApiResponse<OptimizationResult>>>
where
    R: RandomSource + 'static,
{
    let Json(body) = body?;
    let request = OptimizeRequest::from_body(&body)?;

    let optimized = state.engine.optimize_launch(
        request.initial_price,
        request.liquidity_target,
        request.volatility,
    );

    if !optimized.is_finite() {
        return Err(OracleError::internal(
            "optimization overflowed: inputs too large to produce finite values",
        ));
    }

    service_debug!(
        ServiceId::current(),
        "📈 Optimized launch: price {} -> {:.4}",
        request.initial_price,
        optimized.optimized_price
    );

    Ok(Json(ApiResponse::ok(optimized)))
}

/// Known route, unsupported method
pub async fn method_not_allowed() -> OracleError {
    OracleError::MethodNotAllowed
}

/// Unknown route
pub async fn not_found(uri: Uri) -> OracleError {
    OracleError::NotFound {
        path: uri.path().to_string(),
    }
}
