//! Test helper utilities for oracle integration tests

use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response, header};
use quantum_oracle::traits::MockRandomSource;
use quantum_oracle::{OracleConfig, OracleServer, SeededRandomSource, ThreadRandomSource};

pub const TEST_SERVICE_NAME: &str = "Test Quantum Oracle";

pub fn test_config() -> OracleConfig {
    OracleConfig::new("127.0.0.1", 0, TEST_SERVICE_NAME).unwrap()
}

/// Router backed by thread-local entropy
pub fn create_test_router() -> Router {
    OracleServer::new(test_config(), ThreadRandomSource::new()).build_router()
}

/// Router backed by a seeded generator
pub fn create_seeded_router(seed: u64) -> Router {
    OracleServer::new(test_config(), SeededRandomSource::new(seed)).build_router()
}

/// Router whose every uniform draw is `unit`
pub fn create_fixed_router(unit: f64) -> Router {
    let mut rng = MockRandomSource::new();
    rng.expect_next_unit().return_const(unit);
    rng.expect_next_below().return_const(0u32);
    OracleServer::new(test_config(), rng).build_router()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}
