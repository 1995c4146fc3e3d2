//! Prediction and launch-optimization engine
//!
//! Pure computations over request inputs and the injected random source.

use crate::error::{OracleError, OracleResult};
use crate::traits::RandomSource;
use crate::types::{OptimizationResult, PredictionResult};

/// Qubit count reported for every prediction
pub const PREDICTION_QUBITS: u32 = 256;

/// Confidence reported for every optimization
pub const OPTIMIZATION_CONFIDENCE: f64 = 0.92;

const RESULT_LABEL_PREFIX: &str = "quantum_prediction_";
const RESULT_LABEL_RANGE: u32 = 1000;

const CONFIDENCE_FLOOR: f64 = 0.85;
const CONFIDENCE_SPAN: f64 = 0.14;

const EXECUTION_TIME_FLOOR_MS: u32 = 100;
const EXECUTION_TIME_SPAN_MS: u32 = 500;

const PRICE_SWING: f64 = 0.15;
const LIQUIDITY_BOOST: f64 = 0.5;
const VOLATILITY_FLOOR: f64 = 0.7;
const VOLATILITY_SPAN: f64 = 0.3;

const EXECUTION_TIME_SCALE: f64 = 50.0;

/// Stateless engine; the random source is the only thing it holds
#[derive(Debug)]
pub struct OracleEngine<R: RandomSource> {
    rng: R,
}

impl<R: RandomSource> OracleEngine<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Produce a simulated prediction. The input is accepted but its
    /// content does not influence the result.
    pub fn generate_prediction(&self, _input: &str) -> PredictionResult {
        let label = self.rng.next_below(RESULT_LABEL_RANGE);
        let confidence = CONFIDENCE_FLOOR + self.rng.next_unit() * CONFIDENCE_SPAN;
        let execution_time_ms =
            EXECUTION_TIME_FLOOR_MS + self.rng.next_below(EXECUTION_TIME_SPAN_MS);

        PredictionResult {
            result: format!("{RESULT_LABEL_PREFIX}{label}"),
            confidence,
            qubits: PREDICTION_QUBITS,
            execution_time_ms,
        }
    }

    /// Perturb launch parameters. Inputs are not range-checked, so zero or
    /// negative values pass straight through the arithmetic.
    pub fn optimize_launch(
        &self,
        initial_price: f64,
        liquidity_target: f64,
        volatility: f64,
    ) -> OptimizationResult {
        let price_factor = 1.0 + (self.rng.next_unit() * 2.0 * PRICE_SWING - PRICE_SWING);
        let liquidity_factor = 1.0 + self.rng.next_unit() * LIQUIDITY_BOOST;
        let volatility_factor = VOLATILITY_FLOOR + self.rng.next_unit() * VOLATILITY_SPAN;

        OptimizationResult {
            optimized_price: initial_price * price_factor,
            optimized_liquidity: liquidity_target * liquidity_factor,
            optimized_volatility: volatility * volatility_factor,
            confidence: OPTIMIZATION_CONFIDENCE,
            quantum_advantage: true,
        }
    }

    /// `floor(ln(complexity) * 50)`, defined for positive complexity only
    pub fn estimate_execution_time(&self, complexity: i64) -> OracleResult<u64> {
        if complexity <= 0 {
            return Err(OracleError::InvalidComplexity { complexity });
        }

        Ok(((complexity as f64).ln() * EXECUTION_TIME_SCALE).floor() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::ThreadRandomSource;
    use crate::traits::MockRandomSource;

    fn fixed_engine(unit: f64) -> OracleEngine<MockRandomSource> {
        let mut rng = MockRandomSource::new();
        rng.expect_next_unit().return_const(unit);
        rng.expect_next_below().returning(|bound| bound - 1);
        OracleEngine::new(rng)
    }

    #[test]
    fn test_prediction_with_fixed_draws() {
        let engine = fixed_engine(0.5);
        let prediction = engine.generate_prediction("anything");

        assert_eq!(prediction.result, "quantum_prediction_999");
        assert!((prediction.confidence - 0.92).abs() < 1e-12);
        assert_eq!(prediction.qubits, 256);
        assert_eq!(prediction.execution_time_ms, 599);
    }

    #[test]
    fn test_prediction_lower_bounds() {
        let mut rng = MockRandomSource::new();
        rng.expect_next_unit().return_const(0.0);
        rng.expect_next_below().return_const(0u32);
        let engine = OracleEngine::new(rng);

        let prediction = engine.generate_prediction("");
        assert_eq!(prediction.result, "quantum_prediction_0");
        assert_eq!(prediction.confidence, 0.85);
        assert_eq!(prediction.execution_time_ms, 100);
    }

    #[test]
    fn test_prediction_ranges_with_real_source() {
        let engine = OracleEngine::new(ThreadRandomSource::new());

        for _ in 0..500 {
            let prediction = engine.generate_prediction("x");
            assert!((0.85..=0.99).contains(&prediction.confidence));
            assert!((100..600).contains(&prediction.execution_time_ms));
            assert!(prediction.result.starts_with("quantum_prediction_"));
        }
    }

    #[test]
    fn test_optimization_midpoint() {
        let engine = fixed_engine(0.5);
        let result = engine.optimize_launch(100.0, 1000.0, 0.5);

        assert!((result.optimized_price - 100.0).abs() < 1e-9);
        assert!((result.optimized_liquidity - 1250.0).abs() < 1e-9);
        assert!((result.optimized_volatility - 0.425).abs() < 1e-9);
        assert_eq!(result.confidence, 0.92);
        assert!(result.quantum_advantage);
    }

    #[test]
    fn test_optimization_extremes() {
        let low = fixed_engine(0.0).optimize_launch(100.0, 1000.0, 0.5);
        assert!((low.optimized_price - 85.0).abs() < 1e-9);
        assert!((low.optimized_liquidity - 1000.0).abs() < 1e-9);
        assert!((low.optimized_volatility - 0.35).abs() < 1e-9);

        let high = fixed_engine(1.0).optimize_launch(100.0, 1000.0, 0.5);
        assert!((high.optimized_price - 115.0).abs() < 1e-9);
        assert!((high.optimized_liquidity - 1500.0).abs() < 1e-9);
        assert!((high.optimized_volatility - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_optimization_propagates_negative_inputs() {
        let result = fixed_engine(0.5).optimize_launch(-10.0, 0.0, -1.0);
        assert!((result.optimized_price + 10.0).abs() < 1e-9);
        assert_eq!(result.optimized_liquidity, 0.0);
        assert!(result.optimized_volatility < 0.0);
    }

    #[test]
    fn test_estimate_execution_time() {
        let engine = OracleEngine::new(ThreadRandomSource::new());

        assert_eq!(engine.estimate_execution_time(1).unwrap(), 0);
        assert_eq!(engine.estimate_execution_time(100).unwrap(), 230);
        assert_eq!(engine.estimate_execution_time(1000).unwrap(), 345);
    }

    #[test]
    fn test_estimate_execution_time_rejects_non_positive() {
        let engine = OracleEngine::new(ThreadRandomSource::new());

        for complexity in [0, -5] {
            let result = engine.estimate_execution_time(complexity);
            assert!(matches!(
                result,
                Err(OracleError::InvalidComplexity { complexity: c }) if c == complexity
            ));
        }
    }
}
