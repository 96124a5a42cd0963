use crate::core::analyser::analyse_hits;
use crate::core::generator::{unique_value_sets, DrawGenerator};
use crate::core::validator::validate_batch;
use crate::domain::model::{DrawOutcome, DrawResponse};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{DrawError, Result};
use crate::utils::monitor::SystemMonitor;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use serde_json::Value;

/// Runs one request: validate, deduplicate, draw, analyse.
pub struct DrawEngine<R: RngCore> {
    rng: R,
    generator: DrawGenerator,
    monitor: SystemMonitor,
}

impl DrawEngine<StdRng> {
    pub fn from_config<C: ConfigProvider>(config: &C) -> Self {
        let rng = match config.seed() {
            Some(seed) => {
                tracing::info!("🎲 Using fixed RNG seed {}", seed);
                StdRng::seed_from_u64(seed)
            }
            None => StdRng::from_entropy(),
        };
        Self::new_with_monitoring(rng, config.monitoring_enabled())
    }
}

impl<R: RngCore> DrawEngine<R> {
    pub fn new(rng: R) -> Self {
        Self::new_with_monitoring(rng, false)
    }

    pub fn new_with_monitoring(rng: R, monitor_enabled: bool) -> Self {
        Self {
            rng,
            generator: DrawGenerator::default(),
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    pub fn with_generator(mut self, generator: DrawGenerator) -> Self {
        self.generator = generator;
        self
    }

    pub fn run(&mut self, payload: &Value) -> Result<DrawResponse> {
        tracing::info!("Starting draw request");

        // 驗證
        let validated = validate_batch(payload)?;
        tracing::info!("Validated {} combinations", validated.len());
        self.monitor.log_stats("Validate");

        // 去重
        let unique = unique_value_sets(&validated);
        tracing::info!("{} unique combinations after dedup", unique.len());

        // 開獎
        let draw = self.generator.generate(&unique, &mut self.rng)?;
        tracing::info!("🎯 Draw generated: {:?}", draw.numbers());
        self.monitor.log_stats("Generate");

        // 命中分析
        let hit_report = analyse_hits(&validated, &draw);
        tracing::info!(
            "Hit report: {} with 6, {} with 5, {} with 4 hits",
            hit_report.six_hits,
            hit_report.five_hits,
            hit_report.four_hits
        );
        self.monitor.log_stats("Analyse");
        self.monitor.log_final_stats();

        Ok(DrawResponse {
            draw,
            combinations_submitted: validated.len(),
            unique_combinations: unique.len(),
            message: format!(
                "Draw generated! It does not match any of your {} unique combination(s).",
                unique.len()
            ),
            hit_report,
        })
    }

    /// Like [`run`](Self::run), with errors folded into a status and error body.
    pub fn handle(&mut self, payload: &Value) -> DrawOutcome {
        let result = self.run(payload);
        if let Err(e) = &result {
            log_failure(e);
        }
        DrawOutcome::from_result(result)
    }

    pub fn handle_bytes(&mut self, body: &[u8]) -> DrawOutcome {
        match serde_json::from_slice::<Value>(body) {
            Ok(payload) => self.handle(&payload),
            Err(e) => {
                let err = DrawError::from(e);
                log_failure(&err);
                DrawOutcome::from_error(&err)
            }
        }
    }
}

fn log_failure(e: &DrawError) {
    if e.is_client_error() {
        tracing::warn!("Rejected draw request: {}", e);
    } else {
        tracing::error!(
            "❌ Draw request failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;
    use serde_json::json;

    #[test]
    fn test_run_reports_counts() {
        let mut engine = DrawEngine::new(StdRng::seed_from_u64(1));
        let payload = json!({"combinations": [
            [1, 2, 3, 4, 5, 6, 7],
            [7, 6, 5, 4, 3, 2, 1],
            [10, 11, 12, 13, 14, 15, 16]
        ]});

        let response = engine.run(&payload).unwrap();
        assert_eq!(response.combinations_submitted, 3);
        assert_eq!(response.unique_combinations, 2);
        assert_eq!(
            response.message,
            "Draw generated! It does not match any of your 2 unique combination(s)."
        );
    }

    #[test]
    fn test_validation_error_skips_draw() {
        let mut engine = DrawEngine::new(StdRng::seed_from_u64(1));
        let err = engine
            .run(&json!({"combinations": [[1, 2, 3]]}))
            .unwrap_err();
        assert!(matches!(err, DrawError::InvalidInput { .. }));
    }

    #[test]
    fn test_handle_maps_generation_failure_to_500() {
        let stuck = DrawGenerator::sample(&mut StepRng::new(0, 0)).to_sorted_vec();
        let mut engine =
            DrawEngine::new(StepRng::new(0, 0)).with_generator(DrawGenerator::new(20));

        let outcome = engine.handle(&json!({ "combinations": [stuck] }));
        assert_eq!(outcome.status, 500);
        assert_eq!(
            outcome.body["error"],
            "Could not generate a non-matching draw after 20 attempts."
        );
    }

    #[test]
    fn test_handle_bytes_rejects_malformed_json() {
        let mut engine = DrawEngine::new(StdRng::seed_from_u64(1));
        let outcome = engine.handle_bytes(b"{\"combinations\": [");
        assert_eq!(outcome.status, 400);
        assert_eq!(outcome.body["error"], "Request body is not valid JSON.");
    }
}
