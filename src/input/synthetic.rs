use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::input::InputError;
use crate::model::result::{EvaluationResult, StoredMetrics};

pub const SYNTHETIC_SEED: u64 = 42;
pub const SYNTHETIC_SAMPLES: usize = 100;

pub const PLACEHOLDER_METRICS: StoredMetrics = StoredMetrics {
    accuracy: 0.85,
    precision: 0.83,
    recall: 0.87,
    f1_score: 0.85,
};

/// Labels are drawn first, then predictions, from one seeded stream.
pub fn synthetic_results(seed: u64, n_samples: usize) -> Result<EvaluationResult, InputError> {
    let mut rng = StdRng::seed_from_u64(seed);
    let labels: Vec<u8> = (0..n_samples).map(|_| rng.random_range(0..2u8)).collect();
    let predictions: Vec<f64> = (0..n_samples).map(|_| rng.random::<f64>()).collect();
    Ok(EvaluationResult::new(
        predictions,
        labels,
        PLACEHOLDER_METRICS,
    )?)
}
