use std::path::{Path, PathBuf};

use tracing::{info, warn};

pub mod artifact;
pub mod synthetic;

use artifact::{ArtifactFormat, read_artifact};
use synthetic::{SYNTHETIC_SAMPLES, SYNTHETIC_SEED, synthetic_results};

use crate::model::result::{EvaluationResult, LengthMismatch};

pub const DEFAULT_RESULTS_PATH: &str = "../results/results_epoch_50.pkl";

#[derive(Debug, Clone, PartialEq)]
pub enum ResultsSource {
    Artifact {
        path: PathBuf,
        format: ArtifactFormat,
    },
    Synthetic {
        seed: u64,
        requested_path: PathBuf,
    },
}

impl ResultsSource {
    pub fn describe(&self) -> String {
        match self {
            ResultsSource::Artifact { path, format } => {
                format!("artifact {} ({})", path.display(), format.name())
            }
            ResultsSource::Synthetic {
                seed,
                requested_path,
            } => format!(
                "synthetic (seed {seed}; artifact {} not found)",
                requested_path.display()
            ),
        }
    }
}

#[derive(Debug, Clone)]
pub struct LoadedResults {
    pub result: EvaluationResult,
    pub source: ResultsSource,
}

/// What to do when the artifact path does not exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingPolicy {
    Synthesize,
    Fail,
}

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("results artifact not found: {}", .0.display())]
    ArtifactNotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("pickle decode error: {0}")]
    Pickle(#[from] serde_pickle::Error),
    #[error("JSON decode error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl From<LengthMismatch> for InputError {
    fn from(value: LengthMismatch) -> Self {
        InputError::InvalidInput(format!(
            "predictions ({}) and labels ({}) differ in length",
            value.predictions, value.labels
        ))
    }
}

/// Loads `path`, substituting the seeded synthetic record when it is missing.
#[allow(dead_code)]
pub fn load(path: &Path) -> Result<LoadedResults, InputError> {
    load_results(path, MissingPolicy::Synthesize)
}

pub fn load_results(path: &Path, policy: MissingPolicy) -> Result<LoadedResults, InputError> {
    match read_artifact(path) {
        Ok((result, format)) => {
            info!(
                "loaded {} samples from {} ({})",
                result.n_samples(),
                path.display(),
                format.name()
            );
            Ok(LoadedResults {
                result,
                source: ResultsSource::Artifact {
                    path: path.to_path_buf(),
                    format,
                },
            })
        }
        Err(InputError::ArtifactNotFound(missing)) if policy == MissingPolicy::Synthesize => {
            warn!(
                "results file {} not found; using synthetic data for demonstration (seed {}, {} samples)",
                missing.display(),
                SYNTHETIC_SEED,
                SYNTHETIC_SAMPLES
            );
            let result = synthetic_results(SYNTHETIC_SEED, SYNTHETIC_SAMPLES)?;
            Ok(LoadedResults {
                result,
                source: ResultsSource::Synthetic {
                    seed: SYNTHETIC_SEED,
                    requested_path: missing,
                },
            })
        }
        Err(err) => Err(err),
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
