use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::Path;

use flate2::read::GzDecoder;
use serde::Deserialize;
use tracing::debug;

use crate::input::InputError;
use crate::model::result::{EvaluationResult, StoredMetrics};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactFormat {
    Pickle { gzip: bool },
    Json { gzip: bool },
}

impl ArtifactFormat {
    /// `.json` selects JSON; everything else is treated as pickle.
    /// A trailing `.gz` marks gzip compression of either.
    pub fn detect(path: &Path) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_ascii_lowercase())
            .unwrap_or_default();
        let (base, gzip) = match name.strip_suffix(".gz") {
            Some(base) => (base.to_string(), true),
            None => (name, false),
        };
        if base.ends_with(".json") {
            ArtifactFormat::Json { gzip }
        } else {
            ArtifactFormat::Pickle { gzip }
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ArtifactFormat::Pickle { gzip: false } => "pickle",
            ArtifactFormat::Pickle { gzip: true } => "pickle+gzip",
            ArtifactFormat::Json { gzip: false } => "json",
            ArtifactFormat::Json { gzip: true } => "json+gzip",
        }
    }

    fn gzip(&self) -> bool {
        match self {
            ArtifactFormat::Pickle { gzip } | ArtifactFormat::Json { gzip } => *gzip,
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(untagged)]
enum LabelValue {
    Bool(bool),
    Int(i64),
    Float(f64),
}

impl LabelValue {
    fn to_binary(self) -> Option<u8> {
        match self {
            LabelValue::Bool(b) => Some(b as u8),
            LabelValue::Int(0) => Some(0),
            LabelValue::Int(1) => Some(1),
            LabelValue::Float(v) if v == 0.0 => Some(0),
            LabelValue::Float(v) if v == 1.0 => Some(1),
            _ => None,
        }
    }
}

/// On-disk mapping. Unknown keys are ignored.
#[derive(Debug, Deserialize)]
struct RawArtifact {
    predictions: Vec<f64>,
    labels: Vec<LabelValue>,
    accuracy: f64,
    precision: f64,
    recall: f64,
    f1_score: f64,
}

pub fn open_maybe_gz(file: File, gzip: bool) -> Box<dyn BufRead> {
    if gzip {
        Box::new(BufReader::new(GzDecoder::new(file)))
    } else {
        Box::new(BufReader::new(file))
    }
}

/// Decodes and validates the artifact at `path`. The file handle does not
/// outlive this call.
pub fn read_artifact(path: &Path) -> Result<(EvaluationResult, ArtifactFormat), InputError> {
    let format = ArtifactFormat::detect(path);
    let file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => InputError::ArtifactNotFound(path.to_path_buf()),
        _ => InputError::Io(e),
    })?;
    debug!("decoding {} as {}", path.display(), format.name());

    let reader = open_maybe_gz(file, format.gzip());
    let raw: RawArtifact = match format {
        ArtifactFormat::Pickle { .. } => {
            serde_pickle::from_reader(reader, serde_pickle::DeOptions::new())?
        }
        ArtifactFormat::Json { .. } => serde_json::from_reader(reader)?,
    };

    Ok((validate(raw)?, format))
}

fn validate(raw: RawArtifact) -> Result<EvaluationResult, InputError> {
    if let Some(idx) = raw.predictions.iter().position(|p| !p.is_finite()) {
        return Err(InputError::InvalidInput(format!(
            "prediction at index {idx} is not finite"
        )));
    }

    let mut labels = Vec::with_capacity(raw.labels.len());
    for (idx, value) in raw.labels.into_iter().enumerate() {
        match value.to_binary() {
            Some(label) => labels.push(label),
            None => {
                return Err(InputError::InvalidInput(format!(
                    "label at index {idx} is not binary: {value:?}"
                )));
            }
        }
    }

    let metrics = StoredMetrics {
        accuracy: raw.accuracy,
        precision: raw.precision,
        recall: raw.recall,
        f1_score: raw.f1_score,
    };
    for (name, value) in metrics.named() {
        if !value.is_finite() {
            return Err(InputError::InvalidInput(format!(
                "stored metric {name} is not finite"
            )));
        }
    }

    Ok(EvaluationResult::new(raw.predictions, labels, metrics)?)
}
