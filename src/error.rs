//! Error taxonomy: startup-only configuration faults and per-request prediction errors.

use std::path::PathBuf;

/// Fatal at startup. The oracle variants abort the process; the model variants leave the
/// prediction service in a not-ready state.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigurationFault {
    #[error("failed to read config {path}: {reason}")]
    ConfigRead { path: PathBuf, reason: String },

    #[error("failed to parse config {path}: {reason}")]
    ConfigParse { path: PathBuf, reason: String },

    #[error("sentiment lexicon not loaded: {0}")]
    SentimentUnavailable(String),

    #[error("model manifest {path} not readable: {reason}")]
    ManifestRead { path: PathBuf, reason: String },

    #[error("model manifest {path} is malformed: {reason}")]
    ManifestParse { path: PathBuf, reason: String },

    #[error("model artifact missing: {0}")]
    ArtifactMissing(PathBuf),

    #[error("model artifact {path} failed checksum: expected {expected}, got {actual}")]
    ArtifactCorrupt {
        path: PathBuf,
        expected: String,
        actual: String,
    },

    #[error("feature schema mismatch: {0}")]
    SchemaMismatch(String),

    #[error("failed to load model {path}: {reason}")]
    ModelLoad { path: PathBuf, reason: String },
}

/// Model produced a value outside the {0, 1} label domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("model output {value} is outside the label domain {{0, 1}}")]
pub struct IntegrityFault {
    pub value: i64,
}

/// Per-request outcome other than a label.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PredictError {
    #[error("prediction service unavailable: {reason}")]
    Unavailable { reason: String },

    #[error(transparent)]
    Integrity(#[from] IntegrityFault),

    #[error("inference failed: {0}")]
    Inference(#[from] InferenceError),
}

/// Runtime failure inside the model backend while scoring one row.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct InferenceError(pub String);
