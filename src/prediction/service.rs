//! Owns the model handle loaded once at startup and maps raw model output to a label.

use crate::config::ModelConfig;
use crate::error::{ConfigurationFault, IntegrityFault, PredictError};
use crate::features::{FeatureRecord, SCHEMA_VERSION};
use crate::model::{Classifier, OnnxClassifier, VerifiedArtifact};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Label {
    Phishing,
    Legit,
}

impl Label {
    /// 1 is phishing and 0 is legit. Anything else means the artifact does not match this
    /// service and must not be guessed at.
    pub fn from_model_output(value: i64) -> Result<Self, IntegrityFault> {
        match value {
            1 => Ok(Label::Phishing),
            0 => Ok(Label::Legit),
            other => Err(IntegrityFault { value: other }),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Label::Phishing => "phishing",
            Label::Legit => "legit",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Readiness as reported to callers and health checks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ServiceStatus {
    Ready {
        schema_version: String,
        loaded_at: DateTime<Utc>,
    },
    Unavailable {
        reason: String,
    },
}

enum ModelState {
    Ready {
        classifier: Arc<dyn Classifier>,
        loaded_at: DateTime<Utc>,
    },
    Unavailable {
        reason: String,
    },
}

pub struct PredictionService {
    state: ModelState,
}

impl PredictionService {
    /// Load the bundle once. A failure is logged and leaves the service unavailable until
    /// restart; it is never retried.
    pub fn load(config: &ModelConfig) -> Self {
        match Self::load_classifier(config) {
            Ok(classifier) => {
                tracing::info!(
                    manifest = %config.manifest_path.display(),
                    schema_version = SCHEMA_VERSION,
                    "prediction service ready"
                );
                Self::with_classifier(Arc::new(classifier))
            }
            Err(fault) => {
                tracing::error!(
                    manifest = %config.manifest_path.display(),
                    error = %fault,
                    "model load failed; predictions disabled"
                );
                Self::unavailable(fault.to_string())
            }
        }
    }

    fn load_classifier(config: &ModelConfig) -> Result<OnnxClassifier, ConfigurationFault> {
        let artifact = VerifiedArtifact::resolve(&config.manifest_path)?;
        OnnxClassifier::load(&artifact)
    }

    pub fn with_classifier(classifier: Arc<dyn Classifier>) -> Self {
        Self {
            state: ModelState::Ready {
                classifier,
                loaded_at: Utc::now(),
            },
        }
    }

    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self {
            state: ModelState::Unavailable {
                reason: reason.into(),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.state, ModelState::Ready { .. })
    }

    pub fn status(&self) -> ServiceStatus {
        match &self.state {
            ModelState::Ready { loaded_at, .. } => ServiceStatus::Ready {
                schema_version: SCHEMA_VERSION.to_string(),
                loaded_at: *loaded_at,
            },
            ModelState::Unavailable { reason } => ServiceStatus::Unavailable {
                reason: reason.clone(),
            },
        }
    }

    pub fn predict(&self, record: &FeatureRecord) -> Result<Label, PredictError> {
        let classifier = match &self.state {
            ModelState::Ready { classifier, .. } => classifier,
            ModelState::Unavailable { reason } => {
                return Err(PredictError::Unavailable {
                    reason: reason.clone(),
                })
            }
        };

        let row = record.columns();
        let raw = classifier.predict(&row)?;
        Label::from_model_output(raw).map_err(|fault| {
            tracing::error!(
                value = fault.value,
                schema_version = SCHEMA_VERSION,
                "model output outside label domain; artifact does not match this service"
            );
            PredictError::from(fault)
        })
    }
}
