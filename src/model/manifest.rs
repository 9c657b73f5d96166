//! Bundle manifest: binds the ONNX file to the feature schema it was trained on.
//!
//! ```json
//! {
//!   "schema_version": "email-features/v3",
//!   "columns": ["raw_text", "log_sender_length", "..."],
//!   "model_file": "phishing_detection.onnx",
//!   "sha256": "9f2c..."
//! }
//! ```

use crate::error::ConfigurationFault;
use crate::features::{FEATURE_COLUMNS, SCHEMA_VERSION};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelManifest {
    pub schema_version: String,
    /// Column names in training order
    pub columns: Vec<String>,
    /// ONNX file, relative to the manifest's directory unless absolute
    pub model_file: PathBuf,
    /// Hex SHA-256 of the ONNX file; checked when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sha256: Option<String>,
}

/// Manifest plus model path that passed every check short of building a session.
#[derive(Debug, Clone)]
pub struct VerifiedArtifact {
    pub manifest: ModelManifest,
    pub model_path: PathBuf,
}

impl ModelManifest {
    pub fn read(path: &Path) -> Result<Self, ConfigurationFault> {
        let data = std::fs::read_to_string(path).map_err(|e| ConfigurationFault::ManifestRead {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        serde_json::from_str(&data).map_err(|e| ConfigurationFault::ManifestParse {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// The bundle must have been trained on exactly the columns this build extracts.
    pub fn check_schema(&self) -> Result<(), ConfigurationFault> {
        if self.schema_version != SCHEMA_VERSION {
            return Err(ConfigurationFault::SchemaMismatch(format!(
                "bundle declares {}, extractor produces {}",
                self.schema_version, SCHEMA_VERSION
            )));
        }
        if self.columns.iter().map(String::as_str).ne(FEATURE_COLUMNS) {
            return Err(ConfigurationFault::SchemaMismatch(format!(
                "bundle columns {:?} differ from {:?}",
                self.columns, FEATURE_COLUMNS
            )));
        }
        Ok(())
    }

    pub fn model_path(&self, manifest_path: &Path) -> PathBuf {
        if self.model_file.is_absolute() {
            return self.model_file.clone();
        }
        manifest_path
            .parent()
            .map(|dir| dir.join(&self.model_file))
            .unwrap_or_else(|| self.model_file.clone())
    }

    fn verify_checksum(&self, model_path: &Path) -> Result<(), ConfigurationFault> {
        let Some(expected) = self.sha256.as_deref() else {
            tracing::warn!(path = %model_path.display(), "bundle has no checksum; skipping integrity check");
            return Ok(());
        };
        let bytes = std::fs::read(model_path).map_err(|e| ConfigurationFault::ModelLoad {
            path: model_path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let actual = format!("{:x}", Sha256::digest(&bytes));
        if !actual.eq_ignore_ascii_case(expected.trim()) {
            return Err(ConfigurationFault::ArtifactCorrupt {
                path: model_path.to_path_buf(),
                expected: expected.to_string(),
                actual,
            });
        }
        Ok(())
    }
}

impl VerifiedArtifact {
    /// Read the manifest and run schema, presence and checksum checks in that order.
    pub fn resolve(manifest_path: &Path) -> Result<Self, ConfigurationFault> {
        let manifest = ModelManifest::read(manifest_path)?;
        manifest.check_schema()?;
        let model_path = manifest.model_path(manifest_path);
        if !model_path.is_file() {
            return Err(ConfigurationFault::ArtifactMissing(model_path));
        }
        manifest.verify_checksum(&model_path)?;
        Ok(Self {
            manifest,
            model_path,
        })
    }
}
