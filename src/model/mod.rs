//! Model artifacts: bundle manifest checks and ONNX inference behind the `Classifier` seam.

mod manifest;
mod onnx;

pub use manifest::{ModelManifest, VerifiedArtifact};
pub use onnx::OnnxClassifier;

use crate::error::InferenceError;
use crate::features::Column;

/// Trained classifier over one named-column row. Returns the raw label value.
pub trait Classifier: Send + Sync {
    fn predict(&self, row: &[Column<'_>]) -> Result<i64, InferenceError>;
}
