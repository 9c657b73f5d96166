//! Phishing email classifier.
//!
//! Modular structure:
//! - [`features`] - Lexical and sentiment feature extraction into a versioned column schema
//! - [`sentiment`] - Sentiment oracle (VADER compound score)
//! - [`model`] - Model bundle manifest checks and ONNX inference
//! - [`prediction`] - Prediction service and label mapping
//! - [`context`] - Immutable startup context shared by all requests
//! - [`serve`] - Newline-delimited JSON request handling for the driver binary
//! - [`logging`] - Structured logging

pub mod config;
pub mod context;
pub mod error;
pub mod features;
pub mod logging;
pub mod model;
pub mod prediction;
pub mod sentiment;
pub mod serve;

pub use config::AppConfig;
pub use context::DetectionContext;
pub use error::{ConfigurationFault, IntegrityFault, PredictError};
pub use features::{FeatureExtractor, FeatureRecord, FEATURE_COLUMNS, SCHEMA_VERSION};
pub use logging::StructuredLogger;
pub use model::{Classifier, OnnxClassifier};
pub use prediction::{Label, PredictionService, ServiceStatus};
pub use sentiment::{SentimentOracle, VaderOracle};
