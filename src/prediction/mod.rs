//! Prediction serving: named-column row → classifier → label.

mod service;

pub use service::{Label, PredictionService, ServiceStatus};
