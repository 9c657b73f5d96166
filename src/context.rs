//! Process-wide detection state, built once at startup and shared read-only.

use crate::config::AppConfig;
use crate::error::{ConfigurationFault, PredictError};
use crate::features::{FeatureExtractor, FeatureRecord};
use crate::prediction::{Label, PredictionService, ServiceStatus};
use crate::sentiment::{SentimentOracle, VaderOracle};
use std::sync::Arc;

pub struct DetectionContext {
    extractor: FeatureExtractor,
    service: PredictionService,
}

impl DetectionContext {
    /// Startup wiring. An unusable sentiment oracle aborts; a model that fails to load
    /// leaves the context up with predictions reported as unavailable.
    pub fn from_config(config: &AppConfig) -> Result<Self, ConfigurationFault> {
        let overlap = config.features.overlapping_domains();
        if !overlap.is_empty() {
            tracing::warn!(domains = ?overlap, "domains listed as both free and disposable");
        }

        let oracle: Arc<dyn SentimentOracle> = Arc::new(VaderOracle::load()?);
        let extractor = FeatureExtractor::new(&config.features, oracle);
        let (free, disposable) = extractor.signals().domain_totals();
        tracing::info!(
            keywords = extractor.signals().keyword_total(),
            free_domains = free,
            disposable_domains = disposable,
            "feature extractor ready"
        );

        let service = PredictionService::load(&config.model);
        Ok(Self::new(extractor, service))
    }

    pub fn new(extractor: FeatureExtractor, service: PredictionService) -> Self {
        Self { extractor, service }
    }

    pub fn extract(&self, email_text: &str, sender_address: &str) -> FeatureRecord {
        self.extractor.extract(email_text, sender_address)
    }

    /// Extract and predict. The record is dropped once the service has consumed it.
    pub fn classify(&self, email_text: &str, sender_address: &str) -> Result<Label, PredictError> {
        let record = self.extract(email_text, sender_address);
        tracing::debug!(
            keyword_count = record.phishing_keyword_count,
            sentiment = record.sentiment_score,
            free = record.is_free_email,
            disposable = record.is_disposable_email,
            "features extracted"
        );
        self.service.predict(&record)
    }

    pub fn status(&self) -> ServiceStatus {
        self.service.status()
    }

    pub fn extractor(&self) -> &FeatureExtractor {
        &self.extractor
    }

    pub fn service(&self) -> &PredictionService {
        &self.service
    }
}
