//! Extraction pipeline: normalize → sentiment → lexical signals → FeatureRecord.

use super::{FeatureRecord, LexicalSignals};
use crate::config::FeaturesConfig;
use crate::sentiment::SentimentOracle;
use std::sync::Arc;

/// Stateless per call; share one instance across threads.
pub struct FeatureExtractor {
    signals: LexicalSignals,
    oracle: Arc<dyn SentimentOracle>,
}

impl FeatureExtractor {
    pub fn new(config: &FeaturesConfig, oracle: Arc<dyn SentimentOracle>) -> Self {
        Self {
            signals: LexicalSignals::from_config(config),
            oracle,
        }
    }

    pub fn signals(&self) -> &LexicalSignals {
        &self.signals
    }

    /// Total over all strings; empty text or sender yields zero counts and neutral sentiment.
    pub fn extract(&self, email_text: &str, sender_address: &str) -> FeatureRecord {
        let text = email_text.to_lowercase();
        let sender = sender_address.to_lowercase();

        // Character length of the address as given; lowercasing can change it for some scripts.
        let log_sender_length = (sender_address.chars().count() as f64).ln_1p();
        let sentiment_score = self.oracle.compound(&text).clamp(-1.0, 1.0);

        let phishing_keyword_count = self.signals.keyword_count(&text);
        let has_url_mention = u8::from(LexicalSignals::has_url_mention(&text));

        FeatureRecord {
            raw_text: email_text.to_string(),
            log_sender_length,
            sentiment_score,
            phishing_keyword_count,
            contains_phishing_keywords: u8::from(phishing_keyword_count > 0),
            is_free_email: u8::from(self.signals.is_free_email(&sender)),
            is_disposable_email: u8::from(self.signals.is_disposable_email(&sender)),
            has_suspicious_chars: u8::from(self.signals.has_suspicious_chars(&sender)),
            url_mention_x_keyword: phishing_keyword_count * u32::from(has_url_mention),
            has_url_mention,
        }
    }
}
