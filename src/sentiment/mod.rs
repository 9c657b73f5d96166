//! Sentiment oracle: compound polarity of a text in [-1, 1].

mod vader;

pub use vader::VaderOracle;

/// Scored-text oracle used by the extractor. Implementations are read-only after construction.
pub trait SentimentOracle: Send + Sync {
    /// Compound polarity in [-1, 1]; 0.0 for neutral or empty text.
    fn compound(&self, text: &str) -> f64;
}
