//! VADER compound score. The `vader_sentiment` port differs from the NLTK scorer in one place:
//! with a lexical sum of exactly zero it still subtracts the `!`/`?` emphasis, so a neutral
//! "see you at lunch!" scores negative. NLTK leaves such texts at 0.0, and so does this oracle.

use super::SentimentOracle;
use crate::error::ConfigurationFault;

/// Texts with a known polarity, scored once at startup to prove the lexicon is present.
const SELF_CHECK_POSITIVE: &str = "this is a good and wonderful day";
const SELF_CHECK_NEGATIVE: &str = "this is a terrible and horrible day";

const EMPHASIS: [char; 2] = ['!', '?'];

#[derive(Debug, Clone, Copy)]
pub struct VaderOracle {
    _private: (),
}

fn raw_compound(text: &str) -> f64 {
    // Holds only references to the static lexicons.
    let analyzer = vader_sentiment::SentimentIntensityAnalyzer::new();
    let scores = analyzer.polarity_scores(text);
    scores.get("compound").copied().unwrap_or(0.0)
}

impl VaderOracle {
    /// Build the oracle and verify the lexicon responds. Fails fast at startup rather than
    /// returning neutral scores for every request.
    pub fn load() -> Result<Self, ConfigurationFault> {
        let oracle = Self { _private: () };
        let pos = oracle.compound(SELF_CHECK_POSITIVE);
        let neg = oracle.compound(SELF_CHECK_NEGATIVE);
        if pos <= 0.0 || neg >= 0.0 {
            return Err(ConfigurationFault::SentimentUnavailable(format!(
                "self-check scores out of range (positive {pos:.3}, negative {neg:.3})"
            )));
        }
        tracing::debug!(check_positive = pos, check_negative = neg, "sentiment lexicon ready");
        Ok(oracle)
    }
}

impl SentimentOracle for VaderOracle {
    fn compound(&self, text: &str) -> f64 {
        if text.trim().is_empty() {
            return 0.0;
        }
        let compound = raw_compound(text);
        // Emphasis marks never change the lexical sum, so a zero score without them means
        // the sum was zero and the emphasis must not apply.
        if compound != 0.0 && text.contains(EMPHASIS) {
            let plain: String = text.chars().filter(|c| !EMPHASIS.contains(c)).collect();
            if raw_compound(&plain) == 0.0 {
                return 0.0;
            }
        }
        if compound.is_finite() {
            compound.clamp(-1.0, 1.0)
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_passes_self_check() {
        assert!(VaderOracle::load().is_ok());
    }

    #[test]
    fn empty_text_is_neutral() {
        let o = VaderOracle::load().unwrap();
        assert_eq!(o.compound(""), 0.0);
        assert_eq!(o.compound("   "), 0.0);
    }

    #[test]
    fn polarity_sign() {
        let o = VaderOracle::load().unwrap();
        assert!(o.compound("i love this, it is great") > 0.0);
        assert!(o.compound("this is awful and i hate it") < 0.0);
        let s = o.compound("your account has been suspended, act now or lose everything");
        assert!((-1.0..=1.0).contains(&s));
    }

    #[test]
    fn emphasis_on_neutral_text_stays_zero() {
        // NLTK VADER reference values
        let o = VaderOracle::load().unwrap();
        assert_eq!(o.compound("hi, see you at lunch"), 0.0);
        assert_eq!(o.compound("hi, see you at lunch!"), 0.0);
        assert_eq!(o.compound("meeting moved to tuesday?"), 0.0);
        assert_eq!(o.compound("!!!???"), 0.0);
    }

    #[test]
    fn emphasis_still_amplifies_polar_text() {
        let o = VaderOracle::load().unwrap();
        assert!(o.compound("this is good!") > o.compound("this is good"));
        assert!(o.compound("this is bad!") < o.compound("this is bad"));
    }
}
