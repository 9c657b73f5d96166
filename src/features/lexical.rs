//! Lexical signals over lowercased text and sender: keyword membership, sender domain
//! class, special characters, URL mentions.

use crate::config::FeaturesConfig;

/// Substrings that count as a URL mention in the body.
const URL_MARKERS: [&str; 3] = ["http", "www.", ".com"];

/// Keyword and domain sets normalized once at startup.
#[derive(Debug, Clone)]
pub struct LexicalSignals {
    keywords: Vec<String>,
    free_domains: Vec<String>,
    disposable_domains: Vec<String>,
    suspicious_chars: Vec<char>,
}

fn normalize(items: &[String], set: &'static str) -> Vec<String> {
    items
        .iter()
        .filter_map(|s| {
            let s = s.trim().to_lowercase();
            if s.is_empty() {
                tracing::warn!(set, "ignoring empty entry");
                None
            } else {
                Some(s)
            }
        })
        .collect()
}

impl LexicalSignals {
    pub fn from_config(config: &FeaturesConfig) -> Self {
        Self {
            keywords: normalize(&config.phishing_keywords, "phishing_keywords"),
            free_domains: normalize(&config.free_email_domains, "free_email_domains"),
            disposable_domains: normalize(
                &config.disposable_email_domains,
                "disposable_email_domains",
            ),
            suspicious_chars: config
                .suspicious_chars
                .chars()
                .filter(|c| !c.is_whitespace())
                .collect(),
        }
    }

    /// Number of configured keywords present in `text`. Each keyword counts at most once,
    /// however often it occurs.
    pub fn keyword_count(&self, text: &str) -> u32 {
        self.keywords.iter().filter(|k| text.contains(k.as_str())).count() as u32
    }

    /// `sender` must already be lowercased. Substring match, as the training extractor did.
    pub fn is_free_email(&self, sender: &str) -> bool {
        self.free_domains.iter().any(|d| sender.contains(d.as_str()))
    }

    pub fn is_disposable_email(&self, sender: &str) -> bool {
        self.disposable_domains
            .iter()
            .any(|d| sender.contains(d.as_str()))
    }

    pub fn has_suspicious_chars(&self, sender: &str) -> bool {
        sender.chars().any(|c| self.suspicious_chars.contains(&c))
    }

    pub fn has_url_mention(text: &str) -> bool {
        URL_MARKERS.iter().any(|m| text.contains(m))
    }

    pub fn keyword_total(&self) -> usize {
        self.keywords.len()
    }

    pub fn domain_totals(&self) -> (usize, usize) {
        (self.free_domains.len(), self.disposable_domains.len())
    }
}
