//! Service configuration. The feature sets are tuning parameters of the trained model, not data.

use crate::error::ConfigurationFault;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Model artifact bundle
    pub model: ModelConfig,
    /// Keyword, domain and character sets used by the extractor
    pub features: FeaturesConfig,
    /// Logging
    pub log: LogConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// Path to the bundle manifest (JSON); the ONNX file is resolved relative to it
    pub manifest_path: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FeaturesConfig {
    pub phishing_keywords: Vec<String>,
    pub free_email_domains: Vec<String>,
    pub disposable_email_domains: Vec<String>,
    /// Any of these in the sender address sets `has_suspicious_chars`
    pub suspicious_chars: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
    pub json: bool,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            manifest_path: PathBuf::from("model/manifest.json"),
        }
    }
}

impl Default for FeaturesConfig {
    fn default() -> Self {
        let owned =
            |items: &[&str]| -> Vec<String> { items.iter().map(|s| s.to_string()).collect() };
        Self {
            phishing_keywords: owned(&[
                "verify",
                "login",
                "password",
                "urgent",
                "account",
                "update",
                "click",
                "security",
                "confirm",
                "suspend",
                "limited",
                "warning",
                "attention",
                "dear customer",
                "act now",
                "bank",
                "invoice",
            ]),
            free_email_domains: owned(&[
                "gmail.com",
                "yahoo.com",
                "hotmail.com",
                "outlook.com",
                "aol.com",
            ]),
            disposable_email_domains: owned(&[
                "mailinator.com",
                "10minutemail.com",
                "guerrillamail.com",
                "tempmail.com",
                "temp-mail.org",
                "trashmail.com",
                "yopmail.com",
                "throwawaymail.com",
                "getnada.com",
                "sharklasers.com",
                "dispostable.com",
                "maildrop.cc",
            ]),
            suspicious_chars: "!$%^*#~".to_string(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: true,
        }
    }
}

impl AppConfig {
    /// Load from JSON file if present; otherwise return default.
    /// A file that exists but cannot be read or parsed is a startup fault.
    pub fn load(path: &Path) -> Result<Self, ConfigurationFault> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let data = std::fs::read_to_string(path).map_err(|e| ConfigurationFault::ConfigRead {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        serde_json::from_str(&data).map_err(|e| ConfigurationFault::ConfigParse {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }
}

impl FeaturesConfig {
    /// Domains listed as both free and disposable.
    pub fn overlapping_domains(&self) -> Vec<&str> {
        self.free_email_domains
            .iter()
            .filter(|d| {
                self.disposable_email_domains
                    .iter()
                    .any(|o| o.eq_ignore_ascii_case(d))
            })
            .map(String::as_str)
            .collect()
    }
}
