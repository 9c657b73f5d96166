//! Email feature extraction: (text, sender) → ordered named-column FeatureRecord.

mod lexical;
mod pipeline;

pub use lexical::LexicalSignals;
pub use pipeline::FeatureExtractor;

use serde::{Deserialize, Serialize};

/// Version tag of the column layout below. Model bundles must declare the same tag.
pub const SCHEMA_VERSION: &str = "email-features/v3";

/// Column names in the exact order the model was trained on.
pub const FEATURE_COLUMNS: [&str; 9] = [
    "raw_text",
    "log_sender_length",
    "sentiment_score",
    "phishing_keyword_count",
    "contains_phishing_keywords",
    "is_free_email",
    "is_disposable_email",
    "has_suspicious_chars",
    "url_mention_x_keyword",
];

/// How a column is fed to the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Text,
    Number,
}

/// Kind of a schema column; `None` for names outside [`FEATURE_COLUMNS`].
pub fn column_kind(name: &str) -> Option<ColumnKind> {
    match name {
        "raw_text" => Some(ColumnKind::Text),
        _ if FEATURE_COLUMNS.contains(&name) => Some(ColumnKind::Number),
        _ => None,
    }
}

/// One cell of a model input row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColumnValue<'a> {
    Text(&'a str),
    Number(f64),
}

/// Named cell; a row is a slice of these in schema order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Column<'a> {
    pub name: &'static str,
    pub value: ColumnValue<'a>,
}

/// Features for one email. Built fresh per request and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureRecord {
    pub raw_text: String,
    pub log_sender_length: f64,
    pub sentiment_score: f64,
    pub phishing_keyword_count: u32,
    pub contains_phishing_keywords: u8,
    pub is_free_email: u8,
    pub is_disposable_email: u8,
    pub has_suspicious_chars: u8,
    pub url_mention_x_keyword: u32,
    /// Intermediate indicator behind `url_mention_x_keyword`; not a model column.
    pub has_url_mention: u8,
}

impl FeatureRecord {
    /// Cells in [`FEATURE_COLUMNS`] order.
    pub fn columns(&self) -> [Column<'_>; 9] {
        let num = |name, v: f64| Column {
            name,
            value: ColumnValue::Number(v),
        };
        [
            Column {
                name: FEATURE_COLUMNS[0],
                value: ColumnValue::Text(&self.raw_text),
            },
            num(FEATURE_COLUMNS[1], self.log_sender_length),
            num(FEATURE_COLUMNS[2], self.sentiment_score),
            num(FEATURE_COLUMNS[3], f64::from(self.phishing_keyword_count)),
            num(FEATURE_COLUMNS[4], f64::from(self.contains_phishing_keywords)),
            num(FEATURE_COLUMNS[5], f64::from(self.is_free_email)),
            num(FEATURE_COLUMNS[6], f64::from(self.is_disposable_email)),
            num(FEATURE_COLUMNS[7], f64::from(self.has_suspicious_chars)),
            num(FEATURE_COLUMNS[8], f64::from(self.url_mention_x_keyword)),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_follow_schema_order() {
        let r = FeatureRecord {
            raw_text: "hello".into(),
            log_sender_length: 1.5,
            sentiment_score: -0.2,
            phishing_keyword_count: 3,
            contains_phishing_keywords: 1,
            is_free_email: 0,
            is_disposable_email: 1,
            has_suspicious_chars: 0,
            url_mention_x_keyword: 3,
            has_url_mention: 1,
        };
        let cols = r.columns();
        let names: Vec<&str> = cols.iter().map(|c| c.name).collect();
        assert_eq!(names, FEATURE_COLUMNS);
        assert_eq!(cols[0].value, ColumnValue::Text("hello"));
        assert_eq!(cols[3].value, ColumnValue::Number(3.0));
        assert_eq!(cols[8].value, ColumnValue::Number(3.0));
        assert_eq!(cols.len(), FEATURE_COLUMNS.len());
    }

    #[test]
    fn column_kinds_follow_values() {
        let r = FeatureRecord {
            raw_text: String::new(),
            log_sender_length: 0.0,
            sentiment_score: 0.0,
            phishing_keyword_count: 0,
            contains_phishing_keywords: 0,
            is_free_email: 0,
            is_disposable_email: 0,
            has_suspicious_chars: 0,
            url_mention_x_keyword: 0,
            has_url_mention: 0,
        };
        for col in r.columns() {
            let expected = match col.value {
                ColumnValue::Text(_) => ColumnKind::Text,
                ColumnValue::Number(_) => ColumnKind::Number,
            };
            assert_eq!(column_kind(col.name), Some(expected), "{}", col.name);
        }
        assert_eq!(column_kind("sender_length"), None);
    }
}
