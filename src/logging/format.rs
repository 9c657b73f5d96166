//! Log setup and the ndjson writer used for driver responses.

use serde::Serialize;
use std::io::Write;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

pub struct StructuredLogger;

impl StructuredLogger {
    /// Install the global subscriber writing to stderr, so log lines never interleave with
    /// responses on stdout. Level from RUST_LOG, else `default_level`.
    pub fn init(json: bool, default_level: &str) {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
        let json_layer = json.then(|| {
            tracing_subscriber::fmt::layer()
                .json()
                .with_span_events(FmtSpan::NONE)
                .with_writer(std::io::stderr)
        });
        let text_layer =
            (!json).then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr));
        tracing_subscriber::registry()
            .with(filter)
            .with(json_layer)
            .with(text_layer)
            .init();
    }

    /// Write `event` as a single JSON line and flush.
    pub fn emit_json(event: &impl Serialize, w: &mut impl Write) -> std::io::Result<()> {
        let line = serde_json::to_string(event)?;
        writeln!(w, "{}", line)?;
        w.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Line<'a> {
        prediction: &'a str,
    }

    #[test]
    fn emits_one_line_per_event() {
        let mut buf = Vec::new();
        StructuredLogger::emit_json(&Line { prediction: "legit" }, &mut buf).unwrap();
        StructuredLogger::emit_json(&Line { prediction: "phishing" }, &mut buf).unwrap();
        let out = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines, [r#"{"prediction":"legit"}"#, r#"{"prediction":"phishing"}"#]);
    }
}
