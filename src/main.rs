//! phish-detect entrypoint: builds the detection context once, then answers newline-delimited
//! JSON requests from stdin. `phish-detect status` prints readiness and exits.

use phish_detect::{serve, AppConfig, DetectionContext, StructuredLogger};
use std::io::BufRead;
use tracing::info;

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config_path = std::env::var("PHISH_DETECT_CONFIG")
        .map(std::path::PathBuf::from)
        .unwrap_or_else(|_| std::path::PathBuf::from("config.json"));
    let config = AppConfig::load(&config_path)?;

    StructuredLogger::init(config.log.json, &config.log.level);
    info!(config = %config_path.display(), "phish-detect starting");

    let ctx = DetectionContext::from_config(&config)?;
    let stdout = std::io::stdout();

    if std::env::args().nth(1).as_deref() == Some("status") {
        StructuredLogger::emit_json(&ctx.status(), &mut stdout.lock())?;
        return Ok(());
    }

    let mut served: u64 = 0;
    for line in std::io::stdin().lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let response = serve::handle_line(&ctx, &line);
        StructuredLogger::emit_json(&response, &mut stdout.lock())?;
        served += 1;
    }

    info!(served, "phish-detect stopping");
    Ok(())
}
