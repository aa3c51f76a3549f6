use anyhow::{Context, Result};
use chrono::Local;
use compute::analysis::UploadAnalyzer;
use std::path::Path;
use tracing::{info, trace};

use crate::config::AppConfig;

/// Runs the upload analysis on a local file and prints the result as JSON.
pub fn analyze(config_path: Option<&Path>, file: &Path, months: u32, overview: bool) -> Result<()> {
    trace!("Entering analyze function");

    let config = AppConfig::load(config_path)?;
    let bytes = std::fs::read(file).with_context(|| format!("Failed to read {}", file.display()))?;
    info!("Analyzing {} ({} bytes)", file.display(), bytes.len());

    let analyzer = UploadAnalyzer::new(config.analysis);
    let json = if overview {
        serde_json::to_string_pretty(&analyzer.overview(bytes)?)?
    } else {
        let summary = analyzer.summarize(bytes, months, Local::now().naive_local())?;
        serde_json::to_string_pretty(&summary)?
    };

    println!("{}", json);
    Ok(())
}
