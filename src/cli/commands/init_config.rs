use anyhow::{Context, Result, bail};
use std::path::Path;
use tracing::{info, trace};

use crate::config::AppConfig;

/// Writes the default configuration to `output`.
pub fn init_config(output: &Path, force: bool) -> Result<()> {
    trace!("Entering init_config function");

    if output.exists() && !force {
        bail!("{} already exists, pass --force to overwrite it", output.display());
    }
    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    let yaml = serde_yaml::to_string(&AppConfig::default())?;
    std::fs::write(output, yaml).with_context(|| format!("Failed to write {}", output.display()))?;

    info!("Default configuration written to {}", output.display());
    Ok(())
}
