use anyhow::{Result, bail};
use axum::Router;
use std::path::{Path, PathBuf};
use tokio::net::TcpListener;
use tower_http::{
    compression::CompressionLayer,
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};
use tracing::{debug, info, trace};

use crate::config::AppConfig;

/// Static router for the dashboard bundle. Unknown paths get `index.html`
/// so client-side routes survive a reload.
pub fn dashboard_router(dist_dir: &Path) -> Router {
    let index = ServeFile::new(dist_dir.join("index.html"));
    Router::new()
        .fallback_service(ServeDir::new(dist_dir).fallback(index))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
}

pub async fn dashboard(
    config_path: Option<&Path>,
    bind_address: Option<String>,
    dist_dir: Option<PathBuf>,
) -> Result<()> {
    trace!("Entering dashboard function");

    let config = AppConfig::load(config_path)?;
    let bind_address = bind_address.unwrap_or_else(|| config.server.dashboard_bind.clone());
    let dist_dir = dist_dir.unwrap_or_else(|| config.server.dashboard_dir.clone());

    if !dist_dir.join("index.html").exists() {
        bail!(
            "No dashboard bundle in {} (run `trunk build --release` in workspace/frontend)",
            dist_dir.display()
        );
    }
    debug!("Serving dashboard from {}", dist_dir.display());

    let listener = TcpListener::bind(&bind_address).await?;
    info!("Dashboard running on http://{}", bind_address);
    axum::serve(listener, dashboard_router(&dist_dir)).await?;

    info!("Dashboard shutdown gracefully");
    Ok(())
}
