use tracing::{debug, error, info};

use rpush_exec::InventoryFetcher;
use rpush_prometheus::{Exposition, Renderer};
use rpush_push::{PushError, PushResponse, Pusher};

use crate::config::Config;

/// Fetch, render and publish once.
///
/// Fetch and render failures are returned and end the run; publish failures are only logged.
pub async fn run(cfg: &Config) -> anyhow::Result<()> {
    let snapshots = InventoryFetcher::new(cfg.inventory()).fetch().await?;
    debug!(count = snapshots.len(), "latest snapshots fetched");

    let exposition = Renderer::default().render(&snapshots)?;
    debug!("{}", exposition.log_view());

    let url = &cfg.endpoint;
    match publish(cfg, exposition).await {
        Ok(res) => info!("{url} - {} {}", res.code, res.reason),
        Err(e) => error!("{url} - {e}"),
    }
    Ok(())
}

/// Push the exposition to the configured endpoint.
pub async fn publish(cfg: &Config, exposition: Exposition) -> Result<PushResponse, PushError> {
    Pusher::new(cfg.push())?
        .push(exposition.into_body())
        .await
}
