//! Indexes command - Provisions store indexes.
//!
//! `serve` also ensures indexes at startup; this command exists for
//! explicit provisioning in deploy pipelines.

use crate::config::Config;
use crate::errors::AppResult;
use crate::infra::Store;

/// Execute the indexes command
pub async fn execute(config: Config) -> AppResult<()> {
    let store = Store::connect(&config).await?;
    store.ensure_indexes().await?;
    tracing::info!("Store indexes ensured");
    Ok(())
}
