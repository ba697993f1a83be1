//! Terminal inventory dashboard.

use anyhow::Context;
use stockroom_desktop::frontend::{Dashboard, terminal};
use stockroom_desktop::{DesktopConfig, HttpInventoryApi, InventoryClient};
use stockroom_observability::LogFormat;
use stockroom_observability::tracing::LOG_FORMAT_VAR;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Compact logs unless JSON is asked for; either way they go to stderr.
    let format = std::env::var(LOG_FORMAT_VAR)
        .map(|v| LogFormat::parse(&v))
        .unwrap_or(LogFormat::Pretty);
    stockroom_observability::tracing::init(format);

    let config = DesktopConfig::from_env().context("loading desktop configuration")?;
    tracing::info!(api_url = %config.api_url, "starting inventory dashboard");

    let mut dashboard = Dashboard::new(InventoryClient::new(HttpInventoryApi::new(config.api_url)));
    let mut terminal = terminal::Terminal::new(
        tokio::io::BufReader::new(tokio::io::stdin()),
        tokio::io::stdout(),
    );

    terminal::run(&mut dashboard, &mut terminal)
        .await
        .context("terminal session failed")
}
