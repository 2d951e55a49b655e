//! NetWrangler - 5G network operations dashboard.
//!
//! Polls the network API every few seconds and shows network health,
//! anomalies and slice status.

use clap::Parser;

use netwrangler::{Args, NetWrangler};
use netwrangler_common::ApiClient;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = args.resolve_config()?;

    netwrangler_common::init_tracing(&config.logging)?;

    if !args.demo {
        // Fail fast on a malformed base URL instead of inside the poller.
        ApiClient::new(&config.api)?;
    }

    tracing::info!(
        base_url = %config.api.base_url,
        interval_secs = config.api.poll_interval_secs,
        demo = args.demo,
        "Starting NetWrangler"
    );

    let demo = args.demo;
    iced::application(
        move || NetWrangler::boot(&config, demo),
        NetWrangler::update,
        NetWrangler::view,
    )
    .title(NetWrangler::title)
    .subscription(NetWrangler::subscription)
    .theme(NetWrangler::theme)
    .run()
    .map_err(|e| anyhow::anyhow!("Application error: {}", e))?;

    Ok(())
}
