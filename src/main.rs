use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use memoraid_client::HttpAdminApi;
use memoraid_console::AlertsView;
use memoraid_core::ConsoleConfig;
use memoraid_core::constants::{
    ENV_ACCESS_TOKEN, ENV_ALERT_POLL_SECS, ENV_API_BASE_URL, ENV_HTTP_TIMEOUT_SECS,
};

/// Alerts watcher for the Memoraid admin console
///
/// Mounts the alerts view, which polls the backend on a fixed interval, and logs the number of
/// active alerts after every successful fetch. Runs until interrupted with Ctrl-C; the poller is
/// stopped before the process exits.
///
/// # Environment Variables
/// - `MEMORAID_API_BASE_URL`: backend API root (default: "http://localhost:8000/api/")
/// - `MEMORAID_ACCESS_TOKEN`: bearer token sent with every request
/// - `MEMORAID_ALERT_POLL_SECS`: poll interval in seconds (default: 30)
/// - `MEMORAID_HTTP_TIMEOUT_SECS`: per-request timeout in seconds (default: 30)
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("memoraid=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let var = |name: &str| std::env::var(name).ok();
    let config = ConsoleConfig::from_values(
        var(ENV_API_BASE_URL),
        var(ENV_ACCESS_TOKEN),
        var(ENV_ALERT_POLL_SECS),
        var(ENV_HTTP_TIMEOUT_SECS),
    )?;

    let api = Arc::new(HttpAdminApi::new(&config)?);
    tracing::info!(
        api = config.api_base_url(),
        poll_secs = config.alert_poll_interval().as_secs(),
        "watching system alerts"
    );

    let mut view = AlertsView::mount(api, config.alert_poll_interval());
    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);
    loop {
        tokio::select! {
            _ = &mut shutdown => {
                tracing::info!("shutting down");
                break;
            }
            changed = view.changed() => {
                changed?;
                let snapshot = view.snapshot();
                let active = snapshot.active_count();
                if active > 0 {
                    tracing::warn!(
                        active,
                        total = snapshot.alerts.len(),
                        "active alerts awaiting acknowledgment"
                    );
                } else {
                    tracing::info!(total = snapshot.alerts.len(), "no active alerts");
                }
            }
        }
    }

    view.unmount();
    Ok(())
}
