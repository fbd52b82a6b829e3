//! HTTP surface for the dashboard.
//!
//! Owns the process wiring: loads config, builds the sampler, spawns the
//! feed task and the config watcher, then serves one page plus a JSON
//! snapshot API.  Handlers only ever borrow the latest published snapshot;
//! they never trigger sampling themselves.

use axum::{extract::State, response::Html, routing::get, Json, Router};
use livetemp_config::{default_path, load as load_config, DashConfig, SourceKind};
use livetemp_core::{DashError, Result, Snapshot};
use livetemp_feed::{spawn_feed, RemoteSource, Sampler, SyntheticSource};
use livetemp_widgets::{dashboard_view, DashboardView};
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::watch;
use tracing::{info, warn};

/// The dashboard page, embedded at build time.  Presentation only: it
/// polls `/api/dashboard` and renders whatever views arrive.
const PAGE: &str = include_str!("../assets/index.html");

// ── Entry point ───────────────────────────────────────────────────────────────

/// Load config from the default path and serve.  Never returns under
/// normal operation (runs until shutdown is requested).
pub async fn run() -> Result<()> {
    let config = load_config(default_path())?;
    serve(config).await
}

/// Wire the feed and serve the dashboard with an explicit configuration.
pub async fn serve(config: DashConfig) -> Result<()> {
    let sampler = build_sampler(&config)?;
    let (interval_tx, interval_rx) =
        watch::channel(Duration::from_secs(config.feed.interval_secs));

    let snapshot_rx = spawn_feed(sampler, config.feed.capacity, interval_rx.clone());
    spawn_reload(interval_tx);

    let state = AppState {
        snapshot_rx,
        interval_rx,
        location: config.location.clone(),
    };

    let app = router(state);

    let listener = TcpListener::bind(&config.server.listen)
        .await
        .map_err(|e| DashError::Server(format!("cannot bind '{}': {e}", config.server.listen)))?;

    info!("Dashboard listening on http://{}", config.server.listen);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| DashError::Server(e.to_string()))
}

// ── State & routing ───────────────────────────────────────────────────────────

#[derive(Clone)]
struct AppState {
    /// Latest published snapshot from the feed task.
    snapshot_rx: watch::Receiver<Arc<Snapshot>>,
    /// Current tick period; read back so the page polls at the live cadence.
    interval_rx: watch::Receiver<Duration>,
    location: String,
}

fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/api/dashboard", get(dashboard))
        .route("/api/health", get(health))
        .with_state(state)
}

/// Build the configured sample source.
fn build_sampler(config: &DashConfig) -> Result<Sampler> {
    match config.source.kind {
        SourceKind::Synthetic => Ok(Sampler::Synthetic(SyntheticSource::new(
            config.source.min_c,
            config.source.max_c,
        ))),
        SourceKind::Remote => {
            let source = RemoteSource::new(
                config.source.base_url.as_str(),
                config.source.zip_code.as_str(),
                Duration::from_secs(config.source.timeout_secs),
            )
            .map_err(|e| DashError::Config(format!("remote source: {e}")))?;
            Ok(Sampler::Remote(source))
        }
    }
}

/// Watch the config file and apply what can change at runtime (the tick
/// interval).  Everything else takes effect on restart.
fn spawn_reload(interval_tx: watch::Sender<Duration>) {
    let path = default_path();
    let mut changes = livetemp_config::watcher::spawn_watcher(&path);

    tokio::spawn(async move {
        while changes.recv().await.is_some() {
            match load_config(&path) {
                Ok(config) => {
                    let period = Duration::from_secs(config.feed.interval_secs);
                    if *interval_tx.borrow() != period {
                        info!("Config reloaded; refresh interval applied live");
                        let _ = interval_tx.send(period);
                    } else {
                        info!("Config reloaded; non-interval changes apply on restart");
                    }
                }
                Err(e) => warn!("Config reload failed: {e}"),
            }
        }
    });
}

// ── Handlers ──────────────────────────────────────────────────────────────────

async fn index() -> Html<&'static str> {
    Html(PAGE)
}

async fn dashboard(State(state): State<AppState>) -> Json<DashboardView> {
    let snapshot = state.snapshot_rx.borrow().clone();
    let interval_secs = state.interval_rx.borrow().as_secs();
    Json(dashboard_view(&snapshot, &state.location, interval_secs))
}

#[derive(Debug, Serialize)]
struct HealthView {
    status: &'static str,
    version: &'static str,
    window_len: usize,
}

async fn health(State(state): State<AppState>) -> Json<HealthView> {
    let window_len = state.snapshot_rx.borrow().readings.len();
    Json(HealthView {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        window_len,
    })
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown requested"),
        Err(e) => {
            warn!("Cannot listen for shutdown signal: {e}");
            std::future::pending::<()>().await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use livetemp_core::Reading;

    fn state_with(snapshot: Snapshot) -> AppState {
        let (_snap_tx, snapshot_rx) = watch::channel(Arc::new(snapshot));
        let (_int_tx, interval_rx) = watch::channel(Duration::from_secs(3));
        AppState {
            snapshot_rx,
            interval_rx,
            location: "Omaha, NE".to_string(),
        }
    }

    #[test]
    fn synthetic_sampler_from_default_config() {
        let sampler = build_sampler(&DashConfig::default()).unwrap();
        assert!(matches!(sampler, Sampler::Synthetic(_)));
    }

    #[test]
    fn remote_sampler_builds_from_remote_kind() {
        let mut config = DashConfig::default();
        config.source.kind = SourceKind::Remote;
        // config::load rejects this earlier; the sampler builder tolerates
        // the empty URL and defers failure to the first fetch.
        let sampler = build_sampler(&config).unwrap();
        assert!(matches!(sampler, Sampler::Remote(_)));
    }

    #[tokio::test]
    async fn dashboard_handler_renders_the_published_snapshot() {
        let latest = Reading::now(38.3);
        let state = state_with(Snapshot {
            readings: vec![latest.clone()],
            latest: Some(latest),
        });

        let Json(view) = dashboard(State(state)).await;
        assert_eq!(view.temperature.label, "38.3 F");
        assert_eq!(view.interval_secs, 3);
        assert_eq!(view.readings.rows.len(), 1);
    }

    #[tokio::test]
    async fn health_reports_window_length() {
        let state = state_with(Snapshot::empty());
        let Json(health) = health(State(state)).await;
        assert_eq!(health.status, "ok");
        assert_eq!(health.window_len, 0);
    }
}
