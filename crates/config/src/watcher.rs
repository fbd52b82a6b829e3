use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{error, info, warn};

/// Spawn a filesystem watcher for the config file.
///
/// Returns a receiver that fires once per detected write or create.  The
/// watching task ends when the receiver is dropped.  Callers are expected
/// to re-run [`crate::load`] on each notification.
pub fn spawn_watcher(path: impl AsRef<Path>) -> mpsc::Receiver<()> {
    let (tx, rx) = mpsc::channel(1);
    let path = path.as_ref().to_path_buf();

    tokio::spawn(watch_loop(path, tx));

    rx
}

async fn watch_loop(path: PathBuf, tx: mpsc::Sender<()>) {
    let (event_tx, mut event_rx) = mpsc::channel::<notify::Result<Event>>(16);

    // notify delivers events on its own thread; bridge them onto the runtime.
    let mut watcher = match RecommendedWatcher::new(
        move |res| {
            let _ = event_tx.blocking_send(res);
        },
        notify::Config::default().with_poll_interval(Duration::from_secs(2)),
    ) {
        Ok(w) => w,
        Err(e) => {
            error!("Failed to create filesystem watcher: {e}");
            return;
        }
    };

    if let Err(e) = watcher.watch(&path, RecursiveMode::NonRecursive) {
        error!("Failed to watch '{}': {e}", path.display());
        return;
    }

    info!("Watching config file: {}", path.display());

    while let Some(event) = event_rx.recv().await {
        match event {
            Ok(e) => {
                if matches!(e.kind, EventKind::Modify(_) | EventKind::Create(_))
                    && tx.send(()).await.is_err()
                {
                    break; // receiver dropped
                }
            }
            Err(e) => warn!("Watcher error: {e}"),
        }
    }
}
