//! File watching for playground definitions.

use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::time::Duration;

use notify::{RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc as async_mpsc;

/// Events emitted by the file watcher.
#[derive(Debug, Clone, PartialEq)]
pub enum WatchEvent {
    /// A playground definition was created, modified or removed
    DefinitionChanged(PathBuf),

    /// Registry manifest or component source changed
    RegistryChanged(PathBuf),
}

/// Quiet period after the last event before changes are reported.
const DEBOUNCE: Duration = Duration::from_millis(100);

/// File watcher for detecting changes.
pub struct FileWatcher {
    _watcher: RecommendedWatcher,
}

impl FileWatcher {
    /// Create a new file watcher for the given paths.
    ///
    /// Returns the watcher and a channel to receive events.
    pub fn new(
        paths: &[PathBuf],
    ) -> Result<(Self, async_mpsc::Receiver<WatchEvent>), std::io::Error> {
        let (sync_tx, sync_rx) = mpsc::channel();
        let (async_tx, async_rx) = async_mpsc::channel(100);

        let mut watcher = notify::recommended_watcher(move |res: Result<notify::Event, _>| {
            if let Ok(event) = res {
                let _ = sync_tx.send(event);
            }
        })
        .map_err(std::io::Error::other)?;

        for path in paths {
            if path.exists() {
                watcher
                    .watch(path, RecursiveMode::Recursive)
                    .map_err(std::io::Error::other)?;
            }
        }

        std::thread::spawn(move || debounce(sync_rx, async_tx, DEBOUNCE));

        Ok((Self { _watcher: watcher }, async_rx))
    }
}

/// Collect classified events until nothing arrives for `quiet`, then
/// forward each distinct event once. Runs until either channel closes.
fn debounce(
    events: mpsc::Receiver<notify::Event>,
    tx: async_mpsc::Sender<WatchEvent>,
    quiet: Duration,
) {
    let mut pending: Vec<WatchEvent> = Vec::new();

    loop {
        let received = if pending.is_empty() {
            events.recv().map_err(|_| RecvTimeoutError::Disconnected)
        } else {
            events.recv_timeout(quiet)
        };

        match received {
            Ok(event) => {
                for path in &event.paths {
                    if let Some(e) = classify_event(path, &event.kind) {
                        if !pending.contains(&e) {
                            pending.push(e);
                        }
                    }
                }
            }
            Err(RecvTimeoutError::Timeout) => {
                for e in pending.drain(..) {
                    if tx.blocking_send(e).is_err() {
                        return;
                    }
                }
            }
            Err(RecvTimeoutError::Disconnected) => {
                for e in pending.drain(..) {
                    if tx.blocking_send(e).is_err() {
                        break;
                    }
                }
                return;
            }
        }
    }
}

/// Classify a notify event into a WatchEvent.
fn classify_event(path: &Path, kind: &notify::EventKind) -> Option<WatchEvent> {
    use notify::EventKind;

    if !matches!(
        kind,
        EventKind::Create(_) | EventKind::Modify(_) | EventKind::Remove(_)
    ) {
        return None;
    }

    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    match ext {
        "yaml" | "yml" => Some(WatchEvent::DefinitionChanged(path.to_path_buf())),
        "json" | "tsx" | "jsx" | "ts" | "js" => {
            Some(WatchEvent::RegistryChanged(path.to_path_buf()))
        }
        _ => None,
    }
}
