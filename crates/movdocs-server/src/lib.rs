//! Playground server for movdocs.
//!
//! Serves playground state and registry lookups as JSON, streams remount
//! events over a WebSocket, and reloads definitions when they change on disk.

pub mod events;
pub mod server;
pub mod session;
pub mod watcher;

pub use events::{EventHub, PlaygroundEvent};
pub use server::{PlaygroundServer, ServerConfig, ServerError};
pub use session::{Session, SessionSnapshot};
pub use watcher::{FileWatcher, WatchEvent};
