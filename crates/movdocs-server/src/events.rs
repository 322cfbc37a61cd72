//! WebSocket event stream for playground clients.

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use movdocs_playground::ControlValue;

/// Events pushed to connected clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PlaygroundEvent {
    /// Connection established
    Connected,

    /// A control value changed; the mounted preview re-renders in place
    Updated {
        slug: String,
        control: String,
        value: ControlValue,
    },

    /// The preview must be destroyed and mounted again
    Remount {
        slug: String,
        /// New remount token
        token: u64,
    },

    /// Definitions changed on disk; clients should refetch everything
    Reload,
}

/// Hub for broadcasting events to all connected clients.
#[derive(Debug, Clone)]
pub struct EventHub {
    sender: broadcast::Sender<PlaygroundEvent>,
}

impl EventHub {
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(100);
        Self { sender }
    }

    /// Send an event to all connected clients.
    pub fn send(&self, event: PlaygroundEvent) {
        // No receivers is fine
        let _ = self.sender.send(event);
    }

    pub fn subscribe(&self) -> broadcast::Receiver<PlaygroundEvent> {
        self.sender.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for EventHub {
    fn default() -> Self {
        Self::new()
    }
}
