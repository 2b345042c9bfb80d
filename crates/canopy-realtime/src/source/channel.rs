//! Channel-backed source for pushed notifications.

use async_trait::async_trait;
use tokio::sync::mpsc;

use super::{IncomingNotification, NotificationSource};

/// Receives notifications pushed by another task, such as a server-sent
/// event or WebSocket client.
#[derive(Debug)]
pub struct ChannelSource {
    name: String,
    rx: mpsc::Receiver<IncomingNotification>,
}

impl ChannelSource {
    /// Create a source and the sender that feeds it.
    pub fn new(
        name: impl Into<String>,
        buffer_size: usize,
    ) -> (mpsc::Sender<IncomingNotification>, Self) {
        let (tx, rx) = mpsc::channel(buffer_size.max(1));
        (
            tx,
            Self {
                name: name.into(),
                rx,
            },
        )
    }
}

#[async_trait]
impl NotificationSource for ChannelSource {
    fn name(&self) -> &str {
        &self.name
    }

    /// Exhausted once every sender has been dropped and the buffer drained.
    async fn next(&mut self) -> Option<IncomingNotification> {
        self.rx.recv().await
    }
}
