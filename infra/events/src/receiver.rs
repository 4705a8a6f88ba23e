use crate::bus::Event;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::{broadcast, mpsc};
use tracing::{debug, warn};

/// Uniform receive API over broadcast and queue receivers.
///
/// Lagged broadcast receivers skip ahead to the oldest retained event
/// instead of surfacing an error.
pub trait EventReceiverExt<T> {
    /// Waits for the next event; `None` once the channel is closed.
    fn recv(&mut self) -> impl Future<Output = Option<Arc<T>>> + Send;

    /// Returns the next event if one is ready; `None` when empty or closed.
    fn try_next(&mut self) -> Option<Arc<T>>;

    /// Collects every event that is ready right now.
    fn drain(&mut self) -> Vec<Arc<T>> {
        std::iter::from_fn(|| self.try_next()).collect()
    }
}

impl<T: Event> EventReceiverExt<T> for broadcast::Receiver<Arc<T>> {
    async fn recv(&mut self) -> Option<Arc<T>> {
        let mut skipped = 0u64;

        loop {
            match Self::recv(self).await {
                Ok(event) => {
                    report_lag::<T>(skipped);
                    return Some(event);
                },
                Err(broadcast::error::RecvError::Lagged(n)) => {
                    skipped = skipped.saturating_add(n);
                    debug!(event = std::any::type_name::<T>(), skipped = n, "Receiver lagged");
                },
                Err(broadcast::error::RecvError::Closed) => return None,
            }
        }
    }

    fn try_next(&mut self) -> Option<Arc<T>> {
        let mut skipped = 0u64;

        loop {
            match self.try_recv() {
                Ok(event) => {
                    report_lag::<T>(skipped);
                    return Some(event);
                },
                Err(broadcast::error::TryRecvError::Lagged(n)) => {
                    skipped = skipped.saturating_add(n);
                },
                Err(broadcast::error::TryRecvError::Empty | broadcast::error::TryRecvError::Closed) => {
                    return None;
                },
            }
        }
    }
}

impl<T: Event> EventReceiverExt<T> for mpsc::Receiver<Arc<T>> {
    async fn recv(&mut self) -> Option<Arc<T>> {
        Self::recv(self).await
    }

    fn try_next(&mut self) -> Option<Arc<T>> {
        self.try_recv().ok()
    }
}

fn report_lag<T>(skipped: u64) {
    if skipped > 0 {
        warn!(
            event = std::any::type_name::<T>(),
            skipped, "Receiver lagged; continuing from the oldest retained event"
        );
    }
}
