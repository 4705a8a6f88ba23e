//! Event-bus wiring for the two document triggers.
//!
//! Hosts queue [`DocumentEvent`]s from wherever the document changes; the
//! [`Host`] drains the queue one event at a time, runs the matching
//! [`Enhancer`] entry point and broadcasts a [`ScanCompleted`] per event.

use crate::enhancer::Enhancer;
use crate::error::{HostError, HostErrorExt};
use crate::report::ScanReport;
use mdf_event_bus::{EventBus, EventReceiverExt};
use mdf_kernel::dom::{Document, NodeId};
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// Pending document events the queue holds before publishers see `ChannelFull`.
pub const EVENT_QUEUE_CAPACITY: usize = 64;

/// A document trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "event", rename_all = "kebab-case")]
pub enum DocumentEvent {
    /// The document finished loading.
    Ready,
    /// A subtree was attached; `root` may be absent in malformed events.
    SubtreeAttached { root: Option<NodeId> },
}

/// Broadcast after each handled [`DocumentEvent`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanCompleted {
    pub trigger: DocumentEvent,
    pub report: ScanReport,
}

/// Single consumer of the document event queue.
#[derive(Debug)]
pub struct Host {
    bus: EventBus,
    enhancer: Enhancer,
    events: mpsc::Receiver<Arc<DocumentEvent>>,
}

impl Host {
    /// Takes the consumer end of the [`DocumentEvent`] queue on `bus`.
    ///
    /// # Errors
    /// Fails if another host already owns the queue.
    pub fn new(bus: &EventBus, enhancer: Enhancer) -> Result<Self, HostError> {
        let events = bus
            .subscribe_mpsc::<DocumentEvent>(EVENT_QUEUE_CAPACITY)
            .context("Subscribing to document events")?;
        info!("Document host attached to event bus");
        Ok(Self { bus: bus.clone(), enhancer, events })
    }

    #[must_use]
    pub const fn enhancer(&self) -> &Enhancer {
        &self.enhancer
    }

    /// Queues `event` on the host's bus.
    ///
    /// # Errors
    /// Fails when the queue is full.
    pub fn notify(&self, event: DocumentEvent) -> Result<(), HostError> {
        self.bus.publish_mpsc(event).context("Queueing document event")
    }

    /// Runs the entry point matching `event` against `doc`.
    #[must_use]
    pub fn dispatch(&self, doc: &Document, event: DocumentEvent) -> ScanReport {
        match event {
            DocumentEvent::Ready => self.enhancer.on_document_ready(doc),
            DocumentEvent::SubtreeAttached { root } => self.enhancer.on_subtree_attached(doc, root),
        }
    }

    /// Handles every queued event in arrival order.
    ///
    /// A completion that cannot be broadcast is logged and still returned;
    /// the scan behind it has already run.
    pub fn pump(&mut self, doc: &Document) -> Vec<ScanCompleted> {
        let mut completed = Vec::new();
        while let Some(event) = self.events.try_next() {
            let done = ScanCompleted { trigger: *event, report: self.dispatch(doc, *event) };
            match self.bus.publish(done.clone()) {
                Ok(observers) => debug!(trigger = ?done.trigger, observers, "Document event handled"),
                Err(err) => warn!(trigger = ?done.trigger, error = %err, "Scan completion not broadcast"),
            }
            completed.push(done);
        }
        completed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capability::Unavailable;
    use crate::scanner::Scope;
    use mdf_domain::config::AppConfig;

    fn enhancer() -> Enhancer {
        Enhancer::from_config(&AppConfig::default(), Arc::new(Unavailable))
    }

    fn host(bus: &EventBus) -> Host {
        Host::new(bus, enhancer()).unwrap()
    }

    #[test]
    fn second_host_on_same_bus_is_rejected() {
        let bus = EventBus::new();
        let _first = host(&bus);
        let err = Host::new(&bus, enhancer()).unwrap_err();
        assert!(err.to_string().contains("Subscribing to document events"));
    }

    #[test]
    fn events_are_handled_in_arrival_order() {
        let bus = EventBus::new();
        let mut host = host(&bus);
        let doc = Document::new();
        let root = doc.root();

        host.notify(DocumentEvent::SubtreeAttached { root: None }).unwrap();
        host.notify(DocumentEvent::Ready).unwrap();
        host.notify(DocumentEvent::SubtreeAttached { root: Some(root) }).unwrap();

        let scopes: Vec<Option<Scope>> =
            host.pump(&doc).into_iter().map(|done| done.report.scope).collect();
        assert_eq!(scopes, vec![None, Some(Scope::Document), Some(Scope::Subtree(root))]);
        assert!(host.pump(&doc).is_empty());
    }

    #[test]
    fn reports_survive_a_failed_broadcast() {
        let bus = EventBus::new();
        let mut host = host(&bus);
        let _queue = bus.subscribe_mpsc::<ScanCompleted>(4).unwrap();
        let doc = Document::new();

        host.notify(DocumentEvent::Ready).unwrap();
        host.notify(DocumentEvent::SubtreeAttached { root: Some(doc.root()) }).unwrap();

        let done = host.pump(&doc);
        assert_eq!(done.len(), 2);
        assert_eq!(done[1].report.scope, Some(Scope::Subtree(doc.root())));
    }
}
