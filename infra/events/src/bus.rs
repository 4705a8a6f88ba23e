use crate::error::EventBusError;
use fxhash::FxHashMap;
use parking_lot::RwLock;
use std::any::{Any, TypeId, type_name};
use std::sync::Arc;
use tokio::sync::{broadcast, mpsc};
use tracing::{trace, warn};

/// Default buffer size; document events arrive in small bursts.
const DEFAULT_CAPACITY: usize = 128;
const MIN_CAPACITY: usize = 1;

/// Supported channel kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelKind {
    /// Fan-out to every subscriber.
    Broadcast { capacity: usize },
    /// Bounded queue with a single consumer.
    Mpsc { capacity: usize },
}

/// Marker trait for types that can travel over the [`EventBus`].
///
/// Blanket-implemented for every `Send + Sync + 'static` type.
pub trait Event: Any + Send + Sync + 'static {}
impl<T: Any + Send + Sync + 'static> Event for T {}

#[derive(Debug)]
struct ChannelState {
    kind: ChannelKind,
    handle: Box<dyn Any + Send + Sync>,
}

#[derive(Debug)]
struct Queue<T> {
    sender: mpsc::Sender<Arc<T>>,
    receiver: Option<mpsc::Receiver<Arc<T>>>,
}

/// Thread-safe registry of typed channels.
///
/// Cloning is cheap; all clones share the same channels.
#[derive(Debug, Clone, Default)]
pub struct EventBus {
    channels: Arc<RwLock<FxHashMap<TypeId, ChannelState>>>,
}

impl EventBus {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribes to broadcast events of type `T` with the default capacity.
    ///
    /// # Errors
    /// Returns [`EventBusError::ChannelKindMismatch`] if `T` is already bound to a queue.
    pub fn subscribe<T: Event>(&self) -> Result<broadcast::Receiver<Arc<T>>, EventBusError> {
        self.subscribe_with_capacity::<T>(DEFAULT_CAPACITY)
    }

    /// Subscribes to broadcast events of type `T`.
    ///
    /// The capacity only applies when this call creates the channel.
    ///
    /// # Errors
    /// Returns [`EventBusError::InvalidCapacity`] for a zero capacity and
    /// [`EventBusError::ChannelKindMismatch`] if `T` is already bound to a queue.
    pub fn subscribe_with_capacity<T: Event>(
        &self,
        capacity: usize,
    ) -> Result<broadcast::Receiver<Arc<T>>, EventBusError> {
        let capacity = validate_capacity(capacity)?;
        Ok(self.broadcast_sender::<T>(capacity)?.subscribe())
    }

    /// Broadcasts `event` and returns how many subscribers received it.
    ///
    /// Publishing without subscribers is not an error; the event is dropped.
    ///
    /// # Errors
    /// Returns [`EventBusError::ChannelKindMismatch`] if `T` is bound to a queue.
    pub fn publish<T: Event>(&self, event: T) -> Result<usize, EventBusError> {
        let sender = self.broadcast_sender::<T>(DEFAULT_CAPACITY)?;
        Ok(sender.send(Arc::new(event)).map_or_else(
            |_| {
                trace!(event = type_name::<T>(), "Event dropped: no active subscribers");
                0
            },
            |count| {
                trace!(event = type_name::<T>(), count, "Event dispatched");
                count
            },
        ))
    }

    /// Takes the single consumer end of the queue for `T`.
    ///
    /// The queue may already exist if events were published before anyone
    /// subscribed; those events are delivered to this receiver.
    ///
    /// # Errors
    /// Returns [`EventBusError::ReceiverTaken`] on a second call,
    /// [`EventBusError::InvalidCapacity`] for a zero capacity and
    /// [`EventBusError::ChannelKindMismatch`] if `T` is bound to broadcast.
    pub fn subscribe_mpsc<T: Event>(
        &self,
        capacity: usize,
    ) -> Result<mpsc::Receiver<Arc<T>>, EventBusError> {
        let capacity = validate_capacity(capacity)?;
        let mut channels = self.channels.write();
        let state = channels.entry(TypeId::of::<T>()).or_insert_with(|| new_queue::<T>(capacity));
        let queue = queue_mut::<T>(state, capacity)?;
        queue.receiver.take().ok_or_else(|| EventBusError::ReceiverTaken {
            message: type_name::<T>().into(),
            context: None,
        })
    }

    /// Enqueues `event` for the single consumer of `T`.
    ///
    /// # Errors
    /// Returns [`EventBusError::ChannelFull`] if the queue is full or its
    /// consumer was dropped, and [`EventBusError::ChannelKindMismatch`] if `T`
    /// is bound to broadcast.
    pub fn publish_mpsc<T: Event>(&self, event: T) -> Result<(), EventBusError> {
        let sender = {
            let mut channels = self.channels.write();
            let state = channels
                .entry(TypeId::of::<T>())
                .or_insert_with(|| new_queue::<T>(DEFAULT_CAPACITY));
            queue_mut::<T>(state, DEFAULT_CAPACITY)?.sender.clone()
        };

        sender.try_send(Arc::new(event)).map_err(|e| EventBusError::ChannelFull {
            message: e.to_string().into(),
            context: Some(type_name::<T>().into()),
        })
    }

    /// Drops every channel; receivers observe closure once drained.
    ///
    /// Returns the number of channels closed.
    #[must_use]
    pub fn shutdown(&self) -> usize {
        let mut channels = self.channels.write();
        let count = channels.len();
        channels.clear();
        count
    }

    fn broadcast_sender<T: Event>(
        &self,
        capacity: usize,
    ) -> Result<broadcast::Sender<Arc<T>>, EventBusError> {
        let id = TypeId::of::<T>();

        if let Some(state) = self.channels.read().get(&id) {
            return broadcast_handle::<T>(state, capacity);
        }

        let mut channels = self.channels.write();
        let state = channels.entry(id).or_insert_with(|| {
            trace!(event = type_name::<T>(), capacity, "Initializing broadcast channel");
            let (tx, _) = broadcast::channel::<Arc<T>>(capacity);
            ChannelState { kind: ChannelKind::Broadcast { capacity }, handle: Box::new(tx) }
        });
        broadcast_handle::<T>(state, capacity)
    }
}

fn new_queue<T: Event>(capacity: usize) -> ChannelState {
    trace!(event = type_name::<T>(), capacity, "Initializing mpsc channel");
    let (sender, receiver) = mpsc::channel::<Arc<T>>(capacity);
    ChannelState {
        kind: ChannelKind::Mpsc { capacity },
        handle: Box::new(Queue { sender, receiver: Some(receiver) }),
    }
}

fn broadcast_handle<T: Event>(
    state: &ChannelState,
    requested: usize,
) -> Result<broadcast::Sender<Arc<T>>, EventBusError> {
    let ChannelKind::Broadcast { capacity } = state.kind else {
        return Err(kind_mismatch::<T>("Broadcast", state.kind));
    };
    if capacity != requested && requested != DEFAULT_CAPACITY {
        warn!(
            event = type_name::<T>(),
            existing_capacity = capacity,
            requested_capacity = requested,
            "Broadcast channel already initialized with a different capacity"
        );
    }
    state.handle.downcast_ref::<broadcast::Sender<Arc<T>>>().cloned().ok_or_else(|| {
        EventBusError::TypeMismatch {
            message: type_name::<T>().into(),
            context: Some("Unexpected broadcast sender type".into()),
        }
    })
}

fn queue_mut<T: Event>(
    state: &mut ChannelState,
    requested: usize,
) -> Result<&mut Queue<T>, EventBusError> {
    let ChannelKind::Mpsc { capacity } = state.kind else {
        return Err(kind_mismatch::<T>("Mpsc", state.kind));
    };
    if capacity != requested && requested != DEFAULT_CAPACITY {
        warn!(
            event = type_name::<T>(),
            existing_capacity = capacity,
            requested_capacity = requested,
            "MPSC channel already initialized with a different capacity"
        );
    }
    state.handle.downcast_mut::<Queue<T>>().ok_or_else(|| EventBusError::TypeMismatch {
        message: type_name::<T>().into(),
        context: Some("Unexpected queue type".into()),
    })
}

fn kind_mismatch<T: Event>(expected: &str, found: ChannelKind) -> EventBusError {
    EventBusError::ChannelKindMismatch {
        message: format!("Expected {expected} but found {found:?} for {}", type_name::<T>()).into(),
        context: None,
    }
}

fn validate_capacity(capacity: usize) -> Result<usize, EventBusError> {
    if capacity < MIN_CAPACITY {
        return Err(EventBusError::InvalidCapacity {
            message: format!("capacity must be >= {MIN_CAPACITY}").into(),
            context: None,
        });
    }
    Ok(capacity)
}
