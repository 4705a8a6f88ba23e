//! # Event Bus
//!
//! A small, type-safe event bus used to connect host triggers (document
//! loaded, subtree attached) to the components that react to them.
//!
//! ## Overview
//!
//! Channels are keyed by the Rust type of the event and come in two kinds:
//!
//! * **Broadcast**: fan-out to every subscriber (notifications).
//! * **Mpsc**: a bounded queue with exactly one consumer (work items that must
//!   be handled one at a time, in order).
//!
//! Receivers can be drained synchronously with [`EventReceiverExt::try_next`],
//! which suits single-threaded hosts, or awaited with [`EventReceiverExt::recv`].
//!
//! # Example
//!
//! ```rust
//! use mdf_event_bus::{EventBus, EventReceiverExt, EventBusError};
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct FieldInserted { index: u64 }
//!
//! fn main() -> Result<(), EventBusError> {
//!     let bus = EventBus::new();
//!     let mut rx = bus.subscribe_mpsc::<FieldInserted>(8)?;
//!
//!     bus.publish_mpsc(FieldInserted { index: 1 })?;
//!
//!     assert_eq!(rx.try_next().map(|e| e.index), Some(1));
//!     assert!(rx.try_next().is_none());
//!     Ok(())
//! }
//! ```

mod bus;
mod error;
mod receiver;

pub use bus::{ChannelKind, Event, EventBus};
pub use error::{EventBusError, EventBusErrorExt};
pub use receiver::EventReceiverExt;
