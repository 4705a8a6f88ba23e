//! The Enhancement Capability: the external rich-editor constructor and the
//! providers that tell the gate whether it is currently available.
//!
//! Providers are asked on every activation. Nothing here caches the answer,
//! so a constructor registered late is picked up by the next scan.

use mdf_domain::editor::EditorConfig;
use mdf_kernel::dom::{Element, NodeId};
use parking_lot::RwLock;
use std::fmt;
use std::sync::Arc;
use tracing::info;

/// Read-only view of the field being upgraded.
#[derive(Debug, Clone, Copy)]
pub struct FieldRef<'d> {
    id: NodeId,
    element: &'d Element,
}

impl<'d> FieldRef<'d> {
    pub(crate) const fn new(id: NodeId, element: &'d Element) -> Self {
        Self { id, element }
    }

    #[must_use]
    pub const fn id(&self) -> NodeId {
        self.id
    }

    #[must_use]
    pub const fn element(&self) -> &'d Element {
        self.element
    }

    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&'d str> {
        self.element.attribute(name)
    }
}

/// The rich-editor constructor.
///
/// Called at most once per field, with the configuration handed over
/// verbatim. It cannot fail from the gate's point of view.
pub trait EditorConstructor: Send + Sync + fmt::Debug {
    fn construct(&self, field: &FieldRef<'_>, config: &EditorConfig);
}

/// Answers "is the constructor available right now?".
pub trait CapabilityProvider: Send + Sync + fmt::Debug {
    fn current(&self) -> Option<Arc<dyn EditorConstructor>>;
}

impl<P: CapabilityProvider + ?Sized> CapabilityProvider for Arc<P> {
    fn current(&self) -> Option<Arc<dyn EditorConstructor>> {
        (**self).current()
    }
}

/// A provider that never has a constructor.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unavailable;

impl CapabilityProvider for Unavailable {
    fn current(&self) -> Option<Arc<dyn EditorConstructor>> {
        None
    }
}

/// A provider whose constructor can be registered (and withdrawn) at any
/// time, from any thread, e.g. once a late-loading editor script arrives.
#[derive(Debug, Default)]
pub struct LateBinding {
    slot: RwLock<Option<Arc<dyn EditorConstructor>>>,
}

impl LateBinding {
    /// Starts without a constructor.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts with `constructor` already registered.
    #[must_use]
    pub fn with(constructor: Arc<dyn EditorConstructor>) -> Self {
        Self { slot: RwLock::new(Some(constructor)) }
    }

    /// Registers `constructor`, returning the one it replaced.
    pub fn register(&self, constructor: Arc<dyn EditorConstructor>) -> Option<Arc<dyn EditorConstructor>> {
        info!("Editor constructor registered");
        self.slot.write().replace(constructor)
    }

    /// Withdraws the current constructor.
    pub fn unregister(&self) -> Option<Arc<dyn EditorConstructor>> {
        let previous = self.slot.write().take();
        if previous.is_some() {
            info!("Editor constructor withdrawn");
        }
        previous
    }

    #[must_use]
    pub fn is_registered(&self) -> bool {
        self.slot.read().is_some()
    }
}

impl CapabilityProvider for LateBinding {
    fn current(&self) -> Option<Arc<dyn EditorConstructor>> {
        self.slot.read().clone()
    }
}
