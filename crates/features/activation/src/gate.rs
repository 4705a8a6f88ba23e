//! Activation Gate: upgrades a candidate at most once, and only when the
//! editor constructor is available.

use crate::capability::{CapabilityProvider, FieldRef};
use mdf_domain::editor::EditorConfig;
use mdf_kernel::dom::{Document, NodeId, RecordKey};
use serde::{Serialize, Serializer};
use std::fmt;
use std::sync::Arc;
use tracing::trace;

/// Why a candidate was not activated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkipReason {
    /// The activation record was already set.
    AlreadyActivated,
    /// No constructor is registered right now; the record stays unset.
    CapabilityUnavailable,
    /// The id no longer refers to a live element.
    Missing,
}

/// Result of one [`ActivationGate::activate`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Activated,
    Skipped(SkipReason),
}

impl Outcome {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Activated => "activated",
            Self::Skipped(SkipReason::AlreadyActivated) => "already-activated",
            Self::Skipped(SkipReason::CapabilityUnavailable) => "capability-unavailable",
            Self::Skipped(SkipReason::Missing) => "missing",
        }
    }

    #[must_use]
    pub const fn is_activated(self) -> bool {
        matches!(self, Self::Activated)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Outcome {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

/// Decides, per element, between activation and a skip.
///
/// Checks run in a fixed order: liveness, the activation record, then the
/// capability. Only a successful construction sets the record.
#[derive(Debug, Clone)]
pub struct ActivationGate {
    provider: Arc<dyn CapabilityProvider>,
    config: EditorConfig,
    key: RecordKey,
}

impl ActivationGate {
    #[must_use]
    pub fn new(provider: Arc<dyn CapabilityProvider>, config: EditorConfig) -> Self {
        Self { provider, config, key: RecordKey::issue() }
    }

    /// Configuration handed to the constructor.
    #[must_use]
    pub const fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn activate(&self, doc: &Document, id: NodeId) -> Outcome {
        let Some(element) = doc.element(id) else {
            return Outcome::Skipped(SkipReason::Missing);
        };
        if element.is_activated() {
            return Outcome::Skipped(SkipReason::AlreadyActivated);
        }
        let Some(constructor) = self.provider.current() else {
            return Outcome::Skipped(SkipReason::CapabilityUnavailable);
        };

        constructor.construct(&FieldRef::new(id, element), &self.config);
        element.activation().set(&self.key);
        trace!(field = %id, "Field activated");
        Outcome::Activated
    }
}
