//! Per-scan summary of gate outcomes.

use crate::gate::{Outcome, SkipReason};
use crate::scanner::Scope;
use mdf_kernel::dom::NodeId;
use serde::Serialize;

/// Gate outcome for one candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldOutcome {
    pub field: NodeId,
    pub outcome: Outcome,
}

/// Everything one scan decided, in candidate order.
///
/// `scope` is `None` when the trigger carried no usable root and no scan ran.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScanReport {
    pub scope: Option<Scope>,
    pub outcomes: Vec<FieldOutcome>,
    pub activated: usize,
    pub already_activated: usize,
    pub capability_unavailable: usize,
    pub missing: usize,
}

impl ScanReport {
    #[must_use]
    pub fn new(scope: Scope) -> Self {
        Self { scope: Some(scope), ..Self::default() }
    }

    /// Report for a trigger that performed no scan.
    #[must_use]
    pub fn unscanned() -> Self {
        Self::default()
    }

    pub fn record(&mut self, field: NodeId, outcome: Outcome) {
        let counter = match outcome {
            Outcome::Activated => &mut self.activated,
            Outcome::Skipped(SkipReason::AlreadyActivated) => &mut self.already_activated,
            Outcome::Skipped(SkipReason::CapabilityUnavailable) => &mut self.capability_unavailable,
            Outcome::Skipped(SkipReason::Missing) => &mut self.missing,
        };
        *counter += 1;
        self.outcomes.push(FieldOutcome { field, outcome });
    }

    #[must_use]
    pub const fn scanned(&self) -> bool {
        self.scope.is_some()
    }

    /// Number of candidates the scan visited.
    #[must_use]
    pub const fn candidates(&self) -> usize {
        self.outcomes.len()
    }

    #[must_use]
    pub const fn skipped(&self) -> usize {
        self.already_activated + self.capability_unavailable + self.missing
    }

    /// Fields activated by this scan, in order.
    pub fn activated_fields(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.outcomes.iter().filter(|o| o.outcome.is_activated()).map(|o| o.field)
    }
}
