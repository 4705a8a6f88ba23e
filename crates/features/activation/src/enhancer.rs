//! Trigger entry points that run the scanner and feed the gate.

use crate::capability::CapabilityProvider;
use crate::gate::ActivationGate;
use crate::report::ScanReport;
use crate::scanner::{Scanner, Scope};
use mdf_domain::config::{AppConfig, ScannerConfig};
use mdf_domain::editor::EditorConfig;
use mdf_kernel::dom::{Document, NodeId};
use std::sync::Arc;
use tracing::{debug, trace};

/// The two entry points a host wires its document events to.
///
/// Both run the same scanner-to-gate pipeline to completion and differ only
/// in scope. Either may fire any number of times; the activation records
/// keep repeated or overlapping scans from upgrading a field twice.
#[derive(Debug, Clone)]
pub struct Enhancer {
    scanner: Scanner,
    gate: ActivationGate,
}

impl Enhancer {
    #[must_use]
    pub fn new(scanner: Scanner, gate: ActivationGate) -> Self {
        Self { scanner, gate }
    }

    /// Builds an enhancer from the `scanner` and `editor` config sections.
    #[must_use]
    pub fn from_config(config: &AppConfig, provider: Arc<dyn CapabilityProvider>) -> Self {
        Self::with_parts(config.scanner.clone(), config.editor.clone(), provider)
    }

    #[must_use]
    pub fn with_parts(
        scanner: ScannerConfig,
        editor: EditorConfig,
        provider: Arc<dyn CapabilityProvider>,
    ) -> Self {
        Self::new(Scanner::new(scanner), ActivationGate::new(provider, editor))
    }

    #[must_use]
    pub const fn scanner(&self) -> &Scanner {
        &self.scanner
    }

    #[must_use]
    pub const fn gate(&self) -> &ActivationGate {
        &self.gate
    }

    /// Startup trigger: scans the whole document.
    pub fn on_document_ready(&self, doc: &Document) -> ScanReport {
        self.run(doc, Scope::Document)
    }

    /// Insertion trigger: scans only the attached subtree.
    ///
    /// A trigger without a root performs no scan.
    pub fn on_subtree_attached(&self, doc: &Document, root: Option<NodeId>) -> ScanReport {
        match root {
            Some(root) => self.run(doc, Scope::Subtree(root)),
            None => {
                trace!("Subtree trigger without a root; nothing to scan");
                ScanReport::unscanned()
            },
        }
    }

    /// Runs one scan over `scope`, feeding every candidate to the gate.
    pub fn run(&self, doc: &Document, scope: Scope) -> ScanReport {
        let mut report = ScanReport::new(scope);
        for field in self.scanner.scan(doc, scope) {
            report.record(field, self.gate.activate(doc, field));
        }

        debug!(
            ?scope,
            candidates = report.candidates(),
            activated = report.activated,
            already_activated = report.already_activated,
            capability_unavailable = report.capability_unavailable,
            "Scan complete"
        );
        report
    }
}
