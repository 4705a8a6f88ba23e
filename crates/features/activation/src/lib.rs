//! # Field Activation
//!
//! Upgrades marked form fields to rich editor widgets exactly once, even when
//! fields keep arriving after the document has loaded.
//!
//! ## Pipeline
//!
//! 1. **[`Scanner`]** walks a [`Scope`] (the whole document or one attached
//!    subtree) and lazily yields the elements carrying the field marker.
//! 2. **[`ActivationGate`]** takes each candidate and either constructs the
//!    widget and sets the element's activation record, or skips it: already
//!    activated, constructor not available yet, or element gone.
//!
//! [`Enhancer`] exposes the pipeline as the two trigger entry points,
//! `on_document_ready` and `on_subtree_attached`. With the `host` feature,
//! [`host::Host`] feeds them from an event bus queue.
//!
//! ## Example
//!
//! ```rust
//! use mdf_activation::{Enhancer, LateBinding, Outcome, SkipReason};
//! use mdf_activation::capability::{EditorConstructor, FieldRef};
//! use mdf_domain::{config::AppConfig, editor::EditorConfig};
//! use mdf_kernel::markup::parse_document;
//! use std::sync::Arc;
//!
//! #[derive(Debug)]
//! struct Widget;
//!
//! impl EditorConstructor for Widget {
//!     fn construct(&self, _field: &FieldRef<'_>, _config: &EditorConfig) {}
//! }
//!
//! let doc = parse_document(r#"<form><textarea data-md-editor="true"/></form>"#).unwrap();
//! let binding = Arc::new(LateBinding::new());
//! let enhancer = Enhancer::from_config(&AppConfig::default(), binding.clone());
//!
//! // The editor script has not loaded yet.
//! let report = enhancer.on_document_ready(&doc);
//! assert_eq!(report.outcomes[0].outcome, Outcome::Skipped(SkipReason::CapabilityUnavailable));
//!
//! binding.register(Arc::new(Widget));
//! assert_eq!(enhancer.on_document_ready(&doc).activated, 1);
//! assert_eq!(enhancer.on_document_ready(&doc).already_activated, 1);
//! ```

pub mod capability;
mod enhancer;
#[cfg(feature = "host")]
mod error;
mod gate;
#[cfg(feature = "host")]
pub mod host;
mod report;
mod scanner;

pub use capability::{CapabilityProvider, EditorConstructor, FieldRef, LateBinding, Unavailable};
pub use enhancer::Enhancer;
#[cfg(feature = "host")]
pub use error::{HostError, HostErrorExt};
pub use gate::{ActivationGate, Outcome, SkipReason};
pub use report::{FieldOutcome, ScanReport};
pub use scanner::{Candidates, Scanner, Scope};
