//! Facade crate for `MdField` features and shared modules.
//! Re-exports domain/kernel primitives and the activation slice.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! - Add `mdf` with the desired feature flags (`host` for event-bus wiring).
//! - Call [`enhancer`] (or `host` with the `host` feature) once the config is loaded.

pub use mdf_activation as activation;
pub use mdf_domain as domain;
#[cfg(feature = "host")]
pub use mdf_event_bus as events;
pub use mdf_kernel as kernel;

use mdf_activation::{CapabilityProvider, Enhancer};
use mdf_domain::config::AppConfig;
use std::sync::Arc;

/// Feature registry for runtime introspection.
pub mod features {
    /// Build-time enabled features (by Cargo feature).
    pub const ENABLED: &[&str] = &[
        "activation",
        #[cfg(feature = "host")]
        "host",
    ];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

/// Builds the trigger entry points from the loaded configuration.
#[must_use]
pub fn enhancer(config: &AppConfig, provider: Arc<dyn CapabilityProvider>) -> Enhancer {
    Enhancer::from_config(config, provider)
}

/// Builds a host consuming document events from `bus`.
///
/// # Errors
/// Returns an error if a host is already attached to `bus`.
#[cfg(feature = "host")]
pub fn host(
    config: &AppConfig,
    bus: &events::EventBus,
    provider: Arc<dyn CapabilityProvider>,
) -> Result<activation::host::Host, activation::HostError> {
    activation::host::Host::new(bus, enhancer(config, provider))
}
