use crate::constants::{FIELD_MARKER_ATTR, FIELD_MARKER_VALUE, FIELD_TAG};
use crate::editor::EditorConfig;
use serde::Deserialize;
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;

/// Top-level application configuration.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfigInner {
    pub logging: LoggingConfig,
    pub scanner: ScannerConfig,
    pub editor: EditorConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into subsystems.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(flatten, default)]
    inner: Arc<AppConfigInner>,
}

impl Deref for AppConfig {
    type Target = AppConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for AppConfig {
    fn deref_mut(&mut self) -> &mut AppConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// Logger settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default level when `RUST_LOG` is unset (`trace` .. `error`, or `off`).
    pub level: String,
    pub console: bool,
    /// Directory for rolling log files; no file output when absent.
    pub path: Option<PathBuf>,
    pub json: bool,
}

/// Which elements count as enhanceable fields.
///
/// The tag is compared ASCII case-insensitively; attribute name and value
/// must match exactly.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ScannerConfig {
    pub field_tag: String,
    pub marker_attribute: String,
    pub marker_value: String,
}

// --- Default ---

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_owned(), console: true, path: None, json: false }
    }
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            field_tag: FIELD_TAG.to_owned(),
            marker_attribute: FIELD_MARKER_ATTR.to_owned(),
            marker_value: FIELD_MARKER_VALUE.to_owned(),
        }
    }
}
