use config::{Config, Environment, File, Map};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Base name of the configuration file looked up in the working directory
/// (`mdfield.toml`, `mdfield.yaml`, ...).
pub const DEFAULT_CONFIG_FILE: &str = "mdfield";

/// Prefix of environment overrides, e.g. `MDF__LOGGING__LEVEL=debug`.
pub const ENV_PREFIX: &str = "MDF";

#[mdf_derive::mdf_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads configuration from a file with environment overrides on top.
///
/// Layering:
/// 1. **File**: the given `path` (must exist), or the optional
///    [`DEFAULT_CONFIG_FILE`] in the working directory when `path` is `None`.
/// 2. **Environment**: variables prefixed with `MDF__`; nested keys are
///    separated by double underscores (`MDF__SCANNER__FIELD_TAG` maps to
///    `scanner.field_tag`).
///
/// Anything missing from both layers falls back to the serde defaults of `T`.
///
/// # Errors
/// Fails when an explicit `path` does not exist, a source cannot be parsed or
/// the merged values do not fit `T`.
///
/// # Example
/// ```rust
/// use mdf_kernel::config::load_config;
/// use mdf_kernel::domain::config::AppConfig;
///
/// let cfg: AppConfig = load_config(None::<&str>).unwrap_or_default();
/// assert_eq!(cfg.scanner.field_tag, "textarea");
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    load_with_env(path.as_ref().map(AsRef::as_ref), None)
}

pub(crate) fn load_with_env<T>(
    path: Option<&Path>,
    env: Option<Map<String, String>>,
) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let (effective_path, required) = path.map_or_else(
        || (PathBuf::from(DEFAULT_CONFIG_FILE), false),
        |p| (p.to_path_buf(), true),
    );

    let builder = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(required))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .convert_case(config::Case::Snake)
                .source(env),
        );

    if required {
        info!("Loading config from {}", effective_path.display());
    } else {
        debug!("Looking for optional config '{}'", effective_path.display());
    }

    let config = builder
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}
