//! Command-line arguments of `mdfield`.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Runs the field activation pipeline over an XHTML document.
#[derive(Debug, Parser)]
#[command(name = "mdfield")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Upgrade marked form fields to rich editors, exactly once")]
pub(crate) struct Cli {
    /// Configuration file (TOML, YAML or JSON). Defaults to an optional `mdfield.*` in the working directory
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Whether the editor constructor is present at startup, arrives after the ready scan, or never loads
    #[arg(long, value_enum, default_value_t = CapabilityMode::Available)]
    pub capability: CapabilityMode,

    /// Markup fragment attached after load, one subtree-attached trigger each. Prefix with '@' to read a file
    #[arg(short, long = "attach", value_name = "FRAGMENT")]
    pub attachments: Vec<String>,

    /// `id` of the element fragments are appended to (document root by default)
    #[arg(long, value_name = "ID")]
    pub container: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Html)]
    pub format: OutputFormat,

    /// Overrides `logging.level` from the configuration
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// XHTML document to enhance
    pub document: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum CapabilityMode {
    Available,
    Late,
    Missing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Html,
    Json,
}
