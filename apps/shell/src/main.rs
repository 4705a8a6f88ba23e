#![allow(clippy::print_stdout)]

mod args;
mod session;
mod widgets;

use crate::args::{Cli, OutputFormat};
use anyhow::Result;
use clap::Parser;
use mdf::domain::config::{AppConfig, LoggingConfig};
use mdf::kernel::config::load_config;
use mdf::kernel::markup::render;
use mdf_logger::{Logger, parse_level};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config: AppConfig = load_config(cli.config.as_deref())?;
    if let Some(level) = &cli.log_level {
        config.logging.level.clone_from(level);
    }
    let _logger = init_logger(&config.logging)?;

    let session = session::run(&cli, &config)?;

    match cli.format {
        OutputFormat::Html => println!("{}", render(&session.document)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&session)?),
    }

    Ok(())
}

fn init_logger(config: &LoggingConfig) -> Result<Logger> {
    let builder =
        Logger::builder().name("mdfield").console(config.console).level(parse_level(&config.level)?);

    let logger = match &config.path {
        Some(path) if config.json => builder.path(path).json().init()?,
        Some(path) => builder.path(path).init()?,
        None => builder.init()?,
    };
    Ok(logger)
}
