//! One enhancement run: load, trigger, attach, collect.

use crate::args::{CapabilityMode, Cli};
use crate::widgets::{Widget, WidgetLog};
use anyhow::{Context, Result, anyhow};
use mdf::activation::LateBinding;
use mdf::activation::host::{DocumentEvent, ScanCompleted};
use mdf::domain::config::AppConfig;
use mdf::events::EventBus;
use mdf::kernel::dom::Document;
use mdf::kernel::markup::{parse_document, parse_fragment};
use serde::Serialize;
use std::fs;
use std::sync::Arc;
use tracing::info;

/// Everything a run produced.
#[derive(Debug, Serialize)]
pub(crate) struct Session {
    #[serde(skip)]
    pub document: Document,
    pub scans: Vec<ScanCompleted>,
    pub widgets: Vec<Widget>,
}

pub(crate) fn run(cli: &Cli, config: &AppConfig) -> Result<Session> {
    let source = fs::read_to_string(&cli.document)
        .with_context(|| format!("Failed to read {}", cli.document.display()))?;
    let mut document = parse_document(&source)
        .with_context(|| format!("Failed to parse {}", cli.document.display()))?;

    let widgets = Arc::new(WidgetLog::default());
    let binding = Arc::new(LateBinding::new());
    if cli.capability == CapabilityMode::Available {
        binding.register(widgets.clone());
    }

    let bus = EventBus::new();
    let mut host = mdf::host(config, &bus, binding.clone())?;

    host.notify(DocumentEvent::Ready)?;
    let mut scans = host.pump(&document);

    if cli.capability == CapabilityMode::Late {
        binding.register(widgets.clone());
    }

    let container = match &cli.container {
        Some(id) => document.find_by_id(id).ok_or_else(|| anyhow!("No element with id '{id}'"))?,
        None => document.root(),
    };

    for (index, attachment) in cli.attachments.iter().enumerate() {
        let markup = read_attachment(attachment)?;
        let root = parse_fragment(&mut document, &markup)
            .with_context(|| format!("Failed to parse fragment #{}", index + 1))?;
        document.append_child(container, root)?;

        host.notify(DocumentEvent::SubtreeAttached { root: Some(root) })?;
        scans.extend(host.pump(&document));
    }

    let widgets = widgets.snapshot();
    info!(scans = scans.len(), widgets = widgets.len(), "Enhancement finished");
    Ok(Session { document, scans, widgets })
}

fn read_attachment(value: &str) -> Result<String> {
    match value.strip_prefix('@') {
        Some(path) => fs::read_to_string(path).with_context(|| format!("Failed to read fragment {path}")),
        None => Ok(value.to_owned()),
    }
}
