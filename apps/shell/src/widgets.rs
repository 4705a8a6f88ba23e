use mdf::activation::{EditorConstructor, FieldRef};
use mdf::domain::editor::EditorConfig;
use mdf::kernel::dom::NodeId;
use parking_lot::Mutex;
use serde::Serialize;
use tracing::debug;

/// One constructed editor widget.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct Widget {
    pub field: NodeId,
    pub name: Option<String>,
    pub config: EditorConfig,
}

/// Stand-in for the browser editor: records each construction.
#[derive(Debug, Default)]
pub(crate) struct WidgetLog {
    widgets: Mutex<Vec<Widget>>,
}

impl WidgetLog {
    pub(crate) fn snapshot(&self) -> Vec<Widget> {
        self.widgets.lock().clone()
    }
}

impl EditorConstructor for WidgetLog {
    fn construct(&self, field: &FieldRef<'_>, config: &EditorConfig) {
        let name = field.attribute("name").map(str::to_owned);
        debug!(field = %field.id(), name = name.as_deref().unwrap_or(""), "Editor widget constructed");
        self.widgets.lock().push(Widget { field: field.id(), name, config: config.clone() });
    }
}
