#![allow(dead_code, unreachable_pub)]

use mdf_activation::{EditorConstructor, FieldRef};
use mdf_domain::editor::EditorConfig;
use mdf_kernel::dom::NodeId;
use parking_lot::Mutex;

/// Constructor that remembers every field it was asked to upgrade.
#[derive(Debug, Default)]
pub struct Recorder {
    built: Mutex<Vec<(NodeId, EditorConfig)>>,
}

impl Recorder {
    pub fn fields(&self) -> Vec<NodeId> {
        self.built.lock().iter().map(|(id, _)| *id).collect()
    }

    pub fn configs(&self) -> Vec<EditorConfig> {
        self.built.lock().iter().map(|(_, config)| config.clone()).collect()
    }

    pub fn count(&self) -> usize {
        self.built.lock().len()
    }
}

impl EditorConstructor for Recorder {
    fn construct(&self, field: &FieldRef<'_>, config: &EditorConfig) {
        self.built.lock().push((field.id(), config.clone()));
    }
}

/// Three marked fields, one plain textarea and an inline group container.
pub const ADMIN_FORM: &str = r#"
<form id="recipe_form">
  <fieldset>
    <textarea id="id_summary" name="summary" data-md-editor="true"/>
    <textarea id="id_notes" name="notes"/>
  </fieldset>
  <fieldset>
    <div><textarea id="id_body" name="body" data-md-editor="true">**Draft**</textarea></div>
    <textarea id="id_footer" name="footer" data-md-editor="true"/>
  </fieldset>
  <div id="steps-group" class="inline-group"/>
</form>"#;

pub const INLINE_ROW: &str = r#"
<div class="inline-related" id="steps-0">
  <input name="steps-0-title"/>
  <textarea id="id_steps-0-text" name="steps-0-text" data-md-editor="true"/>
</div>"#;
