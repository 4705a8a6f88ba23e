use mdf_kernel::config::{ConfigError, load_config};
use mdf_kernel::domain::config::AppConfig;
use mdf_kernel::domain::editor::{EditorFlags, ToolbarItem};
use std::fs;
use tempfile::TempDir;

fn write(dir: &TempDir, name: &str, body: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, body).unwrap();
    path
}

#[test]
fn toml_file_populates_every_section() {
    let dir = TempDir::new().unwrap();
    let path = write(
        &dir,
        "mdfield.toml",
        r#"
        [logging]
        level = "warn"
        json = true

        [scanner]
        marker_attribute = "data-rich"

        [editor]
        toolbar = ["bold", "|", "preview"]
        flags = ["status", "spell-checker"]
        "#,
    );

    let cfg: AppConfig = load_config(Some(&path)).unwrap();

    assert_eq!(cfg.logging.level, "warn");
    assert!(cfg.logging.json);
    assert!(cfg.logging.console);
    assert_eq!(cfg.scanner.marker_attribute, "data-rich");
    assert_eq!(cfg.scanner.field_tag, "textarea");
    assert_eq!(cfg.editor.toolbar, vec![ToolbarItem::Bold, ToolbarItem::Separator, ToolbarItem::Preview]);
    assert_eq!(cfg.editor.flags, EditorFlags::STATUS | EditorFlags::SPELL_CHECKER);
}

#[test]
fn explicit_missing_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("absent.toml");

    let err = load_config::<AppConfig>(Some(&missing)).unwrap_err();
    assert!(matches!(err, ConfigError::Config { .. }));
    assert!(err.to_string().contains("Failed to build config"));
}

#[test]
fn mistyped_values_fail_deserialization() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "bad.toml", "[editor]\ntoolbar = \"bold\"\n");

    let err = load_config::<AppConfig>(Some(&path)).unwrap_err();
    assert!(err.to_string().contains("Failed to deserialize config"));
}
