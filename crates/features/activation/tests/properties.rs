mod common;

use common::{ADMIN_FORM, INLINE_ROW, Recorder};
use mdf_activation::{ActivationGate, Enhancer, LateBinding, Outcome, Scope, SkipReason};
use mdf_domain::config::AppConfig;
use mdf_domain::editor::{EditorConfig, EditorFlags};
use mdf_kernel::markup::{parse_document, parse_fragment, render};
use std::collections::HashMap;
use std::sync::Arc;

#[test]
fn activating_twice_constructs_once() {
    let doc = parse_document(ADMIN_FORM).unwrap();
    let field = doc.find_by_id("id_summary").unwrap();
    let recorder = Arc::new(Recorder::default());
    let gate = ActivationGate::new(Arc::new(LateBinding::with(recorder.clone())), EditorConfig::default());

    assert_eq!(gate.activate(&doc, field), Outcome::Activated);
    assert_eq!(gate.activate(&doc, field), Outcome::Skipped(SkipReason::AlreadyActivated));
    assert_eq!(recorder.count(), 1);
    assert!(doc.element(field).unwrap().is_activated());
}

#[test]
fn capability_arriving_later_activates_normally() {
    let doc = parse_document(ADMIN_FORM).unwrap();
    let field = doc.find_by_id("id_body").unwrap();
    let binding = Arc::new(LateBinding::new());
    let gate = ActivationGate::new(binding.clone(), EditorConfig::default());

    assert_eq!(gate.activate(&doc, field), Outcome::Skipped(SkipReason::CapabilityUnavailable));
    assert!(!doc.element(field).unwrap().is_activated());

    let recorder = Arc::new(Recorder::default());
    binding.register(recorder.clone());
    assert_eq!(gate.activate(&doc, field), Outcome::Activated);
    assert_eq!(recorder.fields(), vec![field]);
}

#[test]
fn withdrawn_capability_never_unsets_records() {
    let doc = parse_document(ADMIN_FORM).unwrap();
    let binding = Arc::new(LateBinding::with(Arc::new(Recorder::default())));
    let enhancer = Enhancer::from_config(&AppConfig::default(), binding.clone());

    assert_eq!(enhancer.on_document_ready(&doc).activated, 3);
    binding.unregister();

    let again = enhancer.on_document_ready(&doc);
    assert_eq!(again.already_activated, 3);
    assert_eq!(again.capability_unavailable, 0);
}

#[test]
fn overlapping_scans_activate_each_field_at_most_once() {
    let mut doc = parse_document(ADMIN_FORM).unwrap();
    let recorder = Arc::new(Recorder::default());
    let enhancer = Enhancer::from_config(&AppConfig::default(), Arc::new(LateBinding::with(recorder.clone())));

    let form = doc.find_by_id("recipe_form").unwrap();
    let group = doc.find_by_id("steps-group").unwrap();
    let row = parse_fragment(&mut doc, INLINE_ROW).unwrap();
    doc.append_child(group, row).unwrap();

    let reports = [
        enhancer.on_subtree_attached(&doc, Some(row)),
        enhancer.on_document_ready(&doc),
        enhancer.on_subtree_attached(&doc, Some(form)),
        enhancer.on_subtree_attached(&doc, Some(group)),
    ];

    let mut activations: HashMap<_, usize> = HashMap::new();
    for field in reports.iter().flat_map(|r| r.activated_fields()) {
        *activations.entry(field).or_default() += 1;
    }
    assert_eq!(activations.len(), 4);
    assert!(activations.values().all(|count| *count == 1));
    assert_eq!(recorder.count(), 4);
    assert_eq!(reports[2].already_activated, 4);
}

#[test]
fn configuration_reaches_the_constructor_verbatim() {
    let doc = parse_document(ADMIN_FORM).unwrap();
    let mut config = AppConfig::default();
    config.editor.flags = EditorFlags::STATUS;
    config.editor.toolbar.truncate(2);

    let recorder = Arc::new(Recorder::default());
    let enhancer = Enhancer::from_config(&config, Arc::new(LateBinding::with(recorder.clone())));
    enhancer.on_document_ready(&doc);

    assert_eq!(recorder.configs(), vec![config.editor.clone(); 3]);
}

#[test]
fn records_surface_in_rendered_markup_and_die_with_their_element() {
    let mut doc = parse_document(ADMIN_FORM).unwrap();
    let enhancer =
        Enhancer::from_config(&AppConfig::default(), Arc::new(LateBinding::with(Arc::new(Recorder::default()))));
    enhancer.on_document_ready(&doc);

    let html = render(&doc);
    assert_eq!(html.matches(r#"data-md-editor-initialized="true""#).count(), 3);

    let footer = doc.find_by_id("id_footer").unwrap();
    doc.remove(footer).unwrap();
    let report = enhancer.run(&doc, Scope::Document);
    assert_eq!(report.candidates(), 2);
    assert_eq!(render(&doc).matches("data-md-editor-initialized").count(), 2);
}

#[test]
fn reloaded_output_only_reports_already_activated_fields() {
    let doc = parse_document(ADMIN_FORM).unwrap();
    let recorder = Arc::new(Recorder::default());
    let enhancer = Enhancer::from_config(&AppConfig::default(), Arc::new(LateBinding::with(recorder.clone())));
    assert_eq!(enhancer.on_document_ready(&doc).activated, 3);

    let reloaded = parse_document(&render(&doc)).unwrap();
    let report = enhancer.on_document_ready(&reloaded);

    assert_eq!(report.candidates(), 3);
    assert!(report.outcomes.iter().all(|o| o.outcome == Outcome::Skipped(SkipReason::AlreadyActivated)));
    assert_eq!(recorder.count(), 3);
    assert_eq!(render(&reloaded), render(&doc));
}
