use std::time::Duration;

use crate::domain::FieldKind;
use crate::editor::{
    FormEditor, SAVE_BUSY_LABEL, SAVE_FAILURE_NOTICE, SAVE_IDLE_LABEL, SAVE_SUCCESS_NOTICE,
    SaveError, SavePhase,
};
use crate::notice::Severity;
use crate::store::MemoryStore;

#[test]
fn save_folds_the_assigned_id_into_the_document() {
    let store = MemoryStore::new();
    let mut editor = FormEditor::new();
    editor.add_field(FieldKind::Text);
    let views_before = editor.revisions();

    let id = editor.save_with(&store).unwrap();
    assert_eq!(editor.form().id.as_deref(), Some(id.as_str()));
    assert_eq!(editor.save_phase(), SavePhase::Idle);
    assert_eq!(store.form_count(), 1);
    assert_eq!(editor.revisions(), views_before, "saving does not re-render the panes");

    let notice = editor.notice().unwrap();
    assert_eq!(notice.message(), SAVE_SUCCESS_NOTICE);
    assert_eq!(notice.severity(), Severity::Success);

    let second = editor.save_with(&store).unwrap();
    assert_eq!(second, id, "second save updates in place");
    assert_eq!(store.form_count(), 1);
}

#[test]
fn failed_save_keeps_the_id_and_reenables_the_control() {
    let store = MemoryStore::new();
    store.set_fail_saves(true);
    let mut editor = FormEditor::new();

    let err = editor.save_with(&store).unwrap_err();
    assert!(matches!(err, SaveError::Store(_)));
    assert_eq!(editor.form().id, None);
    assert_eq!(editor.save_phase(), SavePhase::Idle);

    let control = editor.save_control();
    assert!(control.enabled);
    assert_eq!(control.label, SAVE_IDLE_LABEL);

    let notice = editor.notice().unwrap();
    assert_eq!(notice.message(), SAVE_FAILURE_NOTICE);
    assert_eq!(notice.severity(), Severity::Error);
}

#[test]
fn a_second_save_is_refused_while_one_is_in_flight() {
    let mut editor = FormEditor::new();
    editor.begin_save().unwrap();

    assert!(matches!(editor.begin_save(), Err(SaveError::InFlight)));
    let control = editor.save_control();
    assert!(!control.enabled);
    assert_eq!(control.label, SAVE_BUSY_LABEL);
}

#[test]
fn completing_without_a_begin_is_refused() {
    let mut editor = FormEditor::new();
    let err = editor.complete_save(Ok("f1".to_string())).unwrap_err();
    assert!(matches!(err, SaveError::NotInFlight));
    assert_eq!(editor.form().id, None);
}

#[test]
fn a_hung_save_expires_into_a_failure() {
    let mut editor = FormEditor::new();
    editor.begin_save().unwrap();

    assert!(!editor.expire_save(Duration::from_secs(60)), "fresh saves are left alone");
    assert!(editor.save_in_flight());

    assert!(editor.expire_save(Duration::ZERO));
    assert!(!editor.save_in_flight());
    assert_eq!(editor.notice().unwrap().message(), SAVE_FAILURE_NOTICE);

    assert!(!editor.expire_save(Duration::ZERO), "nothing left to expire");
    editor.begin_save().unwrap();
}

#[test]
fn the_saved_snapshot_is_the_current_document() {
    let mut editor = FormEditor::new();
    editor.set_title("Signup");
    editor.add_field(FieldKind::Email);

    let snapshot = editor.begin_save().unwrap();
    assert_eq!(snapshot.title, "Signup");
    assert_eq!(snapshot.fields.len(), 1);
    assert_eq!(snapshot.id, None);
}
