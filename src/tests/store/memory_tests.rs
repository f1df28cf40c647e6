use std::thread;
use std::time::Duration;

use crate::domain::{Field, FieldKind, Form};
use crate::store::{FormStore, MemoryStore, StoreError, SubmissionStore};
use crate::submit::SubmissionPayload;

// Keeps consecutive saves from landing on the same timestamp.
fn clock_step() {
    thread::sleep(Duration::from_millis(5));
}

fn named_form(title: &str) -> Form {
    let mut form = Form::new();
    form.set_title(title);
    form.fields.push(Field::new(FieldKind::Text));
    form
}

#[test]
fn create_assigns_an_id_and_update_keeps_it() {
    let store = MemoryStore::new();
    let mut form = named_form("Survey");

    let id = store.create_or_update(&form).unwrap();
    assert_eq!(id.len(), 8);
    assert_eq!(store.form_count(), 1);

    form.id = Some(id.clone());
    form.set_title("Survey v2");
    let second = store.create_or_update(&form).unwrap();
    assert_eq!(second, id, "saving an identified form reuses its id");
    assert_eq!(store.form_count(), 1);

    let fetched = store.fetch(&id).unwrap().unwrap();
    assert_eq!(fetched.title, "Survey v2");
    assert_eq!(fetched.id, Some(id));
}

#[test]
fn list_orders_by_most_recent_update() {
    let store = MemoryStore::new();
    let first = store.create_or_update(&named_form("First")).unwrap();
    clock_step();
    let second = store.create_or_update(&named_form("Second")).unwrap();

    let listed: Vec<_> = store.list().unwrap().into_iter().map(|s| s.id).collect();
    assert_eq!(listed, [second.clone(), first.clone()]);

    // Re-saving the older form moves it to the front.
    clock_step();
    let mut form = store.fetch(&first).unwrap().unwrap();
    form.set_title("First, revised");
    store.create_or_update(&form).unwrap();
    let listed: Vec<_> = store.list().unwrap().into_iter().map(|s| s.id).collect();
    assert_eq!(listed, [first, second]);
}

#[test]
fn summaries_carry_title_and_field_count() {
    let store = MemoryStore::new();
    let mut form = named_form("Catering");
    form.fields.push(Field::new(FieldKind::Checkbox));
    store.create_or_update(&form).unwrap();

    let summary = store.list().unwrap().remove(0);
    assert_eq!(summary.title, "Catering");
    assert_eq!(summary.field_count, 2);
}

#[test]
fn delete_removes_the_form_and_its_responses() {
    let store = MemoryStore::new();
    let id = store.create_or_update(&named_form("Short-lived")).unwrap();
    store
        .submit(&id, &SubmissionPayload::collect([("q", "a")]))
        .unwrap();
    assert_eq!(store.response_count(&id), 1);

    store.delete(&id).unwrap();
    assert_eq!(store.form_count(), 0);
    assert_eq!(store.response_count(&id), 0);
    assert!(store.fetch(&id).unwrap().is_none());

    // Deleting again, or deleting something never stored, is not an error.
    store.delete(&id).unwrap();
    store.delete("never-there").unwrap();
}

#[test]
fn submitting_to_an_unknown_form_is_refused() {
    let store = MemoryStore::new();
    let err = store
        .submit("ghost", &SubmissionPayload::collect([("q", "a")]))
        .unwrap_err();
    assert!(matches!(err, StoreError::NotFound(id) if id == "ghost"));
}

#[test]
fn responses_accumulate_in_submission_order() {
    let store = MemoryStore::new();
    let id = store.create_or_update(&named_form("Poll")).unwrap();
    store
        .submit(&id, &SubmissionPayload::collect([("vote", "yes")]))
        .unwrap();
    store
        .submit(&id, &SubmissionPayload::collect([("vote", "no")]))
        .unwrap();

    let records = store.responses(&id).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].answers.get("vote").unwrap().as_one(), Some("yes"));
    assert_eq!(records[1].answers.get("vote").unwrap().as_one(), Some("no"));
    assert_ne!(records[0].id, records[1].id);
}

#[test]
fn failure_switches_reject_saves_and_submits() {
    let store = MemoryStore::new();
    let id = store.create_or_update(&named_form("Flaky")).unwrap();

    store.set_fail_saves(true);
    let err = store.create_or_update(&named_form("Other")).unwrap_err();
    assert!(matches!(err, StoreError::Rejected(_)));
    assert_eq!(store.form_count(), 1);

    store.set_fail_submits(true);
    let err = store
        .submit(&id, &SubmissionPayload::collect([("q", "a")]))
        .unwrap_err();
    assert!(matches!(err, StoreError::Rejected(_)));
    assert_eq!(store.response_count(&id), 0);

    store.set_fail_saves(false);
    store.set_fail_submits(false);
    store.create_or_update(&named_form("Other")).unwrap();
    store
        .submit(&id, &SubmissionPayload::collect([("q", "a")]))
        .unwrap();
}
