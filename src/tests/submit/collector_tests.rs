use std::time::Duration;

use crate::domain::Form;
use crate::notice::Severity;
use crate::store::{FormStore, MemoryStore, StoreError};
use crate::submit::{
    SUBMIT_BUSY_LABEL, SUBMIT_FAILURE_NOTICE, SUBMIT_IDLE_LABEL, SubmissionCollector,
    SubmissionPayload, SubmitError, SubmitPhase,
};

fn saved_form_id(store: &MemoryStore) -> String {
    store.create_or_update(&Form::new()).unwrap()
}

fn payload() -> SubmissionPayload {
    SubmissionPayload::collect([("q1", "yes")])
}

#[test]
fn a_successful_submit_parks_the_session_in_done() {
    let store = MemoryStore::new();
    let form_id = saved_form_id(&store);
    let mut collector = SubmissionCollector::new(form_id.clone());

    collector.submit_with(&store, &payload()).unwrap();
    assert_eq!(collector.phase(), SubmitPhase::Done);
    assert!(collector.succeeded());
    assert_eq!(store.response_count(&form_id), 1);

    let control = collector.submit_control();
    assert!(!control.enabled, "a recorded response cannot be submitted again");
    assert_eq!(control.label, SUBMIT_IDLE_LABEL);
    assert!(matches!(collector.begin_submit(), Err(SubmitError::Completed)));
}

#[test]
fn a_failed_submit_returns_to_idle_for_retry() {
    let store = MemoryStore::new();
    let form_id = saved_form_id(&store);
    let mut collector = SubmissionCollector::new(form_id.clone());

    store.set_fail_submits(true);
    let err = collector.submit_with(&store, &payload()).unwrap_err();
    assert!(matches!(err, SubmitError::Store(StoreError::Rejected(_))));
    assert_eq!(collector.phase(), SubmitPhase::Idle);
    assert!(collector.submit_control().enabled);

    let notice = collector.notice().unwrap();
    assert_eq!(notice.message(), SUBMIT_FAILURE_NOTICE);
    assert_eq!(notice.severity(), Severity::Error);

    store.set_fail_submits(false);
    collector.submit_with(&store, &payload()).unwrap();
    assert!(collector.succeeded());
    assert!(collector.notice().is_none(), "success clears the failure notice");
    assert_eq!(store.response_count(&form_id), 1);
}

#[test]
fn submitting_to_an_unknown_form_fails() {
    let store = MemoryStore::new();
    let mut collector = SubmissionCollector::new("missing");
    let err = collector.submit_with(&store, &payload()).unwrap_err();
    assert!(matches!(err, SubmitError::Store(StoreError::NotFound(_))));
    assert_eq!(collector.phase(), SubmitPhase::Idle);
}

#[test]
fn overlapping_submits_are_refused() {
    let mut collector = SubmissionCollector::new("f1");
    collector.begin_submit().unwrap();

    assert!(matches!(collector.begin_submit(), Err(SubmitError::InFlight)));
    let control = collector.submit_control();
    assert!(!control.enabled);
    assert_eq!(control.label, SUBMIT_BUSY_LABEL);

    collector.complete_submit(Ok(())).unwrap();
    assert!(collector.succeeded());
}

#[test]
fn completing_without_a_begin_is_refused() {
    let mut collector = SubmissionCollector::new("f1");
    assert!(matches!(
        collector.complete_submit(Ok(())),
        Err(SubmitError::NotInFlight)
    ));
}

#[test]
fn a_hung_submit_expires_into_a_retryable_failure() {
    let mut collector = SubmissionCollector::new("f1");
    collector.begin_submit().unwrap();

    assert!(!collector.expire_submit(Duration::from_secs(60)));
    assert!(collector.in_flight());

    assert!(collector.expire_submit(Duration::ZERO));
    assert_eq!(collector.phase(), SubmitPhase::Idle);
    assert_eq!(collector.notice().unwrap().message(), SUBMIT_FAILURE_NOTICE);
    assert!(!collector.expire_submit(Duration::ZERO));

    collector.begin_submit().unwrap();
}
