//! End-to-end validation scenarios

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use argus::prelude::*;

#[derive(Debug)]
struct QuotaExceeded;

impl fmt::Display for QuotaExceeded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "quota exceeded")
    }
}

impl std::error::Error for QuotaExceeded {}

#[test]
fn two_absent_values_report_both_in_order() {
    let a: Option<i32> = None;
    let b: Option<String> = None;

    let err = begin()
        .run([not_nil(&a, "a"), not_nil(&b, "b")])
        .finish()
        .unwrap_err();

    assert_eq!(err.len(), 2);
    assert_eq!(err.failures()[0].name(), Some("a"));
    assert_eq!(err.failures()[1].name(), Some("b"));
    assert!(matches!(err.failures()[0].cause(), Cause::Nil));
    assert!(matches!(err.failures()[1].cause(), Cause::Nil));
}

#[test]
fn aggregate_message_lists_every_failure() {
    let host: Option<&str> = None;

    let err = begin()
        .run([
            not_nil(&host, "host"),
            in_range(9, 0, 5, "retries"),
            is_uint_str::<u16>("70000", "port"),
        ])
        .finish()
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "parameter validation failed:\n  \
         host: value is nil/empty\n  \
         retries: value out of range\n  \
         port: number out of representable range"
    );
}

#[test]
fn abort_prevents_the_next_tier_from_running() {
    let tier2_ran = Arc::new(AtomicBool::new(false));
    let probe = Arc::clone(&tier2_ran);

    let result = catch_abort(move || {
        begin()
            .run([eq(1, 2, "version")])
            .checkpoint()
            .run([Check::new(move || {
                probe.store(true, Ordering::SeqCst);
                None
            })])
            .finish()
    });

    assert!(result.is_err(), "tier 1 failure should abort");
    assert!(
        !tier2_ran.load(Ordering::SeqCst),
        "tier 2 must never run after an abort"
    );
}

#[test]
fn clean_first_tier_lets_the_second_run_independently() {
    let result = catch_abort(|| {
        begin()
            .run([eq(1, 1, "version")])
            .checkpoint()
            .run([not_empty("", "name"), gt(0, 1, "count")])
            .finish()
    });

    let err = result.expect("no abort on a clean tier").unwrap_err();
    assert_eq!(err.len(), 2);
    assert_eq!(err.failures()[0].name(), Some("name"));
    assert_eq!(err.failures()[1].name(), Some("count"));
}

#[test]
fn capture_slot_survives_the_abort() {
    let mut slot = None;
    let outcome = catch_abort(|| {
        begin()
            .run([not_empty("", "token")])
            .checkpoint_capture(&mut slot)
            .finish()
    });

    let aborted = outcome.unwrap_err();
    let captured = slot.expect("slot written before the abort fired");
    assert_eq!(captured.len(), aborted.len());
    assert_eq!(captured.to_string(), aborted.to_string());
}

#[test]
fn custom_closures_run_alongside_builtins() {
    let report_kind = "incident";
    let repo_kind = "maintenance";

    let fits_repository = Check::new(move || {
        if report_kind == repo_kind {
            None
        } else {
            Some(Failure::named("report", Cause::custom(QuotaExceeded)))
        }
    });

    let err = begin()
        .run([fits_repository, not_empty(report_kind, "kind")])
        .finish()
        .unwrap_err();

    assert_eq!(err.len(), 1);
    assert_eq!(err.first().to_string(), "report: quota exceeded");
}

#[test]
fn raw_cause_overrides_the_default_unnamed() {
    let err = begin()
        .run([not_empty("", Cause::custom(QuotaExceeded))])
        .finish()
        .unwrap_err();

    let failure = err.first();
    assert_eq!(failure.name(), None);
    match failure.cause() {
        Cause::Custom(inner) => assert!(inner.downcast_ref::<QuotaExceeded>().is_some()),
        other => panic!("expected the custom cause, got {other:?}"),
    }
}

#[test]
fn prebuilt_failure_passes_through_verbatim() {
    let err = begin()
        .run([eq(1, 2, Failure::named("slot", Cause::custom(QuotaExceeded)))])
        .finish()
        .unwrap_err();

    assert_eq!(err.first().to_string(), "slot: quota exceeded");
}

#[test]
fn negated_builtin_checks_compose() {
    // "must not be the reserved name" expressed as a negated eq.
    let err = begin()
        .run([
            negate(eq("admin", "admin", "username"), "username"),
            negate(eq("guest", "admin", "username"), "username"),
        ])
        .finish()
        .unwrap_err();

    assert_eq!(err.len(), 1);
    assert!(matches!(err.first().cause(), Cause::NegatedPass));
}

#[test]
fn many_batches_accumulate_across_the_session() {
    let mut session = begin();
    for i in 0..5 {
        session = session.run([in_range(i, 0, 2, format!("arg{i}"))]);
    }
    let err = session.finish().unwrap_err();

    let names: Vec<_> = err.failures().iter().filter_map(|f| f.name()).collect();
    assert_eq!(names, vec!["arg3", "arg4"]);
}
