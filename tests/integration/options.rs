//! Copy options, statistics and the builder API.

#[path = "../common/mod.rs"]
mod common;

use common::{Employee, check_employee, jinzhu, jinzhu2};
use rstest::rstest;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::SystemTime;
use structcopy::{CopyBuilder, CopyOptions, Error, OnMismatch, Reflect, copy_with_options};

#[derive(Debug, Reflect)]
struct Stamped {
    pub safe: i64,
    pub tmp: SystemTime,
}

impl Default for Stamped {
    fn default() -> Self {
        Self {
            safe: 0,
            tmp: SystemTime::UNIX_EPOCH,
        }
    }
}

#[derive(Debug, Default, Reflect)]
struct Plain {
    pub safe: i64,
    pub tmp: String,
}

#[derive(Debug, Default, Reflect)]
struct Outer {
    pub inner: Stamped,
}

#[derive(Debug, Default, Reflect)]
struct OuterPlain {
    pub inner: Plain,
}

fn stamped() -> Stamped {
    Stamped {
        safe: 1,
        tmp: SystemTime::now(),
    }
}

#[test]
fn test_error_on_mismatch_reports_path() {
    let mut plain = Plain::default();
    let options = CopyOptions::default().with_on_mismatch(OnMismatch::Error);

    let error = copy_with_options(&mut plain, &stamped(), &options).unwrap_err();

    match error {
        Error::TypeMismatch { path, from, to } => {
            assert_eq!(path, "tmp");
            assert!(from.contains("SystemTime"));
            assert!(to.contains("String"));
        }
        other => panic!("expected TypeMismatch, got {other:?}"),
    }
    // Fields before the mismatch are already written
    assert_eq!(plain.safe, 1);
}

#[test]
fn test_error_on_mismatch_in_nested_struct() {
    let mut outer = OuterPlain::default();
    let options = CopyOptions::default().with_on_mismatch(OnMismatch::Error);

    let error = copy_with_options(
        &mut outer,
        &Outer { inner: stamped() },
        &options,
    )
    .unwrap_err();

    assert!(matches!(error, Error::TypeMismatch { ref path, .. } if path == "inner.tmp"));
    assert!(error.to_string().contains("at inner.tmp"));
}

#[test]
fn test_skip_mismatch_counts_skipped_fields() {
    let mut plain = Plain::default();

    let stats = copy_with_options(&mut plain, &stamped(), &CopyOptions::default()).unwrap();

    assert_eq!(plain.safe, 1);
    assert_eq!(plain.tmp, "");
    assert_eq!(stats.fields_copied, 1);
    assert_eq!(stats.fields_skipped, 1);
}

#[test]
fn test_ignore_empty_keeps_destination_values() {
    let mut employee = Employee::default();
    employee.name = "kept".into();
    employee.notes = vec!["kept".into()];
    let mut user = jinzhu();
    user.name = String::new();
    user.notes = Vec::new();
    let options = CopyOptions::default().with_ignore_empty(true);

    copy_with_options(&mut employee, &user, &options).unwrap();

    assert_eq!(employee.name, "kept");
    assert_eq!(employee.notes, vec!["kept".to_string()]);
    assert_eq!(employee.age, 18);
}

#[test]
fn test_zero_values_overwrite_by_default() {
    let mut employee = Employee::default();
    employee.name = "replaced".into();
    let mut user = jinzhu();
    user.name = String::new();

    copy_with_options(&mut employee, &user, &CopyOptions::default()).unwrap();

    assert_eq!(employee.name, "");
}

#[rstest]
#[case::too_shallow(1, false)]
#[case::deep_enough(2, true)]
#[case::generous(64, true)]
fn test_max_depth(#[case] max_depth: usize, #[case] succeeds: bool) {
    let mut employee = Employee::default();
    let options = CopyOptions::default().with_max_depth(max_depth);

    let result = copy_with_options(&mut employee, &jinzhu(), &options);

    if succeeds {
        assert!(result.is_ok());
    } else {
        match result.unwrap_err() {
            Error::MaxDepthExceeded { path, max_depth } => {
                assert_eq!(path, "notes[0]");
                assert_eq!(max_depth, 1);
            }
            other => panic!("expected MaxDepthExceeded, got {other:?}"),
        }
    }
}

#[test]
fn test_stats_for_struct_copy() {
    let mut employee = Employee::default();

    let stats = copy_with_options(&mut employee, &jinzhu(), &CopyOptions::default()).unwrap();

    // name, birthday, nickname, age, fake_age, double_age, notes
    assert_eq!(stats.fields_copied, 7);
    assert_eq!(stats.fields_skipped, 0);
    assert_eq!(stats.getters_invoked, 1);
    assert_eq!(stats.setters_invoked, 1);
    assert_eq!(stats.elements_copied, 0);
}

#[test]
fn test_stats_for_collection_copy() {
    let mut employees: Vec<Employee> = Vec::new();

    let stats = copy_with_options(
        &mut employees,
        &vec![jinzhu(), jinzhu2()],
        &CopyOptions::default(),
    )
    .unwrap();

    assert_eq!(stats.elements_copied, 2);
    assert_eq!(stats.getters_invoked, 2);
    assert_eq!(stats.setters_invoked, 2);
}

static WARNINGS: AtomicUsize = AtomicUsize::new(0);

fn count_warning(message: &str) {
    assert!(message.starts_with("Failed to copy element"));
    WARNINGS.fetch_add(1, Ordering::SeqCst);
}

#[test]
fn test_warn_handler_called_per_failed_element() {
    let mut slots: Vec<Option<Box<dyn Reflect>>> = Vec::new();
    let options = CopyOptions::default().with_warn_handler(count_warning);

    let result = copy_with_options(&mut slots, &vec![jinzhu(), jinzhu2(), jinzhu()], &options);

    assert!(matches!(result, Err(Error::PartialCopy { failed: 3, total: 3, .. })));
    assert_eq!(WARNINGS.load(Ordering::SeqCst), 3);
}

static MESSAGES: Mutex<Vec<String>> = Mutex::new(Vec::new());

fn record_message(message: &str) {
    MESSAGES.lock().unwrap().push(message.to_string());
}

#[test]
fn test_verbose_handler_reports_skips_and_methods() {
    let mut plain = Plain::default();
    let mut employee = Employee::default();
    let options = CopyOptions::default().with_verbose_handler(record_message);

    copy_with_options(&mut plain, &stamped(), &options).unwrap();
    copy_with_options(&mut employee, &jinzhu(), &options).unwrap();

    let messages = MESSAGES.lock().unwrap();
    assert!(messages.iter().any(|m| m.starts_with("Skipping tmp: cannot copy")));
    assert!(messages.iter().any(|m| m.contains("from getter") && m.contains("double_age()")));
    assert!(messages.iter().any(|m| m.contains("Called setter") && m.contains("role()")));
}

#[test]
fn test_builder() {
    let user = jinzhu();
    let mut employee = Employee::default();

    let stats = CopyBuilder::new(&mut employee, &user)
        .ignore_empty()
        .max_depth(4)
        .run()
        .unwrap();

    check_employee(&employee, &user, "builder");
    assert_eq!(stats.setters_invoked, 1);
}

#[test]
fn test_builder_error_on_mismatch() {
    let mut plain = Plain::default();

    let result = CopyBuilder::new(&mut plain, &stamped())
        .error_on_mismatch()
        .run();

    assert!(matches!(result, Err(Error::TypeMismatch { .. })));
}

#[test]
fn test_builder_with_options() {
    let mut plain = Plain::default();
    let options = CopyOptions::default()
        .with_on_mismatch(OnMismatch::Error)
        .with_max_depth(3);

    let source = Plain::default();
    let builder = CopyBuilder::new(&mut plain, &source).with_options(options);

    assert_eq!(builder.options().on_mismatch, OnMismatch::Error);
    assert_eq!(builder.options().max_depth, Some(3));
    assert!(builder.run().is_ok());
}
