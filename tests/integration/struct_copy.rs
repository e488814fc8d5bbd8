//! Struct-to-struct copy tests.

#[path = "../common/mod.rs"]
mod common;

use common::{Employee, User, check_employee, jinzhu};
use std::time::SystemTime;
use structcopy::{CopyOptions, Reflect, copy, copy_with_options};

#[test]
fn test_copy_struct() {
    let user = jinzhu();
    let mut employee = Employee::default();

    copy(&mut employee, &user).unwrap();

    check_employee(&employee, &user, "struct to struct");
}

#[test]
fn test_copy_from_boxed_source() {
    let user = jinzhu();
    let mut employee = Employee::default();

    copy(&mut employee, &Box::new(user.clone())).unwrap();

    check_employee(&employee, &user, "boxed struct to struct");
}

#[test]
fn test_copy_from_double_indirection() {
    let user = jinzhu();
    let mut employee = Employee::default();

    copy(&mut employee, &Some(Box::new(Some(user.clone())))).unwrap();

    check_employee(&employee, &user, "nested option to struct");
}

#[test]
fn test_copy_into_empty_option() {
    let user = jinzhu();
    let mut employee: Option<Box<Employee>> = None;

    copy(&mut employee, &user).unwrap();

    let employee = employee.unwrap();
    check_employee(&employee, &user, "struct to empty option");
}

#[test]
fn test_copy_from_any_box() {
    let user = jinzhu();
    let source: Box<dyn Reflect> = Box::new(user.clone());
    let mut employee = Employee::default();

    copy(&mut employee, &source).unwrap();

    check_employee(&employee, &user, "any box to struct");
}

#[test]
fn test_copy_same_struct_with_boxed_fields() {
    let user = jinzhu();
    let mut copied = User::default();

    copy(&mut copied, &user).unwrap();

    let original_birthday: &SystemTime = user.birthday.as_deref().unwrap();
    let copied_birthday: &SystemTime = copied.birthday.as_deref().unwrap();
    assert_eq!(copied_birthday, original_birthday);
    assert!(!std::ptr::eq(copied_birthday, original_birthday));

    let original_age: &i32 = user.fake_age.as_deref().unwrap();
    let copied_age: &i32 = copied.fake_age.as_deref().unwrap();
    assert_eq!(copied_age, original_age);
    assert!(!std::ptr::eq(copied_age, original_age));

    assert_eq!(copied.name, user.name);
    assert_eq!(copied.notes, user.notes);
    // Private fields are never copied
    assert_eq!(user.flags(), b"x");
    assert!(copied.flags().is_empty());
}

#[derive(Debug, Default, Reflect)]
struct Base {
    pub base_field1: i64,
    pub base_field2: i64,
}

#[derive(Debug, Default, Reflect)]
struct Embed {
    pub embed_field1: i64,
    pub embed_field2: i64,
    #[reflect(embed)]
    pub base: Base,
}

#[test]
fn test_embedded_source_fields_are_flattened() {
    let embed = Embed {
        embed_field1: 3,
        embed_field2: 4,
        base: Base {
            base_field1: 1,
            base_field2: 2,
        },
    };
    let mut base = Base::default();

    copy(&mut base, &embed).unwrap();

    assert_eq!(base.base_field1, 1);
    assert_eq!(base.base_field2, 2);
}

#[test]
fn test_embedded_destination_fields_are_flattened() {
    let base = Base {
        base_field1: 5,
        base_field2: 6,
    };
    let mut embed = Embed::default();

    copy(&mut embed, &base).unwrap();

    assert_eq!(embed.base.base_field1, 5);
    assert_eq!(embed.base.base_field2, 6);
    assert_eq!(embed.embed_field1, 0);
}

#[derive(Debug, Default, Reflect)]
struct SameName1 {
    pub a: String,
    pub b: i64,
    pub c: Option<SystemTime>,
}

#[derive(Debug, Default, Reflect)]
struct SameName2 {
    pub a: String,
    pub b: Option<SystemTime>,
    pub c: i64,
}

#[test]
fn test_same_name_different_types() {
    let source = SameName1 {
        a: "123".into(),
        b: 2,
        c: Some(SystemTime::now()),
    };
    let mut target = SameName2::default();

    let stats = copy_with_options(&mut target, &source, &CopyOptions::default()).unwrap();

    assert_eq!(target.a, "123");
    assert_eq!(target.b, None);
    assert_eq!(target.c, 0);
    assert_eq!(stats.fields_copied, 1);
    assert_eq!(stats.fields_skipped, 2);
}

#[derive(Debug, Reflect)]
struct Stamped {
    pub tmp: SystemTime,
    pub safe: i64,
}

#[derive(Debug, Default, Reflect)]
struct Plain {
    pub tmp: String,
    pub safe: i64,
}

impl Default for Stamped {
    fn default() -> Self {
        Self {
            tmp: SystemTime::UNIX_EPOCH,
            safe: 0,
        }
    }
}

#[test]
fn test_mismatched_struct_to_simple() {
    let stamped = Stamped {
        tmp: SystemTime::now(),
        safe: 1,
    };
    let mut plain = Plain::default();

    copy(&mut plain, &stamped).unwrap();

    assert_eq!(plain.tmp, "");
    assert_eq!(plain.safe, 1);
}

#[derive(Debug, Clone, Default, PartialEq, Reflect)]
struct ScannerValue {
    pub v: i64,
}

#[derive(Debug, Default, Reflect)]
struct ScannerStruct {
    pub v: Option<Box<ScannerValue>>,
}

#[derive(Debug, Default, Reflect)]
struct ScannerStructTo {
    pub v: Option<Box<ScannerValue>>,
}

#[test]
fn test_nested_boxed_struct() {
    let source = ScannerStruct {
        v: Some(Box::new(ScannerValue { v: 12 })),
    };
    let mut target = ScannerStructTo::default();

    copy(&mut target, &source).unwrap();

    assert_eq!(target.v.as_deref(), Some(&ScannerValue { v: 12 }));
}

#[derive(Debug, Default, Reflect)]
#[reflect(getters(double_age))]
struct Report {
    pub double_age: bool,
}

impl Report {
    fn double_age(&self) -> i64 {
        42
    }
}

#[test]
fn test_getter_used_when_field_cannot_convert() {
    let mut employee = Employee::default();

    copy(&mut employee, &Report { double_age: true }).unwrap();

    assert_eq!(employee.double_age, 42);
}

#[derive(Debug, Default, Reflect)]
struct Badge {
    pub role: Vec<u8>,
    pub name: String,
}

#[test]
fn test_setter_skipped_when_argument_cannot_convert() {
    let mut employee = Employee::default();
    let badge = Badge {
        role: vec![1, 2],
        name: "Jinzhu".into(),
    };

    let stats = copy_with_options(&mut employee, &badge, &CopyOptions::default()).unwrap();

    assert_eq!(employee.super_rule, "");
    assert_eq!(employee.name, "Jinzhu");
    assert_eq!(stats.setters_invoked, 0);
}

#[derive(Debug, Default, Reflect)]
struct Legacy {
    #[reflect(rename = "name")]
    pub full_name: String,
    #[reflect(skip)]
    pub age: i32,
}

#[test]
fn test_rename_and_skip() {
    let legacy = Legacy {
        full_name: "Jinzhu".into(),
        age: 30,
    };
    let mut employee = Employee::default();
    employee.age = 7;

    copy(&mut employee, &legacy).unwrap();

    assert_eq!(employee.name, "Jinzhu");
    assert_eq!(employee.age, 7);
}

#[test]
fn test_unmatched_fields_keep_their_values() {
    let mut employee = Employee::default();
    employee.employe_id = 99;

    copy(&mut employee, &jinzhu()).unwrap();

    assert_eq!(employee.employe_id, 99);
}
