//! Sequence and map copy tests.

#[path = "../common/mod.rs"]
mod common;

use common::{Employee, User, check_employee, jinzhu, jinzhu2};
use rstest::rstest;
use std::collections::{BTreeMap, HashMap};
use structcopy::{CopyOptions, Reflect, copy, copy_with_options};

fn into_vec(source: &dyn Reflect) -> Vec<Employee> {
    let mut employees: Vec<Employee> = Vec::new();
    copy(&mut employees, source).unwrap();
    employees
}

fn into_option_vec(source: &dyn Reflect) -> Vec<Employee> {
    let mut employees: Option<Vec<Employee>> = None;
    copy(&mut employees, source).unwrap();
    employees.unwrap()
}

fn into_vec_of_boxes(source: &dyn Reflect) -> Vec<Employee> {
    let mut employees: Vec<Box<Employee>> = Vec::new();
    copy(&mut employees, source).unwrap();
    employees.into_iter().map(|employee| *employee).collect()
}

fn into_boxed_vec_of_options(source: &dyn Reflect) -> Vec<Employee> {
    let mut employees: Box<Vec<Option<Box<Employee>>>> = Box::default();
    copy(&mut employees, source).unwrap();
    (*employees)
        .into_iter()
        .map(|employee| *employee.unwrap())
        .collect()
}

#[rstest]
#[case::vec(into_vec)]
#[case::option_vec(into_option_vec)]
#[case::vec_of_boxes(into_vec_of_boxes)]
#[case::boxed_vec_of_options(into_boxed_vec_of_options)]
fn test_copy_struct_into_collection(#[case] collect: fn(&dyn Reflect) -> Vec<Employee>) {
    let user = jinzhu();

    let employees = collect(&user);
    assert_eq!(employees.len(), 1);
    check_employee(&employees[0], &user, "struct to collection");

    let employees = collect(&Box::new(user.clone()));
    assert_eq!(employees.len(), 1);
    check_employee(&employees[0], &user, "boxed struct to collection");
}

#[rstest]
#[case::vec(into_vec)]
#[case::option_vec(into_option_vec)]
#[case::vec_of_boxes(into_vec_of_boxes)]
#[case::boxed_vec_of_options(into_boxed_vec_of_options)]
fn test_copy_collection_into_collection(#[case] collect: fn(&dyn Reflect) -> Vec<Employee>) {
    let users = vec![jinzhu(), jinzhu2()];

    let employees = collect(&users);
    assert_eq!(employees.len(), 2);
    check_employee(&employees[0], &users[0], "vec to collection");
    check_employee(&employees[1], &users[1], "vec to collection");

    let boxed: Vec<Box<User>> = users.iter().cloned().map(Box::new).collect();
    let employees = collect(&Some(boxed));
    assert_eq!(employees.len(), 2);
    check_employee(&employees[1], &users[1], "optional boxed vec to collection");
}

#[test]
fn test_stale_elements_are_replaced() {
    let mut employees = vec![Employee::default(); 3];
    employees[0].employe_id = 7;

    let stats =
        copy_with_options(&mut employees, &vec![jinzhu2()], &CopyOptions::default()).unwrap();

    assert_eq!(employees.len(), 1);
    assert_eq!(employees[0].employe_id, 0);
    assert_eq!(employees[0].name, "Jinzhu2");
    assert_eq!(stats.elements_copied, 1);
}

#[test]
fn test_empty_source_clears_destination() {
    let mut employees = vec![Employee::default(); 2];

    copy(&mut employees, &Vec::<User>::new()).unwrap();

    assert!(employees.is_empty());
}

#[test]
fn test_absent_elements_stay_empty() {
    let users = vec![Some(jinzhu()), None];
    let mut employees: Vec<Option<Box<Employee>>> = Vec::new();

    copy(&mut employees, &users).unwrap();

    assert_eq!(employees.len(), 2);
    assert!(employees[0].is_some());
    assert!(employees[1].is_none());
}

#[test]
fn test_nested_sequences() {
    let source = vec![vec!["a".to_string(), "b".into()], vec!["c".into()]];
    let mut target: Vec<Vec<String>> = vec![vec!["stale".into()]];

    copy(&mut target, &source).unwrap();

    assert_eq!(target, source);
}

#[derive(Debug, Clone, Default, PartialEq, Reflect)]
struct Student {
    pub name: String,
    pub grade: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Reflect)]
struct StudentDto {
    pub name: String,
    pub grade: i64,
}

#[derive(Debug, Default, Reflect)]
struct Class {
    pub name: String,
    pub students: HashMap<String, Student>,
    pub scores: Vec<Vec<i32>>,
}

#[derive(Debug, Default, Reflect)]
struct ClassDto {
    pub name: String,
    pub students: Option<HashMap<String, StudentDto>>,
    pub scores: Vec<Vec<i64>>,
}

fn class() -> Class {
    let mut students = HashMap::new();
    students.insert(
        "ada".to_string(),
        Student {
            name: "Ada".into(),
            grade: 90,
        },
    );
    students.insert(
        "alan".to_string(),
        Student {
            name: "Alan".into(),
            grade: 85,
        },
    );
    Class {
        name: "math".into(),
        students,
        scores: vec![vec![1, 2], vec![3]],
    }
}

#[test]
fn test_map_of_structs_is_deep_copied() {
    let source = class();
    let mut copied = Class::default();

    copy(&mut copied, &source).unwrap();
    copied
        .students
        .get_mut("ada")
        .unwrap()
        .name
        .push_str(" Lovelace");
    copied.scores[0].push(100);

    assert_eq!(source.students["ada"].name, "Ada");
    assert_eq!(copied.students["ada"].name, "Ada Lovelace");
    assert_eq!(source.scores, vec![vec![1, 2], vec![3]]);
}

#[test]
fn test_map_values_are_converted() {
    let source = class();
    let mut dto = ClassDto::default();

    copy(&mut dto, &source).unwrap();

    let students = dto.students.unwrap();
    assert_eq!(students.len(), 2);
    assert_eq!(
        students["alan"],
        StudentDto {
            name: "Alan".into(),
            grade: 85,
        }
    );
    assert_eq!(dto.scores, vec![vec![1i64, 2], vec![3]]);
}

#[test]
fn test_map_replaces_destination_entries() {
    let mut target: HashMap<String, Student> = HashMap::new();
    target.insert("stale".into(), Student::default());

    copy(&mut target, &class().students).unwrap();

    assert_eq!(target.len(), 2);
    assert!(!target.contains_key("stale"));
}

#[test]
fn test_map_keys_are_converted() {
    let source: BTreeMap<i32, String> = [(1, "one".to_string()), (2, "two".to_string())].into();
    let mut target: HashMap<i64, String> = HashMap::new();

    copy(&mut target, &source).unwrap();

    assert_eq!(target.get(&2).map(String::as_str), Some("two"));
}

#[test]
fn test_map_of_users_into_map_of_employees() {
    let users: HashMap<String, User> = [("a".to_string(), jinzhu()), ("b".to_string(), jinzhu2())]
        .into_iter()
        .collect();
    let mut employees: HashMap<String, Employee> = HashMap::new();

    copy(&mut employees, &users).unwrap();

    check_employee(&employees["a"], &users["a"], "map value a");
    check_employee(&employees["b"], &users["b"], "map value b");
}

#[test]
fn test_absent_map_and_seq_fields_stay_absent() {
    #[derive(Debug, Default, Reflect)]
    struct Holder {
        pub students: Option<HashMap<String, Student>>,
        pub scores: Option<Vec<Vec<i32>>>,
    }

    let mut target = Holder {
        students: Some(HashMap::new()),
        scores: Some(Vec::new()),
    };

    copy(&mut target, &Holder::default()).unwrap();

    assert!(target.students.is_none());
    assert!(target.scores.is_none());
}
