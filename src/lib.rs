//! # structcopy
//!
//! Deep copy and field mapping between structurally related Rust types.
//!
//! ## Core Features
//!
//! - **Name matching**: Fields are copied between different types by name
//! - **Scalar coercion**: Numeric types convert into each other, `char` into `String`
//! - **Deep copy**: `Option`, `Box`, `Vec` and maps are rebuilt, never shared
//! - **Nullability translation**: `Option<T>` ⇄ `T` with zero-value rules
//! - **Method bridging**: Getters fill fields, setters consume fields
//! - **Embedded structs**: Fields of `#[reflect(embed)]` members match as if flattened
//! - **Collections**: Struct→`Vec` wrapping and element-wise `Vec`→`Vec` copies
//! - **Permissive by default**: Fields with no conversion are skipped, not fatal
//!
//! ## Quick Start
//!
//! ```
//! use structcopy::{copy, Reflect};
//!
//! #[derive(Default, Reflect)]
//! #[reflect(getters(double_age))]
//! struct User {
//!     pub name: String,
//!     pub age: i32,
//!     pub role: String,
//! }
//!
//! impl User {
//!     fn double_age(&self) -> i32 {
//!         self.age * 2
//!     }
//! }
//!
//! #[derive(Default, Reflect)]
//! #[reflect(setters(role))]
//! struct Employee {
//!     pub name: String,
//!     pub age: i64,
//!     pub double_age: i64,
//!     pub super_role: String,
//! }
//!
//! impl Employee {
//!     fn role(&mut self, role: String) {
//!         self.super_role = format!("Super {role}");
//!     }
//! }
//!
//! let user = User { name: "Jinzhu".into(), age: 18, role: "Admin".into() };
//! let mut employee = Employee::default();
//! copy(&mut employee, &user)?;
//!
//! assert_eq!(employee.name, "Jinzhu");
//! assert_eq!(employee.age, 18);
//! assert_eq!(employee.double_age, 36);
//! assert_eq!(employee.super_role, "Super Admin");
//! # Ok::<(), structcopy::Error>(())
//! ```
//!
//! ### Collections
//!
//! ```
//! use structcopy::{copy, Reflect};
//!
//! #[derive(Default, Reflect)]
//! struct User {
//!     pub name: String,
//! }
//!
//! #[derive(Default, Reflect)]
//! struct Employee {
//!     pub name: String,
//! }
//!
//! let users = vec![User { name: "a".into() }, User { name: "b".into() }];
//! let mut employees: Vec<Box<Employee>> = Vec::new();
//! copy(&mut employees, &users)?;
//! assert_eq!(employees.len(), 2);
//!
//! // A single struct becomes a one-element collection
//! copy(&mut employees, &users[1])?;
//! assert_eq!(employees.len(), 1);
//! assert_eq!(employees[0].name, "b");
//! # Ok::<(), structcopy::Error>(())
//! ```
//!
//! ## Builder API
//!
//! For options, use the [`CopyBuilder`] or [`copy_with_options`] with
//! [`CopyOptions`]:
//!
//! ```
//! use structcopy::{copy_with_options, CopyOptions, OnMismatch, Reflect};
//!
//! #[derive(Default, Reflect)]
//! struct Source {
//!     pub id: u64,
//! }
//!
//! #[derive(Default, Reflect)]
//! struct Target {
//!     pub id: i64,
//! }
//!
//! let options = CopyOptions::default()
//!     .with_on_mismatch(OnMismatch::Error)  // Fail on unconvertible fields
//!     .with_ignore_empty(true)              // Zero values do not overwrite
//!     .with_max_depth(16);                  // Limit nesting depth
//!
//! let mut target = Target::default();
//! let stats = copy_with_options(&mut target, &Source { id: 7 }, &options)?;
//! assert_eq!(stats.fields_copied, 1);
//! # Ok::<(), structcopy::Error>(())
//! ```
//!
//! ## Reflection
//!
//! The engine sees values only through the [`Reflect`] trait. It is
//! implemented for primitives, `String`, `char`, `Vec`, `HashMap`,
//! `BTreeMap`, `Option`, `Box`, `Box<dyn Reflect>`, `SystemTime`,
//! `Duration` and `PathBuf`. Structs derive it:
//!
//! | Attribute | Position | Effect |
//! |-----------|----------|--------|
//! | `#[reflect(getters(a, b))]` | struct | `fn a(&self) -> T` can fill a field named `a` |
//! | `#[reflect(setters(c))]` | struct | `fn c(&mut self, T)` is fed the source field named `c` |
//! | `#[reflect(embed)]` | field | The field's own fields match as if declared here |
//! | `#[reflect(rename = "x")]` | field | Match under the name `x` |
//! | `#[reflect(skip)]` | field | Never read or written |
//!
//! Only public fields are described. Deriving types must implement
//! [`Default`]. Types without visible structure can be registered with
//! [`impl_opaque!`] to be copied whole.
//!
//! ## Optional Features
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `derive` | `#[derive(Reflect)]` (enabled by default) |
//! | `tracing` | Structured logging with tracing crate |
//! | `serde` | Serialize/Deserialize for [`CopyOptions`] |
//! | `full` | Enable all optional features |

#![cfg_attr(docsrs, feature(doc_cfg))]

// Lets `#[derive(Reflect)]` output name `::structcopy` inside this crate too.
extern crate self as structcopy;

mod builder;
mod copy;
mod error;
mod options;
mod reflect;
mod utils;

pub use builder::CopyBuilder;
pub use copy::{CopyStats, copy, copy_with_options};
pub use error::{Error, Result};
pub use options::{CopyOptions, OnMismatch};
pub use reflect::{
    FieldInfo, Kind, Map, Nullable, Opaque, Reflect, ReflectMut, ReflectRef, Scalar, ScalarMut,
    Seq, Struct, find_field, find_getter, flattened_fields,
};

#[doc(hidden)]
pub use reflect::__private;

#[cfg(feature = "derive")]
#[cfg_attr(docsrs, doc(cfg(feature = "derive")))]
pub use structcopy_derive::Reflect;
