//! Derive macro for structcopy reflection.
//!
//! This crate provides `#[derive(Reflect)]`, which implements
//! `structcopy::Reflect` and `structcopy::Struct` for structs with named
//! fields. Use it through the `structcopy` crate, which re-exports it.
//!
//! # Example
//!
//! ```rust,ignore
//! use structcopy::Reflect;
//!
//! #[derive(Default, Reflect)]
//! #[reflect(getters(display_name), setters(role))]
//! struct Employee {
//!     pub name: String,
//!     #[reflect(rename = "age")]
//!     pub years: i64,
//!     #[reflect(embed)]
//!     pub contact: Contact,
//!     #[reflect(skip)]
//!     pub cache: Vec<u8>,
//!     salary: u64, // private: never read or written
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod attrs;
mod reflect;

use proc_macro::TokenStream;

/// Derive `structcopy::Reflect` and `structcopy::Struct`.
///
/// # Requirements
///
/// - The type must be a struct with named fields
/// - The type must implement `Default` (used to build zeroed values)
/// - Lifetime parameters are not supported
///
/// # Attributes
///
/// On the struct:
///
/// - `#[reflect(getters(a, b))]`: register `fn a(&self) -> T` methods whose
///   result can fill a destination field of the same name
/// - `#[reflect(setters(c))]`: register `fn c(&mut self, value: T)` methods
///   fed from a source field of the same name
///
/// On a field:
///
/// - `#[reflect(embed)]`: match the field's own fields as if declared on
///   this struct
/// - `#[reflect(rename = "name")]`: match under a different name
/// - `#[reflect(skip)]`: never read or write this field
///
/// Only `pub` fields (any visibility other than private) are described.
/// Getter results and setter arguments must be owned `Reflect` types.
#[proc_macro_derive(Reflect, attributes(reflect))]
pub fn derive_reflect(input: TokenStream) -> TokenStream {
    reflect::derive_reflect_impl(input)
}
