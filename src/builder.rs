//! Builder API for ergonomic copying operations.
//!
//! The builder pattern provides a fluent interface for configuring and executing
//! copy operations. This is often more convenient than manually constructing
//! [`CopyOptions`].
//!
//! # Examples
//!
//! ## Basic Usage
//!
//! ```
//! use structcopy::{CopyBuilder, Reflect};
//!
//! #[derive(Default, Reflect)]
//! struct User {
//!     pub name: String,
//!     pub age: i32,
//! }
//!
//! #[derive(Default, Reflect)]
//! struct Employee {
//!     pub name: String,
//!     pub age: i64,
//! }
//!
//! let user = User { name: "Jinzhu".into(), age: 18 };
//! let mut employee = Employee::default();
//!
//! // Simple copy with defaults
//! let stats = CopyBuilder::new(&mut employee, &user).run()?;
//! println!("Copied {} fields", stats.fields_copied);
//! # Ok::<(), structcopy::Error>(())
//! ```
//!
//! ## Patching
//!
//! ```
//! use structcopy::{CopyBuilder, Reflect};
//!
//! #[derive(Default, Reflect)]
//! struct Patch {
//!     pub name: String,
//!     pub age: Option<i64>,
//! }
//!
//! #[derive(Default, Reflect)]
//! struct Employee {
//!     pub name: String,
//!     pub age: i64,
//! }
//!
//! let mut employee = Employee { name: "Jinzhu".into(), age: 18 };
//! let patch = Patch { name: String::new(), age: Some(19) };
//!
//! // Only fields the patch actually sets are copied
//! CopyBuilder::new(&mut employee, &patch)
//!     .ignore_empty()
//!     .error_on_mismatch()
//!     .run()?;
//!
//! assert_eq!(employee.name, "Jinzhu");
//! assert_eq!(employee.age, 19);
//! # Ok::<(), structcopy::Error>(())
//! ```

use crate::copy::{CopyStats, copy_with_options};
use crate::error::Result;
use crate::options::{CopyOptions, OnMismatch};
use crate::reflect::Reflect;

/// A builder for configuring and executing copy operations.
///
/// `CopyBuilder` provides a fluent interface that is often more ergonomic than
/// constructing [`CopyOptions`] manually. It borrows the destination mutably
/// and the source immutably until [`CopyBuilder::run`] is called.
pub struct CopyBuilder<'a, D: ?Sized, S: ?Sized> {
    destination: &'a mut D,
    source: &'a S,
    options: CopyOptions,
}

impl<'a, D, S> CopyBuilder<'a, D, S>
where
    D: Reflect + ?Sized,
    S: Reflect + ?Sized,
{
    /// Create a new `CopyBuilder` for the given destination and source.
    ///
    /// Uses default options (skip mismatched fields, copy zero values, no
    /// depth limit).
    pub fn new(destination: &'a mut D, source: &'a S) -> Self {
        Self {
            destination,
            source,
            options: CopyOptions::default(),
        }
    }

    /// Leave destination fields untouched when the source value is zero.
    #[must_use]
    pub fn ignore_empty(mut self) -> Self {
        self.options = self.options.with_ignore_empty(true);
        self
    }

    /// Skip fields that cannot be converted (default behavior).
    #[must_use]
    pub fn skip_mismatched(mut self) -> Self {
        self.options = self.options.with_on_mismatch(OnMismatch::Skip);
        self
    }

    /// Return an error if a field cannot be converted.
    ///
    /// # Example
    ///
    /// ```
    /// use std::time::SystemTime;
    /// use structcopy::{CopyBuilder, Error, Reflect};
    ///
    /// #[derive(Default, Reflect)]
    /// struct Event {
    ///     pub at: Option<SystemTime>,
    /// }
    ///
    /// #[derive(Default, Reflect)]
    /// struct Row {
    ///     pub at: String,
    /// }
    ///
    /// let event = Event { at: Some(SystemTime::now()) };
    /// let mut row = Row::default();
    /// let result = CopyBuilder::new(&mut row, &event).error_on_mismatch().run();
    /// assert!(matches!(result, Err(Error::TypeMismatch { .. })));
    /// ```
    #[must_use]
    pub fn error_on_mismatch(mut self) -> Self {
        self.options = self.options.with_on_mismatch(OnMismatch::Error);
        self
    }

    /// Set maximum nesting depth.
    #[must_use]
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.options = self.options.with_max_depth(depth);
        self
    }

    /// Set a warning handler.
    ///
    /// Called once for every collection element that failed to copy.
    #[must_use]
    pub fn on_warning(mut self, handler: fn(&str)) -> Self {
        self.options = self.options.with_warn_handler(handler);
        self
    }

    /// Set a verbose handler for per-field messages.
    ///
    /// Called for every skipped field and every getter or setter call.
    #[must_use]
    pub fn verbose(mut self, handler: fn(&str)) -> Self {
        self.options = self.options.with_verbose_handler(handler);
        self
    }

    /// Replace all options at once.
    #[must_use]
    pub fn with_options(mut self, options: CopyOptions) -> Self {
        self.options = options;
        self
    }

    /// Get a reference to the current options.
    ///
    /// Useful for inspection or passing to other functions.
    pub fn options(&self) -> &CopyOptions {
        &self.options
    }

    /// Execute the copy operation.
    ///
    /// Returns [`CopyStats`] with information about what was copied.
    ///
    /// # Errors
    ///
    /// Same as [`copy_with_options`](crate::copy_with_options).
    pub fn run(self) -> Result<CopyStats> {
        copy_with_options(self.destination, self.source, &self.options)
    }
}
