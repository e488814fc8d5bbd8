//! Error types for structcopy.
//!
//! This module provides the [`Error`] enum containing all possible errors
//! that can occur during copy operations, and the [`Result`] type alias.
//!
//! # Error Categories
//!
//! | Category | Errors |
//! |----------|--------|
//! | Addressing | [`Error::NotAddressable`] |
//! | Conversion | [`Error::TypeMismatch`] (only with [`OnMismatch::Error`](crate::OnMismatch::Error)) |
//! | Partial | [`Error::PartialCopy`] |
//! | Safety | [`Error::MaxDepthExceeded`] |
//!
//! Fields that cannot be converted are not errors by default: they are
//! skipped and counted in [`CopyStats::fields_skipped`](crate::CopyStats::fields_skipped).

use thiserror::Error;

/// Result type for structcopy operations.
///
/// This is a type alias for `std::result::Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during copy operations.
///
/// Errors raised below the top level carry the field path where they
/// happened, rendered like a Rust place expression (`employees[1].name`).
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// The destination cannot be resolved to a writable struct or collection
    ///
    /// Raised for scalar and opaque destinations, and for empty slots whose
    /// content type cannot be constructed, such as `Option<Box<dyn Reflect>>`.
    /// Nothing is written when this is returned for the top-level destination.
    #[error("Destination is not addressable: {type_name}")]
    NotAddressable {
        /// Type of the value that could not be written
        type_name: &'static str,
    },

    /// A field had no viable conversion
    #[error("Cannot copy {from} into {to} at {path}")]
    TypeMismatch {
        /// The destination field path
        path: String,
        /// Source type
        from: &'static str,
        /// Destination type
        to: &'static str,
    },

    /// Maximum nesting depth exceeded
    #[error("Maximum depth {max_depth} exceeded at: {path}")]
    MaxDepthExceeded {
        /// The field path where max depth was exceeded
        path: String,
        /// The configured maximum depth
        max_depth: usize,
    },

    /// Failed to copy one or more collection elements
    ///
    /// The elements that failed were left at their zero value; every other
    /// element was copied.
    #[error("Failed to copy {failed} of {total} elements")]
    PartialCopy {
        /// Number of elements that failed to copy
        failed: usize,
        /// Total number of elements
        total: usize,
        /// The first element failure
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Whether this error means the destination could not be written at all.
    pub fn is_not_addressable(&self) -> bool {
        matches!(self, Error::NotAddressable { .. })
    }
}
