//! Core copy operations.
//!
//! This module provides the copy engine: top-level dispatch between
//! structs and collections, indirection resolution, field matching with
//! getter and setter bridging, and value conversion.

mod convert;
mod dispatch;
mod engine;
mod matcher;
mod resolve;

// Re-export public API
pub use dispatch::{CopyStats, copy, copy_with_options};
