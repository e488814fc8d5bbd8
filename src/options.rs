//! Configuration options for copy operations.
//!
//! This module provides [`CopyOptions`] for configuring copy behavior and
//! [`OnMismatch`] for handling fields that cannot be converted.
//!
//! # Example
//!
//! ```
//! use structcopy::{CopyOptions, OnMismatch};
//!
//! // Create options with builder pattern
//! let options = CopyOptions::default()
//!     .with_on_mismatch(OnMismatch::Error)
//!     .with_ignore_empty(true)
//!     .with_max_depth(32);
//! ```

/// Behavior when a source value cannot be converted into its destination.
///
/// # Default
///
/// The default is [`OnMismatch::Skip`]: the destination field keeps its
/// value and the copy carries on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OnMismatch {
    /// Leave the destination field unchanged (default).
    ///
    /// The field is counted in
    /// [`CopyStats::fields_skipped`](crate::CopyStats::fields_skipped).
    #[default]
    Skip,
    /// Fail with [`Error::TypeMismatch`](crate::Error::TypeMismatch).
    ///
    /// Fields copied before the mismatch keep their new values.
    Error,
}

/// Options for copy operations.
///
/// Use [`Default::default()`] to get the permissive defaults, then
/// customize using the builder methods.
///
/// # Default Values
///
/// | Field | Default | Description |
/// |-------|---------|-------------|
/// | `on_mismatch` | `Skip` | Skip fields that cannot be converted |
/// | `ignore_empty` | `false` | Zero source values are copied too |
/// | `max_depth` | `None` | No depth limit |
/// | `warn_handler` | `None` | Warnings go to `tracing` when enabled |
/// | `verbose_handler` | `None` | Per-field messages go to `tracing` when enabled |
///
/// # Example
///
/// ```
/// use structcopy::CopyOptions;
///
/// let options = CopyOptions::default()
///     .with_ignore_empty(true)   // Patch semantics: keep what the source lacks
///     .with_max_depth(8);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CopyOptions {
    /// Behavior when a field cannot be converted
    pub on_mismatch: OnMismatch,

    /// Leave destination fields untouched when the source value is zero
    /// (default: false)
    ///
    /// Zero is whatever [`Reflect::is_zero`](crate::Reflect::is_zero)
    /// reports: `0`, `""`, `None`, empty collections and so on.
    pub ignore_empty: bool,

    /// Maximum nesting depth to traverse (default: None = unlimited)
    ///
    /// Every field, element, map entry and setter argument entered counts
    /// as one level.
    pub max_depth: Option<usize>,

    /// Callback for warnings (optional)
    ///
    /// If not set and `tracing` feature is enabled, warnings are logged via tracing.
    /// Otherwise, warnings are silently ignored.
    #[cfg_attr(feature = "serde", serde(skip))]
    pub warn_handler: Option<fn(&str)>,

    /// Callback for per-field progress messages (optional)
    ///
    /// Receives a message for every skipped field and every bridged getter
    /// or setter call. If not set and `tracing` feature is enabled, messages
    /// are logged at debug level.
    #[cfg_attr(feature = "serde", serde(skip))]
    pub verbose_handler: Option<fn(&str)>,
}

impl Default for CopyOptions {
    fn default() -> Self {
        Self {
            on_mismatch: OnMismatch::Skip,
            ignore_empty: false,
            max_depth: None,
            warn_handler: None,
            verbose_handler: None,
        }
    }
}

impl CopyOptions {
    /// Create options with a warning handler
    #[must_use]
    pub fn with_warn_handler(mut self, handler: fn(&str)) -> Self {
        self.warn_handler = Some(handler);
        self
    }

    /// Create options with a verbose handler
    #[must_use]
    pub fn with_verbose_handler(mut self, handler: fn(&str)) -> Self {
        self.verbose_handler = Some(handler);
        self
    }

    /// Set the mismatch behavior
    #[must_use]
    pub fn with_on_mismatch(mut self, on_mismatch: OnMismatch) -> Self {
        self.on_mismatch = on_mismatch;
        self
    }

    /// Skip zero source values instead of copying them
    #[must_use]
    pub fn with_ignore_empty(mut self, ignore_empty: bool) -> Self {
        self.ignore_empty = ignore_empty;
        self
    }

    /// Set maximum nesting depth
    #[must_use]
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    pub(crate) fn warn(&self, msg: &str) {
        if let Some(handler) = self.warn_handler {
            handler(msg);
        } else {
            #[cfg(feature = "tracing")]
            tracing::warn!("{}", msg);
        }
    }

    pub(crate) fn verbose(&self, msg: impl FnOnce() -> String) {
        if let Some(handler) = self.verbose_handler {
            handler(&msg());
        } else {
            #[cfg(feature = "tracing")]
            tracing::debug!("{}", msg());
        }
    }
}
