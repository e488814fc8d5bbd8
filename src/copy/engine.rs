//! Per-call copy state.

use super::CopyStats;
use crate::error::{Error, Result};
use crate::options::{CopyOptions, OnMismatch};
use crate::utils::path::{FieldPath, Segment};

/// What happened to a destination slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Outcome {
    /// The slot now holds the converted source value
    Written,
    /// The source was absent or empty; the slot was left alone
    Unchanged,
    /// No conversion exists; the slot was left alone
    Mismatch,
}

/// State threaded through one copy call: options, counters, and the path
/// of the value currently being visited.
pub(crate) struct Engine<'o> {
    pub(crate) options: &'o CopyOptions,
    pub(crate) stats: CopyStats,
    path: FieldPath,
    depth: usize,
}

impl<'o> Engine<'o> {
    pub(crate) fn new(options: &'o CopyOptions) -> Self {
        Self {
            options,
            stats: CopyStats::default(),
            path: FieldPath::default(),
            depth: 0,
        }
    }

    pub(crate) fn into_stats(self) -> CopyStats {
        self.stats
    }

    pub(crate) fn path(&self) -> &FieldPath {
        &self.path
    }

    /// Run `f` one level deeper, under `segment`.
    pub(crate) fn enter<T>(
        &mut self,
        segment: Segment,
        f: impl FnOnce(&mut Self) -> Result<T>,
    ) -> Result<T> {
        self.path.push(segment);
        self.depth += 1;

        let result = match self.options.max_depth {
            Some(max_depth) if self.depth > max_depth => Err(Error::MaxDepthExceeded {
                path: self.path.to_string(),
                max_depth,
            }),
            _ => f(self),
        };

        self.depth -= 1;
        self.path.pop();
        result
    }

    /// Record the outcome of copying one field or element.
    ///
    /// Mismatches become [`Error::TypeMismatch`] under [`OnMismatch::Error`].
    pub(crate) fn settle(
        &mut self,
        outcome: Outcome,
        from: &'static str,
        to: &'static str,
    ) -> Result<Outcome> {
        match outcome {
            Outcome::Written => self.stats.fields_copied += 1,
            Outcome::Unchanged => {}
            Outcome::Mismatch => {
                if self.options.on_mismatch == OnMismatch::Error {
                    return Err(Error::TypeMismatch {
                        path: self.path.to_string(),
                        from,
                        to,
                    });
                }
                self.stats.fields_skipped += 1;
                let path = &self.path;
                self.options
                    .verbose(|| format!("Skipping {path}: cannot copy {from} into {to}"));
            }
        }
        Ok(outcome)
    }
}
