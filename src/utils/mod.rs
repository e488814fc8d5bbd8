//! Internal utilities.

pub(crate) mod path;
