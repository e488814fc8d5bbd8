//! Field paths for error messages and logs.
//!
//! While copying, the engine keeps track of where it is in the destination
//! value as a stack of [`Segment`]s. The rendered form looks like Rust
//! place expressions:
//!
//! ```text
//! employees[1].nickname
//! class.students["a"].age
//! role(..)
//! ```

use std::fmt;

/// One step into a value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Segment {
    /// A named field
    Field(&'static str),
    /// A sequence element
    Index(usize),
    /// A map entry, with the key rendered for display
    Key(String),
    /// The argument of a setter method
    Setter(&'static str),
}

/// Location of the value currently being copied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct FieldPath {
    segments: Vec<Segment>,
}

impl FieldPath {
    pub(crate) fn push(&mut self, segment: Segment) {
        self.segments.push(segment);
    }

    pub(crate) fn pop(&mut self) {
        self.segments.pop();
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.segments.len()
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            return f.write_str("<root>");
        }
        for (position, segment) in self.segments.iter().enumerate() {
            match segment {
                Segment::Field(name) | Segment::Setter(name) if position > 0 => {
                    f.write_str(".")?;
                    write_named(f, segment, name)?;
                }
                Segment::Field(name) | Segment::Setter(name) => write_named(f, segment, name)?,
                Segment::Index(index) => write!(f, "[{index}]")?,
                Segment::Key(key) => write!(f, "[{key}]")?,
            }
        }
        Ok(())
    }
}

fn write_named(f: &mut fmt::Formatter<'_>, segment: &Segment, name: &str) -> fmt::Result {
    match segment {
        Segment::Setter(_) => write!(f, "{name}(..)"),
        _ => f.write_str(name),
    }
}
