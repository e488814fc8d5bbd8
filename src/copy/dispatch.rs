//! Top-level entry points.

use std::time::Instant;

use super::engine::{Engine, Outcome};
use super::resolve;
use crate::error::{Error, Result};
use crate::options::CopyOptions;
use crate::reflect::{Kind, Reflect, ReflectMut, ReflectRef, Seq};
use crate::utils::path::Segment;

/// Statistics from a copy operation.
///
/// # Example
///
/// ```
/// use structcopy::{copy_with_options, CopyOptions, Reflect};
///
/// #[derive(Default, Reflect)]
/// struct User {
///     pub name: String,
///     pub age: i32,
/// }
///
/// #[derive(Default, Reflect)]
/// struct Employee {
///     pub name: String,
///     pub age: i64,
///     pub active: bool,
/// }
///
/// let user = User { name: "Jinzhu".into(), age: 18 };
/// let mut employee = Employee::default();
/// let stats = copy_with_options(&mut employee, &user, &CopyOptions::default())?;
/// assert_eq!(stats.fields_copied, 2);
/// assert_eq!(employee.age, 18);
/// # Ok::<(), structcopy::Error>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CopyStats {
    /// Number of destination fields written, nested struct fields included
    pub fields_copied: u64,
    /// Number of fields skipped because no conversion exists
    pub fields_skipped: u64,
    /// Number of getter calls used to fill fields
    pub getters_invoked: u64,
    /// Number of setter calls
    pub setters_invoked: u64,
    /// Number of top-level collection elements copied
    pub elements_copied: u64,
    /// Duration of the copy operation
    pub duration: std::time::Duration,
}

/// Copy `source` into `destination` with default options.
///
/// Matching fields are copied by name, nested values are deep-copied, and
/// fields with no viable conversion are left unchanged. See
/// [`copy_with_options`] for the full behavior.
///
/// # Example
///
/// ```
/// use structcopy::{copy, Reflect};
///
/// #[derive(Default, Reflect)]
/// struct User {
///     pub name: String,
///     pub nickname: String,
/// }
///
/// #[derive(Default, Reflect)]
/// struct Employee {
///     pub name: String,
///     pub nickname: Option<String>,
/// }
///
/// let user = User { name: "Jinzhu".into(), nickname: String::new() };
/// let mut employee = Employee::default();
/// copy(&mut employee, &user)?;
/// assert_eq!(employee.name, "Jinzhu");
/// assert_eq!(employee.nickname, None);
/// # Ok::<(), structcopy::Error>(())
/// ```
///
/// # Errors
///
/// Same as [`copy_with_options`].
pub fn copy<D, S>(destination: &mut D, source: &S) -> Result<()>
where
    D: Reflect + ?Sized,
    S: Reflect + ?Sized,
{
    copy_with_options(destination, source, &CopyOptions::default()).map(|_| ())
}

/// Copy `source` into `destination`.
///
/// # Dispatch
///
/// `Option` layers of the source are followed. Empty `Option` layers of the
/// destination are allocated through only for the shapes that copy
/// something:
///
/// | Destination | Source | Behavior |
/// |-------------|--------|----------|
/// | struct | struct | Field-by-field copy in place |
/// | sequence | struct | Destination becomes one element holding the copy |
/// | sequence | sequence | Destination is rebuilt element by element |
/// | struct | sequence | Nothing happens |
/// | map | map | Destination is rebuilt entry by entry |
/// | any | `None` | Nothing happens |
/// | scalar or opaque | any | [`Error::NotAddressable`] |
///
/// Returns [`CopyStats`] with information about what was copied.
///
/// # Errors
///
/// Returns an error if:
/// - The destination is not a struct, sequence or map ([`Error::NotAddressable`])
/// - A field has no conversion under [`OnMismatch::Error`](crate::OnMismatch::Error) ([`Error::TypeMismatch`])
/// - Nesting is deeper than `max_depth` ([`Error::MaxDepthExceeded`])
/// - Some sequence elements failed to copy ([`Error::PartialCopy`])
pub fn copy_with_options<D, S>(
    destination: &mut D,
    source: &S,
    options: &CopyOptions,
) -> Result<CopyStats>
where
    D: Reflect + ?Sized,
    S: Reflect + ?Sized,
{
    let start_time = Instant::now();

    let mut engine = Engine::new(options);
    engine.dispatch(destination.as_reflect_mut(), source.as_reflect())?;

    let mut stats = engine.into_stats();
    stats.duration = start_time.elapsed();

    #[cfg(feature = "tracing")]
    tracing::debug!(
        fields_copied = stats.fields_copied,
        fields_skipped = stats.fields_skipped,
        elements_copied = stats.elements_copied,
        duration = ?stats.duration,
        "copy complete"
    );

    Ok(stats)
}

impl Engine<'_> {
    fn dispatch(&mut self, dst: &mut dyn Reflect, src: &dyn Reflect) -> Result<()> {
        let Some(src) = resolve::source(src) else {
            return Ok(());
        };
        let Some((kind, to)) = resolve::shape(dst) else {
            return Err(Error::NotAddressable {
                type_name: dst.type_name(),
            });
        };

        // Only shapes that write may allocate through empty `Option` layers.
        let from = src.type_name();
        match (kind, src.reflect_ref().kind()) {
            (Kind::Struct, Kind::Struct)
            | (Kind::Seq, Kind::Struct | Kind::Seq)
            | (Kind::Map, Kind::Map) => {}
            (Kind::Struct, Kind::Seq) => return Ok(()),
            (Kind::Struct | Kind::Seq | Kind::Map, _) => {
                return self.settle(Outcome::Mismatch, from, to).map(|_| ());
            }
            _ => return Err(Error::NotAddressable { type_name: to }),
        }

        let dst = resolve::destination(dst)?;
        match (kind, src.reflect_ref()) {
            (Kind::Seq, ReflectRef::Seq(source)) => self.copy_elements(dst, source),
            (Kind::Seq, _) => self.wrap_element(dst, src),
            (Kind::Struct, ReflectRef::Struct(source)) => match dst.reflect_mut() {
                ReflectMut::Struct(target) => self.copy_struct(target, source),
                _ => Err(Error::NotAddressable { type_name: to }),
            },
            _ => {
                let outcome = self.convert(dst, src)?;
                self.settle(outcome, from, to).map(|_| ())
            }
        }
    }

    /// Rebuild `dst` from `source`, one fresh element per source element.
    ///
    /// The new sequence is built apart and then replaces `dst`. A failing
    /// element is reset to its zero value and reported through the warning
    /// handler; the rest are still copied.
    fn copy_elements(&mut self, dst: &mut dyn Reflect, source: &dyn Seq) -> Result<()> {
        let total = source.len();
        let mut staged = fresh_sequence(dst, total > 0)?;

        let mut failed = 0;
        let mut first_error = None;
        if let ReflectMut::Seq(target) = staged.reflect_mut() {
            for index in 0..total {
                let item = source.get(index);
                match self.enter(Segment::Index(index), |engine| engine.copy_element(target, item)) {
                    Ok(()) => self.stats.elements_copied += 1,
                    Err(e) => {
                        self.options
                            .warn(&format!("Failed to copy element {index}: {e}"));
                        reset_element(target, index);
                        failed += 1;
                        first_error.get_or_insert(e);
                    }
                }
            }
        }
        commit(dst, staged)?;

        match first_error {
            Some(source) => Err(Error::PartialCopy {
                failed,
                total,
                source: Box::new(source),
            }),
            None => Ok(()),
        }
    }

    /// Replace the contents of `dst` with a single copy of `source`.
    ///
    /// `dst` is untouched if the element cannot be copied.
    fn wrap_element(&mut self, dst: &mut dyn Reflect, source: &dyn Reflect) -> Result<()> {
        let mut staged = fresh_sequence(dst, true)?;
        if let ReflectMut::Seq(target) = staged.reflect_mut() {
            self.enter(Segment::Index(0), |engine| {
                engine.copy_element(target, Some(source))
            })?;
        }
        commit(dst, staged)?;
        self.stats.elements_copied += 1;
        Ok(())
    }

    fn copy_element(&mut self, target: &mut dyn Seq, item: Option<&dyn Reflect>) -> Result<()> {
        let type_name = target.element_type_name();
        let slot = target
            .push_zeroed()
            .ok_or(Error::NotAddressable { type_name })?;
        let Some(item) = item.and_then(resolve::source) else {
            return Ok(());
        };

        let from = item.type_name();
        match item.reflect_ref() {
            ReflectRef::Struct(source) => {
                let slot = resolve::destination(slot)?;
                let to = slot.type_name();
                match slot.reflect_mut() {
                    ReflectMut::Struct(element) => self.copy_struct(element, source),
                    _ => self.settle(Outcome::Mismatch, from, to).map(|_| ()),
                }
            }
            _ => {
                let outcome = self.convert(slot, item)?;
                self.settle(outcome, from, slot.type_name()).map(|_| ())
            }
        }
    }
}

/// Empty storage of the same sequence type as `dst`.
///
/// With `needs_elements`, fails with [`Error::NotAddressable`] unless the
/// element type can be constructed.
fn fresh_sequence(dst: &dyn Reflect, needs_elements: bool) -> Result<Box<dyn Reflect>> {
    let type_name = dst.type_name();
    let mut staged = dst.fresh().ok_or(Error::NotAddressable { type_name })?;

    let unbuildable = match staged.reflect_mut() {
        ReflectMut::Seq(target) => {
            let buildable = !needs_elements || target.push_zeroed().is_some();
            target.clear();
            (!buildable).then(|| target.element_type_name())
        }
        _ => Some(type_name),
    };
    match unbuildable {
        Some(type_name) => Err(Error::NotAddressable { type_name }),
        None => Ok(staged),
    }
}

fn commit(dst: &mut dyn Reflect, staged: Box<dyn Reflect>) -> Result<()> {
    let type_name = dst.type_name();
    if dst.replace(staged) {
        Ok(())
    } else {
        Err(Error::NotAddressable { type_name })
    }
}

fn reset_element(target: &mut dyn Seq, index: usize) {
    if let Some(element) = target.get_mut(index) {
        if let Some(zero) = element.fresh() {
            element.replace(zero);
        }
    }
}
