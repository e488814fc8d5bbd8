//! Indirection resolution.
//!
//! `Box` layers are transparent at the [`Reflect`] level already, so only
//! `Option` layers need work here: sources are followed through `Some`,
//! destinations are allocated through `None`.

use crate::error::{Error, Result};
use crate::reflect::{Kind, Reflect, ReflectMut, ReflectRef};

/// The concrete value behind `value`, or `None` if an `Option` layer is
/// empty.
pub(crate) fn source(value: &dyn Reflect) -> Option<&dyn Reflect> {
    match value.reflect_ref() {
        ReflectRef::Nullable(inner) => inner.get().and_then(source),
        _ => Some(value.as_reflect()),
    }
}

/// The concrete value behind `value`, allocating zeroed values through
/// every empty `Option` layer.
///
/// Fails with [`Error::NotAddressable`] if a layer's content type cannot be
/// constructed, which leaves that layer empty.
pub(crate) fn destination(value: &mut dyn Reflect) -> Result<&mut dyn Reflect> {
    if !matches!(value.reflect_ref(), ReflectRef::Nullable(_)) {
        return Ok(value.as_reflect_mut());
    }

    let type_name = value.type_name();
    match value.reflect_mut() {
        ReflectMut::Nullable(slot) => match slot.get_or_insert_zeroed() {
            Some(inner) => destination(inner),
            None => Err(Error::NotAddressable { type_name }),
        },
        _ => Err(Error::NotAddressable { type_name }),
    }
}

/// The shape and type name [`destination`] would resolve `value` to,
/// without allocating anything.
///
/// Empty `Option` layers are looked through with a detached zeroed value.
/// Returns `None` if such a layer's content type cannot be constructed.
pub(crate) fn shape(value: &dyn Reflect) -> Option<(Kind, &'static str)> {
    match value.reflect_ref() {
        ReflectRef::Nullable(inner) => match inner.get() {
            Some(held) => shape(held),
            None => shape(inner.zeroed_value()?.as_reflect()),
        },
        view => Some((view.kind(), value.type_name())),
    }
}
