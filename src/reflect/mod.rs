//! Runtime shape information for copyable values.
//!
//! The copy engine never names concrete types. Everything it knows about a
//! value comes through the [`Reflect`] trait: a read view ([`ReflectRef`]), a
//! write view ([`ReflectMut`]), a zero test and a way to build fresh, zeroed
//! storage of the same type.
//!
//! # Shapes
//!
//! | Shape | Read view | Write view | Implemented for |
//! |-------|-----------|------------|-----------------|
//! | Scalar | [`Scalar`] | [`ScalarMut`] | integers, floats, `bool`, `char`, `String` |
//! | Struct | [`Struct`] | [`Struct`] | `#[derive(Reflect)]` types |
//! | Sequence | [`Seq`] | [`Seq`] | `Vec<T>` |
//! | Map | [`Map`] | [`Map`] | `HashMap<K, V>`, `BTreeMap<K, V>` |
//! | Nullable | [`Nullable`] | [`Nullable`] | `Option<T>` |
//! | Opaque | `&dyn Reflect` | [`Opaque`] | `SystemTime`, `Duration`, `PathBuf`, [`impl_opaque!`](crate::impl_opaque) types |
//!
//! `Box<T>` and `Box<dyn Reflect>` are transparent: they report the shape of
//! the value they hold.

use std::any::Any;
use std::fmt;

mod collections;
mod nullable;
mod opaque;
mod scalar;
mod structs;

pub use collections::{Map, Seq};
pub use nullable::Nullable;
pub use opaque::Opaque;
pub use scalar::{Scalar, ScalarMut};
pub use structs::{FieldInfo, Struct, find_field, find_getter, flattened_fields};

#[doc(hidden)]
pub use structs::__private;

/// A value whose shape can be inspected and written at runtime.
///
/// Implement it with `#[derive(Reflect)]` for structs and with
/// [`impl_opaque!`](crate::impl_opaque) for types that should be copied
/// whole. Hand-written implementations can use the hidden
/// `__reflect_boilerplate!` macro for the type-erasure methods.
pub trait Reflect: Any {
    /// Name of the concrete type, used in errors and logs.
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    /// Upcast to a trait object. Transparent wrappers return their content.
    fn as_reflect(&self) -> &dyn Reflect;

    /// Mutable counterpart of [`Reflect::as_reflect`].
    fn as_reflect_mut(&mut self) -> &mut dyn Reflect;

    /// Upcast to [`Any`] for downcasting to the concrete type.
    fn as_any(&self) -> &dyn Any;

    /// Convert a boxed value into a boxed [`Any`].
    fn into_any(self: Box<Self>) -> Box<dyn Any>;

    /// Read view of this value.
    fn reflect_ref(&self) -> ReflectRef<'_>;

    /// Write view of this value.
    fn reflect_mut(&mut self) -> ReflectMut<'_>;

    /// Whether this value is the zero value of its type.
    fn is_zero(&self) -> bool;

    /// The zero value of this type, if the type can be constructed without
    /// further information.
    fn zeroed() -> Option<Self>
    where
        Self: Sized;

    /// A freshly zeroed value of the same concrete type, boxed.
    fn fresh(&self) -> Option<Box<dyn Reflect>>;

    /// Replace this value with `value` if it holds the same concrete type.
    ///
    /// Returns `false` and leaves `self` untouched otherwise.
    fn replace(&mut self, value: Box<dyn Reflect>) -> bool;
}

/// Coarse classification of a value's shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// Numbers, booleans, characters and strings
    Scalar,
    /// Named-field structs
    Struct,
    /// Ordered sequences
    Seq,
    /// Key/value maps
    Map,
    /// Values that may be absent
    Nullable,
    /// Values copied whole
    Opaque,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Kind::Scalar => "scalar",
            Kind::Struct => "struct",
            Kind::Seq => "sequence",
            Kind::Map => "map",
            Kind::Nullable => "nullable",
            Kind::Opaque => "opaque",
        };
        f.write_str(name)
    }
}

/// Read view of a reflected value.
pub enum ReflectRef<'a> {
    /// A scalar, copied out
    Scalar(Scalar<'a>),
    /// A struct with described fields
    Struct(&'a dyn Struct),
    /// A sequence
    Seq(&'a dyn Seq),
    /// A map
    Map(&'a dyn Map),
    /// A value that may be absent
    Nullable(&'a dyn Nullable),
    /// A value copied whole
    Opaque(&'a dyn Reflect),
}

impl ReflectRef<'_> {
    /// Shape of the viewed value.
    pub fn kind(&self) -> Kind {
        match self {
            ReflectRef::Scalar(_) => Kind::Scalar,
            ReflectRef::Struct(_) => Kind::Struct,
            ReflectRef::Seq(_) => Kind::Seq,
            ReflectRef::Map(_) => Kind::Map,
            ReflectRef::Nullable(_) => Kind::Nullable,
            ReflectRef::Opaque(_) => Kind::Opaque,
        }
    }
}

/// Write view of a reflected value.
pub enum ReflectMut<'a> {
    /// A scalar slot
    Scalar(&'a mut dyn ScalarMut),
    /// A struct with described fields
    Struct(&'a mut dyn Struct),
    /// A sequence
    Seq(&'a mut dyn Seq),
    /// A map
    Map(&'a mut dyn Map),
    /// A value that may be absent
    Nullable(&'a mut dyn Nullable),
    /// A value copied whole
    Opaque(&'a mut dyn Opaque),
}

impl ReflectMut<'_> {
    /// Shape of the viewed value.
    pub fn kind(&self) -> Kind {
        match self {
            ReflectMut::Scalar(_) => Kind::Scalar,
            ReflectMut::Struct(_) => Kind::Struct,
            ReflectMut::Seq(_) => Kind::Seq,
            ReflectMut::Map(_) => Kind::Map,
            ReflectMut::Nullable(_) => Kind::Nullable,
            ReflectMut::Opaque(_) => Kind::Opaque,
        }
    }
}

/// Type-erasure methods shared by every sized [`Reflect`] implementation.
///
/// Expands to `as_reflect`, `as_reflect_mut`, `as_any`, `into_any`, `fresh`
/// and `replace`. Use it inside an `impl Reflect for T` block.
#[doc(hidden)]
#[macro_export]
macro_rules! __reflect_boilerplate {
    () => {
        fn as_reflect(&self) -> &dyn $crate::Reflect {
            self
        }

        fn as_reflect_mut(&mut self) -> &mut dyn $crate::Reflect {
            self
        }

        fn as_any(&self) -> &dyn ::std::any::Any {
            self
        }

        fn into_any(self: ::std::boxed::Box<Self>) -> ::std::boxed::Box<dyn ::std::any::Any> {
            self
        }

        fn fresh(&self) -> ::std::option::Option<::std::boxed::Box<dyn $crate::Reflect>> {
            <Self as $crate::Reflect>::zeroed()
                .map(|value| ::std::boxed::Box::new(value) as ::std::boxed::Box<dyn $crate::Reflect>)
        }

        fn replace(&mut self, value: ::std::boxed::Box<dyn $crate::Reflect>) -> bool {
            match value.into_any().downcast::<Self>() {
                ::std::result::Result::Ok(value) => {
                    *self = *value;
                    true
                }
                ::std::result::Result::Err(_) => false,
            }
        }
    };
}

impl<T: Reflect> Reflect for Box<T> {
    fn type_name(&self) -> &'static str {
        (**self).type_name()
    }

    fn as_reflect(&self) -> &dyn Reflect {
        (**self).as_reflect()
    }

    fn as_reflect_mut(&mut self) -> &mut dyn Reflect {
        (**self).as_reflect_mut()
    }

    fn as_any(&self) -> &dyn Any {
        (**self).as_any()
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }

    fn reflect_ref(&self) -> ReflectRef<'_> {
        (**self).reflect_ref()
    }

    fn reflect_mut(&mut self) -> ReflectMut<'_> {
        (**self).reflect_mut()
    }

    fn is_zero(&self) -> bool {
        (**self).is_zero()
    }

    fn zeroed() -> Option<Self> {
        T::zeroed().map(Box::new)
    }

    fn fresh(&self) -> Option<Box<dyn Reflect>> {
        (**self).fresh()
    }

    fn replace(&mut self, value: Box<dyn Reflect>) -> bool {
        (**self).replace(value)
    }
}

// The "any"-typed container: behaves as whatever it currently holds, but has
// no concrete type to allocate when empty.
impl Reflect for Box<dyn Reflect> {
    fn type_name(&self) -> &'static str {
        (**self).type_name()
    }

    fn as_reflect(&self) -> &dyn Reflect {
        (**self).as_reflect()
    }

    fn as_reflect_mut(&mut self) -> &mut dyn Reflect {
        (**self).as_reflect_mut()
    }

    fn as_any(&self) -> &dyn Any {
        (**self).as_any()
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        (*self).into_any()
    }

    fn reflect_ref(&self) -> ReflectRef<'_> {
        (**self).reflect_ref()
    }

    fn reflect_mut(&mut self) -> ReflectMut<'_> {
        (**self).reflect_mut()
    }

    fn is_zero(&self) -> bool {
        (**self).is_zero()
    }

    fn zeroed() -> Option<Self> {
        None
    }

    fn fresh(&self) -> Option<Box<dyn Reflect>> {
        (**self).fresh()
    }

    fn replace(&mut self, value: Box<dyn Reflect>) -> bool {
        (**self).replace(value)
    }
}
