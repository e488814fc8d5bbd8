//! Values that are copied whole.

use std::path::PathBuf;
use std::time::{Duration, SystemTime};

use super::Reflect;

/// A value with no visible structure, copied by [`Clone`] between identical
/// types only.
pub trait Opaque: Reflect {
    /// Overwrite `self` with a clone of `source` if it has the same type.
    fn assign(&mut self, source: &dyn Reflect) -> bool;
}

/// Register types that are copied whole.
///
/// Each type needs `Clone` and `PartialEq`; the expression after `=>` is its
/// zero value. Values equal to it count as empty for `ignore_empty` and are
/// not allowed to fill an `Option` destination.
///
/// Append `; never_zero` for types whose zero value is also a meaningful
/// value. It is still used to allocate storage, but no value of the type
/// ever counts as empty. `SystemTime` is registered this way, so a
/// timestamp of exactly `UNIX_EPOCH` is copied like any other.
///
/// ```
/// #[derive(Clone, PartialEq)]
/// struct Money(i64);
///
/// #[derive(Clone, PartialEq)]
/// struct Level(u8);
///
/// structcopy::impl_opaque!(Money => Money(0), Level => Level(0); never_zero);
/// ```
#[macro_export]
macro_rules! impl_opaque {
    (@is_zero $value:ident, $zero:expr) => {
        *$value == $zero
    };
    (@is_zero $value:ident, $zero:expr, never_zero) => {
        false
    };
    ($($ty:ty => $zero:expr $(; $mode:ident)?),+ $(,)?) => {$(
        impl $crate::Reflect for $ty {
            $crate::__reflect_boilerplate!();

            fn reflect_ref(&self) -> $crate::ReflectRef<'_> {
                $crate::ReflectRef::Opaque(self)
            }

            fn reflect_mut(&mut self) -> $crate::ReflectMut<'_> {
                $crate::ReflectMut::Opaque(self)
            }

            fn is_zero(&self) -> bool {
                $crate::impl_opaque!(@is_zero self, $zero $(, $mode)?)
            }

            fn zeroed() -> ::std::option::Option<Self> {
                ::std::option::Option::Some($zero)
            }
        }

        impl $crate::Opaque for $ty {
            fn assign(&mut self, source: &dyn $crate::Reflect) -> bool {
                match source.as_any().downcast_ref::<Self>() {
                    ::std::option::Option::Some(value) => {
                        *self = ::std::clone::Clone::clone(value);
                        true
                    }
                    ::std::option::Option::None => false,
                }
            }
        }
    )+};
}

impl_opaque!(
    SystemTime => SystemTime::UNIX_EPOCH; never_zero,
    Duration => Duration::ZERO,
    PathBuf => PathBuf::new(),
);
