//! Scalar values and their conversions.

use std::fmt;

use super::{Reflect, ReflectMut, ReflectRef};

/// A scalar read out of a reflected value.
///
/// Integers are widened to 64 bits so that any source width can be
/// converted into any destination width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scalar<'a> {
    /// `bool`
    Bool(bool),
    /// Signed integers
    Int(i64),
    /// Unsigned integers
    Uint(u64),
    /// `f32` and `f64`
    Float(f64),
    /// `char`
    Char(char),
    /// `String`
    Str(&'a str),
}

impl fmt::Display for Scalar<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Bool(value) => write!(f, "{value}"),
            Scalar::Int(value) => write!(f, "{value}"),
            Scalar::Uint(value) => write!(f, "{value}"),
            Scalar::Float(value) => write!(f, "{value}"),
            Scalar::Char(value) => write!(f, "{value:?}"),
            Scalar::Str(value) => write!(f, "{value:?}"),
        }
    }
}

/// A destination slot that accepts scalars.
pub trait ScalarMut {
    /// Convert `value` into this slot's type and store it.
    ///
    /// Numeric kinds convert into each other with `as` semantics, `char`
    /// converts into `String`. Anything else is rejected: the slot is left
    /// untouched and `false` is returned.
    fn assign(&mut self, value: Scalar<'_>) -> bool;
}

macro_rules! impl_numeric {
    ($variant:ident => $($ty:ty),+) => {$(
        impl Reflect for $ty {
            crate::__reflect_boilerplate!();

            #[allow(clippy::cast_lossless, clippy::unnecessary_cast)]
            fn reflect_ref(&self) -> ReflectRef<'_> {
                ReflectRef::Scalar(Scalar::$variant(*self as _))
            }

            fn reflect_mut(&mut self) -> ReflectMut<'_> {
                ReflectMut::Scalar(self)
            }

            fn is_zero(&self) -> bool {
                *self == 0 as $ty
            }

            fn zeroed() -> Option<Self> {
                Some(0 as $ty)
            }
        }

        impl ScalarMut for $ty {
            #[allow(
                clippy::cast_possible_truncation,
                clippy::cast_possible_wrap,
                clippy::cast_precision_loss,
                clippy::cast_sign_loss,
                clippy::cast_lossless,
                clippy::unnecessary_cast
            )]
            fn assign(&mut self, value: Scalar<'_>) -> bool {
                *self = match value {
                    Scalar::Int(value) => value as $ty,
                    Scalar::Uint(value) => value as $ty,
                    Scalar::Float(value) => value as $ty,
                    Scalar::Bool(_) | Scalar::Char(_) | Scalar::Str(_) => return false,
                };
                true
            }
        }
    )+};
}

impl_numeric!(Int => i8, i16, i32, i64, isize);
impl_numeric!(Uint => u8, u16, u32, u64, usize);
impl_numeric!(Float => f32, f64);

impl Reflect for bool {
    crate::__reflect_boilerplate!();

    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::Scalar(Scalar::Bool(*self))
    }

    fn reflect_mut(&mut self) -> ReflectMut<'_> {
        ReflectMut::Scalar(self)
    }

    fn is_zero(&self) -> bool {
        !*self
    }

    fn zeroed() -> Option<Self> {
        Some(false)
    }
}

impl ScalarMut for bool {
    fn assign(&mut self, value: Scalar<'_>) -> bool {
        match value {
            Scalar::Bool(value) => {
                *self = value;
                true
            }
            _ => false,
        }
    }
}

impl Reflect for char {
    crate::__reflect_boilerplate!();

    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::Scalar(Scalar::Char(*self))
    }

    fn reflect_mut(&mut self) -> ReflectMut<'_> {
        ReflectMut::Scalar(self)
    }

    fn is_zero(&self) -> bool {
        *self == '\0'
    }

    fn zeroed() -> Option<Self> {
        Some('\0')
    }
}

impl ScalarMut for char {
    fn assign(&mut self, value: Scalar<'_>) -> bool {
        match value {
            Scalar::Char(value) => {
                *self = value;
                true
            }
            _ => false,
        }
    }
}

impl Reflect for String {
    crate::__reflect_boilerplate!();

    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::Scalar(Scalar::Str(self.as_str()))
    }

    fn reflect_mut(&mut self) -> ReflectMut<'_> {
        ReflectMut::Scalar(self)
    }

    fn is_zero(&self) -> bool {
        self.is_empty()
    }

    fn zeroed() -> Option<Self> {
        Some(String::new())
    }
}

impl ScalarMut for String {
    fn assign(&mut self, value: Scalar<'_>) -> bool {
        match value {
            Scalar::Str(value) => {
                self.clear();
                self.push_str(value);
                true
            }
            Scalar::Char(value) => {
                self.clear();
                self.push(value);
                true
            }
            _ => false,
        }
    }
}
