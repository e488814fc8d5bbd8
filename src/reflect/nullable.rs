//! Values that may be absent.

use super::{Reflect, ReflectMut, ReflectRef};

/// A slot that either holds a value or is empty.
pub trait Nullable {
    /// The held value, if any.
    fn get(&self) -> Option<&dyn Reflect>;

    /// The held value, allocating a zeroed one first if the slot is empty.
    ///
    /// Returns `None` if the slot is empty and the value type cannot be
    /// constructed.
    fn get_or_insert_zeroed(&mut self) -> Option<&mut dyn Reflect>;

    /// Replace whatever the slot holds with a freshly zeroed value.
    ///
    /// Returns `None`, leaving the slot untouched, if the value type cannot
    /// be constructed.
    fn insert_zeroed(&mut self) -> Option<&mut dyn Reflect>;

    /// Empty the slot.
    fn clear(&mut self);

    /// A detached zeroed value of the slot's value type, leaving the slot
    /// untouched.
    fn zeroed_value(&self) -> Option<Box<dyn Reflect>>;
}

impl<T: Reflect> Nullable for Option<T> {
    fn get(&self) -> Option<&dyn Reflect> {
        self.as_ref().map(|value| value as &dyn Reflect)
    }

    fn get_or_insert_zeroed(&mut self) -> Option<&mut dyn Reflect> {
        if self.is_none() {
            *self = Some(T::zeroed()?);
        }
        self.as_mut().map(|value| value as &mut dyn Reflect)
    }

    fn insert_zeroed(&mut self) -> Option<&mut dyn Reflect> {
        let value = T::zeroed()?;
        Some(self.insert(value) as &mut dyn Reflect)
    }

    fn clear(&mut self) {
        *self = None;
    }

    fn zeroed_value(&self) -> Option<Box<dyn Reflect>> {
        T::zeroed().map(|value| Box::new(value) as Box<dyn Reflect>)
    }
}

impl<T: Reflect> Reflect for Option<T> {
    crate::__reflect_boilerplate!();

    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::Nullable(self)
    }

    fn reflect_mut(&mut self) -> ReflectMut<'_> {
        ReflectMut::Nullable(self)
    }

    fn is_zero(&self) -> bool {
        self.is_none()
    }

    fn zeroed() -> Option<Self> {
        Some(None)
    }
}
