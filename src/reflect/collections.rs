//! Sequences and maps.

use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;

use super::{Reflect, ReflectMut, ReflectRef};

/// An ordered, growable sequence.
pub trait Seq {
    /// Number of elements.
    fn len(&self) -> usize;

    /// Whether the sequence has no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The element at `index`.
    fn get(&self, index: usize) -> Option<&dyn Reflect>;

    /// Mutable access to the element at `index`.
    fn get_mut(&mut self, index: usize) -> Option<&mut dyn Reflect>;

    /// Name of the element type.
    fn element_type_name(&self) -> &'static str;

    /// Remove every element.
    fn clear(&mut self);

    /// Append a zeroed element and return it, or `None` if the element
    /// type cannot be constructed.
    fn push_zeroed(&mut self) -> Option<&mut dyn Reflect>;
}

impl<T: Reflect> Seq for Vec<T> {
    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn get(&self, index: usize) -> Option<&dyn Reflect> {
        <[T]>::get(self, index).map(|value| value as &dyn Reflect)
    }

    fn get_mut(&mut self, index: usize) -> Option<&mut dyn Reflect> {
        <[T]>::get_mut(self, index).map(|value| value as &mut dyn Reflect)
    }

    fn element_type_name(&self) -> &'static str {
        std::any::type_name::<T>()
    }

    fn clear(&mut self) {
        Vec::clear(self);
    }

    fn push_zeroed(&mut self) -> Option<&mut dyn Reflect> {
        self.push(T::zeroed()?);
        self.last_mut().map(|value| value as &mut dyn Reflect)
    }
}

impl<T: Reflect> Reflect for Vec<T> {
    crate::__reflect_boilerplate!();

    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::Seq(self)
    }

    fn reflect_mut(&mut self) -> ReflectMut<'_> {
        ReflectMut::Seq(self)
    }

    fn is_zero(&self) -> bool {
        Vec::is_empty(self)
    }

    fn zeroed() -> Option<Self> {
        Some(Vec::new())
    }
}

/// A key/value map.
///
/// New entries are built in two steps: zeroed key and value storage is
/// obtained from [`Map::new_key`] and [`Map::new_value`], filled by the
/// caller, then handed back to [`Map::insert_boxed`].
pub trait Map {
    /// Number of entries.
    fn len(&self) -> usize;

    /// Whether the map has no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate over the entries.
    fn iter(&self) -> Box<dyn Iterator<Item = (&dyn Reflect, &dyn Reflect)> + '_>;

    /// Zeroed storage of the key type.
    fn new_key(&self) -> Option<Box<dyn Reflect>>;

    /// Zeroed storage of the value type.
    fn new_value(&self) -> Option<Box<dyn Reflect>>;

    /// Insert an entry built from [`Map::new_key`] and [`Map::new_value`].
    ///
    /// Returns `false` if either box holds a different type.
    fn insert_boxed(&mut self, key: Box<dyn Reflect>, value: Box<dyn Reflect>) -> bool;
}

fn zeroed_boxed<T: Reflect>() -> Option<Box<dyn Reflect>> {
    T::zeroed().map(|value| Box::new(value) as Box<dyn Reflect>)
}

fn unbox_entry<K: Reflect, V: Reflect>(
    key: Box<dyn Reflect>,
    value: Box<dyn Reflect>,
) -> Option<(K, V)> {
    let key = key.into_any().downcast::<K>().ok()?;
    let value = value.into_any().downcast::<V>().ok()?;
    Some((*key, *value))
}

macro_rules! impl_map {
    ($map:ident, $($bound:path),+) => {
        impl<K, V> Map for $map<K, V>
        where
            K: Reflect $(+ $bound)+,
            V: Reflect,
        {
            fn len(&self) -> usize {
                $map::len(self)
            }

            fn iter(&self) -> Box<dyn Iterator<Item = (&dyn Reflect, &dyn Reflect)> + '_> {
                Box::new(
                    $map::iter(self)
                        .map(|(key, value)| (key as &dyn Reflect, value as &dyn Reflect)),
                )
            }

            fn new_key(&self) -> Option<Box<dyn Reflect>> {
                zeroed_boxed::<K>()
            }

            fn new_value(&self) -> Option<Box<dyn Reflect>> {
                zeroed_boxed::<V>()
            }

            fn insert_boxed(&mut self, key: Box<dyn Reflect>, value: Box<dyn Reflect>) -> bool {
                match unbox_entry::<K, V>(key, value) {
                    Some((key, value)) => {
                        self.insert(key, value);
                        true
                    }
                    None => false,
                }
            }
        }

        impl<K, V> Reflect for $map<K, V>
        where
            K: Reflect $(+ $bound)+,
            V: Reflect,
        {
            crate::__reflect_boilerplate!();

            fn reflect_ref(&self) -> ReflectRef<'_> {
                ReflectRef::Map(self)
            }

            fn reflect_mut(&mut self) -> ReflectMut<'_> {
                ReflectMut::Map(self)
            }

            fn is_zero(&self) -> bool {
                $map::is_empty(self)
            }

            fn zeroed() -> Option<Self> {
                Some($map::new())
            }
        }
    };
}

impl_map!(HashMap, Eq, Hash);
impl_map!(BTreeMap, Ord);
