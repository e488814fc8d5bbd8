//! Struct descriptors, field lookup and method bridging.

use super::{Reflect, ReflectRef};

/// Descriptor of one public field of a reflected struct.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldInfo {
    name: &'static str,
    declared_type: &'static str,
    embedded: bool,
}

impl FieldInfo {
    /// Describe a regular field.
    pub const fn new(name: &'static str, declared_type: &'static str) -> Self {
        Self {
            name,
            declared_type,
            embedded: false,
        }
    }

    /// Describe an embedded field whose own fields are matched as if they
    /// were declared on the enclosing struct.
    pub const fn embedded(name: &'static str, declared_type: &'static str) -> Self {
        Self {
            name,
            declared_type,
            embedded: true,
        }
    }

    /// Name used for matching.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// The field's type as written in the struct declaration.
    pub const fn declared_type(&self) -> &'static str {
        self.declared_type
    }

    /// Whether the field is flattened into the enclosing struct.
    pub const fn is_embedded(&self) -> bool {
        self.embedded
    }
}

/// A struct with named, individually addressable fields.
///
/// Besides fields, a struct may register getters (zero-argument methods
/// whose result can feed a destination field of the same name) and setters
/// (one-argument methods fed from a source field of the same name).
/// `#[derive(Reflect)]` generates this implementation.
pub trait Struct: Reflect {
    /// Descriptors of the public fields, in declaration order.
    fn fields(&self) -> &'static [FieldInfo];

    /// The field at `index` in [`Struct::fields`].
    fn field(&self, index: usize) -> Option<&dyn Reflect>;

    /// Mutable access to the field at `index` in [`Struct::fields`].
    fn field_mut(&mut self, index: usize) -> Option<&mut dyn Reflect>;

    /// Names of the registered getters.
    fn getters(&self) -> &'static [&'static str] {
        &[]
    }

    /// Invoke the getter `name` and return its result.
    fn call_getter(&self, _name: &str) -> Option<Box<dyn Reflect>> {
        None
    }

    /// Names of the registered setters.
    fn setters(&self) -> &'static [&'static str] {
        &[]
    }

    /// A zeroed value of the parameter type of setter `name`.
    fn setter_argument(&self, _name: &str) -> Option<Box<dyn Reflect>> {
        None
    }

    /// Invoke setter `name` with `argument`, which must have been produced
    /// by [`Struct::setter_argument`]. Returns whether the setter ran.
    fn call_setter(&mut self, _name: &str, _argument: Box<dyn Reflect>) -> bool {
        false
    }
}

fn as_struct(value: &dyn Reflect) -> Option<&dyn Struct> {
    match value.reflect_ref() {
        ReflectRef::Struct(inner) => Some(inner),
        ReflectRef::Nullable(inner) => inner.get().and_then(as_struct),
        _ => None,
    }
}

/// Find a field by name.
///
/// Direct fields win; otherwise embedded fields are searched in declaration
/// order, recursively.
pub fn find_field<'a>(value: &'a dyn Struct, name: &str) -> Option<&'a dyn Reflect> {
    let fields = value.fields();
    if let Some(index) = fields
        .iter()
        .position(|info| !info.is_embedded() && info.name() == name)
    {
        return value.field(index);
    }

    fields
        .iter()
        .enumerate()
        .filter(|(_, info)| info.is_embedded())
        .find_map(|(index, _)| {
            let embedded = as_struct(value.field(index)?)?;
            find_field(embedded, name)
        })
}

/// The struct registering getter `name`: `value` itself, or else the first
/// embedded member that does, searched like [`find_field`].
pub fn find_getter<'a>(value: &'a dyn Struct, name: &str) -> Option<&'a dyn Struct> {
    if value.getters().contains(&name) {
        return Some(value);
    }

    value
        .fields()
        .iter()
        .enumerate()
        .filter(|(_, info)| info.is_embedded())
        .find_map(|(index, _)| find_getter(as_struct(value.field(index)?)?, name))
}

/// All fields of `value` with embedded structs flattened into their fields.
pub fn flattened_fields(value: &dyn Struct) -> Vec<(&'static FieldInfo, &dyn Reflect)> {
    let mut out = Vec::new();
    for (index, info) in value.fields().iter().enumerate() {
        let Some(field) = value.field(index) else {
            continue;
        };
        if info.is_embedded() {
            if let Some(embedded) = as_struct(field) {
                out.extend(flattened_fields(embedded));
            }
        } else {
            out.push((info, field));
        }
    }
    out
}

/// Support code for `#[derive(Reflect)]`. Not public API.
#[doc(hidden)]
pub mod __private {
    use crate::Reflect;

    /// Zeroed argument for a setter, typed from the method signature.
    pub fn setter_argument<S, T: Reflect>(_method: fn(&mut S, T)) -> Option<Box<dyn Reflect>> {
        T::zeroed().map(|value| Box::new(value) as Box<dyn Reflect>)
    }

    /// Invoke a setter with an argument built by [`setter_argument`].
    pub fn call_setter<S, T: Reflect>(
        target: &mut S,
        method: fn(&mut S, T),
        argument: Box<dyn Reflect>,
    ) -> bool {
        match argument.into_any().downcast::<T>() {
            Ok(value) => {
                method(target, *value);
                true
            }
            Err(_) => false,
        }
    }
}
