//! Field matching.
//!
//! For every described destination field the source is searched for a
//! field of the same name, then for a getter of the same name. Separately,
//! every source field whose name matches a destination setter is fed to
//! that setter. Getters and setters of embedded members take part as if
//! declared on the enclosing struct.

use super::engine::{Engine, Outcome};
use super::resolve;
use crate::error::Result;
use crate::reflect::{
    FieldInfo, Reflect, ReflectMut, Struct, find_field, find_getter, flattened_fields,
};
use crate::utils::path::Segment;

impl Engine<'_> {
    /// Copy `src` into `dst` field by field.
    pub(crate) fn copy_struct(&mut self, dst: &mut dyn Struct, src: &dyn Struct) -> Result<()> {
        self.copy_fields(dst, src)?;
        self.apply_setters(dst, src, &[])
    }

    fn copy_fields(&mut self, dst: &mut dyn Struct, src: &dyn Struct) -> Result<()> {
        for (index, info) in dst.fields().iter().enumerate() {
            let Some(slot) = dst.field_mut(index) else {
                continue;
            };

            if info.is_embedded() {
                self.copy_embedded(slot, src)?;
                continue;
            }

            self.enter(Segment::Field(info.name()), |engine| {
                engine.copy_field(slot, info, src)
            })?;
        }
        Ok(())
    }

    /// Match the fields of an embedded member against the same source.
    ///
    /// A member behind an empty `Option` is filled in fresh storage and only
    /// kept if one of its fields was written.
    fn copy_embedded(&mut self, slot: &mut dyn Reflect, src: &dyn Struct) -> Result<()> {
        if resolve::source(&*slot).is_some() {
            return self.copy_member_fields(slot, src);
        }

        let Some(mut staged) = slot.fresh() else {
            return Ok(());
        };
        let written = self.stats.fields_copied;
        self.copy_member_fields(staged.as_reflect_mut(), src)?;
        if self.stats.fields_copied > written {
            slot.replace(staged);
        }
        Ok(())
    }

    fn copy_member_fields(&mut self, slot: &mut dyn Reflect, src: &dyn Struct) -> Result<()> {
        let Ok(member) = resolve::destination(slot) else {
            return Ok(());
        };
        match member.reflect_mut() {
            ReflectMut::Struct(member) => self.copy_fields(member, src),
            _ => Ok(()),
        }
    }

    fn copy_field(&mut self, slot: &mut dyn Reflect, info: &FieldInfo, src: &dyn Struct) -> Result<()> {
        let name = info.name();
        let mut settled = None;

        if let Some(value) = find_field(src, name) {
            settled = Some((self.assign(slot, value)?, value.type_name()));
        }

        let resolved = matches!(settled, Some((Outcome::Written | Outcome::Unchanged, _)));
        if let Some(owner) = find_getter(src, name).filter(|_| !resolved) {
            if let Some(value) = owner.call_getter(name) {
                self.stats.getters_invoked += 1;
                self.options.verbose(|| {
                    format!("Filled {} from getter {}::{name}()", self.path(), owner.type_name())
                });
                settled = Some((self.assign(slot, value.as_reflect())?, value.type_name()));
            }
        }

        if let Some((outcome, from)) = settled {
            self.settle(outcome, from, slot.type_name())?;
        }
        Ok(())
    }

    /// Convert a matched source value into a field slot.
    fn assign(&mut self, slot: &mut dyn Reflect, value: &dyn Reflect) -> Result<Outcome> {
        if self.options.ignore_empty && value.is_zero() {
            return Ok(Outcome::Unchanged);
        }
        self.convert(slot, value)
    }

    /// Feed source fields to the setters of `dst` and of its embedded
    /// members. A setter named in `shadowed` belongs to an enclosing struct
    /// and is not called.
    fn apply_setters(
        &mut self,
        dst: &mut dyn Struct,
        src: &dyn Struct,
        shadowed: &[&'static str],
    ) -> Result<()> {
        let setters = dst.setters();
        if !setters.is_empty() {
            for (info, value) in flattened_fields(src) {
                let name = info.name();
                if !setters.contains(&name)
                    || shadowed.contains(&name)
                    || (self.options.ignore_empty && value.is_zero())
                {
                    continue;
                }
                let Some(mut argument) = dst.setter_argument(name) else {
                    continue;
                };

                let outcome = self.enter(Segment::Setter(name), |engine| {
                    engine.convert(argument.as_reflect_mut(), value)
                })?;
                if outcome == Outcome::Written && dst.call_setter(name, argument) {
                    self.stats.setters_invoked += 1;
                    self.options
                        .verbose(|| format!("Called setter {}::{name}()", dst.type_name()));
                }
            }
        }

        let mut hidden = shadowed.to_vec();
        hidden.extend_from_slice(setters);
        for (index, info) in dst.fields().iter().enumerate() {
            if !info.is_embedded() {
                continue;
            }
            let Some(slot) = dst.field_mut(index) else {
                continue;
            };
            if resolve::source(&*slot).is_none() {
                continue;
            }
            let Ok(member) = resolve::destination(slot) else {
                continue;
            };
            if let ReflectMut::Struct(member) = member.reflect_mut() {
                self.apply_setters(member, src, &hidden)?;
            }
        }
        Ok(())
    }
}
