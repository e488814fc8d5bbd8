//! Value conversion.
//!
//! Converts one resolved source value into one destination slot. Composite
//! destinations (structs, sequences, maps, `Option`s) are built in fresh
//! zeroed storage obtained from [`Reflect::fresh`] and swapped in with
//! [`Reflect::replace`] only once the whole value converted, so a mismatch
//! deep inside a collection never leaves the destination half written.

use super::engine::{Engine, Outcome};
use crate::error::Result;
use crate::reflect::{Kind, Reflect, ReflectMut, ReflectRef};
use crate::utils::path::Segment;

impl Engine<'_> {
    /// Convert `src` into `dst`.
    pub(crate) fn convert(&mut self, dst: &mut dyn Reflect, src: &dyn Reflect) -> Result<Outcome> {
        let kind = dst.reflect_ref().kind();

        // Non-nullable destination: look through the source's `Option`.
        if kind != Kind::Nullable {
            if let ReflectRef::Nullable(inner) = src.reflect_ref() {
                return match inner.get() {
                    Some(inner) => self.convert(dst, inner),
                    None => Ok(Outcome::Unchanged),
                };
            }
        }

        match kind {
            Kind::Scalar | Kind::Opaque => Ok(assign_leaf(dst, src)),
            Kind::Struct => self.convert_struct(dst, src),
            Kind::Seq => self.stage(dst, |engine, staged| engine.fill_seq(staged, src)),
            Kind::Map => self.stage(dst, |engine, staged| engine.fill_map(staged, src)),
            Kind::Nullable => self.convert_into_nullable(dst, src),
        }
    }

    /// Build a replacement for `dst` in fresh storage and swap it in if
    /// `fill` wrote it.
    fn stage(
        &mut self,
        dst: &mut dyn Reflect,
        fill: impl FnOnce(&mut Self, &mut dyn Reflect) -> Result<Outcome>,
    ) -> Result<Outcome> {
        let Some(mut staged) = dst.fresh() else {
            return Ok(Outcome::Mismatch);
        };

        match fill(self, staged.as_reflect_mut())? {
            Outcome::Written if dst.replace(staged) => Ok(Outcome::Written),
            Outcome::Written => Ok(Outcome::Mismatch),
            outcome => Ok(outcome),
        }
    }

    fn convert_struct(&mut self, dst: &mut dyn Reflect, src: &dyn Reflect) -> Result<Outcome> {
        let ReflectRef::Struct(source) = src.reflect_ref() else {
            return Ok(Outcome::Mismatch);
        };

        self.stage(dst, |engine, staged| match staged.reflect_mut() {
            ReflectMut::Struct(target) => {
                engine.copy_struct(target, source)?;
                Ok(Outcome::Written)
            }
            _ => Ok(Outcome::Mismatch),
        })
    }

    fn fill_seq(&mut self, staged: &mut dyn Reflect, src: &dyn Reflect) -> Result<Outcome> {
        let ReflectRef::Seq(source) = src.reflect_ref() else {
            return Ok(Outcome::Mismatch);
        };
        let ReflectMut::Seq(target) = staged.reflect_mut() else {
            return Ok(Outcome::Mismatch);
        };

        for index in 0..source.len() {
            let Some(item) = source.get(index) else {
                continue;
            };
            let outcome = self.enter(Segment::Index(index), |engine| {
                match target.push_zeroed() {
                    Some(slot) => engine.convert(slot, item),
                    None => Ok(Outcome::Mismatch),
                }
            })?;
            if outcome == Outcome::Mismatch {
                return Ok(Outcome::Mismatch);
            }
        }
        Ok(Outcome::Written)
    }

    fn fill_map(&mut self, staged: &mut dyn Reflect, src: &dyn Reflect) -> Result<Outcome> {
        let ReflectRef::Map(source) = src.reflect_ref() else {
            return Ok(Outcome::Mismatch);
        };
        let ReflectMut::Map(target) = staged.reflect_mut() else {
            return Ok(Outcome::Mismatch);
        };

        for (key, value) in source.iter() {
            let outcome = self.enter(Segment::Key(describe_key(key)), |engine| {
                let (Some(mut new_key), Some(mut new_value)) = (target.new_key(), target.new_value())
                else {
                    return Ok(Outcome::Mismatch);
                };
                if engine.convert(new_key.as_reflect_mut(), key)? == Outcome::Mismatch
                    || engine.convert(new_value.as_reflect_mut(), value)? == Outcome::Mismatch
                {
                    return Ok(Outcome::Mismatch);
                }
                Ok(if target.insert_boxed(new_key, new_value) {
                    Outcome::Written
                } else {
                    Outcome::Mismatch
                })
            })?;
            if outcome == Outcome::Mismatch {
                return Ok(Outcome::Mismatch);
            }
        }
        Ok(Outcome::Written)
    }

    fn convert_into_nullable(
        &mut self,
        dst: &mut dyn Reflect,
        src: &dyn Reflect,
    ) -> Result<Outcome> {
        let source = match src.reflect_ref() {
            ReflectRef::Nullable(inner) => match inner.get() {
                Some(inner) => inner,
                None => {
                    if let ReflectMut::Nullable(slot) = dst.reflect_mut() {
                        slot.clear();
                    }
                    return Ok(Outcome::Written);
                }
            },
            // Never produce `Some` of an empty value.
            _ if src.is_zero() => return Ok(Outcome::Unchanged),
            _ => src,
        };

        self.stage(dst, |engine, staged| {
            let ReflectMut::Nullable(slot) = staged.reflect_mut() else {
                return Ok(Outcome::Mismatch);
            };
            match slot.insert_zeroed() {
                Some(inner) => engine.convert(inner, source),
                None => Ok(Outcome::Mismatch),
            }
        })
    }
}

fn assign_leaf(dst: &mut dyn Reflect, src: &dyn Reflect) -> Outcome {
    let written = match dst.reflect_mut() {
        ReflectMut::Scalar(slot) => match src.reflect_ref() {
            ReflectRef::Scalar(value) => slot.assign(value),
            _ => false,
        },
        ReflectMut::Opaque(slot) => slot.assign(src),
        _ => false,
    };
    if written {
        Outcome::Written
    } else {
        Outcome::Mismatch
    }
}

fn describe_key(key: &dyn Reflect) -> String {
    match key.reflect_ref() {
        ReflectRef::Scalar(scalar) => scalar.to_string(),
        _ => format!("<{}>", key.type_name()),
    }
}
