//! Parsing of `#[reflect(..)]` attributes.

use syn::meta::ParseNestedMeta;
use syn::{Attribute, Ident, LitStr};

/// Attributes on the deriving struct.
#[derive(Debug, Default)]
pub struct ContainerAttrs {
    pub getters: Vec<Ident>,
    pub setters: Vec<Ident>,
}

impl ContainerAttrs {
    pub fn parse(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut parsed = Self::default();
        for attr in attrs.iter().filter(|attr| attr.path().is_ident("reflect")) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("getters") {
                    parsed.getters.extend(method_names(&meta)?);
                    Ok(())
                } else if meta.path.is_ident("setters") {
                    parsed.setters.extend(method_names(&meta)?);
                    Ok(())
                } else {
                    Err(meta.error("expected `getters(..)` or `setters(..)`"))
                }
            })?;
        }
        Ok(parsed)
    }
}

/// Attributes on one field.
#[derive(Debug, Default)]
pub struct FieldAttrs {
    pub embed: bool,
    pub skip: bool,
    pub rename: Option<LitStr>,
}

impl FieldAttrs {
    pub fn parse(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut parsed = Self::default();
        for attr in attrs.iter().filter(|attr| attr.path().is_ident("reflect")) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("embed") {
                    parsed.embed = true;
                    Ok(())
                } else if meta.path.is_ident("skip") {
                    parsed.skip = true;
                    Ok(())
                } else if meta.path.is_ident("rename") {
                    parsed.rename = Some(meta.value()?.parse()?);
                    Ok(())
                } else {
                    Err(meta.error("expected `embed`, `skip` or `rename = \"..\"`"))
                }
            })?;
        }
        Ok(parsed)
    }
}

fn method_names(meta: &ParseNestedMeta<'_>) -> syn::Result<Vec<Ident>> {
    let mut names = Vec::new();
    meta.parse_nested_meta(|inner| match inner.path.get_ident() {
        Some(ident) => {
            names.push(ident.clone());
            Ok(())
        }
        None => Err(inner.error("expected a method name")),
    })?;
    Ok(names)
}
