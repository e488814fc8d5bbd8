//! Implementation of the `#[derive(Reflect)]` macro.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{ToTokens, quote};
use syn::ext::IdentExt;
use syn::punctuated::Punctuated;
use syn::token::Comma;
use syn::{
    Data, DeriveInput, Field, Fields, GenericParam, Ident, Type, Visibility, parse_macro_input,
    parse_quote,
};

use crate::attrs::{ContainerAttrs, FieldAttrs};

/// Main implementation of the Reflect derive macro.
pub fn derive_reflect_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// A field that takes part in matching.
struct Described {
    ident: Ident,
    name: String,
    declared_type: String,
    embed: bool,
}

fn expand(mut input: DeriveInput) -> syn::Result<TokenStream2> {
    let fields = named_fields(&input)?;
    if let Some(lifetime) = input.generics.lifetimes().next() {
        return Err(syn::Error::new_spanned(
            lifetime,
            "Reflect cannot be derived for types with lifetime parameters",
        ));
    }

    let container = ContainerAttrs::parse(&input.attrs)?;
    let described = describe_fields(fields)?;

    for param in &mut input.generics.params {
        if let GenericParam::Type(param) = param {
            param.bounds.push(parse_quote!(::structcopy::Reflect));
        }
    }
    input
        .generics
        .make_where_clause()
        .predicates
        .push(parse_quote!(Self: ::core::default::Default));

    let name = &input.ident;
    let (impl_generics, type_generics, where_clause) = input.generics.split_for_impl();

    let reflect_impl = generate_reflect(&described);
    let struct_impl = generate_struct(&described, &container);

    Ok(quote! {
        impl #impl_generics ::structcopy::Reflect for #name #type_generics #where_clause {
            #reflect_impl
        }

        impl #impl_generics ::structcopy::Struct for #name #type_generics #where_clause {
            #struct_impl
        }
    })
}

fn named_fields(input: &DeriveInput) -> syn::Result<&Punctuated<Field, Comma>> {
    match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => Ok(&named.named),
            Fields::Unnamed(_) => Err(syn::Error::new_spanned(
                &input.ident,
                "Reflect can only be derived for structs with named fields, not tuple structs.",
            )),
            Fields::Unit => Err(syn::Error::new_spanned(
                &input.ident,
                "Reflect cannot be derived for unit structs (structs with no fields).",
            )),
        },
        Data::Enum(_) => Err(syn::Error::new_spanned(
            &input.ident,
            "Reflect can only be derived for structs, not enums.",
        )),
        Data::Union(_) => Err(syn::Error::new_spanned(
            &input.ident,
            "Reflect cannot be derived for unions.",
        )),
    }
}

fn describe_fields(fields: &Punctuated<Field, Comma>) -> syn::Result<Vec<Described>> {
    let mut described: Vec<Described> = Vec::new();
    for field in fields {
        let attrs = FieldAttrs::parse(&field.attrs)?;
        if attrs.skip || matches!(field.vis, Visibility::Inherited) {
            continue;
        }
        let Some(ident) = field.ident.clone() else {
            continue;
        };

        let name = attrs
            .rename
            .as_ref()
            .map_or_else(|| ident.unraw().to_string(), syn::LitStr::value);
        if !attrs.embed && described.iter().any(|other| !other.embed && other.name == name) {
            return Err(syn::Error::new_spanned(
                &ident,
                format!("duplicate field name `{name}`"),
            ));
        }

        described.push(Described {
            ident,
            name,
            declared_type: type_text(&field.ty),
            embed: attrs.embed,
        });
    }
    Ok(described)
}

fn generate_reflect(described: &[Described]) -> TokenStream2 {
    let idents: Vec<&Ident> = described.iter().map(|field| &field.ident).collect();

    quote! {
        ::structcopy::__reflect_boilerplate!();

        fn reflect_ref(&self) -> ::structcopy::ReflectRef<'_> {
            ::structcopy::ReflectRef::Struct(self)
        }

        fn reflect_mut(&mut self) -> ::structcopy::ReflectMut<'_> {
            ::structcopy::ReflectMut::Struct(self)
        }

        fn is_zero(&self) -> bool {
            true #(&& ::structcopy::Reflect::is_zero(&self.#idents))*
        }

        fn zeroed() -> ::core::option::Option<Self> {
            ::core::option::Option::Some(<Self as ::core::default::Default>::default())
        }
    }
}

fn generate_struct(described: &[Described], container: &ContainerAttrs) -> TokenStream2 {
    let infos = described.iter().map(|field| {
        let name = &field.name;
        let declared_type = &field.declared_type;
        if field.embed {
            quote!(::structcopy::FieldInfo::embedded(#name, #declared_type))
        } else {
            quote!(::structcopy::FieldInfo::new(#name, #declared_type))
        }
    });
    let indices: Vec<usize> = (0..described.len()).collect();
    let idents: Vec<&Ident> = described.iter().map(|field| &field.ident).collect();

    let getters = generate_getters(&container.getters);
    let setters = generate_setters(&container.setters);

    quote! {
        fn fields(&self) -> &'static [::structcopy::FieldInfo] {
            const FIELDS: &[::structcopy::FieldInfo] = &[#(#infos),*];
            FIELDS
        }

        fn field(&self, index: usize) -> ::core::option::Option<&dyn ::structcopy::Reflect> {
            match index {
                #(#indices => ::core::option::Option::Some(&self.#idents as &dyn ::structcopy::Reflect),)*
                _ => ::core::option::Option::None,
            }
        }

        fn field_mut(
            &mut self,
            index: usize,
        ) -> ::core::option::Option<&mut dyn ::structcopy::Reflect> {
            match index {
                #(#indices => ::core::option::Option::Some(&mut self.#idents as &mut dyn ::structcopy::Reflect),)*
                _ => ::core::option::Option::None,
            }
        }

        #getters
        #setters
    }
}

fn generate_getters(getters: &[Ident]) -> TokenStream2 {
    if getters.is_empty() {
        return TokenStream2::new();
    }
    let names: Vec<String> = getters.iter().map(|ident| ident.unraw().to_string()).collect();

    quote! {
        fn getters(&self) -> &'static [&'static str] {
            &[#(#names),*]
        }

        fn call_getter(
            &self,
            name: &str,
        ) -> ::core::option::Option<::std::boxed::Box<dyn ::structcopy::Reflect>> {
            match name {
                #(#names => ::core::option::Option::Some(
                    ::std::boxed::Box::new(Self::#getters(self)) as ::std::boxed::Box<dyn ::structcopy::Reflect>
                ),)*
                _ => ::core::option::Option::None,
            }
        }
    }
}

fn generate_setters(setters: &[Ident]) -> TokenStream2 {
    if setters.is_empty() {
        return TokenStream2::new();
    }
    let names: Vec<String> = setters.iter().map(|ident| ident.unraw().to_string()).collect();

    quote! {
        fn setters(&self) -> &'static [&'static str] {
            &[#(#names),*]
        }

        fn setter_argument(
            &self,
            name: &str,
        ) -> ::core::option::Option<::std::boxed::Box<dyn ::structcopy::Reflect>> {
            match name {
                #(#names => ::structcopy::__private::setter_argument::<Self, _>(Self::#setters),)*
                _ => ::core::option::Option::None,
            }
        }

        fn call_setter(
            &mut self,
            name: &str,
            argument: ::std::boxed::Box<dyn ::structcopy::Reflect>,
        ) -> bool {
            match name {
                #(#names => ::structcopy::__private::call_setter::<Self, _>(self, Self::#setters, argument),)*
                _ => false,
            }
        }
    }
}

/// The type as written, with token spacing collapsed: `Option<Box<i32>>`.
fn type_text(ty: &Type) -> String {
    let raw = ty.to_token_stream().to_string();
    let chars: Vec<char> = raw.chars().collect();
    let mut text = String::with_capacity(raw.len());
    for (index, &c) in chars.iter().enumerate() {
        if c != ' ' {
            text.push(c);
            continue;
        }
        let prev = text.chars().last();
        let next = chars.get(index + 1).copied();
        let keep = match (prev, next) {
            (Some(','), _) => true,
            (Some(prev), Some(next)) => is_word(prev) && is_word(next),
            _ => false,
        };
        if keep {
            text.push(' ');
        }
    }
    text
}

fn is_word(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
