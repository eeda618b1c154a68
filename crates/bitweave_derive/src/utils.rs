use darling::{ast, util::Ignored, FromDeriveInput, FromField, FromVariant};
use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::{parse_quote, Generics, Ident, Path, Type};

/// Must match `bitweave::container::MAX_TUPLE_ARITY`.
pub const MAX_FIELDS: usize = 16;

#[derive(Debug, FromDeriveInput)]
#[darling(attributes(bitweave), supports(struct_any))]
pub struct RecordInput {
    pub ident: Ident,
    pub generics: Generics,
    pub data: ast::Data<Ignored, RecordField>,
    #[darling(rename = "crate")]
    pub krate: Option<Path>,
}

#[derive(Debug, FromField)]
#[darling(attributes(bitweave))]
pub struct RecordField {
    pub ident: Option<Ident>,
    pub ty: Type,
    #[darling(default)]
    pub skip: bool,
}

#[derive(Debug, FromDeriveInput)]
#[darling(attributes(bitweave), supports(enum_any))]
pub struct EnumInput {
    pub ident: Ident,
    pub generics: Generics,
    pub data: ast::Data<EnumVariant, Ignored>,
    #[darling(rename = "crate")]
    pub krate: Option<Path>,
}

#[derive(Debug, FromVariant)]
#[darling(attributes(bitweave))]
pub struct EnumVariant {
    pub ident: Ident,
    pub fields: ast::Fields<VariantField>,
}

#[derive(Debug, FromField)]
#[darling(attributes(bitweave))]
pub struct VariantField {
    pub ident: Option<Ident>,
    pub ty: Type,
}

pub fn crate_path(krate: &Option<Path>) -> Path {
    krate.clone().unwrap_or_else(|| parse_quote!(::bitweave))
}

/// Adds `bounds` to every type parameter of `generics`.
pub fn with_bounds(generics: &Generics, bounds: TokenStream) -> Generics {
    let mut generics = generics.clone();
    let params = generics
        .type_params()
        .map(|param| param.ident.clone())
        .collect::<Vec<_>>();

    let where_clause = generics.make_where_clause();
    for param in params {
        where_clause
            .predicates
            .push(parse_quote!(#param: #bounds));
    }

    generics
}

/// Adds `bounds` to the type of every serialized field, so a field such as
/// `Vec<T>` picks up whatever its own codec requires of `T`. Non-generic
/// types are left alone.
pub fn with_field_bounds<'a>(
    generics: &Generics,
    types: impl IntoIterator<Item = &'a Type>,
    bounds: TokenStream,
) -> Generics {
    let mut generics = generics.clone();
    if generics.type_params().next().is_none() {
        return generics;
    }

    let where_clause = generics.make_where_clause();
    for ty in types {
        where_clause.predicates.push(parse_quote!(#ty: #bounds));
    }

    generics
}

pub fn binding(index: usize) -> Ident {
    Ident::new(&format!("__bitweave_field{index}"), Span::call_site())
}

pub fn compile_error(span: Span, message: &str) -> TokenStream {
    syn::Error::new(span, message).to_compile_error()
}

/// Lifetime used by the generated field views.
pub fn view_lifetime() -> TokenStream {
    quote! { '__bitweave }
}
