use darling::{ast, FromDeriveInput};
use proc_macro2::TokenStream;
use quote::quote;

use crate::utils::{compile_error, crate_path, EnumInput};

pub fn derive(input: syn::DeriveInput) -> TokenStream {
    let input = match EnumInput::from_derive_input(&input) {
        Ok(input) => input,
        Err(err) => return err.write_errors(),
    };

    let name = &input.ident;
    let krate = crate_path(&input.krate);

    if !input.generics.params.is_empty() {
        return compile_error(name.span(), "Enumeration cannot be derived for generic enums");
    }

    let variants = match input.data {
        ast::Data::Enum(variants) => variants,
        ast::Data::Struct(_) => {
            return compile_error(name.span(), "Enumeration can only be derived for enums");
        }
    };

    if variants.is_empty() {
        return compile_error(name.span(), "Enumeration needs at least one variant");
    }

    if let Some(variant) = variants.iter().find(|variant| variant.fields.style != ast::Style::Unit) {
        return compile_error(
            variant.ident.span(),
            "Enumeration variants cannot carry data; derive Union instead",
        );
    }

    let count = variants.len() as u32;
    let idents = variants.iter().map(|variant| &variant.ident).collect::<Vec<_>>();
    let ordinals = (0..count).collect::<Vec<_>>();

    quote! {
        impl #krate::Enumeration for #name {
            const COUNT: u32 = #count;

            #[inline]
            fn ordinal(&self) -> u32 {
                match self {
                    #(Self::#idents => #ordinals,)*
                }
            }

            #[inline]
            fn from_ordinal(ordinal: u32) -> ::core::option::Option<Self> {
                match ordinal {
                    #(#ordinals => ::core::option::Option::Some(Self::#idents),)*
                    _ => ::core::option::Option::None,
                }
            }
        }

        #krate::enumeration_codec!(#name);
    }
}
