use darling::{ast, FromDeriveInput};
use proc_macro2::TokenStream;
use quote::quote;

use crate::utils::{binding, compile_error, crate_path, with_bounds, EnumInput, EnumVariant, MAX_FIELDS};

/// Match pattern binding every field of `variant` to `__bitweave_fieldN`.
fn pattern(variant: &EnumVariant) -> TokenStream {
    let ident = &variant.ident;
    let bindings = (0..variant.fields.fields.len()).map(binding).collect::<Vec<_>>();

    match variant.fields.style {
        ast::Style::Unit => quote! { Self::#ident },
        ast::Style::Tuple => quote! { Self::#ident(#(#bindings),*) },
        ast::Style::Struct => {
            let names = variant.fields.fields.iter().map(|field| &field.ident);
            quote! { Self::#ident { #(#names: #bindings),* } }
        }
    }
}

/// The payload as a single `Pack` value: the lone field itself, or a tuple
/// of all fields.
fn payload(variant: &EnumVariant) -> TokenStream {
    let bindings = (0..variant.fields.fields.len()).map(binding).collect::<Vec<_>>();

    if bindings.len() == 1 {
        let field = &bindings[0];
        quote! { #field }
    } else {
        quote! { (#(#bindings,)*) }
    }
}

pub fn derive(input: syn::DeriveInput) -> TokenStream {
    let input = match EnumInput::from_derive_input(&input) {
        Ok(input) => input,
        Err(err) => return err.write_errors(),
    };

    let name = &input.ident;
    let krate = crate_path(&input.krate);

    let variants = match &input.data {
        ast::Data::Enum(variants) => variants,
        ast::Data::Struct(_) => {
            return compile_error(name.span(), "Union can only be derived for enums");
        }
    };

    if variants.is_empty() {
        return compile_error(name.span(), "Union needs at least one alternative");
    }

    if let Some(variant) = variants.iter().find(|variant| variant.fields.fields.len() > MAX_FIELDS) {
        let message = format!("Alternative `{}` carries more than {MAX_FIELDS} fields", variant.ident);
        return compile_error(variant.ident.span(), &message);
    }

    let alternatives = variants.len() as u32;
    let tags = (0..alternatives).collect::<Vec<_>>();
    let patterns = variants.iter().map(pattern).collect::<Vec<_>>();
    let payloads = variants.iter().map(payload).collect::<Vec<_>>();
    let idents = variants.iter().map(|variant| &variant.ident).collect::<Vec<_>>();

    let decode_arms = variants.iter().map(|variant| {
        let bindings = (0..variant.fields.fields.len()).map(binding).collect::<Vec<_>>();
        let types = variant.fields.fields.iter().map(|field| &field.ty);
        let construct = pattern(variant);

        quote! {
            #(let mut #bindings: #types = ::core::default::Default::default();)*
            #krate::Unpack::unpack_in_place(&mut (#(&mut #bindings,)*), reader)?;
            *self = #construct;
        }
    });

    let generics = with_bounds(
        &input.generics,
        quote! { #krate::Pack + #krate::Unpack + ::core::default::Default },
    );
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    quote! {
        impl #impl_generics #krate::Union for #name #ty_generics #where_clause {
            const ALTERNATIVES: u32 = #alternatives;

            #[inline]
            fn tag(&self) -> u32 {
                match self {
                    #(Self::#idents { .. } => #tags,)*
                }
            }
        }

        impl #impl_generics #krate::Pack for #name #ty_generics #where_clause {
            fn bit_length(&self) -> usize {
                #krate::union::tag_bit_length::<Self>() + match self {
                    #(#patterns => #krate::Pack::bit_length(&#payloads),)*
                }
            }

            fn pack(&self, writer: &mut #krate::BitWriter) -> ::core::result::Result<(), #krate::EncodeError> {
                #krate::union::pack_tag(self, writer)?;
                match self {
                    #(#patterns => #krate::Pack::pack(&#payloads, writer),)*
                }
            }

            fn write_text(&self, out: &mut ::std::string::String) {
                match self {
                    #(#patterns => #krate::union::write_text(self, &#payloads, out),)*
                }
            }
        }

        impl #impl_generics #krate::Unpack for #name #ty_generics #where_clause {
            fn unpack_in_place(&mut self, reader: &mut #krate::BitReader<'_>) -> ::core::result::Result<(), #krate::DecodeError> {
                // decode into locals so a failed payload leaves `self` untouched
                match #krate::union::unpack_tag::<Self>(reader)? {
                    #(#tags => { #decode_arms })*
                    tag => {
                        return ::core::result::Result::Err(#krate::DecodeError::CorruptTag {
                            tag,
                            alternatives: #alternatives,
                        });
                    }
                }

                ::core::result::Result::Ok(())
            }
        }
    }
}
