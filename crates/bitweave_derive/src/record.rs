use darling::{ast, FromDeriveInput};
use proc_macro2::TokenStream;
use quote::quote;
use syn::Index;

use crate::utils::{
    compile_error, crate_path, view_lifetime, with_field_bounds, RecordInput, MAX_FIELDS,
};

pub fn derive(input: syn::DeriveInput) -> TokenStream {
    let input = match RecordInput::from_derive_input(&input) {
        Ok(input) => input,
        Err(err) => return err.write_errors(),
    };

    let name = &input.ident;
    let krate = crate_path(&input.krate);

    let fields = match input.data {
        ast::Data::Struct(fields) => fields,
        ast::Data::Enum(_) => {
            return compile_error(name.span(), "Record can only be derived for structs");
        }
    };

    // Skipped fields keep their position for tuple-struct member indices.
    let serialized = fields
        .fields
        .iter()
        .enumerate()
        .filter(|(_, field)| !field.skip)
        .collect::<Vec<_>>();

    if serialized.len() > MAX_FIELDS {
        let message = format!(
            "Record `{name}` has {} serialized fields, at most {MAX_FIELDS} are supported; group the rest into a nested record",
            serialized.len()
        );
        return compile_error(name.span(), &message);
    }

    let members = serialized
        .iter()
        .map(|(index, field)| match &field.ident {
            Some(ident) => quote! { #ident },
            None => {
                let index = Index::from(*index);
                quote! { #index }
            }
        })
        .collect::<Vec<_>>();

    let lifetime = view_lifetime();
    let view_types = serialized.iter().map(|(_, field)| {
        let ty = &field.ty;
        quote! { &#lifetime #ty }
    });
    let view_mut_types = serialized.iter().map(|(_, field)| {
        let ty = &field.ty;
        quote! { &#lifetime mut #ty }
    });

    let field_types = serialized.iter().map(|(_, field)| &field.ty);
    let generics = with_field_bounds(
        &input.generics,
        field_types,
        quote! { #krate::Pack + #krate::Unpack },
    );
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    quote! {
        impl #impl_generics #krate::Fields for #name #ty_generics #where_clause {
            type View<#lifetime> = (#(#view_types,)*) where Self: #lifetime;
            type ViewMut<#lifetime> = (#(#view_mut_types,)*) where Self: #lifetime;

            #[inline]
            fn field_view(&self) -> Self::View<'_> {
                (#(&self.#members,)*)
            }

            #[inline]
            fn field_view_mut(&mut self) -> Self::ViewMut<'_> {
                (#(&mut self.#members,)*)
            }
        }

        impl #impl_generics #krate::Pack for #name #ty_generics #where_clause {
            #[inline]
            fn bit_length(&self) -> usize {
                #krate::record::bit_length(self)
            }

            #[inline]
            fn pack(&self, writer: &mut #krate::BitWriter) -> ::core::result::Result<(), #krate::EncodeError> {
                #krate::record::pack(self, writer)
            }

            fn write_text(&self, out: &mut ::std::string::String) {
                #krate::record::write_text(self, out);
            }
        }

        impl #impl_generics #krate::Unpack for #name #ty_generics #where_clause {
            #[inline]
            fn unpack_in_place(&mut self, reader: &mut #krate::BitReader<'_>) -> ::core::result::Result<(), #krate::DecodeError> {
                #krate::record::unpack_in_place(self, reader)
            }
        }
    }
}
