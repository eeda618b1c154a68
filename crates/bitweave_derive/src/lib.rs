mod enumeration;
mod record;
mod union;
mod utils;

use proc_macro::TokenStream;
use syn::parse_macro_input;

/// Implements `Fields`, `Pack` and `Unpack` for a struct, encoding its fields
/// in declaration order. `#[bitweave(skip)]` leaves a field out.
#[proc_macro_derive(Record, attributes(bitweave))]
pub fn record(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as syn::DeriveInput);
    record::derive(input).into()
}

/// Implements `Enumeration`, `Pack` and `Unpack` for a fieldless enum. The
/// ordinal is the declaration index.
#[proc_macro_derive(Enumeration, attributes(bitweave))]
pub fn enumeration(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as syn::DeriveInput);
    enumeration::derive(input).into()
}

/// Implements `Union`, `Pack` and `Unpack` for an enum whose variants carry
/// payloads. The tag is the declaration index.
#[proc_macro_derive(Union, attributes(bitweave))]
pub fn union(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as syn::DeriveInput);
    union::derive(input).into()
}
