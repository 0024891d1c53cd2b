use crate::attrs::FieldInfo;
use proc_macro2::TokenStream;
use quote::quote;

pub mod enum_impl;
pub mod struct_impl;

/// An expression reading the field's value.
fn decode_field(field: &FieldInfo) -> TokenStream {
    let ty = &field.ty;
    if field.attrs.compact {
        quote! {
            <::scale_codec::Compact<#ty> as ::scale_codec::Decode>::decode_from(d)?.0
        }
    } else {
        quote! {
            <#ty as ::scale_codec::Decode>::decode_from(d)?
        }
    }
}

/// Binds every coded field, in encoding order, then builds the value with `constructor`.
/// Fields that are not coded take their default value.
fn construct(
    constructor: TokenStream,
    all: &[FieldInfo],
    coded: &[FieldInfo],
) -> TokenStream {
    let reads = coded.iter().map(|field| {
        let binding = &field.binding;
        let value = decode_field(field);
        quote! { let #binding = #value; }
    });

    let inits = all.iter().map(|field| {
        let member = &field.member;
        if coded.iter().any(|c| c.member == field.member) {
            let binding = &field.binding;
            quote! { #member: #binding }
        } else {
            quote! { #member: ::core::default::Default::default() }
        }
    });

    quote! {
        #(#reads)*
        ::core::result::Result::Ok(#constructor { #(#inits),* })
    }
}
