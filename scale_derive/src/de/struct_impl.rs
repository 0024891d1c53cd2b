use super::construct;
use crate::{attrs::*, bounded};
use proc_macro2::TokenStream;
use quote::quote;
use syn::*;

pub fn scale_de(ast: &DeriveInput, data: &DataStruct) -> Result<TokenStream> {
    let name = &ast.ident;
    let container = container_attrs(&ast.attrs)?;
    if let Some(repr) = container.repr {
        return Err(Error::new(repr.span(), "`repr` is only valid on enums"));
    }

    let all = fields_of(&data.fields)?;
    let coded = coded_fields(&all, container.fields.as_deref())?;

    let body = construct(quote! { #name }, &all, &coded);

    // only the coded fields are overwritten, the rest keep their values
    let decode_into = if coded.len() == all.len() {
        TokenStream::new()
    } else {
        let steps = coded.iter().map(|field| {
            let member = &field.member;
            let ty = &field.ty;
            if field.attrs.compact {
                quote! {
                    self.#member = <::scale_codec::Compact<#ty> as ::scale_codec::Decode>::decode_from(d)?.0;
                }
            } else {
                quote! {
                    ::scale_codec::Decode::decode_into(&mut self.#member, d)?;
                }
            }
        });

        quote! {
            #[allow(unused_variables)]
            fn decode_into<__D: ::scale_codec::Source>(
                &mut self,
                d: &mut __D,
            ) -> ::core::result::Result<(), ::scale_codec::DecodeError> {
                #(#steps)*
                ::core::result::Result::Ok(())
            }
        }
    };

    let generics = bounded(&ast.generics, quote! { ::scale_codec::Decode });
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::scale_codec::Decode for #name #ty_generics #where_clause {
            #[allow(unused_variables)]
            fn decode_from<__D: ::scale_codec::Source>(
                d: &mut __D,
            ) -> ::core::result::Result<Self, ::scale_codec::DecodeError> {
                #body
            }

            #decode_into
        }
    })
}
