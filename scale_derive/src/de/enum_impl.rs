use super::construct;
use crate::{attrs::*, bounded};
use proc_macro2::{Literal, TokenStream};
use quote::quote;
use syn::*;

pub fn scale_de(ast: &DeriveInput, data: &DataEnum) -> Result<TokenStream> {
    let name = &ast.ident;
    let container = container_attrs(&ast.attrs)?;

    let body = match container.repr {
        // the `ScaleEnum` impl comes with the `Encode` derive
        Some(_) => quote! { ::scale_codec::enums::decode_enum(d) },
        None => {
            let count = data.variants.len();
            let arms = data
                .variants
                .iter()
                .enumerate()
                .map(|(index, variant)| {
                    let v = &variant.ident;
                    let tag = Literal::u8_unsuffixed(index as u8);
                    let all = fields_of(&variant.fields)?;
                    let coded = coded_fields(&all, None)?;
                    let build = construct(quote! { #name::#v }, &all, &coded);

                    Ok(quote! {
                        #tag => { #build }
                    })
                })
                .collect::<Result<Vec<_>>>()?;

            quote! {
                match ::scale_codec::variant::decode_tag(d, #count)? {
                    #(#arms)*
                    _ => ::core::result::Result::Err(::scale_codec::DecodeError::WrongTypeIndex),
                }
            }
        }
    };

    let generics = bounded(&ast.generics, quote! { ::scale_codec::Decode });
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::scale_codec::Decode for #name #ty_generics #where_clause {
            fn decode_from<__D: ::scale_codec::Source>(
                d: &mut __D,
            ) -> ::core::result::Result<Self, ::scale_codec::DecodeError> {
                #body
            }
        }
    })
}
