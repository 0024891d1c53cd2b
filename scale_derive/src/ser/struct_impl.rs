use super::encode_field;
use crate::{attrs::*, bounded};
use quote::quote;
use syn::*;

pub fn scale_ser(ast: &DeriveInput, data: &DataStruct) -> Result<proc_macro2::TokenStream> {
    let name = &ast.ident;
    let container = container_attrs(&ast.attrs)?;
    if let Some(repr) = container.repr {
        return Err(Error::new(repr.span(), "`repr` is only valid on enums"));
    }

    let all = fields_of(&data.fields)?;
    let coded = coded_fields(&all, container.fields.as_deref())?;

    let puts = coded.iter().map(|field| {
        let member = &field.member;
        encode_field(field, quote! { &self.#member })
    });

    let generics = bounded(&ast.generics, quote! { ::scale_codec::Encode });
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::scale_codec::Encode for #name #ty_generics #where_clause {
            #[allow(unused_variables)]
            fn encode_to<__S: ::scale_codec::Sink>(
                &self,
                s: &mut __S,
            ) -> ::core::result::Result<(), ::scale_codec::EncodeError> {
                #(#puts)*
                ::core::result::Result::Ok(())
            }
        }
    })
}
