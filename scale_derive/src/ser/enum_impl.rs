use super::encode_field;
use crate::{attrs::*, bounded};
use proc_macro2::{Literal, TokenStream};
use quote::quote;
use syn::{spanned::Spanned, *};

pub fn scale_ser(ast: &DeriveInput, data: &DataEnum) -> Result<TokenStream> {
    let name = &ast.ident;
    let container = container_attrs(&ast.attrs)?;

    let generics = bounded(&ast.generics, quote! { ::scale_codec::Encode });
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    if let Some(fields) = &container.fields {
        if let Some(first) = fields.first() {
            return Err(Error::new(first.span(), "`fields` is only valid on structs"));
        }
    }

    let mut extra = TokenStream::new();
    let body = match &container.repr {
        Some(repr) => {
            extra = scale_enum(ast, data, repr)?;
            quote! { ::scale_codec::enums::encode_enum(self, s) }
        }
        None if data.variants.is_empty() => quote! { match *self {} },
        None => {
            let arms = data
                .variants
                .iter()
                .enumerate()
                .map(|(index, variant)| {
                    let v = &variant.ident;
                    let tag = Literal::u8_unsuffixed(index as u8);
                    let coded = coded_fields(&fields_of(&variant.fields)?, None)?;

                    let pattern = coded.iter().map(|field| {
                        let member = &field.member;
                        let binding = &field.binding;
                        quote! { #member: #binding }
                    });
                    let puts = coded.iter().map(|field| {
                        let binding = &field.binding;
                        encode_field(field, quote! { #binding })
                    });

                    Ok(quote! {
                        #name::#v { #(#pattern,)* .. } => {
                            ::scale_codec::variant::encode_tag(#tag, s)?;
                            #(#puts)*
                            ::core::result::Result::Ok(())
                        }
                    })
                })
                .collect::<Result<Vec<_>>>()?;

            quote! {
                match self {
                    #(#arms)*
                }
            }
        }
    };

    Ok(quote! {
        #extra

        impl #impl_generics ::scale_codec::Encode for #name #ty_generics #where_clause {
            #[allow(unused_variables)]
            fn encode_to<__S: ::scale_codec::Sink>(
                &self,
                s: &mut __S,
            ) -> ::core::result::Result<(), ::scale_codec::EncodeError> {
                #body
            }
        }
    })
}

/// `ScaleEnum` for a field-less enum, checked against its declared discriminants.
fn scale_enum(ast: &DeriveInput, data: &DataEnum, repr: &Ident) -> Result<TokenStream> {
    let name = &ast.ident;
    if !ast.generics.params.is_empty() {
        return Err(Error::new(ast.generics.span(), "`repr` enums can't be generic"));
    }
    if data.variants.is_empty() {
        return Err(Error::new(name.span(), "`repr` enums need at least one variant"));
    }

    let mut variants = Vec::with_capacity(data.variants.len());
    for variant in &data.variants {
        match variant.fields {
            Fields::Unit => variants.push(&variant.ident),
            _ => {
                return Err(Error::new(
                    variant.span(),
                    "`repr` enums can only have unit variants",
                ))
            }
        }
    }

    Ok(quote! {
        const _: () = {
            #(
                assert!(
                    #name::#variants as i128 == (#name::#variants as #repr) as i128,
                    "discriminant doesn't fit in `repr`"
                );
            )*
        };

        impl ::scale_codec::ScaleEnum for #name {
            type Repr = #repr;

            fn to_repr(&self) -> #repr {
                match self {
                    #(#name::#variants => #name::#variants as #repr,)*
                }
            }

            fn from_repr(repr: #repr) -> ::core::option::Option<Self> {
                #(
                    if repr == #name::#variants as #repr {
                        return ::core::option::Option::Some(#name::#variants);
                    }
                )*
                ::core::option::Option::None
            }
        }
    })
}
