use crate::attrs::FieldInfo;
use proc_macro2::TokenStream;
use quote::quote;

pub mod enum_impl;
pub mod struct_impl;

/// Writes the field behind the reference `place`.
fn encode_field(field: &FieldInfo, place: TokenStream) -> TokenStream {
    if field.attrs.compact {
        quote! {
            ::scale_codec::Encode::encode_to(&::scale_codec::CompactRef(#place), s)?;
        }
    } else {
        quote! {
            ::scale_codec::Encode::encode_to(#place, s)?;
        }
    }
}
