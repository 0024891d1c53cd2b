#![recursion_limit = "128"]

extern crate proc_macro;
extern crate proc_macro2;

/// `#[scale(...)]` options.
mod attrs;
/// Support for `Decode` auto-derive.
mod de;
/// Support for `Encode` auto-derive.
mod ser;

use proc_macro::TokenStream;
use proc_macro2::Span;
use syn::*;

const MAX_VARIANTS: usize = 256;

/// Adds `bound` to every type parameter.
pub(crate) fn bounded(generics: &Generics, bound: proc_macro2::TokenStream) -> Generics {
    let mut generics = generics.clone();
    for param in generics.params.iter_mut() {
        if let GenericParam::Type(ty) = param {
            ty.bounds.push(parse_quote!(#bound));
        }
    }
    generics
}

fn check_enum(name: &Ident, ed: &DataEnum) -> Result<()> {
    if ed.variants.len() > MAX_VARIANTS {
        return Err(Error::new(
            name.span(),
            format!("at most {} variants can be tagged by one byte", MAX_VARIANTS),
        ));
    }
    Ok(())
}

#[proc_macro_derive(Encode, attributes(scale))]
pub fn encode_derive(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);

    let imp = match &ast.data {
        Data::Struct(sd) => ser::struct_impl::scale_ser(&ast, sd),
        Data::Enum(ed) => {
            check_enum(&ast.ident, ed).and_then(|()| ser::enum_impl::scale_ser(&ast, ed))
        }
        Data::Union(_) => Err(Error::new(Span::call_site(), "unions can't derive `Encode`")),
    };

    imp.unwrap_or_else(|e| e.to_compile_error()).into()
}

#[proc_macro_derive(Decode, attributes(scale))]
pub fn decode_derive(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);

    let imp = match &ast.data {
        Data::Struct(sd) => de::struct_impl::scale_de(&ast, sd),
        Data::Enum(ed) => check_enum(&ast.ident, ed).and_then(|()| de::enum_impl::scale_de(&ast, ed)),
        Data::Union(_) => Err(Error::new(Span::call_site(), "unions can't derive `Decode`")),
    };

    imp.unwrap_or_else(|e| e.to_compile_error()).into()
}
