use proc_macro2::Span;
use syn::{spanned::Spanned, *};

const REPRS: &[&str] = &[
    "u8", "u16", "u32", "u64", "u128", "i8", "i16", "i32", "i64", "i128",
];

/// Options on a single field.
#[derive(Default, Clone, Copy)]
pub struct FieldAttrs {
    /// Not part of the encoding.
    pub skip: bool,
    /// Coded through `Compact`.
    pub compact: bool,
}

/// Options on the type itself.
#[derive(Default)]
pub struct ContainerAttrs {
    /// `#[scale(repr = "u16")]`: code a field-less enum as its discriminant.
    pub repr: Option<Ident>,
    /// `#[scale(fields(b, a))]`: code only these fields, in this order.
    pub fields: Option<Vec<Member>>,
}

/// A field together with its options.
#[derive(Clone)]
pub struct FieldInfo {
    pub member: Member,
    /// Local name the field is bound to in generated code.
    pub binding: Ident,
    pub ty: Type,
    pub attrs: FieldAttrs,
}

fn scale_metas(attrs: &[Attribute]) -> Result<Vec<NestedMeta>> {
    let mut out = Vec::new();
    for attr in attrs.iter().filter(|a| a.path.is_ident("scale")) {
        match attr.parse_meta()? {
            Meta::List(list) => out.extend(list.nested),
            other => return Err(Error::new(other.span(), "expected `#[scale(...)]`")),
        }
    }
    Ok(out)
}

pub fn field_attrs(attrs: &[Attribute]) -> Result<FieldAttrs> {
    let mut out = FieldAttrs::default();

    for meta in scale_metas(attrs)? {
        match meta {
            NestedMeta::Meta(Meta::Path(ref p)) if p.is_ident("skip") => out.skip = true,
            NestedMeta::Meta(Meta::Path(ref p)) if p.is_ident("compact") => out.compact = true,
            other => {
                return Err(Error::new(
                    other.span(),
                    "unknown field option, expected `skip` or `compact`",
                ))
            }
        }
    }

    Ok(out)
}

pub fn container_attrs(attrs: &[Attribute]) -> Result<ContainerAttrs> {
    let mut out = ContainerAttrs::default();

    for meta in scale_metas(attrs)? {
        match meta {
            NestedMeta::Meta(Meta::NameValue(ref nv)) if nv.path.is_ident("repr") => {
                let repr = match &nv.lit {
                    Lit::Str(s) => s.parse::<Ident>()?,
                    other => return Err(Error::new(other.span(), "expected `repr = \"u8\"`")),
                };
                if !REPRS.iter().any(|r| repr == *r) {
                    return Err(Error::new(repr.span(), "`repr` must be a primitive integer type"));
                }
                out.repr = Some(repr);
            }
            NestedMeta::Meta(Meta::List(ref list)) if list.path.is_ident("fields") => {
                let mut members = Vec::new();
                for nested in &list.nested {
                    let member = match nested {
                        NestedMeta::Meta(Meta::Path(p)) => match p.get_ident() {
                            Some(ident) => Member::Named(ident.clone()),
                            None => return Err(Error::new(p.span(), "expected a field name")),
                        },
                        NestedMeta::Lit(Lit::Int(i)) => Member::Unnamed(Index {
                            index: i.base10_parse()?,
                            span: i.span(),
                        }),
                        other => return Err(Error::new(other.span(), "expected a field name")),
                    };
                    members.push(member);
                }
                out.fields = Some(members);
            }
            other => {
                return Err(Error::new(
                    other.span(),
                    "unknown option, expected `repr = \"..\"` or `fields(..)`",
                ))
            }
        }
    }

    Ok(out)
}

/// Every field, in declaration order.
pub fn fields_of(fields: &Fields) -> Result<Vec<FieldInfo>> {
    fields
        .iter()
        .enumerate()
        .map(|(i, field)| {
            let member = match &field.ident {
                Some(ident) => Member::Named(ident.clone()),
                None => Member::Unnamed(Index::from(i)),
            };
            Ok(FieldInfo {
                member,
                binding: Ident::new(&format!("__field_{}", i), Span::call_site()),
                ty: field.ty.clone(),
                attrs: field_attrs(&field.attrs)?,
            })
        })
        .collect()
}

/// The fields that are part of the encoding, in encoding order.
pub fn coded_fields(all: &[FieldInfo], order: Option<&[Member]>) -> Result<Vec<FieldInfo>> {
    let order = match order {
        Some(order) => order,
        None => return Ok(all.iter().filter(|f| !f.attrs.skip).cloned().collect()),
    };

    let mut out: Vec<FieldInfo> = Vec::with_capacity(order.len());
    for member in order {
        let field = match all.iter().find(|f| &f.member == member) {
            Some(f) => f,
            None => return Err(Error::new(member.span(), "no such field")),
        };
        if field.attrs.skip {
            return Err(Error::new(member.span(), "field is marked `skip`"));
        }
        if out.iter().any(|f| &f.member == member) {
            return Err(Error::new(member.span(), "field listed twice"));
        }
        out.push(field.clone());
    }
    Ok(out)
}
