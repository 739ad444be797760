use syn::punctuated::Punctuated;

use crate::{model::DeriveCoercible, MACRO_COERCIBLE};

// `u128` is absent: its range exceeds the width integers are parsed at.
const INTEGER_REPRS: [&str; 11] = [
    "i8", "i16", "i32", "i64", "i128", "isize", "u8", "u16", "u32", "u64", "usize",
];

impl TryFrom<syn::DeriveInput> for DeriveCoercible {
    type Error = syn::Error;

    fn try_from(value: syn::DeriveInput) -> Result<Self, Self::Error> {
        let enum_name = &value.ident;

        let de = match &value.data {
            syn::Data::Enum(de) => de,
            _ => {
                return Err(syn::Error::new(
                    enum_name.span(),
                    format!("Invalid - {MACRO_COERCIBLE} only applies to 'enum' data structures."),
                ))
            }
        };

        let repr = match find_integer_repr(&value.attrs)? {
            Some(repr) => repr,
            None => {
                return Err(syn::Error::new(
                    enum_name.span(),
                    format!(
                        "Invalid - {MACRO_COERCIBLE} requires an integer representation, ex: `#[repr(u8)]`."
                    ),
                ))
            }
        };

        let variants = de
            .variants
            .iter()
            .map(|variant| match variant.fields {
                syn::Fields::Unit => Ok(variant.ident.clone()),
                _ => Err(syn::Error::new(
                    variant.ident.span(),
                    format!("Invalid - {MACRO_COERCIBLE} variant '{}' must not have fields.", variant.ident),
                )),
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(DeriveCoercible {
            enum_name: enum_name.clone(),
            repr,
            variants,
        })
    }
}

fn find_integer_repr(attributes: &[syn::Attribute]) -> Result<Option<syn::Ident>, syn::Error> {
    for attribute in attributes {
        if !attribute.path().is_ident("repr") {
            continue;
        }

        let metas =
            attribute.parse_args_with(Punctuated::<syn::Meta, syn::Token![,]>::parse_terminated)?;

        for meta in metas {
            if let syn::Meta::Path(path) = meta {
                if let Some(ident) = path.get_ident() {
                    if INTEGER_REPRS.contains(&ident.to_string().as_str()) {
                        return Ok(Some(ident.clone()));
                    }
                }
            }
        }
    }

    Ok(None)
}
