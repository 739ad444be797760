use proc_macro2::TokenStream as TokenStream2;
use quote::quote;

use crate::model::DeriveCoercible;

impl From<DeriveCoercible> for TokenStream2 {
    fn from(value: DeriveCoercible) -> Self {
        let DeriveCoercible {
            enum_name,
            repr,
            variants,
        } = value;
        let arms = variants
            .iter()
            .map(|variant| {
                quote! {
                    value if value == #enum_name::#variant as #repr => ::core::option::Option::Some(#enum_name::#variant),
                }
            })
            .collect::<Vec<_>>();

        quote! {
            impl ::argslot::prelude::Numeric for #enum_name {
                const CLASS: ::argslot::NumericClass = <#repr as ::argslot::prelude::Numeric>::CLASS;

                fn from_integer(value: i128) -> ::core::option::Option<Self> {
                    let value = <#repr as ::argslot::prelude::Numeric>::from_integer(value)?;
                    match value {
                        #( #arms )*
                        _ => ::core::option::Option::None,
                    }
                }
            }

            impl ::argslot::prelude::Coerce for #enum_name {
                fn coerce(token: &str) -> ::core::result::Result<Self, ::argslot::ConversionError> {
                    ::argslot::coerce_numeric(token)
                }
            }
        }
    }
}
