extern crate proc_macro;

mod generate;
mod load;
mod model;

use crate::model::DeriveCoercible;
use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;

pub(crate) const MACRO_COERCIBLE: &str = "Coercible";

/// Derive `Numeric` and `Coerce` for a field-less enum with an explicit integer `#[repr(..)]`.
///
/// Tokens are parsed as the underlying integer type (with its classification & range check).
/// The parsed value must then equal one of the variant discriminants.
///
/// ```ignore
/// #[derive(Coercible)]
/// #[repr(u8)]
/// enum Level {
///     Low = 1,
///     High = 7,
/// }
/// ```
#[proc_macro_derive(Coercible)]
pub fn coercible(input: TokenStream) -> TokenStream {
    let derive_input = syn::parse_macro_input!(input as syn::DeriveInput);

    DeriveCoercible::try_from(derive_input)
        .map(TokenStream2::from)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
