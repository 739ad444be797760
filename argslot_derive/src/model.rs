#[derive(Debug, PartialEq, Eq)]
pub struct DeriveCoercible {
    pub enum_name: syn::Ident,
    pub repr: syn::Ident,
    pub variants: Vec<syn::Ident>,
}
