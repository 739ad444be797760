//! Core module for `argslot`.
//! See [documentation root](https://docs.rs/argslot/latest/argslot/index.html) for full details.
#![deny(missing_docs)]
mod api;
mod constant;
mod error;
mod model;
mod parser;
#[allow(missing_docs)]
pub mod prelude;

pub use api::*;
pub use constant::END_OF_OPTIONS;
pub use error::*;
pub use model::*;
pub use parser::*;

#[cfg(test)]
#[macro_use]
extern crate assert_matches;
