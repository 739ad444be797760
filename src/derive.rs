//! Derive Api for `argslot`.
//!
//! ### Coercible
//! Instrument a field-less enum with `#[derive(Coercible)]` and an explicit integer `#[repr(..)]` to make it coercible.
//! The enum takes on the [classification](../enum.NumericClass.html) of its underlying type.
//! A token is accepted when it parses as the underlying type, fits its range, and equals one of the discriminants.
//!
//! ```
//! use argslot::derive::Coercible;
//! use argslot::{Rejection, Slot};
//!
//! #[derive(Debug, PartialEq, Coercible)]
//! #[repr(u16)]
//! enum Port {
//!     Http = 80,
//!     Https = 443,
//! }
//!
//! let mut port: Slot<Port> = Slot::new();
//! port.assign_token("443").unwrap();
//! assert_eq!(port.get(), Ok(&Port::Https));
//!
//! let error = Slot::<Port>::new().assign_token("8080").unwrap_err();
//! assert_eq!(error.rejection, Rejection::OutOfRange);
//! ```
//!
//! The following are refused at compile time:
//! * Structs and unions.
//! * Enums with a variant carrying fields.
//! * Enums without an integer representation (`#[repr(u128)]` included).

pub use argslot_derive::*;
