//! `argslot` is a small, statically typed toolkit for reading command line arguments.
//!
//! It does not attempt to be a full command line parser: there is no grammar for flag grouping, sub-commands, `--key=value` splitting, or help messages.
//! Instead, the host program walks its own tokens and `argslot` takes care of the parts that are easy to get subtly wrong:
//! * *Typed coercion*:
//! Tokens are converted into integers, floats, enums or strings.
//! A token is only accepted when it is consumed in its entirety (`"12abc"` is refused) *and* fits the target type (`"256"` is refused for `u8`).
//! * *Atomic token fetch*:
//! Reading the value of a flag either consumes the token and produces a value, or fails leaving the [`Cursor`] exactly where it was.
//! * *Argument slots*:
//! A [`Slot`] is a typed cell which knows whether it has been assigned.
//! Reading an empty slot is an error, never a silent default.
//! * *Slot combinators*:
//! [`all_assigned`] asks whether a set of (differently typed) slots are all filled.
//! [`assign_first_unassigned`] fills the first empty slot from a priority ordered list, which is a natural way to consume positional arguments.
//!
//! # Usage
//! ```no_run
#![doc = include_str!("../demos/copy.rs")]
//! ```
//!
//! ```console
//! $ copy in.txt out.txt -b 512 -m 644
//! copy in.txt -> out.txt (block size: 512, mode: Some("644"), verbosity: Normal)
//!
//! $ copy in.txt out.txt -b 12abc
//! Parse error: cannot convert '12abc' to u32 (malformed).
//!
//! $ copy in.txt -b
//! Parse error: the command line argument '-b' requires a value.
//!
//! $ copy in.txt out.txt extra.txt
//! Parse error: do not know how to process argument 'extra.txt'.
//! ```
//!
//! # Coercion
//! Each numeric type carries a [`NumericClass`]: signed integer, unsigned integer, or float (with its width).
//! The class selects the parser, and the target type performs the range check.
//! Integers are always parsed at a maximal width first, with an optional leading sign, and only then narrowed.
//! So `"-1"` for a `u8` parses fine, but is refused as [`Rejection::OutOfRange`].
//! Whereas `"0.1"` for an `i8` is refused as [`Rejection::Malformed`], since the integer parser stops at the `.`.
//!
//! Integers may also be read in another [`Radix`] via [`coerce_radix`] or [`Cursor::fetch_radix`].
//!
//! Field-less enums with an integer representation coerce through their underlying type via [derive](./derive/index.html):
//! ```
//! use argslot::coerce;
//! use argslot::derive::Coercible;
//!
//! #[derive(Debug, PartialEq, Coercible)]
//! #[repr(i8)]
//! enum Direction {
//!     Backward = -1,
//!     Forward = 1,
//! }
//!
//! assert_eq!(coerce::<Direction>("-1").unwrap(), Direction::Backward);
//! assert!(coerce::<Direction>("0").is_err());
//! ```
//!
//! # Option-like tokens
//! [`is_option_like`] classifies a token as a flag by its leading dashes:
//! ```console
//! Token      | Option-like
//! -------------------------
//! ""         | no
//! "-"        | no
//! "--"       | no (end of options)
//! "-f"       | yes
//! "-abc"     | no
//! "--help"   | yes
//! "hello"    | no
//! ```
//!
//! # Errors
//! All failures are reported as [`ArgError`] values to the immediate caller; nothing is retried or swallowed.
//! [`ArgError::ExcessArgument`] and [`ArgError::UnsupportedOption`] are never produced by `argslot`; they are there for the host program to report its own decisions.
//!
//! # Features
//! * `tracing_debug`: Emit `tracing` debug events for rejected tokens and cursor rollbacks.
pub mod derive;
pub use argslot_core::*;
