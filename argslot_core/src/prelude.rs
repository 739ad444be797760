//! Traits which, typically, may be imported without concern: `use argslot::prelude::*`.

pub use crate::api::{Capturable, Coerce, Numeric};
