mod capture;
mod coerce;
mod combinator;
mod slot;

pub use capture::*;
pub use coerce::*;
pub use combinator::*;
pub use slot::*;
