mod cursor;
mod option;

pub use cursor::*;
pub use option::*;
