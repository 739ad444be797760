/// The conventional end-of-options marker; never treated as an option itself.
pub const END_OF_OPTIONS: &str = "--";

pub(crate) const OPTION_PREFIX: u8 = b'-';

pub(crate) const HEXADECIMAL_PREFIXES: [&str; 2] = ["0x", "0X"];
