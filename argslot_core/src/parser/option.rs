use crate::constant::{END_OF_OPTIONS, OPTION_PREFIX};

/// Whether `token` has the shape of an option (flag), rather than a value.
///
/// * Tokens shorter than 2 bytes are never options (`""`, `"-"`).
/// * `"--"` is the end-of-options marker, not an option.
/// * Any other 2 byte token is an option iff it starts with `-` (ex: `-f`).
/// * Longer tokens are options iff they start with `--` (ex: `--help`).
///
/// Notice, `-abc` is *not* option-like; short options may not be grouped.
pub fn is_option_like(token: &str) -> bool {
    let bytes = token.as_bytes();

    match bytes.len() {
        0 | 1 => false,
        2 => token != END_OF_OPTIONS && bytes[0] == OPTION_PREFIX,
        _ => bytes[0] == OPTION_PREFIX && bytes[1] == OPTION_PREFIX,
    }
}
