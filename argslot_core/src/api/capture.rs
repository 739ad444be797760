use crate::error::ConversionError;

/// Behaviour shared by every argument slot, regardless of its value type.
///
/// We use this wherever slots of differing types `T` must be treated together (ex: `all_assigned`).
pub trait Capturable {
    /// Whether a value has been assigned.
    fn is_assigned(&self) -> bool;

    /// Coerce `token` and assign the result.
    /// On failure nothing changes.
    fn capture(&mut self, token: &str) -> Result<(), ConversionError>;
}
