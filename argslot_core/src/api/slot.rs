use crate::api::capture::Capturable;
use crate::api::coerce::Coerce;
use crate::error::{ArgError, ConversionError};
use crate::parser::Cursor;

/// A typed cell for one command line argument, which starts out empty.
///
/// A slot moves from empty to assigned on the first successful assignment, and may be overwritten afterwards.
/// It never becomes empty again.
/// Reading an empty slot is an error (`ArgError::UnassignedAccess`), never a default value.
///
/// ```
/// use argslot_core::Slot;
///
/// let mut count: Slot<u8> = Slot::new();
/// assert!(!count.is_assigned());
/// assert!(count.get().is_err());
///
/// count.assign_token("1").unwrap();
/// assert_eq!(*count.get().unwrap(), 1);
///
/// // A failed assignment leaves the slot untouched.
/// assert!(count.assign_token("-1").is_err());
/// assert_eq!(*count.get().unwrap(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot<T> {
    value: Option<T>,
}

impl<T> Default for Slot<T> {
    fn default() -> Self {
        Self { value: None }
    }
}

impl<T> Slot<T> {
    /// Create an empty slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a value has been assigned.
    pub fn is_assigned(&self) -> bool {
        self.value.is_some()
    }

    /// Assign `value`, overwriting any previous value.
    pub fn assign(&mut self, value: T) {
        self.value = Some(value);
    }

    /// The assigned value.
    pub fn get(&self) -> Result<&T, ArgError> {
        self.value.as_ref().ok_or(ArgError::UnassignedAccess)
    }

    /// The assigned value, mutably.
    pub fn get_mut(&mut self) -> Result<&mut T, ArgError> {
        self.value.as_mut().ok_or(ArgError::UnassignedAccess)
    }

    /// Consume the slot, yielding the assigned value.
    pub fn into_inner(self) -> Result<T, ArgError> {
        self.value.ok_or(ArgError::UnassignedAccess)
    }
}

impl<T: Coerce> Slot<T> {
    /// Coerce `token` and assign the result.
    ///
    /// If the coercion fails the slot is left exactly as it was.
    pub fn assign_token(&mut self, token: &str) -> Result<(), ConversionError> {
        let value = T::coerce(token)?;
        self.assign(value);
        Ok(())
    }

    /// Fetch the token following the cursor and assign it.
    ///
    /// On failure neither the cursor nor the slot change (see `Cursor::fetch`).
    pub fn fetch<S: AsRef<str>>(&mut self, cursor: &mut Cursor<'_, S>) -> Result<(), ArgError> {
        let value = cursor.fetch::<T>()?;
        self.assign(value);
        Ok(())
    }
}

impl<T: Coerce> Capturable for Slot<T> {
    fn is_assigned(&self) -> bool {
        Slot::is_assigned(self)
    }

    fn capture(&mut self, token: &str) -> Result<(), ConversionError> {
        self.assign_token(token)
    }
}
