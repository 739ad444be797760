use crate::api::capture::Capturable;
use crate::api::slot::Slot;
use crate::error::ConversionError;

/// Whether every slot has been assigned.
///
/// Slots are queried left to right, stopping at the first empty one.
/// An empty list is trivially satisfied.
pub fn all_assigned(slots: &[&dyn Capturable]) -> bool {
    slots.iter().all(|slot| slot.is_assigned())
}

/// Capture `token` into the first unassigned slot.
///
/// Slots are scanned in the order given, so the caller encodes priority by ordering.
/// Returns `Ok(true)` when a slot received the token, and `Ok(false)` when every slot was already assigned (nothing changes).
/// If the chosen slot cannot coerce the token, the error is returned and no slot changes.
pub fn assign_first_unassigned(
    token: &str,
    slots: &mut [&mut dyn Capturable],
) -> Result<bool, ConversionError> {
    match slots.iter_mut().find(|slot| !slot.is_assigned()) {
        Some(slot) => {
            slot.capture(token)?;
            Ok(true)
        }
        None => Ok(false),
    }
}

/// Assign `value` into the first unassigned slot.
///
/// The typed counterpart of `assign_first_unassigned`; returns whether a slot received the value.
pub fn assign_value_first_unassigned<T>(value: T, slots: &mut [&mut Slot<T>]) -> bool {
    match slots.iter_mut().find(|slot| !slot.is_assigned()) {
        Some(slot) => {
            slot.assign(value);
            true
        }
        None => false,
    }
}

/// Whether every slot has been assigned; slots may differ in type.
///
/// ```
/// use argslot_core::{all_assigned, Slot};
///
/// let mut input: Slot<String> = Slot::new();
/// let count: Slot<u32> = Slot::new();
/// input.assign("in.txt".to_string());
/// assert!(!all_assigned!(input, count));
/// ```
#[macro_export]
macro_rules! all_assigned {
    ($($slot:expr),+ $(,)?) => {
        $crate::all_assigned(&[$(&$slot as &dyn $crate::Capturable),+])
    };
}

/// Capture a token into the first unassigned slot; slots may differ in type.
///
/// ```
/// use argslot_core::{assign_first_unassigned, Slot};
///
/// let mut input: Slot<String> = Slot::new();
/// let mut count: Slot<u32> = Slot::new();
/// assert_eq!(assign_first_unassigned!("in.txt" => input, count), Ok(true));
/// assert_eq!(assign_first_unassigned!("3" => input, count), Ok(true));
/// assert_eq!(assign_first_unassigned!("4" => input, count), Ok(false));
/// ```
#[macro_export]
macro_rules! assign_first_unassigned {
    ($token:expr => $($slot:expr),+ $(,)?) => {
        $crate::assign_first_unassigned($token, &mut [$(&mut $slot as &mut dyn $crate::Capturable),+])
    };
}
