use crate::api::{coerce_radix, Coerce, Numeric};
use crate::error::ArgError;
use crate::model::Radix;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// A position within the command line tokens.
///
/// The index always points at the last *consumed* token, starting with the program name at `0`.
/// Every operation is atomic: it either consumes and produces a value, or fails leaving the index untouched.
///
/// ```
/// use argslot_core::{ArgError, Cursor};
///
/// let tokens = ["program", "-n", "3", "-n", "x"];
/// let mut cursor = Cursor::new(&tokens[..]).unwrap();
///
/// assert_eq!(cursor.advance().unwrap(), "-n");
/// assert_eq!(cursor.fetch::<u32>().unwrap(), 3);
/// assert_eq!(cursor.advance().unwrap(), "-n");
/// assert!(cursor.fetch::<u32>().is_err());
/// assert_eq!(cursor.index(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct Cursor<'t, S> {
    tokens: &'t [S],
    index: usize,
}

impl<'t, S: AsRef<str>> Cursor<'t, S> {
    /// Create a cursor over `tokens`, positioned at the program name.
    pub fn new(tokens: &'t [S]) -> Result<Self, ArgError> {
        Self::at(tokens, 0)
    }

    /// Create a cursor over `tokens`, positioned at `index`.
    pub fn at(tokens: &'t [S], index: usize) -> Result<Self, ArgError> {
        if index < tokens.len() {
            Ok(Self { tokens, index })
        } else {
            Err(ArgError::NotEnoughArguments)
        }
    }

    /// The index of the last consumed token.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The last consumed token.
    pub fn current(&self) -> &'t str {
        self.tokens[self.index].as_ref()
    }

    /// The tokens not yet consumed.
    pub fn remaining(&self) -> &'t [S] {
        &self.tokens[self.index + 1..]
    }

    /// Whether every token has been consumed.
    pub fn is_exhausted(&self) -> bool {
        self.index + 1 >= self.tokens.len()
    }

    /// Consume the next token, whatever it is.
    pub fn advance(&mut self) -> Result<&'t str, ArgError> {
        if self.is_exhausted() {
            return Err(ArgError::NotEnoughArguments);
        }

        self.index += 1;
        Ok(self.current())
    }

    /// Consume the next token, if there is one.
    ///
    /// Handy for walking the tokens: `while let Some(token) = cursor.next_token() { .. }`.
    pub fn next_token(&mut self) -> Option<&'t str> {
        self.advance().ok()
    }

    /// Consume the value token for the current flag.
    pub fn fetch_str(&mut self) -> Result<&'t str, ArgError> {
        if self.is_exhausted() {
            return Err(ArgError::MissingArgumentValue {
                flag: self.current().to_string(),
            });
        }

        self.advance()
    }

    /// Consume the value token for the current flag, coerced into `T`.
    ///
    /// If the coercion fails the index is restored to where it was before this call.
    pub fn fetch<T: Coerce>(&mut self) -> Result<T, ArgError> {
        self.transaction(|cursor| {
            let token = cursor.fetch_str()?;
            Ok(T::coerce(token)?)
        })
    }

    /// Consume the value token for the current flag, coerced into the number `T` read in `radix`.
    pub fn fetch_radix<T: Numeric>(&mut self, radix: Radix) -> Result<T, ArgError> {
        self.transaction(|cursor| {
            let token = cursor.fetch_str()?;
            Ok(coerce_radix(token, radix)?)
        })
    }

    /// Run `attempt` against this cursor, restoring the index if it fails.
    ///
    /// This allows composing multi-token reads (or alternate interpretations of the same tokens) that are all-or-nothing.
    pub fn transaction<R, E>(
        &mut self,
        attempt: impl FnOnce(&mut Self) -> Result<R, E>,
    ) -> Result<R, E> {
        let saved = self.index;
        let result = attempt(self);

        if result.is_err() && self.index != saved {
            #[cfg(feature = "tracing_debug")]
            {
                debug!("Rolling back cursor from {} to {saved}.", self.index);
            }

            self.index = saved;
        }

        result
    }
}
