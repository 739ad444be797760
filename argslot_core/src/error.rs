use thiserror::Error;

/// Why a token was refused by the coercion engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// The token is not (entirely) a number in the requested syntax.
    Malformed,
    /// The token parsed, but the value does not fit the target type.
    OutOfRange,
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rejection::Malformed => write!(f, "malformed"),
            Rejection::OutOfRange => write!(f, "out of range"),
        }
    }
}

/// A token which cannot be coerced to the target type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot convert '{token}' to {type_name} ({rejection}).")]
pub struct ConversionError {
    /// The offending token.
    pub token: String,
    /// The target type description.
    pub type_name: &'static str,
    /// The reason for rejecting the token.
    pub rejection: Rejection,
}

impl ConversionError {
    pub(crate) fn new<T>(token: impl Into<String>, rejection: Rejection) -> Self {
        Self {
            token: token.into(),
            type_name: std::any::type_name::<T>(),
            rejection,
        }
    }
}

/// The error taxonomy of `argslot`.
///
/// `ExcessArgument` and `UnsupportedOption` are never produced by the library itself.
/// They exist so the host program may report its own token handling in the same vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgError {
    /// The cursor was already at (or past) the usable end of the tokens.
    #[error("not enough command line arguments provided.")]
    NotEnoughArguments,
    /// A flag requires a following value token that does not exist.
    #[error("the command line argument '{flag}' requires a value.")]
    MissingArgumentValue {
        /// The flag that needed a value.
        flag: String,
    },
    /// A token did not coerce to the target type.
    #[error(transparent)]
    Conversion(#[from] ConversionError),
    /// A slot was read before any value was assigned to it.
    #[error("no value has been assigned to the command line argument.")]
    UnassignedAccess,
    /// A token was encountered which nothing consumes.
    #[error("do not know how to process argument '{token}'.")]
    ExcessArgument {
        /// The unconsumed token.
        token: String,
    },
    /// An option-like token was not recognised.
    #[error("the option '{token}' is not recognised by this program.")]
    UnsupportedOption {
        /// The unrecognised option.
        token: String,
    },
}

impl ArgError {
    /// An `ExcessArgument` for `token`.
    pub fn excess(token: impl Into<String>) -> Self {
        ArgError::ExcessArgument {
            token: token.into(),
        }
    }

    /// An `UnsupportedOption` for `token`.
    pub fn unsupported(token: impl Into<String>) -> Self {
        ArgError::UnsupportedOption {
            token: token.into(),
        }
    }
}
