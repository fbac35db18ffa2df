use thiserror::Error;

/// Errors raised when checking the flags of a set.
///
/// Only produced by [FlagSet::try_new][crate::FlagSet::try_new], the raw
/// values are widened so that the error is the same for every integer width.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// A flag had a raw value which is neither zero nor a power of two.
    #[error("raw value {raw:#x} is not a power of two")]
    NotPowerOfTwo {
        /// The offending raw value.
        raw: u128,
    },
    /// A flag with the same raw value is already in the set.
    #[error("raw value {raw:#x} is already in the set")]
    Duplicate {
        /// The offending raw value.
        raw: u128,
    },
}

/// The re-exported result type.
pub type Result<T, E = Error> = ::std::result::Result<T, E>;
