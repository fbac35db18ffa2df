use crate::bits::Bits;

/// A single flag, represented by one bit of an unsigned integer.
///
/// Every flag in a universe must have a [raw value][Flag::raw_value] which is
/// a distinct power of two, or zero for the flag that means "no flag" or
/// "unknown". This is not checked when [constructing a set][crate::FlagSet::new],
/// only [FlagSet::try_new][crate::FlagSet::try_new] checks it.
///
/// Most universes are declared with the [flags!][crate::flags] macro, but the
/// trait can be implemented by hand.
///
/// # Examples
///
/// ```
/// use optionset::{Flag, FlagSet};
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// enum Permission {
///     Unknown,
///     Read,
///     Write,
/// }
///
/// impl Flag for Permission {
///     type Bits = u8;
///
///     fn raw_value(&self) -> u8 {
///         match self {
///             Permission::Unknown => 0,
///             Permission::Read => 1,
///             Permission::Write => 2,
///         }
///     }
///
///     fn from_raw(raw: u8) -> Self {
///         match raw {
///             1 => Permission::Read,
///             2 => Permission::Write,
///             _ => Permission::Unknown,
///         }
///     }
/// }
///
/// let set = FlagSet::new([Permission::Write, Permission::Read]);
/// assert_eq!(set.bits(), 3);
/// assert_eq!(set.options(), vec![Permission::Read, Permission::Write]);
/// ```
pub trait Flag: Sized {
    /// The integer width of the universe.
    type Bits: Bits;

    /// The raw value of this flag. Must be zero or a power of two.
    fn raw_value(&self) -> Self::Bits;

    /// Construct the flag corresponding to the given power of two.
    ///
    /// Raw values with no meaning in the universe must produce a fallback
    /// flag rather than failing.
    fn from_raw(raw: Self::Bits) -> Self;
}
