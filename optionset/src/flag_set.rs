//! A set of flags packed into a single integer.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::{FromIterator, FusedIterator};
use std::marker::PhantomData;
use std::ops::{BitAnd, BitOr};

use crate::bits::{Bits, RawIter};
use crate::error::Error;
use crate::flag::Flag;

/// A set of flags, stored as the sum of their raw values.
///
/// The set is a plain value: every operation which changes it produces a new
/// set.
///
/// # Examples
///
/// ```rust
/// optionset::flags! {
///     #[derive(Debug, Clone, Copy, PartialEq, Eq)]
///     enum Animal: u32 {
///         Unknown = 0,
///         Fluffy = 1 << 0,
///         EatsMeat = 1 << 1,
///         EatsPlants = 1 << 2,
///         Wild = 1 << 6,
///     }
/// }
///
/// let cat = optionset::FlagSet::new([Animal::Fluffy, Animal::EatsMeat, Animal::Wild]);
///
/// assert_eq!(cat.bits(), 0b100_0011);
/// assert_eq!(cat.options(), vec![Animal::Fluffy, Animal::EatsMeat, Animal::Wild]);
/// assert!(!cat.contains(&Animal::EatsPlants));
/// ```
pub struct FlagSet<F>
where
    F: Flag,
{
    bits: F::Bits,
    _marker: PhantomData<fn() -> F>,
}

impl<F> FlagSet<F>
where
    F: Flag,
{
    /// Construct a set where no flag is set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # optionset::flags! { enum Animal: u32 { Unknown = 0, Fluffy = 1 } }
    /// let set = optionset::FlagSet::<Animal>::empty();
    ///
    /// assert!(set.is_empty());
    /// assert_eq!(set.bits(), 0);
    /// ```
    pub fn empty() -> Self {
        Self::from_bits(F::Bits::ZERO)
    }

    /// Construct a set from the sum of the raw values of the given flags.
    ///
    /// Flags are trusted to have distinct power of two raw values. Passing the
    /// same flag twice or a flag which isn't a power of two will corrupt the
    /// set, use [FlagSet::try_new] if the flags need to be checked. The sum
    /// wraps around if it overflows.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # optionset::flags! { enum Animal: u32 { Unknown = 0, Fluffy = 1, Wild = 64 } }
    /// let set = optionset::FlagSet::new([Animal::Fluffy, Animal::Wild]);
    /// assert_eq!(set.bits(), 65);
    ///
    /// let set = optionset::FlagSet::<Animal>::new([]);
    /// assert_eq!(set.bits(), 0);
    /// ```
    pub fn new<I>(flags: I) -> Self
    where
        I: IntoIterator<Item = F>,
    {
        let mut bits = F::Bits::ZERO;

        for flag in flags {
            bits = bits.wrapping_add(flag.raw_value());
        }

        Self::from_bits(bits)
    }

    /// Construct a set from the given flags, checking that every raw value is
    /// zero or a power of two and that no flag is added twice.
    ///
    /// Flags with a zero raw value contribute nothing to the set.
    ///
    /// # Errors
    ///
    /// Errors with [Error::NotPowerOfTwo] or [Error::Duplicate] on the first
    /// flag which breaks the rules.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optionset::{Error, FlagSet};
    ///
    /// optionset::flags! {
    ///     #[derive(Debug)]
    ///     enum Animal: u32 { Unknown = 0, Fluffy = 1, Broken = 3 }
    /// }
    ///
    /// let set = FlagSet::try_new([Animal::Unknown, Animal::Fluffy])?;
    /// assert_eq!(set.bits(), 1);
    ///
    /// assert_eq!(
    ///     FlagSet::try_new([Animal::Fluffy, Animal::Fluffy]),
    ///     Err(Error::Duplicate { raw: 1 })
    /// );
    ///
    /// assert_eq!(
    ///     FlagSet::try_new([Animal::Broken]),
    ///     Err(Error::NotPowerOfTwo { raw: 3 })
    /// );
    /// # Ok::<_, optionset::Error>(())
    /// ```
    pub fn try_new<I>(flags: I) -> crate::Result<Self>
    where
        I: IntoIterator<Item = F>,
    {
        let mut bits = F::Bits::ZERO;

        for flag in flags {
            let raw = flag.raw_value();

            if raw == F::Bits::ZERO {
                continue;
            }

            if !raw.is_power_of_two() {
                tracing::debug!(?raw, "rejected flag which is not a power of two");
                return Err(Error::NotPowerOfTwo { raw: raw.to_u128() });
            }

            if bits & raw != F::Bits::ZERO {
                tracing::debug!(?raw, "rejected duplicate flag");
                return Err(Error::Duplicate { raw: raw.to_u128() });
            }

            bits = bits | raw;
        }

        Ok(Self::from_bits(bits))
    }

    /// Wrap the given integer as it is.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # optionset::flags! { #[derive(Debug, PartialEq)] enum Animal: u32 { Unknown = 0, Fluffy = 1, Wild = 64 } }
    /// let set = optionset::FlagSet::<Animal>::from_bits(65);
    /// assert_eq!(set.options(), vec![Animal::Fluffy, Animal::Wild]);
    /// ```
    pub const fn from_bits(bits: F::Bits) -> Self {
        Self {
            bits,
            _marker: PhantomData,
        }
    }

    /// The integer backing the set.
    pub fn bits(&self) -> F::Bits {
        self.bits
    }

    /// Decompose the set into its flags, ordered by ascending raw value.
    ///
    /// Each set bit is turned into a flag through [Flag::from_raw], so bits
    /// which don't correspond to a declared flag produce whatever fallback
    /// the universe uses.
    ///
    /// # Examples
    ///
    /// ```rust
    /// optionset::flags! {
    ///     #[derive(Debug, PartialEq)]
    ///     enum Animal: u32 { Unknown = 0, Fluffy = 1, Flying = 8, Wild = 64 }
    /// }
    ///
    /// let set = optionset::FlagSet::<Animal>::from_bits(64 + 8 + 2);
    /// assert_eq!(set.options(), vec![Animal::Unknown, Animal::Flying, Animal::Wild]);
    /// ```
    pub fn options(&self) -> Vec<F> {
        crate::decompose(self.bits, F::from_raw)
    }

    /// Iterate over the flags in the set, ordered by ascending raw value.
    ///
    /// This yields the same flags as [FlagSet::options] without allocating.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # optionset::flags! { #[derive(Debug, PartialEq)] enum Animal: u32 { Unknown = 0, Fluffy = 1, Flying = 8, Wild = 64 } }
    /// let set = optionset::FlagSet::new([Animal::Wild, Animal::Fluffy]);
    ///
    /// let mut it = set.iter();
    /// assert_eq!(it.next(), Some(Animal::Fluffy));
    /// assert_eq!(it.next(), Some(Animal::Wild));
    /// assert_eq!(it.next(), None);
    ///
    /// assert_eq!(set.iter().rev().collect::<Vec<_>>(), vec![Animal::Wild, Animal::Fluffy]);
    /// ```
    pub fn iter(&self) -> Iter<F> {
        Iter {
            raw: RawIter::new(self.bits),
            _marker: PhantomData,
        }
    }

    /// Test if no flag is set.
    pub fn is_empty(&self) -> bool {
        self.bits == F::Bits::ZERO
    }

    /// The number of flags in the set.
    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Test if the given flag is in the set.
    ///
    /// A flag with a zero raw value is never contained.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # optionset::flags! { enum Animal: u32 { Unknown = 0, Fluffy = 1, Wild = 64 } }
    /// let set = optionset::FlagSet::new([Animal::Wild]);
    ///
    /// assert!(set.contains(&Animal::Wild));
    /// assert!(!set.contains(&Animal::Fluffy));
    /// assert!(!set.contains(&Animal::Unknown));
    /// ```
    pub fn contains(&self, flag: &F) -> bool {
        let raw = flag.raw_value();
        raw != F::Bits::ZERO && self.bits & raw == raw
    }

    /// Test if every bit in the set corresponds to a flag in the universe.
    ///
    /// A bit is valid if the flag produced for it by [Flag::from_raw] reports
    /// the same raw value back.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # optionset::flags! { enum Animal: u32 { Unknown = 0, Fluffy = 1, Wild = 64 } }
    /// use optionset::FlagSet;
    ///
    /// assert!(FlagSet::<Animal>::from_bits(65).is_valid());
    /// assert!(!FlagSet::<Animal>::from_bits(66).is_valid());
    /// ```
    pub fn is_valid(&self) -> bool {
        RawIter::new(self.bits).all(|raw| F::from_raw(raw).raw_value() == raw)
    }

    /// A new set with the given flag added.
    ///
    /// Adding a flag which is already present leaves the set unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # optionset::flags! { enum Animal: u32 { Unknown = 0, Fluffy = 1, Wild = 64 } }
    /// let set = optionset::FlagSet::new([Animal::Wild]);
    /// let set = set.with(Animal::Fluffy).with(Animal::Fluffy);
    ///
    /// assert_eq!(set.bits(), 65);
    /// ```
    pub fn with(self, flag: F) -> Self {
        Self::from_bits(self.bits | flag.raw_value())
    }

    /// A new set with the given flag removed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # optionset::flags! { enum Animal: u32 { Unknown = 0, Fluffy = 1, Wild = 64 } }
    /// let set = optionset::FlagSet::new([Animal::Fluffy, Animal::Wild]);
    ///
    /// assert_eq!(set.without(Animal::Wild).bits(), 1);
    /// assert_eq!(set.without(Animal::Wild).without(Animal::Wild).bits(), 1);
    /// ```
    pub fn without(self, flag: F) -> Self {
        Self::from_bits(self.bits & !flag.raw_value())
    }

    /// Flags which are in either set.
    pub fn union(self, other: Self) -> Self {
        Self::from_bits(self.bits | other.bits)
    }

    /// Flags which are in both sets.
    pub fn intersection(self, other: Self) -> Self {
        Self::from_bits(self.bits & other.bits)
    }

    /// Flags which are in this set but not in `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # optionset::flags! { enum Animal: u32 { Unknown = 0, Fluffy = 1, Flying = 8, Wild = 64 } }
    /// use optionset::FlagSet;
    ///
    /// let a = FlagSet::new([Animal::Fluffy, Animal::Flying]);
    /// let b = FlagSet::new([Animal::Flying, Animal::Wild]);
    ///
    /// assert_eq!(a.union(b).bits(), 73);
    /// assert_eq!(a.intersection(b).bits(), 8);
    /// assert_eq!(a.difference(b).bits(), 1);
    /// assert_eq!((a | b).bits(), 73);
    /// assert_eq!((a & b).bits(), 8);
    /// ```
    pub fn difference(self, other: Self) -> Self {
        Self::from_bits(self.bits & !other.bits)
    }
}

impl<F> Clone for FlagSet<F>
where
    F: Flag,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<F> Copy for FlagSet<F> where F: Flag {}

impl<F> Default for FlagSet<F>
where
    F: Flag,
{
    fn default() -> Self {
        Self::empty()
    }
}

impl<F> PartialEq for FlagSet<F>
where
    F: Flag,
{
    fn eq(&self, other: &Self) -> bool {
        self.bits == other.bits
    }
}

impl<F> Eq for FlagSet<F> where F: Flag {}

impl<F> Hash for FlagSet<F>
where
    F: Flag,
{
    fn hash<H>(&self, state: &mut H)
    where
        H: Hasher,
    {
        self.bits.hash(state);
    }
}

impl<F> fmt::Debug for FlagSet<F>
where
    F: Flag + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<F> fmt::Binary for FlagSet<F>
where
    F: Flag,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Binary::fmt(&self.bits, f)
    }
}

impl<F> fmt::LowerHex for FlagSet<F>
where
    F: Flag,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.bits, f)
    }
}

impl<F> BitOr for FlagSet<F>
where
    F: Flag,
{
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(rhs)
    }
}

impl<F> BitAnd for FlagSet<F>
where
    F: Flag,
{
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        self.intersection(rhs)
    }
}

impl<F> FromIterator<F> for FlagSet<F>
where
    F: Flag,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = F>,
    {
        Self::new(iter)
    }
}

impl<F> IntoIterator for FlagSet<F>
where
    F: Flag,
{
    type IntoIter = Iter<F>;
    type Item = F;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<F> IntoIterator for &FlagSet<F>
where
    F: Flag,
{
    type IntoIter = Iter<F>;
    type Item = F;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An iterator over the flags of a set. Created through [FlagSet::iter].
pub struct Iter<F>
where
    F: Flag,
{
    raw: RawIter<F::Bits>,
    _marker: PhantomData<fn() -> F>,
}

impl<F> Clone for Iter<F>
where
    F: Flag,
{
    fn clone(&self) -> Self {
        Self {
            raw: self.raw,
            _marker: PhantomData,
        }
    }
}

impl<F> Iterator for Iter<F>
where
    F: Flag,
{
    type Item = F;

    fn next(&mut self) -> Option<Self::Item> {
        self.raw.next().map(F::from_raw)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.raw.size_hint()
    }
}

impl<F> DoubleEndedIterator for Iter<F>
where
    F: Flag,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        self.raw.next_back().map(F::from_raw)
    }
}

impl<F> ExactSizeIterator for Iter<F> where F: Flag {}

impl<F> FusedIterator for Iter<F> where F: Flag {}
