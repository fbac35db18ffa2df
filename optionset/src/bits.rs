//! Integer plumbing for flag sets.

use std::fmt;
use std::hash::Hash;
use std::ops::{BitAnd, BitOr, Not, Shl, Shr, Sub};

/// The unsigned integer backing a [FlagSet][crate::FlagSet].
///
/// This is implemented for every unsigned primitive integer type, the width of
/// the type decides how many distinct flags a universe can declare.
///
/// # Examples
///
/// ```
/// use optionset::Bits;
///
/// assert_eq!(6543u32.ceil_power_of_two(), Some(8192));
/// assert_eq!(64u32.ceil_power_of_two(), Some(64));
/// assert_eq!(u32::HIGH_BIT, 1 << 31);
/// ```
pub trait Bits:
    Copy
    + Eq
    + Ord
    + Hash
    + fmt::Debug
    + fmt::Binary
    + fmt::LowerHex
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + Not<Output = Self>
    + Sub<Output = Self>
    + Shl<u32, Output = Self>
    + Shr<u32, Output = Self>
{
    /// Bit-pattern with no bits set.
    const ZERO: Self;
    /// The lowest bit.
    const ONE: Self;
    /// The highest bit which can be represented.
    const HIGH_BIT: Self;
    /// Number of bits in the integer.
    const BITS: u32;

    /// Test if exactly one bit is set.
    fn is_power_of_two(self) -> bool;

    /// The smallest power of two which is greater than or equal to `self`.
    ///
    /// A value which already is a power of two is its own ceiling. Returns
    /// `None` if the ceiling can't be represented, which happens if the
    /// [highest bit][Bits::HIGH_BIT] is set together with any other bit.
    /// The ceiling of zero is one.
    ///
    /// # Examples
    ///
    /// ```
    /// use optionset::Bits;
    ///
    /// assert_eq!(0u8.ceil_power_of_two(), Some(1));
    /// assert_eq!(5u8.ceil_power_of_two(), Some(8));
    /// assert_eq!(128u8.ceil_power_of_two(), Some(128));
    /// assert_eq!(129u8.ceil_power_of_two(), None);
    /// ```
    fn ceil_power_of_two(self) -> Option<Self>;

    /// Number of set bits.
    fn count_ones(self) -> u32;

    /// Trailing zeros.
    fn trailing_zeros(self) -> u32;

    /// Leading zeros.
    fn leading_zeros(self) -> u32;

    /// Addition which wraps around at the width of the integer.
    fn wrapping_add(self, other: Self) -> Self;

    /// Widen into the largest supported integer, used in error reporting.
    fn to_u128(self) -> u128;
}

macro_rules! impl_bits {
    ($ty:ty) => {
        impl Bits for $ty {
            const ZERO: Self = 0;
            const ONE: Self = 1;
            const HIGH_BIT: Self = 1 << (<$ty>::BITS - 1);
            const BITS: u32 = <$ty>::BITS;

            #[inline]
            fn is_power_of_two(self) -> bool {
                <$ty>::is_power_of_two(self)
            }

            fn ceil_power_of_two(self) -> Option<Self> {
                if self == 0 {
                    return Some(1);
                }

                // Smear the highest bit of `self - 1` into every lower bit,
                // which leaves `self` alone if it's already a power of two.
                let bits = <$ty>::BITS;
                let mut v = self - 1;
                let mut shift = 1;

                while shift < bits {
                    v |= v >> shift;
                    shift <<= 1;
                }

                v.checked_add(1)
            }

            #[inline]
            fn count_ones(self) -> u32 {
                <$ty>::count_ones(self)
            }

            #[inline]
            fn trailing_zeros(self) -> u32 {
                <$ty>::trailing_zeros(self)
            }

            #[inline]
            fn leading_zeros(self) -> u32 {
                <$ty>::leading_zeros(self)
            }

            #[inline]
            fn wrapping_add(self, other: Self) -> Self {
                <$ty>::wrapping_add(self, other)
            }

            #[inline]
            fn to_u128(self) -> u128 {
                self as u128
            }
        }
    };
}

impl_bits!(u8);
impl_bits!(u16);
impl_bits!(u32);
impl_bits!(u64);
impl_bits!(u128);
impl_bits!(usize);

/// The highest power of two contained in a non-zero `value`.
///
/// This uses the [ceiling][Bits::ceil_power_of_two] of `value`: a power of two
/// is taken whole, otherwise the highest bit is half of the ceiling.
pub(crate) fn highest_power_of_two<B>(value: B) -> B
where
    B: Bits,
{
    match value.ceil_power_of_two() {
        Some(ceil) if ceil == value => ceil,
        Some(ceil) => ceil >> 1,
        // Only possible if the highest bit is set alongside other bits.
        None => B::HIGH_BIT,
    }
}

/// An iterator over the individual bits set in an integer, lowest first.
#[derive(Clone, Copy)]
pub(crate) struct RawIter<B> {
    bits: B,
}

impl<B> RawIter<B>
where
    B: Bits,
{
    pub(crate) fn new(bits: B) -> Self {
        Self { bits }
    }
}

impl<B> Iterator for RawIter<B>
where
    B: Bits,
{
    type Item = B;

    fn next(&mut self) -> Option<Self::Item> {
        if self.bits == B::ZERO {
            return None;
        }

        let raw = B::ONE << self.bits.trailing_zeros();
        self.bits = self.bits & !raw;
        Some(raw)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.bits.count_ones() as usize;
        (len, Some(len))
    }
}

impl<B> DoubleEndedIterator for RawIter<B>
where
    B: Bits,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.bits == B::ZERO {
            return None;
        }

        let raw = B::HIGH_BIT >> self.bits.leading_zeros();
        self.bits = self.bits & !raw;
        Some(raw)
    }
}

impl<B> ExactSizeIterator for RawIter<B> where B: Bits {}
