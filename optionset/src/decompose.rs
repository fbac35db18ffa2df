use crate::bits::{self, Bits};

/// Decompose an integer into one value per set bit, lowest bit first.
///
/// Each set bit is passed as a power of two to `from_raw`. Bits are extracted
/// from the highest to the lowest and the result is reversed, so the returned
/// values are ordered by ascending raw value.
///
/// This is what [FlagSet::options][crate::FlagSet::options] uses with
/// [Flag::from_raw][crate::Flag::from_raw], but any reconstruction function
/// works.
///
/// # Examples
///
/// ```
/// let raws = optionset::decompose(0b1010_0001u32, |raw| raw);
/// assert_eq!(raws, vec![1, 32, 128]);
///
/// let names = optionset::decompose(6u8, |raw| match raw {
///     2 => "two",
///     4 => "four",
///     _ => "unknown",
/// });
/// assert_eq!(names, vec!["two", "four"]);
///
/// assert!(optionset::decompose(0u64, |raw| raw).is_empty());
/// ```
pub fn decompose<B, T, F>(bits: B, mut from_raw: F) -> Vec<T>
where
    B: Bits,
    F: FnMut(B) -> T,
{
    if bits == B::ZERO {
        return Vec::new();
    }

    let mut out = Vec::with_capacity(bits.count_ones() as usize);
    let mut remaining = bits;

    while remaining > B::ZERO {
        let raw = bits::highest_power_of_two(remaining);
        remaining = remaining - raw;
        tracing::trace!(?raw, ?remaining, "extracted bit");
        out.push(from_raw(raw));
    }

    out.reverse();
    out
}
