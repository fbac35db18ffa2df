use crate::bits::{highest_power_of_two, RawIter};
use crate::Bits;

#[test]
fn test_ceil_power_of_two() {
    assert_eq!(1u32.ceil_power_of_two(), Some(1));
    assert_eq!(2u32.ceil_power_of_two(), Some(2));
    assert_eq!(3u32.ceil_power_of_two(), Some(4));
    assert_eq!(6543u32.ceil_power_of_two(), Some(8192));
    assert_eq!(8192u32.ceil_power_of_two(), Some(8192));
    assert_eq!(8193u32.ceil_power_of_two(), Some(16384));
}

#[test]
fn test_ceil_power_of_two_matches_std() {
    for v in 1..=u16::MAX {
        assert_eq!(v.ceil_power_of_two(), v.checked_next_power_of_two(), "{}", v);
    }

    let mut v = 1u64;

    while v != 0 {
        assert_eq!(v.ceil_power_of_two(), Some(v));
        assert_eq!((v | 1).ceil_power_of_two(), (v | 1).checked_next_power_of_two());
        v <<= 1;
    }
}

#[test]
fn test_ceil_power_of_two_overflow() {
    assert_eq!((1u32 << 31).ceil_power_of_two(), Some(1 << 31));
    assert_eq!(((1u32 << 31) + 1).ceil_power_of_two(), None);
    assert_eq!(u32::MAX.ceil_power_of_two(), None);
    assert_eq!(((1u64 << 63) | 4).ceil_power_of_two(), None);
    assert_eq!(u128::MAX.ceil_power_of_two(), None);
    assert_eq!(usize::MAX.ceil_power_of_two(), None);
}

#[test]
fn test_highest_power_of_two() {
    assert_eq!(highest_power_of_two(64u32), 64);
    assert_eq!(highest_power_of_two(65u32), 64);
    assert_eq!(highest_power_of_two(127u32), 64);
    assert_eq!(highest_power_of_two(1u8), 1);
    assert_eq!(highest_power_of_two(u8::MAX), 128);
    assert_eq!(highest_power_of_two(u32::MAX), 1 << 31);
    assert_eq!(highest_power_of_two(u64::MAX), 1 << 63);
    assert_eq!(highest_power_of_two(u128::MAX), 1 << 127);
}

#[test]
fn test_high_bit() {
    assert_eq!(u8::HIGH_BIT, 0x80);
    assert_eq!(u16::HIGH_BIT, 0x8000);
    assert_eq!(u32::HIGH_BIT, 0x8000_0000);
    assert_eq!(u64::HIGH_BIT, 0x8000_0000_0000_0000);
    assert_eq!(<u64 as Bits>::BITS, 64);
}

#[test]
fn test_raw_iter() {
    let it = RawIter::new(0b1001_0110u8);
    assert_eq!(it.len(), 4);
    assert_eq!(it.collect::<Vec<_>>(), vec![2, 4, 16, 128]);

    let it = RawIter::new(0b1001_0110u8);
    assert_eq!(it.rev().collect::<Vec<_>>(), vec![128, 16, 4, 2]);

    let mut it = RawIter::new(u32::MAX);
    assert_eq!(it.next(), Some(1));
    assert_eq!(it.next_back(), Some(1 << 31));
    assert_eq!(it.len(), 30);

    assert_eq!(RawIter::new(0u64).next(), None);
    assert_eq!(RawIter::new(0u64).next_back(), None);
}
