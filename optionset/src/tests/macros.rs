use super::Enum;
use crate::{Flag, FlagSet};

crate::flags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Wide: u64 {
        Unknown = 0,
        Low = 1,
        High = 1 << 63,
    }
}

crate::flags! {
    #[derive(Debug, PartialEq)]
    enum Nothing: u8 {
        Unknown = 0
    }
}

#[test]
fn test_raw_value() {
    assert_eq!(Enum::None.raw_value(), 0);
    assert_eq!(Enum::Foo.raw_value(), 1);
    assert_eq!(Enum::Ee.raw_value(), 265);
    assert_eq!(Enum::J.raw_value(), 8192);
    assert_eq!(Wide::High.raw_value(), 1 << 63);
}

#[test]
fn test_from_raw() {
    assert_eq!(Enum::from_raw(0), Enum::None);
    assert_eq!(Enum::from_raw(2), Enum::Foos);
    assert_eq!(Enum::from_raw(256), Enum::None);
    assert_eq!(Enum::from_raw(1 << 31), Enum::None);
    assert_eq!(Wide::from_raw(1 << 63), Wide::High);
    assert_eq!(Wide::from_raw(2), Wide::Unknown);
    assert_eq!(Nothing::from_raw(1), Nothing::Unknown);
}

#[test]
fn test_all_and_names() {
    assert_eq!(Enum::ALL.len(), 14);
    assert_eq!(Enum::ALL.first(), Some(&Enum::Foo));
    assert_eq!(Enum::ALL.last(), Some(&Enum::J));
    assert!(Nothing::ALL.is_empty());

    assert_eq!(Enum::None.name(), "None");
    assert_eq!(Enum::Fooz.name(), "Fooz");
    assert_eq!(Wide::High.name(), "High");
}

#[test]
fn test_flag_set_macro() {
    let set: FlagSet<Wide> = crate::flag_set![Wide::High, Wide::Low];
    assert_eq!(set.bits(), (1 << 63) | 1);
    assert_eq!(set.options(), vec![Wide::Low, Wide::High]);

    let set: FlagSet<Wide> = crate::flag_set![];
    assert!(set.is_empty());
    assert!(set.options().is_empty());
}
