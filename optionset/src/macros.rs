/// Declare a universe of flags as a fieldless enum.
///
/// The first variant must have the value `0`, it is what
/// [Flag::from_raw][crate::Flag::from_raw] produces for raw values which don't
/// match any other variant. Every other variant should be a distinct power of
/// two.
///
/// Besides the [Flag][crate::Flag] implementation this generates:
/// * `ALL`, every declared flag except the zero variant in declaration order.
/// * `name()`, the identifier the flag was declared with.
///
/// # Examples
///
/// ```
/// use optionset::{Flag, FlagSet};
///
/// optionset::flags! {
///     /// Traits an animal might have.
///     #[derive(Debug, Clone, Copy, PartialEq, Eq)]
///     pub enum AnimalTrait: u32 {
///         Unknown = 0,
///         Fluffy = 1 << 0,
///         EatsMeat = 1 << 1,
///         EatsPlants = 1 << 2,
///     }
/// }
///
/// assert_eq!(AnimalTrait::EatsMeat.raw_value(), 2);
/// assert_eq!(AnimalTrait::from_raw(4), AnimalTrait::EatsPlants);
/// assert_eq!(AnimalTrait::from_raw(8), AnimalTrait::Unknown);
/// assert_eq!(AnimalTrait::EatsMeat.name(), "EatsMeat");
///
/// let all = FlagSet::new(AnimalTrait::ALL.iter().copied());
/// assert_eq!(all.bits(), 0b111);
/// ```
#[macro_export]
macro_rules! flags {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident: $bits:ident {
            $(#[$unknown_meta:meta])*
            $unknown:ident = 0
            $(,
                $(#[$variant_meta:meta])*
                $variant:ident = $value:expr
            )*
            $(,)?
        }
    ) => {
        $(#[$meta])*
        #[repr($bits)]
        $vis enum $name {
            $(#[$unknown_meta])*
            $unknown = 0,
            $(
                $(#[$variant_meta])*
                $variant = $value,
            )*
        }

        impl $name {
            /// Every declared flag in declaration order.
            #[allow(dead_code)]
            pub const ALL: &'static [Self] = &[$(Self::$variant,)*];

            /// The identifier the flag was declared with.
            #[allow(dead_code)]
            pub fn name(&self) -> &'static str {
                match self {
                    Self::$unknown => stringify!($unknown),
                    $(Self::$variant => stringify!($variant),)*
                }
            }
        }

        impl $crate::Flag for $name {
            type Bits = $bits;

            fn raw_value(&self) -> $bits {
                match self {
                    Self::$unknown => 0,
                    $(Self::$variant => Self::$variant as $bits,)*
                }
            }

            fn from_raw(raw: $bits) -> Self {
                match raw {
                    $(_ if raw == Self::$variant as $bits => Self::$variant,)*
                    _ => Self::$unknown,
                }
            }
        }
    };
}

/// Construct a flag set with the given flags, see [FlagSet::new][crate::FlagSet::new].
///
/// # Examples
///
/// ```
/// optionset::flags! {
///     #[derive(Debug, PartialEq)]
///     enum Animal: u8 { Unknown = 0, Fluffy = 1, Wild = 64 }
/// }
///
/// let set: optionset::FlagSet<Animal> = optionset::flag_set![Animal::Wild, Animal::Fluffy];
/// assert_eq!(set.bits(), 65);
///
/// let empty: optionset::FlagSet<Animal> = optionset::flag_set![];
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! flag_set {
    ($($flag:expr),* $(,)?) => {
        $crate::FlagSet::new([$($flag,)*])
    };
}
