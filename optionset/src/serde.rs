//! A [FlagSet] serializes as its bare integer.
//!
//! Deserialization reads the integer back verbatim, no check is done that the
//! bits correspond to declared flags. Use [FlagSet::is_valid] for that.

use ::serde::de::{Deserialize, Deserializer};
use ::serde::ser::{Serialize, Serializer};

use crate::flag::Flag;
use crate::flag_set::FlagSet;

impl<F> Serialize for FlagSet<F>
where
    F: Flag,
    F::Bits: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.bits().serialize(serializer)
    }
}

impl<'de, F> Deserialize<'de> for FlagSet<F>
where
    F: Flag,
    F::Bits: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let bits = <F::Bits as Deserialize<'de>>::deserialize(deserializer)?;
        Ok(Self::from_bits(bits))
    }
}
