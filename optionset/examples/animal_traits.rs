//! Decompose a set of animal traits.
//!
//! Run with `RUST_LOG=optionset=trace` to see every extracted bit.

use optionset::FlagSet;
use tracing_subscriber::EnvFilter;

optionset::flags! {
    /// Traits an animal might have.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum AnimalTrait: u32 {
        Unknown = 0,
        Fluffy = 1 << 0,
        EatsMeat = 1 << 1,
        EatsPlants = 1 << 2,
        Flying = 1 << 3,
        Swimming = 1 << 4,
        Friendly = 1 << 5,
        Wild = 1 << 6,
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cat = FlagSet::try_new([AnimalTrait::Fluffy, AnimalTrait::EatsMeat, AnimalTrait::Wild])?;

    println!("cat: {:?} ({:#b})", cat, cat);

    for t in cat.options() {
        println!("{}", t.name());
    }

    let json = serde_json::to_string(&cat)?;
    let back = serde_json::from_str::<FlagSet<AnimalTrait>>(&json)?;
    println!("serialized: {}", json);

    if back != cat {
        anyhow::bail!("round trip changed the set: {:?}", back);
    }

    let tame = cat.without(AnimalTrait::Wild).with(AnimalTrait::Friendly);
    println!("tame cat: {:?}", tame);

    // A bit which isn't declared decomposes into the unknown trait.
    let odd = FlagSet::<AnimalTrait>::from_bits(cat.bits() | 1 << 10);
    println!("odd: {:?}, valid: {}", odd, odd.is_valid());
    Ok(())
}
