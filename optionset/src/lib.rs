//! A library for packing power-of-two flags into a single integer, and for
//! decomposing that integer back into the flags it contains.
//!
//! A universe of flags is a type implementing [Flag], usually declared with the
//! [flags!] macro. Every flag has a raw value which is a distinct power of two
//! (or zero for "unknown"), and a [FlagSet] is the sum of the raw values of
//! the flags it contains.
//!
//! Decomposing a set through [FlagSet::options] or [decompose] yields the flags
//! ordered by ascending raw value, which is usually the order in which they
//! were declared.
//!
//! # Examples
//!
//! ```rust
//! use optionset::FlagSet;
//!
//! optionset::flags! {
//!     #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//!     pub enum AnimalTrait: u32 {
//!         Unknown = 0,
//!         Fluffy = 1 << 0,
//!         EatsMeat = 1 << 1,
//!         EatsPlants = 1 << 2,
//!         Flying = 1 << 3,
//!         Swimming = 1 << 4,
//!         Friendly = 1 << 5,
//!         Wild = 1 << 6,
//!     }
//! }
//!
//! let cat = FlagSet::new([AnimalTrait::Fluffy, AnimalTrait::EatsMeat, AnimalTrait::Wild]);
//!
//! let names = cat.options().iter().map(|t| t.name()).collect::<Vec<_>>();
//! assert_eq!(names, vec!["Fluffy", "EatsMeat", "Wild"]);
//! ```
//!
//! # Features
//!
//! * `serde` (default) - serialize a [FlagSet] as its bare integer.

#![deny(missing_docs, rustdoc::broken_intra_doc_links)]

#[macro_use]
mod macros;

mod bits;
pub use self::bits::Bits;

mod flag;
pub use self::flag::Flag;

mod flag_set;
pub use self::flag_set::{FlagSet, Iter};

mod decompose;
pub use self::decompose::decompose;

mod error;
pub use self::error::{Error, Result};

#[cfg(feature = "serde")]
mod serde;

#[cfg(test)]
mod tests;
