//! A set container for values that can only be compared for equality.
//!
//! [`ValSet`] requires neither `Hash` nor `Ord` on its elements: membership is tested by a
//! linear scan over a contiguous buffer that is doubled whenever it fills up.
//! Union, intersection and symmetric difference are exposed both as methods and as the
//! `+`, `*` and `/` operators.

mod error;
mod ops;
pub mod params;
mod val_set;

pub use error::SetError;
pub use val_set::ValSet;
