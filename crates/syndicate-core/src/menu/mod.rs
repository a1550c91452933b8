//! Canonical menu records and the normalizer that produces them.

mod item;
mod normalize;

pub use item::{DietaryFlag, MenuItem};
pub use normalize::MenuNormalizer;
