//! Feed source abstraction.

mod traits;

pub use traits::MenuFeed;
