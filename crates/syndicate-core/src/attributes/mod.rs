//! Attribute maps and their layered defaults.
//!
//! Attributes arrive as loosely-typed string pairs. They are merged in a
//! fixed order (base defaults, defaults hooks, surface defaults, surface
//! extensions, caller values) and only then converted into a typed
//! [`RequestConfig`](crate::RequestConfig) by the [`AttributeResolver`].

mod defaults;
mod resolver;
mod set;

pub use defaults::{BaseDefaults, CacheScope, Surface};
pub use resolver::{AttributeResolver, LOCAL_PREFIX};
pub use set::AttributeSet;
