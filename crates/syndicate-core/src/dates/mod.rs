//! Date handling for event-style menu items.
//!
//! - [`php_format`]: `date()`-style format strings on top of chrono
//! - [`parse`]: lenient parsing of feed timestamps
//! - [`range`]: the humanized start/end markup

mod parse;
pub mod php_format;
mod range;

pub use parse::parse_event_time;
pub use php_format::format_datetime;
pub use range::{DateRangeFormatter, HUMAN_DATE_FORMAT};
