//! A nanosecond-resolution duration value that parses from and renders to
//! compact strings such as `1.5secs`, `250ms` or `2weeks`.

mod duration;
mod error;
mod format;
mod parse;
#[cfg(feature = "serde")]
mod serde_impl;
mod unit;

pub use duration::Duration;
pub use error::{ConversionError, ParseError, ParseErrorKind, Result};
pub use parse::parse;
pub use unit::Unit;
