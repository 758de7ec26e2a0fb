use std::num::ParseFloatError;

pub type Result<T> = std::result::Result<T, ParseError>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("invalid duration number '{literal}': {source}")]
    InvalidNumber {
        literal: String,
        #[source]
        source: ParseFloatError,
    },

    #[error("unknown duration unit '{0}'")]
    UnknownUnit(String),

    #[error("invalid duration '{0}'")]
    InvalidFormat(String),
}

impl ParseError {
    #[must_use]
    pub fn kind(&self) -> ParseErrorKind {
        match self {
            Self::InvalidNumber { .. } => ParseErrorKind::InvalidNumber,
            Self::UnknownUnit(_) => ParseErrorKind::UnknownUnit,
            Self::InvalidFormat(_) => ParseErrorKind::InvalidFormat,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum ParseErrorKind {
    InvalidNumber,
    UnknownUnit,
    InvalidFormat,
}

/// Returned when a [`crate::Duration`] has no `std::time::Duration` equivalent.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
#[error("duration of {nanos}ns is negative or not finite")]
pub struct ConversionError {
    pub nanos: f64,
}
