use std::cmp::Ordering;

use stout_duration::{Duration, ParseError, Unit};

use crate::cli::OutputFormat;

mod human;
mod json;

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub(crate) enum Relation {
    Less,
    Equal,
    Greater,
    Unordered,
}

impl Relation {
    pub(crate) fn between(left: Duration, right: Duration) -> Self {
        match left.partial_cmp(&right) {
            Some(Ordering::Less) => Self::Less,
            Some(Ordering::Equal) => Self::Equal,
            Some(Ordering::Greater) => Self::Greater,
            None => Self::Unordered,
        }
    }

    pub(crate) fn symbol(self) -> &'static str {
        match self {
            Self::Less => "<",
            Self::Equal => "==",
            Self::Greater => ">",
            Self::Unordered => "<>",
        }
    }
}

pub(crate) trait OutputFormatter {
    fn parsed(&self, input: &str, result: &Result<Duration, ParseError>, unit: Option<Unit>);
    fn compared(&self, left: Duration, right: Duration, relation: Relation);
    fn available(&self, path: &str, bytes: u64);
    fn usage(&self, path: &str, ratio: f64);
    fn symlinked(&self, original: &str, link: &str);
}

pub(crate) fn formatter(format: OutputFormat) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::HumanReadable => Box::new(human::HumanReadableOutput),
        OutputFormat::Json => Box::new(json::JsonOutput),
    }
}
