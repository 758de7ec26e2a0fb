use serde::Serialize;
use std::io::Write as _;

use stout_duration::{Duration, ParseError, Unit};

use super::{OutputFormatter, Relation};

pub(crate) struct JsonOutput;

impl OutputFormatter for JsonOutput {
    fn parsed(&self, input: &str, result: &Result<Duration, ParseError>, unit: Option<Unit>) {
        match result {
            Ok(d) => emit_json_line(&build_parse_line(input, *d, unit)),
            Err(err) => emit_json_line(&JsonErrorLine {
                kind: "error",
                input,
                error_kind: err.kind().to_string(),
                message: err.to_string(),
            }),
        }
    }

    fn compared(&self, left: Duration, right: Duration, relation: Relation) {
        emit_json_line(&JsonCompareLine {
            kind: "compare",
            left,
            right,
            relation: relation.to_string(),
        });
    }

    fn available(&self, path: &str, bytes: u64) {
        emit_json_line(&JsonAvailableLine {
            kind: "available",
            path,
            bytes,
        });
    }

    fn usage(&self, path: &str, ratio: f64) {
        emit_json_line(&JsonUsageLine {
            kind: "usage",
            path,
            ratio,
        });
    }

    fn symlinked(&self, original: &str, link: &str) {
        emit_json_line(&JsonSymlinkLine {
            kind: "symlink",
            original,
            link,
        });
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct JsonParseLine<'a> {
    pub kind: &'static str,
    pub input: &'a str,
    pub nanoseconds: f64,
    pub display: String,
    pub unit: &'static str,
    pub value: f64,
}

#[derive(Debug, Serialize)]
pub(crate) struct JsonErrorLine<'a> {
    pub kind: &'static str,
    pub input: &'a str,
    pub error_kind: String,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct JsonCompareLine {
    pub kind: &'static str,
    pub left: Duration,
    pub right: Duration,
    pub relation: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct JsonAvailableLine<'a> {
    pub kind: &'static str,
    pub path: &'a str,
    pub bytes: u64,
}

#[derive(Debug, Serialize)]
pub(crate) struct JsonUsageLine<'a> {
    pub kind: &'static str,
    pub path: &'a str,
    pub ratio: f64,
}

#[derive(Debug, Serialize)]
pub(crate) struct JsonSymlinkLine<'a> {
    pub kind: &'static str,
    pub original: &'a str,
    pub link: &'a str,
}

pub(crate) fn build_parse_line(input: &str, d: Duration, unit: Option<Unit>) -> JsonParseLine<'_> {
    let unit = unit.unwrap_or_else(|| d.display_unit());
    JsonParseLine {
        kind: "parse",
        input,
        nanoseconds: d.ns(),
        display: d.to_string(),
        unit: unit.suffix(),
        value: d.as_unit(unit),
    }
}

fn emit_json_line<T: Serialize>(line: &T) {
    let mut out = std::io::stdout().lock();
    if serde_json::to_writer(&mut out, line).is_ok() {
        let _ = writeln!(out);
    }
}
