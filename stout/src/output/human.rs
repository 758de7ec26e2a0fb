use stout_duration::{Duration, ParseError, Unit};

use super::{OutputFormatter, Relation};

pub(crate) struct HumanReadableOutput;

impl OutputFormatter for HumanReadableOutput {
    fn parsed(&self, input: &str, result: &Result<Duration, ParseError>, unit: Option<Unit>) {
        match result {
            Ok(d) => println!("{}", format_parsed(*d, unit)),
            Err(err) => eprintln!("{input}: {err}"),
        }
    }

    fn compared(&self, left: Duration, right: Duration, relation: Relation) {
        println!("{left} {} {right}", relation.symbol());
    }

    fn available(&self, path: &str, bytes: u64) {
        println!("{path}: {} available ({bytes} bytes)", format_bytes(bytes));
    }

    fn usage(&self, path: &str, ratio: f64) {
        println!("{path}: {:.2}% used", ratio * 100.0);
    }

    fn symlinked(&self, original: &str, link: &str) {
        println!("{link} -> {original}");
    }
}

pub(crate) fn format_parsed(d: Duration, unit: Option<Unit>) -> String {
    match unit {
        Some(unit) => format!("{}{unit}", d.as_unit(unit)),
        None => d.to_string(),
    }
}

pub(crate) fn format_bytes(b: u64) -> String {
    const KIB: u64 = 1024;
    const MIB: u64 = 1024 * 1024;
    const GIB: u64 = 1024 * 1024 * 1024;
    const TIB: u64 = 1024 * GIB;

    if b >= TIB {
        return format!("{:.2}TiB", (b as f64) / (TIB as f64));
    }
    if b >= GIB {
        return format!("{:.2}GiB", (b as f64) / (GIB as f64));
    }
    if b >= MIB {
        return format!("{:.2}MiB", (b as f64) / (MIB as f64));
    }
    if b >= KIB {
        return format!("{:.2}KiB", (b as f64) / (KIB as f64));
    }

    format!("{b}B")
}
