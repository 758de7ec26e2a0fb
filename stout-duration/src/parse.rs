use std::str::FromStr;

use crate::duration::Duration;
use crate::error::{ParseError, Result};
use crate::unit::Unit;

/// Parses a duration such as `10secs`, `1.5hrs` or `250ms`.
///
/// The numeric literal is the longest prefix made of ASCII digits and `.`;
/// everything after it must be exactly one of the unit suffixes. A string
/// made only of digits and dots (including the empty string) has no unit and
/// is rejected as [`ParseError::InvalidFormat`].
pub fn parse(input: &str) -> Result<Duration> {
    // Negative durations are not supported; a leading '-' ends the literal.
    let Some(number_end) = input.find(|ch: char| !(ch.is_ascii_digit() || ch == '.')) else {
        return Err(ParseError::InvalidFormat(input.to_string()));
    };

    let (literal, suffix) = input.split_at(number_end);
    let magnitude: f64 = literal
        .parse()
        .map_err(|source| ParseError::InvalidNumber {
            literal: literal.to_string(),
            source,
        })?;

    let unit: Unit = suffix
        .parse()
        .map_err(|_| ParseError::UnknownUnit(suffix.to_string()))?;

    Ok(Duration::new(magnitude, unit))
}

impl Duration {
    pub fn parse(input: &str) -> Result<Self> {
        parse(input)
    }
}

impl FromStr for Duration {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self> {
        parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParseErrorKind;

    fn ok(input: &str) -> Duration {
        match parse(input) {
            Ok(d) => d,
            Err(err) => panic!("expected '{input}' to parse, got: {err}"),
        }
    }

    #[test]
    fn parses_every_unit_suffix() {
        for unit in Unit::ALL {
            for magnitude in [0.5_f64, 1.0, 7.25, 42.0, 1000.0] {
                let input = format!("{magnitude}{unit}");
                let d = ok(&input);
                assert_eq!(d.ns(), magnitude * unit.nanos() as f64, "{input}");
                assert_eq!(d, Duration::new(magnitude, unit), "{input}");
            }
        }
    }

    #[test]
    fn parses_fractional_and_zero_values() {
        assert_eq!(ok("0ns").ns(), 0.0);
        assert_eq!(ok("1.5secs").secs(), 1.5);
        assert_eq!(ok("1.5secs").ns(), 1_500_000_000.0);
        assert_eq!(ok("100days").ns(), 100.0 * 86_400.0 * 1e9);
        assert_eq!(ok(".5ms").us(), 500.0);
        assert_eq!(ok("3.hrs").hrs(), 3.0);
    }

    #[test]
    fn bare_number_is_invalid_format() {
        assert_eq!(parse("10"), Err(ParseError::InvalidFormat("10".to_string())));
        assert_eq!(
            parse("1.25"),
            Err(ParseError::InvalidFormat("1.25".to_string()))
        );
        assert_eq!(parse(""), Err(ParseError::InvalidFormat(String::new())));
    }

    #[test]
    fn unknown_suffix_is_matched_as_a_whole() {
        assert_eq!(
            parse("10xyz"),
            Err(ParseError::UnknownUnit("xyz".to_string()))
        );
        assert_eq!(
            parse("10secs5"),
            Err(ParseError::UnknownUnit("secs5".to_string()))
        );
        assert_eq!(
            parse("10 secs"),
            Err(ParseError::UnknownUnit(" secs".to_string()))
        );
        assert_eq!(
            parse("10SECS"),
            Err(ParseError::UnknownUnit("SECS".to_string()))
        );
        assert_eq!(parse("10s"), Err(ParseError::UnknownUnit("s".to_string())));
    }

    #[test]
    fn malformed_literal_is_invalid_number() {
        for input in ["abcns", "ns", "1.2.3secs", ".ms", "-5secs"] {
            let err = match parse(input) {
                Ok(d) => panic!("expected '{input}' to fail, got {d:?}"),
                Err(err) => err,
            };
            assert_eq!(err.kind(), ParseErrorKind::InvalidNumber, "{input}");
        }
    }

    #[test]
    fn from_str_matches_parse() {
        assert_eq!("2weeks".parse::<Duration>(), parse("2weeks"));
        assert_eq!(Duration::parse("2weeks"), Ok(Duration::from_weeks(2.0)));
    }
}
