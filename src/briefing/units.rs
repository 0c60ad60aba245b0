//! Unit parsers for decoded METAR string fields
//!
//! The decoder emits human-readable strings; these parsers recover
//! numeric values from them. They never pick a substitute value
//! themselves: a field that does not match the expected shape is a
//! [`ParseFailure`], and the fallback policy lives at the analyzer call
//! site where it can be asserted on separately.

use thiserror::Error;

/// A field value that did not match the shape a parser expects.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unparseable {field} value: {text:?}")]
pub struct ParseFailure {
    /// Which field failed to parse
    pub field: &'static str,
    /// The offending text
    pub text: String,
}

impl ParseFailure {
    fn new(field: &'static str, text: &str) -> Self {
        Self {
            field,
            text: text.to_string(),
        }
    }
}

/// Parse a temperature string such as `"22.0 C"` into degrees Celsius.
///
/// A trailing `C` unit marker is stripped before parsing; the marker is
/// optional.
pub fn parse_temperature(text: &str) -> Result<f64, ParseFailure> {
    let stripped = text.strip_suffix('C').unwrap_or(text).trim_end();
    stripped
        .parse::<f64>()
        .map_err(|_| ParseFailure::new("temperature", text))
}

/// Parse a wind string such as `"W at 15 knots"` into a speed.
///
/// The speed is the numeric token directly after the literal `" at "`
/// separator and before the next space; direction and gusts are ignored.
pub fn parse_wind(text: &str) -> Result<f64, ParseFailure> {
    let (_, rest) = text
        .split_once(" at ")
        .ok_or_else(|| ParseFailure::new("wind", text))?;
    let token = rest
        .split(' ')
        .next()
        .ok_or_else(|| ParseFailure::new("wind", text))?;
    token
        .parse::<f64>()
        .map_err(|_| ParseFailure::new("wind", text))
}

/// Parse a visibility string such as `"10 miles"` into statute miles.
///
/// Only a plain numeric value followed by `" miles"` parses; metric
/// visibilities and mixed numbers like `"1 1/2 miles"` are failures,
/// which the caller's fallback policy turns into the unlimited default.
pub fn parse_visibility(text: &str) -> Result<f64, ParseFailure> {
    let (value, _) = text
        .split_once(" miles")
        .ok_or_else(|| ParseFailure::new("visibility", text))?;
    value
        .parse::<f64>()
        .map_err(|_| ParseFailure::new("visibility", text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("22.0 C", 22.0)]
    #[case("-5.0 C", -5.0)]
    #[case("18.5C", 18.5)]
    #[case("7", 7.0)]
    fn test_parse_temperature_ok(#[case] text: &str, #[case] expected: f64) {
        assert_eq!(parse_temperature(text).unwrap(), expected);
    }

    #[rstest]
    #[case("missing")]
    #[case("")]
    #[case("M5 C")]
    fn test_parse_temperature_failures(#[case] text: &str) {
        let err = parse_temperature(text).unwrap_err();
        assert_eq!(err.field, "temperature");
    }

    #[rstest]
    #[case("W at 15 knots", 15.0)]
    #[case("W at 15 knots, gusting to 25 knots", 15.0)]
    #[case("variable at 4 knots", 4.0)]
    #[case("N at 8 mps", 8.0)]
    fn test_parse_wind_ok(#[case] text: &str, #[case] expected: f64) {
        assert_eq!(parse_wind(text).unwrap(), expected);
    }

    #[rstest]
    #[case("calm")]
    #[case("missing")]
    #[case("")]
    #[case("W at fast knots")]
    #[case("15 knots")]
    fn test_parse_wind_failures(#[case] text: &str) {
        assert!(parse_wind(text).is_err());
    }

    #[rstest]
    #[case("10 miles", 10.0)]
    #[case("2.5 miles", 2.5)]
    #[case("0.25 miles", 0.25)]
    fn test_parse_visibility_ok(#[case] text: &str, #[case] expected: f64) {
        assert_eq!(parse_visibility(text).unwrap(), expected);
    }

    #[rstest]
    #[case("1 1/2 miles")]
    #[case("10000 meters")]
    #[case("missing")]
    #[case("")]
    fn test_parse_visibility_failures(#[case] text: &str) {
        assert!(parse_visibility(text).is_err());
    }
}
