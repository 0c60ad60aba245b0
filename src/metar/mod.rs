//! METAR report decoder
//!
//! Converts a raw METAR string into a [`DecodedObservation`] with
//! human-readable string fields. The decoder walks the report token by
//! token in the order the format prescribes: station, time, wind,
//! visibility, present weather, sky cover, temperature/dew point and
//! altimeter. Remarks (`RMK` and everything after it) are ignored.

use chrono::{Datelike, TimeZone, Utc};
use thiserror::Error;

use crate::models::DecodedObservation;

/// Raised when a raw report cannot be decoded at all.
///
/// Partial reports still decode; only a missing station or time group is
/// fatal, matching the behavior of the grammar decoder this replaces.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    /// The report text was empty
    #[error("empty METAR report")]
    Empty,
    /// No valid station identifier at the start of the report
    #[error("missing or invalid station identifier")]
    Station,
    /// No `ddhhmmZ` observation time group after the station
    #[error("missing observation time group")]
    Time,
}

/// Placeholder for measurement groups absent from the report.
const MISSING: &str = "missing";

/// Decode a single raw METAR report.
pub fn decode(raw: &str) -> Result<DecodedObservation, DecodeError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(DecodeError::Empty);
    }

    let parts: Vec<&str> = raw.split_whitespace().collect();
    let mut i = 0;

    if matches!(parts.first(), Some(&"METAR" | &"SPECI")) {
        i += 1;
    }

    let station = parts
        .get(i)
        .filter(|token| is_station(token))
        .ok_or(DecodeError::Station)?
        .to_string();
    i += 1;

    let time = match parts.get(i) {
        Some(token) if is_time_group(token) => {
            i += 1;
            decode_time(token)
        }
        _ => return Err(DecodeError::Time),
    };

    while matches!(parts.get(i), Some(&"COR" | &"AUTO" | &"NIL")) {
        i += 1;
    }

    let mut wind = MISSING.to_string();
    if let Some(text) = parts.get(i).and_then(|token| decode_wind(token)) {
        wind = text;
        i += 1;
        // Variable direction group like 200V250 carries no speed; skip it.
        if parts.get(i).is_some_and(|token| is_variable_group(token)) {
            i += 1;
        }
    }

    let visibility = decode_visibility(&parts, &mut i).unwrap_or_else(|| MISSING.to_string());

    let mut weather = Vec::new();
    let mut sky = Vec::new();
    while let Some(token) = parts.get(i) {
        if *token == "RMK"
            || decode_temperature_group(token).is_some()
            || decode_pressure(token).is_some()
        {
            break;
        }
        if let Some(text) = decode_weather_group(token) {
            weather.push(text);
        } else if let Some(text) = decode_sky_layer(token) {
            sky.push(text);
        }
        // Anything else (runway visual range, wind shear groups) is
        // skipped so the layers after it still decode.
        i += 1;
    }

    let mut temperature = MISSING.to_string();
    let mut dew_point = MISSING.to_string();
    let mut pressure = MISSING.to_string();
    let mut seen_temperature = false;
    while let Some(token) = parts.get(i) {
        if *token == "RMK" {
            break;
        }
        if !seen_temperature {
            if let Some((temp, dew)) = decode_temperature_group(token) {
                temperature = temp;
                dew_point = dew;
                seen_temperature = true;
                i += 1;
                continue;
            }
        }
        if let Some(text) = decode_pressure(token) {
            pressure = text;
        }
        i += 1;
    }

    Ok(DecodedObservation {
        station,
        time,
        temperature,
        dew_point,
        wind,
        visibility,
        pressure,
        weather,
        sky,
        raw: raw.to_string(),
    })
}

fn is_station(token: &str) -> bool {
    token.len() == 4
        && token.chars().all(|c| c.is_ascii_alphanumeric())
        && token.chars().next().is_some_and(|c| c.is_ascii_alphabetic())
}

fn is_time_group(token: &str) -> bool {
    token.len() == 7
        && token.ends_with('Z')
        && token[..6].chars().all(|c| c.is_ascii_digit())
}

fn is_variable_group(token: &str) -> bool {
    token.len() == 7
        && token.as_bytes()[3] == b'V'
        && token[..3].chars().all(|c| c.is_ascii_digit())
        && token[4..].chars().all(|c| c.is_ascii_digit())
}

/// Reconstruct a full timestamp from the `ddhhmmZ` group.
///
/// The report only carries the day of the month, so the year and month
/// come from the current clock; a day greater than today's means the
/// report belongs to the previous month.
fn decode_time(token: &str) -> String {
    let day: u32 = token[0..2].parse().unwrap_or(0);
    let hour: u32 = token[2..4].parse().unwrap_or(0);
    let minute: u32 = token[4..6].parse().unwrap_or(0);

    let now = Utc::now();
    let mut year = now.year();
    let mut month = now.month();
    if day > now.day() {
        if month == 1 {
            month = 12;
            year -= 1;
        } else {
            month -= 1;
        }
    }

    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .map_or_else(
            || format!("day {day}, {hour:02}:{minute:02}Z"),
            |timestamp| timestamp.format("%Y-%m-%d %H:%M:%SZ").to_string(),
        )
}

fn decode_wind(token: &str) -> Option<String> {
    let (body, unit) = if let Some(body) = token.strip_suffix("KT") {
        (body, "knots")
    } else if let Some(body) = token.strip_suffix("MPS") {
        (body, "mps")
    } else {
        return None;
    };

    if body.len() < 5 {
        return None;
    }
    let (direction_raw, rest) = body.split_at(3);
    let (speed_raw, gust_raw) = match rest.split_once('G') {
        Some((speed, gust)) => (speed, Some(gust)),
        None => (rest, None),
    };
    let speed: u32 = speed_raw.parse().ok()?;

    let mut text = if direction_raw == "VRB" {
        format!("variable at {speed} {unit}")
    } else {
        let direction: u32 = direction_raw.parse().ok()?;
        if direction == 0 && speed == 0 {
            return Some("calm".to_string());
        }
        format!("{} at {speed} {unit}", compass_point(direction))
    };

    if let Some(gust_raw) = gust_raw {
        let gust: u32 = gust_raw.parse().ok()?;
        text.push_str(&format!(", gusting to {gust} {unit}"));
    }
    Some(text)
}

/// 16-point compass label for a wind direction in degrees.
fn compass_point(degrees: u32) -> &'static str {
    match degrees % 360 {
        0..=11 | 349..=359 => "N",
        12..=33 => "NNE",
        34..=56 => "NE",
        57..=78 => "ENE",
        79..=101 => "E",
        102..=123 => "ESE",
        124..=146 => "SE",
        147..=168 => "SSE",
        169..=191 => "S",
        192..=213 => "SSW",
        214..=236 => "SW",
        237..=258 => "WSW",
        259..=281 => "W",
        282..=303 => "WNW",
        304..=326 => "NW",
        _ => "NNW",
    }
}

fn decode_visibility(parts: &[&str], i: &mut usize) -> Option<String> {
    let token = *parts.get(*i)?;

    // CAVOK and 9999 both mean 10 km or better; kept in meters so the
    // statute-mile parser downstream falls back to its unlimited default.
    if token == "CAVOK" || token == "9999" {
        *i += 1;
        return Some("10000 meters".to_string());
    }

    if let Some(body) = token.strip_suffix("SM") {
        *i += 1;
        return Some(format!("{body} miles"));
    }

    if !token.is_empty() && token.chars().all(|c| c.is_ascii_digit()) {
        // Mixed-number statute miles arrive as two tokens: "1 1/2SM".
        if let Some(fraction) = parts
            .get(*i + 1)
            .and_then(|next| next.strip_suffix("SM"))
            .filter(|body| body.contains('/'))
        {
            let text = format!("{token} {fraction} miles");
            *i += 2;
            return Some(text);
        }
        if token.len() == 4 {
            let text = format!("{token} meters");
            *i += 1;
            return Some(text);
        }
    }

    None
}

fn decode_weather_group(token: &str) -> Option<String> {
    let mut rest = token;

    let intensity = if let Some(stripped) = rest.strip_prefix('-') {
        rest = stripped;
        Some("light")
    } else if let Some(stripped) = rest.strip_prefix('+') {
        rest = stripped;
        Some("heavy")
    } else {
        None
    };

    let vicinity = if let Some(stripped) = rest.strip_prefix("VC") {
        rest = stripped;
        true
    } else {
        false
    };

    // +FC is the coded form of a tornado or waterspout.
    if rest == "FC" {
        let text = if intensity == Some("heavy") {
            "tornado"
        } else {
            "funnel cloud"
        };
        return Some(text.to_string());
    }

    if rest.is_empty() || rest.len() % 2 != 0 {
        return None;
    }

    let mut words = Vec::new();
    while !rest.is_empty() {
        let (code, remainder) = rest.split_at(2);
        words.push(phenomenon_word(code)?);
        rest = remainder;
    }

    let mut text = words.join(" ");
    if let Some(prefix) = intensity {
        text = format!("{prefix} {text}");
    }
    if vicinity {
        text.push_str(" in the vicinity");
    }
    Some(text)
}

fn phenomenon_word(code: &str) -> Option<&'static str> {
    let word = match code {
        // descriptors
        "TS" => "thunderstorm",
        "SH" => "showers",
        "FZ" => "freezing",
        "MI" => "shallow",
        "BC" => "patches of",
        "PR" => "partial",
        "BL" => "blowing",
        "DR" => "drifting",
        // precipitation
        "RA" => "rain",
        "DZ" => "drizzle",
        "SN" => "snow",
        "SG" => "snow grains",
        "IC" => "ice crystals",
        "PL" => "ice pellets",
        "GR" => "hail",
        "GS" => "small hail",
        "UP" => "precipitation",
        // obscuration
        "FG" => "fog",
        "BR" => "mist",
        "HZ" => "haze",
        "FU" => "smoke",
        "DU" => "dust",
        "SA" => "sand",
        "VA" => "volcanic ash",
        // other
        "SQ" => "squalls",
        "PO" => "dust whirls",
        "DS" => "duststorm",
        "SS" => "sandstorm",
        _ => return None,
    };
    Some(word)
}

fn decode_sky_layer(token: &str) -> Option<String> {
    match token {
        "SKC" | "CLR" => return Some("clear".to_string()),
        "NSC" | "NCD" => return Some("no significant clouds".to_string()),
        _ => {}
    }

    if let Some(rest) = token.strip_prefix("VV") {
        let altitude: u32 = rest.get(..3)?.parse().ok()?;
        return Some(format!(
            "indefinite ceiling, vertical visibility {} feet",
            altitude * 100
        ));
    }

    if token.len() < 6 {
        return None;
    }
    let (cover, rest) = token.split_at(3);
    let cover_word = match cover {
        "FEW" => "a few clouds",
        "SCT" => "scattered clouds",
        "BKN" => "broken clouds",
        "OVC" => "overcast",
        _ => return None,
    };
    let altitude: u32 = rest.get(..3)?.parse().ok()?;
    let mut text = format!("{cover_word} at {} feet", altitude * 100);
    if rest.ends_with("CB") {
        text.push_str(" (cumulonimbus)");
    } else if rest.ends_with("TCU") {
        text.push_str(" (towering cumulus)");
    }
    Some(text)
}

fn decode_temperature_group(token: &str) -> Option<(String, String)> {
    if token.len() > 7 || !token.contains('/') {
        return None;
    }
    let (temp_raw, dew_raw) = token.split_once('/')?;
    let temperature = decode_celsius(temp_raw);
    let dew_point = decode_celsius(dew_raw);
    if temperature.is_none() && dew_point.is_none() {
        return None;
    }
    Some((
        temperature.unwrap_or_else(|| MISSING.to_string()),
        dew_point.unwrap_or_else(|| MISSING.to_string()),
    ))
}

fn decode_celsius(raw: &str) -> Option<String> {
    if raw.is_empty() {
        return None;
    }
    let (negative, digits) = match raw.strip_prefix('M') {
        Some(digits) => (true, digits),
        None => (false, raw),
    };
    let value: f64 = digits.parse().ok()?;
    let value = if negative { -value } else { value };
    Some(format!("{value:.1} C"))
}

fn decode_pressure(token: &str) -> Option<String> {
    if let Some(digits) = token.strip_prefix('A') {
        if digits.len() == 4 && digits.chars().all(|c| c.is_ascii_digit()) {
            let inches: f64 = digits.parse().ok()?;
            return Some(format!("{:.2} inches", inches / 100.0));
        }
    }
    if let Some(digits) = token.strip_prefix('Q') {
        if digits.len() == 4 && digits.chars().all(|c| c.is_ascii_digit()) {
            let millibars: f64 = digits.parse().ok()?;
            return Some(format!("{millibars:.1} mb"));
        }
    }
    None
}
