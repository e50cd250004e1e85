//! Duration codec: free-text durations to signed minutes and back.
//!
//! Accepted input is a bare integer ("90", "-45") or a run of unit tokens
//! ("1h 30m", "1:30", "1,5h", "2 horas 5 minutos"). Output uses the
//! Portuguese long form ("1 hora 30 minutos").

use crate::error::Error;
use clap::ValueEnum;
use log::debug;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Signed count of minutes.
pub type Minutes = i64;

const MINUTES_PER_HOUR: u64 = 60;

static INTEGER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[+-]?[0-9]+$").expect("valid integer regex"));

static INTEGER_PREFIX_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*([+-]?[0-9]+)").expect("valid integer prefix regex"));

// Hour alternatives are tried first at each position, longest unit first.
static TOKEN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?P<hours>[+-]?[0-9]+(?:,[0-9]+)?)(?:horas|hora|h|:)|(?P<minutes>[+-]?[0-9]+)(?:minutos|minuto|min|m|$)",
    )
    .expect("valid token regex")
});

/// Sign of a duration. Zero counts as `Plus`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sign {
    #[serde(rename = "+")]
    Plus,
    #[serde(rename = "-")]
    Minus,
}

impl Sign {
    pub fn of(minutes: Minutes) -> Self {
        if minutes < 0 { Sign::Minus } else { Sign::Plus }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Sign::Plus => "+",
            Sign::Minus => "-",
        }
    }
}

impl FromStr for Sign {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "+" => Ok(Sign::Plus),
            "-" => Ok(Sign::Minus),
            other => Err(Error::InvalidSign(other.to_string())),
        }
    }
}

/// How a sign in front of the whole input is interpreted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum SignPolicy {
    /// A leading sign applies once to the total ("-1h30m" is -90).
    #[default]
    Aggregate,
    /// A leading sign belongs to the first token only ("-1h30m" is -30).
    PerToken,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Codec {
    pub sign_policy: SignPolicy,
}

impl Codec {
    pub fn new(sign_policy: SignPolicy) -> Self {
        Self { sign_policy }
    }

    /// Parse free text into minutes. Unrecognised input yields 0.
    pub fn parse(&self, text: &str) -> Minutes {
        let normalized: String = text.to_lowercase().split_whitespace().collect();

        if INTEGER_RE.is_match(&normalized) {
            if let Ok(value) = normalized.parse::<Minutes>() {
                return value;
            }
        }

        let total = match self.sign_policy {
            SignPolicy::PerToken => sum_tokens(&normalized),
            SignPolicy::Aggregate => {
                if let Some(body) = normalized.strip_prefix('-') {
                    sum_tokens(body).saturating_neg()
                } else {
                    sum_tokens(normalized.strip_prefix('+').unwrap_or(&normalized))
                }
            }
        };

        debug!("parsed {:?} as {} minutes ({:?})", text, total, self.sign_policy);
        total
    }

    pub fn format(&self, minutes: Minutes) -> String {
        format(minutes)
    }
}

fn sum_tokens(body: &str) -> Minutes {
    TOKEN_RE
        .captures_iter(body)
        .map(|caps| token_value(&caps))
        .fold(0, Minutes::saturating_add)
}

fn token_value(caps: &Captures<'_>) -> Minutes {
    if let Some(hours) = caps.name("hours") {
        return match hours.as_str().replace(',', ".").parse::<f64>() {
            Ok(value) => {
                let minutes = (value * MINUTES_PER_HOUR as f64).round();
                // out-of-range hours count as unparseable, like minute tokens
                if minutes.is_finite()
                    && minutes >= Minutes::MIN as f64
                    && minutes < Minutes::MAX as f64
                {
                    minutes as Minutes
                } else {
                    0
                }
            }
            Err(_) => 0,
        };
    }
    caps.name("minutes")
        .and_then(|m| m.as_str().parse::<Minutes>().ok())
        .unwrap_or(0)
}

/// Parse with the default codec.
pub fn parse(text: &str) -> Minutes {
    Codec::default().parse(text)
}

/// Format the absolute value of `minutes`. Zero formats as "".
pub fn format(minutes: Minutes) -> String {
    let total = minutes.unsigned_abs();
    let hours = total / MINUTES_PER_HOUR;
    let rest = total % MINUTES_PER_HOUR;

    let mut parts = Vec::with_capacity(2);
    if hours > 0 {
        parts.push(format!("{} {}", hours, unit(hours, "hora")));
    }
    if rest > 0 {
        parts.push(format!("{} {}", rest, unit(rest, "minuto")));
    }
    parts.join(" ")
}

fn unit(count: u64, singular: &str) -> String {
    if count == 1 {
        singular.to_string()
    } else {
        format!("{}s", singular)
    }
}

/// Format with a leading "+" or "-". Zero is rendered as a lone "-".
pub fn format_signed(minutes: Minutes) -> String {
    if minutes == 0 {
        return "-".to_string();
    }
    format!("{}{}", Sign::of(minutes).as_str(), format(minutes))
}

/// Read the integer at the start of `raw`, ignoring anything after it.
pub fn parse_integer_prefix(raw: &str) -> Option<Minutes> {
    INTEGER_PREFIX_RE
        .captures(raw)
        .and_then(|caps| caps[1].parse::<Minutes>().ok())
}

/// Format raw input text; "" when it does not start with an integer.
pub fn format_text(raw: &str) -> String {
    parse_integer_prefix(raw).map(format).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_integers() {
        assert_eq!(parse("90"), 90);
        assert_eq!(parse("-90"), -90);
        assert_eq!(parse("+15"), 15);
        assert_eq!(parse(" 1 20 "), 120);
    }

    #[test]
    fn test_parse_unit_tokens() {
        assert_eq!(parse("1h30m"), 90);
        assert_eq!(parse("1h 30min"), 90);
        assert_eq!(parse("1:30"), 90);
        assert_eq!(parse("45min"), 45);
        assert_eq!(parse("2 Horas 5 Minutos"), 125);
        assert_eq!(parse("1 hora 1 minuto"), 61);
    }

    #[test]
    fn test_parse_fractional_hours() {
        assert_eq!(parse("1,5h"), 90);
        assert_eq!(parse("0,25 horas"), 15);
        assert_eq!(parse("1,01h"), 61);
    }

    #[test]
    fn test_parse_unrecognised_is_zero() {
        assert_eq!(parse(""), 0);
        assert_eq!(parse("   "), 0);
        assert_eq!(parse("abc"), 0);
        assert_eq!(parse("-"), 0);
    }

    #[test]
    fn test_parse_ignores_trailing_text() {
        assert_eq!(parse("1h abc"), 60);
        assert_eq!(parse("30m e pouco"), 30);
    }

    #[test]
    fn test_parse_token_signs() {
        assert_eq!(parse("-45min"), -45);
        assert_eq!(parse("1h -15m"), 45);
        assert_eq!(parse("-1h30m"), -90);
        assert_eq!(parse("-1h +30m"), -90);
    }

    #[test]
    fn test_parse_per_token_policy() {
        let codec = Codec::new(SignPolicy::PerToken);
        assert_eq!(codec.parse("-1h30m"), -30);
        assert_eq!(codec.parse("-45min"), -45);
        assert_eq!(codec.parse("1h -15m"), 45);
    }

    #[test]
    fn test_parse_out_of_range_token_contributes_zero() {
        assert_eq!(parse("99999999999999999999m 5m"), 5);
    }

    #[test]
    fn test_parse_out_of_range_hours_contribute_zero() {
        assert_eq!(parse("99999999999999999999h 5m"), 5);
        assert_eq!(parse("5m -99999999999999999999,5horas"), 5);
        assert_eq!(parse("200000000000000000h"), 0);
        assert_eq!(parse("2h 200000000000000000h"), 120);
    }

    #[test]
    fn test_format_parts() {
        assert_eq!(format(90), "1 hora 30 minutos");
        assert_eq!(format(60), "1 hora");
        assert_eq!(format(45), "45 minutos");
        assert_eq!(format(0), "");
        assert_eq!(format(-90), "1 hora 30 minutos");
    }

    #[test]
    fn test_format_pluralization() {
        assert_eq!(format(1), "1 minuto");
        assert_eq!(format(2), "2 minutos");
        assert_eq!(format(120), "2 horas");
        assert_eq!(format(121), "2 horas 1 minuto");
    }

    #[test]
    fn test_format_extremes() {
        assert!(!format(Minutes::MIN).is_empty());
        assert!(!format(Minutes::MAX).is_empty());
    }

    #[test]
    fn test_format_text() {
        assert_eq!(format_text("90"), "1 hora 30 minutos");
        assert_eq!(format_text("  -61"), "1 hora 1 minuto");
        assert_eq!(format_text("90abc"), "1 hora 30 minutos");
        assert_eq!(format_text("abc"), "");
        assert_eq!(format_text(""), "");
    }

    #[test]
    fn test_format_signed() {
        assert_eq!(format_signed(0), "-");
        assert_eq!(format_signed(90), "+1 hora 30 minutos");
        assert_eq!(format_signed(-45), "-45 minutos");
    }

    #[test]
    fn test_round_trip_non_negative() {
        for d in [0, 1, 2, 59, 60, 61, 90, 119, 120, 1439, 1440, 100_000] {
            assert_eq!(parse(&format(d)), d, "round trip of {}", d);
            assert_eq!(format(parse(&format(d))), format(d));
        }
    }

    #[test]
    fn test_signed_round_trip() {
        for d in [-1441, -90, -1, 0, 1, 60, 90] {
            assert_eq!(parse(&format_signed(d)), d, "signed round trip of {}", d);
        }
    }

    #[test]
    fn test_sign_from_str() {
        assert_eq!("+".parse::<Sign>().unwrap(), Sign::Plus);
        assert_eq!("-".parse::<Sign>().unwrap(), Sign::Minus);
        assert!("x".parse::<Sign>().is_err());
        assert_eq!(Sign::of(0), Sign::Plus);
    }
}
