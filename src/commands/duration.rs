use crate::OutputFormat;
use crate::config::Config;
use crate::duration::{self, Minutes};
use anyhow::Result;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ParsedDuration {
    pub input: String,
    pub minutes: Minutes,
    pub formatted: String,
    pub signed: String,
}

/// Parse free text into minutes using the configured sign policy
pub fn parse(config: &Config, text: &str, format: OutputFormat) -> Result<()> {
    let codec = config.codec();
    let minutes = codec.parse(text);
    let parsed = ParsedDuration {
        input: text.to_string(),
        minutes,
        formatted: codec.format(minutes),
        signed: duration::format_signed(minutes),
    };

    format.emit(&parsed, |p| println!("{}", p.minutes))
}

#[derive(Debug, Serialize)]
pub struct FormattedDuration {
    pub input: String,
    pub formatted: String,
}

/// Format a raw minute count. Non-numeric input formats as an empty line.
pub fn format(value: &str, signed: bool, format: OutputFormat) -> Result<()> {
    let formatted = if signed {
        duration::parse_integer_prefix(value)
            .map(duration::format_signed)
            .unwrap_or_default()
    } else {
        duration::format_text(value)
    };

    let out = FormattedDuration {
        input: value.to_string(),
        formatted,
    };
    format.emit(&out, |f| println!("{}", f.formatted))
}
