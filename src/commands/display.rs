use crate::OutputFormat;
use crate::config::Config;
use crate::display;
use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct FormattedDate {
    pub input: String,
    pub formatted: String,
}

/// Render an ISO date (YYYY-MM-DD) with the configured date format
pub fn date(config: &Config, value: &str, format: OutputFormat) -> Result<()> {
    let day = NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", value))?;
    let formatted = display::date(day, &config.display.date_format)?;

    let out = FormattedDate {
        input: value.to_string(),
        formatted,
    };
    format.emit(&out, |d| println!("{}", d.formatted))
}
