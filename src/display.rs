//! Filters used when rendering entries and accounts in page templates.

use crate::duration::{self, Minutes};
use crate::error::Error;
use chrono::NaiveDate;
use chrono::format::{Item, StrftimeItems};
use std::fmt::Write;

pub const DEFAULT_DATE_FORMAT: &str = "%d/%m/%Y";

/// Signed entry value, e.g. "+1 hora 30 minutos". Zero renders as "-".
pub fn entry_value(minutes: Minutes) -> String {
    duration::format_signed(minutes)
}

pub fn validate_date_format(fmt: &str) -> Result<(), Error> {
    if fmt.is_empty() {
        return Err(Error::InvalidConfig("date format is empty".to_string()));
    }
    if StrftimeItems::new(fmt).any(|item| matches!(item, Item::Error)) {
        return Err(Error::InvalidConfig(format!(
            "invalid date format '{}'",
            fmt
        )));
    }
    Ok(())
}

pub fn date(value: NaiveDate, fmt: &str) -> Result<String, Error> {
    validate_date_format(fmt)?;
    let mut out = String::new();
    write!(out, "{}", value.format(fmt))
        .map_err(|_| Error::InvalidConfig(format!("invalid date format '{}'", fmt)))?;
    Ok(out)
}

/// "Maria da Silva" -> "Maria S."; single names are kept as they are.
pub fn display_name(name: &str) -> String {
    let parts: Vec<&str> = name.split_whitespace().collect();
    match parts.as_slice() {
        [] => String::new(),
        [only] => only.to_string(),
        [first, .., last] => {
            let initial: String = last.chars().take(1).collect();
            format!("{} {}.", first, initial)
        }
    }
}

pub fn starts_with(value: impl ToString, prefix: &str) -> bool {
    value.to_string().starts_with(prefix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_value() {
        assert_eq!(entry_value(0), "-");
        assert_eq!(entry_value(61), "+1 hora 1 minuto");
        assert_eq!(entry_value(-120), "-2 horas");
    }

    #[test]
    fn test_date_default_format() {
        let day = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        assert_eq!(date(day, DEFAULT_DATE_FORMAT).unwrap(), "07/03/2024");
        assert_eq!(date(day, "%Y-%m-%d").unwrap(), "2024-03-07");
    }

    #[test]
    fn test_date_rejects_bad_format() {
        let day = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        assert!(date(day, "%Q").is_err());
        assert!(validate_date_format("").is_err());
    }

    #[test]
    fn test_display_name() {
        assert_eq!(display_name("Maria"), "Maria");
        assert_eq!(display_name("Maria da Silva"), "Maria S.");
        assert_eq!(display_name("  Ana   Souza "), "Ana S.");
        assert_eq!(display_name(""), "");
    }

    #[test]
    fn test_starts_with() {
        assert!(starts_with(-30, "-"));
        assert!(!starts_with(30, "-"));
        assert!(starts_with("/entries/new", "/entries"));
    }
}
