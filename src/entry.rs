//! State model behind the `entry-form` widget.
//!
//! The widget has two inputs (the raw minute count and its formatted text),
//! a +/- toggle and a row of quick-add buttons. Every change funnels into a
//! single signed `value`; both inputs and the toggle are derived from it.

use crate::duration::{self, Codec, Minutes, Sign};
use crate::error::Error;
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::str::FromStr;

/// Advisory pattern set on the formatted input.
pub const FORMATTED_PATTERN: &str = r"^(\d+ (horas?|minutos?)(\s|$))+";

// Browsers anchor `pattern` attributes at both ends.
static FORMATTED_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!("^(?:{})$", FORMATTED_PATTERN)).expect("valid formatted pattern")
});

/// Whether `text` passes the formatted input's pattern. Empty input is
/// not pattern-checked, same as in the browser.
pub fn is_canonical(text: &str) -> bool {
    text.is_empty() || FORMATTED_RE.is_match(text)
}

/// One user interaction with the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The +/- toggle changed.
    Sign(Sign),
    /// A quick-add button was pressed.
    Add(Minutes),
    /// The raw minute input changed.
    Value(String),
    /// The formatted input changed.
    Formatted(String),
}

impl FromStr for Event {
    type Err = Error;

    /// Parses `sign=-`, `add=30`, `value=90` or `formatted=1h 30m`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (key, value) = s
            .split_once('=')
            .ok_or_else(|| Error::InvalidEvent(s.to_string()))?;

        match key.trim() {
            "sign" => Ok(Event::Sign(value.parse()?)),
            "add" => value
                .trim()
                .parse::<Minutes>()
                .map(Event::Add)
                .map_err(|_| Error::InvalidAmount(value.to_string())),
            "value" => Ok(Event::Value(value.to_string())),
            "formatted" => Ok(Event::Formatted(value.to_string())),
            _ => Err(Error::InvalidEvent(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuickAdd {
    pub minutes: Minutes,
    pub label: String,
}

/// Snapshot of everything the widget displays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryView {
    pub value: Minutes,
    pub value_text: String,
    pub formatted: String,
    pub sign: Sign,
    pub canonical: bool,
    pub quick_add: Vec<QuickAdd>,
}

#[derive(Debug, Clone)]
pub struct EntryForm {
    value: Minutes,
    codec: Codec,
    quick_add: Vec<Minutes>,
}

impl Default for EntryForm {
    fn default() -> Self {
        Self::new(Codec::default(), Vec::new())
    }
}

impl EntryForm {
    pub fn new(codec: Codec, quick_add: Vec<Minutes>) -> Self {
        Self {
            value: 0,
            codec,
            quick_add,
        }
    }

    pub fn value(&self) -> Minutes {
        self.value
    }

    pub fn sign(&self) -> Sign {
        Sign::of(self.value)
    }

    /// Set the toggle. Idempotent: choosing "-" twice stays negative.
    pub fn set_sign(&mut self, sign: Sign) {
        self.value = match sign {
            Sign::Plus => self.value.saturating_abs(),
            Sign::Minus => self.value.saturating_abs().saturating_neg(),
        };
    }

    /// Grow the magnitude by `minutes` in the current direction.
    pub fn add(&mut self, minutes: Minutes) {
        let step = if self.value < 0 {
            minutes.saturating_neg()
        } else {
            minutes
        };
        self.value = self.value.saturating_add(step);
    }

    /// Raw input changed. Text without a leading integer is ignored.
    pub fn set_raw(&mut self, text: &str) {
        match duration::parse_integer_prefix(text) {
            Some(value) => self.value = value,
            None => debug!("ignoring non-numeric raw input {:?}", text),
        }
    }

    /// Formatted input changed.
    pub fn set_formatted(&mut self, text: &str) {
        self.value = self.codec.parse(text);
    }

    pub fn apply(&mut self, event: &Event) {
        match event {
            Event::Sign(sign) => self.set_sign(*sign),
            Event::Add(minutes) => self.add(*minutes),
            Event::Value(text) => self.set_raw(text),
            Event::Formatted(text) => self.set_formatted(text),
        }
        debug!("entry form: {:?} -> value {}", event, self.value);
    }

    pub fn value_text(&self) -> String {
        self.value.to_string()
    }

    pub fn formatted_text(&self) -> String {
        self.codec.format(self.value)
    }

    pub fn view(&self) -> EntryView {
        let formatted = self.formatted_text();
        EntryView {
            value: self.value,
            value_text: self.value_text(),
            canonical: is_canonical(&formatted),
            formatted,
            sign: self.sign(),
            quick_add: self
                .quick_add
                .iter()
                .map(|&minutes| QuickAdd {
                    minutes,
                    label: duration::format_signed(minutes),
                })
                .collect(),
        }
    }
}
