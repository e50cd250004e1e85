pub mod commands;
pub mod config;
pub mod display;
pub mod duration;
pub mod entry;
pub mod error;
pub mod menu;

use clap::ValueEnum;
use serde::Serialize;

pub use duration::{Codec, Minutes, Sign, SignPolicy, format, format_signed, parse};

#[derive(Clone, Copy, ValueEnum, Debug, Default, Serialize)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    /// Print `value` as pretty JSON, or run `text` for human output.
    pub fn emit<T, F>(self, value: &T, text: F) -> anyhow::Result<()>
    where
        T: Serialize,
        F: FnOnce(&T),
    {
        match self {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(value)?);
            }
            OutputFormat::Text => text(value),
        }
        Ok(())
    }
}
