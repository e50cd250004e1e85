use crate::OutputFormat;
use crate::config::Config;
use crate::entry::{EntryForm, Event};
use anyhow::{Context, Result};

/// Replay widget events against a fresh entry form and print the result
pub fn entry(config: &Config, events: &[String], format: OutputFormat) -> Result<()> {
    let mut form = EntryForm::new(config.codec(), config.entry.quick_add.clone());

    for raw in events {
        let event: Event = raw
            .parse()
            .with_context(|| format!("Failed to read event '{}'", raw))?;
        form.apply(&event);
    }

    format.emit(&form.view(), |view| {
        println!("Value:     {}", view.value_text);
        println!("Formatted: {}", view.formatted);
        println!("Sign:      {}", view.sign.as_str());
        if !view.canonical {
            println!("Warning: formatted value does not match the input pattern");
        }
        if !view.quick_add.is_empty() {
            let labels: Vec<&str> = view.quick_add.iter().map(|q| q.label.as_str()).collect();
            println!("Buttons:   {}", labels.join(" | "));
        }
    })
}
