use anyhow::Result;
use clap::{Parser, Subcommand};
use horas::OutputFormat;
use horas::commands;
use horas::config;
use horas::duration::SignPolicy;

#[derive(Parser)]
#[command(name = "horas")]
#[command(about = "Hour-bank duration parsing and formatting")]
#[command(version)]
struct Cli {
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    #[arg(long, value_enum, global = true, help = "Override the configured sign policy")]
    sign_policy: Option<SignPolicy>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse duration text (e.g. "1h 30m", "1:30", "-45min") into minutes
    Parse {
        #[arg(required = true, allow_hyphen_values = true, help = "Duration text")]
        text: Vec<String>,
    },
    /// Format a minute count as text
    Format {
        #[arg(allow_hyphen_values = true, help = "Minutes (e.g. 90 or -45)")]
        value: String,
        #[arg(long, help = "Prefix the sign (zero renders as '-')")]
        signed: bool,
    },
    /// Replay entry form events (sign=-, add=30, value=90, formatted=1h)
    Entry {
        #[arg(allow_hyphen_values = true)]
        events: Vec<String>,
    },
    /// Show page visibility of a paginated menu
    Menu {
        #[arg(required = true, help = "Page names")]
        pages: Vec<String>,
        #[arg(long, help = "Initially selected page")]
        selected: Option<String>,
        #[arg(long, help = "Page to switch to (repeatable)")]
        click: Vec<String>,
    },
    /// Render a date (YYYY-MM-DD) with the configured date format
    Date {
        #[arg(help = "Date, e.g. 2024-03-07")]
        date: String,
    },
    /// Inspect or change configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    List,
    Set { key: String, value: String },
    Get { key: String },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    let cli = Cli::parse();

    // Malformed config falls back to defaults
    let loaded = config::load().unwrap_or_else(|e| {
        log::warn!("{:#}; using default configuration", e);
        config::Config::default()
    });
    let mut config = loaded.clone();
    if let Some(policy) = cli.sign_policy {
        config.codec.sign_policy = policy;
    }

    match &cli.command {
        Commands::Parse { text } => {
            commands::duration::parse(&config, &text.join(" "), cli.format)?;
        }
        Commands::Format { value, signed } => {
            commands::duration::format(value, *signed, cli.format)?;
        }
        Commands::Entry { events } => {
            commands::entry::entry(&config, events, cli.format)?;
        }
        Commands::Menu {
            pages,
            selected,
            click,
        } => {
            commands::menu::menu(pages, selected.clone(), click, cli.format)?;
        }
        Commands::Date { date } => {
            commands::display::date(&config, date, cli.format)?;
        }
        Commands::Config { action } => match action {
            ConfigAction::List => commands::config::list(&config)?,
            ConfigAction::Set { key, value } => commands::config::set(key, value, &loaded)?,
            ConfigAction::Get { key } => commands::config::get(key, &config)?,
        },
    }

    Ok(())
}
