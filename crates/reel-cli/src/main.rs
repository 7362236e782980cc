use anyhow::Result;
use clap::Parser;
use std::convert::Infallible;
use std::path::PathBuf;

mod commands;
mod config;

use config::{Config, OutputFormat};

#[derive(Debug, Parser)]
#[command(name = "reel", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format for records (default: from config, else text)
    #[arg(long, global = true, value_enum)]
    output: Option<OutputFormat>,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Create a movie record with a freshly generated id
    ///
    /// Any field left out takes its empty default: "" for text, 0 for
    /// numbers, no cast members.
    New {
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        director: Option<String>,
        #[arg(long)]
        year: Option<i32>,
        /// Any genre text; the factory does not restrict genres
        #[arg(long)]
        genre: Option<String>,
        #[arg(long)]
        rating: Option<f64>,
        /// Cast member (repeatable, kept in order)
        #[arg(long = "cast")]
        cast: Vec<String>,
    },
    /// Pretty-print a JSON movie record (`-` reads stdin)
    Show {
        input: PathBuf,
    },
    /// Run the accessor and validation helpers on a JSON value
    ///
    /// Reports title, year, classic status, keys and property count.
    /// Invalid or missing fields fall back to empty values and emit a
    /// diagnostic.
    Inspect {
        input: PathBuf,
    },
    /// Apply updates to a JSON movie record and print the result as JSON
    ///
    /// Values are parsed as JSON when possible and otherwise taken as
    /// plain strings, so `--rating '"9.0"'` passes a string and is
    /// rejected. Rejected updates leave the record unchanged. The record
    /// is always printed as JSON, whatever `--output` says.
    Edit {
        input: PathBuf,
        /// New rating; only numbers are accepted
        #[arg(long, value_parser = json_or_string)]
        rating: Option<serde_json::Value>,
        /// New genre; only allowed genres are accepted
        #[arg(long, value_parser = json_or_string)]
        genre: Option<serde_json::Value>,
        /// Remove the director field
        #[arg(long)]
        remove_director: bool,
        /// Cast member to append (repeatable); requires an existing cast list
        #[arg(long = "add-cast", value_parser = json_or_string)]
        add_cast: Vec<serde_json::Value>,
    },
    /// List the genres accepted by genre updates
    Genres,
    /// Walk through creating, printing and updating sample movies
    Demo,
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Debug, clap::Subcommand)]
enum ConfigAction {
    /// Show the current effective configuration
    Show,
    /// Show the config file path
    Path,
    /// Print an example config file
    Example,
    /// Create the config file with defaults
    Init,
}

fn json_or_string(raw: &str) -> Result<serde_json::Value, Infallible> {
    Ok(serde_json::from_str(raw).unwrap_or_else(|_| serde_json::Value::String(raw.to_string())))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level)),
        )
        .init();

    let output = cli.output.unwrap_or(config.output);

    match cli.command {
        Commands::New {
            title,
            director,
            year,
            genre,
            rating,
            cast,
        } => {
            let options = reel_core::MovieOptions {
                title,
                director,
                year,
                genre,
                rating,
                cast: (!cast.is_empty()).then_some(cast),
            };
            commands::new_movie(options, output)?;
        }
        Commands::Show { input } => {
            commands::show_movie(&input, output)?;
        }
        Commands::Inspect { input } => {
            commands::inspect_movie(&input, output)?;
        }
        Commands::Edit {
            input,
            rating,
            genre,
            remove_director,
            add_cast,
        } => {
            let edits = commands::Edits {
                rating,
                genre,
                remove_director,
                add_cast,
            };
            commands::edit_movie(&input, &edits)?;
        }
        Commands::Genres => {
            commands::list_genres(output)?;
        }
        Commands::Demo => {
            commands::run_demo();
        }
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::show_config()?,
            ConfigAction::Path => commands::config::show_path(),
            ConfigAction::Example => commands::config::show_example(),
            ConfigAction::Init => commands::config::init_config()?,
        },
    }

    Ok(())
}
