//! Snippets CLI - store and retrieve named snippets of text

mod commands;

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use snippets::config;
use snippets::storage::SqliteStore;
use snippets::{GetRequest, PutRequest, SearchRequest};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "snippets")]
#[command(version)]
#[command(about = "Store and retrieve snippets of text")]
#[command(long_about = r#"
Snippets keeps named pieces of text in a SQLite table.

Example usage:
  snippets put shell "cat bash.txt | sh"
  snippets get shell
  snippets put shell "cat zsh.txt | zsh" --hide
  snippets catalog
  snippets contains bash
"#)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to the database file (overrides the config file)
    #[arg(short, long, global = true)]
    database: Option<PathBuf>,

    /// Path to the config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Emit machine-readable JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Store a snippet
    Put {
        /// The name of the snippet
        name: String,

        /// The snippet text
        #[arg(allow_hyphen_values = true)]
        snippet: String,

        /// Exclude the snippet from catalog and contains listings
        #[arg(long)]
        hide: bool,

        /// Make the snippet visible again (wins over --hide)
        #[arg(long)]
        unhide: bool,
    },

    /// Get a snippet
    Get {
        /// The name of the snippet
        name: String,
    },

    /// List the names of all visible snippets
    Catalog,

    /// Show visible snippets whose text contains a string
    Contains {
        /// The text to search for
        #[arg(allow_hyphen_values = true)]
        searchstr: String,
    },

    /// Write a config file and create the database
    Init {
        /// Overwrite an existing config file
        #[arg(short, long)]
        force: bool,
    },

    /// Show snippet counts
    Stats,
}

impl Commands {
    fn name(&self) -> &'static str {
        match self {
            Commands::Put { .. } => "put",
            Commands::Get { .. } => "get",
            Commands::Catalog => "catalog",
            Commands::Contains { .. } => "contains",
            Commands::Init { .. } => "init",
            Commands::Stats => "stats",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Human,
    Json,
}

impl OutputMode {
    pub fn is_human(self) -> bool {
        self == OutputMode::Human
    }
}

pub fn emit_success(output_mode: OutputMode, command: &str, data: serde_json::Value) -> anyhow::Result<()> {
    if output_mode.is_human() {
        return Ok(());
    }
    let envelope = serde_json::json!({
        "ok": true,
        "command": command,
        "data": data,
    });
    println!("{}", serde_json::to_string(&envelope)?);
    Ok(())
}

fn emit_error(output_mode: OutputMode, command: &str, err: &anyhow::Error) {
    if output_mode.is_human() {
        snippets::ui::error(&format!("{:#}", err));
        return;
    }
    let envelope = serde_json::json!({
        "ok": false,
        "command": command,
        "error": format!("{:#}", err),
    });
    println!("{}", envelope);
}

fn exit_code(err: &anyhow::Error) -> u8 {
    err.downcast_ref::<snippets::Error>()
        .map(snippets::Error::exit_code)
        .unwrap_or(1)
}

fn init_logging(verbose: bool, log_file: Option<&str>) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("warn")
        }
    });

    let registry = tracing_subscriber::registry().with(filter);
    match log_file {
        Some(path) => {
            let file = std::fs::OpenOptions::new().create(true).append(true).open(path)?;
            registry
                .with(fmt::layer().with_ansi(false).with_writer(std::sync::Mutex::new(file)))
                .init();
        }
        None => registry
            .with(
                fmt::layer()
                    .with_ansi(console::Term::stderr().is_term())
                    .with_writer(std::io::stderr),
            )
            .init(),
    }
    Ok(())
}

fn open_store(database: &Path) -> anyhow::Result<SqliteStore> {
    config::ensure_db_dir(database)?;
    let store = SqliteStore::open(database)?;
    tracing::debug!("Database connection established");
    Ok(store)
}

fn run(cli: Cli, output_mode: OutputMode) -> anyhow::Result<()> {
    let loaded = config::load_config(cli.config.as_deref())?;
    init_logging(cli.verbose, loaded.as_ref().and_then(|c| c.log_file.as_deref()))?;

    let database = config::resolve_database_path(cli.database.as_deref(), loaded.as_ref());
    tracing::debug!("Running {} against {}", cli.command.name(), database.display());

    match cli.command {
        Commands::Put { name, snippet, hide, unhide } => {
            let request = PutRequest::new(name, snippet, hide, unhide)?;
            let store = open_store(&database)?;
            commands::run_put(output_mode, &store, &request)
        }

        Commands::Get { name } => {
            let request = GetRequest::new(name)?;
            let store = open_store(&database)?;
            commands::run_get(output_mode, &store, &request)
        }

        Commands::Catalog => {
            let store = open_store(&database)?;
            commands::run_catalog(output_mode, &store)
        }

        Commands::Contains { searchstr } => {
            let request = SearchRequest::new(searchstr);
            let store = open_store(&database)?;
            commands::run_contains(output_mode, &store, &request)
        }

        Commands::Init { force } => {
            let config_path = cli.config.unwrap_or_else(config::default_config_path);
            commands::run_init(output_mode, &config_path, loaded, &database, force)
        }

        Commands::Stats => {
            let store = open_store(&database)?;
            commands::run_stats(output_mode, &store, &database)
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let output_mode = if cli.json { OutputMode::Json } else { OutputMode::Human };
    let command = cli.command.name();

    match run(cli, output_mode) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!("{} failed: {:#}", command, err);
            emit_error(output_mode, command, &err);
            ExitCode::from(exit_code(&err))
        }
    }
}
