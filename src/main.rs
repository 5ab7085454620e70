//! # FNDLWR CLI (`fndlwr`)
//!
//! Operator interface for the lawyer directory: schema setup, profile
//! import, the three directory queries, and the HTTP server.
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `fndlwr init` | Create the `lawyer` table |
//! | `fndlwr import <file>` | Insert profiles from a JSON array |
//! | `fndlwr search [query] --location <loc>` | Fuzzy search |
//! | `fndlwr get <id>` | Print a full profile |
//! | `fndlwr suggest <text>` | Print autocomplete suggestions |
//! | `fndlwr serve` | Start the HTTP server |

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use fndlwr::{config, get, import, migrate, search, server, suggest};

/// Find a lawyer by name, specialty, and location.
///
/// The database connection string comes from `[db].url` in the config file,
/// or from `FNDLWR_URL` when set.
#[derive(Parser)]
#[command(name = "fndlwr", version, about)]
struct Cli {
    /// Path to configuration file (TOML). Defaults apply when it is missing.
    #[arg(
        long,
        global = true,
        env = "FNDLWR_CONFIG",
        default_value = "./config/fndlwr.toml"
    )]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the `lawyer` table. Safe to run repeatedly.
    Init,

    /// Insert lawyer profiles from a JSON array file.
    ///
    /// The whole file is inserted in one transaction.
    Import {
        /// Path to the JSON file.
        path: PathBuf,
    },

    /// Search by name or specialty, optionally narrowed by location.
    ///
    /// Both filters are case-insensitive substring matches; omitting them
    /// lists every lawyer.
    Search {
        /// Text matched against name or specialty.
        #[arg(default_value = "")]
        query: String,

        /// Text matched against location.
        #[arg(long, default_value = "")]
        location: String,
    },

    /// Print a lawyer's full profile.
    Get {
        /// Lawyer ID.
        id: String,
    },

    /// Print autocomplete suggestions for partial text.
    ///
    /// Input shorter than `[suggestions].min_chars` prints nothing.
    Suggest {
        /// Partial name or specialty.
        text: String,
    },

    /// Start the HTTP server on `[server].bind`.
    Serve,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("fndlwr=info,tower_http=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let cfg = config::load_config(&cli.config)?;

    match cli.command {
        Commands::Init => {
            migrate::run_migrations(&cfg).await?;
            println!("Database initialized successfully.");
        }
        Commands::Import { path } => {
            import::run_import(&cfg, &path).await?;
        }
        Commands::Search { query, location } => {
            search::run_search(&cfg, &query, &location).await?;
        }
        Commands::Get { id } => {
            get::run_get(&cfg, &id).await?;
        }
        Commands::Suggest { text } => {
            suggest::run_suggest(&cfg, &text).await?;
        }
        Commands::Serve => {
            server::run_server(&cfg).await?;
        }
    }

    Ok(())
}
