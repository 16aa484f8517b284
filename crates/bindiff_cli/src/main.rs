//! bindiff CLI
//!
//! Command-line access to a bindiff payload store.
//!
//! # Commands
//!
//! - `put` - Store a payload in the left or right slot of a request
//! - `diff` - Compare the two payloads of a request
//! - `show` - Print both stored payloads
//! - `list` - List stored request ids
//! - `route` - Send a method + path request through the API handler

mod commands;
mod error;

use bindiff_storage::{FileStore, StoreConfig};
use clap::{Parser, Subcommand};
use error::CliResult;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Compare left and right payloads stored per request id.
#[derive(Parser)]
#[command(name = "bindiff")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directory holding stored requests
    #[arg(
        global = true,
        short,
        long,
        env = "BINDIFF_STORE",
        default_value = "./bindiff-data"
    )]
    store: PathBuf,

    /// Enable verbose output
    #[arg(global = true, short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Store a payload in one slot of a request
    Put {
        /// Request id
        id: String,

        /// Target slot (left, right)
        slot: String,

        /// Payload text, stored as given
        #[arg(short, long, conflicts_with_all = ["envelope", "file"])]
        data: Option<String>,

        /// JSON array of string chunks, concatenated in order
        #[arg(short, long, conflicts_with = "file")]
        envelope: Option<String>,

        /// File whose bytes are stored base64-encoded
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// Compare the left and right payloads of a request
    Diff {
        /// Request id
        id: String,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Print both payloads of a request
    Show {
        /// Request id
        id: String,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// List stored request ids
    List {
        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Send a request through the API handler and print the response
    Route {
        /// HTTP method (GET, POST)
        method: String,

        /// Request path, e.g. /v1/diff/42/left
        path: String,

        /// Request body
        #[arg(short, long, default_value = "")]
        body: String,
    },

    /// Show version information
    Version,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // RUST_LOG wins over --verbose
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("info")
        }
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> CliResult<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Commands::Version = cli.command {
        writeln!(out, "bindiff CLI v{}", env!("CARGO_PKG_VERSION"))?;
        writeln!(out, "bindiff core v{}", bindiff_core::VERSION)?;
        return Ok(());
    }

    let store = Arc::new(FileStore::open(&cli.store, StoreConfig::default())?);

    match cli.command {
        Commands::Put {
            id,
            slot,
            data,
            envelope,
            file,
        } => {
            let source = commands::put::PayloadSource::from_args(data, envelope, file)?;
            commands::put::run(&*store, &id, &slot, source, &mut out)?;
        }
        Commands::Diff { id, format } => {
            commands::diff::run(store, &id, &format, &mut out)?;
        }
        Commands::Show { id, format } => {
            commands::show::run(&*store, &id, &format, &mut out)?;
        }
        Commands::List { format } => {
            commands::list::run(&*store, &format, &mut out)?;
        }
        Commands::Route { method, path, body } => {
            commands::route::run(store, &method, &path, &body, &mut out)?;
        }
        Commands::Version => {}
    }

    Ok(())
}
