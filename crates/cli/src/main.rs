//! Goalpost CLI - snapshot checks and offline queries.
//!
//! # Usage
//!
//! ```bash
//! # Validate the snapshots the API would load
//! goalpost-cli check --data-dir ./data
//!
//! # Run the goal listing query without starting the server
//! goalpost-cli goals --data-dir ./data --query run --sort upVotes
//! ```
//!
//! # Commands
//!
//! - `check` - Load all three snapshots and report problems
//! - `goals` - Print the `/v1/goals` envelope for a query and sort
//!
//! `--data-dir` falls back to `GOALPOST_DATA_DIR`, then the current directory.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "goalpost-cli")]
#[command(author, version, about = "Goalpost CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load the snapshots and report counts and dangling references
    Check {
        /// Directory holding goals.json, users.json, and categories.json
        #[arg(short, long, env = "GOALPOST_DATA_DIR", default_value = ".")]
        data_dir: PathBuf,
    },
    /// Print the goal listing for a query and sort
    Goals {
        /// Directory holding goals.json, users.json, and categories.json
        #[arg(short, long, env = "GOALPOST_DATA_DIR", default_value = ".")]
        data_dir: PathBuf,

        /// Case-insensitive description substring
        #[arg(short, long)]
        query: Option<String>,

        /// Sort key (`upVotes` or `dateCreated`)
        #[arg(short, long)]
        sort: Option<String>,
    },
}

fn main() {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "goalpost_cli=info,goalpost_api=info".into()),
        )
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), commands::CommandError> {
    match cli.command {
        Commands::Check { data_dir } => commands::check::run(&data_dir),
        Commands::Goals {
            data_dir,
            query,
            sort,
        } => commands::goals::run(&data_dir, query.as_deref(), sort.as_deref()),
    }
}
