//! CLI frontend for Fortuna: dice, coin, and card draws with a result log.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fortuna_core::UtilityKind;

#[derive(Parser)]
#[command(
    name = "fortuna",
    about = "Fortuna: roll a die, flip a coin, draw a card, and keep a log",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Use a utility one or more times and print each result
    Draw {
        /// Utility to use: dice, coin, or card
        #[arg(value_parser = parse_kind)]
        kind: UtilityKind,

        /// Number of activations
        #[arg(short = 'n', long, default_value = "1")]
        count: usize,

        /// RNG seed for reproducible results
        #[arg(short, long)]
        seed: Option<u64>,

        /// Also print the asset path and alt text of each face
        #[arg(short, long)]
        verbose: bool,
    },

    /// Run line commands (select, use, menu, history, ...) from a file or stdin
    Session {
        /// Utility active at start
        #[arg(short, long, default_value = "dice", value_parser = parse_kind)]
        kind: UtilityKind,

        /// RNG seed for reproducible results
        #[arg(short, long)]
        seed: Option<u64>,

        /// Read commands from this file instead of stdin
        #[arg(long)]
        script: Option<PathBuf>,
    },

    /// Run several activations and export the resulting history
    History {
        /// Output format: text, markdown, json, table
        #[arg(short, long, default_value = "text")]
        format: String,

        /// Number of activations
        #[arg(short = 'n', long, default_value = "5")]
        count: usize,

        /// Utility to use
        #[arg(short, long, default_value = "dice", value_parser = parse_kind)]
        kind: UtilityKind,

        /// RNG seed for reproducible results
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Launch the interactive terminal UI
    Tui {
        /// Utility active at start
        #[arg(short, long, default_value = "dice", value_parser = parse_kind)]
        kind: UtilityKind,

        /// RNG seed for reproducible results
        #[arg(short, long)]
        seed: Option<u64>,

        /// Directory asset paths are shown relative to
        #[arg(long, default_value = "assets")]
        assets: String,
    },
}

fn parse_kind(s: &str) -> Result<UtilityKind, String> {
    s.parse::<UtilityKind>().map_err(|e| e.to_string())
}

/// Install the stderr log subscriber. `RUST_LOG` overrides the default filter.
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fortuna=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    let cli = Cli::parse();

    // Log lines would tear the alternate screen.
    if !matches!(cli.command, Commands::Tui { .. }) {
        init_tracing();
    }

    let result = match cli.command {
        Commands::Draw {
            kind,
            count,
            seed,
            verbose,
        } => commands::draw::run(kind, count, seed, verbose),
        Commands::Session { kind, seed, script } => {
            commands::session::run(kind, seed, script.as_deref())
        }
        Commands::History {
            format,
            count,
            kind,
            seed,
        } => commands::history::run(&format, count, kind, seed),
        Commands::Tui { kind, seed, assets } => commands::tui::run(kind, seed, assets),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
