use clap::{ArgAction, Parser, Subcommand};

/// CLI arguments for destsearch
#[derive(Debug, Parser)]
#[command(
    name = "destsearch",
    version,
    about = "CLI for querying destination catalogs and replaying search box sessions"
)]
pub struct CliArgs {
    /// Path to the catalog (.json, .json.gz, .bin, .bin.gz). Defaults to the bundled sample.
    #[arg(short = 'i', long = "input", global = true)]
    pub input: Option<String>,

    /// Path to a JSON search config (max_suggestions, match_mode, fallback_route, fallback_param)
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<String>,

    /// Increase log verbosity (-v debug, -vv trace). RUST_LOG takes precedence.
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a summary of the catalog contents
    Stats,

    /// Show dropdown suggestions for a query
    Search {
        /// Text typed into the search box (case-insensitive substring)
        query: String,

        /// Comma-separated kinds to keep (region,country,city,place)
        #[arg(short = 'k', long = "kind")]
        kind: Option<String>,

        /// List every match instead of the bounded suggestion list
        #[arg(long)]
        all: bool,
    },

    /// List entity kinds with their icon and label
    Kinds,

    /// Replay search box events and print every state and navigation.
    ///
    /// Events: type:<text>, down, up, enter, select:<row>, blur, focus
    Simulate {
        #[arg(required = true)]
        events: Vec<String>,
    },

    /// Write the catalog as a binary cache (gzip when OUTPUT ends in .gz)
    Cache {
        output: String,
    },
}
