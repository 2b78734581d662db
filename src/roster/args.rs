use clap::{Parser, Subcommand};
use std::path::PathBuf;

const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), env!("ROSTER_BUILD"));

#[derive(Parser, Debug)]
#[command(name = "roster", version = VERSION)]
#[command(about = "Browse a staff directory from the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Read people from a saved provider response instead of the network
    #[arg(long, global = true, value_name = "FILE")]
    pub source: Option<PathBuf>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List people, optionally filtered by name
    #[command(alias = "ls")]
    List {
        /// Search term matched against full names
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Show the detail view for one person
    #[command(alias = "v")]
    Show {
        /// Position in the (filtered) list, starting at 1
        position: usize,

        /// Search term applied before picking the position
        #[arg(short, long)]
        search: Option<String>,

        /// Step forward this many times
        #[arg(long, default_value_t = 0, conflicts_with = "prev")]
        next: usize,

        /// Step backward this many times
        #[arg(long, default_value_t = 0)]
        prev: usize,
    },

    /// Interactive session: search, open, next, prev, close
    #[command(alias = "b")]
    Browse,

    /// Get or set configuration
    Config {
        /// Configuration key (endpoint, results, nat)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
