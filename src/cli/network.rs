//! CLI arguments for the network subcommands.

use crate::network::{fetch, stats};
use clap::{Parser, Subcommand};

/// Network subcommand arguments.
#[derive(Debug, Parser)]
pub struct Args {
    #[clap(subcommand)]
    pub command: Command,
}

/// Network subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Pass CLI arguments to the [Fetch](fetch::Args) command.
    #[clap(about = "Download a network snapshot from a portal endpoint.")]
    Fetch(fetch::Args),

    /// Pass CLI arguments to the [Stats](stats::Args) command.
    #[clap(about = "Print the centrality linelist for a snapshot.")]
    Stats(stats::Args),
}
