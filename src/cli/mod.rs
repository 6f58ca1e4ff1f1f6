//! [Command-line interface](Cli) (CLI) of the main binary.

pub mod network;

use crate::Verbosity;
use clap::{Parser, Subcommand};

// ----------------------------------------------------------------------------
// CLI Entry Point
// ----------------------------------------------------------------------------

/// The command-line interface (CLI).
///
/// Parses user input from the command-line in the main function, via
/// [`Parser::parse`].
///
/// ```no_run
/// use clap::Parser;
/// let args = ppinet::Cli::parse();
/// ```
#[derive(Debug, Parser)]
#[clap(name = "ppinet", author, version)]
#[clap(about = "ppinet lays out protein-protein interaction networks as concentric centrality clouds.")]
#[clap(trailing_var_arg = true)]
pub struct Cli {
    #[clap(subcommand)]
    /// Pass CLI arguments to a particular [Command].
    #[clap(help = "Set the command.")]
    pub command: Command,

    /// Set the output [Verbosity] level.
    #[clap(short = 'v', long)]
    #[clap(value_enum, default_value_t = Verbosity::default())]
    #[clap(global = true)]
    #[clap(help = "Set the output verbosity level.")]
    pub verbosity: Verbosity,
}

/// CLI [commands](#variants). Decides which runtime command the CLI
/// arguments should be passed to.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Pass CLI arguments to the [Network](network::Command) subcommands.
    #[clap(about = "Fetch or summarize network snapshots.")]
    Network(network::Args),

    /// Pass CLI arguments to the [Run](crate::run::Args) command.
    #[clap(about = "Compute a centrality-cloud layout.")]
    Run(crate::run::Args),

    /// Pass CLI arguments to the [Plot](crate::plot::Args) command.
    #[clap(about = "Render a network layout to PNG.")]
    Plot(crate::plot::Args),
}
