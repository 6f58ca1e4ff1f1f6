use clap::Parser;
use color_eyre::eyre::{Report, Result};
use ppinet::network::{fetch, stats};
use ppinet::{cli, cli::Cli, plot, run};

#[tokio::main]
async fn main() -> Result<(), Report> {
    // ------------------------------------------------------------------------
    // CLI Setup

    // Parse CLI parameters
    let args = Cli::parse();

    // initialize color_eyre crate for colorized logs
    color_eyre::install()?;

    // Set logging/verbosity level via RUST_LOG
    std::env::set_var("RUST_LOG", args.verbosity.to_string());

    // initialize env_logger crate for logging/verbosity level
    env_logger::init();

    // check which CLI command we're running (network, run, plot)
    match args.command {
        // Network
        cli::Command::Network(args) => match args.command {
            cli::network::Command::Fetch(args) => _ = fetch::network(&args).await?,
            cli::network::Command::Stats(args) => stats::network(&args)?,
        },
        // Run
        cli::Command::Run(args) => run::run(&args)?,
        // Plot
        cli::Command::Plot(args) => plot::plot(&args)?,
    }

    Ok(())
}
