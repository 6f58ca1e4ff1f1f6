use crate::export;
use crate::network::Network;
use clap::Parser;
use color_eyre::eyre::{Report, Result};
use log::info;
use std::path::PathBuf;

// ----------------------------------------------------------------------------
// Stats
// ----------------------------------------------------------------------------

/// Network stats arguments.
#[derive(Debug, Parser)]
#[clap(verbatim_doc_comment)]
pub struct Args {
    /// Network snapshot (.json, or .json.zst).
    #[clap(short = 'n', long, required = true)]
    pub network: PathBuf,

    /// Number of concentric tiers to classify against.
    #[clap(long, default_value_t = 4)]
    pub tiers: usize,

    /// Optional output table (.tsv or .csv).
    ///
    /// Prints markdown to stdout when absent.
    #[clap(short = 'o', long)]
    pub output: Option<PathBuf>,
}

/// Print or write the centrality linelist for a snapshot.
pub fn network(args: &Args) -> Result<(), Report> {
    let network = Network::read(&args.network)?;
    let linelist = export::linelist(&network, args.tiers)?;

    match &args.output {
        Some(path) => {
            linelist.write(path)?;
            info!("Wrote linelist: {path:?}");
        }
        None => println!("{}", linelist.to_markdown()?),
    }

    Ok(())
}
