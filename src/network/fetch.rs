use crate::network::Network;
use crate::utils;
use chrono::Utc;
use clap::Parser;
use color_eyre::eyre::{Report, Result};
use log::info;
use std::path::PathBuf;

// ----------------------------------------------------------------------------
// Fetch
// ----------------------------------------------------------------------------

/// Fetch network arguments.
#[derive(Debug, Parser)]
#[clap(verbatim_doc_comment)]
pub struct Args {
    /// Portal REST endpoint returning a network snapshot.
    #[clap(short = 'u', long, required = true)]
    pub url: String,

    /// Output file.
    ///
    /// A `.zst` download is decompressed next to it.
    #[clap(short = 'o', long, required = true)]
    pub output: PathBuf,
}

/// Download a network snapshot and stamp its retrieval time.
pub async fn network(args: &Args) -> Result<Network, Report> {
    info!("Fetching network: {}", &args.url);

    let path = utils::download_file(&args.url, &args.output).await?;

    // `read` decodes .zst transparently; persist the decoded snapshot
    let mut network = Network::read(&path)?;
    network.retrieved = Some(Utc::now());

    let output = match utils::path_to_ext(&path)?.as_str() {
        "zst" => path.with_extension(""),
        _ => path,
    };
    network.write(&output)?;

    info!(
        "Fetched {} proteins and {} interactions to: {output:?}",
        network.proteins.len(),
        network.interactions.len()
    );
    Ok(network)
}
