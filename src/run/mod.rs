use crate::export;
use crate::network::{Network, ScoreType};
use crate::state::ViewState;
use clap::Parser;
use color_eyre::eyre::{Report, Result, WrapErr};
use itertools::Itertools;
use log::{debug, info, warn};
use ppinet_cloud::{centrality, classify, solve, CloudConfig, Point};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::{BTreeMap, HashMap};
use std::fs::create_dir_all;
use std::path::PathBuf;

// ----------------------------------------------------------------------------
// Run
// ----------------------------------------------------------------------------

/// Run arguments.
#[derive(Debug, Parser)]
#[clap(verbatim_doc_comment)]
pub struct Args {
    /// Network snapshot (.json, or .json.zst).
    #[clap(short = 'n', long, required = true)]
    pub network: PathBuf,

    /// Output directory.
    ///
    /// If the directory does not exist, it will be created.
    #[clap(short = 'o', long, required = true)]
    pub output_dir: PathBuf,

    /// Restrict the view to the neighborhood of this protein.
    #[clap(long)]
    pub focus: Option<String>,

    /// Neighborhood depth around --focus (1 = direct partners).
    #[clap(long, default_value_t = 2)]
    pub shells: usize,

    /// Restrict interactions to one score channel.
    #[clap(short = 's', long)]
    pub score_type: Option<ScoreType>,

    /// Minimum interaction weight, in [0, 1].
    #[clap(short = 't', long, default_value_t = 0.0)]
    pub threshold: f64,

    /// Drop proteins pulled in by ortholog enrichment.
    #[clap(long)]
    pub exclude_orthologs: bool,

    /// Number of concentric tiers.
    #[clap(long, default_value_t = 4)]
    pub tiers: usize,

    /// Radius of the outermost ring.
    #[clap(long, default_value_t = 420.0)]
    pub base_radius: f64,

    /// Jitter seed; omit for organic, non-reproducible jitter.
    #[clap(long)]
    pub seed: Option<u64>,
}

/// Compute a centrality-cloud layout and write positions + linelist.
pub fn run(args: &Args) -> Result<(), Report> {
    let mut network = Network::read(&args.network)?;

    if let Some(focus) = &args.focus {
        network = network.neighborhood(focus, args.shells)?;
        info!("Focused on {focus}: {} proteins in {} shell(s).", network.proteins.len(), args.shells);
    }

    let state = ViewState::new()
        .with_score_type(args.score_type)
        .with_threshold(args.threshold)
        .with_orthologs(!args.exclude_orthologs);
    let network = network.filter(&state);
    info!(
        "Laying out {} proteins and {} interactions.",
        network.proteins.len(),
        network.interactions.len()
    );

    let config =
        CloudConfig { tiers: args.tiers, base_radius: args.base_radius, ..Default::default() };
    config.validate()?;

    let positions = layout(&network, &config, args.seed);

    if !args.output_dir.exists() {
        info!("Creating output directory: {:?}", &args.output_dir);
        create_dir_all(&args.output_dir)?;
    } else {
        warn!("Proceed with caution! --output-dir {:?} already exists.", args.output_dir);
    }

    // sorted for stable diffs between runs
    let output_path = args.output_dir.join("positions.json");
    let sorted: BTreeMap<&String, &Point> = positions.iter().collect();
    std::fs::write(&output_path, serde_json::to_string_pretty(&sorted)?)
        .wrap_err_with(|| format!("Unable to write positions: {output_path:?}"))?;
    info!("Wrote positions: {output_path:?}");

    let output_path = args.output_dir.join("linelist.tsv");
    let linelist = export::linelist(&network, config.tiers)?;
    linelist.write(&output_path)?;
    info!("Wrote linelist: {output_path:?}");

    Ok(())
}

/// The pure layout pipeline: centrality, tiers, then positions.
pub fn layout(network: &Network, config: &CloudConfig, seed: Option<u64>) -> HashMap<String, Point> {
    let nodes = network.node_ids();
    let scores = centrality(&nodes, &network.link_pairs());
    let tiers = classify(&scores, config.tiers);
    debug!(
        "Tier occupancy: {:?}",
        tiers.iter().map(|(tier, nodes)| (*tier, nodes.len())).collect_vec()
    );

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    solve(&tiers, config, &mut rng)
        .into_iter()
        .map(|(id, position)| (id.to_string(), position))
        .collect()
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
