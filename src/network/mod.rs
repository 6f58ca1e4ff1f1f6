//! The protein-protein interaction [`Network`] data model and queries.

pub mod fetch;
pub mod stats;

#[cfg(test)]
mod tests;

use crate::state::ViewState;
use crate::utils;
use chrono::{DateTime, Utc};
use color_eyre::eyre::{eyre, Report, Result, WrapErr};
use color_eyre::Help;
use itertools::Itertools;
use log::{debug, warn};
use petgraph::graph::{NodeIndex, UnGraph};
use semver::{Version, VersionReq};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::str::FromStr;
use structdoc::StructDoc;
use strum::{EnumIter, IntoEnumIterator};

/// Network snapshot schema versions this build can read.
pub const SCHEMA_REQUIREMENT: &str = ">=1.0.0, <2.0.0";

// ----------------------------------------------------------------------------
// Score Type
// ----------------------------------------------------------------------------

/// The evidence channel an interaction score was derived from.
#[derive(
    Clone, Copy, Debug, Default, Deserialize, EnumIter, Eq, PartialEq, Serialize, StructDoc,
)]
#[serde(rename_all = "lowercase")]
pub enum ScoreType {
    /// Combination of all evidence channels.
    #[default]
    Combined,
    /// Co-expression across transcriptomic experiments.
    Coexpression,
    /// Curated pathway and complex databases.
    Database,
    /// Direct experimental evidence (co-purification, two-hybrid).
    Experimental,
    /// Literature co-mentions.
    Textmining,
}

impl std::fmt::Display for ScoreType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = format!("{:?}", self).to_lowercase();
        write!(f, "{name}")
    }
}

impl FromStr for ScoreType {
    type Err = Report;

    /// Convert a string to a ScoreType.
    fn from_str(name: &str) -> Result<Self, Report> {
        ScoreType::iter().find(|score_type| score_type.to_string() == name).ok_or_else(|| {
            eyre!("Unknown score type: {name}")
                .suggestion(format!("Please choose from: {}", ScoreType::iter().join(", ")))
        })
    }
}

// ----------------------------------------------------------------------------
// Proteins and Interactions
// ----------------------------------------------------------------------------

/// A node in the interaction network.
///
/// Identity is the `id`; every other field is display metadata.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize, StructDoc)]
pub struct Protein {
    /// Stable locus identifier (ex. b3961).
    pub id: String,
    /// Display label (ex. oxyR); falls back to the id when absent.
    #[serde(default)]
    pub label: Option<String>,
    /// Functional category used for coloring.
    #[serde(default)]
    pub category: Option<String>,
    /// The protein was pulled in by cross-species ortholog enrichment.
    #[serde(default)]
    pub ortholog: bool,
}

impl Protein {
    /// Returns the display label, falling back to the id.
    pub fn label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.id)
    }
}

/// An undirected interaction between two proteins.
///
/// Parallel interactions between the same pair are allowed and each counts
/// toward degree.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize, StructDoc)]
pub struct Interaction {
    pub source: String,
    pub target: String,
    /// Confidence in [0, 1]; absent weights are treated as 0.
    #[serde(default)]
    pub weight: Option<f64>,
    #[serde(default)]
    pub score_type: ScoreType,
}

// ----------------------------------------------------------------------------
// Network
// ----------------------------------------------------------------------------

/// A portal network snapshot: proteins, interactions, and provenance.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize, StructDoc)]
pub struct Network {
    /// Snapshot schema version, checked against [`SCHEMA_REQUIREMENT`].
    pub version: String,
    /// When the snapshot was fetched from the portal.
    #[serde(default)]
    #[structdoc(skip)]
    pub retrieved: Option<DateTime<Utc>>,
    pub proteins: Vec<Protein>,
    pub interactions: Vec<Interaction>,
}

impl Default for Network {
    fn default() -> Self {
        Self::new()
    }
}

impl Network {
    pub fn new() -> Self {
        Network {
            version: "1.0.0".to_string(),
            retrieved: None,
            proteins: Vec::new(),
            interactions: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.proteins.is_empty()
    }

    /// Read a network snapshot from file (.json, or .json.zst).
    pub fn read(path: &Path) -> Result<Network, Report> {
        let contents = utils::read_to_string(&path)?;
        let network: Network = serde_json::from_str(&contents)
            .wrap_err_with(|| format!("Failed to parse network: {path:?}"))?;

        network
            .check_compatibility()
            .wrap_err_with(|| format!("Incompatible network: {path:?}"))?;

        let dangling = network.dangling_endpoints();
        if !dangling.is_empty() {
            warn!(
                "{} interaction endpoint(s) are not in the protein list: {}",
                dangling.len(),
                dangling.iter().take(5).join(", "),
            );
        }

        debug!(
            "Read network: {} proteins, {} interactions.",
            network.proteins.len(),
            network.interactions.len()
        );
        Ok(network)
    }

    /// Write the network snapshot to a json file.
    pub fn write(&self, path: &Path) -> Result<(), Report> {
        let mut file =
            File::create(path).wrap_err_with(|| format!("Failed to create file: {path:?}"))?;
        let output = serde_json::to_string_pretty(&self)
            .wrap_err_with(|| format!("Failed to serialize network: {path:?}"))?;
        file.write_all(output.as_bytes())
            .wrap_err_with(|| format!("Failed to write file: {path:?}"))?;
        Ok(())
    }

    /// Check the snapshot schema version against this build.
    pub fn check_compatibility(&self) -> Result<(), Report> {
        let version = Version::parse(&self.version)
            .wrap_err_with(|| format!("Invalid schema version: {:?}", self.version))?;
        let required = VersionReq::parse(SCHEMA_REQUIREMENT)?;

        if !required.matches(&version) {
            Err(eyre!("Network schema {version} is not supported.")
                .suggestion(format!("This build reads schema versions: {SCHEMA_REQUIREMENT}")))?;
        }
        Ok(())
    }

    /// Get protein ids, in snapshot order.
    pub fn node_ids(&self) -> Vec<&str> {
        self.proteins.iter().map(|p| p.id.as_str()).collect_vec()
    }

    /// Get interaction endpoint pairs for degree counting.
    pub fn link_pairs(&self) -> Vec<(&str, &str)> {
        self.interactions.iter().map(|i| (i.source.as_str(), i.target.as_str())).collect_vec()
    }

    /// Get interaction endpoint pairs with weights, absent weights as 0.
    pub fn weighted_links(&self) -> Vec<(&str, &str, f64)> {
        self.interactions
            .iter()
            .map(|i| (i.source.as_str(), i.target.as_str(), i.weight.unwrap_or(0.0)))
            .collect_vec()
    }

    /// Get interaction endpoints that are missing from the protein list.
    pub fn dangling_endpoints(&self) -> Vec<&str> {
        let known: HashSet<&str> = self.proteins.iter().map(|p| p.id.as_str()).collect();
        self.interactions
            .iter()
            .flat_map(|i| [i.source.as_str(), i.target.as_str()])
            .filter(|id| !known.contains(id))
            .unique()
            .sorted()
            .collect_vec()
    }

    /// Derive the sub-network selected by the view state.
    ///
    /// Proteins flagged as orthologs are dropped when the toggle is off;
    /// interactions must match the selected score channel, reach the weight
    /// threshold, and connect two surviving proteins.
    pub fn filter(&self, state: &ViewState) -> Network {
        let proteins = self
            .proteins
            .iter()
            .filter(|p| state.include_orthologs || !p.ortholog)
            .cloned()
            .collect_vec();

        let keep: HashSet<&str> = proteins.iter().map(|p| p.id.as_str()).collect();
        let interactions = self
            .interactions
            .iter()
            .filter(|i| state.score_type.map_or(true, |score_type| i.score_type == score_type))
            .filter(|i| i.weight.unwrap_or(0.0) >= state.threshold)
            .filter(|i| keep.contains(i.source.as_str()) && keep.contains(i.target.as_str()))
            .cloned()
            .collect_vec();

        Network {
            version: self.version.clone(),
            retrieved: self.retrieved,
            proteins,
            interactions,
        }
    }

    /// Build the undirected petgraph view, plus an id-to-index map.
    ///
    /// Interactions with a dangling endpoint still count toward degree in
    /// the centrality pass but cannot be drawn, so they are skipped here.
    pub fn graph(&self) -> (UnGraph<&str, f64>, HashMap<&str, NodeIndex>) {
        let mut graph = UnGraph::new_undirected();
        let mut indices = HashMap::new();

        for protein in &self.proteins {
            let index = graph.add_node(protein.id.as_str());
            indices.insert(protein.id.as_str(), index);
        }

        for interaction in &self.interactions {
            match (indices.get(interaction.source.as_str()), indices.get(interaction.target.as_str()))
            {
                (Some(&source), Some(&target)) => {
                    graph.add_edge(source, target, interaction.weight.unwrap_or(0.0));
                }
                _ => debug!(
                    "Skipping dangling interaction: {} -- {}",
                    interaction.source, interaction.target
                ),
            }
        }

        (graph, indices)
    }

    /// Extract the interaction neighborhood around a query protein.
    ///
    /// `depth` 1 is the first shell (direct partners), 2 adds their
    /// partners, and so on. The query protein itself is always included.
    pub fn neighborhood(&self, id: &str, depth: usize) -> Result<Network, Report> {
        let (graph, indices) = self.graph();
        let start = *indices.get(id).ok_or_else(|| {
            eyre!("Protein {id:?} is not in the network.")
                .suggestion("Check the locus identifier against the snapshot's protein list.")
        })?;

        let mut keep: HashSet<&str> = HashSet::from([id]);
        let mut frontier = vec![start];

        for _ in 0..depth {
            let mut next = Vec::new();
            for node in frontier {
                for neighbor in graph.neighbors(node) {
                    if keep.insert(graph[neighbor]) {
                        next.push(neighbor);
                    }
                }
            }
            frontier = next;
        }

        let proteins =
            self.proteins.iter().filter(|p| keep.contains(p.id.as_str())).cloned().collect_vec();
        let interactions = self
            .interactions
            .iter()
            .filter(|i| keep.contains(i.source.as_str()) && keep.contains(i.target.as_str()))
            .cloned()
            .collect_vec();

        Ok(Network {
            version: self.version.clone(),
            retrieved: self.retrieved,
            proteins,
            interactions,
        })
    }
}
