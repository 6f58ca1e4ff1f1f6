use crate::network::Network;
use crate::utils::table::Table;
use color_eyre::eyre::{Report, Result};
use itertools::Itertools;
use ppinet_cloud::{centrality, degrees, strength, tier_of};

// ----------------------------------------------------------------------------
// LineList
// ----------------------------------------------------------------------------

const LINELIST_HEADERS: &[&str] =
    &["protein", "label", "category", "degree", "strength", "centrality", "tier"];

/// Build the per-protein centrality linelist for a network.
///
/// One row per protein, ordered from most to least central (ties broken by
/// id), with the tier the protein would occupy in a cloud of `num_tiers`
/// rings.
pub fn linelist(network: &Network, num_tiers: usize) -> Result<Table<String>, Report> {
    let nodes = network.node_ids();
    let links = network.link_pairs();
    let degrees = degrees(&nodes, &links);
    let scores = centrality(&nodes, &links);
    let strengths = strength(&nodes, &network.weighted_links());

    let mut table = Table::new();
    table.headers = LINELIST_HEADERS.iter().map(|h| h.to_string()).collect_vec();

    let proteins = network.proteins.iter().sorted_by(|a, b| {
        let (a_score, b_score) = (scores[a.id.as_str()], scores[b.id.as_str()]);
        b_score.total_cmp(&a_score).then_with(|| a.id.cmp(&b.id))
    });

    for protein in proteins {
        let id = protein.id.as_str();
        let score = scores[id];
        table.add_row(vec![
            protein.id.clone(),
            protein.label().to_string(),
            protein.category.clone().unwrap_or_default(),
            degrees[id].to_string(),
            format!("{:.3}", strengths[id]),
            format!("{score:.3}"),
            tier_of(score, num_tiers).to_string(),
        ])?;
    }

    Ok(table)
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::{Interaction, Protein, ScoreType};

    fn hub_network() -> Network {
        let protein = |id: &str| Protein {
            id: id.to_string(),
            label: None,
            category: None,
            ortholog: false,
        };
        let interaction = |source: &str, target: &str, weight: f64| Interaction {
            source: source.to_string(),
            target: target.to_string(),
            weight: Some(weight),
            score_type: ScoreType::Combined,
        };

        Network {
            proteins: vec![protein("B"), protein("C"), protein("A")],
            interactions: vec![interaction("A", "B", 0.75), interaction("A", "C", 0.5)],
            ..Network::new()
        }
    }

    #[test]
    fn linelist_orders_by_centrality() -> Result<(), Report> {
        let table = linelist(&hub_network(), 4)?;

        assert_eq!(table.column("protein")?, ["A", "B", "C"]);
        assert_eq!(table.column("degree")?, ["2", "1", "1"]);
        assert_eq!(table.column("centrality")?, ["1.000", "0.500", "0.500"]);
        assert_eq!(table.column("tier")?, ["3", "2", "2"]);
        assert_eq!(table.column("strength")?, ["1.250", "0.750", "0.500"]);
        Ok(())
    }

    #[test]
    fn empty_networks_yield_an_empty_linelist() -> Result<(), Report> {
        let table = linelist(&Network::new(), 4)?;
        assert!(table.rows.is_empty());
        Ok(())
    }
}
