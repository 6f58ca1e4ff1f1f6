use crate::network::{Network, ScoreType};
use crate::state::ViewState;
use color_eyre::eyre::{Report, Result};
use indoc::indoc;

const TOY: &str = indoc! {r#"
    {
        "version": "1.2.0",
        "proteins": [
            { "id": "b3961", "label": "oxyR", "category": "regulator" },
            { "id": "b3942", "label": "katG", "category": "peroxidase" },
            { "id": "b0605", "label": "ahpC", "category": "peroxidase" },
            { "id": "sf0721", "category": "peroxidase", "ortholog": true }
        ],
        "interactions": [
            { "source": "b3961", "target": "b3942", "weight": 0.92, "score_type": "experimental" },
            { "source": "b3961", "target": "b0605", "weight": 0.81, "score_type": "database" },
            { "source": "b3942", "target": "b0605", "weight": 0.34, "score_type": "textmining" },
            { "source": "b0605", "target": "sf0721", "weight": 0.77, "score_type": "combined" }
        ]
    }"#};

fn toy() -> Result<Network, Report> {
    Ok(serde_json::from_str(TOY)?)
}

#[test]
fn snapshots_parse_with_defaults() -> Result<(), Report> {
    let network = toy()?;

    assert_eq!(network.proteins.len(), 4);
    assert_eq!(network.interactions.len(), 4);
    assert_eq!(network.retrieved, None);
    assert_eq!(network.proteins[0].label(), "oxyR");
    // no label falls back to the id
    assert_eq!(network.proteins[3].label(), "sf0721");
    assert!(network.proteins[3].ortholog);
    assert_eq!(network.interactions[0].score_type, ScoreType::Experimental);
    Ok(())
}

#[test]
fn read_handles_plain_and_zst_files() -> Result<(), Report> {
    let dir = tempfile::tempdir()?;

    let path = dir.path().join("network.json");
    std::fs::write(&path, TOY)?;
    assert_eq!(Network::read(&path)?, toy()?);

    let path = dir.path().join("network.json.zst");
    std::fs::write(&path, zstd::encode_all(TOY.as_bytes(), 0)?)?;
    assert_eq!(Network::read(&path)?, toy()?);
    Ok(())
}

#[test]
fn incompatible_schemas_are_rejected() -> Result<(), Report> {
    let mut network = toy()?;
    assert!(network.check_compatibility().is_ok());

    network.version = "2.0.0".to_string();
    assert!(network.check_compatibility().is_err());

    network.version = "not-a-version".to_string();
    assert!(network.check_compatibility().is_err());
    Ok(())
}

#[test]
fn score_types_parse_by_name() -> Result<(), Report> {
    assert_eq!("experimental".parse::<ScoreType>()?, ScoreType::Experimental);
    assert_eq!("combined".parse::<ScoreType>()?, ScoreType::Combined);
    assert!("bogus".parse::<ScoreType>().is_err());
    Ok(())
}

#[test]
fn thresholds_drop_weak_interactions() -> Result<(), Report> {
    let network = toy()?;
    let state = ViewState::new().with_threshold(0.5);

    let filtered = network.filter(&state);

    assert_eq!(filtered.proteins.len(), 4);
    assert_eq!(filtered.interactions.len(), 3);
    assert!(filtered.interactions.iter().all(|i| i.weight.unwrap_or(0.0) >= 0.5));
    Ok(())
}

#[test]
fn score_channels_restrict_interactions() -> Result<(), Report> {
    let network = toy()?;
    let state = ViewState::new().with_score_type(Some(ScoreType::Experimental));

    let filtered = network.filter(&state);

    assert_eq!(filtered.interactions.len(), 1);
    assert_eq!(filtered.interactions[0].target, "b3942");
    Ok(())
}

#[test]
fn ortholog_toggle_drops_proteins_and_their_interactions() -> Result<(), Report> {
    let network = toy()?;
    let state = ViewState::new().with_orthologs(false);

    let filtered = network.filter(&state);

    assert_eq!(filtered.proteins.len(), 3);
    assert!(filtered.proteins.iter().all(|p| !p.ortholog));
    // the b0605 -- sf0721 interaction lost an endpoint
    assert_eq!(filtered.interactions.len(), 3);
    Ok(())
}

#[test]
fn dangling_endpoints_are_reported() -> Result<(), Report> {
    let mut network = toy()?;
    network.interactions.push(crate::network::Interaction {
        source: "b3961".to_string(),
        target: "b9999".to_string(),
        weight: None,
        score_type: ScoreType::Combined,
    });

    assert_eq!(network.dangling_endpoints(), ["b9999"]);
    Ok(())
}

#[test]
fn neighborhood_extracts_shells() -> Result<(), Report> {
    let network = toy()?;

    // first shell of katG: oxyR and ahpC, plus katG itself
    let first = network.neighborhood("b3942", 1)?;
    assert_eq!(first.proteins.len(), 3);
    assert_eq!(first.interactions.len(), 3);

    // the second shell reaches the ortholog via ahpC
    let second = network.neighborhood("b3942", 2)?;
    assert_eq!(second.proteins.len(), 4);

    assert!(network.neighborhood("b0000", 1).is_err());
    Ok(())
}

#[test]
fn graphs_skip_dangling_interactions() -> Result<(), Report> {
    let mut network = toy()?;
    network.interactions.push(crate::network::Interaction {
        source: "b3961".to_string(),
        target: "b9999".to_string(),
        weight: None,
        score_type: ScoreType::Combined,
    });

    let (graph, indices) = network.graph();

    assert_eq!(graph.node_count(), 4);
    assert_eq!(graph.edge_count(), 4);
    assert!(indices.contains_key("b3961"));
    assert!(!indices.contains_key("b9999"));
    Ok(())
}
