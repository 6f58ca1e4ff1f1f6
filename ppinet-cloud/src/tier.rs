use itertools::Itertools;
use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;

// ----------------------------------------------------------------------------
// Tier Classification
// ----------------------------------------------------------------------------

/// Returns the concentric tier for a centrality score.
///
/// Tier `num_tiers - 1` is the innermost (most central) ring and tier 0 the
/// outermost. The mapping is `floor(score * num_tiers)` clamped into
/// `[0, num_tiers - 1]`, so a score of exactly 1.0 lands on the innermost
/// ring instead of overflowing past it.
///
/// Total over all inputs: scores outside [0, 1] (and NaN) clamp to the
/// nearest ring, and a zero `num_tiers` is treated as one ring.
///
/// ## Examples
///
/// ```rust
/// use ppinet_cloud::tier_of;
///
/// assert_eq!(tier_of(1.0, 4), 3);
/// assert_eq!(tier_of(0.5, 4), 2);
/// assert_eq!(tier_of(0.0, 4), 0);
/// ```
pub fn tier_of(score: f64, num_tiers: usize) -> usize {
    let num_tiers = num_tiers.max(1);
    let tier = (score.max(0.0) * num_tiers as f64).floor() as usize;
    tier.min(num_tiers - 1)
}

/// Buckets node ids into tiers by centrality score.
///
/// Returns a map from tier index to node ids; within a tier, ids are sorted
/// so that the position a node receives downstream depends only on the tier
/// contents, never on hash-map iteration order.
///
/// ## Examples
///
/// ```rust
/// use ppinet_cloud::{centrality, classify};
///
/// let nodes = vec!["A", "B", "C"];
/// let links = vec![("A", "B"), ("A", "C")];
/// let tiers = classify(&centrality(&nodes, &links), 4);
///
/// assert_eq!(tiers[&3], vec!["A"]);
/// assert_eq!(tiers[&2], vec!["B", "C"]);
/// ```
pub fn classify<N>(scores: &HashMap<N, f64>, num_tiers: usize) -> BTreeMap<usize, Vec<N>>
where
    N: Clone + Eq + Hash + Ord,
{
    let mut tiers: BTreeMap<usize, Vec<N>> = BTreeMap::new();

    scores
        .iter()
        .sorted_by(|(a, _), (b, _)| a.cmp(b))
        .for_each(|(node, score)| {
            tiers.entry(tier_of(*score, num_tiers)).or_default().push(node.clone());
        });

    tiers
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
