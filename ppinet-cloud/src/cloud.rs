use color_eyre::eyre::{eyre, Report, Result};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::f64::consts::TAU;
use std::hash::Hash;

// ----------------------------------------------------------------------------
// Cloud Layout
// ----------------------------------------------------------------------------

/// The golden-angle increment, π(3 − √5) radians (≈137.5°).
///
/// Successive multiples of this angle fill a circle with a low-discrepancy
/// spiral, which keeps sparse tiers free of the banding artifacts that
/// uniform slicing produces.
pub const GOLDEN_ANGLE: f64 = 2.399963229728653;

/// A 2D coordinate assigned to exactly one node.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Configuration for the radial position solver.
///
/// All fields have defaults and can be overridden per layout pass.
#[derive(Clone, Copy, Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct CloudConfig {
    /// Center of the cloud.
    pub center: Point,
    /// Radius of the outermost ring.
    pub base_radius: f64,
    /// Radial distance budgeted per tier; also bounds the radial jitter.
    pub radius_step: f64,
    /// Number of concentric rings.
    pub tiers: usize,
    /// Angular spread in radians; the default is a full circle.
    pub angular_spread: f64,
    /// Minimum arc length between neighbors within a tier.
    pub min_distance: f64,
    /// Radius the innermost ring is tightened toward.
    pub inner_radius: f64,
    /// Easing exponent for ring radii; lower values compress the center more.
    pub easing: f64,
}

impl Default for CloudConfig {
    fn default() -> Self {
        CloudConfig {
            center: Point::default(),
            base_radius: 420.0,
            radius_step: 90.0,
            tiers: 4,
            angular_spread: TAU,
            min_distance: 24.0,
            inner_radius: 60.0,
            easing: 0.7,
        }
    }
}

impl CloudConfig {
    /// Checks that the configuration describes a solvable cloud.
    ///
    /// ```rust
    /// use ppinet_cloud::CloudConfig;
    ///
    /// assert!(CloudConfig::default().validate().is_ok());
    /// assert!(CloudConfig { tiers: 0, ..Default::default() }.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<(), Report> {
        if self.tiers == 0 {
            return Err(eyre!("A cloud needs at least 1 tier."));
        }
        if self.base_radius <= 0.0 || self.inner_radius <= 0.0 {
            return Err(eyre!("Cloud radii must be positive."));
        }
        if self.inner_radius > self.base_radius {
            return Err(eyre!(
                "The inner radius ({}) exceeds the base radius ({}).",
                self.inner_radius,
                self.base_radius
            ));
        }
        if self.radius_step < 0.0 || self.min_distance < 0.0 {
            return Err(eyre!("Spacing parameters must be non-negative."));
        }
        if self.angular_spread <= 0.0 {
            return Err(eyre!("The angular spread must be positive."));
        }
        if self.easing <= 0.0 {
            return Err(eyre!("The easing exponent must be positive."));
        }
        Ok(())
    }

    /// Returns the ring radius for a tier, before per-node adjustments.
    ///
    /// Eases exponentially between the inner floor (innermost tier) and the
    /// base radius (outermost tier): inner tiers occupy a tightened band
    /// near the floor, and a lower easing exponent tightens it further.
    fn tier_radius(&self, tier: usize) -> f64 {
        let innermost = self.tiers.saturating_sub(1);
        if innermost == 0 {
            return self.base_radius;
        }

        // 0.0 at the innermost ring, 1.0 at the outermost
        let outward = (innermost - tier.min(innermost)) as f64 / innermost as f64;
        let span = (self.base_radius - self.inner_radius).max(0.0);

        self.inner_radius + span * (1.0 - (1.0 - outward).powf(self.easing))
    }
}

/// Assigns a position to every node, tier by tier.
///
/// Tiers are processed from most central (highest index) outward, though
/// each node's position depends only on its own tier and its index within
/// it. Within a tier, nodes advance by [`GOLDEN_ANGLE`] per index, modulo
/// the angular spread, at the tier's eased radius; crowded tiers widen
/// their radius until the arc affords every node `min_distance`.
///
/// Small angular (≤5% of the per-node slice) and radial (≤10% of
/// `radius_step`) jitters are drawn from `rng` per node, with the jittered
/// radius floored at half the inner radius. Seed the generator to make a
/// layout exactly reproducible; draw it from entropy for organic variation.
///
/// ## Examples
///
/// ```rust
/// use ppinet_cloud::{centrality, classify, solve, CloudConfig};
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let (nodes, links) = ppinet_cloud::examples::example_1();
/// let tiers = classify(&centrality(&nodes, &links), 4);
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let positions = solve(&tiers, &CloudConfig::default(), &mut rng);
///
/// assert_eq!(positions.len(), nodes.len());
/// ```
pub fn solve<N, R>(
    nodes_by_tier: &BTreeMap<usize, Vec<N>>,
    config: &CloudConfig,
    rng: &mut R,
) -> HashMap<N, Point>
where
    N: Clone + Eq + Hash,
    R: Rng + ?Sized,
{
    let mut positions = HashMap::new();

    for (&tier, nodes) in nodes_by_tier.iter().rev() {
        if nodes.is_empty() {
            continue;
        }

        let radius = config.tier_radius(tier);
        // widen a crowded ring until neighbors get the minimum arc length
        let radius = radius.max(nodes.len() as f64 * config.min_distance / config.angular_spread);
        let slice = config.angular_spread / nodes.len() as f64;

        for (index, node) in nodes.iter().enumerate() {
            let angle = (GOLDEN_ANGLE * index as f64) % config.angular_spread
                + rng.gen_range(-0.05..=0.05) * slice;
            let radius = (radius + rng.gen_range(-0.10..=0.10) * config.radius_step)
                .max(config.inner_radius / 2.0);

            let position = Point {
                x: config.center.x + radius * angle.cos(),
                y: config.center.y + radius * angle.sin(),
            };
            positions.insert(node.clone(), position);
        }
    }

    positions
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{centrality, classify, examples};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn distance(a: &Point, b: &Point) -> f64 {
        ((a.x - b.x).powi(2) + (a.y - b.y).powi(2)).sqrt()
    }

    #[test]
    fn every_node_gets_one_finite_position() {
        let (nodes, links) = examples::example_2();
        let tiers = classify(&centrality(&nodes, &links), 4);

        let mut rng = StdRng::seed_from_u64(0);
        let positions = solve(&tiers, &CloudConfig::default(), &mut rng);

        assert_eq!(positions.len(), nodes.len());
        for position in positions.values() {
            assert!(position.x.is_finite());
            assert!(position.y.is_finite());
        }
    }

    /// The full pipeline is reproducible under a seeded random source.
    #[test]
    fn seeded_layouts_are_identical() {
        let (nodes, links) = examples::example_2();
        let config = CloudConfig::default();

        let first = {
            let tiers = classify(&centrality(&nodes, &links), config.tiers);
            solve(&tiers, &config, &mut StdRng::seed_from_u64(7))
        };
        let second = {
            let tiers = classify(&centrality(&nodes, &links), config.tiers);
            solve(&tiers, &config, &mut StdRng::seed_from_u64(7))
        };

        assert_eq!(first, second);
    }

    /// With no links, every node sits in the outer ring near the base
    /// radius, jitter aside.
    #[test]
    fn linkless_nodes_land_on_the_outer_ring() {
        let nodes = vec!["A", "B", "C"];
        let links: Vec<(&str, &str)> = Vec::new();
        let config = CloudConfig::default();

        let tiers = classify(&centrality(&nodes, &links), config.tiers);
        assert_eq!(tiers.keys().copied().collect::<Vec<_>>(), vec![0]);

        let positions = solve(&tiers, &config, &mut StdRng::seed_from_u64(1));
        for position in positions.values() {
            let radius = distance(position, &config.center);
            assert!((radius - config.base_radius).abs() <= 0.10 * config.radius_step);
        }
    }

    /// Inner tiers sit closer to the center than outer tiers.
    #[test]
    fn central_nodes_sit_inside_peripheral_nodes() {
        let (nodes, links) = examples::example_1();
        let config = CloudConfig::default();

        let tiers = classify(&centrality(&nodes, &links), config.tiers);
        let positions = solve(&tiers, &config, &mut StdRng::seed_from_u64(3));

        let hub = distance(&positions[&"A"], &config.center);
        let leaf_b = distance(&positions[&"B"], &config.center);
        let leaf_c = distance(&positions[&"C"], &config.center);

        assert!(hub < leaf_b);
        assert!(hub < leaf_c);
    }

    #[test]
    fn radius_easing_tightens_the_center() {
        let config = CloudConfig { tiers: 4, ..Default::default() };

        let innermost = config.tier_radius(3);
        let second = config.tier_radius(2);
        let outermost = config.tier_radius(0);

        assert_eq!(innermost, config.inner_radius);
        assert_eq!(outermost, config.base_radius);
        // the eased second ring sits below the linear midpoint of its band
        let linear = config.inner_radius
            + (config.base_radius - config.inner_radius) / 3.0;
        assert!(second < linear);
    }

    #[test]
    fn crowded_tiers_widen_for_minimum_spacing() {
        let config = CloudConfig::default();
        let nodes = (0..500).collect::<Vec<u32>>();
        let tiers = BTreeMap::from([(3, nodes.clone())]);

        let positions = solve(&tiers, &config, &mut StdRng::seed_from_u64(5));

        // 500 nodes cannot fit on the inner ring at 24 units apart; the
        // ring must have widened well past the inner radius.
        let widened = 500.0 * config.min_distance / config.angular_spread;
        for node in &nodes {
            let radius = distance(&positions[node], &config.center);
            assert!(radius >= widened - 0.10 * config.radius_step - 1e-9);
        }
    }

    #[test]
    fn single_tier_uses_the_base_radius() {
        let config = CloudConfig { tiers: 1, ..Default::default() };
        assert_eq!(config.tier_radius(0), config.base_radius);
    }

    /// Partial config files fall back to defaults field by field.
    #[test]
    fn config_overrides_parse_with_defaults() {
        let config: CloudConfig =
            serde_json::from_str(r#"{"tiers": 6, "base_radius": 300.0}"#).unwrap();

        assert_eq!(config.tiers, 6);
        assert_eq!(config.base_radius, 300.0);
        assert_eq!(config.inner_radius, CloudConfig::default().inner_radius);
    }

    #[test]
    fn validate_rejects_degenerate_configs() {
        assert!(CloudConfig { tiers: 0, ..Default::default() }.validate().is_err());
        assert!(CloudConfig { base_radius: 0.0, ..Default::default() }.validate().is_err());
        assert!(CloudConfig { inner_radius: 500.0, ..Default::default() }.validate().is_err());
        assert!(CloudConfig { angular_spread: 0.0, ..Default::default() }.validate().is_err());
        assert!(CloudConfig { easing: 0.0, ..Default::default() }.validate().is_err());
    }
}
