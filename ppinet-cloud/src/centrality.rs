use num_traits::AsPrimitive;
use std::collections::HashMap;
use std::hash::Hash;

// ----------------------------------------------------------------------------
// Centrality
// ----------------------------------------------------------------------------

/// Returns the raw degree of every node id touched by the link list.
///
/// Every id in `nodes` starts at 0. Each link increments both of its
/// endpoints by 1; a self-loop increments its single endpoint by 2. Link
/// endpoints that are absent from `nodes` are counted too, so the returned
/// map can contain more ids than `nodes`; callers that only care about the
/// input node set should go through [`centrality`] instead.
///
/// ## Examples
///
/// ```rust
/// use ppinet_cloud::degrees;
///
/// let nodes = vec!["A", "B", "C"];
/// let links = vec![("A", "B"), ("A", "C")];
/// let degrees = degrees(&nodes, &links);
///
/// assert_eq!(degrees[&"A"], 2);
/// assert_eq!(degrees[&"B"], 1);
/// assert_eq!(degrees[&"C"], 1);
/// ```
pub fn degrees<N>(nodes: &[N], links: &[(N, N)]) -> HashMap<N, usize>
where
    N: Clone + Eq + Hash,
{
    let mut degrees: HashMap<N, usize> = nodes.iter().map(|n| (n.clone(), 0)).collect();

    for (source, target) in links {
        *degrees.entry(source.clone()).or_insert(0) += 1;
        *degrees.entry(target.clone()).or_insert(0) += 1;
    }

    degrees
}

/// Returns the normalized degree centrality of every input node, in [0, 1].
///
/// Raw degrees are divided by the maximum degree observed across all counted
/// ids, or by 1 when the link list is empty. The output holds exactly one
/// score per id in `nodes`; dangling link endpoints contribute to the degree
/// counts but never appear in the output.
///
/// Duplicate ids in `nodes` are a caller error and are not validated; the
/// duplicates collapse into a single map entry (last write wins).
///
/// The result is deterministic for a given node/link multiset: summation is
/// commutative, so link order never matters.
///
/// ## Examples
///
/// ```rust
/// use ppinet_cloud::centrality;
///
/// let nodes = vec!["A", "B", "C"];
/// let links = vec![("A", "B"), ("A", "C")];
/// let scores = centrality(&nodes, &links);
///
/// assert_eq!(scores[&"A"], 1.0);
/// assert_eq!(scores[&"B"], 0.5);
/// assert_eq!(scores[&"C"], 0.5);
/// ```
pub fn centrality<N>(nodes: &[N], links: &[(N, N)]) -> HashMap<N, f64>
where
    N: Clone + Eq + Hash,
{
    let degrees = degrees(nodes, links);
    let max_degree = degrees.values().copied().max().unwrap_or(0).max(1);

    nodes
        .iter()
        .map(|n| {
            let degree = degrees.get(n).copied().unwrap_or(0);
            (n.clone(), degree as f64 / max_degree as f64)
        })
        .collect()
}

/// Returns the interaction strength (sum of link weights) per node id.
///
/// The weighted companion of [`degrees`]: each link adds its weight to both
/// endpoints, a self-loop adds its weight twice. Weights can be any numeric
/// type castable to [`f64`].
///
/// ```rust
/// use ppinet_cloud::strength;
///
/// let nodes = vec!["A", "B"];
/// let links = vec![("A", "B", 0.5), ("A", "B", 0.25)];
/// let strength = strength(&nodes, &links);
///
/// assert_eq!(strength[&"A"], 0.75);
/// ```
pub fn strength<N, W>(nodes: &[N], links: &[(N, N, W)]) -> HashMap<N, f64>
where
    N: Clone + Eq + Hash,
    W: AsPrimitive<f64>,
{
    let mut strength: HashMap<N, f64> = nodes.iter().map(|n| (n.clone(), 0.0)).collect();

    for (source, target, weight) in links {
        *strength.entry(source.clone()).or_insert(0.0) += weight.as_();
        *strength.entry(target.clone()).or_insert(0.0) += weight.as_();
    }

    strength
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
