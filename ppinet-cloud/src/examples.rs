//! Canned interaction networks for documentation and tests.

/// Returns the three-node hub network used throughout the documentation.
///
/// `A` interacts with `B` and `C`, so its degree is 2 and its normalized
/// centrality 1.0, while the leaves score 0.5.
///
/// ```rust
/// use ppinet_cloud::{centrality, examples};
///
/// let (nodes, links) = examples::example_1();
/// let scores = centrality(&nodes, &links);
/// assert_eq!(scores[&"A"], 1.0);
/// ```
pub fn example_1() -> (Vec<&'static str>, Vec<(&'static str, &'static str)>) {
    let nodes = vec!["A", "B", "C"];
    let links = vec![("A", "B"), ("A", "C")];
    (nodes, links)
}

/// Returns a small oxidative-stress regulon with a clear hub structure.
///
/// `oxyR` is the hub; `katG`, `ahpC` and `ahpF` form its first shell,
/// `dps` and `grxA` hang off the periphery, and `sufA` is isolated.
pub fn example_2() -> (Vec<&'static str>, Vec<(&'static str, &'static str)>) {
    let nodes = vec!["oxyR", "katG", "ahpC", "ahpF", "dps", "grxA", "sufA"];
    let links = vec![
        ("oxyR", "katG"),
        ("oxyR", "ahpC"),
        ("oxyR", "ahpF"),
        ("oxyR", "dps"),
        ("oxyR", "grxA"),
        ("ahpC", "ahpF"),
        ("katG", "dps"),
    ];
    (nodes, links)
}
