use crate::Point;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::hash::Hash;

// ----------------------------------------------------------------------------
// Rendering Surface
// ----------------------------------------------------------------------------

/// Duration of an animated fit-to-view pass, in milliseconds.
pub const ANIMATION_MS: u64 = 1000;

/// Options for a rendering surface's fit-to-view pass.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
pub struct FitOptions {
    /// Animate the transition instead of jumping to the fitted view.
    pub animate: bool,
    /// Animation duration in milliseconds; ignored when `animate` is false.
    pub duration_ms: u64,
    /// Padding around the bounding box of all positioned nodes.
    pub padding: f64,
}

impl Default for FitOptions {
    fn default() -> Self {
        FitOptions { animate: false, duration_ms: ANIMATION_MS, padding: 50.0 }
    }
}

/// A capability object for anything that can draw a node-link network.
///
/// The layout engine never talks to a concrete renderer; it only needs to
/// enumerate the nodes the surface currently holds, move one node, and
/// request a fit-to-view pass. Surfaces without animation (a raster PNG,
/// for example) accept [`FitOptions::animate`] and ignore it.
pub trait RenderSurface<N> {
    /// Node ids currently known to the surface.
    fn nodes(&self) -> Vec<N>;

    /// Moves one node to `position`.
    fn set_position(&mut self, node: &N, position: Point);

    /// Recomputes the surface's viewport to bound all positioned nodes.
    fn fit(&mut self, options: &FitOptions);
}

/// Pushes computed positions into a rendering surface.
///
/// Every node the surface knows is looked up in `positions` and moved;
/// nodes with no computed position are skipped silently and keep their
/// prior coordinates (a node can be on the surface yet filtered out of the
/// centrality computation). One fit-to-view pass is then requested,
/// animated over [`ANIMATION_MS`] or instantaneous.
///
/// The whole application is a single batched mutation followed by one fit
/// call; no error conditions are raised.
pub fn apply_layout<N, S>(surface: &mut S, positions: &HashMap<N, Point>, animate: bool)
where
    N: Eq + Hash,
    S: RenderSurface<N> + ?Sized,
{
    for node in surface.nodes() {
        if let Some(position) = positions.get(&node) {
            surface.set_position(&node, *position);
        }
    }

    surface.fit(&FitOptions { animate, ..FitOptions::default() });
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
