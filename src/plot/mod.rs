use crate::network::Network;
use crate::utils;
use clap::Parser;
use color_eyre::eyre::{Report, Result, WrapErr};
use log::{debug, info};
use ppinet_cloud::{apply_layout, centrality, CloudConfig, FitOptions, Point, RenderSurface};
use raqote::{DrawOptions, DrawTarget, PathBuilder, SolidSource, Source, StrokeStyle};
use std::collections::{BTreeMap, HashMap};
use std::f32::consts::TAU;
use std::path::{Path, PathBuf};

// ----------------------------------------------------------------------------
// Scene
// ----------------------------------------------------------------------------

/// Categorical palette, one entry per functional category.
const COLORS: &[(u8, u8, u8)] = &[
    (31, 119, 180),
    (255, 127, 14),
    (44, 160, 44),
    (214, 39, 40),
    (148, 103, 189),
    (140, 86, 75),
    (227, 119, 194),
    (127, 127, 127),
    (188, 189, 34),
    (23, 190, 207),
];

const EDGE_COLOR: (u8, u8, u8) = (205, 205, 205);

/// Palette index for proteins without a functional category (grey).
const FALLBACK_COLOR: usize = 7;

/// Base node radius in pixels; hubs grow up to double this.
pub const NODE_RADIUS: f64 = 5.0;

#[derive(Clone, Copy, Debug)]
struct SceneNode {
    position: Point,
    radius: f64,
    color: usize,
}

/// The fit-to-view transform from layout space to pixel space.
#[derive(Clone, Copy, Debug)]
struct Viewport {
    scale: f64,
    offset_x: f64,
    offset_y: f64,
}

/// A static raster rendering surface for a network.
///
/// Implements [`RenderSurface`] so the layout applicator can move nodes and
/// request a fit pass; `animate` is accepted and ignored, a raster has no
/// animation to run.
pub struct Scene {
    width: i32,
    height: i32,
    nodes: BTreeMap<String, SceneNode>,
    links: Vec<(String, String)>,
    viewport: Option<Viewport>,
}

impl Scene {
    /// Stage a network for drawing: one node per protein, colored by
    /// functional category, sized by centrality.
    pub fn from_network(network: &Network, width: i32, height: i32) -> Self {
        let scores = centrality(&network.node_ids(), &network.link_pairs());

        // stable category -> palette assignment
        let categories: BTreeMap<&str, usize> = network
            .proteins
            .iter()
            .filter_map(|p| p.category.as_deref())
            .collect::<std::collections::BTreeSet<&str>>()
            .into_iter()
            .enumerate()
            .map(|(index, category)| (category, index))
            .collect();

        let nodes = network
            .proteins
            .iter()
            .map(|protein| {
                let score = scores.get(protein.id.as_str()).copied().unwrap_or(0.0);
                let color = protein
                    .category
                    .as_deref()
                    .and_then(|category| categories.get(category).copied())
                    .unwrap_or(FALLBACK_COLOR);
                let node = SceneNode {
                    position: Point::default(),
                    radius: NODE_RADIUS * (1.0 + score),
                    color,
                };
                (protein.id.clone(), node)
            })
            .collect();

        let links = network
            .interactions
            .iter()
            .map(|i| (i.source.clone(), i.target.clone()))
            .collect();

        Scene { width, height, nodes, links, viewport: None }
    }

    /// Map a layout-space point into pixel space.
    fn project(&self, point: &Point) -> (f32, f32) {
        match &self.viewport {
            Some(v) => (
                (v.scale * point.x + v.offset_x) as f32,
                (v.scale * point.y + v.offset_y) as f32,
            ),
            None => (point.x as f32, point.y as f32),
        }
    }

    /// Rasterize the scene to a PNG file.
    pub fn render(&self, path: &Path) -> Result<(), Report> {
        let mut dt = DrawTarget::new(self.width, self.height);
        dt.clear(SolidSource::from_unpremultiplied_argb(0xff, 0xff, 0xff, 0xff));

        let (r, g, b) = EDGE_COLOR;
        let edge_source = Source::Solid(SolidSource::from_unpremultiplied_argb(0xff, r, g, b));
        let stroke = StrokeStyle { width: 1.0, ..StrokeStyle::default() };

        for (source, target) in &self.links {
            let (from, to) = match (self.nodes.get(source), self.nodes.get(target)) {
                (Some(from), Some(to)) => (from, to),
                // dangling endpoints count toward degree but cannot be drawn
                _ => continue,
            };
            let (x1, y1) = self.project(&from.position);
            let (x2, y2) = self.project(&to.position);

            let mut pb = PathBuilder::new();
            pb.move_to(x1, y1);
            pb.line_to(x2, y2);
            dt.stroke(&pb.finish(), &edge_source, &stroke, &DrawOptions::new());
        }

        for node in self.nodes.values() {
            let (x, y) = self.project(&node.position);
            let (r, g, b) = COLORS[node.color % COLORS.len()];
            let source = Source::Solid(SolidSource::from_unpremultiplied_argb(0xff, r, g, b));

            let mut pb = PathBuilder::new();
            pb.arc(x, y, node.radius as f32, 0.0, TAU);
            dt.fill(&pb.finish(), &source, &DrawOptions::new());
        }

        dt.write_png(path).wrap_err_with(|| format!("Failed to write plot: {path:?}"))?;
        Ok(())
    }
}

impl RenderSurface<String> for Scene {
    fn nodes(&self) -> Vec<String> {
        self.nodes.keys().cloned().collect()
    }

    fn set_position(&mut self, node: &String, position: Point) {
        if let Some(node) = self.nodes.get_mut(node) {
            node.position = position;
        }
    }

    fn fit(&mut self, options: &FitOptions) {
        if self.nodes.is_empty() {
            self.viewport = None;
            return;
        }

        let (mut min_x, mut min_y) = (f64::INFINITY, f64::INFINITY);
        let (mut max_x, mut max_y) = (f64::NEG_INFINITY, f64::NEG_INFINITY);
        for node in self.nodes.values() {
            min_x = min_x.min(node.position.x);
            min_y = min_y.min(node.position.y);
            max_x = max_x.max(node.position.x);
            max_y = max_y.max(node.position.y);
        }

        let span_x = (max_x - min_x).max(1.0);
        let span_y = (max_y - min_y).max(1.0);
        let scale = ((self.width as f64 - 2.0 * options.padding) / span_x)
            .min((self.height as f64 - 2.0 * options.padding) / span_y);
        let scale = if scale.is_finite() && scale > 0.0 { scale } else { 1.0 };

        debug!("Fitting viewport: scale {scale:.3}, padding {}.", options.padding);
        self.viewport = Some(Viewport {
            scale,
            offset_x: self.width as f64 / 2.0 - scale * (min_x + max_x) / 2.0,
            offset_y: self.height as f64 / 2.0 - scale * (min_y + max_y) / 2.0,
        });
    }
}

// ----------------------------------------------------------------------------
// Plot Command
// ----------------------------------------------------------------------------

/// Plot arguments.
#[derive(Debug, Parser)]
#[clap(verbatim_doc_comment)]
pub struct Args {
    /// Network snapshot (.json, or .json.zst).
    #[clap(short = 'n', long, required = true)]
    pub network: PathBuf,

    /// Positions file from `ppinet run`.
    ///
    /// A fresh layout is computed with default settings when absent.
    #[clap(short = 'p', long)]
    pub positions: Option<PathBuf>,

    /// Output image (.png).
    #[clap(short = 'o', long, required = true)]
    pub output: PathBuf,

    /// Image width in pixels.
    #[clap(long, default_value_t = 1200)]
    pub width: i32,

    /// Image height in pixels.
    #[clap(long, default_value_t = 900)]
    pub height: i32,

    /// Jitter seed when computing a fresh layout.
    #[clap(long)]
    pub seed: Option<u64>,
}

/// Render a network layout to PNG.
pub fn plot(args: &Args) -> Result<(), Report> {
    let network = Network::read(&args.network)?;

    let positions: HashMap<String, Point> = match &args.positions {
        Some(path) => serde_json::from_str(&utils::read_to_string(path)?)
            .wrap_err_with(|| format!("Failed to parse positions: {path:?}"))?,
        None => crate::run::layout(&network, &CloudConfig::default(), args.seed),
    };

    let mut scene = Scene::from_network(&network, args.width, args.height);
    apply_layout(&mut scene, &positions, false);
    scene.render(&args.output)?;

    info!("Wrote plot: {:?}", args.output);
    Ok(())
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::{Interaction, Protein};

    fn toy_network() -> Network {
        Network {
            proteins: vec![
                Protein {
                    id: "A".to_string(),
                    label: None,
                    category: Some("regulator".to_string()),
                    ortholog: false,
                },
                Protein { id: "B".to_string(), label: None, category: None, ortholog: false },
            ],
            interactions: vec![Interaction {
                source: "A".to_string(),
                target: "B".to_string(),
                weight: Some(0.9),
                score_type: Default::default(),
            }],
            ..Network::new()
        }
    }

    #[test]
    fn fit_centers_the_bounding_box() {
        let mut scene = Scene::from_network(&toy_network(), 1000, 800);

        let positions = HashMap::from([
            ("A".to_string(), Point { x: -100.0, y: 0.0 }),
            ("B".to_string(), Point { x: 100.0, y: 0.0 }),
        ]);
        apply_layout(&mut scene, &positions, false);

        // the midpoint of the layout lands on the canvas center
        let (ax, ay) = scene.project(&Point { x: -100.0, y: 0.0 });
        let (bx, by) = scene.project(&Point { x: 100.0, y: 0.0 });
        assert_eq!((ax + bx) / 2.0, 500.0);
        assert_eq!(ay, 400.0);
        assert_eq!(by, 400.0);

        // the padded canvas is fully used along the wide axis
        assert_eq!(ax, 50.0);
        assert_eq!(bx, 950.0);
    }

    #[test]
    fn hubs_are_drawn_larger() {
        let scene = Scene::from_network(&toy_network(), 100, 100);
        // both nodes have degree 1 here, so radii are equal and doubled
        assert_eq!(scene.nodes["A"].radius, NODE_RADIUS * 2.0);
        assert_eq!(scene.nodes["B"].radius, NODE_RADIUS * 2.0);
    }

    #[test]
    fn renders_a_png() -> Result<(), Report> {
        let mut scene = Scene::from_network(&toy_network(), 200, 200);
        let positions = HashMap::from([
            ("A".to_string(), Point { x: -50.0, y: -20.0 }),
            ("B".to_string(), Point { x: 50.0, y: 20.0 }),
        ]);
        apply_layout(&mut scene, &positions, false);

        let dir = tempfile::tempdir()?;
        let path = dir.path().join("cloud.png");
        scene.render(&path)?;

        assert!(path.exists());
        assert!(std::fs::metadata(&path)?.len() > 0);
        Ok(())
    }
}
