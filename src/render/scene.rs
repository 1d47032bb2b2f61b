//! Procedural "neural network" scene for the hero background.
//!
//! Generated once per mount and immutable afterwards:
//! - Nodes: uniform random points in a box (wider on X than Z)
//! - Edges: every node pair closer than `connect_distance`, truncated
//! - Stars: far-field points on a thick spherical shell
//! - Orbs and data rings: fixed accent shapes
//!
//! The per-frame animator only reads a `SceneTopology`; nothing here is
//! recomputed while the page is on screen.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;

use crate::config::BackgroundConfig;
use crate::theme::Rgba;

/// A point of the network.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneNode {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl SceneNode {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn distance_squared(&self, other: &SceneNode) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        dx * dx + dy * dy + dz * dz
    }

    pub fn distance(&self, other: &SceneNode) -> f32 {
        self.distance_squared(other).sqrt()
    }

    pub fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }
}

/// Connection between two nodes, by index into `SceneTopology::nodes`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SceneEdge {
    pub from: usize,
    pub to: usize,
}

/// Wireframe accent shape that bobs over time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatingOrb {
    pub position: [f32; 3],
    pub color: Rgba,
    pub scale: f32,
}

/// One of the concentric "data stream" rings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DataRing {
    pub radius: f32,
    /// Fixed rotation about Z before the shared spin
    pub base_rotation: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    pub position: [f32; 3],
    /// Twinkle phase offset, radians
    pub phase: f32,
}

/// Generation parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneParams {
    pub seed: Option<u64>,
    pub node_count: usize,
    pub extent: [f32; 3],
    pub connect_distance: f32,
    pub max_edges: usize,
    pub star_count: usize,
}

impl Default for SceneParams {
    fn default() -> Self {
        SceneParams::from(&BackgroundConfig::default())
    }
}

impl From<&BackgroundConfig> for SceneParams {
    fn from(cfg: &BackgroundConfig) -> Self {
        Self {
            seed: cfg.seed,
            node_count: cfg.node_count,
            extent: cfg.extent,
            connect_distance: cfg.connect_distance,
            max_edges: cfg.max_edges,
            star_count: cfg.star_count,
        }
    }
}

/// Immutable output of one generation run.
#[derive(Debug, Clone)]
pub struct SceneTopology {
    /// Seed actually used (drawn from entropy when none was configured)
    pub seed: u64,
    pub connect_distance: f32,
    pub nodes: Vec<SceneNode>,
    /// Edges to draw, at most `max_edges`
    pub edges: Vec<SceneEdge>,
    /// Edges found before truncation
    pub total_edges: usize,
    pub stars: Vec<Star>,
    pub orbs: Vec<FloatingOrb>,
    pub rings: Vec<DataRing>,
}

impl SceneTopology {
    pub fn endpoints(&self, edge: &SceneEdge) -> (&SceneNode, &SceneNode) {
        (&self.nodes[edge.from], &self.nodes[edge.to])
    }
}

const STAR_RADIUS: f32 = 50.0;
const STAR_DEPTH: f32 = 50.0;
const RING_COUNT: usize = 8;

/// Build the scene topology.
pub fn generate(params: &SceneParams) -> SceneTopology {
    let seed = params.seed.unwrap_or_else(rand::random::<u64>);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let nodes: Vec<SceneNode> = (0..params.node_count)
        .map(|_| {
            SceneNode::new(
                (rng.gen::<f32>() - 0.5) * params.extent[0],
                (rng.gen::<f32>() - 0.5) * params.extent[1],
                (rng.gen::<f32>() - 0.5) * params.extent[2],
            )
        })
        .collect();

    let mut edges = proximity_edges(&nodes, params.connect_distance);
    let total_edges = edges.len();
    edges.truncate(params.max_edges);

    let stars = (0..params.star_count).map(|_| random_star(&mut rng)).collect();

    log::info!(
        "Generated scene: seed={} nodes={} edges={}/{} stars={}",
        seed,
        nodes.len(),
        edges.len(),
        total_edges,
        params.star_count
    );

    SceneTopology {
        seed,
        connect_distance: params.connect_distance,
        nodes,
        edges,
        total_edges,
        stars,
        orbs: default_orbs(),
        rings: default_rings(),
    }
}

/// All pairs `(i, j)`, `i < j`, closer than `threshold`, in `(i, j)` order.
pub fn proximity_edges(nodes: &[SceneNode], threshold: f32) -> Vec<SceneEdge> {
    let limit = threshold * threshold;
    (0..nodes.len())
        .into_par_iter()
        .flat_map_iter(move |i| {
            ((i + 1)..nodes.len())
                .filter(move |&j| nodes[i].distance_squared(&nodes[j]) < limit)
                .map(move |j| SceneEdge { from: i, to: j })
        })
        .collect()
}

fn random_star(rng: &mut impl Rng) -> Star {
    // Uniform direction: z uniform in [-1, 1], azimuth uniform
    let z: f32 = rng.gen_range(-1.0..1.0);
    let theta: f32 = rng.gen_range(0.0..std::f32::consts::TAU);
    let ring = (1.0 - z * z).sqrt();
    let r = STAR_RADIUS + STAR_DEPTH * rng.gen::<f32>();
    Star {
        position: [r * ring * theta.cos(), r * ring * theta.sin(), r * z],
        phase: rng.gen_range(0.0..std::f32::consts::TAU),
    }
}

fn default_orbs() -> Vec<FloatingOrb> {
    vec![
        FloatingOrb { position: [-6.0, 2.0, -3.0], color: Rgba::rgb(0x06, 0xb6, 0xd4), scale: 0.8 },
        FloatingOrb { position: [7.0, -1.0, -4.0], color: Rgba::rgb(0x8b, 0x5c, 0xf6), scale: 0.6 },
        FloatingOrb { position: [0.0, 4.0, -6.0], color: Rgba::rgb(0x22, 0xd3, 0xee), scale: 0.5 },
        FloatingOrb { position: [-4.0, -3.0, -2.0], color: Rgba::rgb(0xa8, 0x55, 0xf7), scale: 0.4 },
    ]
}

fn default_rings() -> Vec<DataRing> {
    (0..RING_COUNT)
        .map(|i| DataRing {
            radius: 6.0 + i as f32 * 0.5,
            base_rotation: i as f32 * std::f32::consts::FRAC_PI_4,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(seed: u64) -> SceneParams {
        SceneParams {
            seed: Some(seed),
            ..SceneParams::default()
        }
    }

    #[test]
    fn test_node_count_is_deterministic() {
        let params = SceneParams::default();
        let a = generate(&params);
        let b = generate(&params);
        assert_eq!(a.nodes.len(), params.node_count);
        assert_eq!(b.nodes.len(), params.node_count);
    }

    #[test]
    fn test_every_edge_is_below_threshold() {
        for seed in 0..5 {
            let scene = generate(&SceneParams {
                max_edges: usize::MAX,
                ..seeded(seed)
            });
            assert_eq!(scene.edges.len(), scene.total_edges);
            for edge in &scene.edges {
                let (a, b) = scene.endpoints(edge);
                assert!(
                    a.distance(b) < scene.connect_distance,
                    "edge {:?} spans {} >= {}",
                    edge,
                    a.distance(b),
                    scene.connect_distance
                );
                assert!(edge.from < edge.to);
            }
        }
    }

    #[test]
    fn test_edge_scan_finds_every_close_pair() {
        let scene = generate(&SceneParams {
            max_edges: usize::MAX,
            ..seeded(11)
        });
        let mut expected = 0;
        for i in 0..scene.nodes.len() {
            for j in (i + 1)..scene.nodes.len() {
                let d2 = scene.nodes[i].distance_squared(&scene.nodes[j]);
                if d2 < scene.connect_distance * scene.connect_distance {
                    expected += 1;
                }
            }
        }
        assert_eq!(scene.total_edges, expected);
    }

    #[test]
    fn test_edges_truncated_to_max() {
        let scene = generate(&SceneParams {
            node_count: 120,
            connect_distance: 8.0,
            max_edges: 10,
            ..seeded(3)
        });
        assert!(scene.total_edges > 10, "dense scene should exceed the cap");
        assert_eq!(scene.edges.len(), 10);
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let a = generate(&seeded(42));
        let b = generate(&seeded(42));
        assert_eq!(a.nodes, b.nodes);
        assert_eq!(a.edges, b.edges);
        assert_eq!(a.stars, b.stars);

        let c = generate(&seeded(43));
        assert_ne!(a.nodes, c.nodes);
    }

    #[test]
    fn test_nodes_within_extent() {
        let params = seeded(9);
        let scene = generate(&params);
        for n in &scene.nodes {
            assert!(n.x.abs() <= params.extent[0] * 0.5);
            assert!(n.y.abs() <= params.extent[1] * 0.5);
            assert!(n.z.abs() <= params.extent[2] * 0.5);
        }
    }

    #[test]
    fn test_stars_on_shell() {
        let scene = generate(&seeded(5));
        for s in &scene.stars {
            let r = SceneNode::new(s.position[0], s.position[1], s.position[2])
                .distance(&SceneNode::new(0.0, 0.0, 0.0));
            assert!(r >= STAR_RADIUS - 1e-3 && r <= STAR_RADIUS + STAR_DEPTH + 1e-3, "r = {}", r);
        }
    }

    #[test]
    fn test_fixed_accents() {
        let scene = generate(&seeded(1));
        assert_eq!(scene.orbs.len(), 4);
        assert_eq!(scene.rings.len(), RING_COUNT);
        assert!((scene.rings[7].radius - 9.5).abs() < 1e-6);
    }
}
