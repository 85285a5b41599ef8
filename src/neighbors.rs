//! Occlusion candidate search.
//!
//! Atom `i` is a candidate neighbor of atom `k` when their centers are closer
//! than `r_k + r_i + probe`, where `r` is the van der Waals radius. Note that the
//! probe radius enters this cutoff once, while the occlusion test inflates both
//! spheres by the probe radius.

use nalgebra::Vector3;
use rstar::primitives::GeomWithData;
use rstar::RTree;

/// Backend used to find neighbor candidates.
#[derive(clap::ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NeighborStrategy {
    /// Scan every atom, O(N) per query
    #[default]
    BruteForce,
    /// Query an R-tree over atom centers
    RTree,
}

impl std::fmt::Display for NeighborStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            NeighborStrategy::BruteForce => write!(f, "brute-force"),
            NeighborStrategy::RTree => write!(f, "r-tree"),
        }
    }
}

/// Finds the atoms that may occlude the probe sphere of a given atom.
pub trait NeighborFinder: Sync {
    /// Indices of the candidate neighbors of atom `k`, in ascending order.
    /// The result never contains `k` itself.
    fn find(&self, k: usize) -> Vec<usize>;
}

#[inline]
fn is_candidate(
    pos_k: &Vector3<f64>,
    r_k: f64,
    pos_i: &Vector3<f64>,
    r_i: f64,
    probe: f64,
) -> bool {
    (pos_i - pos_k).norm() < r_k + r_i + probe
}

/// Reference neighbor search that checks every atom pair.
pub struct BruteForceNeighbors<'a> {
    positions: &'a [Vector3<f64>],
    radii: &'a [f64],
    probe_radius: f64,
}

impl<'a> BruteForceNeighbors<'a> {
    /// `radii` holds the van der Waals radius of every atom in `positions`.
    pub fn new(positions: &'a [Vector3<f64>], radii: &'a [f64], probe_radius: f64) -> Self {
        Self {
            positions,
            radii,
            probe_radius,
        }
    }
}

impl NeighborFinder for BruteForceNeighbors<'_> {
    fn find(&self, k: usize) -> Vec<usize> {
        let pos_k = &self.positions[k];
        let r_k = self.radii[k];
        self.positions
            .iter()
            .zip(self.radii)
            .enumerate()
            .filter(|&(i, (pos_i, &r_i))| {
                i != k && is_candidate(pos_k, r_k, pos_i, r_i, self.probe_radius)
            })
            .map(|(i, _)| i)
            .collect()
    }
}

type IndexedPoint = GeomWithData<[f64; 3], usize>;

/// Neighbor search backed by an R-tree over atom centers.
///
/// Returns exactly the same candidates as [`BruteForceNeighbors`]: the tree is
/// queried with the widest cutoff any pair can have, then the pairwise cutoff
/// is applied.
pub struct RTreeNeighbors<'a> {
    positions: &'a [Vector3<f64>],
    radii: &'a [f64],
    probe_radius: f64,
    max_radius: f64,
    tree: RTree<IndexedPoint>,
}

impl<'a> RTreeNeighbors<'a> {
    /// Bulk load the tree from `positions`.
    pub fn new(positions: &'a [Vector3<f64>], radii: &'a [f64], probe_radius: f64) -> Self {
        let tree = RTree::bulk_load(
            positions
                .iter()
                .enumerate()
                .map(|(i, p)| IndexedPoint::new([p.x, p.y, p.z], i))
                .collect(),
        );
        let max_radius = radii.iter().copied().fold(0.0, f64::max);
        Self {
            positions,
            radii,
            probe_radius,
            max_radius,
            tree,
        }
    }
}

impl NeighborFinder for RTreeNeighbors<'_> {
    fn find(&self, k: usize) -> Vec<usize> {
        let pos_k = &self.positions[k];
        let r_k = self.radii[k];
        // Slack keeps boundary pairs that squared distances might round away
        let cutoff = r_k + self.max_radius + self.probe_radius + 1e-6;

        let mut neighbors: Vec<usize> = self
            .tree
            .locate_within_distance([pos_k.x, pos_k.y, pos_k.z], cutoff * cutoff)
            .map(|p| p.data)
            .filter(|&i| {
                i != k
                    && is_candidate(
                        pos_k,
                        r_k,
                        &self.positions[i],
                        self.radii[i],
                        self.probe_radius,
                    )
            })
            .collect();
        neighbors.sort_unstable();
        neighbors
    }
}

/// Build the neighbor finder selected by `strategy`.
pub fn neighbor_finder<'a>(
    strategy: NeighborStrategy,
    positions: &'a [Vector3<f64>],
    radii: &'a [f64],
    probe_radius: f64,
) -> Box<dyn NeighborFinder + 'a> {
    match strategy {
        NeighborStrategy::BruteForce => {
            Box::new(BruteForceNeighbors::new(positions, radii, probe_radius))
        }
        NeighborStrategy::RTree => Box::new(RTreeNeighbors::new(positions, radii, probe_radius)),
    }
}
