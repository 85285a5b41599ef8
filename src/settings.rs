//! SASA run settings.

use crate::error::{Result, SasaError};
use crate::neighbors::NeighborStrategy;

/// Radius of a water molecule, the usual solvent probe (Å)
pub const PROBE_RADIUS: f64 = 1.4;
/// Sampling points per atom sphere
pub const N_SPHERE_POINTS: usize = 1000;

/// Optional export of the accessible test points.
#[derive(clap::ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExportMode {
    /// No export
    #[default]
    None,
    /// Accessible points as a table plus a PyMOL CGO point cloud
    PointCloud,
    /// Accessible points combined with the input atoms as an XYZ structure
    ConnollySurface,
}

impl ExportMode {
    /// Whether accessible point coordinates need to be kept during the run.
    pub fn needs_points(&self) -> bool {
        !matches!(self, ExportMode::None)
    }
}

impl std::fmt::Display for ExportMode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ExportMode::None => write!(f, "none"),
            ExportMode::PointCloud => write!(f, "point-cloud"),
            ExportMode::ConnollySurface => write!(f, "connolly-surface"),
        }
    }
}

/// Configuration for a single SASA run.
#[derive(Clone, Debug)]
pub struct SasaSettings {
    /// Probe radius added to every van der Waals radius (Å)
    pub probe_radius: f64,
    /// Number of points sampled on each atom sphere
    pub n_points: usize,
    /// Write the unit sphere point set for inspection
    pub visualize_sphere_points: bool,
    /// Export of the accessible points
    pub export_mode: ExportMode,
    /// Neighbor search backend
    pub neighbor_strategy: NeighborStrategy,
    /// Worker threads, 0 for all cores
    pub num_threads: usize,
}

impl Default for SasaSettings {
    fn default() -> Self {
        Self {
            probe_radius: PROBE_RADIUS,
            n_points: N_SPHERE_POINTS,
            visualize_sphere_points: false,
            export_mode: ExportMode::None,
            neighbor_strategy: NeighborStrategy::BruteForce,
            num_threads: 1,
        }
    }
}

impl SasaSettings {
    /// Reject settings that cannot produce a meaningful surface.
    pub fn validate(&self) -> Result<()> {
        if self.n_points == 0 {
            return Err(SasaError::InvalidConfiguration(
                "number of sphere points must be positive".to_string(),
            ));
        }
        if !self.probe_radius.is_finite() || self.probe_radius < 0.0 {
            return Err(SasaError::InvalidConfiguration(format!(
                "probe radius must be a non-negative number, got {}",
                self.probe_radius
            )));
        }
        Ok(())
    }
}
