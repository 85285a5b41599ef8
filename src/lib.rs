#![warn(missing_docs)]
#![doc = include_str!("../README.md")]

//! # Shrake-Rupley Library
//!
//! Solvent accessible surface area of molecular structures with the
//! Shrake-Rupley numerical method. Every atom sphere, inflated by the probe
//! radius, is sampled with a golden-section spiral of points; a point counts
//! as accessible when no neighboring inflated sphere contains it.
//!
//! Results come back as plain records or as Polars DataFrames that can be
//! written to CSV, Parquet or JSON.

mod accessibility;
mod error;
mod export;
mod neighbors;
mod radii;
mod report;
mod sasa;
mod settings;
mod sphere;
mod structure;
mod utils;

// Re-export key public types
pub use accessibility::{count_accessible, Accessibility};
pub use error::{Result, SasaError};
pub use export::{
    save_connolly_xyz, save_pymol_points, write_connolly_xyz, write_pymol_points, FILLER_SYMBOL,
};
pub use neighbors::{
    neighbor_finder, BruteForceNeighbors, NeighborFinder, NeighborStrategy, RTreeNeighbors,
};
pub use radii::{RadiusTable, RADIUS_COLUMN};
pub use report::{
    points_to_df, records_to_df, sphere_points_to_df, sum_column, summarize_by_residue,
    summarize_by_type,
};
pub use sasa::{
    calculate_sasa, compute_areas, AccessiblePoint, AreaRecord, RunContext, SasaResult,
};
pub use settings::{ExportMode, SasaSettings, N_SPHERE_POINTS, PROBE_RADIUS};
pub use sphere::generate_sphere_points;
pub use structure::{atoms_from_pdb, Atom};
pub use utils::{load_model, run_with_threads, write_df_to_file, DataFrameFileType};

use pdbtbx::PDB;
use polars::prelude::DataFrame;
use tracing::debug;

/// Calculate the solvent accessible surface area of every atom in one model.
///
/// # Arguments
///
/// * `pdb` - Reference to a PDB structure
/// * `radius_table` - Van der Waals radii by atom type
/// * `settings` - Probe radius, sampling density and run options
/// * `model_num` - Model to analyze, 0 for the first model
///
/// # Returns
///
/// A Polars DataFrame with one row per atom in file order and columns:
/// - atomi, atom, atomn, segid, resn, resi
/// - vdw_radius, accessible_points, area
///
/// # Example
///
/// ```no_run
/// use shrake_rupley::{get_atom_sasa, load_model, RadiusTable, SasaSettings};
///
/// let (pdb, _warnings) = load_model("path/to/structure.pdb").unwrap();
/// let df = get_atom_sasa(&pdb, &RadiusTable::default(), SasaSettings::default(), 0).unwrap();
/// println!("Computed the SASA of {} atoms", df.height());
/// ```
pub fn get_atom_sasa(
    pdb: &PDB,
    radius_table: &RadiusTable,
    settings: SasaSettings,
    model_num: usize,
) -> Result<DataFrame> {
    let atoms = atoms_from_pdb(pdb, model_num);
    let result = calculate_sasa(&atoms, radius_table, settings)?;
    debug!("Total SASA: {:.2}", result.total_area());
    records_to_df(&result.records)
}
