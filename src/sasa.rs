//! Per-atom solvent accessible surface area.
//!
//! A [`RunContext`] bundles everything the per-atom computation reads: atom
//! positions, resolved van der Waals radii, the shared unit sphere points and
//! the run settings. It is built once, validated eagerly, and only borrowed
//! afterwards, so the per-atom work can run on any number of threads.

use crate::accessibility::count_accessible;
use crate::error::{Result, SasaError};
use crate::neighbors::neighbor_finder;
use crate::radii::RadiusTable;
use crate::settings::SasaSettings;
use crate::sphere::generate_sphere_points;
use crate::structure::Atom;
use crate::utils::run_with_threads;
use nalgebra::Vector3;
use rayon::prelude::*;
use std::f64::consts::PI;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, trace, warn};

/// Surface area of one atom.
#[derive(Debug, Clone, PartialEq)]
pub struct AreaRecord {
    /// Position of the atom in the input
    pub index: usize,
    /// Accessible surface area in Å²
    pub area: f64,
    /// Atom type symbol
    pub atom: String,
    /// Segment identifier
    pub segid: String,
    /// Residue name
    pub resn: String,
    /// Residue serial number
    pub resi: isize,
    /// Atom name
    pub atomn: String,
    /// Atom serial number
    pub atomi: usize,
    /// Van der Waals radius used for the atom
    pub vdw_radius: f64,
    /// Number of accessible sphere points
    pub accessible_points: usize,
}

/// An accessible test point and the atom it was sampled on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AccessiblePoint {
    /// Position of the owning atom in the input
    pub atom_index: usize,
    /// Coordinates in Å
    pub position: Vector3<f64>,
}

/// Output of [`compute_areas`].
#[derive(Debug, Clone, Default)]
pub struct SasaResult {
    /// One record per atom, in input order
    pub records: Vec<AreaRecord>,
    /// Accessible points, only filled when the export mode asks for them
    pub accessible_points: Vec<AccessiblePoint>,
}

impl SasaResult {
    /// Sum of all per-atom areas.
    pub fn total_area(&self) -> f64 {
        self.records.iter().map(|r| r.area).sum()
    }
}

/// Immutable inputs shared by every atom of a run.
pub struct RunContext<'a> {
    atoms: &'a [Atom],
    positions: Vec<Vector3<f64>>,
    radii: Vec<f64>,
    sphere_points: Vec<Vector3<f64>>,
    settings: SasaSettings,
    interrupt: Option<Arc<AtomicBool>>,
}

impl<'a> RunContext<'a> {
    /// Validate `settings`, resolve the radius of every atom and sample the
    /// unit sphere.
    ///
    /// # Errors
    ///
    /// [`SasaError::InvalidConfiguration`] for unusable settings and
    /// [`SasaError::MissingRadius`] for the first atom whose type is not in
    /// `radius_table`. Nothing is computed in either case.
    pub fn new(
        atoms: &'a [Atom],
        radius_table: &RadiusTable,
        settings: SasaSettings,
    ) -> Result<Self> {
        settings.validate()?;

        let radii = atoms
            .iter()
            .map(|a| radius_table.radius(&a.symbol))
            .collect::<Result<Vec<f64>>>()?;
        let positions = atoms.iter().map(|a| a.position).collect();

        let sphere_points = generate_sphere_points(settings.n_points)?;
        debug!("Generated {} sphere points", sphere_points.len());

        Ok(Self {
            atoms,
            positions,
            radii,
            sphere_points,
            settings,
            interrupt: None,
        })
    }

    /// Abort the run between atoms once `flag` is raised.
    pub fn with_interrupt(mut self, flag: Arc<AtomicBool>) -> Self {
        self.interrupt = Some(flag);
        self
    }

    /// Unit sphere points shared by all atoms.
    pub fn sphere_points(&self) -> &[Vector3<f64>] {
        &self.sphere_points
    }

    /// Van der Waals radius of every atom, in input order.
    pub fn radii(&self) -> &[f64] {
        &self.radii
    }

    /// Settings the context was built with.
    pub fn settings(&self) -> &SasaSettings {
        &self.settings
    }

    /// Unit sphere area represented by each sample point.
    pub fn area_per_point(&self) -> f64 {
        4.0 * PI / self.sphere_points.len() as f64
    }

    fn is_interrupted(&self) -> bool {
        self.interrupt
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::Relaxed))
    }
}

/// Compute the accessible surface area of every atom in the context.
///
/// Records come back in input order whatever the thread count.
///
/// # Errors
///
/// [`SasaError::Interrupted`] if the interrupt flag is raised; no partial
/// result is returned.
pub fn compute_areas(ctx: &RunContext) -> Result<SasaResult> {
    if ctx.atoms.is_empty() {
        warn!("No atoms to process, returning an empty result");
        return Ok(SasaResult::default());
    }

    let finder = neighbor_finder(
        ctx.settings.neighbor_strategy,
        &ctx.positions,
        &ctx.radii,
        ctx.settings.probe_radius,
    );
    let collect_points = ctx.settings.export_mode.needs_points();
    let area_per_point = ctx.area_per_point();

    let process_atom = |k: usize| -> Result<(AreaRecord, Vec<Vector3<f64>>)> {
        if ctx.is_interrupted() {
            return Err(SasaError::Interrupted);
        }
        let neighbors = finder.find(k);
        let accessibility = count_accessible(
            k,
            &neighbors,
            &ctx.positions,
            &ctx.radii,
            &ctx.sphere_points,
            ctx.settings.probe_radius,
            collect_points,
        );
        let radius = ctx.settings.probe_radius + ctx.radii[k];
        let atom = &ctx.atoms[k];
        trace!(
            "Atom {k} ({}) has {} neighbors and {} accessible points",
            atom.symbol,
            neighbors.len(),
            accessibility.count
        );
        let record = AreaRecord {
            index: k,
            area: area_per_point * accessibility.count as f64 * radius * radius,
            atom: atom.symbol.clone(),
            segid: atom.segid.clone(),
            resn: atom.resn.clone(),
            resi: atom.resi,
            atomn: atom.atomn.clone(),
            atomi: atom.atomi,
            vdw_radius: ctx.radii[k],
            accessible_points: accessibility.count,
        };
        Ok((record, accessibility.points))
    };

    let n_atoms = ctx.atoms.len();
    let per_atom: Vec<(AreaRecord, Vec<Vector3<f64>>)> = if ctx.settings.num_threads == 1 {
        (0..n_atoms).map(process_atom).collect::<Result<_>>()?
    } else {
        run_with_threads(ctx.settings.num_threads, || {
            debug!("Using {} thread(s)", rayon::current_num_threads());
            (0..n_atoms)
                .into_par_iter()
                .map(process_atom)
                .collect::<Result<Vec<_>>>()
        })?
    };

    let mut result = SasaResult {
        records: Vec::with_capacity(n_atoms),
        accessible_points: Vec::new(),
    };
    for (record, points) in per_atom {
        let atom_index = record.index;
        result.records.push(record);
        for position in points {
            result.accessible_points.push(AccessiblePoint {
                atom_index,
                position,
            });
        }
    }
    debug!(
        "Computed areas for {} atoms, {} accessible points kept",
        result.records.len(),
        result.accessible_points.len()
    );
    Ok(result)
}

/// Build the run context and compute per-atom areas in one call.
pub fn calculate_sasa(
    atoms: &[Atom],
    radius_table: &RadiusTable,
    settings: SasaSettings,
) -> Result<SasaResult> {
    let ctx = RunContext::new(atoms, radius_table, settings)?;
    compute_areas(&ctx)
}
