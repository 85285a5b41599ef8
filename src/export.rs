//! Export of sphere points and accessible points for external viewers.
//!
//! Point sets are written as `PyMOL` CGO scripts (`run points.py` inside PyMOL),
//! the Connolly surface as an XYZ structure readable by most molecular viewers.

use crate::sasa::AccessiblePoint;
use crate::structure::Atom;
use nalgebra::Vector3;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Atom type used for accessible points in the Connolly surface
pub const FILLER_SYMBOL: &str = "C";

/// Write `points` as a `PyMOL` CGO script of small spheres.
///
/// Points are colored by their `y` coordinate from green (low) to white (high),
/// which makes the spiral layout of the sphere sampling easy to follow.
///
/// # Errors
/// Returns an error if writing to the output fails.
pub fn write_pymol_points<W: Write>(
    mut writer: W,
    points: &[Vector3<f64>],
    object_name: &str,
    dot_radius: f64,
) -> io::Result<()> {
    writeln!(writer, "from pymol.cgo import *")?;
    writeln!(writer, "from pymol import cmd")?;
    writeln!(writer)?;

    let y_min = points.iter().map(|p| p.y).fold(f64::INFINITY, f64::min);
    let y_max = points.iter().map(|p| p.y).fold(f64::NEG_INFINITY, f64::max);
    let span = if y_max > y_min { y_max - y_min } else { 1.0 };

    writeln!(writer, "cgo_graphics_list_points = [")?;
    for p in points {
        let shade = (p.y - y_min) / span;
        writeln!(writer, "    COLOR, {shade:.3}, 1, {shade:.3},")?;
        writeln!(
            writer,
            "    SPHERE, {:.6}, {:.6}, {:.6}, {:.6},",
            p.x, p.y, p.z, dot_radius
        )?;
    }
    writeln!(writer, "]")?;
    writeln!(writer, "cmd.load_cgo(cgo_graphics_list_points, '{object_name}')")?;

    Ok(())
}

/// Write a `PyMOL` CGO point script to `path`.
pub fn save_pymol_points(
    path: &Path,
    points: &[Vector3<f64>],
    object_name: &str,
    dot_radius: f64,
) -> io::Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_pymol_points(&mut writer, points, object_name, dot_radius)?;
    writer.flush()
}

/// Write the Connolly surface as XYZ: every accessible point as a
/// [`FILLER_SYMBOL`] atom, followed by the input atoms in order.
///
/// # Errors
/// Returns an error if writing to the output fails.
pub fn write_connolly_xyz<W: Write>(
    mut writer: W,
    points: &[AccessiblePoint],
    atoms: &[Atom],
) -> io::Result<()> {
    writeln!(writer, "{}", points.len() + atoms.len())?;
    writeln!(
        writer,
        "Connolly surface: {} accessible points, {} atoms",
        points.len(),
        atoms.len()
    )?;
    for p in points {
        writeln!(
            writer,
            "{:<2} {:>15.8} {:>15.8} {:>15.8}",
            FILLER_SYMBOL, p.position.x, p.position.y, p.position.z
        )?;
    }
    for a in atoms {
        writeln!(
            writer,
            "{:<2} {:>15.8} {:>15.8} {:>15.8}",
            a.symbol, a.position.x, a.position.y, a.position.z
        )?;
    }
    Ok(())
}

/// Write the Connolly surface XYZ file to `path`.
pub fn save_connolly_xyz(
    path: &Path,
    points: &[AccessiblePoint],
    atoms: &[Atom],
) -> io::Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_connolly_xyz(&mut writer, points, atoms)?;
    writer.flush()
}
