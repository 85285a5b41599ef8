//! Tabular reports of per-atom areas.

use crate::error::Result;
use crate::sasa::{AccessiblePoint, AreaRecord};
use nalgebra::Vector3;
use polars::prelude::*;

/// Per-atom table with one row per [`AreaRecord`], in atom order.
///
/// Columns: atomi, atom, atomn, segid, resn, resi, vdw_radius,
/// accessible_points, area
pub fn records_to_df(records: &[AreaRecord]) -> Result<DataFrame> {
    let df = df!(
        "atomi" => records.iter().map(|x| x.atomi as i64).collect::<Vec<i64>>(),
        "atom" => records.iter().map(|x| x.atom.to_owned()).collect::<Vec<String>>(),
        "atomn" => records.iter().map(|x| x.atomn.to_owned()).collect::<Vec<String>>(),
        "segid" => records.iter().map(|x| x.segid.to_owned()).collect::<Vec<String>>(),
        "resn" => records.iter().map(|x| x.resn.to_owned()).collect::<Vec<String>>(),
        "resi" => records.iter().map(|x| x.resi as i64).collect::<Vec<i64>>(),
        "vdw_radius" => records.iter().map(|x| x.vdw_radius).collect::<Vec<f64>>(),
        "accessible_points" => records
            .iter()
            .map(|x| x.accessible_points as u64)
            .collect::<Vec<u64>>(),
        "area" => records.iter().map(|x| x.area).collect::<Vec<f64>>(),
    )?;
    Ok(df)
}

/// Total and mean area per atom type, sorted by type.
///
/// Columns: atom, total_area, mean_area, n_atoms
pub fn summarize_by_type(df_atoms: &DataFrame) -> Result<DataFrame> {
    let df = df_atoms
        .clone()
        .lazy()
        .group_by([col("atom")])
        .agg([
            col("area").sum().alias("total_area"),
            col("area").mean().alias("mean_area"),
            col("area").count().alias("n_atoms"),
        ])
        .sort(["atom"], Default::default())
        .collect()?;
    Ok(df)
}

/// Total area per residue.
///
/// Columns: segid, resn, resi, area
pub fn summarize_by_residue(df_atoms: &DataFrame) -> Result<DataFrame> {
    let df = df_atoms
        .clone()
        .lazy()
        .group_by([col("segid"), col("resn"), col("resi")])
        .agg([col("area").sum()])
        .sort(["segid", "resi"], Default::default())
        .collect()?;
    Ok(df)
}

/// Sum a float column using polars lazy aggregation, 0.0 when empty.
pub fn sum_column(df: &DataFrame, column: &str) -> Result<f64> {
    let total = df
        .clone()
        .lazy()
        .select([col(column).sum()])
        .collect()?
        .column(column)?
        .f64()?
        .get(0)
        .unwrap_or(0.0);
    Ok(total)
}

/// Accessible points as a table.
///
/// Columns: atom_index, x, y, z
pub fn points_to_df(points: &[AccessiblePoint]) -> Result<DataFrame> {
    let df = df!(
        "atom_index" => points.iter().map(|p| p.atom_index as u64).collect::<Vec<u64>>(),
        "x" => points.iter().map(|p| p.position.x).collect::<Vec<f64>>(),
        "y" => points.iter().map(|p| p.position.y).collect::<Vec<f64>>(),
        "z" => points.iter().map(|p| p.position.z).collect::<Vec<f64>>(),
    )?;
    Ok(df)
}

/// Unit sphere points as a table with columns x, y, z.
pub fn sphere_points_to_df(points: &[Vector3<f64>]) -> Result<DataFrame> {
    let df = df!(
        "x" => points.iter().map(|p| p.x).collect::<Vec<f64>>(),
        "y" => points.iter().map(|p| p.y).collect::<Vec<f64>>(),
        "z" => points.iter().map(|p| p.z).collect::<Vec<f64>>(),
    )?;
    Ok(df)
}
