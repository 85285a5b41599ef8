//! Van der Waals radius lookup by atom type symbol.
//!
//! Default radii are the ones pdbtbx ships for every element, from S. Alvarez,
//! "A cartography of the van der Waals territories", Dalton Trans. 42,
//! 8617-8636 (2013). Tables in the same `symbol,vdw_radius` layout can be
//! loaded from CSV instead.

use crate::error::{Result, SasaError};
use pdbtbx::Element;
use polars::prelude::*;
use std::collections::HashMap;
use std::path::Path;

/// Name of the radius column in CSV radius tables
pub const RADIUS_COLUMN: &str = "vdw_radius";

/// Highest atomic number known to [`pdbtbx::Element`]
const MAX_ATOMIC_NUMBER: usize = 118;

/// Read-only map from atom type symbol to van der Waals radius.
///
/// Symbols are matched case-insensitively, so `FE`, `Fe` and `fe` share an entry.
#[derive(Clone, Debug)]
pub struct RadiusTable {
    radii: HashMap<String, f64>,
}

impl Default for RadiusTable {
    fn default() -> Self {
        Self::alvarez()
    }
}

impl RadiusTable {
    /// Alvarez (2013) radii of every element pdbtbx has a van der Waals
    /// radius for.
    pub fn alvarez() -> Self {
        let mut table = Self::empty();
        for element in (1..=MAX_ATOMIC_NUMBER).filter_map(Element::new) {
            if let Some(radius) = element.atomic_radius().van_der_waals {
                table.insert(element.symbol(), radius);
            }
        }
        table
    }

    /// Table without any entries.
    pub fn empty() -> Self {
        Self {
            radii: HashMap::new(),
        }
    }

    /// Add or replace the radius of `symbol`.
    pub fn insert(&mut self, symbol: &str, radius: f64) {
        self.radii.insert(normalize_symbol(symbol), radius);
    }

    /// Load a radius table from a CSV file.
    ///
    /// The first column holds the type symbols and the `vdw_radius` column holds
    /// the radii in Å. Every radius must be a positive number.
    ///
    /// # Errors
    ///
    /// Returns [`SasaError::InvalidRadiusTable`] for a missing radius column,
    /// empty symbols or non-positive radii, and [`SasaError::Polars`] when the
    /// file cannot be parsed.
    pub fn from_csv(path: &Path) -> Result<Self> {
        let df = CsvReadOptions::default()
            .with_has_header(true)
            .try_into_reader_with_file_path(Some(path.to_path_buf()))?
            .finish()?;
        Self::from_df(&df)
    }

    fn from_df(df: &DataFrame) -> Result<Self> {
        let symbol_col = df
            .get_columns()
            .first()
            .ok_or_else(|| SasaError::InvalidRadiusTable("table has no columns".to_string()))?
            .cast(&DataType::String)?;
        let radius_col = df
            .column(RADIUS_COLUMN)
            .map_err(|_| {
                SasaError::InvalidRadiusTable(format!("missing '{RADIUS_COLUMN}' column"))
            })?
            .cast(&DataType::Float64)?;

        let mut table = Self::empty();
        for (symbol, radius) in symbol_col.str()?.into_iter().zip(radius_col.f64()?) {
            let symbol = match symbol.map(str::trim) {
                Some(s) if !s.is_empty() => s,
                _ => {
                    return Err(SasaError::InvalidRadiusTable(
                        "empty atom type symbol".to_string(),
                    ));
                }
            };
            match radius {
                Some(r) if r.is_finite() && r > 0.0 => table.insert(symbol, r),
                _ => {
                    return Err(SasaError::InvalidRadiusTable(format!(
                        "radius of '{symbol}' must be a positive number"
                    )));
                }
            }
        }
        Ok(table)
    }

    /// Radius of `symbol`, failing instead of falling back to a default.
    pub fn radius(&self, symbol: &str) -> Result<f64> {
        self.radii
            .get(&normalize_symbol(symbol))
            .copied()
            .ok_or_else(|| SasaError::MissingRadius {
                symbol: symbol.to_string(),
            })
    }

    /// Number of symbols in the table.
    pub fn len(&self) -> usize {
        self.radii.len()
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.radii.is_empty()
    }
}

fn normalize_symbol(symbol: &str) -> String {
    symbol.trim().to_uppercase()
}
