//! Error type shared by every stage of the SASA pipeline.

use thiserror::Error;

/// Errors raised while loading inputs, validating settings or computing areas.
#[derive(Debug, Error)]
pub enum SasaError {
    /// An atom type has no entry in the radius table
    #[error("No van der Waals radius for atom type '{symbol}'")]
    MissingRadius {
        /// Type symbol that failed the lookup
        symbol: String,
    },

    /// Settings rejected before any computation starts
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Radius table could not be read or holds unusable values
    #[error("Invalid radius table: {0}")]
    InvalidRadiusTable(String),

    /// Structure file could not be parsed
    #[error("Failed to load structure: {0}")]
    Structure(String),

    /// Run stopped through the interrupt flag
    #[error("Computation interrupted")]
    Interrupted,

    /// Filesystem failure while reading inputs or writing outputs
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// DataFrame construction, aggregation or serialization failure
    #[error(transparent)]
    Polars(#[from] polars::prelude::PolarsError),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, SasaError>;
