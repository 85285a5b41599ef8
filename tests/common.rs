#![allow(dead_code)]

use std::path::PathBuf;
use std::process::Command;

/// Heavy atoms of an Ala-Gly dipeptide (chain A) plus one isolated water (chain B)
pub const DIPEPTIDE: &str = "ala-gly.pdb";

/// Capped octapeptide Phe-Phe-Met-Ser-Ile-Arg-Phe-Phe, not shipped with the crate
pub const OCTAPEPTIDE: &str = "Phe-Phe-Met-Ser-Ile-Arg-Phe-Phe.pdb";

pub fn binary_command() -> Command {
    Command::new(env!("CARGO_BIN_EXE_shrake-rupley"))
}

pub fn test_data_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("test-data")
        .join(name)
}
