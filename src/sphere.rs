//! Unit sphere sampling with the golden-section spiral.

use crate::error::{Result, SasaError};
use nalgebra::Vector3;
use std::f64::consts::PI;

/// Generate `n` near-uniform points on the unit sphere.
///
/// Points are laid out on a golden-section spiral running from the south pole
/// (`y ≈ -1`) to the north pole (`y ≈ 1`). The sequence only depends on `n`, so
/// one set can be shared by every atom of a run.
///
/// # Errors
///
/// Returns [`SasaError::InvalidConfiguration`] when `n` is zero.
///
/// # Example
///
/// ```
/// use shrake_rupley::generate_sphere_points;
///
/// let points = generate_sphere_points(100).unwrap();
/// assert_eq!(points.len(), 100);
/// ```
pub fn generate_sphere_points(n: usize) -> Result<Vec<Vector3<f64>>> {
    if n == 0 {
        return Err(SasaError::InvalidConfiguration(
            "cannot sample zero points on a sphere".to_string(),
        ));
    }

    let inc = PI * (3.0 - 5.0_f64.sqrt());
    let offset = 2.0 / n as f64;

    Ok((0..n)
        .map(|k| {
            let y = k as f64 * offset - 1.0 + offset / 2.0;
            let r = (1.0 - y * y).sqrt();
            let phi = k as f64 * inc;
            Vector3::new(phi.cos() * r, y, phi.sin() * r)
        })
        .collect())
}
