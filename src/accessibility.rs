//! Shrake–Rupley occlusion test for a single atom.

use nalgebra::Vector3;

/// Accessible sample points of one atom.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Accessibility {
    /// Number of sphere points not buried by any neighbor
    pub count: usize,
    /// Coordinates of the accessible test points, if requested
    pub points: Vec<Vector3<f64>>,
}

/// Count the accessible points on the probe-inflated sphere of atom `k`.
///
/// * `k` - Index of the atom under test
/// * `neighbors` - Candidate occluders of `k` in ascending index order
/// * `positions` - Centers of all atoms
/// * `radii` - Van der Waals radii of all atoms
/// * `sphere_points` - Unit vectors shared by every atom of the run
/// * `probe_radius` - Solvent probe radius
/// * `collect_points` - Keep the coordinates of accessible points
///
/// Neighbors are scanned cyclically, starting at the one that buried the
/// previous sphere point. Adjacent sphere points tend to be buried by the same
/// atom, so this shortens the scan without changing the outcome.
pub fn count_accessible(
    k: usize,
    neighbors: &[usize],
    positions: &[Vector3<f64>],
    radii: &[f64],
    sphere_points: &[Vector3<f64>],
    probe_radius: f64,
    collect_points: bool,
) -> Accessibility {
    let center = positions[k];
    let radius = probe_radius + radii[k];
    let n_neighbors = neighbors.len();

    let mut result = Accessibility::default();
    let mut start = 0;
    for point in sphere_points {
        let test_point = point * radius + center;

        let mut is_accessible = true;
        for offset in 0..n_neighbors {
            let j = (start + offset) % n_neighbors;
            let neighbor = neighbors[j];
            let radius_j = probe_radius + radii[neighbor];
            if (positions[neighbor] - test_point).norm_squared() < radius_j * radius_j {
                start = j;
                is_accessible = false;
                break;
            }
        }

        if is_accessible {
            result.count += 1;
            if collect_points {
                result.points.push(test_point);
            }
        }
    }
    result
}
