mod common;

use common::{test_data_path, DIPEPTIDE, OCTAPEPTIDE};
use shrake_rupley::*;
use std::f64::consts::PI;

fn dipeptide_atoms() -> Vec<Atom> {
    let path = test_data_path(DIPEPTIDE);
    let (pdb, _) = load_model(path.to_str().unwrap()).unwrap();
    atoms_from_pdb(&pdb, 0)
}

#[test]
fn test_atoms_from_fixture() {
    let atoms = dipeptide_atoms();
    assert_eq!(atoms.len(), 11);

    let symbols: Vec<&str> = atoms.iter().map(|a| a.symbol.as_str()).collect();
    let expected = ["N", "C", "C", "O", "C", "N", "C", "C", "O", "O", "O"];
    assert_eq!(symbols, expected);
    assert_eq!(atoms[1].atomn, "CA");
    assert_eq!(atoms[1].resn, "ALA");
    assert_eq!(atoms[1].segid, "A");
    assert_eq!(atoms[6].resi, 2);
    assert_eq!(atoms[10].segid, "B");
    assert_eq!(atoms[10].resn, "HOH");
    assert_eq!(atoms[10].atomi, 11);
    assert!((atoms[10].position.x - 20.0).abs() < 1e-9);
}

#[test]
fn test_dipeptide_areas() {
    let atoms = dipeptide_atoms();
    let res = calculate_sasa(&atoms, &RadiusTable::default(), SasaSettings::default()).unwrap();

    assert_eq!(res.records.len(), atoms.len());
    assert!(res.records.iter().all(|r| r.area > 0.0));

    // Isolated water keeps its whole probe-inflated sphere
    let water = &res.records[10];
    let radius: f64 = 1.5 + 1.4;
    assert_eq!(water.accessible_points, 1000);
    assert!((water.area - 4.0 * PI * radius * radius).abs() < 1e-9);

    // Buried backbone carbon keeps far less than the exposed methyl
    assert!(res.records[2].area < res.records[4].area);
    assert!((res.total_area() - 417.04).abs() < 0.05);
}

#[test]
fn test_dipeptide_summaries_add_up() {
    let df = get_atom_sasa(
        &load_model(test_data_path(DIPEPTIDE).to_str().unwrap())
            .unwrap()
            .0,
        &RadiusTable::default(),
        SasaSettings::default(),
        0,
    )
    .unwrap();
    assert_eq!(df.height(), 11);

    let total = sum_column(&df, "area").unwrap();
    let by_type = summarize_by_type(&df).unwrap();
    assert_eq!(by_type.height(), 3);
    assert!((sum_column(&by_type, "total_area").unwrap() - total).abs() < 1e-9);

    let by_residue = summarize_by_residue(&df).unwrap();
    assert_eq!(by_residue.height(), 3);
    assert!((sum_column(&by_residue, "area").unwrap() - total).abs() < 1e-9);
}

#[test]
fn test_dipeptide_backends_and_threads_agree() {
    let atoms = dipeptide_atoms();
    let table = RadiusTable::default();
    let reference = calculate_sasa(&atoms, &table, SasaSettings::default()).unwrap();

    for (strategy, num_threads) in [
        (NeighborStrategy::RTree, 1),
        (NeighborStrategy::BruteForce, 3),
        (NeighborStrategy::RTree, 0),
    ] {
        let settings = SasaSettings {
            neighbor_strategy: strategy,
            num_threads,
            ..Default::default()
        };
        let res = calculate_sasa(&atoms, &table, settings).unwrap();
        assert_eq!(
            res.records, reference.records,
            "{strategy} with {num_threads} thread(s)"
        );
    }
}

#[test]
fn test_larger_probe_changes_area() {
    let atoms = dipeptide_atoms();
    let table = RadiusTable::default();
    let small = calculate_sasa(
        &atoms,
        &table,
        SasaSettings {
            probe_radius: 0.0,
            ..Default::default()
        },
    )
    .unwrap();
    let water = calculate_sasa(&atoms, &table, SasaSettings::default()).unwrap();

    // Without a probe the isolated water is a bare van der Waals sphere
    assert!((small.records[10].area - 4.0 * PI * 1.5 * 1.5).abs() < 1e-9);
    assert!(small.total_area() < water.total_area());
}

#[test]
fn test_missing_radius_in_custom_table() {
    let atoms = dipeptide_atoms();
    let mut table = RadiusTable::empty();
    table.insert("C", 1.7);
    table.insert("O", 1.52);
    match calculate_sasa(&atoms, &table, SasaSettings::default()) {
        Err(SasaError::MissingRadius { symbol }) => assert_eq!(symbol, "N"),
        other => panic!("Expected MissingRadius, got {other:?}"),
    }
}

#[test]
#[ignore = "needs test-data/Phe-Phe-Met-Ser-Ile-Arg-Phe-Phe.pdb"]
fn test_octapeptide_total_area() {
    let path = test_data_path(OCTAPEPTIDE);
    assert!(path.exists(), "{} not found", path.display());
    let (pdb, _) = load_model(path.to_str().unwrap()).unwrap();
    let atoms = atoms_from_pdb(&pdb, 0);
    let res = calculate_sasa(&atoms, &RadiusTable::default(), SasaSettings::default()).unwrap();

    let expected = 1366.31;
    let total = res.total_area();
    assert!(
        (total - expected).abs() / expected < 0.05,
        "Total SASA {total:.2} too far from {expected}"
    );
}
