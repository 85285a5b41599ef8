mod common;

use common::{binary_command, test_data_path, DIPEPTIDE};

#[test]
fn test_sasa_command_writes_tables() {
    let dir = tempfile::tempdir().unwrap();
    let input = test_data_path(DIPEPTIDE);

    let output = binary_command()
        .args(["sasa", "-i"])
        .arg(&input)
        .arg("-o")
        .arg(dir.path())
        .arg("--per-residue")
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Total SASA: 417.0"), "{stdout}");

    let atoms = std::fs::read_to_string(dir.path().join("sasa.csv")).unwrap();
    let mut lines = atoms.lines();
    assert_eq!(
        lines.next(),
        Some("atomi,atom,atomn,segid,resn,resi,vdw_radius,accessible_points,area")
    );
    assert_eq!(lines.count(), 11);
    assert!(dir.path().join("sasa_by_type.csv").exists());
    assert!(dir.path().join("sasa_by_residue.csv").exists());
}

#[test]
fn test_sasa_command_exports() {
    let dir = tempfile::tempdir().unwrap();
    let input = test_data_path(DIPEPTIDE);

    let output = binary_command()
        .args(["sasa", "-p", "200", "--visualize"])
        .args(["-e", "connolly-surface", "-i"])
        .arg(&input)
        .arg("-o")
        .arg(dir.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let xyz = std::fs::read_to_string(dir.path().join("ConnollySurface.xyz")).unwrap();
    let n_entries: usize = xyz.lines().next().unwrap().trim().parse().unwrap();
    assert_eq!(xyz.lines().count(), n_entries + 2);
    // Input atoms come last, the isolated water closes the file
    assert!(xyz.lines().last().unwrap().starts_with("O "));

    let script = std::fs::read_to_string(dir.path().join("sphere_points.py")).unwrap();
    assert_eq!(script.matches("SPHERE,").count(), 200);
}

#[test]
fn test_sasa_command_point_cloud() {
    let dir = tempfile::tempdir().unwrap();
    let input = test_data_path(DIPEPTIDE);

    let output = binary_command()
        .args(["sasa", "-p", "100", "-n", "dipeptide"])
        .args(["-e", "point-cloud", "-i"])
        .arg(&input)
        .arg("-o")
        .arg(dir.path())
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(dir.path().join("dipeptide.csv").exists());
    assert!(dir.path().join("dipeptide_points.csv").exists());
    assert!(dir.path().join("dipeptide_points.py").exists());
}

#[test]
fn test_sasa_command_rejects_zero_points() {
    let dir = tempfile::tempdir().unwrap();
    let output = binary_command()
        .args(["sasa", "-p", "0", "-i"])
        .arg(test_data_path(DIPEPTIDE))
        .arg("-o")
        .arg(dir.path())
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(!dir.path().join("sasa.csv").exists());
}

#[test]
fn test_sasa_command_missing_input() {
    let dir = tempfile::tempdir().unwrap();
    let output = binary_command()
        .args(["sasa", "-i", "does-not-exist.pdb", "-o"])
        .arg(dir.path())
        .output()
        .unwrap();
    assert!(!output.status.success());
}

#[test]
fn test_sphere_command() {
    let dir = tempfile::tempdir().unwrap();
    let output = binary_command()
        .args(["sphere", "-p", "50", "--pymol", "-o"])
        .arg(dir.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let table = std::fs::read_to_string(dir.path().join("sphere_points.csv")).unwrap();
    assert_eq!(table.lines().next(), Some("x,y,z"));
    assert_eq!(table.lines().count(), 51);
    assert!(dir.path().join("sphere_points.py").exists());
}
