use clap::Parser;
use shrake_rupley::{
    atoms_from_pdb, compute_areas, load_model, points_to_df, records_to_df, save_connolly_xyz,
    save_pymol_points, sum_column, summarize_by_residue, summarize_by_type, write_df_to_file,
    DataFrameFileType, ExportMode, NeighborStrategy, RadiusTable, Result, RunContext, SasaSettings,
    N_SPHERE_POINTS, PROBE_RADIUS,
};
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, trace, warn};

/// Radius of the dots in PyMOL point scripts (Å)
const DOT_RADIUS: f64 = 0.05;

#[derive(Parser, Debug, Clone)]
#[command(version, about)]
pub(crate) struct Args {
    /// Path to the PDB or mmCIF file to be analyzed
    #[arg(short, long)]
    input: PathBuf,

    /// Output directory
    #[arg(short, long)]
    output: PathBuf,

    /// Name of the per-atom output file (without extension)
    #[arg(short = 'n', long = "name", default_value_t = String::from("sasa"))]
    output_name: String,

    /// Output file type
    #[arg(short = 't', long = "output-format", default_value_t = DataFrameFileType::Csv)]
    output_format: DataFrameFileType,

    /// CSV table of van der Waals radii (atom type in the first column and a
    /// `vdw_radius` column); defaults to Alvarez (2013)
    #[arg(long = "radii")]
    radii: Option<PathBuf>,

    /// Probe radius r (smaller r detects more surface details and reports a larger surface)
    #[arg(short = 'r', long = "probe-radius", default_value_t = PROBE_RADIUS)]
    probe_radius: f64,

    /// Number of points sampled on each atom sphere
    #[arg(short = 'p', long = "num-points", default_value_t = N_SPHERE_POINTS)]
    n_points: usize,

    /// Neighbor search backend
    #[arg(long = "neighbors", default_value_t = NeighborStrategy::BruteForce)]
    neighbor_strategy: NeighborStrategy,

    /// Number of threads to use for parallel processing (0 for all cores)
    #[arg(short = 'j', long = "num-threads", default_value_t = 1)]
    num_threads: usize,

    /// Export of the accessible points
    #[arg(short = 'e', long = "export", default_value_t = ExportMode::None)]
    export_mode: ExportMode,

    /// Write the unit sphere points as a PyMOL CGO script
    #[arg(long)]
    visualize: bool,

    /// Model number to analyze (default: 0, the first model)
    #[arg(short = 'm', long = "model", default_value_t = 0)]
    model_num: usize,

    /// Also write the total area of every residue
    #[arg(long = "per-residue")]
    per_residue: bool,
}

pub(crate) fn run(args: &Args) -> Result<()> {
    trace!("{args:?}");

    // Make sure `input` exists
    let input_path = Path::new(&args.input).canonicalize()?;
    let input_file = input_path.to_string_lossy();
    debug!("Using input file {input_file}");

    // Load file as complex structure
    let (pdb, pdb_warnings) = load_model(&input_file)?;
    pdb_warnings.iter().for_each(|e| match e.level() {
        pdbtbx::ErrorLevel::BreakingError => error!("{e}"),
        pdbtbx::ErrorLevel::InvalidatingError => error!("{e}"),
        _ => warn!("{e}"),
    });
    let atoms = atoms_from_pdb(&pdb, args.model_num);

    let radius_table = match &args.radii {
        Some(path) => {
            let table = RadiusTable::from_csv(path)?;
            debug!("Loaded {} radii from {}", table.len(), path.display());
            table
        }
        None => RadiusTable::default(),
    };

    let settings = SasaSettings {
        probe_radius: args.probe_radius,
        n_points: args.n_points,
        visualize_sphere_points: args.visualize,
        export_mode: args.export_mode,
        neighbor_strategy: args.neighbor_strategy,
        num_threads: args.num_threads,
    };
    debug!(
        "Probe radius {} Å, {} points per sphere, {} neighbor search",
        settings.probe_radius, settings.n_points, settings.neighbor_strategy
    );
    let ctx = RunContext::new(&atoms, &radius_table, settings)?;
    let result = compute_areas(&ctx)?;

    // Prepare output directory
    std::fs::create_dir_all(&args.output)?;
    let output_dir = args.output.canonicalize()?;
    debug!("Results will be saved to {}", output_dir.display());

    if ctx.settings().visualize_sphere_points {
        let path = output_dir.join("sphere_points.py");
        let dot_radius = DOT_RADIUS / 2.0;
        save_pymol_points(&path, ctx.sphere_points(), "sphere_points", dot_radius)?;
        info!("Sphere points saved to {}", path.display());
    }

    let mut df_atoms = records_to_df(&result.records)?;
    let mut df_types = summarize_by_type(&df_atoms)?;
    let total = sum_column(&df_atoms, "area")?;
    info!("Accessible area by atom type\n{df_types}");

    let output_file = output_dir.join(&args.output_name);
    write_df_to_file(&mut df_atoms, &output_file, args.output_format)?;
    write_df_to_file(
        &mut df_types,
        &output_dir.join(format!("{}_by_type", args.output_name)),
        args.output_format,
    )?;
    if args.per_residue {
        let mut df_residues = summarize_by_residue(&df_atoms)?;
        debug!("Accessible area by residue\n{df_residues}");
        write_df_to_file(
            &mut df_residues,
            &output_dir.join(format!("{}_by_residue", args.output_name)),
            args.output_format,
        )?;
    }
    info!(
        "Results saved to {}",
        output_file
            .with_extension(args.output_format.to_string())
            .display()
    );

    match args.export_mode {
        ExportMode::None => {}
        ExportMode::PointCloud => {
            let points_file = output_dir.join(format!("{}_points", args.output_name));
            let mut df_points = points_to_df(&result.accessible_points)?;
            write_df_to_file(&mut df_points, &points_file, args.output_format)?;

            let positions: Vec<_> = result
                .accessible_points
                .iter()
                .map(|p| p.position)
                .collect();
            save_pymol_points(
                &points_file.with_extension("py"),
                &positions,
                "accessible_points",
                DOT_RADIUS,
            )?;
            info!(
                "Exported {} accessible points to {}",
                positions.len(),
                points_file.display()
            );
        }
        ExportMode::ConnollySurface => {
            let path = output_dir.join("ConnollySurface.xyz");
            save_connolly_xyz(&path, &result.accessible_points, &atoms)?;
            info!("Connolly surface saved to {}", path.display());
        }
    }

    println!("Total SASA: {total:.2}");
    Ok(())
}
