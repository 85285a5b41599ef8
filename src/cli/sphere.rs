use clap::Parser;
use shrake_rupley::{
    generate_sphere_points, save_pymol_points, sphere_points_to_df, write_df_to_file,
    DataFrameFileType, Result, N_SPHERE_POINTS,
};
use std::path::PathBuf;
use tracing::{info, trace};

#[derive(Parser, Debug, Clone)]
#[command(version, about)]
pub(crate) struct Args {
    /// Number of points on the unit sphere
    #[arg(short = 'p', long = "num-points", default_value_t = N_SPHERE_POINTS)]
    n_points: usize,

    /// Output directory
    #[arg(short, long)]
    output: PathBuf,

    /// Name of the output files (without extension)
    #[arg(short = 'n', long = "name", default_value_t = String::from("sphere_points"))]
    output_name: String,

    /// Output file type
    #[arg(short = 't', long = "output-format", default_value_t = DataFrameFileType::Csv)]
    output_format: DataFrameFileType,

    /// Also write a PyMOL CGO script of the points
    #[arg(long)]
    pymol: bool,
}

pub(crate) fn run(args: &Args) -> Result<()> {
    trace!("{args:?}");

    let points = generate_sphere_points(args.n_points)?;

    std::fs::create_dir_all(&args.output)?;
    let output_file = args.output.canonicalize()?.join(&args.output_name);

    let mut df = sphere_points_to_df(&points)?;
    write_df_to_file(&mut df, &output_file, args.output_format)?;
    if args.pymol {
        save_pymol_points(
            &output_file.with_extension("py"),
            &points,
            "sphere_points",
            0.025,
        )?;
    }
    info!(
        "{} sphere points saved to {}",
        points.len(),
        output_file.display()
    );
    Ok(())
}
