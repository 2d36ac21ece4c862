use clap::{Parser, Subcommand};
use color_eyre::eyre::{Report, Result};
use lathe_cli::{CliError, ExtractJob, ProfileOverrides, load_profile_config};
use lathe_profile::{
    DuplicatePolicy, ProfileConfig, RevolveOptions, RevolvedMesh, Surface, io::load_profile,
};
use std::path::{Path, PathBuf};
use strum::IntoEnumIterator;
use tracing::{error, info};
use tracing_subscriber::{self, EnvFilter};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract a lathe profile from a silhouette image
    Extract {
        /// Path to the grayscale silhouette image
        #[arg(short, long)]
        input: PathBuf,
        /// Path of the profile text file to write
        #[arg(short, long)]
        output: PathBuf,
        /// Profile configuration file (.toml or .json)
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Pixels darker than this are foreground
        #[arg(long)]
        threshold: Option<u8>,
        /// Number of output points
        #[arg(long)]
        samples: Option<usize>,
        /// Divisor applied to the unit radius
        #[arg(long)]
        x_scale: Option<f64>,
        /// How points sharing a row are merged (keep_first, average, outermost)
        #[arg(long)]
        duplicates: Option<DuplicatePolicy>,
    },
    /// Run an extraction job file
    Run {
        /// Path to the job file (.toml or .json)
        #[arg(short, long)]
        job: PathBuf,
    },
    /// Revolve a saved profile and report the mesh size
    Revolve {
        /// Profile text file written by `extract`
        #[arg(short, long)]
        profile: PathBuf,
        /// Angular steps over a full turn
        #[arg(long, default_value = "360")]
        segments: u32,
        /// Trailing profile rows tagged as the base
        #[arg(long, default_value = "3")]
        base_rows: usize,
    },
    /// Print the JSON schema of the job file
    Schema,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info"))
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Extract {
            input,
            output,
            config,
            threshold,
            samples,
            x_scale,
            duplicates,
        } => {
            let overrides = ProfileOverrides {
                threshold,
                sample_count: samples,
                x_scale,
                duplicate_policy: duplicates,
            };
            extract(&input, &output, config.as_deref(), &overrides)?;
        }
        Commands::Run { job } => {
            let job = ExtractJob::from_file(&job).map_err(report)?;
            info!("Job: {:?}", job);
            job.run().map_err(report)?;
        }
        Commands::Revolve {
            profile,
            segments,
            base_rows,
        } => {
            revolve(&profile, RevolveOptions { segments, base_rows })?;
        }
        Commands::Schema => {
            let schema = ExtractJob::schema();
            println!("{}", serde_json::to_string_pretty(&schema)?);
            for policy in DuplicatePolicy::iter() {
                println!("duplicate_policy = \"{}\": {}", policy, policy.description());
            }
        }
    }

    Ok(())
}

/// Log which step failed and turn the error into a report
fn report(err: CliError) -> Report {
    let stage = err.stage();
    error!("{} failed: {}", stage, err);
    Report::new(err).wrap_err(format!("{stage} failed"))
}

fn extract(
    input: &Path,
    output: &Path,
    config_path: Option<&Path>,
    overrides: &ProfileOverrides,
) -> Result<()> {
    let base = match config_path {
        Some(path) => load_profile_config(path).map_err(report)?,
        None => ProfileConfig::default(),
    };

    let job = ExtractJob {
        input_path: input.to_string_lossy().to_string(),
        output_path: output.to_string_lossy().to_string(),
        profile: overrides.apply(base),
    };

    info!("🎯 Extracting profile from {:?}", input);
    job.run().map_err(report)?;
    info!("✅ Profile saved to: {:?}", output);
    Ok(())
}

fn revolve(profile_path: &Path, options: RevolveOptions) -> Result<()> {
    let rows = load_profile(profile_path).map_err(|e| report(e.into()))?;
    let mesh = RevolvedMesh::from_profile(&rows, &options).map_err(|e| report(e.into()))?;

    let base = mesh
        .vertices
        .iter()
        .filter(|v| v.surface == Surface::Base)
        .count();

    info!("Profile rows: {}", rows.len());
    info!("Vertices: {} ({} {}, {} {})", mesh.vertices.len(),
          mesh.vertices.len() - base, Surface::Body, base, Surface::Base);
    info!("Triangles: {}", mesh.triangle_count());
    Ok(())
}
