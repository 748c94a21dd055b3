//! Pointdist: pairwise centroid distances for labeled point-cloud objects.
//!
//! Pointdist reads a directory of object point files, reduces each file to
//! the centroid of its points, and writes the Euclidean distance between
//! every ordered pair of distinct objects to a flat text file.
//!
//! # Modules
//!
//! - [`cloud`]: Object model, centroid extraction and the directory reader
//! - [`matrix`]: Distance matrix iteration and the output file writer
//! - [`report`]: Per-run summary of what was read and recovered
//! - [`config`]: Input/output locations with legacy defaults
//! - [`error`]: Error types for pointdist operations

pub mod cloud;
pub mod config;
pub mod error;
pub mod matrix;
pub mod report;

use std::fs;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use log::info;

pub use config::RunConfig;
pub use error::PointdistError;
pub use report::RunReport;

/// The pointdist CLI application.
#[derive(Parser)]
#[command(name = "pointdist")]
#[command(version, about)]
#[command(propagate_version = true)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Used when no subcommand is given.
    #[command(flatten)]
    measure: MeasureArgs,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Compute all pairwise centroid distances (the default).
    Measure(MeasureArgs),

    /// Print the centroid of a single object file.
    Centroid(CentroidArgs),
}

/// Arguments for the measure subcommand.
#[derive(clap::Args)]
struct MeasureArgs {
    /// Directory containing one point file per object.
    #[arg(long, env = "POINTDIST_INPUT_DIR", default_value = config::DEFAULT_INPUT_DIR)]
    input_dir: PathBuf,

    /// Distance file to (re)create.
    #[arg(long, env = "POINTDIST_OUTPUT", default_value = config::DEFAULT_OUTPUT_PATH)]
    output: PathBuf,

    /// Field index of the x coordinate on each point line.
    #[arg(long, default_value_t = cloud::DEFAULT_COORD_OFFSET)]
    offset: usize,

    /// Print a run report to stdout ('text' or 'json').
    #[arg(long)]
    report: Option<String>,
}

/// Arguments for the centroid subcommand.
#[derive(clap::Args)]
struct CentroidArgs {
    /// Object point file.
    input: PathBuf,

    /// Field index of the x coordinate on each point line.
    #[arg(long, default_value_t = cloud::DEFAULT_COORD_OFFSET)]
    offset: usize,

    /// Output format ('text' or 'json').
    #[arg(long, default_value = "text")]
    output: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    fn parse(raw: &str) -> Result<Self, PointdistError> {
        match raw {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(PointdistError::UnsupportedFormat(format!(
                "'{}' (supported: text, json)",
                other
            ))),
        }
    }
}

/// Run the pointdist CLI.
///
/// This is the main entry point for the CLI, called from `main.rs`.
pub fn run() -> Result<(), PointdistError> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Measure(args)) => run_measure(args),
        Some(Commands::Centroid(args)) => run_centroid(args),
        None => run_measure(cli.measure),
    }
}

/// Load every object in `config.input_dir` and write its distance matrix to
/// `config.output_path`.
pub fn measure(config: &RunConfig) -> Result<RunReport, PointdistError> {
    let mut report = RunReport::default();

    let objects =
        cloud::io_objects::read_object_dir(&config.input_dir, config.coord_offset, &mut report)?;
    info!(
        "loaded {} object(s) from {}",
        objects.len(),
        config.input_dir.display()
    );

    report.records_written =
        matrix::io_distances::write_distances_file(&config.output_path, objects.as_slice())?;
    info!(
        "wrote {} distance record(s) to {}",
        report.records_written,
        config.output_path.display()
    );

    Ok(report)
}

/// Execute the measure subcommand.
fn run_measure(args: MeasureArgs) -> Result<(), PointdistError> {
    // Reject a bad report format before touching the output file
    let format = args.report.as_deref().map(OutputFormat::parse).transpose()?;

    let config = RunConfig {
        input_dir: args.input_dir,
        output_path: args.output,
        coord_offset: args.offset,
    };
    let report = measure(&config)?;

    match format {
        Some(OutputFormat::Json) => println!("{}", report.to_json_string()?),
        Some(OutputFormat::Text) => {
            println!("Measured {}:", config.input_dir.display());
            print!("{}", report);
        }
        None => {}
    }

    Ok(())
}

/// Execute the centroid subcommand.
fn run_centroid(args: CentroidArgs) -> Result<(), PointdistError> {
    let format = OutputFormat::parse(&args.output)?;

    let bytes = fs::read(&args.input).map_err(|source| PointdistError::InputFileRead {
        path: args.input.clone(),
        source,
    })?;
    let content = String::from_utf8_lossy(&bytes);
    let summary = cloud::summarize_points(&content, args.offset, &args.input);

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
        OutputFormat::Text => {
            let c = summary.centroid;
            println!("{} {} {}", c.x, c.y, c.z);
        }
    }

    Ok(())
}
