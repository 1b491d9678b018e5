use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use std::path::PathBuf;
use thumbnail_cli::batch::{self, BatchEvent, BatchOptions};
use thumbnail_cli::geometry::Geometry;
use thumbnail_cli::imaging::PngBackend;
use thumbnail_cli::output;

#[derive(Parser)]
#[command(name = "thumbnail-cli")]
#[command(about = "Batch-generate PNG thumbnails")]
#[command(long_about = "\
Batch-generate PNG thumbnails

For each FILE ending in .png, writes a resized copy named by stripping the
final underscore-delimited token from the filename and appending _tn:

  sample_2021_01.png  →  sample_2021_tn.png

Thumbnails land next to their source file unless -o names an existing
directory. Inputs that are not .png files are skipped silently, and one
file's conversion failure never stops the rest of the batch.")]
#[command(version)]
struct Cli {
    /// Output directory for thumbnails (must exist; default: each source file's directory)
    #[arg(short = 'o', long = "output", value_name = "OUTPUT_PATH")]
    output: Option<PathBuf>,

    /// Thumbnail geometry
    #[arg(short = 'g', long = "geometry", value_name = "WIDTHxHEIGHT", default_value_t)]
    geometry: Geometry,

    /// Print each created thumbnail's path
    #[arg(short = 'v', long)]
    verbose: bool,

    /// Dry run — print intended destination paths, create nothing
    #[arg(short = 'x', long = "dry-run")]
    dry_run: bool,

    /// PNG files to thumbnail, processed in order
    #[arg(value_name = "FILE", required = true)]
    files: Vec<PathBuf>,
}

fn main() {
    std::process::exit(run());
}

fn run() -> i32 {
    // clap's own error exit code is 2; the contract here is 0 for help and
    // 1 for any argument failure, so parse errors are mapped by hand.
    // `err.print()` already routes help to stdout and errors to stderr; if
    // the write itself fails there is nothing left to report it on.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let code = match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
            err.print().ok();
            return code;
        }
    };

    let options = BatchOptions {
        output_dir: cli.output,
        geometry: cli.geometry,
        verbose: cli.verbose,
        dry_run: cli.dry_run,
    };

    let result = batch::run_batch(
        &PngBackend::new(),
        &cli.files,
        &options,
        &mut |event| match &event {
            BatchEvent::Planned { .. } => eprintln!("{}", output::format_event(&event)),
            BatchEvent::Created { .. } => println!("{}", output::format_event(&event)),
        },
    );

    match result {
        Ok(_) => 0,
        Err(err) => {
            eprintln!("error: {err}");
            eprintln!("{}", Cli::command().render_usage());
            1
        }
    }
}
