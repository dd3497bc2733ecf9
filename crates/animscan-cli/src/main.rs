use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use animscan_core::{render_report, render_summary_table, scan_batch, write_export, ScanConfig};

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    match cli.command {
        Commands::Report { files, manifest } => {
            let (files, _) = resolve_batch(files, manifest)?;
            let results = scan_batch(&files);
            print!("{}", render_report(&results));
            print!("{}", render_summary_table(&results));
        }
        Commands::Export {
            files,
            manifest,
            output,
        } => {
            let (files, manifest_output) = resolve_batch(files, manifest)?;
            let output = output
                .or(manifest_output)
                .unwrap_or_else(|| PathBuf::from("glb_animations.json"));
            let results = scan_batch(&files);
            write_export(&results, &output)
                .with_context(|| format!("writing export to {}", output.display()))?;
            println!(
                "Detailed animation data exported to: {}",
                output.display()
            );
        }
    }
    Ok(())
}

/// Merge manifest files with positional files (manifest first, in order).
fn resolve_batch(
    files: Vec<PathBuf>,
    manifest: Option<PathBuf>,
) -> anyhow::Result<(Vec<PathBuf>, Option<PathBuf>)> {
    let mut all = Vec::new();
    let mut output = None;
    if let Some(manifest) = manifest {
        let config = ScanConfig::load(&manifest)
            .with_context(|| format!("loading manifest {}", manifest.display()))?;
        all.extend(config.files);
        output = config.output;
    }
    all.extend(files);
    anyhow::ensure!(
        !all.is_empty(),
        "no input files; pass paths or --manifest <file>"
    );
    tracing::debug!(files = all.len(), "batch resolved");
    Ok((all, output))
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .try_init();
}

#[derive(Parser, Debug)]
#[command(
    name = "animscan",
    version,
    about = "Inspect animation clips in GLB/glTF containers",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print a per-clip report and summary table to stdout.
    Report {
        /// Container files to scan, in order.
        files: Vec<PathBuf>,
        /// JSON manifest listing files to scan.
        #[arg(long)]
        manifest: Option<PathBuf>,
    },
    /// Write the extracted animation data as indented JSON.
    Export {
        /// Container files to scan, in order.
        files: Vec<PathBuf>,
        /// JSON manifest listing files to scan.
        #[arg(long)]
        manifest: Option<PathBuf>,
        /// Output path for the JSON document.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}
