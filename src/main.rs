mod input;
mod logging;
mod model;
mod pipeline;
mod report;

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use crate::input::load_document;
use crate::model::config::CompassProfile;
use crate::pipeline::stage4_profile::compare;
use crate::pipeline::stage5_report::{
    build_summary, summarize_document, write_comparison, write_reports,
};
use crate::report::Palette;
use crate::report::json::render_taxonomy_json;

#[derive(Debug, Parser)]
#[command(name = "aug-compass", version)]
#[command(about = "Score Architectural / Urban / Green analyses and draw the AUG compass")]
#[command(propagate_version = true)]
struct Cli {
    /// Default log level debug instead of info (RUST_LOG still wins).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Score one analysis document and write summary, criteria, report and chart.
    Run {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
        /// Square canvas edge in pixels.
        #[arg(long, default_value_t = 400.0)]
        canvas: f64,
        #[arg(long, value_enum, default_value_t = Palette::Light)]
        palette: Palette,
        /// Distance from the outer ring to the label anchors.
        #[arg(long)]
        label_offset: Option<f64>,
    },
    /// Rank two or more analysis documents by overall score.
    Compare {
        #[arg(long = "input", required = true)]
        inputs: Vec<PathBuf>,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print the criteria taxonomy as JSON.
    Taxonomy {
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    execute(cli.command)
}

fn execute(command: Command) -> Result<(), String> {
    match command {
        Command::Run {
            input,
            out,
            canvas,
            palette,
            label_offset,
        } => {
            let doc = load_document(&input).map_err(|e| e.to_string())?;
            let mut profile = CompassProfile::default_v1();
            if let Some(offset) = label_offset {
                profile = profile.with_label_offset(offset);
            }
            let data = build_summary(&doc, &fallback_name(&input), &profile, canvas)
                .map_err(|e| e.to_string())?;
            tracing::debug!(
                overall = data.summary.overall,
                overall_percentage = data.summary.overall_percentage,
                strongest = %data.summary.strongest,
                weakest = %data.summary.weakest,
                "analysis scored"
            );
            write_reports(&data, &out, palette).map_err(|e| e.to_string())?;
        }
        Command::Compare { inputs, out } => {
            let mut summaries = Vec::with_capacity(inputs.len());
            for path in &inputs {
                let doc =
                    load_document(path).map_err(|e| format!("{}: {e}", path.display()))?;
                let summary = summarize_document(&doc, &fallback_name(path))
                    .map_err(|e| format!("{}: {e}", path.display()))?;
                summaries.push(summary);
            }
            let ranked = compare(summaries).map_err(|e| e.to_string())?;
            write_comparison(&ranked, &out).map_err(|e| e.to_string())?;
        }
        Command::Taxonomy { out } => {
            let json = render_taxonomy_json().map_err(|e| e.to_string())?;
            match out {
                Some(path) => {
                    fs::write(&path, json).map_err(|e| e.to_string())?;
                    tracing::info!(path = %path.display(), "wrote taxonomy");
                }
                None => print!("{json}"),
            }
        }
    }
    Ok(())
}

/// File name without `.json` / `.json.gz`, used when a document has no project name.
fn fallback_name(path: &Path) -> String {
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("project");
    let name = name.strip_suffix(".gz").unwrap_or(name);
    name.strip_suffix(".json").unwrap_or(name).to_string()
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
