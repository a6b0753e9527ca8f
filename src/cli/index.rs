use std::path::PathBuf;

use clap::Args;

use crate::cli::stitch::load_inputs;
use crate::cli::OutputFormat;
use crate::index::{ReferenceSummary, SampleIndex};

#[derive(Args)]
pub struct IndexArgs {
    /// Label-probability containers (JSON, optionally .gz compressed)
    #[arg(required = true, num_args = 1..)]
    pub inputs: Vec<PathBuf>,
}

/// Execute index subcommand: list references and their sample coverage
///
/// # Errors
///
/// Returns an error if an input cannot be read or JSON serialization fails.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: IndexArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let files = load_inputs(&args.inputs)?;
    let embedded = files.iter().filter(|f| f.label_decoding.is_some()).count();

    let index = SampleIndex::from_files(files);
    if verbose {
        eprintln!(
            "Loaded {} samples from {} inputs ({embedded} with an embedded label decoding)",
            index.len(),
            args.inputs.len()
        );
    }

    let summaries = index.summaries();
    match format {
        OutputFormat::Text => print_text(&summaries),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&summaries)?),
        OutputFormat::Tsv => print_tsv(&summaries),
    }

    Ok(())
}

fn print_text(summaries: &[ReferenceSummary]) {
    let name_width = summaries
        .iter()
        .map(|s| s.name.len())
        .max()
        .unwrap_or(9)
        .max(9);
    let pos_width = summaries
        .iter()
        .map(|s| s.first.len().max(s.last.len()))
        .max()
        .unwrap_or(5)
        .max(5);

    println!("Sample Index ({} references)\n", summaries.len());
    println!(
        "{:<name_w$} {:>8} {:>pos_w$} {:>pos_w$}",
        "Reference",
        "Samples",
        "Start",
        "End",
        name_w = name_width,
        pos_w = pos_width
    );
    println!("{}", "-".repeat(name_width + 8 + 2 * pos_width + 3));

    for s in summaries {
        println!(
            "{:<name_w$} {:>8} {:>pos_w$} {:>pos_w$}",
            s.name,
            s.samples,
            s.first,
            s.last,
            name_w = name_width,
            pos_w = pos_width
        );
    }
}

fn print_tsv(summaries: &[ReferenceSummary]) {
    println!("reference\tsamples\tstart\tend");
    for s in summaries {
        println!("{}\t{}\t{}\t{}", s.name, s.samples, s.first, s.last);
    }
}
