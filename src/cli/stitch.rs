use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Args;

use crate::index::SampleIndex;
use crate::output::write_fasta_file;
use crate::parsing::model::resolve_alphabet;
use crate::parsing::probs::{parse_probs_file, ProbsFile};
use crate::parsing::region::parse_regions;
use crate::stitching::{MidpointResolver, RegionPolicy, StitchConfig, StitchEngine};

#[derive(Args)]
pub struct StitchArgs {
    /// Label-probability containers (JSON, optionally .gz compressed)
    #[arg(required = true, num_args = 1..)]
    pub inputs: Vec<PathBuf>,

    /// Output FASTA file ('-' for stdout)
    #[arg(short, long, default_value = "-")]
    pub output: PathBuf,

    /// Model descriptor to read the label decoding from when the first input
    /// carries none
    #[arg(long)]
    pub model: Option<PathBuf>,

    /// Only stitch these references (name[:start-end]; whole references are
    /// always stitched)
    #[arg(short, long, num_args = 1..)]
    pub regions: Option<Vec<String>>,

    /// Fail instead of warning when a region specifies a start or end
    #[arg(long)]
    pub strict_regions: bool,

    /// Number of references to stitch concurrently
    #[arg(short, long, default_value = "1", value_parser = clap::value_parser!(u16).range(1..))]
    pub threads: u16,
}

/// Execute stitch subcommand
///
/// # Errors
///
/// Returns an error if an input cannot be read, no label decoding is
/// available, a region is invalid or unknown, stitching fails, or the output
/// cannot be written.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: StitchArgs, verbose: bool) -> anyhow::Result<()> {
    let files = load_inputs(&args.inputs)?;

    let embedded = files.first().and_then(|f| f.label_decoding.as_ref());
    let alphabet = resolve_alphabet(embedded, args.model.as_deref())?;

    let regions = args
        .regions
        .as_deref()
        .map(|r| parse_regions(r))
        .transpose()?;

    let index = SampleIndex::from_files(files);
    if verbose {
        eprintln!(
            "Indexed {} samples across {} references",
            index.len(),
            index.names().len()
        );
    }

    let config = StitchConfig {
        threads: usize::from(args.threads),
        region_policy: if args.strict_regions {
            RegionPolicy::Reject
        } else {
            RegionPolicy::Ignore
        },
    };
    let engine = StitchEngine::new(&alphabet, &MidpointResolver, config);
    let contigs = engine.run(&index, regions.as_deref())?;

    write_fasta_file(&args.output, &contigs)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    if verbose {
        eprintln!("Wrote {} contigs to {}", contigs.len(), args.output.display());
    }

    Ok(())
}

/// Read every input container, in the order given
///
/// # Errors
///
/// Returns the first read or parse failure, naming the offending file.
pub fn load_inputs(paths: &[PathBuf]) -> anyhow::Result<Vec<ProbsFile>> {
    paths
        .iter()
        .map(|path| load_input(path))
        .collect()
}

fn load_input(path: &Path) -> anyhow::Result<ProbsFile> {
    parse_probs_file(path).with_context(|| format!("Failed to read {}", path.display()))
}
