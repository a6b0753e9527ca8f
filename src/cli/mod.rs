//! Command-line interface for contig-stitch.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **stitch**: Decode and join overlapping label probabilities into contigs
//! - **index**: List the references and sample coverage found in the inputs
//!
//! ## Usage
//!
//! ```text
//! # Stitch all references to a FASTA file
//! contig-stitch stitch probs_1.json.gz probs_2.json.gz -o consensus.fasta
//!
//! # Use a model descriptor when the inputs carry no label decoding
//! contig-stitch stitch probs.json --model model.json -o consensus.fasta
//!
//! # Only some references, four at a time
//! contig-stitch stitch probs.json --regions chr1 chrM -t 4 > subset.fasta
//!
//! # Inspect what the inputs cover
//! contig-stitch index probs_1.json.gz probs_2.json.gz --format tsv
//! ```

use clap::{Parser, Subcommand};

pub mod index;
pub mod stitch;

#[derive(Parser)]
#[command(name = "contig-stitch")]
#[command(author = "Fulcrum Genomics")]
#[command(version)]
#[command(about = "Stitch overlapping label probabilities into consensus contigs")]
#[command(
    long_about = "contig-stitch assembles consensus sequences from overlapping windows of per-position label probabilities.\n\nFor each reference it:\n- Finds where each window should hand over to the next\n- Decodes the kept rows by arg-max and strips gap labels\n- Starts a new contig wherever consecutive windows do not overlap"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format (index listing)
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Stitch label probabilities into a FASTA of contigs
    Stitch(stitch::StitchArgs),

    /// List references and sample coverage in the inputs
    Index(index::IndexArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}
