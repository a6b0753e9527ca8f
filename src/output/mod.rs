//! Writers for stitched output.

pub mod fasta;

pub use fasta::{write_fasta, write_fasta_file};
