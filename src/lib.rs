//! # contig-stitch
//!
//! A library for assembling consensus contigs from overlapping windows of
//! per-position label probabilities.
//!
//! Upstream labelling produces "samples": windows over a reference, each giving
//! a probability for every label (base or gap) at every alignment position.
//! Neighbouring windows overlap, and the edges of a window are the least
//! trustworthy part of it. `contig-stitch` decides where each window hands over
//! to the next, decodes the kept rows, and joins them into contigs.
//!
//! ## Features
//!
//! - **Midpoint joins**: Neighbouring windows are joined in the middle of their
//!   shared positions, so each position is decoded exactly once
//! - **Gap-aware decoding**: Arg-max decoding with the gap label stripped
//! - **Contig splitting**: Non-overlapping windows start a new contig
//! - **Multiple inputs**: Samples for one reference may be spread over many files
//! - **Parallel references**: References are stitched independently
//!
//! ## Example
//!
//! ```rust
//! use contig_stitch::{Alphabet, Coordinate, MidpointResolver, Sample, Stitcher};
//!
//! let alphabet = Alphabet::new(vec!["A".into(), "C".into(), "*".into()], "*").unwrap();
//! let positions = (0..3).map(|major| Coordinate::new(major, 0)).collect();
//! let rows = vec![vec![0.9, 0.1, 0.0], vec![0.0, 0.1, 0.9], vec![0.2, 0.8, 0.0]];
//! let sample = Sample::new("chr1", "chr1:0-2", positions, &rows).unwrap();
//!
//! let contigs = Stitcher::new(&alphabet, &MidpointResolver)
//!     .stitch("chr1", [&sample])
//!     .unwrap();
//!
//! assert_eq!(contigs[0].key, "chr1:1.0-3.0");
//! assert_eq!(contigs[0].sequence, "AC");
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Coordinates, samples, the label alphabet, and contigs
//! - [`stitching`]: Overlap resolution, the per-reference stitcher, and the engine
//! - [`index`]: Reference-to-samples index over all inputs
//! - [`parsing`]: Readers for probability containers, model descriptors, and regions
//! - [`output`]: FASTA writer
//! - [`cli`]: Command-line interface implementation

pub mod cli;
pub mod core;
pub mod index;
pub mod output;
pub mod parsing;
pub mod stitching;
pub mod utils;

// Re-export commonly used types for convenience
pub use crate::core::alphabet::Alphabet;
pub use crate::core::contig::Contig;
pub use crate::core::sample::Sample;
pub use crate::core::types::Coordinate;
pub use index::SampleIndex;
pub use stitching::{MidpointResolver, StitchConfig, StitchEngine, Stitcher};
