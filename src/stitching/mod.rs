//! Overlap resolution and contig stitching.
//!
//! - [`OverlapResolver`]: decides where one sample hands over to the next
//! - [`Stitcher`]: walks one reference's samples and emits contigs
//! - [`StitchEngine`]: selects references and runs a stitcher per reference
//!
//! ## Algorithm
//!
//! For each reference, samples are visited in position order. Each consecutive
//! pair is resolved into either a split (rows of the first sample to keep, row
//! of the second to resume from) or a gap. Rows kept are decoded by arg-max,
//! gap symbols are stripped, and the text is appended to the open contig. A gap
//! closes the open contig at the end of the first sample and opens a new one at
//! the start of the second. After the last sample the open contig is closed.
//!
//! References are independent of each other, so they may be stitched in
//! parallel; samples within a reference never are.
//!
//! ## Example
//!
//! ```rust,no_run
//! use contig_stitch::index::SampleIndex;
//! use contig_stitch::parsing::model::resolve_alphabet;
//! use contig_stitch::parsing::probs::parse_probs_file;
//! use contig_stitch::stitching::{MidpointResolver, StitchConfig, StitchEngine};
//! use std::path::Path;
//!
//! let probs = parse_probs_file(Path::new("consensus_probs.json")).unwrap();
//! let alphabet = resolve_alphabet(probs.label_decoding.as_ref(), None).unwrap();
//! let index = SampleIndex::from_files(vec![probs]);
//!
//! let engine = StitchEngine::new(&alphabet, &MidpointResolver, StitchConfig::default());
//! for contig in engine.run(&index, None).unwrap() {
//!     println!("{}\t{}", contig.key, contig.sequence.len());
//! }
//! ```

pub mod engine;
pub mod overlap;
pub mod stitcher;

pub use engine::{RegionPolicy, StitchConfig, StitchEngine};
pub use overlap::{MidpointResolver, Overlap, OverlapResolver, Split};
pub use stitcher::{StitchError, Stitcher};
