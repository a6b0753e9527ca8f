//! Readers for the inputs of a stitching run.
//!
//! - **Probability containers**: JSON (optionally gzip compressed) files of samples,
//!   possibly carrying the label decoding as metadata
//! - **Model descriptors**: JSON files providing the fallback label decoding
//! - **Regions**: `name[:start[-end]]` strings restricting which references are stitched
//!
//! ## Example
//!
//! ```rust,no_run
//! use contig_stitch::parsing::model::resolve_alphabet;
//! use contig_stitch::parsing::probs::parse_probs_file;
//! use std::path::Path;
//!
//! let probs = parse_probs_file(Path::new("consensus_probs.json.gz")).unwrap();
//! let alphabet = resolve_alphabet(probs.label_decoding.as_ref(), None).unwrap();
//! ```

pub mod model;
pub mod probs;
pub mod region;

pub use probs::ParseError;
