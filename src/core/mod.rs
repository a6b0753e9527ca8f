//! Core data types for probability stitching.
//!
//! - [`Coordinate`]: a `(major, minor)` alignment-space position
//! - [`Sample`]: a window of per-position label probabilities over one reference
//! - [`Alphabet`]: the label decoding, with arg-max decoding and gap stripping
//! - [`Contig`]: a named, gap-free consensus sequence
//!
//! ## Coordinates
//!
//! `minor > 0` marks a base inserted after reference position `major`. Contig
//! names render boundaries 1-based as `major+1.minor`:
//!
//! | Coordinate | Rendered |
//! |------------|----------|
//! | (0, 0)     | 1.0      |
//! | (14, 0)    | 15.0     |
//! | (99, 2)    | 100.2    |

pub mod alphabet;
pub mod contig;
pub mod sample;
pub mod types;

pub use alphabet::Alphabet;
pub use contig::Contig;
pub use sample::Sample;
pub use types::Coordinate;
