//! Reference-to-samples index.
//!
//! The index is built once per run from every input container and maps each
//! reference name to its samples in position order. Containers may split a
//! reference between them; the index merges their samples transparently.

pub mod store;

pub use store::{ReferenceSummary, SampleIndex};

use crate::core::sample::Sample;

/// Source of position-ordered samples per reference
pub trait SampleSource: Sync {
    /// All reference names, in the order they should be visited by default
    fn reference_names(&self) -> Vec<String>;

    /// Samples for `ref_name` in increasing position order, or `None` if the
    /// reference is unknown
    fn samples_for(&self, ref_name: &str) -> Option<Vec<&Sample>>;
}
