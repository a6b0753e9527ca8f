use serde::{Deserialize, Serialize};

use crate::core::types::Coordinate;

/// A closed, gap-free consensus sequence for one overlap-connected run of samples
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contig {
    /// `{ref_name}:{start}-{end}` with 1-based boundary coordinates
    pub key: String,

    /// Decoded sequence with gap symbols removed
    pub sequence: String,
}

impl Contig {
    pub fn new(key: impl Into<String>, sequence: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            sequence: sequence.into(),
        }
    }

    /// Name a contig by the reference and the first and last positions it spans
    #[must_use]
    pub fn key_for(ref_name: &str, start: &Coordinate, end: &Coordinate) -> String {
        format!("{ref_name}:{start}-{end}")
    }

    /// Reference name part of the key
    #[must_use]
    pub fn ref_name(&self) -> &str {
        self.key
            .rsplit_once(':')
            .map_or(self.key.as_str(), |(name, _)| name)
    }
}
