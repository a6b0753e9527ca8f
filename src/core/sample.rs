use std::ops::Range;

use thiserror::Error;

use crate::core::types::Coordinate;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SampleError {
    #[error("Sample '{0}' has no positions")]
    Empty(String),

    #[error("Sample '{name}' has {positions} positions but {rows} probability rows")]
    RowCountMismatch {
        name: String,
        positions: usize,
        rows: usize,
    },

    #[error("Sample '{name}' row {row} has {found} columns, expected {expected}")]
    RaggedRow {
        name: String,
        row: usize,
        found: usize,
        expected: usize,
    },

    #[error("Sample '{name}' positions are not strictly increasing at index {index} ({prev} then {next})")]
    UnsortedPositions {
        name: String,
        index: usize,
        prev: Coordinate,
        next: Coordinate,
    },
}

/// Row-major matrix of label scores, one row per position.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelProbs {
    data: Vec<f32>,
    n_labels: usize,
}

impl LabelProbs {
    /// Flatten a list of rows. All rows must share the first row's width.
    ///
    /// Returns the offending row index and its width on a ragged input.
    pub fn from_rows(rows: &[Vec<f32>]) -> Result<Self, (usize, usize, usize)> {
        let n_labels = rows.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(rows.len() * n_labels);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != n_labels {
                return Err((i, row.len(), n_labels));
            }
            data.extend_from_slice(row);
        }
        Ok(Self { data, n_labels })
    }

    #[must_use]
    pub fn n_rows(&self) -> usize {
        if self.n_labels == 0 {
            0
        } else {
            self.data.len() / self.n_labels
        }
    }

    #[must_use]
    pub fn n_labels(&self) -> usize {
        self.n_labels
    }

    #[must_use]
    pub fn row(&self, i: usize) -> &[f32] {
        &self.data[i * self.n_labels..(i + 1) * self.n_labels]
    }

    /// Iterate over rows in `range`
    pub fn rows(&self, range: Range<usize>) -> impl Iterator<Item = &[f32]> + '_ {
        self.data[range.start * self.n_labels..range.end * self.n_labels]
            .chunks_exact(self.n_labels.max(1))
    }
}

/// A window of per-position label probabilities over part of one reference.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub ref_name: String,
    /// Identifier used in diagnostics only
    pub name: String,
    positions: Vec<Coordinate>,
    label_probs: LabelProbs,
}

impl Sample {
    /// Build a sample, checking that it is non-empty, its positions are strictly
    /// increasing, and there is exactly one rectangular row per position.
    ///
    /// # Errors
    ///
    /// Returns a `SampleError` describing the first violated invariant.
    pub fn new(
        ref_name: impl Into<String>,
        name: impl Into<String>,
        positions: Vec<Coordinate>,
        rows: &[Vec<f32>],
    ) -> Result<Self, SampleError> {
        let name = name.into();

        if positions.is_empty() {
            return Err(SampleError::Empty(name));
        }
        if positions.len() != rows.len() {
            return Err(SampleError::RowCountMismatch {
                name,
                positions: positions.len(),
                rows: rows.len(),
            });
        }
        if let Some(index) = positions.windows(2).position(|w| w[0] >= w[1]) {
            return Err(SampleError::UnsortedPositions {
                index: index + 1,
                prev: positions[index],
                next: positions[index + 1],
                name,
            });
        }

        let label_probs = match LabelProbs::from_rows(rows) {
            Ok(probs) => probs,
            Err((row, found, expected)) => {
                return Err(SampleError::RaggedRow {
                    name,
                    row,
                    found,
                    expected,
                })
            }
        };

        Ok(Self {
            ref_name: ref_name.into(),
            name,
            positions,
            label_probs,
        })
    }

    #[must_use]
    pub fn positions(&self) -> &[Coordinate] {
        &self.positions
    }

    #[must_use]
    pub fn label_probs(&self) -> &LabelProbs {
        &self.label_probs
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Always false for a constructed sample; kept for API symmetry with `len`
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    #[must_use]
    pub fn first(&self) -> Coordinate {
        self.positions[0]
    }

    #[must_use]
    pub fn last(&self) -> Coordinate {
        self.positions[self.positions.len() - 1]
    }

    /// Index of `pos` within this sample, if present
    #[must_use]
    pub fn index_of(&self, pos: &Coordinate) -> Option<usize> {
        self.positions.binary_search(pos).ok()
    }
}
