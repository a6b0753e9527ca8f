//! Label alphabet and arg-max decoding of probability rows.

use std::collections::HashSet;
use std::ops::Range;

use thiserror::Error;

use crate::core::sample::Sample;
use crate::utils::validation::MAX_ALPHABET_SIZE;

/// Gap label used by upstream labelling when none is declared
pub const DEFAULT_GAP_SYMBOL: &str = "*";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum AlphabetError {
    #[error("Cannot decode probabilities without a label decoding (none embedded in input and no model given)")]
    Missing,

    #[error("Label decoding is empty")]
    Empty,

    #[error("Label decoding has {0} labels, exceeding the maximum of {MAX_ALPHABET_SIZE}")]
    TooManyLabels(usize),

    #[error("Label {0} is empty")]
    EmptyLabel(usize),

    #[error("Label '{0}' appears more than once")]
    DuplicateLabel(String),

    #[error("Gap symbol '{0}' is not part of the label decoding")]
    InvalidGap(String),

    #[error("Sample '{sample}' has {found} label columns but the label decoding has {expected}")]
    WidthMismatch {
        sample: String,
        found: usize,
        expected: usize,
    },
}

/// Ordered label decoding with a designated gap label.
///
/// The label at index `i` is what probability column `i` decodes to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    labels: Vec<String>,
    gap: String,
}

impl Alphabet {
    /// # Errors
    ///
    /// Returns an `AlphabetError` if the labels are empty, too many, contain an
    /// empty or duplicate entry, or do not contain `gap` exactly once.
    pub fn new(labels: Vec<String>, gap: impl Into<String>) -> Result<Self, AlphabetError> {
        let gap = gap.into();

        if labels.is_empty() {
            return Err(AlphabetError::Empty);
        }
        if labels.len() > MAX_ALPHABET_SIZE {
            return Err(AlphabetError::TooManyLabels(labels.len()));
        }

        let mut seen = HashSet::new();
        for (i, label) in labels.iter().enumerate() {
            if label.is_empty() {
                return Err(AlphabetError::EmptyLabel(i));
            }
            if !seen.insert(label.as_str()) {
                return Err(AlphabetError::DuplicateLabel(label.clone()));
            }
        }
        if !seen.contains(gap.as_str()) {
            return Err(AlphabetError::InvalidGap(gap));
        }

        Ok(Self { labels, gap })
    }

    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    #[must_use]
    pub fn gap(&self) -> &str {
        &self.gap
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Check that a sample's probability columns line up with this alphabet.
    ///
    /// Done once per sample when it enters a run so decoding can index labels
    /// directly.
    ///
    /// # Errors
    ///
    /// Returns `AlphabetError::WidthMismatch` when the column count differs.
    pub fn check_width(&self, sample: &Sample) -> Result<(), AlphabetError> {
        let found = sample.label_probs().n_labels();
        if found == self.labels.len() {
            Ok(())
        } else {
            Err(AlphabetError::WidthMismatch {
                sample: sample.name.clone(),
                found,
                expected: self.labels.len(),
            })
        }
    }

    /// Decode rows by arg-max and strip every gap symbol from the result.
    ///
    /// # Panics
    ///
    /// Panics if a row is wider than the alphabet; widths are checked with
    /// [`Alphabet::check_width`] before decoding.
    pub fn decode<'a>(&self, rows: impl IntoIterator<Item = &'a [f32]>) -> String {
        let mut decoded = String::new();
        for row in rows {
            debug_assert_eq!(row.len(), self.labels.len());
            decoded.push_str(&self.labels[argmax(row)]);
        }
        decoded.replace(self.gap.as_str(), "")
    }

    /// Decode `range` of a sample's rows
    pub fn decode_sample(&self, sample: &Sample, range: Range<usize>) -> String {
        self.decode(sample.label_probs().rows(range))
    }
}

/// Index of the largest score; ties resolve to the lowest index and NaN never wins.
#[must_use]
pub fn argmax(row: &[f32]) -> usize {
    let mut best = 0;
    let mut best_score = f32::NEG_INFINITY;
    for (i, &score) in row.iter().enumerate() {
        if score > best_score {
            best = i;
            best_score = score;
        }
    }
    best
}
