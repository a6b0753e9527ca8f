//! Reader for label-probability containers.
//!
//! A container is a JSON document, optionally gzip/bgzip compressed, holding
//! an optional embedded label decoding and a list of samples:
//!
//! ```text
//! {
//!   "label_decoding": ["A", "C", "G", "T", "*"],
//!   "gap_symbol": "*",
//!   "samples": [
//!     {
//!       "ref_name": "chr1",
//!       "name": "chr1:0.0-9.0",
//!       "positions": [{"major": 0, "minor": 0}, ...],
//!       "label_probs": [[0.9, 0.0, 0.0, 0.0, 0.1], ...]
//!     }
//!   ]
//! }
//! ```

use std::io::{BufReader, Read};
use std::path::Path;

use flate2::read::MultiGzDecoder;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::core::alphabet::{Alphabet, AlphabetError, DEFAULT_GAP_SYMBOL};
use crate::core::sample::{Sample, SampleError};
use crate::core::types::Coordinate;
use crate::utils::validation::{exceeds_sample_limit, is_gzipped};

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid container format: {0}")]
    InvalidFormat(String),

    #[error("Invalid sample: {0}")]
    Sample(#[from] SampleError),

    #[error("Too many samples: {0} exceeds maximum allowed")]
    TooManySamples(usize),
}

/// Label decoding as stored in container metadata or a model descriptor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelDecoding {
    pub label_decoding: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gap_symbol: Option<String>,
}

impl LabelDecoding {
    /// Validate into an [`Alphabet`], defaulting the gap symbol to `*`
    ///
    /// # Errors
    ///
    /// Returns an `AlphabetError` if the labels do not form a valid alphabet.
    pub fn to_alphabet(&self) -> Result<Alphabet, AlphabetError> {
        let gap = self.gap_symbol.as_deref().unwrap_or(DEFAULT_GAP_SYMBOL);
        Alphabet::new(self.label_decoding.clone(), gap)
    }
}

#[derive(Debug, Deserialize)]
struct SampleRecord {
    ref_name: String,
    #[serde(default)]
    name: Option<String>,
    positions: Vec<Coordinate>,
    label_probs: Vec<Vec<f32>>,
}

#[derive(Debug, Deserialize)]
struct ContainerRecord {
    #[serde(default)]
    label_decoding: Option<Vec<String>>,
    #[serde(default)]
    gap_symbol: Option<String>,
    samples: Vec<SampleRecord>,
}

/// All samples read from one container
#[derive(Debug, Clone)]
pub struct ProbsFile {
    /// Source file path (if known)
    pub source: Option<String>,

    /// Label decoding embedded in the container, if any
    pub label_decoding: Option<LabelDecoding>,

    /// Samples in container order
    pub samples: Vec<Sample>,
}

impl ProbsFile {
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

/// Parse a probability container from disk, decompressing `.gz`/`.bgz` files
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, `ParseError::Json` if it
/// is not valid JSON of the expected shape, `ParseError::Sample` if a sample
/// violates its invariants, or `ParseError::TooManySamples` if the limit is
/// exceeded.
pub fn parse_probs_file(path: &Path) -> Result<ProbsFile, ParseError> {
    let file = std::fs::File::open(path)?;

    let parsed = if is_gzipped(path) {
        parse_probs_reader(BufReader::new(MultiGzDecoder::new(file)))?
    } else {
        parse_probs_reader(BufReader::new(file))?
    };

    debug!(
        "Read {} samples from {}",
        parsed.samples.len(),
        path.display()
    );

    Ok(parsed.with_source(path.display().to_string()))
}

/// Parse a probability container from JSON text
///
/// # Errors
///
/// See [`parse_probs_file`].
pub fn parse_probs_text(text: &str) -> Result<ProbsFile, ParseError> {
    let record: ContainerRecord = serde_json::from_str(text)?;
    container_to_probs(record)
}

/// Parse a probability container from any reader
///
/// # Errors
///
/// See [`parse_probs_file`].
pub fn parse_probs_reader<R: Read>(reader: R) -> Result<ProbsFile, ParseError> {
    let record: ContainerRecord = serde_json::from_reader(reader)?;
    container_to_probs(record)
}

fn container_to_probs(record: ContainerRecord) -> Result<ProbsFile, ParseError> {
    let label_decoding = match (record.label_decoding, record.gap_symbol) {
        (Some(labels), gap_symbol) => Some(LabelDecoding {
            label_decoding: labels,
            gap_symbol,
        }),
        (None, Some(_)) => {
            return Err(ParseError::InvalidFormat(
                "gap_symbol given without label_decoding".to_string(),
            ))
        }
        (None, None) => None,
    };

    let mut samples = Vec::with_capacity(record.samples.len());
    for sample in record.samples {
        if exceeds_sample_limit(samples.len()) {
            return Err(ParseError::TooManySamples(samples.len()));
        }
        if sample.ref_name.is_empty() {
            return Err(ParseError::InvalidFormat(
                "Sample has an empty ref_name".to_string(),
            ));
        }

        let name = match sample.name {
            Some(name) => name,
            None => default_sample_name(&sample.ref_name, &sample.positions),
        };
        samples.push(Sample::new(
            sample.ref_name,
            name,
            sample.positions,
            &sample.label_probs,
        )?);
    }

    Ok(ProbsFile {
        source: None,
        label_decoding,
        samples,
    })
}

/// `ref:first-last` using raw 0-based coordinates, for unnamed samples
fn default_sample_name(ref_name: &str, positions: &[Coordinate]) -> String {
    match (positions.first(), positions.last()) {
        (Some(first), Some(last)) => format!(
            "{ref_name}:{}.{}-{}.{}",
            first.major, first.minor, last.major, last.minor
        ),
        _ => ref_name.to_string(),
    }
}
