//! Model descriptor reader, the fallback source of the label decoding.
//!
//! A model descriptor is a JSON document (optionally gzip compressed) with a
//! `label_decoding` list and an optional `gap_symbol`. Other keys are ignored.

use std::io::BufReader;
use std::path::Path;

use flate2::read::MultiGzDecoder;
use thiserror::Error;
use tracing::info;

use crate::core::alphabet::{Alphabet, AlphabetError};
use crate::parsing::probs::{LabelDecoding, ParseError};
use crate::utils::validation::is_gzipped;

#[derive(Error, Debug)]
pub enum ModelError {
    #[error("Failed to read model descriptor: {0}")]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Alphabet(#[from] AlphabetError),
}

/// Read the label decoding from a model descriptor
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read or `ParseError::Json` if
/// it has no `label_decoding` list.
pub fn load_label_decoding(path: &Path) -> Result<LabelDecoding, ParseError> {
    let file = std::fs::File::open(path)?;

    let decoding = if is_gzipped(path) {
        serde_json::from_reader(BufReader::new(MultiGzDecoder::new(file)))?
    } else {
        serde_json::from_reader(BufReader::new(file))?
    };

    Ok(decoding)
}

/// Resolve the alphabet for a run.
///
/// The decoding embedded in the first input container wins; otherwise the
/// model descriptor is consulted. The chosen alphabet is logged.
///
/// # Errors
///
/// Returns `AlphabetError::Missing` if neither source provides a decoding, or
/// the error from reading or validating whichever source was used.
pub fn resolve_alphabet(
    embedded: Option<&LabelDecoding>,
    model: Option<&Path>,
) -> Result<Alphabet, ModelError> {
    let alphabet = match (embedded, model) {
        (Some(decoding), _) => decoding.to_alphabet()?,
        (None, Some(path)) => {
            info!("Loading label decoding from {}", path.display());
            load_label_decoding(path)?.to_alphabet()?
        }
        (None, None) => return Err(AlphabetError::Missing.into()),
    };

    let listing: Vec<String> = alphabet
        .labels()
        .iter()
        .enumerate()
        .map(|(i, label)| format!("{i}: {label}"))
        .collect();
    info!("Label decoding is:\n{}", listing.join("\n"));

    Ok(alphabet)
}
