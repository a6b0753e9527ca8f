//! Centralized validation and helper functions.

use std::path::Path;

/// Maximum number of samples accepted from a single container
pub const MAX_SAMPLES_PER_FILE: usize = 1_000_000;

/// Maximum number of labels in a label decoding
pub const MAX_ALPHABET_SIZE: usize = 256;

/// Check if adding another sample would exceed the maximum allowed.
///
/// Call this with the current count BEFORE adding a new sample.
#[must_use]
pub fn exceeds_sample_limit(count: usize) -> bool {
    count >= MAX_SAMPLES_PER_FILE
}

/// Check if the path names a gzip/bgzip compressed file
///
/// # Examples
///
/// ```
/// use contig_stitch::utils::validation::is_gzipped;
/// use std::path::Path;
///
/// assert!(is_gzipped(Path::new("probs.json.gz")));
/// assert!(is_gzipped(Path::new("PROBS.JSON.BGZ")));
/// assert!(!is_gzipped(Path::new("probs.json")));
/// ```
#[must_use]
#[allow(clippy::case_sensitive_file_extension_comparisons)] // Already lowercased
pub fn is_gzipped(path: &Path) -> bool {
    let path_str = path.to_string_lossy().to_lowercase();
    path_str.ends_with(".gz") || path_str.ends_with(".bgz")
}

/// Check if the path means standard input/output
#[must_use]
pub fn is_stdio(path: &Path) -> bool {
    path.as_os_str() == "-"
}
