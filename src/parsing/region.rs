//! Region filter parsing.
//!
//! Regions use the usual `name[:start[-end]]` form. Only whole references are
//! stitched, so any interval is recorded but not applied.

use noodles::core::Region;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum RegionError {
    #[error("Invalid region '{region}': {reason}")]
    Invalid { region: String, reason: String },
}

/// A requested reference, parsed from a region string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionRequest {
    /// Region string as given
    pub raw: String,

    /// Reference name
    pub name: String,

    /// Whether a start and/or end was given
    pub has_range: bool,
}

impl RegionRequest {
    /// # Errors
    ///
    /// Returns `RegionError::Invalid` if the string is empty or not a region.
    pub fn parse(s: &str) -> Result<Self, RegionError> {
        let region: Region = s.parse().map_err(|e| RegionError::Invalid {
            region: s.to_string(),
            reason: format!("{e}"),
        })?;

        let name = String::from_utf8_lossy(region.name()).into_owned();
        if name.is_empty() {
            return Err(RegionError::Invalid {
                region: s.to_string(),
                reason: "empty reference name".to_string(),
            });
        }

        let interval = region.interval();
        Ok(Self {
            raw: s.to_string(),
            name,
            has_range: interval.start().is_some() || interval.end().is_some(),
        })
    }
}

/// Parse every region string, stopping at the first invalid one
///
/// # Errors
///
/// Returns the first `RegionError` encountered.
pub fn parse_regions<S: AsRef<str>>(regions: &[S]) -> Result<Vec<RegionRequest>, RegionError> {
    regions
        .iter()
        .map(|r| RegionRequest::parse(r.as_ref()))
        .collect()
}
