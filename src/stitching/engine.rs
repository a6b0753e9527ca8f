use std::collections::HashSet;

use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::core::alphabet::Alphabet;
use crate::core::contig::Contig;
use crate::index::SampleSource;
use crate::parsing::region::RegionRequest;

use super::overlap::OverlapResolver;
use super::stitcher::{StitchError, Stitcher};

/// What to do with a requested region that carries a start/end
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RegionPolicy {
    /// Warn and stitch the whole reference
    #[default]
    Ignore,
    /// Refuse to run
    Reject,
}

/// Configuration for the stitching engine
#[derive(Debug, Clone)]
pub struct StitchConfig {
    /// Number of references stitched concurrently
    pub threads: usize,
    /// Handling of region ranges
    pub region_policy: RegionPolicy,
}

impl Default for StitchConfig {
    fn default() -> Self {
        Self {
            threads: 1,
            region_policy: RegionPolicy::Ignore,
        }
    }
}

/// Runs the stitcher over every selected reference of a sample source
pub struct StitchEngine<'a, R: ?Sized> {
    alphabet: &'a Alphabet,
    resolver: &'a R,
    config: StitchConfig,
}

impl<'a, R: OverlapResolver + ?Sized> StitchEngine<'a, R> {
    pub fn new(alphabet: &'a Alphabet, resolver: &'a R, config: StitchConfig) -> Self {
        Self {
            alphabet,
            resolver,
            config,
        }
    }

    /// Choose the references to stitch.
    ///
    /// Without regions, every reference of the source in its own order. With
    /// regions, the named references in request order, first mention winning.
    ///
    /// # Errors
    ///
    /// Returns `StitchError::UnknownReference` for a name absent from the source,
    /// or `StitchError::RegionRangeRejected` for a ranged region under
    /// `RegionPolicy::Reject`.
    pub fn select_references<S: SampleSource + ?Sized>(
        &self,
        source: &S,
        regions: Option<&[RegionRequest]>,
    ) -> Result<Vec<String>, StitchError> {
        let Some(regions) = regions else {
            return Ok(source.reference_names());
        };

        let known: HashSet<String> = source.reference_names().into_iter().collect();
        let mut seen = HashSet::new();
        let mut names = Vec::new();

        for region in regions {
            if region.has_range {
                match self.config.region_policy {
                    RegionPolicy::Ignore => warn!(
                        "Ignoring start:end for '{}', stitching all of {}",
                        region.raw, region.name
                    ),
                    RegionPolicy::Reject => {
                        return Err(StitchError::RegionRangeRejected(region.raw.clone()))
                    }
                }
            }
            if !known.contains(&region.name) {
                return Err(StitchError::UnknownReference(region.name.clone()));
            }
            if seen.insert(region.name.clone()) {
                names.push(region.name.clone());
            } else {
                debug!("Reference {} requested more than once", region.name);
            }
        }

        Ok(names)
    }

    /// Stitch the selected references, keeping contigs grouped by reference in
    /// selection order.
    ///
    /// # Errors
    ///
    /// Returns the first error from reference selection or from any reference's
    /// stitching run, or `StitchError::ThreadPool` if the pool cannot be built.
    pub fn run<S: SampleSource + ?Sized>(
        &self,
        source: &S,
        regions: Option<&[RegionRequest]>,
    ) -> Result<Vec<Contig>, StitchError> {
        let names = self.select_references(source, regions)?;

        let per_reference: Vec<Vec<Contig>> = if self.config.threads > 1 {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(self.config.threads)
                .build()
                .map_err(|e| StitchError::ThreadPool(e.to_string()))?;
            pool.install(|| {
                names
                    .par_iter()
                    .map(|name| self.stitch_reference(source, name))
                    .collect::<Result<_, _>>()
            })?
        } else {
            names
                .iter()
                .map(|name| self.stitch_reference(source, name))
                .collect::<Result<_, _>>()?
        };

        let contigs: Vec<Contig> = per_reference.into_iter().flatten().collect();
        info!(
            "Stitched {} contig(s) from {} reference(s)",
            contigs.len(),
            names.len()
        );
        Ok(contigs)
    }

    /// Stitch a single reference
    ///
    /// # Errors
    ///
    /// Returns `StitchError::UnknownReference` if the source has no such
    /// reference, otherwise any error from [`Stitcher::stitch`].
    pub fn stitch_reference<S: SampleSource + ?Sized>(
        &self,
        source: &S,
        ref_name: &str,
    ) -> Result<Vec<Contig>, StitchError> {
        let samples = source
            .samples_for(ref_name)
            .ok_or_else(|| StitchError::UnknownReference(ref_name.to_string()))?;
        debug!("Stitching {} sample(s) for {ref_name}", samples.len());
        Stitcher::new(self.alphabet, self.resolver).stitch(ref_name, samples)
    }
}
