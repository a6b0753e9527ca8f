use thiserror::Error;
use tracing::{debug, info};

use crate::core::alphabet::{Alphabet, AlphabetError};
use crate::core::contig::Contig;
use crate::core::sample::Sample;
use crate::core::types::Coordinate;

use super::overlap::{Overlap, OverlapResolver, Split};

#[derive(Error, Debug)]
pub enum StitchError {
    #[error("No samples found for reference '{0}'")]
    EmptyReference(String),

    #[error("Samples for '{ref_name}' are not sorted: '{next}' starts before '{previous}'")]
    UnsortedSamples {
        ref_name: String,
        previous: String,
        next: String,
    },

    #[error("Sample '{sample}' belongs to '{found}', expected '{expected}'")]
    MixedReferences {
        expected: String,
        found: String,
        sample: String,
    },

    #[error("Invalid split between '{first}' and '{second}' (end {end_in_first}, resume {start_in_second}): {reason}")]
    InvalidSplit {
        first: String,
        second: String,
        end_in_first: usize,
        start_in_second: usize,
        reason: String,
    },

    #[error("Reference '{0}' is not present in the inputs")]
    UnknownReference(String),

    #[error("Region '{0}' restricts a range, but only whole references can be stitched")]
    RegionRangeRejected(String),

    #[error(transparent)]
    Alphabet(#[from] AlphabetError),

    #[error("Failed to build thread pool: {0}")]
    ThreadPool(String),
}

/// The contig currently being built for one reference.
///
/// Owned by a single stitching run; carries the decoded text so far, the
/// boundary it started at, and the row of the next sample to resume from.
#[derive(Debug)]
struct OpenContig {
    start: Coordinate,
    text: String,
    resume: usize,
}

impl OpenContig {
    fn starting_at(sample: &Sample) -> Self {
        Self {
            start: sample.first(),
            text: String::new(),
            resume: 0,
        }
    }

    /// Decode `sample` from the resume row up to `end` (exclusive) onto the text
    fn extend(&mut self, alphabet: &Alphabet, sample: &Sample, end: usize) {
        self.text
            .push_str(&alphabet.decode_sample(sample, self.resume..end));
    }

    /// Close the contig at the last position of `sample`
    fn close(self, sample: &Sample) -> Contig {
        let key = Contig::key_for(&sample.ref_name, &self.start, &sample.last());
        Contig::new(key, self.text)
    }
}

/// Walks one reference's samples in order, joining overlapping neighbours.
///
/// A new contig is opened whenever two consecutive samples do not overlap.
/// A sample ending at or before the current one adds no positions and is
/// skipped.
pub struct Stitcher<'a, R: ?Sized> {
    alphabet: &'a Alphabet,
    resolver: &'a R,
}

impl<'a, R: OverlapResolver + ?Sized> Stitcher<'a, R> {
    pub fn new(alphabet: &'a Alphabet, resolver: &'a R) -> Self {
        Self { alphabet, resolver }
    }

    /// Stitch the position-ordered samples of `ref_name` into contigs.
    ///
    /// # Errors
    ///
    /// Returns `StitchError::EmptyReference` if there are no samples, and
    /// `UnsortedSamples`, `MixedReferences`, `InvalidSplit` or `Alphabet` when a
    /// sample or a resolved split breaks the stitching contract.
    pub fn stitch<'s, I>(&self, ref_name: &str, samples: I) -> Result<Vec<Contig>, StitchError>
    where
        I: IntoIterator<Item = &'s Sample>,
    {
        let mut samples = samples.into_iter();
        let mut current = samples
            .next()
            .ok_or_else(|| StitchError::EmptyReference(ref_name.to_string()))?;
        self.check_sample(ref_name, current)?;

        let mut open = OpenContig::starting_at(current);
        let mut contigs = Vec::new();

        for next in samples {
            self.check_sample(ref_name, next)?;
            if next.first() < current.first() {
                return Err(StitchError::UnsortedSamples {
                    ref_name: ref_name.to_string(),
                    previous: current.name.clone(),
                    next: next.name.clone(),
                });
            }

            if next.last() <= current.last() {
                // Every position of `next` is already covered by `current`
                debug!("Skipping {}, contained in {}", next.name, current.name);
                continue;
            }

            match self.resolver.resolve_from(current, open.resume, next)? {
                Overlap::Split(split) => {
                    check_split(&split, open.resume, current, next)?;
                    open.extend(self.alphabet, current, split.end_in_first);
                    open.resume = split.start_in_second;
                }
                gap => {
                    open.extend(self.alphabet, current, current.len());
                    contigs.push(open.close(current));
                    if gap == Overlap::Abutting {
                        info!(
                            "{} and {} are adjacent without overlap, starting a new contig",
                            current.name, next.name
                        );
                    } else {
                        info!("There is no overlap between {} and {}", current.name, next.name);
                    }
                    open = OpenContig::starting_at(next);
                }
            }
            current = next;
        }

        // No more samples: the open contig runs to the end of the last one
        open.extend(self.alphabet, current, current.len());
        contigs.push(open.close(current));

        debug!("Stitched {} contig(s) for {ref_name}", contigs.len());
        Ok(contigs)
    }

    fn check_sample(&self, ref_name: &str, sample: &Sample) -> Result<(), StitchError> {
        if sample.ref_name != ref_name {
            return Err(StitchError::MixedReferences {
                expected: ref_name.to_string(),
                found: sample.ref_name.clone(),
                sample: sample.name.clone(),
            });
        }
        self.alphabet.check_width(sample)?;
        Ok(())
    }
}

/// A split must not run past either sample or end before the resume row
fn check_split(
    split: &Split,
    resume: usize,
    first: &Sample,
    second: &Sample,
) -> Result<(), StitchError> {
    let reason = if split.end_in_first > first.len() {
        Some(format!("first sample has only {} rows", first.len()))
    } else if split.end_in_first < resume {
        Some(format!("first sample resumes at row {resume}"))
    } else if split.start_in_second >= second.len() {
        Some(format!("second sample has only {} rows", second.len()))
    } else {
        None
    };

    match reason {
        Some(reason) => Err(StitchError::InvalidSplit {
            first: first.name.clone(),
            second: second.name.clone(),
            end_in_first: split.end_in_first,
            start_in_second: split.start_in_second,
            reason,
        }),
        None => Ok(()),
    }
}
