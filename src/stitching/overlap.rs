use tracing::warn;

use crate::core::sample::Sample;

use super::stitcher::StitchError;

/// Where to hand over from one sample to the next
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Split {
    /// Exclusive end of the rows trusted in the first sample
    pub end_in_first: usize,
    /// First row trusted in the second sample
    pub start_in_second: usize,
}

/// Relationship between two consecutive samples of a reference
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlap {
    /// The samples overlap and can be joined at `Split`
    Split(Split),
    /// The second sample starts right after the first ends, sharing no position
    Abutting,
    /// There is a hole between the samples, or nothing to anchor a join on
    Disjoint,
}

impl Overlap {
    #[must_use]
    pub fn split(end_in_first: usize, start_in_second: usize) -> Self {
        Self::Split(Split {
            end_in_first,
            start_in_second,
        })
    }
}

/// Finds the point at which to stop trusting one sample and start trusting the next
pub trait OverlapResolver: Sync {
    /// # Errors
    ///
    /// Returns a `StitchError` if the pair cannot be compared at all, e.g. the
    /// samples belong to different references.
    fn resolve(&self, first: &Sample, second: &Sample) -> Result<Overlap, StitchError>;

    /// Resolve a pair when the rows of `first` before `resume` were already
    /// taken from the sample before it.
    ///
    /// Resolvers that cannot take the carried row into account fall back to
    /// [`resolve`](Self::resolve); splits ending before `resume` are rejected
    /// by the stitcher.
    ///
    /// # Errors
    ///
    /// As for [`resolve`](Self::resolve).
    fn resolve_from(
        &self,
        first: &Sample,
        resume: usize,
        second: &Sample,
    ) -> Result<Overlap, StitchError> {
        let _ = resume;
        self.resolve(first, second)
    }
}

impl<F> OverlapResolver for F
where
    F: Fn(&Sample, &Sample) -> Result<Overlap, StitchError> + Sync,
{
    fn resolve(&self, first: &Sample, second: &Sample) -> Result<Overlap, StitchError> {
        self(first, second)
    }
}

/// Joins overlapping samples in the middle of their shared positions.
///
/// Positions present in both samples inside the overlapping range are
/// candidate anchors; reference positions (`minor == 0`) are preferred over
/// insertions. The middle anchor becomes the first row of the second sample
/// and the exclusive end of the first, so every position is decoded once and
/// the rows furthest from each window's edge are the ones kept. Anchors
/// before the row `first` resumes from are never picked.
#[derive(Debug, Clone, Copy, Default)]
pub struct MidpointResolver;

impl OverlapResolver for MidpointResolver {
    fn resolve(&self, first: &Sample, second: &Sample) -> Result<Overlap, StitchError> {
        self.resolve_from(first, 0, second)
    }

    fn resolve_from(
        &self,
        first: &Sample,
        resume: usize,
        second: &Sample,
    ) -> Result<Overlap, StitchError> {
        if first.ref_name != second.ref_name {
            return Err(StitchError::MixedReferences {
                expected: first.ref_name.clone(),
                found: second.ref_name.clone(),
                sample: second.name.clone(),
            });
        }

        let first_end = first.last();
        let second_start = second.first();
        if second_start > first_end {
            return Ok(if first_end.is_followed_by(&second_start) {
                Overlap::Abutting
            } else {
                Overlap::Disjoint
            });
        }

        let lo = first.first().max(second_start);
        let hi = first_end.min(second.last());
        let positions = first.positions();
        let end = positions.partition_point(|p| *p <= hi);
        let begin = positions
            .partition_point(|p| *p < lo)
            .max(resume)
            .min(end);

        let shared: Vec<(usize, usize)> = positions[begin..end]
            .iter()
            .enumerate()
            .filter_map(|(i, pos)| second.index_of(pos).map(|j| (begin + i, j)))
            .collect();

        let anchors: Vec<(usize, usize)> = shared
            .iter()
            .copied()
            .filter(|&(i, _)| positions[i].is_reference())
            .collect();
        let candidates = if anchors.is_empty() { shared } else { anchors };

        if candidates.is_empty() {
            warn!(
                "{} and {} overlap in range but share no position to join at",
                first.name, second.name
            );
            return Ok(Overlap::Disjoint);
        }

        let (end_in_first, start_in_second) = candidates[candidates.len() / 2];
        Ok(Overlap::split(end_in_first, start_in_second))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::sample::tests::reference_sample;
    use crate::core::types::Coordinate;

    fn sample(ref_name: &str, start: u64, len: usize) -> Sample {
        reference_sample(ref_name, start, vec![vec![1.0]; len])
    }

    fn sample_at(positions: &[(u64, u64)]) -> Sample {
        let positions: Vec<Coordinate> = positions.iter().copied().map(Coordinate::from).collect();
        let rows = vec![vec![1.0]; positions.len()];
        Sample::new("chr1", "custom", positions, &rows).unwrap()
    }

    #[test]
    fn test_midpoint_of_overlap() {
        // 0..=9 and 5..=14 share 5..=9; the middle shared position is 7
        let a = sample("chr1", 0, 10);
        let b = sample("chr1", 5, 10);
        let overlap = MidpointResolver.resolve(&a, &b).unwrap();
        assert_eq!(overlap, Overlap::split(7, 2));
    }

    #[test]
    fn test_single_shared_position() {
        let a = sample("chr1", 0, 10);
        let b = sample("chr1", 9, 10);
        assert_eq!(
            MidpointResolver.resolve(&a, &b).unwrap(),
            Overlap::split(9, 0)
        );
    }

    #[test]
    fn test_abutting_and_disjoint() {
        let a = sample("chr1", 0, 10);
        let abutting = sample("chr1", 10, 5);
        let disjoint = sample("chr1", 20, 5);

        assert_eq!(
            MidpointResolver.resolve(&a, &abutting).unwrap(),
            Overlap::Abutting
        );
        assert_eq!(
            MidpointResolver.resolve(&a, &disjoint).unwrap(),
            Overlap::Disjoint
        );
    }

    #[test]
    fn test_prefers_reference_anchors() {
        // Shared: (3,0) (3,1) (4,0); only reference positions are candidates -> (4,0)
        let a = sample_at(&[(1, 0), (2, 0), (3, 0), (3, 1), (4, 0)]);
        let b = sample_at(&[(3, 0), (3, 1), (4, 0), (5, 0)]);
        assert_eq!(
            MidpointResolver.resolve(&a, &b).unwrap(),
            Overlap::split(4, 2)
        );
    }

    #[test]
    fn test_differing_insertions_are_skipped() {
        // a has an insertion at 3 that b lacks, b has one at 4 that a lacks
        let a = sample_at(&[(2, 0), (3, 0), (3, 1), (4, 0), (5, 0)]);
        let b = sample_at(&[(3, 0), (4, 0), (4, 1), (5, 0), (6, 0)]);
        // shared reference anchors: (3,0) (4,0) (5,0) -> middle (4,0)
        assert_eq!(
            MidpointResolver.resolve(&a, &b).unwrap(),
            Overlap::split(3, 1)
        );
    }

    #[test]
    fn test_insertion_only_overlap_falls_back_to_insertions() {
        let a = sample_at(&[(1, 0), (1, 1), (1, 2)]);
        let b = sample_at(&[(1, 1), (1, 2), (2, 0)]);
        assert_eq!(
            MidpointResolver.resolve(&a, &b).unwrap(),
            Overlap::split(2, 1)
        );
    }

    #[test]
    fn test_range_overlap_without_shared_positions() {
        let a = sample_at(&[(1, 0), (1, 2)]);
        let b = sample_at(&[(1, 1), (2, 0)]);
        assert_eq!(
            MidpointResolver.resolve(&a, &b).unwrap(),
            Overlap::Disjoint
        );
    }

    #[test]
    fn test_anchor_never_before_resume_row() {
        // Shared 10..=90; the unrestricted midpoint is 50, row 50 of a
        let a = sample("chr1", 0, 101);
        let b = sample("chr1", 10, 81);
        assert_eq!(
            MidpointResolver.resolve(&a, &b).unwrap(),
            Overlap::split(50, 40)
        );

        // Resuming at row 60 leaves shared 60..=90, whose middle is 75
        assert_eq!(
            MidpointResolver.resolve_from(&a, 60, &b).unwrap(),
            Overlap::split(75, 65)
        );
    }

    #[test]
    fn test_resume_past_shared_positions_is_disjoint() {
        let a = sample("chr1", 0, 10);
        let b = sample("chr1", 5, 10);
        assert_eq!(
            MidpointResolver.resolve_from(&a, 10, &b).unwrap(),
            Overlap::Disjoint
        );
    }

    #[test]
    fn test_closure_resolver_ignores_resume() {
        let fixed = |_: &Sample, _: &Sample| Ok::<_, StitchError>(Overlap::split(3, 1));
        let a = sample("chr1", 0, 5);
        assert_eq!(fixed.resolve_from(&a, 2, &a).unwrap(), Overlap::split(3, 1));
    }

    #[test]
    fn test_mixed_references_is_an_error() {
        let a = sample("chr1", 0, 10);
        let b = sample("chr2", 5, 10);
        assert!(matches!(
            MidpointResolver.resolve(&a, &b),
            Err(StitchError::MixedReferences { .. })
        ));
    }

    #[test]
    fn test_closure_resolver() {
        let fixed = |_: &Sample, _: &Sample| Ok::<_, StitchError>(Overlap::split(1, 0));
        let a = sample("chr1", 0, 2);
        assert_eq!(fixed.resolve(&a, &a).unwrap(), Overlap::split(1, 0));
    }
}
