use std::collections::HashMap;

use serde::Serialize;
use tracing::debug;

use crate::core::sample::Sample;
use crate::parsing::probs::ProbsFile;

use super::SampleSource;

/// Per-reference summary of indexed samples
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReferenceSummary {
    pub name: String,
    pub samples: usize,
    pub first: String,
    pub last: String,
}

/// All samples of a run, indexed by reference name
#[derive(Debug, Default)]
pub struct SampleIndex {
    /// All samples, in the order they were added
    samples: Vec<Sample>,

    /// Reference names in order of first appearance
    names: Vec<String>,

    /// Index: reference name -> sample indices ordered by position
    by_ref: HashMap<String, Vec<usize>>,
}

impl SampleIndex {
    /// Create an empty index
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an index over the samples of several containers
    #[must_use]
    pub fn from_files(files: Vec<ProbsFile>) -> Self {
        let mut index = Self::new();
        for file in files {
            if let Some(source) = &file.source {
                debug!("Indexing {} samples from {source}", file.samples.len());
            }
            index.add_samples(file.samples);
        }
        index
    }

    /// Add samples, merging them into the position order of their references.
    ///
    /// Samples are ordered by first then last position; equal samples keep
    /// insertion order.
    pub fn add_samples(&mut self, samples: impl IntoIterator<Item = Sample>) {
        let mut touched: Vec<String> = Vec::new();

        for sample in samples {
            let idx = self.samples.len();
            match self.by_ref.get_mut(&sample.ref_name) {
                Some(indices) => indices.push(idx),
                None => {
                    self.names.push(sample.ref_name.clone());
                    self.by_ref.insert(sample.ref_name.clone(), vec![idx]);
                }
            }
            if !touched.contains(&sample.ref_name) {
                touched.push(sample.ref_name.clone());
            }
            self.samples.push(sample);
        }

        for name in touched {
            if let Some(indices) = self.by_ref.get_mut(&name) {
                let samples = &self.samples;
                indices.sort_by_key(|&i| (samples[i].first(), samples[i].last()));
            }
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Reference names in order of first appearance
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Samples of one reference in position order
    #[must_use]
    pub fn get(&self, ref_name: &str) -> Option<Vec<&Sample>> {
        self.by_ref
            .get(ref_name)
            .map(|indices| indices.iter().map(|&i| &self.samples[i]).collect())
    }

    /// Summarize each reference: sample count and first/last boundary
    #[must_use]
    pub fn summaries(&self) -> Vec<ReferenceSummary> {
        self.names
            .iter()
            .filter_map(|name| {
                let indices = self.by_ref.get(name)?;
                let first = indices.first().map(|&i| self.samples[i].first())?;
                let last = indices
                    .iter()
                    .map(|&i| self.samples[i].last())
                    .max()
                    .unwrap_or(first);
                Some(ReferenceSummary {
                    name: name.clone(),
                    samples: indices.len(),
                    first: first.to_string(),
                    last: last.to_string(),
                })
            })
            .collect()
    }
}

impl SampleSource for SampleIndex {
    fn reference_names(&self) -> Vec<String> {
        self.names.clone()
    }

    fn samples_for(&self, ref_name: &str) -> Option<Vec<&Sample>> {
        self.get(ref_name)
    }
}
