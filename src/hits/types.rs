use std::collections::BTreeMap;
use log::warn;

use crate::alignment::AlignmentRecord;
use super::list::HitList;
use super::matrix::HitMatrix;

/// The subject accessions hit by one sample, in input row order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleHits {
    pub name: String,
    pub subjects: Vec<String>,
}

impl SampleHits {
    pub fn new(name: String, subjects: Vec<String>) -> Self {
        SampleHits { name, subjects }
    }

    pub fn from_records(name: String, records: &[AlignmentRecord]) -> Self {
        let subjects = records
            .iter()
            .map(|record| record.subject_accession.clone())
            .collect();
        SampleHits::new(name, subjects)
    }

    /// Number of hits per subject accession
    pub fn counts(&self) -> BTreeMap<&str, usize> {
        let mut counts = BTreeMap::new();
        for subject in &self.subjects {
            *counts.entry(subject.as_str()).or_insert(0) += 1;
        }
        counts
    }
}

/// Running collection of every sample seen so far.
///
/// Samples keep their insertion order. Adding a sample whose name is already
/// present replaces the earlier one in place.
#[derive(Debug, Default)]
pub struct Collation {
    samples: Vec<SampleHits>,
}

impl Collation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, sample: SampleHits) {
        match self.samples.iter_mut().find(|s| s.name == sample.name) {
            Some(existing) => {
                warn!("Sample name {:?} seen twice, keeping the later file", sample.name);
                *existing = sample;
            }
            None => self.samples.push(sample),
        }
    }

    #[cfg(test)]
    pub fn samples(&self) -> &[SampleHits] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn hit_matrix(&self) -> HitMatrix {
        HitMatrix::from_samples(&self.samples)
    }

    pub fn hit_list(&self) -> HitList {
        HitList::from_samples(&self.samples)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hits(name: &str, subjects: &[&str]) -> SampleHits {
        SampleHits::new(
            name.to_string(),
            subjects.iter().map(|s| s.to_string()).collect(),
        )
    }

    #[test]
    fn test_counts() {
        let sample = hits("S01", &["tetM", "sul1", "tetM", "blaTEM"]);
        let counts = sample.counts();

        assert_eq!(counts.len(), 3);
        assert_eq!(counts["tetM"], 2);
        assert_eq!(counts["sul1"], 1);
        assert_eq!(counts["blaTEM"], 1);
    }

    #[test]
    fn test_empty_counts() {
        assert!(hits("S01", &[]).counts().is_empty());
    }

    #[test]
    fn test_collation_keeps_order() {
        let mut collation = Collation::new();
        collation.add(hits("S02", &["tetM"]));
        collation.add(hits("S01", &["sul1"]));

        let names: Vec<_> = collation.samples().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["S02", "S01"]);
        assert_eq!(collation.len(), 2);
    }

    #[test]
    fn test_duplicate_name_replaces() {
        let mut collation = Collation::new();
        collation.add(hits("S01", &["tetM"]));
        collation.add(hits("S02", &["sul1"]));
        collation.add(hits("S01", &["blaTEM", "blaTEM"]));

        assert_eq!(collation.len(), 2);
        assert_eq!(collation.samples()[0], hits("S01", &["blaTEM", "blaTEM"]));
    }
}
