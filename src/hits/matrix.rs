use std::collections::BTreeMap;

use super::types::SampleHits;

/// Subject accession by sample hit counts.
///
/// Rows are the union of subject accessions over all samples in ascending
/// order; columns follow sample order. Absent combinations are zero.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HitMatrix {
    samples: Vec<String>,
    rows: BTreeMap<String, Vec<usize>>,
}

impl HitMatrix {
    /// Outer join of the per-sample counts, zero filled in a single pass
    pub fn from_samples(samples: &[SampleHits]) -> Self {
        let width = samples.len();
        let mut rows: BTreeMap<String, Vec<usize>> = BTreeMap::new();

        for (column, sample) in samples.iter().enumerate() {
            for (subject, count) in sample.counts() {
                let row = rows
                    .entry(subject.to_string())
                    .or_insert_with(|| vec![0; width]);
                row[column] = count;
            }
        }

        HitMatrix {
            samples: samples.iter().map(|s| s.name.clone()).collect(),
            rows,
        }
    }

    pub fn samples(&self) -> &[String] {
        &self.samples
    }

    /// Rows as (subject accession, count per sample)
    pub fn rows(&self) -> impl Iterator<Item = (&str, &[usize])> {
        self.rows.iter().map(|(subject, counts)| (subject.as_str(), counts.as_slice()))
    }

    pub fn subject_count(&self) -> usize {
        self.rows.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn hits(name: &str, subjects: &[&str]) -> SampleHits {
        SampleHits::new(
            name.to_string(),
            subjects.iter().map(|s| s.to_string()).collect(),
        )
    }

    #[test]
    fn test_outer_join_zero_fill() {
        let matrix = HitMatrix::from_samples(&[
            hits("S01", &["tetM", "sul1", "tetM"]),
            hits("S02", &["blaTEM", "sul1"]),
        ]);

        assert_eq!(matrix.samples(), &["S01".to_string(), "S02".to_string()]);
        let rows: Vec<(&str, Vec<usize>)> =
            matrix.rows().map(|(s, c)| (s, c.to_vec())).collect();
        assert_eq!(
            rows,
            vec![
                ("blaTEM", vec![0, 1]),
                ("sul1", vec![1, 1]),
                ("tetM", vec![2, 0]),
            ]
        );
    }

    #[test]
    fn test_no_samples() {
        let matrix = HitMatrix::from_samples(&[]);
        assert!(matrix.samples().is_empty());
        assert_eq!(matrix.subject_count(), 0);
    }
}
