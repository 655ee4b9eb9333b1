use super::types::SampleHits;

/// Per-sample hit lists laid side by side, one column per sample
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HitList {
    columns: Vec<(String, Vec<String>)>,
}

impl HitList {
    pub fn from_samples(samples: &[SampleHits]) -> Self {
        HitList {
            columns: samples
                .iter()
                .map(|s| (s.name.clone(), s.subjects.clone()))
                .collect(),
        }
    }

    pub fn samples(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|(name, _)| name.as_str())
    }

    /// Length of the longest column
    pub fn depth(&self) -> usize {
        self.columns.iter().map(|(_, hits)| hits.len()).max().unwrap_or(0)
    }

    /// Cells of row `index`; columns shorter than the row are `None`
    pub fn row(&self, index: usize) -> Vec<Option<&str>> {
        self.columns
            .iter()
            .map(|(_, hits)| hits.get(index).map(String::as_str))
            .collect()
    }
}
