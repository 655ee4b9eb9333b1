use serde::Deserialize;

/// Column titles imposed on every headerless BLAST tabular file
pub const ALIGNMENT_COLUMNS: [&str; 12] = [
    "query_acc.ver",
    "subject_acc.ver",
    "%_identity",
    "alignment_length",
    "mismatches",
    "gap_opens",
    "q._start",
    "q._end",
    "s._start",
    "s._end",
    "evalue",
    "bit_score",
];

/// Title of the subject accession column, also the index label of the hit matrix
pub const SUBJECT_COLUMN: &str = ALIGNMENT_COLUMNS[1];

/// One BLAST hit (outfmt 6/10 field order).
///
/// Fields are kept as the text found in the input so the per-sample copy
/// reproduces every value unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AlignmentRecord {
    pub query_accession: String,
    pub subject_accession: String,
    pub percent_identity: String,
    pub alignment_length: String,
    pub mismatches: String,
    pub gap_opens: String,
    pub query_start: String,
    pub query_end: String,
    pub subject_start: String,
    pub subject_end: String,
    pub evalue: String,
    pub bit_score: String,
}

impl AlignmentRecord {
    /// Field values in column order
    pub fn fields(&self) -> [&str; 12] {
        [
            &self.query_accession,
            &self.subject_accession,
            &self.percent_identity,
            &self.alignment_length,
            &self.mismatches,
            &self.gap_opens,
            &self.query_start,
            &self.query_end,
            &self.subject_start,
            &self.subject_end,
            &self.evalue,
            &self.bit_score,
        ]
    }
}
