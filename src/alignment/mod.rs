pub(crate) mod types;
pub(crate) mod naming;

pub use types::{AlignmentRecord, ALIGNMENT_COLUMNS, SUBJECT_COLUMN};
pub use naming::{sample_name, sample_output_path};
