use std::path::PathBuf;
use thiserror::Error;

/// Failures that abort a collation run
#[derive(Debug, Error)]
pub enum CollateError {
    #[error("output directory {} already exists", .0.display())]
    OutputDirExists(PathBuf),

    #[error("{}: line {line} has {found} fields, expected 12", .path.display())]
    ColumnCount {
        path: PathBuf,
        line: u64,
        found: usize,
    },

    #[error("{}: no columns to parse", .0.display())]
    EmptyInput(PathBuf),
}
