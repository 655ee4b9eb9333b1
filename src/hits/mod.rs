pub(crate) mod types;
pub(crate) mod matrix;
pub(crate) mod list;

pub use types::{Collation, SampleHits};
pub use matrix::HitMatrix;
pub use list::HitList;
