pub mod reader;
pub mod writer;

pub use reader::read_alignment_table;
pub use writer::{write_hit_list, write_hit_matrix, write_sample_table};
