use clap::Parser;
use std::path::PathBuf;

use crate::pipeline::CollateConfig;

const ABOUT: &str = "Combines multiple csv BLAST outputs into a hits csv and a list csv. \
Also writes an individual csv for each sample with proper column titles. \
Run it from the directory holding the BLAST outputs.";

#[derive(Parser, Debug)]
#[command(author, version, about = ABOUT)]
pub struct Cli {
    /// Input file(s). For multiple, quote a pattern such as "*.txt"
    #[arg(short = 'i', default_value = "*.txt")]
    pub input: String,

    /// Hits csv name
    #[arg(short = 'n', default_value = "ARG_hits.csv")]
    pub hits: PathBuf,

    /// List csv name
    #[arg(short = 'l', default_value = "ARG_list.csv")]
    pub list: PathBuf,

    /// Out directory for sample csvs
    #[arg(short = 'o', default_value = "ARG_hits_data")]
    pub out_dir: PathBuf,
}

impl From<Cli> for CollateConfig {
    fn from(cli: Cli) -> Self {
        CollateConfig {
            input_pattern: cli.input,
            hits_path: cli.hits,
            list_path: cli.list,
            out_dir: cli.out_dir,
        }
    }
}
