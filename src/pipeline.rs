use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use anyhow::{Result, Context};
use glob::{glob, Pattern};
use log::{debug, info, warn};

use crate::alignment::{sample_name, sample_output_path};
use crate::error::CollateError;
use crate::hits::{Collation, SampleHits};
use crate::io::{read_alignment_table, write_hit_list, write_hit_matrix, write_sample_table};

/// Inputs and outputs of one collation run
#[derive(Debug, Clone)]
pub struct CollateConfig {
    /// Glob pattern selecting the BLAST tables
    pub input_pattern: String,
    /// Hit count matrix csv
    pub hits_path: PathBuf,
    /// Hit list csv
    pub list_path: PathBuf,
    /// Directory receiving one titled csv per input file
    pub out_dir: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub files: usize,
    pub samples: usize,
    pub subjects: usize,
}

/// Create the per-sample output directory. An existing directory is fatal.
pub fn create_output_dir(path: &Path) -> Result<()> {
    match fs::create_dir(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            Err(CollateError::OutputDirExists(path.to_owned()).into())
        }
        Err(e) => Err(e).with_context(|| format!("Failed to create directory: {}", path.display())),
    }
}

/// Expand `pattern` under `root`. Returned paths are relative to `root`
/// unless the pattern itself is absolute.
pub fn discover_inputs(root: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
    let anchored = if Path::new(pattern).is_absolute() {
        pattern.to_string()
    } else {
        let root_str = root
            .to_str()
            .with_context(|| format!("Working directory is not valid UTF-8: {}", root.display()))?;
        format!("{}/{}", Pattern::escape(root_str), pattern)
    };

    // glob's own literal-leading-dot option panics on non UTF-8 siblings,
    // so hidden files are dropped here instead
    let hidden_allowed = Path::new(pattern)
        .file_name()
        .map_or(false, |name| name.to_string_lossy().starts_with('.'));

    let mut files = Vec::new();
    for entry in glob(&anchored).with_context(|| format!("Invalid input pattern: {}", pattern))? {
        let path = entry.context("Failed to read matched path")?;
        let hidden = path
            .file_name()
            .map_or(false, |name| name.to_string_lossy().starts_with('.'));
        if hidden && !hidden_allowed {
            continue;
        }
        let name = match path.strip_prefix(root) {
            Ok(relative) => relative.to_path_buf(),
            Err(_) => path.clone(),
        };
        files.push(name);
    }
    Ok(files)
}

/// Runs the whole collation against files found under `root`
pub struct Collator {
    root: PathBuf,
    config: CollateConfig,
}

impl Collator {
    pub fn new<P: AsRef<Path>>(root: P, config: CollateConfig) -> Self {
        Collator {
            root: root.as_ref().to_owned(),
            config,
        }
    }

    pub fn run(&self) -> Result<RunSummary> {
        let out_dir = self.root.join(&self.config.out_dir);
        create_output_dir(&out_dir)?;

        let files = discover_inputs(&self.root, &self.config.input_pattern)?;
        if files.is_empty() {
            warn!("No files match {}", self.config.input_pattern);
        } else {
            info!("Found {} files matching {}", files.len(), self.config.input_pattern);
        }

        let mut collation = Collation::new();
        for (idx, path) in files.iter().enumerate() {
            let file = path
                .to_str()
                .with_context(|| format!("File name is not valid UTF-8: {}", path.display()))?;
            let name = sample_name(file);
            info!("Processing file {}/{}: {} (sample {})", idx + 1, files.len(), file, name);

            let records = read_alignment_table(&self.root.join(path))?;

            let output = sample_output_path(&out_dir, file);
            debug!("Writing {} to {}", file, output.display());
            write_sample_table(&output, &records)?;

            collation.add(SampleHits::from_records(name, &records));
        }

        let matrix = collation.hit_matrix();
        write_hit_matrix(&self.root.join(&self.config.hits_path), &matrix)?;
        write_hit_list(&self.root.join(&self.config.list_path), &collation.hit_list())?;

        Ok(RunSummary {
            files: files.len(),
            samples: collation.len(),
            subjects: matrix.subject_count(),
        })
    }
}
