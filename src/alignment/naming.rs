use std::path::{Path, PathBuf};

/// Characters cut from a file name to get its sample name (`_blast.txt`)
pub const SAMPLE_SUFFIX_LEN: usize = 10;

/// Characters cut from a file name before `.csv` is appended (`.txt`)
pub const EXTENSION_LEN: usize = 4;

/// Drop the last `n` characters of `s`. Shorter strings become empty.
pub fn truncate_chars(s: &str, n: usize) -> &str {
    let keep = s.chars().count().saturating_sub(n);
    match s.char_indices().nth(keep) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

/// Sample name for an input file. The cut is positional: names that do not
/// end in a 10 character suffix come out mangled.
pub fn sample_name(file: &str) -> String {
    truncate_chars(file, SAMPLE_SUFFIX_LEN).to_string()
}

/// Where the titled copy of `file` is written inside `out_dir`.
///
/// Built by concatenation rather than `Path::join`, so an absolute `file`
/// still lands under `out_dir` instead of replacing it.
pub fn sample_output_path(out_dir: &Path, file: &str) -> PathBuf {
    let mut path = out_dir.as_os_str().to_owned();
    path.push("/");
    path.push(truncate_chars(file, EXTENSION_LEN));
    path.push(".csv");
    PathBuf::from(path)
}
