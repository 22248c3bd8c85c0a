//! Post-processing of the generated documentation search index

use std::fs;
use std::path::Path;

use regex::Regex;

use crate::types::{CrateOpsError, CrateOpsResult};

/// Drop every line matching `placeholder`. Returns the new contents and the
/// number of lines removed.
pub fn strip_placeholder_lines(contents: &str, placeholder: &Regex) -> (String, usize) {
    let mut kept = String::with_capacity(contents.len());
    let mut removed = 0;

    for line in contents.split_inclusive('\n') {
        if placeholder.is_match(line) {
            removed += 1;
        } else {
            kept.push_str(line);
        }
    }

    (kept, removed)
}

/// Strip the placeholder entry from the search index at `path` in place.
///
/// Finding no placeholder means the generated docs are not what we expect, so
/// the file is left untouched and an error is returned.
pub fn strip_placeholder(path: &Path, placeholder: &Regex) -> CrateOpsResult<usize> {
    let contents = fs::read_to_string(path)?;
    let (kept, removed) = strip_placeholder_lines(&contents, placeholder);

    if removed == 0 {
        return Err(CrateOpsError::PlaceholderNotFound(path.to_path_buf()));
    }

    fs::write(path, kept)?;
    Ok(removed)
}
