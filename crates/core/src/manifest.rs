//! Version stamping for package manifests
//!
//! Only lines tagged with the `#auto` marker comment are touched, e.g.
//!
//! ```toml
//! version = "0.0.1" #auto
//! allegro-sys = { path = "../allegro-sys", version = "=0.0.1" } # not matched
//! ```

use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use regex::{Captures, Regex};

use crate::types::{CrateOpsError, CrateOpsResult};

const VERSION_LINE_PATTERN: &str = r#"version = "(=?).*" #auto"#;

#[allow(clippy::expect_used)]
fn version_line() -> &'static Regex {
    static VERSION_LINE: OnceLock<Regex> = OnceLock::new();
    VERSION_LINE
        .get_or_init(|| Regex::new(VERSION_LINE_PATTERN).expect("version line pattern is valid"))
}

/// Rewrite the marked version in a single line. Returns `None` when the line
/// carries no marker.
pub fn stamp_line(line: &str, version: &str) -> Option<String> {
    let pattern = version_line();
    if !pattern.is_match(line) {
        return None;
    }

    let stamped = pattern.replace_all(line, |caps: &Captures| {
        format!("version = \"{}{}\" #auto", &caps[1], version)
    });
    Some(stamped.into_owned())
}

/// Rewrite every marked line of `contents`, keeping line endings intact.
/// Returns the new contents and the number of lines rewritten.
pub fn stamp_contents(contents: &str, version: &str) -> (String, usize) {
    let mut stamped = String::with_capacity(contents.len());
    let mut count = 0;

    for line in contents.split_inclusive('\n') {
        match stamp_line(line, version) {
            Some(new_line) => {
                stamped.push_str(&new_line);
                count += 1;
            }
            None => stamped.push_str(line),
        }
    }

    (stamped, count)
}

/// Stamp `version` into the manifest at `path` in place
pub fn stamp_manifest(path: &Path, version: &str) -> CrateOpsResult<usize> {
    if !path.is_file() {
        return Err(CrateOpsError::ManifestNotFound(path.to_path_buf()));
    }

    let contents = fs::read_to_string(path)?;
    let (stamped, count) = stamp_contents(&contents, version);
    if count > 0 {
        fs::write(path, stamped)?;
    }

    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const MANIFEST: &str = r#"[package]
name = "allegro_font"
version = "0.0.1" #auto
authors = ["someone"]

[dependencies.allegro]
path = "../allegro"
version = "=0.0.1" #auto

[dependencies.libc]
version = "0.2"
"#;

    #[test]
    fn replaces_plain_version() {
        assert_eq!(
            stamp_line(r#"version = "0.0.1" #auto"#, "1.2.3").as_deref(),
            Some(r#"version = "1.2.3" #auto"#)
        );
    }

    #[test]
    fn keeps_equality_pin() {
        assert_eq!(
            stamp_line("version = \"=0.0.1\" #auto\n", "1.2.3").as_deref(),
            Some("version = \"=1.2.3\" #auto\n")
        );
    }

    #[test]
    fn ignores_unmarked_lines() {
        assert_eq!(stamp_line(r#"version = "0.2""#, "1.2.3"), None);
        assert_eq!(stamp_line(r#"name = "allegro" #auto"#, "1.2.3"), None);
    }

    #[test]
    fn version_with_replacement_syntax_is_inserted_literally() {
        assert_eq!(
            stamp_line(r#"version = "0.1" #auto"#, "$1-${0}").as_deref(),
            Some(r#"version = "$1-${0}" #auto"#)
        );
    }

    #[test]
    fn only_marked_lines_change() {
        let (stamped, count) = stamp_contents(MANIFEST, "0.1.0");
        assert_eq!(count, 2);

        let before: Vec<_> = MANIFEST.lines().collect();
        let after: Vec<_> = stamped.lines().collect();
        assert_eq!(before.len(), after.len());

        for (old, new) in before.iter().zip(&after) {
            if old.ends_with("#auto") {
                assert!(new.contains("0.1.0"), "{} was not stamped", old);
            } else {
                assert_eq!(old, new);
            }
        }
        assert!(stamped.contains(r#"version = "=0.1.0" #auto"#));
        assert!(stamped.contains(r#"version = "0.2""#));
    }

    #[test]
    fn preserves_crlf_line_endings() {
        let (stamped, count) = stamp_contents("a = 1\r\nversion = \"0.1\" #auto\r\n", "0.2");
        assert_eq!(count, 1);
        assert_eq!(stamped, "a = 1\r\nversion = \"0.2\" #auto\r\n");
    }

    #[test]
    fn stamps_file_in_place() {
        let temp_dir = tempdir().expect("tempdir should be created");
        let path = temp_dir.path().join("Cargo.toml");
        assert!(fs::write(&path, MANIFEST).is_ok());

        let count = stamp_manifest(&path, "2.0.0").expect("stamping should succeed");
        assert_eq!(count, 2);

        let contents = fs::read_to_string(&path).expect("manifest should be readable");
        assert!(contents.contains(r#"version = "2.0.0" #auto"#));
        assert!(contents.contains(r#"version = "=2.0.0" #auto"#));
    }

    #[test]
    fn missing_manifest_is_an_error() {
        let temp_dir = tempdir().expect("tempdir should be created");
        let path = temp_dir.path().join("missing/Cargo.toml");

        let result = stamp_manifest(&path, "1.0.0");
        assert!(matches!(result, Err(CrateOpsError::ManifestNotFound(p)) if p == path));
    }
}
