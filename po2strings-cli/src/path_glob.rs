use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use globset::{GlobBuilder, GlobSet, GlobSetBuilder};
use ignore::WalkBuilder;
use rayon::prelude::*;

fn has_glob_meta(s: &str) -> bool {
    s.bytes().any(|b| matches!(b, b'*' | b'?' | b'[' | b'{'))
}

/// Directory to walk for a pattern: everything before the first glob meta-character.
fn walk_root(pattern: &str) -> PathBuf {
    let end = pattern
        .find(['*', '?', '[', '{'])
        .unwrap_or(pattern.len());
    let prefix = Path::new(&pattern[..end]);
    if prefix.is_dir() {
        prefix.to_path_buf()
    } else {
        match prefix.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }
}

fn build_glob_set(patterns: &[&String]) -> Result<GlobSet, String> {
    let mut builder = GlobSetBuilder::new();
    for pat in patterns {
        let glob = GlobBuilder::new(pat)
            .literal_separator(true)
            .build()
            .map_err(|e| format!("Invalid glob pattern '{}': {}", pat, e))?;
        builder.add(glob);
    }
    builder
        .build()
        .map_err(|e| format!("Failed to build glob set: {}", e))
}

/// Expands catalog arguments into file paths, sorted and without duplicates.
///
/// Plain paths are kept as given so a missing file is reported by the caller.
/// Patterns are matched with globset while walking their static prefix
/// directories in parallel; `.gitignore` rules are honored.
pub fn expand_catalog_globs(inputs: &[String]) -> Result<Vec<String>, String> {
    let (patterns, literals): (Vec<&String>, Vec<&String>) =
        inputs.iter().partition(|s| has_glob_meta(s));

    let mut results: BTreeSet<String> = literals.into_iter().cloned().collect();
    if patterns.is_empty() {
        return Ok(results.into_iter().collect());
    }

    let set = build_glob_set(&patterns)?;
    let roots: BTreeSet<PathBuf> = patterns.iter().map(|p| walk_root(p)).collect();

    let matched: Vec<String> = roots
        .par_iter()
        .map(|root| {
            let mut out = Vec::new();
            let walker = WalkBuilder::new(root)
                .git_ignore(true)
                .git_exclude(true)
                .hidden(false)
                .build();
            for dent in walker.flatten() {
                if !dent.file_type().is_some_and(|t| t.is_file()) {
                    continue;
                }
                // Walking "." yields "./x"; match against the path as the user would write it.
                let path = dent.path().strip_prefix(".").unwrap_or(dent.path());
                if set.is_match(path) || set.is_match(dent.path()) {
                    out.push(dent.path().to_string_lossy().to_string());
                }
            }
            out
        })
        .flatten()
        .collect();

    if matched.is_empty() {
        let joined: Vec<&str> = patterns.iter().map(|p| p.as_str()).collect();
        log::warn!("No files matched {}", joined.join(", "));
    }
    results.extend(matched);
    Ok(results.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_walk_root() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        std::fs::create_dir_all(root.join("po")).unwrap();
        std::fs::create_dir_all(root.join("locale").join("fr")).unwrap();

        assert_eq!(walk_root("*.po"), PathBuf::from("."));
        assert_eq!(
            walk_root(&format!("{}/po/*.po", root.display())),
            root.join("po")
        );
        assert_eq!(
            walk_root(&format!("{}/locale/**/messages.po", root.display())),
            root.join("locale")
        );
        // A missing directory falls back to its nearest named parent.
        assert_eq!(walk_root(&format!("{}/missing/*.po", root.display())), root);
    }

    #[test]
    fn test_literal_paths_pass_through() {
        let inputs = vec!["b.po".to_string(), "a.po".to_string(), "a.po".to_string()];
        assert_eq!(
            expand_catalog_globs(&inputs).unwrap(),
            vec!["a.po".to_string(), "b.po".to_string()]
        );
    }

    #[test]
    fn test_expands_patterns() {
        let temp_dir = TempDir::new().unwrap();
        let po_dir = temp_dir.path().join("po");
        std::fs::create_dir_all(&po_dir).unwrap();
        for name in ["fr.po", "de.po", "README.md"] {
            std::fs::write(po_dir.join(name), "").unwrap();
        }

        let pattern = format!("{}/*.po", po_dir.display());
        let files = expand_catalog_globs(&[pattern]).unwrap();
        assert_eq!(files.len(), 2);
        assert!(files[0].ends_with("de.po"));
        assert!(files[1].ends_with("fr.po"));
    }

    #[test]
    fn test_invalid_pattern() {
        let err = expand_catalog_globs(&["po/[.po".to_string()]).unwrap_err();
        assert!(err.contains("Invalid glob pattern"));
    }
}
