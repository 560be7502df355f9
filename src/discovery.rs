// src/discovery.rs
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::config::{Config, PRUNE_DIRS};
use crate::error::Result;
use crate::lang::Lang;

/// Collects the files to analyze. Directories are walked recursively with
/// the usual build/dependency directories pruned; explicit file arguments
/// bypass the extension filter.
///
/// # Errors
/// Currently infallible; the signature leaves room for pattern compilation.
pub fn discover(roots: &[PathBuf], config: &Config) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for root in roots {
        if root.is_file() {
            files.push(root.clone());
        } else {
            walk_directory(root, config, &mut files);
        }
    }

    files.sort();
    files.dedup();
    Ok(files)
}

fn walk_directory(root: &Path, config: &Config, out: &mut Vec<PathBuf>) {
    let walker = WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_entry(|e| !should_prune(&e.file_name().to_string_lossy()));

    let mut errors = 0usize;
    for item in walker {
        match item {
            Ok(entry) => {
                if entry.file_type().is_file() && is_candidate(entry.path(), config) {
                    out.push(entry.path().to_path_buf());
                }
            }
            Err(_) => errors += 1,
        }
    }

    if errors > 0 && config.verbose {
        eprintln!("WARN: Encountered {errors} errors during file walk");
    }
}

fn should_prune(name: &str) -> bool {
    PRUNE_DIRS.contains(&name)
}

fn is_candidate(path: &Path, config: &Config) -> bool {
    let has_lang = path
        .extension()
        .and_then(|s| s.to_str())
        .and_then(Lang::from_ext)
        .is_some();
    if !has_lang {
        return false;
    }

    let normalized = normalize_path(path);
    !config.ignore_patterns.iter().any(|re| re.is_match(&normalized))
}

/// Normalizes a path to use forward slashes (cross-platform pattern matching).
fn normalize_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}
