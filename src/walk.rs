use std::io;
use std::path::{Path, PathBuf};

use globset::{Glob, GlobSet, GlobSetBuilder};
use ignore::WalkBuilder;

/// Decides which files found while walking a directory are compared.
pub struct SourceFilter {
    extensions: Vec<String>,
    excludes: GlobSet,
}

impl SourceFilter {
    /// Build a filter from an extension allowlist (case-insensitive, no dot)
    /// and glob patterns matched against paths relative to the walk root.
    pub fn new(extensions: &[String], exclude: &[String]) -> Result<Self, globset::Error> {
        let mut builder = GlobSetBuilder::new();
        for pattern in exclude {
            builder.add(Glob::new(pattern)?);
        }
        Ok(Self {
            extensions: extensions.iter().map(|e| e.to_lowercase()).collect(),
            excludes: builder.build()?,
        })
    }

    pub fn accepts(&self, path: &Path, root: &Path) -> bool {
        let ext_ok = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| self.extensions.iter().any(|x| x.eq_ignore_ascii_case(e)));
        if !ext_ok {
            return false;
        }
        let relative = path.strip_prefix(root).unwrap_or(path);
        !self.excludes.is_match(relative)
    }
}

/// Build a directory walker that respects `.gitignore` and skips `.git`.
pub fn walk(path: &Path) -> ignore::Walk {
    WalkBuilder::new(path)
        .hidden(false)
        .follow_links(false)
        .filter_entry(|entry| {
            !(entry.file_type().is_some_and(|ft| ft.is_dir()) && entry.file_name() == ".git")
        })
        .build()
}

/// Expand command-line paths into the list of files to compare.
///
/// Files named explicitly are always kept; directories are walked and
/// filtered. Directory results are sorted, explicit files keep their order.
/// A path that does not exist is an error.
pub fn collect_sources(paths: &[PathBuf], filter: &SourceFilter) -> io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for path in paths {
        if path.is_file() {
            files.push(path.clone());
            continue;
        }
        if !path.is_dir() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("path does not exist: {}", path.display()),
            ));
        }

        let mut found: Vec<PathBuf> = Vec::new();
        for entry in walk(path) {
            let entry = match entry {
                Ok(e) => e,
                Err(err) => {
                    log::warn!("{err}");
                    continue;
                }
            };
            if entry.file_type().is_some_and(|ft| ft.is_file()) && filter.accepts(entry.path(), path)
            {
                found.push(entry.into_path());
            }
        }
        found.sort();
        log::debug!("{}: {} source files", path.display(), found.len());
        files.extend(found);
    }
    Ok(files)
}

#[cfg(test)]
#[path = "walk_test.rs"]
mod tests;
