//! File discovery for lint targets.

use std::path::{Component, Path, PathBuf};

use globset::{Glob, GlobSet, GlobSetBuilder};
use tracing::{debug, info};
use walkdir::WalkDir;

use crate::error::LinterError;

/// Resolves command-line patterns to the list of files to lint.
///
/// A pattern is an existing file (taken as-is), an existing directory
/// (walked for files with a known extension) or a glob matched under the
/// base directory. Include and exclude globs from the config filter every
/// discovered path relative to the base directory; exclude wins.
pub struct FileFinder {
    include_globs: Option<GlobSet>,
    exclude_globs: Option<GlobSet>,
    extensions: Vec<String>,
}

impl FileFinder {
    pub fn new(
        include: &[String],
        exclude: &[String],
        extensions: &[&str],
    ) -> Result<Self, LinterError> {
        Ok(Self {
            include_globs: Self::build_globset(include)?,
            exclude_globs: Self::build_globset(exclude)?,
            extensions: extensions.iter().map(|ext| ext.to_string()).collect(),
        })
    }

    fn build_globset(patterns: &[String]) -> Result<Option<GlobSet>, LinterError> {
        if patterns.is_empty() {
            return Ok(None);
        }

        let mut builder = GlobSetBuilder::new();
        for pattern in patterns {
            let glob = Glob::new(pattern)
                .map_err(|e| LinterError::config(format!("Invalid glob pattern: {}", e)))?;
            builder.add(glob);
        }

        let globset = builder
            .build()
            .map_err(|e| LinterError::config(format!("Failed to build globset: {}", e)))?;

        Ok(Some(globset))
    }

    /// Checks if a file path should be ignored based on include/exclude patterns.
    pub fn should_ignore(&self, path: &Path) -> bool {
        if self
            .exclude_globs
            .as_ref()
            .is_some_and(|excludes| excludes.is_match(path))
        {
            return true;
        }

        self.include_globs
            .as_ref()
            .is_some_and(|includes| !includes.is_match(path))
    }

    fn has_known_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)))
    }

    pub fn discover_files(
        &self,
        patterns: &[String],
        base_dir: &Path,
    ) -> Result<Vec<PathBuf>, LinterError> {
        let mut files = Vec::new();

        let mut glob_builder = GlobSetBuilder::new();
        let mut has_globs = false;

        for pattern in patterns {
            let path = Path::new(pattern);
            if path.is_file() {
                if !self.should_ignore(&relative_to_base(path, base_dir)) {
                    files.push(path.to_path_buf());
                } else {
                    debug!("Excluded {}", path.display());
                }
            } else if path.is_dir() {
                self.walk_dir(path, |candidate| self.has_known_extension(candidate), &mut files);
            } else {
                let glob = Glob::new(pattern).map_err(|e| {
                    LinterError::config(format!("Invalid pattern '{}': {}", pattern, e))
                })?;
                glob_builder.add(glob);
                has_globs = true;
            }
        }

        if has_globs {
            let glob_set = glob_builder
                .build()
                .map_err(|e| LinterError::config(format!("Failed to build globset: {}", e)))?;

            self.walk_dir(
                base_dir,
                |candidate| glob_set.is_match(candidate),
                &mut files,
            );
        }

        files.sort();
        files.dedup();

        info!("Discovered {} files to lint", files.len());
        Ok(files)
    }

    /// Walks `root`, pushing files accepted by `accept` and not ignored.
    ///
    /// Both checks see the path relative to `root`.
    fn walk_dir<F>(&self, root: &Path, accept: F, files: &mut Vec<PathBuf>)
    where
        F: Fn(&Path) -> bool,
    {
        for entry in WalkDir::new(root).into_iter().filter_map(|e| e.ok()) {
            if !entry.file_type().is_file() {
                continue;
            }
            let path = entry.path();
            let relative = path.strip_prefix(root).unwrap_or(path);
            if accept(relative) && !self.should_ignore(relative) {
                debug!("Found {}", path.display());
                files.push(path.to_path_buf());
            }
        }
    }
}

/// Returns `path` relative to `base_dir` without leading `./` components.
///
/// Paths outside `base_dir` are returned unchanged apart from the `./` prefix.
fn relative_to_base(path: &Path, base_dir: &Path) -> PathBuf {
    let relative = match path.strip_prefix(base_dir) {
        Ok(relative) => relative.to_path_buf(),
        Err(_) => match (path.canonicalize(), base_dir.canonicalize()) {
            (Ok(path_abs), Ok(base_abs)) => path_abs
                .strip_prefix(&base_abs)
                .map_or_else(|_| path.to_path_buf(), Path::to_path_buf),
            _ => path.to_path_buf(),
        },
    };

    relative
        .components()
        .skip_while(|component| matches!(component, Component::CurDir))
        .collect()
}
