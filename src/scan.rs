//! Stylesheet discovery.
//!
//! Stage 1 of the build. Finds the accent and scheme fragments that the
//! builder combines pairwise:
//!
//! ```text
//! gtk-3.0/
//! ├── widgets.css          # static asset (not discovered, listed in config)
//! ├── accent/
//! │   ├── forest.css       # accent "Forest"
//! │   └── ocean.css        # accent "Ocean"
//! └── scheme/
//!     └── dark.css         # scheme "Dark"
//! ```
//!
//! Discovery is non-recursive and only picks regular files whose extension
//! matches exactly (`css`, not `CSS`). Hidden files (names starting with `.`,
//! such as the `._ocean.css` resource forks macOS leaves on foreign volumes)
//! are skipped. Results are sorted by path, which keeps
//! progress output stable; nothing downstream depends on the order.
//!
//! ## Validation
//!
//! [`check_inputs`] verifies everything a build needs before any output is
//! touched: both source directories and every static asset must exist.

use crate::config::SheetConfig;
use crate::naming;
use crate::types::Stylesheet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Stylesheet directory not found: {0}")]
    MissingDirectory(PathBuf),
    #[error("Static asset not found: {0}")]
    MissingStaticFile(PathBuf),
}

/// Everything discovered in a project: the two fragment collections.
#[derive(Debug, Clone)]
pub struct Inventory {
    pub accents: Vec<Stylesheet>,
    pub schemes: Vec<Stylesheet>,
}

impl Inventory {
    /// Number of packages a build will produce.
    pub fn pair_count(&self) -> usize {
        self.accents.len() * self.schemes.len()
    }

    /// Package names in build order (accent-major).
    pub fn package_names(&self, prefix: &str) -> Vec<String> {
        self.accents
            .iter()
            .flat_map(|a| {
                self.schemes
                    .iter()
                    .map(move |s| naming::package_name(prefix, &a.display_name, &s.display_name))
            })
            .collect()
    }
}

/// Discover accents and schemes for a project root.
pub fn scan(root: &Path, config: &SheetConfig) -> Result<Inventory, ScanError> {
    let extension = &config.sources.extension;
    let accents = discover_stylesheets(&root.join(&config.sources.accent_dir), extension)?;
    let schemes = discover_stylesheets(&root.join(&config.sources.scheme_dir), extension)?;
    Ok(Inventory { accents, schemes })
}

/// List the stylesheets directly inside `dir`.
pub fn discover_stylesheets(dir: &Path, extension: &str) -> Result<Vec<Stylesheet>, ScanError> {
    if !dir.is_dir() {
        return Err(ScanError::MissingDirectory(dir.to_path_buf()));
    }

    let mut paths = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && !is_hidden(&path) && has_extension(&path, extension) {
            paths.push(path);
        }
    }
    paths.sort();

    Ok(paths.into_iter().map(stylesheet_from_path).collect())
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .is_some_and(|name| name.to_string_lossy().starts_with('.'))
}

fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension().is_some_and(|e| e == extension)
}

fn stylesheet_from_path(path: PathBuf) -> Stylesheet {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let display_name = naming::display_name(&path);
    Stylesheet {
        path,
        file_name,
        display_name,
    }
}

/// Check that every required input exists, without writing anything.
///
/// Returns the inventory a build would use.
pub fn check_inputs(root: &Path, config: &SheetConfig) -> Result<Inventory, ScanError> {
    let inventory = scan(root, config)?;
    let theme_dir = root.join(&config.sources.theme_dir);
    for name in &config.sources.static_files {
        let path = theme_dir.join(name);
        if !path.is_file() {
            return Err(ScanError::MissingStaticFile(path));
        }
    }
    Ok(inventory)
}
