//! Shared test utilities for the sheet-themes test suite.
//!
//! Provides an isolated copy of the fixture project, stylesheet lookups, and
//! directory/archive snapshots for comparing trees.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = setup_fixtures();
//! let inventory = scan(tmp.path(), &SheetConfig::default()).unwrap();
//! let ocean = find_stylesheet(&inventory.accents, "Ocean");
//! assert_eq!(ocean.file_name, "ocean.css");
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use walkdir::WalkDir;

use crate::naming;
use crate::types::Stylesheet;

// =========================================================================
// Fixture setup
// =========================================================================

/// Copy `fixtures/project/` to a temp directory and return it.
///
/// Tests get an isolated copy they can mutate without affecting other tests
/// or the source fixtures.
pub fn setup_fixtures() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/project");
    crate::copy::copy_dir_recursive(&fixtures, tmp.path()).unwrap();
    tmp
}

/// Build a `Stylesheet` for a bare filename without touching the disk.
pub fn stylesheet(file_name: &str) -> Stylesheet {
    let path = PathBuf::from(file_name);
    Stylesheet {
        display_name: naming::display_name(&path),
        file_name: file_name.to_string(),
        path,
    }
}

// =========================================================================
// Lookups — panic with a clear message on miss
// =========================================================================

/// Find a stylesheet by display name. Panics if not found.
pub fn find_stylesheet<'a>(sheets: &'a [Stylesheet], display_name: &str) -> &'a Stylesheet {
    sheets
        .iter()
        .find(|s| s.display_name == display_name)
        .unwrap_or_else(|| {
            let names = display_names(sheets);
            panic!("stylesheet '{display_name}' not found. Available: {names:?}")
        })
}

/// All display names in discovery order.
pub fn display_names(sheets: &[Stylesheet]) -> Vec<&str> {
    sheets.iter().map(|s| s.display_name.as_str()).collect()
}

// =========================================================================
// Tree snapshots
// =========================================================================

/// Sorted entry names directly inside `dir`.
pub fn dir_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

/// Every path below `root` (symlinks followed) mapped to its contents.
/// Directories map to `None`.
pub fn tree_snapshot(root: &Path) -> BTreeMap<String, Option<Vec<u8>>> {
    WalkDir::new(root)
        .min_depth(1)
        .follow_links(true)
        .into_iter()
        .map(|e| {
            let entry = e.unwrap();
            let rel = entry
                .path()
                .strip_prefix(root)
                .unwrap()
                .to_string_lossy()
                .replace('\\', "/");
            let content = entry
                .file_type()
                .is_file()
                .then(|| fs::read(entry.path()).unwrap());
            (rel, content)
        })
        .collect()
}

/// Entry names of a zip archive, in archive order.
pub fn zip_entry_names(archive: &Path) -> Vec<String> {
    let mut zip = zip::ZipArchive::new(fs::File::open(archive).unwrap()).unwrap();
    (0..zip.len())
        .map(|i| zip.by_index(i).unwrap().name().to_string())
        .collect()
}
