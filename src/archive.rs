//! Zip packaging.
//!
//! Stage 3 of the build. Each package directory is archived next to itself:
//!
//! ```text
//! dist/
//! ├── Sheet-Ocean-Dark/
//! └── Sheet-Ocean-Dark.zip     # single top-level entry: Sheet-Ocean-Dark/
//! ```
//!
//! Entry names are relative to the output root, so unpacking the archive in a
//! themes directory yields exactly one theme. Entries are written in sorted
//! order and carry no timestamps beyond the zip epoch default, so rebuilding
//! unchanged sources produces byte-identical archives.
//!
//! Symlinks are stored as symlink entries rather than followed. A linked
//! `gtk-4.0` therefore stays a link after extraction instead of doubling the
//! archive size.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, DateTime, ZipWriter};

#[derive(Error, Debug)]
pub enum ArchiveError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Zip error: {0}")]
    Zip(#[from] zip::result::ZipError),
    #[error("Walk error: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("Package directory not found: {0}")]
    MissingPackage(PathBuf),
}

/// Archive `<output_root>/<package_name>` into `<output_root>/<package_name>.zip`.
///
/// Returns the archive path. An existing archive is overwritten.
pub fn zip_package(output_root: &Path, package_name: &str) -> Result<PathBuf, ArchiveError> {
    let package_root = output_root.join(package_name);
    if !package_root.is_dir() {
        return Err(ArchiveError::MissingPackage(package_root));
    }

    let archive_path = output_root.join(format!("{package_name}.zip"));
    let mut zip = ZipWriter::new(fs::File::create(&archive_path)?);

    let walker = WalkDir::new(&package_root)
        .follow_links(false)
        .sort_by_file_name();
    for entry in walker {
        let entry = entry?;
        let name = entry_name(output_root, entry.path());
        let file_type = entry.file_type();

        if file_type.is_symlink() {
            let target = fs::read_link(entry.path())?;
            zip.add_symlink(name, zip_path(&target), base_options())?;
        } else if file_type.is_dir() {
            zip.add_directory(format!("{name}/"), dir_options())?;
        } else {
            zip.start_file(name, file_options(&entry.metadata()?))?;
            let mut file = fs::File::open(entry.path())?;
            io::copy(&mut file, &mut zip)?;
        }
    }

    zip.finish()?;
    Ok(archive_path)
}

/// Archive entry name: path relative to the output root with `/` separators.
fn entry_name(output_root: &Path, path: &Path) -> String {
    zip_path(path.strip_prefix(output_root).unwrap_or(path))
}

fn zip_path(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

/// Fixed timestamp on every entry; keeps archives reproducible.
fn base_options() -> SimpleFileOptions {
    SimpleFileOptions::default().last_modified_time(DateTime::default())
}

fn dir_options() -> SimpleFileOptions {
    base_options().unix_permissions(0o755)
}

#[cfg(unix)]
fn file_options(metadata: &fs::Metadata) -> SimpleFileOptions {
    use std::os::unix::fs::PermissionsExt;

    base_options()
        .compression_method(CompressionMethod::Deflated)
        .unix_permissions(metadata.permissions().mode() & 0o7777)
}

#[cfg(not(unix))]
fn file_options(_metadata: &fs::Metadata) -> SimpleFileOptions {
    base_options()
        .compression_method(CompressionMethod::Deflated)
        .unix_permissions(0o644)
}
