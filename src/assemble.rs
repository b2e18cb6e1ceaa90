//! Theme package assembly.
//!
//! Stage 2 of the build. Materializes one self-contained package directory
//! for an (accent, scheme) pair:
//!
//! ```text
//! dist/Sheet-Ocean-Dark/
//! ├── index.theme                  # copied from the project root, if present
//! ├── gtk-3.0/
//! │   ├── widgets.css              # static assets
//! │   ├── gtk.css                  # generated aggregator
//! │   ├── accent/ocean.css
//! │   └── scheme/dark.css
//! └── gtk-4.0 -> gtk-3.0           # symlink, or a full copy when links fail
//! ```
//!
//! GTK 3 and GTK 4 look for their stylesheets in `gtk-3.0/` and `gtk-4.0/`
//! respectively; both read the same CSS here, so the second directory is an
//! alias of the first.
//!
//! ## Compatibility Alias
//!
//! [`ensure_compat_dir`] is an explicit two-branch operation: try a relative
//! directory symlink, and on any failure copy `gtk-3.0` instead. Link
//! failure is expected on some filesystems and platforms and is never
//! reported. [`CompatMode::Copy`] skips the link attempt entirely.

use crate::config::{CompatMode, SheetConfig, WIDGETS_CSS};
use crate::copy;
use crate::naming;
use crate::types::{CompatLayout, Stylesheet, ThemePackage};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Theme-engine v3 directory inside a package.
pub const PRIMARY_DIR: &str = "gtk-3.0";
/// Theme-engine v4 directory, an alias of [`PRIMARY_DIR`].
pub const COMPAT_DIR: &str = "gtk-4.0";
/// Generated stylesheet that imports everything else.
pub const AGGREGATOR_FILE: &str = "gtk.css";
pub const ACCENT_SUBDIR: &str = "accent";
pub const SCHEME_SUBDIR: &str = "scheme";

#[derive(Error, Debug)]
pub enum AssembleError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Static asset not found: {0}")]
    MissingStaticFile(PathBuf),
    #[error("Failed to copy {from} to {to}: {source}")]
    Copy {
        from: PathBuf,
        to: PathBuf,
        source: io::Error,
    },
}

/// Content of the aggregator stylesheet for one pairing.
///
/// Theme engines parse this as CSS, so the exact bytes matter: three
/// `@import` lines in fixed order, each newline-terminated.
pub fn aggregator_css(accent: &Stylesheet, scheme: &Stylesheet) -> String {
    format!(
        "@import url(\"{WIDGETS_CSS}\");\n\
         @import url(\"{ACCENT_SUBDIR}/{accent}\");\n\
         @import url(\"{SCHEME_SUBDIR}/{scheme}\");\n",
        accent = accent.file_name,
        scheme = scheme.file_name,
    )
}

/// Assemble the package for one (accent, scheme) pair under `output_root`.
///
/// Every step is idempotent within a run: existing directories are reused
/// and copied or generated files are overwritten.
pub fn assemble_theme(
    root: &Path,
    config: &SheetConfig,
    output_root: &Path,
    accent: &Stylesheet,
    scheme: &Stylesheet,
) -> Result<ThemePackage, AssembleError> {
    let name = naming::package_name(
        &config.theme_prefix,
        &accent.display_name,
        &scheme.display_name,
    );
    let package_root = output_root.join(&name);
    let primary = package_root.join(PRIMARY_DIR);
    fs::create_dir_all(&primary)?;

    let theme_dir = root.join(&config.sources.theme_dir);
    for file_name in &config.sources.static_files {
        let src = theme_dir.join(file_name);
        if !src.is_file() {
            return Err(AssembleError::MissingStaticFile(src));
        }
        copy_into(&src, &primary.join(file_name))?;
    }

    let accent_dir = primary.join(ACCENT_SUBDIR);
    let scheme_dir = primary.join(SCHEME_SUBDIR);
    fs::create_dir_all(&accent_dir)?;
    fs::create_dir_all(&scheme_dir)?;
    copy_into(&accent.path, &accent_dir.join(&accent.file_name))?;
    copy_into(&scheme.path, &scheme_dir.join(&scheme.file_name))?;

    fs::write(primary.join(AGGREGATOR_FILE), aggregator_css(accent, scheme))?;

    let compat = ensure_compat_dir(&package_root, config.compat_mode)?;

    copy_root_files(root, &config.sources.root_files, &package_root)?;

    Ok(ThemePackage {
        name,
        root: package_root,
        compat,
    })
}

fn copy_into(src: &Path, dst: &Path) -> Result<(), AssembleError> {
    copy::copy_file(src, dst).map_err(|source| AssembleError::Copy {
        from: src.to_path_buf(),
        to: dst.to_path_buf(),
        source,
    })
}

/// Create `gtk-4.0` inside a package unless something is already there.
///
/// Returns which branch produced it. Only the copy fallback can fail.
pub fn ensure_compat_dir(package_root: &Path, mode: CompatMode) -> io::Result<CompatLayout> {
    let compat = package_root.join(COMPAT_DIR);
    // symlink_metadata so a dangling link still counts as present
    if fs::symlink_metadata(&compat).is_ok() {
        return Ok(CompatLayout::Existing);
    }

    if mode == CompatMode::Auto && link_dir(Path::new(PRIMARY_DIR), &compat).is_ok() {
        return Ok(CompatLayout::Symlink);
    }

    copy::copy_dir_recursive(&package_root.join(PRIMARY_DIR), &compat)?;
    Ok(CompatLayout::Copied)
}

#[cfg(unix)]
fn link_dir(target: &Path, link: &Path) -> io::Result<()> {
    std::os::unix::fs::symlink(target, link)
}

#[cfg(windows)]
fn link_dir(target: &Path, link: &Path) -> io::Result<()> {
    std::os::windows::fs::symlink_dir(target, link)
}

#[cfg(not(any(unix, windows)))]
fn link_dir(_target: &Path, _link: &Path) -> io::Result<()> {
    Err(io::Error::new(
        io::ErrorKind::Unsupported,
        "symbolic links are not supported on this platform",
    ))
}

/// Copy the top-level metadata files that exist; skip the rest.
fn copy_root_files(
    root: &Path,
    root_files: &[String],
    package_root: &Path,
) -> Result<(), AssembleError> {
    for file_name in root_files {
        let src = root.join(file_name);
        if src.is_file() {
            copy_into(&src, &package_root.join(file_name))?;
        }
    }
    Ok(())
}
