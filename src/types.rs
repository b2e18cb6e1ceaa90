//! Shared types passed between discovery, assembly and packaging.
//!
//! Everything here describes a filesystem artifact. Nothing is persisted
//! beyond the run that produced it.

use std::path::PathBuf;

/// A CSS fragment found in the accent or scheme directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stylesheet {
    /// Full path to the source file
    pub path: PathBuf,
    /// Literal filename including extension (`ocean.css`)
    pub file_name: String,
    /// Capitalized stem used in package names (`Ocean`)
    pub display_name: String,
}

/// How the `gtk-4.0` directory of a package came to exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompatLayout {
    /// Relative symlink pointing at `gtk-3.0`
    Symlink,
    /// Full recursive copy of `gtk-3.0`
    Copied,
    /// Something was already there; left untouched
    Existing,
}

/// An assembled theme package directory.
#[derive(Debug, Clone)]
pub struct ThemePackage {
    /// Directory name, e.g. `Sheet-Ocean-Dark`
    pub name: String,
    /// `<output>/<name>`
    pub root: PathBuf,
    pub compat: CompatLayout,
}

/// A package together with the archive built from it.
#[derive(Debug, Clone)]
pub struct BuiltTheme {
    pub package: ThemePackage,
    pub archive: PathBuf,
}
