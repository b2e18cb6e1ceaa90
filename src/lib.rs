//! # Sheet Themes
//!
//! Builds every variant of the Sheet GTK theme. The theme is split into small
//! CSS fragments: *accents* (highlight colors) and *schemes* (base palettes).
//! Every accent is combined with every scheme into a self-contained theme
//! package, and each package is zipped for distribution.
//!
//! # Architecture: Three Stages, One Pass
//!
//! ```text
//! 1. Scan      gtk-3.0/{accent,scheme}/*.css  →  Inventory
//! 2. Assemble  (accent, scheme)               →  dist/Sheet-<Accent>-<Scheme>/
//! 3. Archive   package directory              →  dist/Sheet-<Accent>-<Scheme>.zip
//! ```
//!
//! [`pipeline::build`] drives the stages sequentially: it wipes the output
//! root, scans once, then assembles and archives each pair in turn. There is
//! no incremental mode; every build starts from an empty output root.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Stage 1: discovers accent and scheme stylesheets, validates inputs |
//! | [`assemble`] | Stage 2: lays out a package, writes `gtk.css`, aliases `gtk-4.0` |
//! | [`archive`] | Stage 3: zips a package directory beside itself |
//! | [`pipeline`] | Orchestration and progress events |
//! | [`config`] | Optional `sheet.toml` loading, merging and validation |
//! | [`naming`] | Display names (`ocean.css` → "Ocean") and package names |
//! | [`copy`] | Metadata-preserving file and directory copies |
//! | [`types`] | Shared types (`Stylesheet`, `ThemePackage`) |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## The Filesystem Is the Model
//!
//! There is no in-memory theme representation beyond the list of discovered
//! files. Each stage reads and writes directories directly, and tests run
//! against temporary copies of a fixture project rather than a mocked
//! filesystem.
//!
//! ## `gtk-4.0` as an Alias
//!
//! GTK 4 reads the same CSS as GTK 3 for this theme, so `gtk-4.0` is a
//! relative symlink to `gtk-3.0`. Where links cannot be created, a copy is
//! made instead; either way the two directories hold the same files.
//!
//! ## Explicit Configuration
//!
//! Source locations, fixed file lists and the output root are values in
//! [`config::SheetConfig`], passed into every stage. The stock defaults match
//! the Sheet repository layout, so no config file is needed.

pub mod archive;
pub mod assemble;
pub mod config;
pub mod copy;
pub mod naming;
pub mod output;
pub mod pipeline;
pub mod scan;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
