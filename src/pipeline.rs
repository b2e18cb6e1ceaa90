//! Build orchestration.
//!
//! Ties the stages together: wipe the output root, discover fragments, then
//! assemble and zip every accent × scheme pair in order. The first failure
//! aborts the build and leaves the output root as it was at that point.
//!
//! Progress is reported as [`BuildEvent`]s through a caller-supplied
//! callback, so the CLI can print them while tests collect them.

use crate::archive::{self, ArchiveError};
use crate::assemble::{self, AssembleError};
use crate::config::{ConfigError, SheetConfig};
use crate::naming;
use crate::scan::{self, ScanError};
use crate::types::BuiltTheme;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BuildError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
    #[error("Scan error: {0}")]
    Scan(#[from] ScanError),
    #[error("Assembly error: {0}")]
    Assemble(#[from] AssembleError),
    #[error("Archive error: {0}")]
    Archive(#[from] ArchiveError),
}

/// Progress notifications emitted during [`build`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildEvent {
    /// A package is about to be assembled.
    Building { name: String },
    /// A package archive has been written.
    Archived { path: PathBuf },
    /// Every pair has been built.
    Finished { themes: usize, output_dir: PathBuf },
}

/// Outcome of a successful build.
#[derive(Debug)]
pub struct BuildReport {
    pub output_dir: PathBuf,
    pub themes: Vec<BuiltTheme>,
}

/// Build every theme package for the project at `root`.
pub fn build(
    root: &Path,
    config: &SheetConfig,
    mut on_event: impl FnMut(&BuildEvent),
) -> Result<BuildReport, BuildError> {
    config.validate()?;
    let output_dir = root.join(&config.output_dir);
    reset_output_dir(&output_dir)?;

    let inventory = scan::scan(root, config)?;

    let mut themes = Vec::with_capacity(inventory.pair_count());
    for accent in &inventory.accents {
        for scheme in &inventory.schemes {
            on_event(&BuildEvent::Building {
                name: naming::package_name(
                    &config.theme_prefix,
                    &accent.display_name,
                    &scheme.display_name,
                ),
            });
            let package = assemble::assemble_theme(root, config, &output_dir, accent, scheme)?;
            let archive = archive::zip_package(&output_dir, &package.name)?;
            on_event(&BuildEvent::Archived {
                path: archive.clone(),
            });
            themes.push(BuiltTheme { package, archive });
        }
    }

    on_event(&BuildEvent::Finished {
        themes: themes.len(),
        output_dir: output_dir.clone(),
    });
    Ok(BuildReport { output_dir, themes })
}

/// Delete the output root if present and recreate it empty.
fn reset_output_dir(output_dir: &Path) -> std::io::Result<()> {
    match fs::symlink_metadata(output_dir) {
        Ok(meta) if meta.is_dir() => fs::remove_dir_all(output_dir)?,
        Ok(_) => fs::remove_file(output_dir)?,
        Err(_) => {}
    }
    fs::create_dir_all(output_dir)
}
