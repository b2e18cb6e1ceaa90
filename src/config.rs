//! Build configuration.
//!
//! Every location and file list the builder touches lives here, so the
//! pipeline can be pointed at any project root and output directory. The
//! defaults describe the stock Sheet layout and need no config file at all.
//!
//! ## Config File Location
//!
//! An optional `sheet.toml` in the project root overrides the defaults:
//!
//! ```text
//! project/
//! ├── sheet.toml               # Optional overrides
//! ├── index.theme              # Top-level metadata, copied into each package
//! └── gtk-3.0/
//!     ├── widgets.css          # Static asset
//!     ├── accent/*.css
//!     └── scheme/*.css
//! ```
//!
//! ## Configuration Options
//!
//! ```toml
//! theme_prefix = "Sheet"         # Package names are <prefix>-<Accent>-<Scheme>
//! output_dir = "dist"            # Wiped and recreated on every build
//! compat_mode = "auto"           # "auto" = symlink gtk-4.0, copy if that fails
//!                                # "copy" = always copy gtk-3.0 into gtk-4.0
//!
//! [sources]
//! theme_dir = "gtk-3.0"          # Directory holding the static assets
//! accent_dir = "gtk-3.0/accent"
//! scheme_dir = "gtk-3.0/scheme"
//! extension = "css"              # Stylesheet extension (case-sensitive)
//! static_files = ["widgets.css"]
//! root_files = ["index.theme"]   # Copied when present, skipped otherwise
//! ```
//!
//! Config files are sparse and unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Component, Path};
use thiserror::Error;

/// Name of the optional config file in the project root.
pub const CONFIG_FILE: &str = "sheet.toml";

/// Static asset every aggregator stylesheet imports first.
pub const WIDGETS_CSS: &str = "widgets.css";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Builder configuration loaded from `sheet.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SheetConfig {
    /// Leading component of every package name.
    pub theme_prefix: String,
    /// Output root, relative to the project root.
    pub output_dir: String,
    /// How the `gtk-4.0` alias is produced.
    pub compat_mode: CompatMode,
    /// Input locations and fixed file lists.
    pub sources: SourcesConfig,
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            theme_prefix: "Sheet".to_string(),
            output_dir: "dist".to_string(),
            compat_mode: CompatMode::default(),
            sources: SourcesConfig::default(),
        }
    }
}

/// Strategy for the `gtk-4.0` compatibility directory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompatMode {
    /// Symlink to `gtk-3.0`, falling back to a copy when linking fails.
    #[default]
    Auto,
    /// Always copy `gtk-3.0`.
    Copy,
}

/// Where the stylesheet fragments and fixed assets are read from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SourcesConfig {
    pub theme_dir: String,
    pub accent_dir: String,
    pub scheme_dir: String,
    /// Extension (without the dot) that marks a file as a stylesheet.
    pub extension: String,
    /// Files in `theme_dir` copied into every `gtk-3.0/`. All must exist.
    pub static_files: Vec<String>,
    /// Files in the project root copied into every package root when present.
    pub root_files: Vec<String>,
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            theme_dir: "gtk-3.0".to_string(),
            accent_dir: "gtk-3.0/accent".to_string(),
            scheme_dir: "gtk-3.0/scheme".to_string(),
            extension: "css".to_string(),
            static_files: vec![WIDGETS_CSS.to_string()],
            root_files: vec!["index.theme".to_string()],
        }
    }
}

impl SheetConfig {
    /// Validate config values are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.theme_prefix.is_empty() {
            return Err(ConfigError::Validation(
                "theme_prefix must not be empty".into(),
            ));
        }
        if self.sources.extension.is_empty() || self.sources.extension.starts_with('.') {
            return Err(ConfigError::Validation(
                "sources.extension must be a bare extension like \"css\"".into(),
            ));
        }
        if !is_safe_output_dir(&self.output_dir) {
            return Err(ConfigError::Validation(format!(
                "output_dir must be a relative subdirectory of the project root, got {:?}",
                self.output_dir
            )));
        }
        if !self.sources.static_files.iter().any(|f| f == WIDGETS_CSS) {
            return Err(ConfigError::Validation(format!(
                "sources.static_files must include {WIDGETS_CSS}"
            )));
        }
        Ok(())
    }
}

/// The output root is deleted on every build, so it must name an actual
/// subdirectory: relative, non-empty, and never climbing out with `..`.
fn is_safe_output_dir(dir: &str) -> bool {
    let path = Path::new(dir);
    let mut normal = 0;
    for component in path.components() {
        match component {
            Component::Normal(_) => normal += 1,
            Component::CurDir => {}
            _ => return false,
        }
    }
    normal > 0
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(SheetConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely, so an
///   overridden `static_files` list replaces the stock list.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load `sheet.toml` from the project root as a raw TOML value.
///
/// Returns `Ok(None)` if there is no config file.
pub fn load_raw_config(root: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = root.join(CONFIG_FILE);
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Load the config for a project root: stock defaults with `sheet.toml`
/// merged on top, deserialized and validated.
pub fn load_config(root: &Path) -> Result<SheetConfig, ConfigError> {
    let merged = match load_raw_config(root)? {
        Some(overlay) => merge_toml(stock_defaults_value(), overlay),
        None => stock_defaults_value(),
    };
    let config: SheetConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Returns a fully-commented stock `sheet.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r#"# Sheet theme builder configuration
# =================================
# All settings are optional. Values shown below are the defaults.
# Paths are relative to the project root. Unknown keys cause an error.

# Package directories and archives are named <prefix>-<Accent>-<Scheme>.
theme_prefix = "Sheet"

# Output root. Deleted and recreated on every build.
output_dir = "dist"

# How each package's gtk-4.0 directory is produced:
#   "auto" - relative symlink to gtk-3.0, falling back to a copy
#   "copy" - always a full copy of gtk-3.0
compat_mode = "auto"

# ---------------------------------------------------------------------------
# Sources
# ---------------------------------------------------------------------------
[sources]
# Directory holding the static assets listed below.
theme_dir = "gtk-3.0"

# Every *.<extension> file directly inside these directories is one accent
# or one scheme. Each accent is combined with each scheme.
accent_dir = "gtk-3.0/accent"
scheme_dir = "gtk-3.0/scheme"
extension = "css"

# Copied into every package's gtk-3.0/. Must include widgets.css.
static_files = ["widgets.css"]

# Copied into every package root when present in the project root.
root_files = ["index.theme"]
"#
}
