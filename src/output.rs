//! CLI output formatting.
//!
//! Plain lines on stdout, no logging framework. Each command has a pure
//! `format_*` function (returns lines, no I/O) and a `print_*` wrapper.
//!
//! ## Build
//!
//! ```text
//! Building Sheet-Forest-Dark
//! Created zip: dist/Sheet-Forest-Dark.zip
//! Building Sheet-Ocean-Dark
//! Created zip: dist/Sheet-Ocean-Dark.zip
//! ==> Built 2 themes → dist
//! ```
//!
//! ## Check
//!
//! ```text
//! Accents
//! 001 Forest
//!     Source: forest.css
//! 002 Ocean
//!     Source: ocean.css
//!
//! Schemes
//! 001 Dark
//!     Source: dark.css
//!
//! Packages (2)
//! 001 Sheet-Forest-Dark
//! 002 Sheet-Ocean-Dark
//! ```
//!
//! Paths are shown relative to the project root when they live under it.

use crate::pipeline::BuildEvent;
use crate::scan::Inventory;
use crate::types::Stylesheet;
use std::path::Path;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

fn relative_display(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .display()
        .to_string()
}

// ============================================================================
// Build
// ============================================================================

/// Format one progress event as a single line.
pub fn format_build_event(event: &BuildEvent, root: &Path) -> String {
    match event {
        BuildEvent::Building { name } => format!("Building {name}"),
        BuildEvent::Archived { path } => {
            format!("Created zip: {}", relative_display(root, path))
        }
        BuildEvent::Finished { themes, output_dir } => {
            let noun = if *themes == 1 { "theme" } else { "themes" };
            format!(
                "==> Built {themes} {noun} → {}",
                relative_display(root, output_dir)
            )
        }
    }
}

pub fn print_build_event(event: &BuildEvent, root: &Path) {
    println!("{}", format_build_event(event, root));
}

// ============================================================================
// Check
// ============================================================================

fn stylesheet_section(lines: &mut Vec<String>, heading: &str, sheets: &[Stylesheet]) {
    lines.push(heading.to_string());
    if sheets.is_empty() {
        lines.push(format!("{}(none)", indent(1)));
    }
    for (i, sheet) in sheets.iter().enumerate() {
        lines.push(format!("{} {}", format_index(i + 1), sheet.display_name));
        lines.push(format!("{}Source: {}", indent(1), sheet.file_name));
    }
}

/// Format the inventory a build would use: fragments and planned packages.
pub fn format_check_output(inventory: &Inventory, prefix: &str) -> Vec<String> {
    let mut lines = Vec::new();

    stylesheet_section(&mut lines, "Accents", &inventory.accents);
    lines.push(String::new());
    stylesheet_section(&mut lines, "Schemes", &inventory.schemes);
    lines.push(String::new());

    let names = inventory.package_names(prefix);
    lines.push(format!("Packages ({})", names.len()));
    for (i, name) in names.iter().enumerate() {
        lines.push(format!("{} {}", format_index(i + 1), name));
    }

    lines
}

pub fn print_check_output(inventory: &Inventory, prefix: &str) {
    for line in format_check_output(inventory, prefix) {
        println!("{}", line);
    }
}
