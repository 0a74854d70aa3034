//! CLI output formatting.
//!
//! Output is information-centric: each category leads with its positional
//! index, name, and image count, with the cataloged files as indented
//! context lines.
//!
//! ```text
//! Categories
//! 001 cats (2 images)
//!     001 whiskers.png
//!     002 tabby.jpg
//! 002 dogs (1 images)
//!     001 rex.webp
//! ```
//!
//! The build summary reports what was written:
//!
//! ```text
//! index.json written with 2 categories and 3 images
//! File: /photos/index.json
//! ```
//!
//! Each display has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure — no I/O, no side effects.

use crate::scan::Index;
use std::path::Path;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_position(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Format the catalog inventory: categories with their images.
pub fn format_scan_output(index: &Index) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push("Categories".to_string());
    for (i, category) in index.categories.iter().enumerate() {
        lines.push(format!(
            "{} {} ({} images)",
            format_position(i + 1),
            category.name,
            category.images.len()
        ));
        for (j, image) in category.images.iter().enumerate() {
            lines.push(format!(
                "    {} {}",
                format_position(j + 1),
                image.file_name
            ));
        }
    }

    lines
}

/// Print the catalog inventory to stdout.
pub fn print_scan_output(index: &Index) {
    for line in format_scan_output(index) {
        println!("{}", line);
    }
}

/// Format the post-write summary: counts plus the output location.
pub fn format_build_summary(index: &Index, output_path: &Path) -> Vec<String> {
    let file_name = output_path
        .file_name()
        .map(|f| f.to_string_lossy().into_owned())
        .unwrap_or_else(|| output_path.display().to_string());

    vec![
        format!(
            "{} written with {} categories and {} images",
            file_name,
            index.categories.len(),
            index.image_count()
        ),
        format!("File: {}", output_path.display()),
    ]
}

/// Print the build summary to stdout.
pub fn print_build_summary(index: &Index, output_path: &Path) {
    for line in format_build_summary(index, output_path) {
        println!("{}", line);
    }
}
