//! Filesystem scanning and index generation.
//!
//! Walks the first level of a catalog root to discover categories and their
//! images, producing the [`Index`] that the entry point serializes to
//! `index.json`.
//!
//! ## Directory Structure
//!
//! The catalog root is expected to contain one subdirectory per category:
//!
//! ```text
//! photos/                          # Catalog root
//! ├── index.json                   # Output of a previous run (plain file, ignored)
//! ├── cats/                        # Category
//! │   ├── whiskers.png
//! │   ├── tabby.JPG                # Extension match is case-insensitive
//! │   └── notes.txt                # Not an image, skipped
//! ├── dogs/                        # No images → dropped from the index
//! ├── node_modules/                # Never a category
//! └── .archive/                    # Hidden, never a category
//! ```
//!
//! ## Rules
//!
//! - Only direct children of the root become categories; there is no
//!   recursion below one level.
//! - Hidden directories (name starting with `.`) and `node_modules`, `.git`,
//!   `.github` are excluded.
//! - An image is a regular file whose lowercased extension is one of `png`,
//!   `jpg`, `jpeg`, `webp`.
//! - A category with zero images does not appear in the index.
//! - Entries keep filesystem enumeration order; nothing is sorted.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// The generated manifest: one snapshot of the catalog root.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Index {
    /// UTC timestamp of the scan, serialized as an RFC 3339 string.
    pub generated_at: DateTime<Utc>,
    pub categories: Vec<Category>,
}

impl Index {
    /// Total image count across all categories.
    pub fn image_count(&self) -> usize {
        self.categories.iter().map(|c| c.images.len()).sum()
    }
}

/// A first-level subdirectory with at least one image.
///
/// `id` and `name` are both the directory's base name; no separate
/// identifier is synthesized.
#[derive(Debug, Serialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub images: Vec<Image>,
}

/// A single cataloged file.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    /// Category-relative path, always `/`-separated.
    pub path: String,
    pub file_name: String,
}

const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "webp"];

/// Directory names that are never categories, on top of the hidden-name rule.
const SKIP_DIRS: &[&str] = &["node_modules", ".git", ".github"];

/// List the category directories directly under `root`, in enumeration order.
pub fn discover_categories(root: &Path) -> Result<Vec<String>, ScanError> {
    let names = fs::read_dir(root)?
        .filter_map(|e| e.ok())
        .filter(|e| e.path().is_dir())
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .filter(|name| !name.starts_with('.') && !SKIP_DIRS.contains(&name.as_str()))
        .collect();
    Ok(names)
}

/// List the images directly inside one category directory.
///
/// Each match becomes an [`Image`] whose `path` is built as
/// `category/file_name` with a literal `/`, so the manifest is identical
/// across host path-separator conventions.
pub fn images_in_category(root: &Path, category: &str) -> Result<Vec<Image>, ScanError> {
    let images = fs::read_dir(root.join(category))?
        .filter_map(|e| e.ok())
        .filter(|e| is_image(&e.path()))
        .map(|e| {
            let file_name = e.file_name().to_string_lossy().into_owned();
            Image {
                path: format!("{category}/{file_name}"),
                file_name,
            }
        })
        .collect();
    Ok(images)
}

fn is_image(path: &Path) -> bool {
    if !path.is_file() {
        return false;
    }
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    IMAGE_EXTENSIONS.contains(&ext.as_str())
}

/// Build the full index for `root`.
///
/// A pure function of the filesystem state at the moment of the call: one
/// pass over the root, one pass per category, no partial results. Any read
/// failure propagates to the caller.
pub fn build_index(root: &Path) -> Result<Index, ScanError> {
    let mut categories = Vec::new();

    for name in discover_categories(root)? {
        let images = images_in_category(root, &name)?;
        if images.is_empty() {
            continue;
        }
        categories.push(Category {
            id: name.clone(),
            name,
            images,
        });
    }

    Ok(Index {
        generated_at: Utc::now(),
        categories,
    })
}
