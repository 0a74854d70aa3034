//! Shared test utilities for the gal-index test suite.
//!
//! Fixture trees are built directly in temp directories: the scanner only
//! looks at names and extensions, so image files are placeholder bytes.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = catalog_root();
//! add_category(tmp.path(), "cats", &["a.png", "b.jpg"]);
//!
//! let index = build_index(tmp.path()).unwrap();
//! let cats = find_category(&index, "cats");
//! assert_eq!(cats.images.len(), 2);
//! ```

use std::fs;
use std::path::Path;
use tempfile::TempDir;

use crate::scan::{Category, Image, Index};

// =========================================================================
// Fixture setup
// =========================================================================

/// An empty catalog root in a temp directory.
pub fn catalog_root() -> TempDir {
    TempDir::new().unwrap()
}

/// Create a category directory under `root` containing the given files.
///
/// Files are written with placeholder content; only their names matter.
pub fn add_category(root: &Path, name: &str, files: &[&str]) {
    let dir = root.join(name);
    fs::create_dir_all(&dir).unwrap();
    for file in files {
        fs::write(dir.join(file), b"fake image").unwrap();
    }
}

// =========================================================================
// Index lookups — panics with a clear message on miss
// =========================================================================

/// Find a category by id. Panics if not found.
pub fn find_category<'a>(index: &'a Index, id: &str) -> &'a Category {
    index
        .categories
        .iter()
        .find(|c| c.id == id)
        .unwrap_or_else(|| {
            let ids: Vec<&str> = index.categories.iter().map(|c| c.id.as_str()).collect();
            panic!("category '{id}' not found. Available: {ids:?}")
        })
}

// =========================================================================
// Bulk extractors
// =========================================================================

/// All category ids in index order.
pub fn category_ids(index: &Index) -> Vec<&str> {
    index.categories.iter().map(|c| c.id.as_str()).collect()
}

/// All image file names in enumeration order.
pub fn image_file_names(images: &[Image]) -> Vec<&str> {
    images.iter().map(|i| i.file_name.as_str()).collect()
}
