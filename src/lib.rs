//! # gal-index
//!
//! An image catalog indexer for static gallery sites. Your filesystem is the
//! data source: first-level subdirectories of a catalog root are categories,
//! the image files inside them are the entries, and the output is a single
//! `index.json` manifest the site consumes.
//!
//! ```text
//! photos/  →  index.json    (filesystem → structured data)
//! ```
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Walks the catalog root, filters categories and images, produces the [`scan::Index`] |
//! | [`output`] | CLI output formatting — inventory display and build summary |
//!
//! # Design Decisions
//!
//! ## One Pass, No Recovery
//!
//! The index is a pure function of the filesystem state at scan time: one
//! `read_dir` over the root, one per category, no caching and no
//! skip-and-continue. An unreadable directory fails the whole run — a build
//! step that silently drops part of the catalog would be worse than one that
//! stops.
//!
//! ## Enumeration Order Is the Filesystem's
//!
//! Categories and images appear in the order `read_dir` yields them. The
//! manifest makes no ordering promise, and consumers that want one sort on
//! their side.
//!
//! ## Forward Slashes Everywhere
//!
//! Image paths in the manifest are built with a literal `/` rather than the
//! host separator. The manifest is consumed by web code, where `cats/a.png`
//! is a URL fragment, not a filesystem path.

pub mod output;
pub mod scan;

#[cfg(test)]
pub(crate) mod test_helpers;
