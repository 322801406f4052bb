//! Sidebar derivation for documentation sections.
//!
//! A sidebar is the ordered list of page identifiers for one navigation
//! section (e.g. `course`, `installation`). [`SidebarBuilder`] discovers
//! markdown files under a section directory, strips extensions, drops
//! README pages, and orders the result with a mixed numeric/lexicographic
//! comparator so lesson files named `1.md`, `2.md`, `10.md` come out in
//! numeric order.

mod order;
mod scanner;

pub use order::compare_entries;

use std::path::PathBuf;

/// Derives ordered sidebar entries from a documentation tree.
///
/// The builder holds the documentation root; each call to [`build`](Self::build)
/// scans one section subdirectory. Scanning is synchronous and performed
/// once per section at site-build time.
#[derive(Debug, Clone)]
pub struct SidebarBuilder {
    docs_root: PathBuf,
}

impl SidebarBuilder {
    /// Create a builder rooted at the documentation source directory.
    #[must_use]
    pub fn new(docs_root: impl Into<PathBuf>) -> Self {
        Self {
            docs_root: docs_root.into(),
        }
    }

    /// Derive the ordered sidebar entries for one section.
    ///
    /// Entries are paths relative to the section directory with the `.md`
    /// extension removed, using `/` separators on all platforms. Entries
    /// containing the substring `README` (case-sensitive) are excluded.
    ///
    /// A missing section directory yields an empty list rather than an
    /// error, matching the behavior the external build tool expects.
    #[must_use]
    pub fn build(&self, section: &str) -> Vec<String> {
        let section_dir = self.docs_root.join(section);
        if !section_dir.is_dir() {
            tracing::warn!(section, "section directory not found, sidebar is empty");
            return Vec::new();
        }

        let mut entries = scanner::collect_markdown(&section_dir);
        entries.retain(|entry| !entry.contains("README"));

        tracing::debug!(section, ?entries, "discovered sidebar entries");

        entries.sort_by(|a, b| compare_entries(a, b));
        entries.dedup();
        entries
    }
}
