//! Markdown discovery by filesystem walking.
//!
//! The scanner only identifies files; identifier computation and ordering
//! live with the caller. Entries are relative to the section directory so
//! the same page name works for both display and linking.

use std::fs;
use std::path::Path;

/// Collect identifiers for all markdown files under a section directory.
///
/// Identifiers are computed against `section_dir` itself, never by dropping
/// a fixed number of leading path segments, so nesting the docs root deeper
/// in the project does not change the output.
pub(crate) fn collect_markdown(section_dir: &Path) -> Vec<String> {
    let mut entries = Vec::new();
    walk(section_dir, section_dir, &mut entries);
    entries
}

/// Recurse into `dir`, pushing identifiers for each `.md` file found.
///
/// Hidden files and directories (leading `.`) are skipped. Unreadable
/// directories are treated as empty.
fn walk(section_dir: &Path, dir: &Path, entries: &mut Vec<String>) {
    let Ok(read) = fs::read_dir(dir) else {
        return;
    };

    for entry in read.filter_map(Result::ok) {
        let name = entry.file_name();
        if name.to_string_lossy().starts_with('.') {
            continue;
        }

        let path = entry.path();
        if entry.file_type().is_ok_and(|t| t.is_dir()) {
            walk(section_dir, &path, entries);
        } else if path.extension().is_some_and(|ext| ext == "md")
            && let Some(identifier) = entry_identifier(section_dir, &path)
        {
            entries.push(identifier);
        }
    }
}

/// Convert a discovered file path to its sidebar identifier.
///
/// The identifier is the path relative to the section directory with the
/// extension removed, joined with `/` regardless of platform separator.
///
/// Examples (section dir `docs/course`):
/// - `docs/course/1.md` -> `"1"`
/// - `docs/course/extra/notes.md` -> `"extra/notes"`
pub(crate) fn entry_identifier(section_dir: &Path, file: &Path) -> Option<String> {
    let rel = file.strip_prefix(section_dir).ok()?;
    let rel = rel.with_extension("");

    let parts: Vec<String> = rel
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    if parts.is_empty() {
        return None;
    }
    Some(parts.join("/"))
}
