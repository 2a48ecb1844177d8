use std::io::ErrorKind;
use std::path::Path;
use walkdir::WalkDir;

use crate::Result;
use crate::layout::{JsonlKind, MetadataDir, is_primary_database};

/// Names of the regular files directly inside `dir`, sorted.
///
/// Symlinks count by their target, matching what `FileStat::probe` sees;
/// links that cannot be resolved are skipped. A missing directory lists as empty; the
/// caller decides whether that matters.
pub fn list_file_names(dir: &Path) -> Result<Vec<String>> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut names = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) if is_unresolvable_link(&err) => continue,
            Err(err) => return Err(err.into()),
        };
        if !entry.file_type().is_file() {
            continue;
        }
        names.push(entry.file_name().to_string_lossy().into_owned());
    }

    Ok(names)
}

/// Dangling links and links back to an ancestor directory.
fn is_unresolvable_link(err: &walkdir::Error) -> bool {
    err.loop_ancestor().is_some()
        || err
            .io_error()
            .is_some_and(|io| io.kind() == ErrorKind::NotFound)
}

/// Database files that would compete with the canonical store.
pub fn primary_databases(dir: &MetadataDir) -> Result<Vec<String>> {
    Ok(list_file_names(dir.path())?
        .into_iter()
        .filter(|name| is_primary_database(name))
        .collect())
}

/// Recognized append-logs present in the directory, current name first.
pub fn present_jsonl_files(dir: &MetadataDir) -> Result<Vec<JsonlKind>> {
    let names = list_file_names(dir.path())?;
    Ok(JsonlKind::ALL
        .into_iter()
        .filter(|kind| names.iter().any(|name| name == kind.file_name()))
        .collect())
}
