use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::config::LibrarySettings;
use crate::error::Error;

/// Walk `root` and return the path of the file whose stem equals `name`.
///
/// The walk visits entries in lexical order per directory and does not
/// short-circuit: when several files share the stem, the one seen last in
/// walk order wins.
pub fn resolve(name: &str, root: &Path, settings: &LibrarySettings) -> Result<PathBuf, Error> {
    let mut found: Option<PathBuf> = None;

    let walker = WalkDir::new(root)
        .follow_links(settings.follow_links)
        .sort_by_file_name();

    for entry in walker {
        let entry = entry.map_err(|e| Error::Scan {
            path: e
                .path()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| root.to_path_buf()),
            source: e,
        })?;

        if entry.file_type().is_file() && stem_matches(entry.path(), name) {
            found = Some(entry.path().to_path_buf());
        }
    }

    found.ok_or_else(|| Error::NotFound(name.to_string()))
}

fn stem_matches(path: &Path, name: &str) -> bool {
    path.file_stem()
        .and_then(|s| s.to_str())
        .map(|stem| stem == name)
        .unwrap_or(false)
}
