//! Folder-name check.

use crate::error::{Error, Result};
use crate::languages::LanguageSet;
use crate::tree::is_hidden;
use std::fs;
use std::path::Path;

/// Return the visible top-level folders of `base` that are not allowed languages.
///
/// Order follows the directory listing and is not sorted. Plain files and
/// hidden folders are ignored.
pub fn check_folder_names(base: &Path, allowed: &LanguageSet) -> Result<Vec<String>> {
    let entries = fs::read_dir(base).map_err(|source| Error::BaseDir {
        path: base.to_path_buf(),
        source,
    })?;
    let mut invalid = Vec::new();
    for entry in entries.flatten() {
        let name = entry.file_name();
        if is_hidden(&name) || !entry.path().is_dir() {
            continue;
        }
        let name = name.to_string_lossy();
        if !allowed.contains(&name) {
            invalid.push(name.into_owned());
        }
    }
    Ok(invalid)
}
