//! Folder tree enumeration shared by the structure and key checks.
//!
//! A folder tree maps each directory below a language root (the root itself
//! is `.`) to the sorted names of the files directly inside it. Directories
//! whose name starts with `.` are skipped at every depth, together with
//! everything below them. Relative paths always use `/`.

use std::collections::BTreeMap;
use std::ffi::OsStr;
use std::path::Path;
use walkdir::WalkDir;

/// Key used for the language root inside a [`FolderTree`].
pub const ROOT: &str = ".";

/// Relative directory path -> sorted file names.
pub type FolderTree = BTreeMap<String, Vec<String>>;

pub fn is_hidden(name: &OsStr) -> bool {
    name.to_string_lossy().starts_with('.')
}

/// Path of `path` relative to `root`, joined with `/`; `.` for the root itself.
pub fn relative_key(root: &Path, path: &Path) -> String {
    let rel = pathdiff::diff_paths(path, root).unwrap_or_else(|| path.to_path_buf());
    let parts: Vec<String> = rel
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .filter(|c| c != ROOT)
        .collect();
    if parts.is_empty() {
        ROOT.to_string()
    } else {
        parts.join("/")
    }
}

/// Build the folder tree rooted at `root`.
///
/// Returns an empty tree when `root` is missing or not a directory; callers
/// that need to tell "absent" from "empty" must check existence first.
/// Unreadable entries are skipped. Symlinked directories are not followed
/// and do not show up as files either.
pub fn folder_tree(root: &Path) -> FolderTree {
    let mut tree = FolderTree::new();
    if !root.is_dir() {
        return tree;
    }
    let walker = WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !(e.file_type().is_dir() && is_hidden(e.file_name())));
    for entry in walker.filter_map(|e| e.ok()) {
        if entry.file_type().is_dir() {
            tree.entry(relative_key(root, entry.path())).or_default();
            continue;
        }
        if entry.path().is_dir() {
            continue;
        }
        let Some(parent) = entry.path().parent() else {
            continue;
        };
        tree.entry(relative_key(root, parent))
            .or_default()
            .push(entry.file_name().to_string_lossy().into_owned());
    }
    for files in tree.values_mut() {
        files.sort();
    }
    tree
}
