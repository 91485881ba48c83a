//! Directory-structure comparison against the reference language.
//!
//! Only surplus directories are reported: a directory present in a language
//! but absent from the reference. Directories the language lacks are not
//! flagged here, and file lists are not compared.

use crate::languages::LanguageSet;
use crate::models::{CheckOutcome, Warning};
use crate::tree::folder_tree;
use std::path::Path;

/// Compare every non-reference language folder under `base` with `reference`.
///
/// An absent language folder yields one warning and no issue. For a present
/// one, each directory missing from the reference tree records an issue;
/// directories are visited in sorted path order, so the last extra path wins.
pub fn compare_structure(base: &Path, reference: &str, allowed: &LanguageSet) -> CheckOutcome {
    let reference_tree = folder_tree(&base.join(reference));

    let mut outcome = CheckOutcome::default();
    for lang in allowed.others(reference) {
        let lang_path = base.join(lang);
        if !lang_path.exists() {
            outcome.warnings.push(Warning::MissingLanguage {
                language: lang.to_string(),
            });
            continue;
        }
        let lang_tree = folder_tree(&lang_path);
        for dir in lang_tree.keys() {
            if !reference_tree.contains_key(dir) {
                outcome.issues.record(lang, format!("Extra folder: {}", dir));
            }
        }
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn langs(codes: &[&str]) -> LanguageSet {
        LanguageSet::from_codes(codes.iter().copied()).unwrap()
    }

    #[test]
    fn test_missing_language_warns_without_issue() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("en/ui")).unwrap();

        let out = compare_structure(dir.path(), "en", &langs(&["en", "fr"]));
        assert!(out.issues.is_empty());
        assert_eq!(
            out.warnings,
            vec![Warning::MissingLanguage {
                language: "fr".into()
            }]
        );
    }

    #[test]
    fn test_extra_folders_keep_only_the_last_one() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("en/ui")).unwrap();
        fs::create_dir_all(root.join("fr/ui")).unwrap();
        fs::create_dir_all(root.join("fr/alpha")).unwrap();
        fs::create_dir_all(root.join("fr/zeta/inner")).unwrap();

        let out = compare_structure(root, "en", &langs(&["en", "fr"]));
        assert_eq!(out.issues.len(), 1);
        assert_eq!(out.issues.get("fr"), Some("Extra folder: zeta/inner"));
        assert_eq!(out.warning_count(), 0);
    }

    #[test]
    fn test_missing_directories_and_files_are_not_flagged() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("en/ui/menus")).unwrap();
        fs::write(root.join("en/ui/menus/main.json"), "{}").unwrap();
        fs::create_dir_all(root.join("fr/ui")).unwrap();
        fs::write(root.join("fr/ui/stray.txt"), "").unwrap();

        let out = compare_structure(root, "en", &langs(&["en", "fr"]));
        assert!(!out.has_issues());
    }

    #[test]
    fn test_hidden_directories_in_language_are_ignored() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("en")).unwrap();
        fs::create_dir_all(root.join("fr/.backup/old")).unwrap();

        let out = compare_structure(root, "en", &langs(&["en", "fr"]));
        assert!(out.issues.is_empty());
    }

    #[test]
    fn test_absent_reference_flags_every_directory() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("fr")).unwrap();
        fs::create_dir_all(root.join("de/strings")).unwrap();

        let out = compare_structure(root, "en", &langs(&["en", "fr", "de"]));
        assert_eq!(out.issues.get("fr"), Some("Extra folder: ."));
        assert_eq!(out.issues.get("de"), Some("Extra folder: strings"));
    }
}
