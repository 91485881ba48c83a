//! JSON key-set comparison against the reference language.
//!
//! Only top-level keys are compared, as an unordered set. Values and nested
//! objects are never inspected. Documents whose top level is not an object
//! only match documents of the same kind.

use crate::languages::LanguageSet;
use crate::models::{CheckOutcome, Warning};
use crate::tree::relative_key;
use serde_json::Value as Json;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Every `.json` file below `root`, keyed by its `/`-joined relative path.
///
/// Unlike the folder tree, this walk includes hidden directories. Symlinked
/// directories are not followed, so link cycles cannot multiply entries.
pub fn json_files(root: &Path) -> BTreeMap<String, PathBuf> {
    let mut files = BTreeMap::new();
    if !root.is_dir() {
        return files;
    }
    let walker = WalkDir::new(root).follow_links(false).into_iter();
    for entry in walker.filter_map(|e| e.ok()) {
        if entry.file_type().is_dir() || entry.path().is_dir() {
            continue;
        }
        if !entry.file_name().to_string_lossy().ends_with(".json") {
            continue;
        }
        files.insert(relative_key(root, entry.path()), entry.into_path());
    }
    files
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Top-level shape of a JSON document as seen by the key check.
pub enum TopLevel {
    Object(BTreeSet<String>),
    /// Any non-object document; carries the JSON kind name and no keys.
    Other(&'static str),
}

/// Top-level shape of the JSON document at `path`; `None` if it cannot be
/// read or parsed.
pub fn top_level(path: &Path) -> Option<TopLevel> {
    let data = fs::read_to_string(path).ok()?;
    let json: Json = serde_json::from_str(&data).ok()?;
    Some(match json {
        Json::Object(obj) => TopLevel::Object(obj.keys().cloned().collect()),
        Json::Array(_) => TopLevel::Other("array"),
        Json::String(_) => TopLevel::Other("string"),
        Json::Number(_) => TopLevel::Other("number"),
        Json::Bool(_) => TopLevel::Other("boolean"),
        Json::Null => TopLevel::Other("null"),
    })
}

/// Compare every reference JSON file with its counterpart in each language.
///
/// - Absent language folders are skipped without a warning.
/// - A missing counterpart file is a warning.
/// - An unparsable reference or language file records an "Invalid JSON" issue.
/// - Differing key sets, or differing top-level kinds (object vs array,
///   array vs string, ...), record a "JSON structure mismatch" issue.
///
/// Files are visited in sorted relative-path order; the last issue per
/// language wins.
pub fn validate_json_keys(base: &Path, reference: &str, allowed: &LanguageSet) -> CheckOutcome {
    let reference_files = json_files(&base.join(reference));
    // Parsed lazily, at most once per reference file.
    let mut reference_keys: HashMap<&str, Option<TopLevel>> = HashMap::new();

    let mut outcome = CheckOutcome::default();
    for lang in allowed.others(reference) {
        let lang_path = base.join(lang);
        if !lang_path.exists() {
            continue;
        }
        for (rel, ref_file) in &reference_files {
            let lang_file = lang_path.join(rel);
            if !lang_file.exists() {
                outcome.warnings.push(Warning::MissingFile {
                    language: lang.to_string(),
                    path: rel.clone(),
                });
                continue;
            }
            let ref_keys = reference_keys
                .entry(rel.as_str())
                .or_insert_with(|| top_level(ref_file));
            match (ref_keys.as_ref(), top_level(&lang_file)) {
                (Some(expected), Some(actual)) => {
                    if *expected != actual {
                        outcome
                            .issues
                            .record(lang, format!("JSON structure mismatch in {}", rel));
                    }
                }
                _ => outcome
                    .issues
                    .record(lang, format!("Invalid JSON in {}", rel)),
            }
        }
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn write(root: &Path, rel: &str, contents: &str) {
        let p = root.join(rel);
        fs::create_dir_all(p.parent().unwrap()).unwrap();
        fs::write(p, contents).unwrap();
    }

    fn en_fr() -> LanguageSet {
        LanguageSet::from_codes(["en", "fr"]).unwrap()
    }

    #[test]
    fn test_missing_key_is_a_structure_mismatch() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        write(root, "en/strings/common.json", r#"{"hello": "Hello", "bye": "Bye"}"#);
        write(root, "fr/strings/common.json", r#"{"hello": "Bonjour"}"#);

        let out = validate_json_keys(root, "en", &en_fr());
        assert_eq!(
            out.issues.get("fr"),
            Some("JSON structure mismatch in strings/common.json")
        );
    }

    #[test]
    fn test_malformed_json_is_reported_as_invalid() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        write(root, "en/strings/common.json", r#"{"hello": "Hello"}"#);
        write(root, "fr/strings/common.json", r#"{"hello": "Bonjour",}"#);

        let out = validate_json_keys(root, "en", &en_fr());
        assert_eq!(
            out.issues.get("fr"),
            Some("Invalid JSON in strings/common.json")
        );
    }

    #[test]
    fn test_invalid_reference_flags_every_language_with_the_file() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        write(root, "en/a.json", "{ nope");
        write(root, "fr/a.json", r#"{"k": 1}"#);
        write(root, "de/a.json", r#"{"k": 1}"#);

        let allowed = LanguageSet::from_codes(["en", "fr", "de"]).unwrap();
        let out = validate_json_keys(root, "en", &allowed);
        assert_eq!(out.issues.get("fr"), Some("Invalid JSON in a.json"));
        assert_eq!(out.issues.get("de"), Some("Invalid JSON in a.json"));
    }

    #[test]
    fn test_values_order_and_nesting_are_ignored() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        write(root, "en/x.json", r#"{"a": {"deep": 1}, "b": "B"}"#);
        write(root, "fr/x.json", r#"{"b": 2, "a": {"other": [1, 2]}}"#);

        let out = validate_json_keys(root, "en", &en_fr());
        assert!(!out.has_issues());
        assert_eq!(out.warning_count(), 0);
    }

    #[test]
    fn test_missing_file_warns_and_absent_language_is_silent() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        write(root, "en/a/one.json", r#"{"k": 1}"#);
        write(root, "en/a/two.json", r#"{"k": 1}"#);
        write(root, "fr/a/one.json", r#"{"k": 1}"#);

        let allowed = LanguageSet::from_codes(["en", "fr", "de"]).unwrap();
        let out = validate_json_keys(root, "en", &allowed);
        assert!(out.issues.is_empty());
        assert_eq!(
            out.warnings,
            vec![Warning::MissingFile {
                language: "fr".into(),
                path: "a/two.json".into()
            }]
        );
    }

    #[test]
    fn test_last_problem_per_language_wins() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        write(root, "en/a.json", r#"{"k": 1}"#);
        write(root, "en/b.json", r#"{"k": 1}"#);
        write(root, "fr/a.json", r#"{"other": 1}"#);
        write(root, "fr/b.json", "[1,");

        let out = validate_json_keys(root, "en", &en_fr());
        assert_eq!(out.issues.len(), 1);
        assert_eq!(out.issues.get("fr"), Some("Invalid JSON in b.json"));
    }

    #[test]
    fn test_top_level_kind_must_match() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        write(root, "en/a.json", "{}");
        write(root, "fr/a.json", "[1, 2]");
        write(root, "en/b.json", r#"["x"]"#);
        write(root, "de/b.json", "[]");

        let allowed = LanguageSet::from_codes(["en", "fr", "de"]).unwrap();
        let out = validate_json_keys(root, "en", &allowed);
        assert_eq!(out.issues.get("fr"), Some("JSON structure mismatch in a.json"));
        assert_eq!(out.issues.get("de"), None);
        assert_eq!(
            top_level(&root.join("fr/a.json")),
            Some(TopLevel::Other("array"))
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_directories_are_not_followed() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        write(root, "en/ui/a.json", r#"{"k": 1}"#);
        write(root, "fr/ui/a.json", r#"{"k": 1}"#);
        std::os::unix::fs::symlink("..", root.join("en/ui/up")).unwrap();

        let files = json_files(&root.join("en"));
        assert_eq!(files.keys().cloned().collect::<Vec<_>>(), vec!["ui/a.json"]);

        let out = validate_json_keys(root, "en", &en_fr());
        assert_eq!(out.warning_count(), 0);
        assert!(out.issues.is_empty());
    }

    #[test]
    fn test_json_files_include_hidden_directories() {
        let dir = tempdir().unwrap();
        let root = dir.path().join("en");
        write(&root, "top.json", "{}");
        write(&root, ".drafts/wip.json", "{}");
        write(&root, "notes.txt", "");

        let files = json_files(&root);
        assert_eq!(
            files.keys().cloned().collect::<Vec<_>>(),
            vec![".drafts/wip.json", "top.json"]
        );
    }
}
