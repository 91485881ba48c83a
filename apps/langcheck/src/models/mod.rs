//! Shared data models for check outcomes and the aggregated run report.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
/// The three checks, in the order the driver runs them.
pub enum Stage {
    Names,
    Structure,
    Keys,
}

impl Stage {
    /// Short label used in output lines and JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Names => "names",
            Stage::Structure => "structure",
            Stage::Keys => "keys",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Stage::Names => "folder names",
            Stage::Structure => "directory structure",
            Stage::Keys => "JSON structure",
        };
        f.write_str(s)
    }
}

#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(transparent)]
/// One message per language; a later problem replaces an earlier one.
///
/// Only the most recent finding for a language survives a check pass, so a
/// language with several problems reports exactly one of them.
pub struct IssueRecord(BTreeMap<String, String>);

impl IssueRecord {
    pub fn record(&mut self, language: &str, message: impl Into<String>) {
        self.0.insert(language.to_string(), message.into());
    }

    pub fn get(&self, language: &str) -> Option<&str> {
        self.0.get(language).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
/// Non-fatal finding; never changes the verdict on its own.
pub enum Warning {
    /// A language folder from the allowed set is absent.
    MissingLanguage { language: String },
    /// A reference JSON file has no counterpart in a language folder.
    MissingFile { language: String, path: String },
}

impl Warning {
    pub fn language(&self) -> &str {
        match self {
            Warning::MissingLanguage { language } | Warning::MissingFile { language, .. } => {
                language
            }
        }
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::MissingLanguage { language } => write!(f, "{} is needed", language),
            Warning::MissingFile { path, .. } => write!(f, "Missing JSON file: {}", path),
        }
    }
}

#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
/// Result of the structure or key check.
pub struct CheckOutcome {
    pub issues: IssueRecord,
    pub warnings: Vec<Warning>,
}

impl CheckOutcome {
    pub fn warning_count(&self) -> usize {
        self.warnings.len()
    }

    pub fn has_issues(&self) -> bool {
        !self.issues.is_empty()
    }
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
/// Aggregated verdict printed at the end of a run.
pub struct Summary {
    pub passed: bool,
    pub warnings: usize,
    pub halted_at: Option<Stage>,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
/// Full driver result. Stages after a hard failure are `None`.
pub struct Report {
    pub invalid_folders: Vec<String>,
    pub structure: Option<CheckOutcome>,
    pub keys: Option<CheckOutcome>,
    pub summary: Summary,
}

impl Report {
    /// All warnings collected by the stages that ran, in stage order.
    pub fn warnings(&self) -> impl Iterator<Item = &Warning> {
        self.structure
            .iter()
            .chain(self.keys.iter())
            .flat_map(|o| o.warnings.iter())
    }

    pub fn exit_code(&self) -> i32 {
        if self.summary.passed {
            0
        } else {
            1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_record_keeps_last_message_per_language() {
        let mut rec = IssueRecord::default();
        rec.record("fr", "Extra folder: a");
        rec.record("de", "Extra folder: x");
        rec.record("fr", "Extra folder: b");
        assert_eq!(rec.len(), 2);
        assert_eq!(rec.get("fr"), Some("Extra folder: b"));
    }

    #[test]
    fn test_warning_serializes_with_kind_tag() {
        let w = Warning::MissingFile {
            language: "fr".into(),
            path: "a/x.json".into(),
        };
        let v = serde_json::to_value(&w).unwrap();
        assert_eq!(v["kind"], "missing_file");
        assert_eq!(v["path"], "a/x.json");
        assert_eq!(w.to_string(), "Missing JSON file: a/x.json");
        assert_eq!(w.language(), "fr");
    }
}
