//! Allowed language identifiers.
//!
//! The built-in list is the closed set of folder names a translation tree may
//! contain. A config file can replace it at start-up; after that the set is
//! never mutated.

use crate::error::{Error, Result};
use regex::Regex;
use std::sync::OnceLock;

/// Built-in allowed language folders, in check order.
pub const ALLOWED_LANGUAGES: &[&str] = &[
    "ar", "bg", "zh-cn", "zh-tw", "cs", "da", "nl", "en", "fi", "fr", "de", "el", "hu", "it",
    "ja", "ko", "no", "en-pt", "pl", "pt", "pt-br", "ro", "ru", "es", "es-419", "sv", "th", "tr",
    "uk", "vn",
];

/// Language every other folder is compared against unless overridden.
pub const DEFAULT_REFERENCE: &str = "en";

fn code_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[a-z]{2,3}(-[a-z0-9]{2,4})?$").expect("valid language regex"))
}

/// Returns true when `code` looks like a language folder name (`xx`, `xx-yy`, `es-419`).
pub fn is_well_formed(code: &str) -> bool {
    code_pattern().is_match(code)
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Ordered, duplicate-free set of allowed language identifiers.
pub struct LanguageSet {
    codes: Vec<String>,
}

impl LanguageSet {
    pub fn builtin() -> Self {
        Self {
            codes: ALLOWED_LANGUAGES.iter().map(|c| c.to_string()).collect(),
        }
    }

    /// Build a set from user-supplied codes, keeping first-seen order.
    ///
    /// Every code must be well formed; duplicates collapse silently.
    pub fn from_codes<I, S>(codes: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut out: Vec<String> = Vec::new();
        for code in codes {
            let code = code.as_ref().trim();
            if !is_well_formed(code) {
                return Err(Error::InvalidLanguage(code.to_string()));
            }
            if !out.iter().any(|c| c == code) {
                out.push(code.to_string());
            }
        }
        Ok(Self { codes: out })
    }

    pub fn contains(&self, code: &str) -> bool {
        self.codes.iter().any(|c| c == code)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.codes.iter().map(String::as_str)
    }

    /// Languages checked against `reference`, i.e. every member except it.
    pub fn others<'a>(&'a self, reference: &'a str) -> impl Iterator<Item = &'a str> {
        self.iter().filter(move |c| *c != reference)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

impl Default for LanguageSet {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_codes_are_well_formed() {
        let set = LanguageSet::builtin();
        assert_eq!(set.len(), ALLOWED_LANGUAGES.len());
        assert!(set.iter().all(is_well_formed));
        assert!(set.contains("zh-cn"));
        assert!(set.contains("es-419"));
        assert!(!set.contains("xx"));
    }

    #[test]
    fn test_from_codes_dedups_and_keeps_order() {
        let set = LanguageSet::from_codes(["fr", "en", "fr", " de "]).unwrap();
        assert_eq!(set.iter().collect::<Vec<_>>(), vec!["fr", "en", "de"]);
        assert_eq!(set.others("en").collect::<Vec<_>>(), vec!["fr", "de"]);
    }

    #[test]
    fn test_from_codes_rejects_malformed() {
        let err = LanguageSet::from_codes(["en", "EN_us"]).unwrap_err();
        assert!(matches!(err, Error::InvalidLanguage(ref c) if c == "EN_us"));
        assert!(LanguageSet::from_codes(["../en"]).is_err());
    }
}
