//! Validation driver.
//!
//! Runs the folder-name, structure and key checks in that order against one
//! base directory. The first check that produces a hard failure stops the
//! run; warnings from every stage that ran are summed into the summary.

use crate::checks::{check_folder_names, compare_structure, validate_json_keys};
use crate::error::Result;
use crate::languages::LanguageSet;
use crate::models::{Report, Stage, Summary};
use std::path::Path;

/// Run all checks and build a [`Report`].
///
/// Returns an error only when the base directory cannot be listed; every
/// validation finding is carried inside the report.
pub fn run_validation(base: &Path, reference: &str, allowed: &LanguageSet) -> Result<Report> {
    let invalid_folders = check_folder_names(base, allowed)?;
    if !invalid_folders.is_empty() {
        return Ok(Report {
            invalid_folders,
            structure: None,
            keys: None,
            summary: Summary {
                passed: false,
                warnings: 0,
                halted_at: Some(Stage::Names),
            },
        });
    }

    let structure = compare_structure(base, reference, allowed);
    let mut warnings = structure.warning_count();
    if structure.has_issues() {
        return Ok(Report {
            invalid_folders,
            structure: Some(structure),
            keys: None,
            summary: Summary {
                passed: false,
                warnings,
                halted_at: Some(Stage::Structure),
            },
        });
    }

    let keys = validate_json_keys(base, reference, allowed);
    warnings += keys.warning_count();
    let halted_at = keys.has_issues().then_some(Stage::Keys);
    Ok(Report {
        invalid_folders,
        structure: Some(structure),
        keys: Some(keys),
        summary: Summary {
            passed: halted_at.is_none(),
            warnings,
            halted_at,
        },
    })
}
