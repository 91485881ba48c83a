//! The three translation-tree checks.
//!
//! - `names`: top-level folders must be allowed language identifiers.
//! - `structure`: no language may contain a directory the reference lacks.
//! - `keys`: JSON files must expose the same top-level keys as the reference.

pub mod keys;
pub mod names;
pub mod structure;

pub use keys::validate_json_keys;
pub use names::check_folder_names;
pub use structure::compare_structure;
