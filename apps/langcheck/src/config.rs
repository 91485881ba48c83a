//! Configuration discovery and effective settings resolution.
//!
//! Langcheck reads `langcheck.toml|yaml|yml` from the base directory and
//! merges it with CLI flags to produce an `Effective` config.
//! Defaults:
//! - `reference`: `en`
//! - `languages`: the built-in allowed list
//! - `output`: `human`
//!
//! Overrides precedence: CLI > config file > defaults.

use crate::error::{Error, Result};
use crate::languages::{LanguageSet, DEFAULT_REFERENCE};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Config file names probed in order.
pub const CONFIG_FILES: &[&str] = &["langcheck.toml", "langcheck.yaml", "langcheck.yml"];

#[derive(Debug, Default, Deserialize, Clone)]
#[serde(deny_unknown_fields)]
/// Root configuration loaded from `langcheck.toml|yaml`.
pub struct LangcheckConfig {
    pub reference: Option<String>,
    pub languages: Option<Vec<String>>,
    pub output: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    #[default]
    Human,
    Json,
}

impl FromStr for OutputMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "human" => Ok(OutputMode::Human),
            "json" => Ok(OutputMode::Json),
            _ => Err(Error::OutputMode(s.to_string())),
        }
    }
}

#[derive(Debug, Clone)]
/// Fully-resolved configuration used by commands after applying precedence.
pub struct Effective {
    pub base_dir: PathBuf,
    pub reference: String,
    pub languages: LanguageSet,
    pub output: OutputMode,
    /// Config file that contributed settings, if any.
    pub config_path: Option<PathBuf>,
}

/// CLI-side overrides; `None` falls through to the config file.
#[derive(Debug, Default, Clone)]
pub struct Overrides<'a> {
    pub base_dir: Option<&'a str>,
    pub reference: Option<&'a str>,
    pub languages: Option<&'a [String]>,
    pub output: Option<&'a str>,
}

/// First existing config file in `root`.
pub fn find_config(root: &Path) -> Option<PathBuf> {
    CONFIG_FILES
        .iter()
        .map(|name| root.join(name))
        .find(|p| p.is_file())
}

/// Load `LangcheckConfig` from `root` if a config file is present.
///
/// A present but unreadable or malformed file is an error, never a silent
/// fallback to defaults.
pub fn load_config(root: &Path) -> Result<Option<(PathBuf, LangcheckConfig)>> {
    let Some(path) = find_config(root) else {
        return Ok(None);
    };
    let s = fs::read_to_string(&path).map_err(|source| Error::ConfigRead {
        path: path.clone(),
        source,
    })?;
    let is_toml = path.extension().is_some_and(|e| e == "toml");
    let parsed = if is_toml {
        toml::from_str::<LangcheckConfig>(&s).map_err(|e| e.to_string())
    } else {
        serde_yaml::from_str::<LangcheckConfig>(&s).map_err(|e| e.to_string())
    };
    let cfg = parsed.map_err(|message| Error::ConfigParse {
        path: path.clone(),
        message,
    })?;
    Ok(Some((path, cfg)))
}

/// Resolve `Effective` by merging CLI flags, discovered config, and defaults.
pub fn resolve_effective(cli: &Overrides<'_>) -> Result<Effective> {
    let base_dir = PathBuf::from(cli.base_dir.unwrap_or("."));
    let (config_path, cfg) = match load_config(&base_dir)? {
        Some((path, cfg)) => (Some(path), cfg),
        None => (None, LangcheckConfig::default()),
    };

    let languages = match cli.languages {
        Some(codes) => LanguageSet::from_codes(codes)?,
        None => match cfg.languages.as_ref() {
            Some(codes) => LanguageSet::from_codes(codes)?,
            None => LanguageSet::builtin(),
        },
    };

    let reference = cli
        .reference
        .map(|s| s.to_string())
        .or(cfg.reference)
        .unwrap_or_else(|| DEFAULT_REFERENCE.to_string());
    if !languages.contains(&reference) {
        return Err(Error::UnknownReference(reference));
    }

    let output = match cli.output.map(|s| s.to_string()).or(cfg.output) {
        Some(s) => s.parse()?,
        None => OutputMode::default(),
    };

    Ok(Effective {
        base_dir,
        reference,
        languages,
        output,
        config_path,
    })
}
