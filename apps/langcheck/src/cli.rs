//! CLI argument parsing via `clap`.

use crate::config::Overrides;
use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "langcheck",
    version,
    about = "Translation tree consistency checker",
    long_about = "Langcheck — verifies that every language folder mirrors the reference language in directory layout and JSON key structure.\n\nConfiguration precedence: CLI > langcheck.toml > defaults.",
    after_help = "Examples:\n  langcheck check\n  langcheck check --base-dir locales --output json\n  langcheck keys --reference fr --languages fr,en,de\n  langcheck languages",
    arg_required_else_help = true
)]
/// Top-level CLI options and subcommands.
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Args, Debug, Default, Clone)]
/// Options shared by every check subcommand.
pub struct CommonArgs {
    #[arg(long, help = "Directory holding the language folders (default: current dir)")]
    pub base_dir: Option<String>,
    #[arg(long, help = "Reference language folder (default: en)")]
    pub reference: Option<String>,
    #[arg(
        long,
        value_delimiter = ',',
        help = "Comma-separated allowed languages (default: built-in list)"
    )]
    pub languages: Option<Vec<String>>,
    #[arg(long, help = "Output mode: human|json (default: human)")]
    pub output: Option<String>,
}

impl CommonArgs {
    pub fn overrides(&self) -> Overrides<'_> {
        Overrides {
            base_dir: self.base_dir.as_deref(),
            reference: self.reference.as_deref(),
            languages: self.languages.as_deref(),
            output: self.output.as_deref(),
        }
    }
}

#[derive(Subcommand)]
/// Supported subcommands.
pub enum Commands {
    /// Show version
    #[command(about = "Show version", long_about = "Print the current langcheck version.")]
    Version,
    /// Run every check in order
    #[command(
        about = "Run all checks",
        long_about = "Check folder names, then directory structure, then JSON keys. Stops at the first check that fails; warnings never fail the run.",
        after_help = "Examples:\n  langcheck check\n  langcheck check --output json"
    )]
    Check {
        #[command(flatten)]
        common: CommonArgs,
    },
    /// Only check top-level folder names
    #[command(
        about = "Check folder names",
        long_about = "Report top-level folders that are not allowed language identifiers."
    )]
    Names {
        #[command(flatten)]
        common: CommonArgs,
    },
    /// Only compare directory structure
    #[command(
        about = "Compare directory structure",
        long_about = "Report directories present in a language but absent from the reference language. Missing language folders are warnings."
    )]
    Structure {
        #[command(flatten)]
        common: CommonArgs,
    },
    /// Only compare JSON key sets
    #[command(
        about = "Compare JSON keys",
        long_about = "Compare the top-level keys of every reference JSON file with its counterpart in each language. Missing files are warnings."
    )]
    Keys {
        #[command(flatten)]
        common: CommonArgs,
    },
    /// Print the allowed language list
    #[command(
        about = "List allowed languages",
        long_about = "Print the effective allowed language identifiers, marking the reference language."
    )]
    Languages {
        #[command(flatten)]
        common: CommonArgs,
    },
}
