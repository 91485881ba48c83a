//! Langcheck CLI binary entry point.
//! Resolves config, runs the requested checks and prints results.

use clap::Parser;
use langcheck::cli::{Cli, Commands, CommonArgs};
use langcheck::config::{self, Effective, OutputMode};
use langcheck::models::Stage;
use langcheck::{checks, output, utils, validate};

fn main() {
    let cli = Cli::parse();
    let code = match run(cli.cmd) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {}", utils::error_prefix(), e);
            2
        }
    };
    std::process::exit(code);
}

fn resolve(common: &CommonArgs) -> langcheck::Result<Effective> {
    let eff = config::resolve_effective(&common.overrides())?;
    if eff.output != OutputMode::Json {
        match eff.config_path.as_ref() {
            Some(p) => eprintln!(
                "{} Using config {}",
                utils::info_prefix(),
                p.to_string_lossy()
            ),
            None => eprintln!(
                "{} No langcheck.toml found; using defaults.",
                utils::note_prefix()
            ),
        }
    }
    Ok(eff)
}

fn run(cmd: Commands) -> langcheck::Result<i32> {
    match cmd {
        Commands::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
            Ok(0)
        }
        Commands::Check { common } => {
            let eff = resolve(&common)?;
            let report = validate::run_validation(&eff.base_dir, &eff.reference, &eff.languages)?;
            output::print_report(&report, eff.output);
            Ok(report.exit_code())
        }
        Commands::Names { common } => {
            let eff = resolve(&common)?;
            let invalid = checks::check_folder_names(&eff.base_dir, &eff.languages)?;
            output::print_names(&invalid, eff.output);
            Ok(if invalid.is_empty() { 0 } else { 1 })
        }
        Commands::Structure { common } => {
            let eff = resolve(&common)?;
            let outcome = checks::compare_structure(&eff.base_dir, &eff.reference, &eff.languages);
            output::print_outcome(Stage::Structure, &outcome, eff.output);
            Ok(if outcome.has_issues() { 1 } else { 0 })
        }
        Commands::Keys { common } => {
            let eff = resolve(&common)?;
            let outcome = checks::validate_json_keys(&eff.base_dir, &eff.reference, &eff.languages);
            output::print_outcome(Stage::Keys, &outcome, eff.output);
            Ok(if outcome.has_issues() { 1 } else { 0 })
        }
        Commands::Languages { common } => {
            let eff = config::resolve_effective(&common.overrides())?;
            for lang in eff.languages.iter() {
                if lang == eff.reference {
                    println!("{} (reference)", lang);
                } else {
                    println!("{}", lang);
                }
            }
            Ok(0)
        }
    }
}
