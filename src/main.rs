mod calculator;
mod cli;
mod config;
mod engine;
mod error;
mod history;
mod report;
mod types;
mod validate;

use crate::engine::jitter::{FixedJitter, RandomJitter};
use crate::engine::ScoringEngine;
use crate::error::LoanError;
use crate::history::blob::FileBlobStore;
use crate::history::HistoryStore;
use crate::types::application::ApplicationDraft;
use crate::types::config::LoanscoreConfig;
use clap::Parser;
use std::path::Path;
use tracing::debug;
use tracing_subscriber::EnvFilter;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const DECLINED: i32 = 1;
    pub const INVALID: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn run() -> Result<i32, LoanError> {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    match cli.command {
        cli::Commands::Evaluate(cmd) => {
            let cfg = load_or_default(&cmd.root)?;
            let draft = read_draft(&cmd.file)?;

            let validation = validate::validate(&draft);
            if !validation.is_valid {
                for error in &validation.errors {
                    eprintln!("invalid: {error}");
                }
                return Ok(exit_code::INVALID);
            }
            let application = match draft.into_application() {
                Ok(application) => application,
                Err(error @ (LoanError::MissingField(_) | LoanError::InvalidInput(_))) => {
                    eprintln!("invalid: {error}");
                    return Ok(exit_code::INVALID);
                }
                Err(error) => return Err(error),
            };

            let result = if cmd.no_jitter {
                ScoringEngine::new(FixedJitter(0.0)).score(&application)?
            } else {
                let jitter = match cmd.seed.or(cfg.seed()) {
                    Some(seed) => RandomJitter::seeded(seed),
                    None => RandomJitter::from_os_rng(),
                };
                ScoringEngine::new(jitter).score(&application)?
            };
            let breakdown = if cmd.explain {
                Some(engine::breakdown(&application)?)
            } else {
                None
            };

            if cmd.no_save {
                debug!("history save skipped");
            } else {
                let mut store = HistoryStore::new(FileBlobStore::new(cfg.history_dir(&cmd.root)));
                let outcome = store.save(&application, &result);
                match outcome.persisted {
                    Ok(()) if !cli.quiet => eprintln!("history id: {}", outcome.item.id),
                    Ok(()) => {}
                    Err(error) => eprintln!(
                        "warning: decision {} was not saved to history: {error}",
                        outcome.item.id
                    ),
                }
            }

            let rendered =
                report::render_prediction(&result, breakdown.as_ref(), output_format(&cmd.format))?;
            println!("{rendered}");

            if result.approved {
                Ok(exit_code::SUCCESS)
            } else {
                Ok(exit_code::DECLINED)
            }
        }
        cli::Commands::Validate(cmd) => {
            let draft = read_draft(&cmd.file)?;
            let validation = validate::validate(&draft);
            if validation.is_valid {
                println!("valid");
                return Ok(exit_code::SUCCESS);
            }
            for error in &validation.errors {
                println!("- {error}");
            }
            Ok(exit_code::INVALID)
        }
        cli::Commands::History(cli::HistoryCommand::List(cmd)) => {
            let cfg = load_or_default(&cmd.root)?;
            let store = HistoryStore::new(FileBlobStore::new(cfg.history_dir(&cmd.root)));
            let rendered = report::render_history(&store.list(), output_format(&cmd.format))?;
            println!("{rendered}");
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::History(cli::HistoryCommand::Clear(cmd)) => {
            let cfg = load_or_default(&cmd.root)?;
            let mut store = HistoryStore::new(FileBlobStore::new(cfg.history_dir(&cmd.root)));
            store.clear()?;
            println!("history cleared");
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Emi(cmd) => {
            let cfg = load_or_default(&cmd.root)?;
            let rate = cmd.rate.unwrap_or_else(|| cfg.annual_rate());
            let payment = calculator::monthly_payment(cmd.principal, rate, cmd.term)?;
            let interest = calculator::total_interest(cmd.principal, rate, cmd.term)?;

            println!("annual rate: {rate}%");
            println!("monthly payment: {payment:.2}");
            println!("total interest: {interest:.2}");
            if let Some(income) = cmd.income {
                let affordability = calculator::affordability(income, payment)?;
                println!(
                    "affordability: {}% of income ({})",
                    affordability.ratio_percent,
                    affordability.band.describe()
                );
            }
            Ok(exit_code::SUCCESS)
        }
    }
}

fn init_tracing(verbose: u8, quiet: bool) {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn load_or_default(root: &Path) -> Result<LoanscoreConfig, LoanError> {
    if !root.exists() {
        return Err(LoanError::PathNotFound(root.display().to_string()));
    }
    Ok(config::load_config(root)?.unwrap_or_default())
}

fn read_draft(path: &Path) -> Result<ApplicationDraft, LoanError> {
    if !path.exists() {
        return Err(LoanError::PathNotFound(path.display().to_string()));
    }
    let content = std::fs::read_to_string(path)?;
    let is_toml = path
        .extension()
        .and_then(|value| value.to_str())
        .map(|extension| extension.eq_ignore_ascii_case("toml"))
        .unwrap_or(false);
    if is_toml {
        Ok(toml::from_str(&content)?)
    } else {
        serde_json::from_str(&content)
            .map_err(|e| LoanError::ApplicationParse(format!("{}: {}", path.display(), e)))
    }
}

fn output_format(format: &cli::ReportFormat) -> report::OutputFormat {
    match format {
        cli::ReportFormat::Json => report::OutputFormat::Json,
        cli::ReportFormat::Md => report::OutputFormat::Md,
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
