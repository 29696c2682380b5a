use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "loanscore",
    version,
    about = "Loan application scoring and decision history CLI"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate, score and record an application
    Evaluate(EvaluateCommand),
    /// Check an application without scoring it
    Validate(ValidateCommand),
    /// Inspect or clear the decision history
    #[command(subcommand)]
    History(HistoryCommand),
    /// Compute the monthly payment for a loan
    Emi(EmiCommand),
}

#[derive(Clone, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}

#[derive(Args)]
pub struct EvaluateCommand {
    /// Application file (JSON, or TOML when the extension is .toml)
    pub file: PathBuf,
    /// Directory holding loanscore.toml and the history store
    #[arg(long, default_value = ".")]
    pub root: PathBuf,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
    /// Seed for the confidence jitter
    #[arg(long, conflicts_with = "no_jitter")]
    pub seed: Option<u64>,
    /// Report confidence without the random perturbation
    #[arg(long)]
    pub no_jitter: bool,
    /// Include every scoring term in the output
    #[arg(long)]
    pub explain: bool,
    /// Do not record the decision in history
    #[arg(long)]
    pub no_save: bool,
}

#[derive(Args)]
pub struct ValidateCommand {
    pub file: PathBuf,
}

#[derive(Subcommand)]
pub enum HistoryCommand {
    List(HistoryListCommand),
    Clear(HistoryClearCommand),
}

#[derive(Args)]
pub struct HistoryListCommand {
    #[arg(long, default_value = ".")]
    pub root: PathBuf,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
}

#[derive(Args)]
pub struct HistoryClearCommand {
    #[arg(long, default_value = ".")]
    pub root: PathBuf,
}

#[derive(Args)]
pub struct EmiCommand {
    #[arg(long)]
    pub principal: f64,
    /// Term in months
    #[arg(long)]
    pub term: u32,
    /// Annual rate in percent; defaults to the configured rate
    #[arg(long)]
    pub rate: Option<f64>,
    /// Monthly income, to report affordability
    #[arg(long)]
    pub income: Option<f64>,
    #[arg(long, default_value = ".")]
    pub root: PathBuf,
}
