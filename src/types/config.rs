use crate::calculator::DEFAULT_ANNUAL_RATE;
use crate::error::LoanError;
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_HISTORY_DIR: &str = ".loanscore";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoanscoreConfig {
    pub history: Option<HistoryConfig>,
    pub calculator: Option<CalculatorConfig>,
    pub scoring: Option<ScoringConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HistoryConfig {
    pub dir: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CalculatorConfig {
    pub annual_rate: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScoringConfig {
    pub seed: Option<u64>,
}

impl LoanscoreConfig {
    pub fn history_dir(&self, root: &Path) -> PathBuf {
        let dir = self
            .history
            .as_ref()
            .and_then(|history| history.dir.as_deref())
            .unwrap_or(DEFAULT_HISTORY_DIR);
        let candidate = PathBuf::from(dir);
        if candidate.is_absolute() {
            candidate
        } else {
            root.join(candidate)
        }
    }

    pub fn annual_rate(&self) -> f64 {
        self.calculator
            .as_ref()
            .and_then(|calculator| calculator.annual_rate)
            .unwrap_or(DEFAULT_ANNUAL_RATE)
    }

    pub fn seed(&self) -> Option<u64> {
        self.scoring.as_ref().and_then(|scoring| scoring.seed)
    }

    pub fn validate(&self) -> Result<(), LoanError> {
        if let Some(dir) = self.history.as_ref().and_then(|history| history.dir.as_ref()) {
            if dir.trim().is_empty() {
                return Err(LoanError::ConfigParse(
                    "history.dir must not be blank".to_string(),
                ));
            }
        }

        let rate = self.annual_rate();
        if !rate.is_finite() || rate < 0.0 {
            return Err(LoanError::ConfigParse(format!(
                "calculator.annual_rate must be a non-negative number (found {rate})"
            )));
        }

        Ok(())
    }
}
