pub mod json;
pub mod md;

use crate::error::LoanError;
use crate::types::history::HistoryItem;
use crate::types::prediction::{PredictionResult, ScoreBreakdown};

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Md,
}

pub fn render_prediction(
    result: &PredictionResult,
    breakdown: Option<&ScoreBreakdown>,
    format: OutputFormat,
) -> Result<String, LoanError> {
    match format {
        OutputFormat::Json => json::prediction_to_json(result, breakdown).map_err(LoanError::Json),
        OutputFormat::Md => Ok(md::prediction_to_markdown(result, breakdown)),
    }
}

pub fn render_history(items: &[HistoryItem], format: OutputFormat) -> Result<String, LoanError> {
    match format {
        OutputFormat::Json => json::history_to_json(items).map_err(LoanError::Json),
        OutputFormat::Md => Ok(md::history_to_markdown(items)),
    }
}
