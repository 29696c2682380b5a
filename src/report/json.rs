use crate::types::history::HistoryItem;
use crate::types::prediction::{PredictionResult, ScoreBreakdown};
use serde_json::json;

pub fn prediction_to_json(
    result: &PredictionResult,
    breakdown: Option<&ScoreBreakdown>,
) -> Result<String, serde_json::Error> {
    match breakdown {
        Some(breakdown) => serde_json::to_string_pretty(&json!({
            "result": result,
            "riskLevel": result.risk_level(),
            "breakdown": breakdown,
        })),
        None => serde_json::to_string_pretty(result),
    }
}

pub fn history_to_json(items: &[HistoryItem]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(items)
}
