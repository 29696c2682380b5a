use crate::types::application::LoanApplication;
use crate::types::prediction::PredictionResult;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryItem {
    pub id: String,
    pub applicant_name: String,
    pub application: LoanApplication,
    pub result: PredictionResult,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct HistorySummary {
    pub total: usize,
    pub approved: usize,
    pub declined: usize,
}

impl HistorySummary {
    pub fn from_items(items: &[HistoryItem]) -> Self {
        let approved = items.iter().filter(|item| item.result.approved).count();
        Self {
            total: items.len(),
            approved,
            declined: items.len() - approved,
        }
    }
}
