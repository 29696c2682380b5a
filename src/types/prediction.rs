use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FactorScores {
    pub income: u8,
    pub credit_history: u8,
    pub loan_to_income: u8,
    pub overall: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionResult {
    pub approved: bool,
    pub confidence: u8,
    pub risk_score: u8,
    pub factors: FactorScores,
    #[serde(default)]
    pub recommendations: Vec<String>,
}

impl PredictionResult {
    pub fn risk_level(&self) -> RiskLevel {
        RiskLevel::from_risk_score(self.risk_score)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
}

impl RiskLevel {
    pub fn from_risk_score(risk_score: u8) -> Self {
        match risk_score {
            0..=30 => RiskLevel::Low,
            31..=60 => RiskLevel::Moderate,
            _ => RiskLevel::High,
        }
    }

    pub fn describe(self) -> &'static str {
        match self {
            RiskLevel::Low => "Low Risk - Excellent candidate",
            RiskLevel::Moderate => "Moderate Risk - Good candidate with some concerns",
            RiskLevel::High => "High Risk - Significant concerns identified",
        }
    }
}

/// Every intermediate term behind an overall score, before rounding.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub total_income: f64,
    pub monthly_income: f64,
    pub loan_to_income_ratio: f64,
    pub monthly_payment: f64,
    pub payment_to_income_ratio: f64,
    pub income_score: f64,
    pub credit_score: f64,
    pub loan_to_income_score: f64,
    pub payment_affordability_score: f64,
    pub education_bonus: f64,
    pub employment_bonus: f64,
    pub property_area_score: f64,
    pub dependents_penalty: f64,
    pub overall_score: f64,
}
