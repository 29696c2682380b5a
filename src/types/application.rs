use crate::error::{LoanError, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Education {
    Graduate,
    #[serde(rename = "Not Graduate")]
    NotGraduate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelfEmployed {
    Yes,
    No,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PropertyArea {
    Urban,
    Semiurban,
    Rural,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MaritalStatus {
    Married,
    Single,
}

/// Credit history flag, carried on the wire as `1` (good) or `0` (poor).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum CreditHistory {
    Poor,
    Good,
}

impl CreditHistory {
    pub fn as_factor(self) -> f64 {
        match self {
            CreditHistory::Poor => 0.0,
            CreditHistory::Good => 1.0,
        }
    }
}

impl TryFrom<u8> for CreditHistory {
    type Error = String;

    fn try_from(value: u8) -> std::result::Result<Self, Self::Error> {
        match value {
            0 => Ok(CreditHistory::Poor),
            1 => Ok(CreditHistory::Good),
            other => Err(format!("creditHistory must be 0 or 1 (found {other})")),
        }
    }
}

impl From<CreditHistory> for u8 {
    fn from(value: CreditHistory) -> Self {
        match value {
            CreditHistory::Poor => 0,
            CreditHistory::Good => 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanApplication {
    pub applicant_name: String,
    pub applicant_income: f64,
    pub coapplicant_income: f64,
    pub loan_amount: f64,
    pub loan_term: u32,
    pub credit_history: CreditHistory,
    pub dependents: u32,
    pub education: Education,
    pub self_employed: SelfEmployed,
    pub property_area: PropertyArea,
    pub marital_status: MaritalStatus,
}

impl LoanApplication {
    pub fn total_income(&self) -> f64 {
        self.applicant_income + self.coapplicant_income
    }
}

/// A submitted application before validation. Every field may be absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApplicationDraft {
    pub applicant_name: Option<String>,
    pub applicant_income: Option<f64>,
    pub coapplicant_income: Option<f64>,
    pub loan_amount: Option<f64>,
    pub loan_term: Option<f64>,
    pub credit_history: Option<CreditHistory>,
    pub dependents: Option<f64>,
    pub education: Option<Education>,
    pub self_employed: Option<SelfEmployed>,
    pub property_area: Option<PropertyArea>,
    pub marital_status: Option<MaritalStatus>,
}

impl ApplicationDraft {
    /// Runs the validator and converts the draft into a complete application.
    pub fn into_application(self) -> Result<LoanApplication> {
        let report = crate::validate::validate(&self);
        if !report.is_valid {
            return Err(LoanError::Validation(report.errors));
        }

        let coapplicant_income = self.coapplicant_income.unwrap_or(0.0);
        if !coapplicant_income.is_finite() || coapplicant_income < 0.0 {
            return Err(LoanError::InvalidInput(format!(
                "coapplicantIncome must be 0 or greater (found {coapplicant_income})"
            )));
        }

        let loan_term = whole_count(self.loan_term, "loanTerm")?;
        let dependents = whole_count(self.dependents, "dependents")?;

        Ok(LoanApplication {
            applicant_name: required(self.applicant_name, "applicantName")?
                .trim()
                .to_string(),
            applicant_income: required(self.applicant_income, "applicantIncome")?,
            coapplicant_income,
            loan_amount: required(self.loan_amount, "loanAmount")?,
            loan_term,
            credit_history: required(self.credit_history, "creditHistory")?,
            dependents,
            education: required(self.education, "education")?,
            self_employed: required(self.self_employed, "selfEmployed")?,
            property_area: required(self.property_area, "propertyArea")?,
            marital_status: required(self.marital_status, "maritalStatus")?,
        })
    }
}

fn required<T>(value: Option<T>, field: &str) -> Result<T> {
    value.ok_or_else(|| LoanError::MissingField(field.to_string()))
}

/// JSON numbers arrive as `f64`; counts must be whole and fit in a `u32`.
fn whole_count(value: Option<f64>, field: &str) -> Result<u32> {
    let value = required(value, field)?;
    if value.fract() != 0.0 || !(0.0..=f64::from(u32::MAX)).contains(&value) {
        return Err(LoanError::InvalidInput(format!(
            "{field} is out of range (found {value})"
        )));
    }
    Ok(value as u32)
}
