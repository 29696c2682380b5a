use crate::types::application::ApplicationDraft;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

/// Checks every required-field and positivity rule and reports all
/// violations in field-declaration order.
pub fn validate(draft: &ApplicationDraft) -> ValidationReport {
    let mut errors = Vec::new();

    if draft
        .applicant_name
        .as_deref()
        .map(|name| name.trim().is_empty())
        .unwrap_or(true)
    {
        errors.push("Applicant name is required".to_string());
    }
    if !is_positive(draft.applicant_income) {
        errors.push("Applicant income must be greater than 0".to_string());
    }
    if !is_positive(draft.loan_amount) {
        errors.push("Loan amount must be greater than 0".to_string());
    }
    match draft.loan_term {
        Some(term) if !is_whole(term) => {
            errors.push("Loan term must be a whole number of months".to_string())
        }
        Some(term) if term > 0.0 => {}
        _ => errors.push("Loan term must be greater than 0".to_string()),
    }
    match draft.dependents {
        Some(count) if !is_whole(count) => {
            errors.push("Number of dependents must be a whole number".to_string())
        }
        Some(count) if count >= 0.0 => {}
        _ => errors.push("Number of dependents must be 0 or greater".to_string()),
    }
    if draft.credit_history.is_none() {
        errors.push("Credit history is required".to_string());
    }

    ValidationReport {
        is_valid: errors.is_empty(),
        errors,
    }
}

fn is_positive(value: Option<f64>) -> bool {
    value
        .map(|amount| amount.is_finite() && amount > 0.0)
        .unwrap_or(false)
}

fn is_whole(value: f64) -> bool {
    value.is_finite() && value.fract() == 0.0
}
