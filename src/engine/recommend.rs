use crate::types::application::{CreditHistory, LoanApplication};

pub const IMPROVE_CREDIT: &str = "Improve your credit history by paying bills on time";
pub const RAISE_INCOME: &str = "Consider increasing your income or adding a co-applicant";
pub const REDUCE_LOAN: &str = "Consider reducing the loan amount";
pub const LOOKS_STRONG: &str = "Your application looks strong!";
pub const BETTER_RATES: &str = "You may qualify for better interest rates";

const LOW_INCOME_THRESHOLD: f64 = 50_000.0;
const MAX_LOAN_TO_INCOME: f64 = 3.0;
const STRONG_SCORE: f64 = 80.0;

pub fn recommendations(
    application: &LoanApplication,
    total_income: f64,
    overall_score: f64,
) -> Vec<String> {
    let mut out = Vec::new();

    if !super::is_approved(overall_score) {
        if application.credit_history == CreditHistory::Poor {
            out.push(IMPROVE_CREDIT.to_string());
        }
        if application.applicant_income < LOW_INCOME_THRESHOLD {
            out.push(RAISE_INCOME.to_string());
        }
        if application.loan_amount / total_income > MAX_LOAN_TO_INCOME {
            out.push(REDUCE_LOAN.to_string());
        }
    } else {
        out.push(LOOKS_STRONG.to_string());
        if overall_score > STRONG_SCORE {
            out.push(BETTER_RATES.to_string());
        }
    }

    out
}
