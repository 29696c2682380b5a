use crate::types::history::{HistoryItem, HistorySummary};
use crate::types::prediction::{PredictionResult, ScoreBreakdown};

pub fn prediction_to_markdown(
    result: &PredictionResult,
    breakdown: Option<&ScoreBreakdown>,
) -> String {
    let mut output = String::new();
    output.push_str("# Loan Decision\n\n");
    output.push_str(&format!(
        "Decision: {}\n\n",
        if result.approved {
            "APPROVED"
        } else {
            "DECLINED"
        }
    ));
    output.push_str(&format!("Confidence: {}%\n\n", result.confidence));
    output.push_str(&format!(
        "Risk score: {} ({})\n\n",
        result.risk_score,
        result.risk_level().describe()
    ));

    output.push_str("## Factors\n\n");
    output.push_str(&format!(
        "- income: {}\n- credit_history: {}\n- loan_to_income: {}\n- overall: {}\n\n",
        result.factors.income,
        result.factors.credit_history,
        result.factors.loan_to_income,
        result.factors.overall
    ));

    if let Some(breakdown) = breakdown {
        output.push_str("## Breakdown\n\n");
        output.push_str(&format!(
            "- total_income: {:.2}\n- monthly_income: {:.2}\n- loan_to_income_ratio: {:.3}\n- monthly_payment: {:.2}\n- payment_to_income_ratio: {:.3}\n",
            breakdown.total_income,
            breakdown.monthly_income,
            breakdown.loan_to_income_ratio,
            breakdown.monthly_payment,
            breakdown.payment_to_income_ratio
        ));
        output.push_str(&format!(
            "- payment_affordability_score: {:.2}\n- education_bonus: {}\n- employment_bonus: {}\n- property_area_score: {}\n- dependents_penalty: {}\n- overall_score: {:.3}\n\n",
            breakdown.payment_affordability_score,
            breakdown.education_bonus,
            breakdown.employment_bonus,
            breakdown.property_area_score,
            breakdown.dependents_penalty,
            breakdown.overall_score
        ));
    }

    output.push_str("## Recommendations\n\n");
    if result.recommendations.is_empty() {
        output.push_str("- none\n");
    } else {
        for recommendation in &result.recommendations {
            output.push_str(&format!("- {recommendation}\n"));
        }
    }

    output
}

pub fn history_to_markdown(items: &[HistoryItem]) -> String {
    let summary = HistorySummary::from_items(items);
    let mut output = String::new();
    output.push_str(&format!("# Application History ({})\n\n", summary.total));

    if items.is_empty() {
        output.push_str("- none\n");
        return output;
    }

    output.push_str(&format!(
        "Approved: {} | Declined: {}\n\n",
        summary.approved, summary.declined
    ));
    for item in items {
        output.push_str(&format!(
            "- {} [{}] {} | income {:.0} | loan {:.0} | term {} months | confidence {}% | {}\n",
            item.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            if item.result.approved {
                "approved"
            } else {
                "declined"
            },
            item.applicant_name,
            item.application.applicant_income,
            item.application.loan_amount,
            item.application.loan_term,
            item.result.confidence,
            item.id
        ));
    }

    output
}
