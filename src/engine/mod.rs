pub mod jitter;
pub mod recommend;

use crate::calculator::{self, DEFAULT_ANNUAL_RATE};
use crate::error::{LoanError, Result};
use crate::types::application::{Education, LoanApplication, PropertyArea, SelfEmployed};
use crate::types::prediction::{FactorScores, PredictionResult, ScoreBreakdown};
use jitter::JitterSource;
use tracing::debug;

pub const APPROVAL_THRESHOLD: f64 = 60.0;
pub const MIN_CONFIDENCE: f64 = 55.0;
pub const MAX_CONFIDENCE: f64 = 95.0;

const INCOME_WEIGHT: f64 = 0.30;
const CREDIT_WEIGHT: f64 = 0.25;
const LOAN_TO_INCOME_WEIGHT: f64 = 0.20;
const AFFORDABILITY_WEIGHT: f64 = 0.15;

const FULL_INCOME_SCORE_AT: f64 = 100_000.0;
const RATIO_PENALTY: f64 = 200.0;
const DEPENDENT_PENALTY: f64 = 5.0;

pub fn is_approved(overall_score: f64) -> bool {
    overall_score >= APPROVAL_THRESHOLD
}

pub struct ScoringEngine<J> {
    jitter: J,
}

impl<J: JitterSource> ScoringEngine<J> {
    pub fn new(jitter: J) -> Self {
        Self { jitter }
    }

    /// Scores one application. The only non-deterministic term is the
    /// confidence perturbation drawn from the engine's jitter source.
    pub fn score(&mut self, application: &LoanApplication) -> Result<PredictionResult> {
        let breakdown = breakdown(application)?;
        let overall = breakdown.overall_score;

        let offset = self.jitter.draw();
        let confidence = (overall + offset)
            .clamp(MIN_CONFIDENCE, MAX_CONFIDENCE)
            .round();
        let risk_score = (100.0 - overall).round();

        debug!(
            applicant = %application.applicant_name,
            overall,
            offset,
            "scored application"
        );

        Ok(PredictionResult {
            approved: is_approved(overall),
            confidence: to_score(confidence),
            risk_score: to_score(risk_score),
            factors: FactorScores {
                income: to_score(breakdown.income_score.round()),
                credit_history: to_score(breakdown.credit_score.round()),
                loan_to_income: to_score(breakdown.loan_to_income_score.round()),
                overall: to_score(overall.round()),
            },
            recommendations: recommend::recommendations(
                application,
                breakdown.total_income,
                overall,
            ),
        })
    }
}

/// Computes every scoring term for an application without the jitter.
pub fn breakdown(application: &LoanApplication) -> Result<ScoreBreakdown> {
    let total_income = application.total_income();
    if !total_income.is_finite() || total_income <= 0.0 {
        return Err(LoanError::InvalidInput(format!(
            "total income must be greater than 0 (found {total_income})"
        )));
    }
    let monthly_income = total_income / 12.0;
    let loan_to_income_ratio = finite(
        "loan-to-income ratio",
        application.loan_amount / total_income,
    )?;
    let monthly_payment = calculator::monthly_payment(
        application.loan_amount,
        DEFAULT_ANNUAL_RATE,
        application.loan_term,
    )?;
    let payment_to_income_ratio =
        finite("payment-to-income ratio", monthly_payment / monthly_income)?;

    let income_score = clamp_score(total_income / FULL_INCOME_SCORE_AT * 100.0);
    let credit_score = clamp_score(application.credit_history.as_factor() * 100.0);
    let loan_to_income_score = clamp_score(100.0 - loan_to_income_ratio * RATIO_PENALTY);
    let payment_affordability_score =
        clamp_score(100.0 - payment_to_income_ratio * RATIO_PENALTY);

    let education_bonus = match application.education {
        Education::Graduate => 10.0,
        Education::NotGraduate => 0.0,
    };
    let employment_bonus = match application.self_employed {
        SelfEmployed::No => 10.0,
        SelfEmployed::Yes => 5.0,
    };
    let property_area_score = match application.property_area {
        PropertyArea::Urban => 10.0,
        PropertyArea::Semiurban => 5.0,
        PropertyArea::Rural => 0.0,
    };
    let dependents_penalty = f64::from(application.dependents) * DEPENDENT_PENALTY;

    let overall_score = finite(
        "overall score",
        clamp_score(
            income_score * INCOME_WEIGHT
                + credit_score * CREDIT_WEIGHT
                + loan_to_income_score * LOAN_TO_INCOME_WEIGHT
                + payment_affordability_score * AFFORDABILITY_WEIGHT
                + education_bonus
                + employment_bonus
                + property_area_score
                - dependents_penalty,
        ),
    )?;

    Ok(ScoreBreakdown {
        total_income,
        monthly_income,
        loan_to_income_ratio,
        monthly_payment,
        payment_to_income_ratio,
        income_score,
        credit_score,
        loan_to_income_score,
        payment_affordability_score,
        education_bonus,
        employment_bonus,
        property_area_score,
        dependents_penalty,
        overall_score,
    })
}

fn finite(term: &str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(LoanError::InvalidInput(format!("{term} is not a finite number")))
    }
}

fn clamp_score(value: f64) -> f64 {
    value.clamp(0.0, 100.0)
}

fn to_score(value: f64) -> u8 {
    value.clamp(0.0, 100.0) as u8
}
