use super::domain::{Player, RoleFormula};
use serde::Serialize;
use thiserror::Error;

/// Why a (player, role) pair produced no score.
#[derive(Debug, Clone, PartialEq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EvaluationFailure {
    #[error("term {term} of role `{role}` cannot be averaged")]
    EmptyTerm { role: String, term: usize },
    #[error("attribute `{attribute}` has non-finite value {value} for role `{role}`")]
    NonFiniteAttribute {
        role: String,
        attribute: String,
        value: f64,
    },
    #[error("role `{role}` produced a non-finite score")]
    NonFiniteScore { role: String },
}

/// Scores one player against one formula, rounded to two decimals.
///
/// Missing attributes count as zero. Term contributions are accumulated left to
/// right so results match the authored expression order exactly.
pub fn evaluate(formula: &RoleFormula, player: &Player) -> Result<f64, EvaluationFailure> {
    let mut score = 0.0_f64;

    for (index, term) in formula.terms.iter().enumerate() {
        let divisor = term.divisor();
        if term.attributes.is_empty() || divisor == 0.0 {
            return Err(EvaluationFailure::EmptyTerm {
                role: formula.name.clone(),
                term: index,
            });
        }

        let mut sum = 0.0_f64;
        for code in &term.attributes {
            let value = player.attributes.resolve(code);
            if !value.is_finite() {
                return Err(EvaluationFailure::NonFiniteAttribute {
                    role: formula.name.clone(),
                    attribute: code.clone(),
                    value,
                });
            }
            sum += value;
        }
        score += sum / divisor * term.weight;
    }

    if !score.is_finite() {
        return Err(EvaluationFailure::NonFiniteScore {
            role: formula.name.clone(),
        });
    }
    Ok(round_score(score))
}

/// Rounds half-to-even on the exact binary value, to two decimal places.
pub fn round_score(value: f64) -> f64 {
    format!("{value:.2}").parse().unwrap_or(value)
}
