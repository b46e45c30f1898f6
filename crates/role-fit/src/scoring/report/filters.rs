use super::rankings::RankedPair;
use crate::scoring::domain::ScoredPair;
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FilterError {
    #[error("score range bounds must be finite (got {min}..={max})")]
    NonFinite { min: f64, max: f64 },
    #[error("score range minimum {min} exceeds maximum {max}")]
    Inverted { min: f64, max: f64 },
}

/// Closed score interval, inclusive at both ends.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreRange {
    min: f64,
    max: f64,
}

impl ScoreRange {
    pub fn new(min: f64, max: f64) -> Result<Self, FilterError> {
        if !min.is_finite() || !max.is_finite() {
            return Err(FilterError::NonFinite { min, max });
        }
        if min > max {
            return Err(FilterError::Inverted { min, max });
        }
        Ok(Self { min, max })
    }

    /// Smallest range covering every score, `None` without data.
    pub fn spanning(pairs: &[ScoredPair]) -> Option<Self> {
        let mut scores = pairs.iter().map(|pair| pair.score);
        let first = scores.next()?;
        let (min, max) = scores.fold((first, first), |(min, max), score| {
            (min.min(score), max.max(score))
        });
        Some(Self { min, max })
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn contains(&self, score: f64) -> bool {
        self.min <= score && score <= self.max
    }
}

/// Players with at least one score inside `range`, in first-seen order.
pub fn players_in_range(pairs: &[ScoredPair], range: &ScoreRange) -> Vec<String> {
    let mut seen = HashSet::new();
    pairs
        .iter()
        .filter(|pair| range.contains(pair.score))
        .filter(|pair| seen.insert(pair.player.as_str()))
        .map(|pair| pair.player.clone())
        .collect()
}

/// Players whose best rank in every role they hold is worse than `top_n`.
/// Players without any scored pair are not listed.
pub fn players_outside_top(ranked: &[RankedPair], top_n: usize) -> Vec<String> {
    let mut order: Vec<&str> = Vec::new();
    let mut best: HashMap<&str, usize> = HashMap::new();
    for pair in ranked {
        best.entry(pair.player.as_str())
            .and_modify(|rank| *rank = (*rank).min(pair.rank))
            .or_insert_with(|| {
                order.push(pair.player.as_str());
                pair.rank
            });
    }

    order
        .into_iter()
        .filter(|player| best.get(player).is_some_and(|rank| *rank > top_n))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::report::rankings::rank_per_role;

    fn sample() -> Vec<ScoredPair> {
        vec![
            ScoredPair::new("A", "Anc", 5.0),
            ScoredPair::new("B", "Anc", 12.0),
        ]
    }

    #[test]
    fn degenerate_range_is_valid_and_inclusive() {
        let range = ScoreRange::new(5.0, 5.0).expect("single point range");
        assert_eq!(players_in_range(&sample(), &range), vec!["A"]);

        let wide = ScoreRange::new(0.0, 100.0).expect("wide range");
        assert_eq!(players_in_range(&sample(), &wide), vec!["A", "B"]);
    }

    #[test]
    fn rejects_inverted_and_non_finite_bounds() {
        assert!(matches!(
            ScoreRange::new(6.0, 5.0),
            Err(FilterError::Inverted { .. })
        ));
        assert!(matches!(
            ScoreRange::new(f64::NAN, 5.0),
            Err(FilterError::NonFinite { .. })
        ));
    }

    #[test]
    fn spanning_covers_all_scores() {
        let range = ScoreRange::spanning(&sample()).expect("range from data");
        assert_eq!((range.min(), range.max()), (5.0, 12.0));
        assert!(ScoreRange::spanning(&[]).is_none());
    }

    #[test]
    fn outside_top_excludes_anyone_ranked_inside() {
        let pairs = vec![
            ScoredPair::new("A", "Anc", 15.0),
            ScoredPair::new("B", "Anc", 12.0),
            ScoredPair::new("C", "Anc", 9.0),
            ScoredPair::new("A", "Reg", 4.0),
            ScoredPair::new("B", "Reg", 6.0),
            ScoredPair::new("C", "Reg", 5.0),
        ];
        let ranked = rank_per_role(&pairs);
        assert_eq!(players_outside_top(&ranked, 1), vec!["C"]);
        assert!(players_outside_top(&ranked, 3).is_empty());
    }
}
