use super::catalogue::RoleCatalogue;
use super::domain::{Player, Roster, ScoredPair};
use super::evaluator::{evaluate, EvaluationFailure};
use crate::config::ScoringConfig;
use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, warn};

pub const DEFAULT_PARALLEL_THRESHOLD: usize = 2000;

/// A pair that could not be scored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkippedPair {
    pub player: String,
    pub role: String,
    pub failure: EvaluationFailure,
}

/// Outcome of one pass over the player x role space.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ScoringRun {
    /// Player-major, then catalogue order.
    pub pairs: Vec<ScoredPair>,
    pub skipped: Vec<SkippedPair>,
    /// Every roster player in roster order, including ones with no scores.
    pub players: Vec<String>,
    /// Catalogue role names in catalogue order.
    pub roles: Vec<String>,
}

impl ScoringRun {
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoringEngine {
    parallel_threshold: usize,
}

impl Default for ScoringEngine {
    fn default() -> Self {
        Self::new(DEFAULT_PARALLEL_THRESHOLD)
    }
}

impl ScoringEngine {
    /// `threshold` is the number of pairs at which scoring moves onto the rayon pool.
    pub fn new(parallel_threshold: usize) -> Self {
        Self { parallel_threshold }
    }

    pub fn sequential() -> Self {
        Self::new(usize::MAX)
    }

    pub fn parallel() -> Self {
        Self::new(0)
    }

    pub fn from_config(config: &ScoringConfig) -> Self {
        Self::new(config.parallel_threshold)
    }

    pub fn parallel_threshold(&self) -> usize {
        self.parallel_threshold
    }

    pub fn score_all(&self, roster: &Roster, catalogue: &RoleCatalogue) -> ScoringRun {
        let players = roster.players();
        let space = players.len().saturating_mul(catalogue.len());
        let parallel = space > 0 && space >= self.parallel_threshold;
        debug!(
            players = players.len(),
            roles = catalogue.len(),
            parallel,
            "scoring roster"
        );

        let outcomes: Vec<PlayerOutcome> = if parallel {
            players
                .par_iter()
                .map(|player| score_player(player, catalogue))
                .collect()
        } else {
            players
                .iter()
                .map(|player| score_player(player, catalogue))
                .collect()
        };

        let mut run = ScoringRun {
            pairs: Vec::with_capacity(space),
            skipped: Vec::new(),
            players: roster.names(),
            roles: catalogue.names().into_iter().map(str::to_string).collect(),
        };
        for outcome in outcomes {
            run.pairs.extend(outcome.pairs);
            run.skipped.extend(outcome.skipped);
        }

        for skipped in &run.skipped {
            warn!(
                player = %skipped.player,
                role = %skipped.role,
                error = %skipped.failure,
                "skipping unscorable pair"
            );
        }
        debug!(
            pairs = run.pairs.len(),
            skipped = run.skipped.len(),
            "scoring complete"
        );
        run
    }
}

/// Scores every player against every role with the default engine.
pub fn score_all(players: &[Player], catalogue: &RoleCatalogue) -> Vec<ScoredPair> {
    let roster = Roster::from_players(players.iter().cloned());
    ScoringEngine::default().score_all(&roster, catalogue).pairs
}

#[derive(Default)]
struct PlayerOutcome {
    pairs: Vec<ScoredPair>,
    skipped: Vec<SkippedPair>,
}

fn score_player(player: &Player, catalogue: &RoleCatalogue) -> PlayerOutcome {
    let mut outcome = PlayerOutcome {
        pairs: Vec::with_capacity(catalogue.len()),
        skipped: Vec::new(),
    };
    for formula in catalogue.formulas() {
        match evaluate(formula, player) {
            Ok(score) => outcome
                .pairs
                .push(ScoredPair::new(&player.name, &formula.name, score)),
            Err(failure) => outcome.skipped.push(SkippedPair {
                player: player.name.clone(),
                role: formula.name.clone(),
                failure,
            }),
        }
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::catalogue::{RoleDefinition, TermDefinition};

    fn catalogue() -> RoleCatalogue {
        let role = |name: &str, code: &str| RoleDefinition {
            name: name.to_string(),
            terms: vec![TermDefinition {
                attributes: vec![code.to_string()],
                weight: 1.0,
                divisor: None,
            }],
        };
        RoleCatalogue::from_definitions(vec![role("Poach At", "Fin"), role("Anc", "Pos")])
            .expect("catalogue builds")
    }

    #[test]
    fn pairs_are_player_major() {
        let roster = Roster::from_players([
            Player::with_ratings("Smith", [("Fin", 14.0), ("Pos", 9.0)]),
            Player::with_ratings("Jones", [("Fin", 8.0), ("Pos", 16.0)]),
        ]);
        let run = ScoringEngine::sequential().score_all(&roster, &catalogue());

        let order: Vec<(&str, &str)> = run
            .pairs
            .iter()
            .map(|pair| (pair.player.as_str(), pair.role.as_str()))
            .collect();
        assert_eq!(
            order,
            vec![
                ("Smith", "Poach At"),
                ("Smith", "Anc"),
                ("Jones", "Poach At"),
                ("Jones", "Anc"),
            ]
        );
        assert_eq!(run.roles, vec!["Poach At", "Anc"]);
    }

    #[test]
    fn failed_pairs_are_skipped_not_zeroed() {
        let roster = Roster::from_players([Player::with_ratings(
            "Smith",
            [("Fin", f64::NAN), ("Pos", 9.0)],
        )]);
        let run = ScoringEngine::sequential().score_all(&roster, &catalogue());

        assert_eq!(run.pairs, vec![ScoredPair::new("Smith", "Anc", 9.0)]);
        assert_eq!(run.skipped.len(), 1);
        assert_eq!(run.skipped[0].role, "Poach At");
    }

    #[test]
    fn empty_roster_yields_empty_run() {
        let run = ScoringEngine::parallel().score_all(&Roster::new(), &catalogue());
        assert!(run.is_empty());
        assert!(run.players.is_empty());
        assert_eq!(run.roles.len(), 2);
    }
}
