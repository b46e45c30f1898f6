use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Display bucket used to order role columns. Never affects scores.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum RoleGroup {
    Defensive,
    #[default]
    Midfield,
    Attacking,
}

impl RoleGroup {
    pub const fn ordered() -> [Self; 3] {
        [Self::Defensive, Self::Midfield, Self::Attacking]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Defensive => "Defensive",
            Self::Midfield => "Midfield",
            Self::Attacking => "Attacking",
        }
    }
}

/// Tactical emphasis encoded as the trailing token of a role name ("CB De", "IF A").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Duty {
    Attack,
    Support,
    Defend,
    Cover,
    Stopper,
}

impl Duty {
    pub fn from_suffix(token: &str) -> Option<Self> {
        match token {
            "At" | "A" => Some(Self::Attack),
            "Su" | "S" => Some(Self::Support),
            "De" | "D" => Some(Self::Defend),
            "Co" => Some(Self::Cover),
            "St" => Some(Self::Stopper),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Attack => "Attack",
            Self::Support => "Support",
            Self::Defend => "Defend",
            Self::Cover => "Cover",
            Self::Stopper => "Stopper",
        }
    }
}

/// Attribute ratings keyed by short code ("Fin", "Pac", "Det").
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttributeStore {
    ratings: BTreeMap<String, f64>,
}

impl AttributeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, code: impl Into<String>, value: f64) {
        self.ratings.insert(code.into(), value);
    }

    pub fn get(&self, code: &str) -> Option<f64> {
        self.ratings.get(code).copied()
    }

    /// Missing codes resolve to zero.
    pub fn resolve(&self, code: &str) -> f64 {
        self.get(code).unwrap_or(0.0)
    }

    pub fn len(&self) -> usize {
        self.ratings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ratings.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.ratings
            .iter()
            .map(|(code, value)| (code.as_str(), *value))
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for AttributeStore {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        let mut store = Self::new();
        for (code, value) in iter {
            store.insert(code, value);
        }
        store
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    #[serde(default)]
    pub attributes: AttributeStore,
}

impl Player {
    pub fn new(name: impl Into<String>, attributes: AttributeStore) -> Self {
        Self {
            name: name.into(),
            attributes,
        }
    }

    pub fn with_ratings<K, I>(name: impl Into<String>, ratings: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, f64)>,
    {
        Self::new(name, ratings.into_iter().collect())
    }
}

/// Players keyed by name. A repeated name replaces the earlier ratings but keeps
/// the slot of its first appearance.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    players: Vec<Player>,
    index: HashMap<String, usize>,
    collisions: usize,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_players(players: impl IntoIterator<Item = Player>) -> Self {
        let mut roster = Self::new();
        for player in players {
            roster.upsert(player);
        }
        roster
    }

    /// Returns `true` when an existing player with the same name was replaced.
    pub(crate) fn upsert(&mut self, player: Player) -> bool {
        match self.index.get(&player.name) {
            Some(&slot) => {
                self.players[slot] = player;
                self.collisions += 1;
                true
            }
            None => {
                self.index.insert(player.name.clone(), self.players.len());
                self.players.push(player);
                false
            }
        }
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn get(&self, name: &str) -> Option<&Player> {
        self.index.get(name).map(|&slot| &self.players[slot])
    }

    pub fn names(&self) -> Vec<String> {
        self.players.iter().map(|player| player.name.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Number of rows that overwrote an earlier player with the same name.
    pub fn collisions(&self) -> usize {
        self.collisions
    }
}

/// One weighted sub-average of a role formula.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormulaTerm {
    pub attributes: Vec<String>,
    pub weight: f64,
    /// Overrides the attribute count as the averaging divisor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub divisor: Option<u32>,
}

impl FormulaTerm {
    pub fn divisor(&self) -> f64 {
        match self.divisor {
            Some(divisor) => f64::from(divisor),
            None => self.attributes.len() as f64,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoleFormula {
    pub name: String,
    pub terms: Vec<FormulaTerm>,
}

impl RoleFormula {
    pub fn weight_total(&self) -> f64 {
        self.terms.iter().map(|term| term.weight).sum()
    }

    pub fn duty(&self) -> Option<Duty> {
        self.name
            .rsplit_once(' ')
            .and_then(|(_, suffix)| Duty::from_suffix(suffix))
    }

    pub fn family(&self) -> &str {
        role_family(&self.name)
    }
}

/// Role name without its duty suffix ("Pre Fwd At" -> "Pre Fwd").
pub fn role_family(name: &str) -> &str {
    match name.rsplit_once(' ') {
        Some((family, suffix)) if Duty::from_suffix(suffix).is_some() => family,
        _ => name,
    }
}

/// Atomic unit of a scoring run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredPair {
    pub player: String,
    pub role: String,
    pub score: f64,
}

impl ScoredPair {
    pub fn new(player: impl Into<String>, role: impl Into<String>, score: f64) -> Self {
        Self {
            player: player.into(),
            role: role.into(),
            score,
        }
    }
}
