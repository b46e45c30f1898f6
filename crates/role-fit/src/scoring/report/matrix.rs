use super::rankings::RankedPair;
use crate::scoring::catalogue::RoleGroups;
use crate::scoring::domain::{RoleGroup, ScoredPair};
use serde::Serialize;
use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatrixColumn {
    pub role: String,
    pub group: RoleGroup,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatrixRow<T> {
    pub player: String,
    pub cells: Vec<Option<T>>,
}

/// Players down, roles across. Cells without a scored pair stay `None`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PivotMatrix<T> {
    pub columns: Vec<MatrixColumn>,
    pub rows: Vec<MatrixRow<T>>,
}

pub type ScoreMatrix = PivotMatrix<f64>;
pub type RankMatrix = PivotMatrix<usize>;

impl ScoreMatrix {
    pub fn from_pairs(
        players: &[String],
        roles: &[String],
        pairs: &[ScoredPair],
        groups: &RoleGroups,
    ) -> Self {
        pivot(
            players,
            roles,
            groups,
            pairs
                .iter()
                .map(|pair| (pair.player.as_str(), pair.role.as_str(), pair.score)),
        )
    }

    /// Column indices holding each row's maximum, ties included.
    pub fn row_maxima(&self) -> Vec<Vec<usize>> {
        self.rows
            .iter()
            .map(|row| {
                let best = row
                    .cells
                    .iter()
                    .flatten()
                    .copied()
                    .fold(None, |best: Option<f64>, score| match best {
                        Some(current) if current >= score => Some(current),
                        _ => Some(score),
                    });
                match best {
                    Some(best) => row
                        .cells
                        .iter()
                        .enumerate()
                        .filter(|(_, cell)| **cell == Some(best))
                        .map(|(index, _)| index)
                        .collect(),
                    None => Vec::new(),
                }
            })
            .collect()
    }
}

impl RankMatrix {
    pub fn from_ranked(
        players: &[String],
        roles: &[String],
        ranked: &[RankedPair],
        groups: &RoleGroups,
    ) -> Self {
        pivot(
            players,
            roles,
            groups,
            ranked
                .iter()
                .map(|pair| (pair.player.as_str(), pair.role.as_str(), pair.rank)),
        )
    }
}

impl<T: Copy> PivotMatrix<T> {
    pub fn cell(&self, player: &str, role: &str) -> Option<T> {
        let column = self.columns.iter().position(|column| column.role == role)?;
        self.rows
            .iter()
            .find(|row| row.player == player)
            .and_then(|row| row.cells[column])
    }

    pub fn players(&self) -> Vec<&str> {
        self.rows.iter().map(|row| row.player.as_str()).collect()
    }

    /// Keeps only the named players, preserving row order.
    pub fn retain_players(&self, keep: &HashSet<String>) -> Self {
        Self {
            columns: self.columns.clone(),
            rows: self
                .rows
                .iter()
                .filter(|row| keep.contains(&row.player))
                .cloned()
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() || self.columns.is_empty()
    }
}

fn pivot<'a, T: Copy>(
    players: &[String],
    roles: &[String],
    groups: &RoleGroups,
    entries: impl Iterator<Item = (&'a str, &'a str, T)>,
) -> PivotMatrix<T> {
    let mut ordered: Vec<&str> = roles.iter().map(String::as_str).collect();
    groups.sort_roles(&mut ordered);

    let column_of: HashMap<&str, usize> = ordered
        .iter()
        .enumerate()
        .map(|(index, role)| (*role, index))
        .collect();
    let row_of: HashMap<&str, usize> = players
        .iter()
        .enumerate()
        .map(|(index, player)| (player.as_str(), index))
        .collect();

    let mut rows: Vec<MatrixRow<T>> = players
        .iter()
        .map(|player| MatrixRow {
            player: player.clone(),
            cells: vec![None; ordered.len()],
        })
        .collect();
    for (player, role, value) in entries {
        if let (Some(&row), Some(&column)) = (row_of.get(player), column_of.get(role)) {
            rows[row].cells[column] = Some(value);
        }
    }

    PivotMatrix {
        columns: ordered
            .into_iter()
            .map(|role| MatrixColumn {
                role: role.to_string(),
                group: groups.group_of(role),
            })
            .collect(),
        rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn columns_follow_group_order_and_missing_cells_stay_empty() {
        let players = names(&["Smith", "Jones"]);
        let roles = names(&["Poach At", "CM Su", "CB D"]);
        let pairs = vec![
            ScoredPair::new("Smith", "Poach At", 13.9),
            ScoredPair::new("Smith", "CB D", 8.1),
            ScoredPair::new("Jones", "CM Su", 12.0),
        ];
        let matrix = ScoreMatrix::from_pairs(&players, &roles, &pairs, &RoleGroups::standard());

        let columns: Vec<&str> = matrix.columns.iter().map(|column| column.role.as_str()).collect();
        assert_eq!(columns, vec!["CB D", "CM Su", "Poach At"]);
        assert_eq!(matrix.rows[0].cells, vec![Some(8.1), None, Some(13.9)]);
        assert_eq!(matrix.cell("Jones", "CM Su"), Some(12.0));
        assert_eq!(matrix.cell("Jones", "CB D"), None);
    }

    #[test]
    fn row_maxima_include_ties_and_skip_empty_rows() {
        let players = names(&["Smith", "Ghost"]);
        let roles = names(&["Anc", "Reg", "DM D"]);
        let pairs = vec![
            ScoredPair::new("Smith", "Anc", 14.0),
            ScoredPair::new("Smith", "Reg", 9.5),
            ScoredPair::new("Smith", "DM D", 14.0),
        ];
        let matrix = ScoreMatrix::from_pairs(&players, &roles, &pairs, &RoleGroups::standard());

        let maxima = matrix.row_maxima();
        assert_eq!(maxima[0], vec![0, 1]);
        assert!(maxima[1].is_empty());
    }

    #[test]
    fn retain_players_keeps_row_order() {
        let players = names(&["A", "B", "C"]);
        let roles = names(&["Anc"]);
        let pairs = vec![
            ScoredPair::new("A", "Anc", 1.0),
            ScoredPair::new("B", "Anc", 2.0),
            ScoredPair::new("C", "Anc", 3.0),
        ];
        let matrix = ScoreMatrix::from_pairs(&players, &roles, &pairs, &RoleGroups::standard());
        let keep: HashSet<String> = ["C".to_string(), "A".to_string()].into_iter().collect();

        assert_eq!(matrix.retain_players(&keep).players(), vec!["A", "C"]);
    }
}
