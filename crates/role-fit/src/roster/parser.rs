use super::normalizer::{is_name_header, normalize_header, normalize_player_name};
use super::RosterImportError;
use crate::scoring::domain::{AttributeStore, Player};
use std::io::Read;

/// One usable CSV row.
#[derive(Debug)]
pub(crate) struct RosterRecord {
    pub(crate) player: Player,
    pub(crate) ignored_cells: usize,
}

pub(crate) fn parse_records<R: Read>(reader: R) -> Result<Vec<RosterRecord>, RosterImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let headers: Vec<String> = csv_reader
        .headers()?
        .iter()
        .map(normalize_header)
        .collect();
    let name_column = headers
        .iter()
        .position(|header| is_name_header(header))
        .ok_or(RosterImportError::MissingNameColumn)?;

    let mut records = Vec::new();
    for row in csv_reader.records() {
        let row = row?;
        let name = normalize_player_name(row.get(name_column).unwrap_or_default());
        if name.is_empty() {
            continue;
        }

        let mut attributes = AttributeStore::new();
        let mut ignored_cells = 0;
        for (column, cell) in row.iter().enumerate() {
            if column == name_column {
                continue;
            }
            let Some(code) = headers.get(column).filter(|code| !code.is_empty()) else {
                continue;
            };
            match parse_rating(cell) {
                Cell::Rating(value) => attributes.insert(code.as_str(), value),
                Cell::Absent => {}
                Cell::Text => ignored_cells += 1,
            }
        }

        records.push(RosterRecord {
            player: Player::new(name, attributes),
            ignored_cells,
        });
    }

    Ok(records)
}

#[derive(Debug, PartialEq)]
enum Cell {
    Rating(f64),
    Absent,
    Text,
}

/// Empty and `-` cells are absent. Anything `f64` accepts, "NaN" included, is a
/// rating; the rest is descriptive text.
fn parse_rating(cell: &str) -> Cell {
    let trimmed = cell.trim();
    if trimmed.is_empty() || trimmed == "-" {
        return Cell::Absent;
    }
    match trimmed.parse::<f64>() {
        Ok(value) => Cell::Rating(value),
        Err(_) => Cell::Text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn classifies_cells() {
        assert_eq!(parse_rating("15"), Cell::Rating(15.0));
        assert_eq!(parse_rating(" 12.5 "), Cell::Rating(12.5));
        assert!(matches!(parse_rating("NaN"), Cell::Rating(value) if value.is_nan()));
        assert_eq!(parse_rating(""), Cell::Absent);
        assert_eq!(parse_rating("-"), Cell::Absent);
        assert_eq!(parse_rating("Right Only"), Cell::Text);
    }

    #[test]
    fn reads_attributes_around_the_name_column() {
        let records = parse_records(Cursor::new(
            "Inf,name,Fin,Pac,Foot\n,Smith,14,-,Right\n  ,  ,3,4,\n",
        ))
        .expect("parse");

        assert_eq!(records.len(), 1);
        let smith = &records[0];
        assert_eq!(smith.player.name, "Smith");
        assert_eq!(smith.player.attributes.get("Fin"), Some(14.0));
        assert_eq!(smith.player.attributes.get("Pac"), None);
        assert_eq!(smith.player.attributes.get("Foot"), None);
        assert_eq!(smith.ignored_cells, 1);
    }

    #[test]
    fn missing_name_column_is_an_error() {
        let err = parse_records(Cursor::new("Player,Fin\nSmith,14\n")).expect_err("rejected");
        assert!(matches!(err, RosterImportError::MissingNameColumn));
    }
}
