//! Wire format shared by every stats endpoint

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// One untyped value of a row.
///
/// Numbers always arrive as floats, even for counts (`8.0`). The live API also
/// emits `null` for stats that do not apply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    Number(f64),
    Text(String),
    Null,
}

impl Cell {
    pub fn as_f64(&self) -> f64 {
        match self {
            Cell::Number(n) => *n,
            Cell::Text(s) => s.trim().parse().unwrap_or(0.0),
            Cell::Null => 0.0,
        }
    }

    /// Integer value by truncation of the float (`8.9` → `8`).
    pub fn as_i64(&self) -> i64 {
        self.as_f64() as i64
    }

    pub fn as_text(&self) -> String {
        match self {
            Cell::Text(s) => s.clone(),
            Cell::Number(n) => n.to_string(),
            Cell::Null => String::new(),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Cell::Null)
    }
}

/// A named table: header names plus rows of positional values.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ResultSet {
    #[serde(default)]
    pub name: String,
    pub headers: Vec<String>,
    #[serde(rename = "rowSet")]
    pub row_set: Vec<Vec<Cell>>,
}

impl ResultSet {
    /// Checks `len(row) == len(headers)` for every row.
    ///
    /// The first offending row fails the whole table.
    pub fn validate_rows(&self) -> Result<(), AppError> {
        let expected = self.headers.len();
        for (index, row) in self.row_set.iter().enumerate() {
            if row.len() != expected {
                return Err(AppError::row_length_mismatch(
                    &self.name,
                    index,
                    expected,
                    row.len(),
                ));
            }
        }
        Ok(())
    }
}

/// Top-level document returned by every endpoint.
///
/// Single-table endpoints fill `resultSet`, the others `resultSets`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ResponseEnvelope {
    #[serde(default)]
    pub resource: String,
    #[serde(default)]
    pub parameters: serde_json::Value,
    #[serde(rename = "resultSet", default, skip_serializing_if = "Option::is_none")]
    pub result_set: Option<ResultSet>,
    #[serde(rename = "resultSets", default, skip_serializing_if = "Option::is_none")]
    pub result_sets: Option<Vec<ResultSet>>,
}

impl ResponseEnvelope {
    /// Parses raw response or cache bytes.
    pub fn decode(bytes: &[u8]) -> Result<Self, AppError> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// The table of a single-table endpoint.
    pub fn single_table(&self) -> Result<&ResultSet, AppError> {
        self.result_set
            .as_ref()
            .ok_or_else(|| AppError::no_data(format!("'{}' has no resultSet", self.resource)))
    }

    /// Finds a table by its `name` among `resultSets` (or the lone `resultSet`).
    pub fn table_named(&self, name: &str) -> Result<&ResultSet, AppError> {
        self.result_sets
            .iter()
            .flatten()
            .chain(self.result_set.iter())
            .find(|t| t.name == name)
            .ok_or_else(|| {
                AppError::no_data(format!("table '{name}' not found in '{}'", self.resource))
            })
    }

    /// Table at a fixed position in `resultSets`, for endpoints whose tables
    /// are identified by order.
    pub fn table_at(&self, index: usize) -> Result<&ResultSet, AppError> {
        self.result_sets
            .as_ref()
            .and_then(|sets| sets.get(index))
            .ok_or_else(|| {
                AppError::no_data(format!(
                    "resultSets[{index}] not present in '{}'",
                    self.resource
                ))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SINGLE: &str = r#"{
        "resource": "leagueleaders",
        "parameters": {"LeagueID": "00"},
        "resultSet": {
            "name": "LeagueLeaders",
            "headers": ["PLAYER_ID", "PLAYER", "PTS"],
            "rowSet": [[1629029, "Luka Doncic", 33.9], [203507, "Giannis", null]]
        }
    }"#;

    const MULTI: &str = r#"{
        "resource": "scoreboardv2",
        "parameters": [],
        "resultSets": [
            {"name": "GameHeader", "headers": ["GAME_ID"], "rowSet": [["0022400061"]]},
            {"name": "LineScore", "headers": ["TEAM_ID"], "rowSet": []}
        ]
    }"#;

    #[test]
    fn test_decode_single_table() {
        let env = ResponseEnvelope::decode(SINGLE.as_bytes()).unwrap();
        let table = env.single_table().unwrap();
        assert_eq!(table.name, "LeagueLeaders");
        assert_eq!(table.row_set[0][2], Cell::Number(33.9));
        assert!(table.row_set[1][2].is_null());
        assert!(env.result_sets.is_none());
    }

    #[test]
    fn test_decode_multi_table_by_name_and_index() {
        let env = ResponseEnvelope::decode(MULTI.as_bytes()).unwrap();
        assert_eq!(env.table_named("LineScore").unwrap().headers, vec!["TEAM_ID"]);
        assert_eq!(env.table_at(0).unwrap().name, "GameHeader");
        assert!(env.table_at(2).unwrap_err().is_no_data());
        assert!(env.single_table().unwrap_err().is_no_data());
    }

    #[test]
    fn test_decode_rejects_invalid_json() {
        let err = ResponseEnvelope::decode(b"<html>blocked</html>").unwrap_err();
        assert!(matches!(err, AppError::DecodeMalformed(_)));
    }

    #[test]
    fn test_decode_rejects_wrong_shape() {
        let err =
            ResponseEnvelope::decode(br#"{"resultSet": {"headers": "PTS", "rowSet": []}}"#)
                .unwrap_err();
        assert!(matches!(err, AppError::DecodeMalformed(_)));
    }

    #[test]
    fn test_cell_coercions() {
        assert_eq!(Cell::Number(8.0).as_i64(), 8);
        assert_eq!(Cell::Number(8.9).as_i64(), 8);
        assert_eq!(Cell::Number(-2.5).as_i64(), -2);
        assert_eq!(Cell::Text("12".to_string()).as_i64(), 12);
        assert_eq!(Cell::Text("Guard".to_string()).as_text(), "Guard");
        assert_eq!(Cell::Number(23.0).as_text(), "23");
        assert_eq!(Cell::Null.as_f64(), 0.0);
        assert_eq!(Cell::Null.as_text(), "");
    }

    #[test]
    fn test_validate_rows_reports_lengths() {
        let table = ResultSet {
            name: "T".to_string(),
            headers: vec!["A".to_string(), "B".to_string()],
            row_set: vec![
                vec![Cell::Number(1.0), Cell::Number(2.0)],
                vec![Cell::Number(1.0)],
            ],
        };
        let err = table.validate_rows().unwrap_err();
        assert!(matches!(
            err,
            AppError::DecodeRowLength {
                row: 1,
                expected: 2,
                actual: 1,
                ..
            }
        ));
    }
}
