//! Builders for stats API payloads used across unit and integration tests

use serde_json::{Value, json};

use crate::constants::cache::MIN_CACHED_BYTES;
use crate::data_fetcher::models::{Cell, ResponseEnvelope, ResultSet};

/// Converts a JSON array into row cells. Non-array values yield an empty row.
pub fn cells(row: Value) -> Vec<Cell> {
    match row {
        Value::Array(values) => values
            .into_iter()
            .map(|v| match v {
                Value::Number(n) => Cell::Number(n.as_f64().unwrap_or_default()),
                Value::String(s) => Cell::Text(s),
                Value::Bool(b) => Cell::Number(if b { 1.0 } else { 0.0 }),
                _ => Cell::Null,
            })
            .collect(),
        _ => Vec::new(),
    }
}

/// A table with the given headers and JSON array rows.
pub fn table_with_rows(name: &str, headers: &[&str], rows: Vec<Value>) -> ResultSet {
    ResultSet {
        name: name.to_string(),
        headers: headers.iter().map(|h| h.to_string()).collect(),
        row_set: rows.into_iter().map(cells).collect(),
    }
}

/// Envelope of a single-table endpoint (`resultSet`).
pub fn single_table_envelope(resource: &str, table: ResultSet) -> ResponseEnvelope {
    ResponseEnvelope {
        resource: resource.to_string(),
        result_set: Some(table),
        ..Default::default()
    }
}

/// Envelope of a multi-table endpoint (`resultSets`).
pub fn multi_table_envelope(resource: &str, tables: Vec<ResultSet>) -> ResponseEnvelope {
    ResponseEnvelope {
        resource: resource.to_string(),
        result_sets: Some(tables),
        ..Default::default()
    }
}

/// Serializes an envelope, padding `parameters` so the body is large enough
/// to count as a cache entry.
pub fn envelope_body(envelope: &ResponseEnvelope) -> Vec<u8> {
    let mut padded = envelope.clone();
    padded.parameters = json!({ "Padding": " ".repeat(MIN_CACHED_BYTES as usize) });
    serde_json::to_vec(&padded).unwrap_or_default()
}

/// League leaders envelope with `count` players, points descending from 30.
pub fn leaders_envelope(count: usize) -> ResponseEnvelope {
    let rows = (0..count)
        .map(|i| {
            json!([
                1_000_000 + i,
                i + 1,
                format!("Player {}", i + 1),
                "BOS",
                60.0,
                34.5,
                0.5 - i as f64 / 100.0,
                30.0 - i as f64
            ])
        })
        .collect();
    single_table_envelope(
        "leagueleaders",
        table_with_rows(
            "LeagueLeaders",
            &["PLAYER_ID", "RANK", "PLAYER", "TEAM", "GP", "MIN", "FG_PCT", "PTS"],
            rows,
        ),
    )
}

/// Standings envelope in the 39-column layout, one row per
/// `(city, name, wins, losses, win_pct)`.
pub fn standings_envelope(teams: &[(&str, &str, i64, i64, f64)]) -> ResponseEnvelope {
    const WIDTH: usize = 39;
    let mut headers: Vec<String> = (0..WIDTH).map(|i| format!("COL{i}")).collect();
    for (index, header) in [
        (2, "TeamID"),
        (3, "TeamCity"),
        (4, "TeamName"),
        (6, "Conference"),
        (13, "WINS"),
        (14, "LOSSES"),
        (15, "WinPCT"),
        // Repeated display headers, as upstream sends them.
        (18, "HOME"),
        (19, "ROAD"),
        (21, "HOME"),
        (22, "ROAD"),
    ] {
        headers[index] = header.to_string();
    }

    let row_set = teams
        .iter()
        .enumerate()
        .map(|(i, (city, name, wins, losses, pct))| {
            let mut row = vec![Cell::Null; WIDTH];
            row[2] = Cell::Number(1_610_612_700.0 + i as f64);
            row[3] = Cell::Text(city.to_string());
            row[4] = Cell::Text(name.to_string());
            row[6] = Cell::Text("East".to_string());
            row[13] = Cell::Number(*wins as f64);
            row[14] = Cell::Number(*losses as f64);
            row[15] = Cell::Number(*pct);
            row[18] = Cell::Text("30-11".to_string());
            row[19] = Cell::Text("20-21".to_string());
            row[21] = Cell::Text("ignored".to_string());
            row
        })
        .collect();

    multi_table_envelope(
        "leaguestandingsv3",
        vec![ResultSet {
            name: "Standings".to_string(),
            headers,
            row_set,
        }],
    )
}

/// Scoreboard with one finished game, GSW at LAL, 105-115.
pub fn scoreboard_envelope() -> ResponseEnvelope {
    let games = table_with_rows(
        "GameHeader",
        &[
            "GAME_DATE_EST",
            "GAME_SEQUENCE",
            "GAME_ID",
            "GAME_STATUS_ID",
            "GAME_STATUS_TEXT",
            "HOME_TEAM_ID",
            "VISITOR_TEAM_ID",
        ],
        vec![json!([
            "2025-01-15T00:00:00",
            1,
            "0022400061",
            3,
            "Final",
            1610612747,
            1610612744
        ])],
    );
    let lines = table_with_rows(
        "LineScore",
        &["GAME_ID", "TEAM_ID", "TEAM_ABBREVIATION", "TEAM_WINS_LOSSES", "PTS"],
        vec![
            json!(["0022400061", 1610612744, "GSW", "20-21", 105]),
            json!(["0022400061", 1610612747, "LAL", "25-16", 115]),
        ],
    );
    multi_table_envelope("scoreboardv2", vec![games, lines])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_body_is_cacheable_and_decodes() {
        let body = envelope_body(&leaders_envelope(3));
        assert!(body.len() as u64 >= MIN_CACHED_BYTES);

        let decoded = ResponseEnvelope::decode(&body).unwrap();
        assert_eq!(decoded.single_table().unwrap().row_set.len(), 3);
    }

    #[test]
    fn test_standings_rows_match_headers() {
        let envelope = standings_envelope(&[("Boston", "Celtics", 64, 18, 0.78)]);
        envelope.table_named("Standings").unwrap().validate_rows().unwrap();
    }
}
