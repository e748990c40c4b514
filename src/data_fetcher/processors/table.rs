//! Generic row decoding into record types
//!
//! Two strategies share one contract: every row must be exactly as long as the
//! header list, otherwise the whole table fails and no records are returned.
//!
//! * [`decode_named`] maps each header onto the record field declaring it.
//! * [`decode_positional`] uses a fixed column index map, for tables whose
//!   headers repeat.

use tracing::{debug, warn};

use crate::data_fetcher::models::{Record, ResultSet};
use crate::error::AppError;

/// Records decoded from one table together with the table's headers.
#[derive(Debug, Clone, PartialEq)]
pub struct Extracted<R> {
    pub records: Vec<R>,
    pub headers: Vec<String>,
}

impl<R> Extracted<R> {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }
}

/// Decodes a table by header name.
///
/// Headers with no matching field are ignored and fields with no header keep
/// their zero value. If a header appears twice the later column wins.
pub fn decode_named<R: Record>(table: &ResultSet) -> Result<Extracted<R>, AppError> {
    table.validate_rows()?;

    // Resolve header → field once per table.
    let plan: Vec<(usize, &'static str)> = table
        .headers
        .iter()
        .enumerate()
        .filter_map(|(index, header)| R::field_for_header(header).map(|name| (index, name)))
        .collect();

    if plan.is_empty() && !table.headers.is_empty() {
        warn!(
            "Table '{}' shares no headers with the expected record, all fields default",
            table.name
        );
    }

    let records = table
        .row_set
        .iter()
        .map(|row| {
            let mut record = R::default();
            for (index, name) in &plan {
                record.set_field(name, &row[*index]);
            }
            record
        })
        .collect::<Vec<_>>();

    debug!("Decoded {} rows from '{}'", records.len(), table.name);
    Ok(Extracted {
        records,
        headers: table.headers.clone(),
    })
}

/// Decodes a table through a fixed `(column index, field name)` map.
///
/// The table must have more columns than the largest mapped index.
pub fn decode_positional<R: Record>(
    table: &ResultSet,
    columns: &[(usize, &str)],
) -> Result<Extracted<R>, AppError> {
    table.validate_rows()?;

    if let Some(max) = columns.iter().map(|(index, _)| *index).max() {
        if max >= table.headers.len() {
            return Err(AppError::decode_schema(
                &table.name,
                format!(
                    "column {max} is mapped but the table has {} columns",
                    table.headers.len()
                ),
            ));
        }
    }

    let mut records = Vec::with_capacity(table.row_set.len());
    for row in &table.row_set {
        let mut record = R::default();
        for (index, name) in columns {
            if !record.set_field(name, &row[*index]) {
                return Err(AppError::decode_schema(
                    &table.name,
                    format!("column map names unknown field '{name}'"),
                ));
            }
        }
        records.push(record);
    }

    debug!("Decoded {} rows from '{}' by position", records.len(), table.name);
    Ok(Extracted {
        records,
        headers: table.headers.clone(),
    })
}

/// Keeps at most `cap` leading records.
pub fn cap_rows<R>(mut extracted: Extracted<R>, cap: usize) -> Extracted<R> {
    extracted.records.truncate(cap.min(extracted.records.len()));
    extracted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_fetcher::models::Cell;

    crate::stats_record! {
        pub struct Line {
            id: i64 = "ID", "Id";
            name: String = "NAME", "Name";
            pts: f64 = "PTS", "Pts";
        }
    }

    fn table(headers: &[&str], rows: Vec<Vec<Cell>>) -> ResultSet {
        ResultSet {
            name: "Lines".to_string(),
            headers: headers.iter().map(|h| h.to_string()).collect(),
            row_set: rows,
        }
    }

    fn num(n: f64) -> Cell {
        Cell::Number(n)
    }

    fn text(s: &str) -> Cell {
        Cell::Text(s.to_string())
    }

    #[test]
    fn test_decode_named_maps_by_header_and_ignores_unknown() {
        let t = table(
            &["EXTRA", "PTS", "ID", "NAME"],
            vec![vec![text("x"), num(27.5), num(8.0), text("Curry")]],
        );
        let out: Extracted<Line> = decode_named(&t).unwrap();
        assert_eq!(out.len(), 1);
        assert_eq!(out.records[0].id, 8);
        assert_eq!(out.records[0].name, "Curry");
        assert_eq!(out.records[0].pts, 27.5);
        assert_eq!(out.headers.len(), 4);
    }

    #[test]
    fn test_decode_named_missing_header_keeps_default() {
        let t = table(&["ID"], vec![vec![num(3.0)]]);
        let out: Extracted<Line> = decode_named(&t).unwrap();
        assert_eq!(out.records[0].name, "");
        assert_eq!(out.records[0].pts, 0.0);
    }

    #[test]
    fn test_decode_named_duplicate_header_last_wins() {
        let t = table(&["PTS", "PTS"], vec![vec![num(1.0), num(2.0)]]);
        let out: Extracted<Line> = decode_named(&t).unwrap();
        assert_eq!(out.records[0].pts, 2.0);
    }

    #[test]
    fn test_row_length_mismatch_fails_whole_table() {
        let t = table(
            &["ID", "NAME"],
            vec![
                vec![num(1.0), text("a")],
                vec![num(2.0), text("b"), num(9.0)],
            ],
        );
        let named = decode_named::<Line>(&t).unwrap_err();
        assert!(matches!(named, AppError::DecodeRowLength { row: 1, .. }));

        let positional = decode_positional::<Line>(&t, &[(0, "id")]).unwrap_err();
        assert!(matches!(positional, AppError::DecodeRowLength { .. }));
    }

    #[test]
    fn test_empty_table_decodes_to_no_records() {
        let t = table(&["ID", "NAME"], vec![]);
        assert!(decode_named::<Line>(&t).unwrap().is_empty());
    }

    #[test]
    fn test_decode_positional_reads_duplicate_headers_by_index() {
        let t = table(
            &["NAME", "PTS", "PTS", "ID"],
            vec![vec![text("Jokic"), num(1.0), num(26.4), num(15.0)]],
        );
        let out: Extracted<Line> =
            decode_positional(&t, &[(0, "name"), (2, "pts"), (3, "id")]).unwrap();
        assert_eq!(out.records[0].pts, 26.4);
        assert_eq!(out.records[0].id, 15);
    }

    #[test]
    fn test_decode_positional_rejects_short_table() {
        let t = table(&["NAME"], vec![vec![text("a")]]);
        let err = decode_positional::<Line>(&t, &[(0, "name"), (5, "pts")]).unwrap_err();
        assert!(matches!(err, AppError::DecodeSchema { .. }));
    }

    #[test]
    fn test_decode_positional_rejects_unknown_field() {
        let t = table(&["NAME"], vec![vec![text("a")]]);
        let err = decode_positional::<Line>(&t, &[(0, "nickname")]).unwrap_err();
        assert!(matches!(err, AppError::DecodeSchema { .. }));
    }

    #[test]
    fn test_cap_rows() {
        let rows = (0..7).map(|i| vec![num(i as f64)]).collect();
        let out: Extracted<Line> = decode_named(&table(&["ID"], rows)).unwrap();
        let capped = cap_rows(out, 5);
        assert_eq!(capped.len(), 5);
        assert_eq!(capped.records[4].id, 4);

        let rows = (0..2).map(|i| vec![num(i as f64)]).collect();
        let out: Extracted<Line> = decode_named(&table(&["ID"], rows)).unwrap();
        assert_eq!(cap_rows(out, 5).len(), 2);
    }
}
