use std::io::Cursor;

use calamine::{Data, Reader, Xlsx, open_workbook_from_rs};
use serde_json::{Map, Value};

use crate::core::EsgError;

pub(crate) fn is_spreadsheet(path: &str) -> bool {
    path.ends_with(".xlsx")
}

/// Turns a backend file into preview text: the first sheet of a workbook as pretty JSON
/// rows, anything else decoded as UTF-8 (invalid sequences replaced).
pub(crate) fn preview_text(path: &str, bytes: &[u8]) -> Result<String, EsgError> {
    if !is_spreadsheet(path) {
        return Ok(String::from_utf8_lossy(bytes).into_owned());
    }
    let rows = sheet_rows(bytes)?;
    Ok(serde_json::to_string_pretty(&rows)?)
}

/// Rows of the first sheet as objects keyed by the header row. Empty cells are left out
/// and rows without any value are skipped.
fn sheet_rows(bytes: &[u8]) -> Result<Vec<Value>, EsgError> {
    let mut workbook: Xlsx<_> = open_workbook_from_rs(Cursor::new(bytes))
        .map_err(|e| EsgError::Data(format!("unreadable workbook: {e}")))?;
    let range = match workbook.worksheet_range_at(0) {
        Some(range) => range.map_err(|e| EsgError::Data(format!("unreadable sheet: {e}")))?,
        None => return Ok(Vec::new()),
    };

    let mut rows = range.rows();
    let Some(header) = rows.next() else {
        return Ok(Vec::new());
    };
    let keys = header_keys(header);

    let mut out = Vec::new();
    for row in rows {
        let mut obj = Map::new();
        for (key, cell) in keys.iter().zip(row) {
            if let Some(v) = cell_value(cell) {
                obj.insert(key.clone(), v);
            }
        }
        if !obj.is_empty() {
            out.push(Value::Object(obj));
        }
    }
    Ok(out)
}

fn header_keys(header: &[Data]) -> Vec<String> {
    let mut keys: Vec<String> = Vec::with_capacity(header.len());
    let mut empty = 0;
    for cell in header {
        let name = cell.to_string().trim().to_string();
        let key = if name.is_empty() {
            let key = if empty == 0 {
                "__EMPTY".to_string()
            } else {
                format!("__EMPTY_{empty}")
            };
            empty += 1;
            key
        } else {
            let mut key = name.clone();
            let mut n = 1;
            while keys.contains(&key) {
                key = format!("{name}_{n}");
                n += 1;
            }
            key
        };
        keys.push(key);
    }
    keys
}

#[allow(clippy::cast_possible_truncation)]
fn cell_value(cell: &Data) -> Option<Value> {
    // Whole floats print as integers, the way spreadsheet JSON exports show them.
    const MAX_EXACT: f64 = 9_007_199_254_740_992.0;
    match cell {
        Data::Empty => None,
        Data::String(s) if s.is_empty() => None,
        Data::String(s) => Some(Value::String(s.clone())),
        Data::Int(i) => Some(Value::from(*i)),
        Data::Float(f) if f.fract() == 0.0 && f.abs() < MAX_EXACT => Some(Value::from(*f as i64)),
        Data::Float(f) => serde_json::Number::from_f64(*f).map(Value::Number),
        Data::Bool(b) => Some(Value::Bool(*b)),
        other => Some(Value::String(other.to_string())),
    }
}
