//! CSV ↔ JSON structural conversion.
//!
//! CSV parsing and writing is delegated to the `csv` crate; this module only
//! decides the structural mapping. JSON objects keep the CSV column order
//! (serde_json is built with `preserve_order`).

use anyhow::{Context, Result, bail};
use serde_json::{Map, Value};

/// Infer a JSON value from one CSV cell: integer, float, bool, null for an
/// empty cell, else string. Leading zeros ("007") stay strings so ids are
/// not mangled.
fn infer_cell(cell: &str) -> Value {
    if cell.is_empty() {
        return Value::Null;
    }
    match cell {
        "true" | "TRUE" | "True" => return Value::Bool(true),
        "false" | "FALSE" | "False" => return Value::Bool(false),
        _ => {}
    }
    let keeps_form = |canonical: String| canonical == cell;
    if let Ok(i) = cell.parse::<i64>() {
        if keeps_form(i.to_string()) {
            return Value::from(i);
        }
    }
    // Floats must look like floats ("91.5", "1e5"); otherwise "007" would
    // come back as the number 7.
    if cell.contains(['.', 'e', 'E']) {
        if let Ok(f) = cell.parse::<f64>() {
            if f.is_finite() {
                return Value::from(f);
            }
        }
    }
    Value::String(cell.to_string())
}

/// Parse CSV text into a JSON array of objects. The first record is the
/// header; object key order follows column order.
pub fn csv_to_json(input: &str, delimiter: u8) -> Result<Value> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .from_reader(input.as_bytes());
    let headers: Vec<String> = reader
        .headers()
        .context("Failed to read CSV header")?
        .iter()
        .map(str::to_string)
        .collect();
    if headers.is_empty() {
        bail!("CSV input has no header row");
    }

    let mut rows = Vec::new();
    for (idx, record) in reader.records().enumerate() {
        let record = record.with_context(|| format!("Malformed CSV record {}", idx + 2))?;
        let mut obj = Map::new();
        for (col, header) in headers.iter().enumerate() {
            let cell = record.get(col).unwrap_or("");
            obj.insert(header.clone(), infer_cell(cell));
        }
        rows.push(Value::Object(obj));
    }
    Ok(Value::Array(rows))
}

fn cell_string(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        // Nested arrays/objects serialize compactly into a single cell.
        other => other.to_string(),
    }
}

/// Render a JSON array of objects as CSV text. The header is the union of
/// keys in first-seen order; missing keys become empty cells.
pub fn json_to_csv(input: &Value, delimiter: u8) -> Result<String> {
    let Value::Array(rows) = input else {
        bail!("JSON input must be an array of objects");
    };

    let mut headers: Vec<String> = Vec::new();
    for (idx, row) in rows.iter().enumerate() {
        let Value::Object(obj) = row else {
            bail!("JSON array element {} is not an object", idx);
        };
        for key in obj.keys() {
            if !headers.iter().any(|h| h == key) {
                headers.push(key.clone());
            }
        }
    }
    if headers.is_empty() {
        bail!("JSON input contains no object keys");
    }

    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(Vec::new());
    writer.write_record(&headers)?;
    for row in rows {
        // Checked above: every element is an object.
        let obj = row.as_object().unwrap();
        let record: Vec<String> = headers
            .iter()
            .map(|h| obj.get(h).map(cell_string).unwrap_or_default())
            .collect();
        writer.write_record(&record)?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("Failed to flush CSV output: {}", e))?;
    String::from_utf8(bytes).context("CSV output is not valid UTF-8")
}

/// Parse a JSON string and render it as CSV.
pub fn json_str_to_csv(input: &str, delimiter: u8) -> Result<String> {
    let value: Value = serde_json::from_str(input).context("Invalid JSON input")?;
    json_to_csv(&value, delimiter)
}
