use std::fmt::Write as _;

use crate::data::model::Record;

// ---------------------------------------------------------------------------
// Plain-text rendering
// ---------------------------------------------------------------------------

const RULE: &str = "*****";
const NO_RESULTS: &str = "No Results";

/// Render job records as `*****`-delimited blocks, one `field: value` line per
/// column in `headers` order.
pub fn render_records(records: &[&Record], headers: &[String]) -> String {
    if records.is_empty() {
        return format!("{NO_RESULTS}\n");
    }

    let mut out = String::new();
    for (i, record) in records.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(RULE);
        out.push('\n');
        if headers.is_empty() {
            for (field, value) in record.iter() {
                let _ = writeln!(out, "{field}: {value}");
            }
        } else {
            for field in headers {
                let value = record.get(field).unwrap_or_default();
                let _ = writeln!(out, "{field}: {value}");
            }
        }
        out.push_str(RULE);
        out.push('\n');
    }
    out
}

/// Render the values of one column under a `*** All <Column> Values ***` banner.
pub fn render_values(column: &str, values: &[String]) -> String {
    let mut out = format!("\n*** All {} Values ***\n", title_case(column));
    if values.is_empty() {
        out.push_str(NO_RESULTS);
        out.push('\n');
    }
    for value in values {
        out.push_str(value);
        out.push('\n');
    }
    out
}

pub fn render_fields(fields: &[String]) -> String {
    fields.iter().map(|f| format!("{f}\n")).collect()
}

/// `core competency` → `Core Competency`.
pub fn title_case(text: &str) -> String {
    text.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

// ---------------------------------------------------------------------------
// JSON rendering
// ---------------------------------------------------------------------------

pub fn records_json(records: &[&Record]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(records)
}

pub fn values_json(values: &[String]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(values)
}
