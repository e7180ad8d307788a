//! Plain-text rendering of result sets.

use serde_json::Value;

use crate::types::ResultSet;

/// Text shown for one cell.
pub fn cell_text(v: &Value) -> String {
    match v {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Array(items) => items.iter().map(cell_text).collect::<Vec<_>>().join(", "),
        other => other.to_string(),
    }
}

/// Render a header, a separator, and one padded line per row.
pub fn format_table(results: &ResultSet) -> String {
    let cells: Vec<Vec<String>> = results
        .rows
        .iter()
        .map(|row| row.iter().map(|v| cell_text(v).replace('\n', " ")).collect())
        .collect();

    let mut widths: Vec<usize> = results.columns.iter().map(|c| c.label.chars().count()).collect();
    for row in &cells {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    let header: Vec<&str> = results.columns.iter().map(|c| c.label).collect();
    push_line(&mut out, header.iter().copied(), &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    push_line(&mut out, rule.iter().map(String::as_str), &widths);
    for row in &cells {
        push_line(&mut out, row.iter().map(String::as_str), &widths);
    }
    out
}

fn push_line<'a>(out: &mut String, cells: impl Iterator<Item = &'a str>, widths: &[usize]) {
    let line: Vec<String> = cells
        .zip(widths)
        .map(|(cell, w)| format!("{:<width$}", cell, width = *w))
        .collect();
    out.push_str(line.join("  ").trim_end());
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Column, UserRecord, BY_SKILLS_COLUMNS};
    use serde_json::json;

    const TWO: &[Column] = &[
        Column { key: "UserID", label: "UserID" },
        Column { key: "Name", label: "Name" },
    ];

    fn rs(columns: &'static [Column], rows: Vec<Value>) -> ResultSet {
        let records: Vec<UserRecord> = rows
            .into_iter()
            .map(|v| match v {
                Value::Object(m) => UserRecord(m),
                _ => panic!("not an object"),
            })
            .collect();
        ResultSet::project(columns, &records)
    }

    #[test]
    fn test_cell_text() {
        assert_eq!(cell_text(&Value::Null), "");
        assert_eq!(cell_text(&json!("Ada")), "Ada");
        assert_eq!(cell_text(&json!(42)), "42");
        assert_eq!(cell_text(&json!(["rust", "sql"])), "rust, sql");
    }

    #[test]
    fn test_format_table_pads_columns() {
        let table = format_table(&rs(
            TWO,
            vec![json!({ "UserID": 42, "Name": "Ada" }), json!({ "UserID": 7, "Name": "Grace" })],
        ));
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "UserID  Name");
        assert_eq!(lines[1], "------  -----");
        assert_eq!(lines[2], "42      Ada");
        assert_eq!(lines[3], "7       Grace");
    }

    #[test]
    fn test_format_table_missing_fields_blank() {
        let table = format_table(&rs(BY_SKILLS_COLUMNS, vec![json!({ "UserID": 1 })]));
        let row = table.lines().nth(2).unwrap();
        assert_eq!(row, "1");
    }
}
